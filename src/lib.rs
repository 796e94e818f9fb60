//! Sample Records API
//!
//! Two read-only JSON services over fixed in-memory datasets: a list of
//! financial transactions and a list of user profiles. Each service exposes
//! a documentation root, a health check and one listing endpoint with an
//! optional single-field filter.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Data**: `static` arrays compiled into the binary, shared read-only
//! - **Format**: JSON responses with hardening and anti-caching headers

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
