//! HTTP middleware components.
//!
//! Middleware wrap every route handler. Here they:
//! - Answer CORS preflight requests
//! - Add hardening and anti-caching headers to responses

/// CORS layer for the public API
pub mod cors;
/// Security and cache-control headers
pub mod security_headers;
