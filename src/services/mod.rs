//! Business logic services.
//!
//! Services validate filter values and select records from the static
//! datasets, separated from HTTP handlers.

pub mod transaction_service;
pub mod user_service;
