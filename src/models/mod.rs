//! Data models served by the APIs.
//!
//! Records are plain `'static` data; query types describe the accepted
//! filter parameters.

/// Financial transaction records and the transaction type filter
pub mod transaction;
/// User profile records and the user type filter
pub mod user;
