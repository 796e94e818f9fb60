//! Static datasets.
//!
//! Both datasets are `static` arrays built at compile time. Every request
//! borrows them read-only, so no pool, lock or lazy initialization is needed.

pub mod transactions;
pub mod users;

pub use transactions::TRANSACTIONS;
pub use users::USERS;
