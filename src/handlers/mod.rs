//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (query string, shared state)
//! 2. Calls into the services for validation and filtering
//! 3. Returns HTTP response (JSON, status code)

use axum::extract::{Query, rejection::QueryRejection};

use crate::error::AppError;

/// Root documentation endpoint
pub mod docs;
/// Health check endpoint
pub mod health;
/// Transaction listing endpoint
pub mod transactions;
/// User listing endpoint
pub mod users;

/// Query string as raw `(key, value)` pairs in request order.
///
/// Repeated keys are kept rather than rejected; `first_param` picks one.
pub type QueryPairs = Result<Query<Vec<(String, String)>>, QueryRejection>;

/// First value given for `name`, or `None` when the key is absent.
///
/// # Errors
///
/// - `Validation`: the query string could not be decoded at all
pub fn first_param(query: QueryPairs, name: &str) -> Result<Option<String>, AppError> {
    let Query(pairs) = query.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    Ok(pairs
        .into_iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value))
}

/// Fallback for paths outside the routing table.
pub async fn not_found() -> AppError {
    AppError::NotFound
}

/// Fallback for known paths hit with a method they don't serve.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> QueryPairs {
        Ok(Query(
            raw.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        ))
    }

    #[test]
    fn first_value_wins_on_repeats() {
        let query = pairs(&[
            ("transactionType", "DEBIT"),
            ("transactionType", "BOGUS"),
        ]);
        assert_eq!(
            first_param(query, "transactionType").unwrap().as_deref(),
            Some("DEBIT")
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        let query = pairs(&[("page", "2"), ("userType", "active")]);
        assert_eq!(
            first_param(query, "userType").unwrap().as_deref(),
            Some("active")
        );
        assert_eq!(first_param(pairs(&[("page", "2")]), "userType").unwrap(), None);
    }
}
