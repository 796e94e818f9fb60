//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Error Categories
///
/// - **Validation Errors**: a filter value outside its accepted set
/// - **Internal Errors**: anything unexpected while building a response
/// - **Routing Errors**: a path no route serves, or a method a route doesn't serve
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A query parameter carried a value outside its closed set.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String is the full client-facing message, naming the valid values.
    #[error("{0}")]
    Validation(String),

    /// Unanticipated failure while building the response.
    ///
    /// Returns HTTP 500 Internal Server Error.
    #[error("Internal server error: {0}")]
    Internal(String),

    /// No route matched the request path.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Not found")]
    NotFound,

    /// The path exists but not for this HTTP method.
    ///
    /// Returns HTTP 405 Method Not Allowed.
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": "Human-readable error message"
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `Validation` → 400 Bad Request
/// - `Internal` → 500 Internal Server Error
/// - `NotFound` → 404 Not Found
/// - `MethodNotAllowed` → 405 Method Not Allowed
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Validation(ref msg) => {
                tracing::warn!(error = %msg, "Rejected request parameter");
                StatusCode::BAD_REQUEST
            }
            AppError::Internal(ref msg) => {
                tracing::error!(error = %msg, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        };

        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        let cases = [
            (AppError::Validation("bad".into()), StatusCode::BAD_REQUEST),
            (
                AppError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (AppError::NotFound, StatusCode::NOT_FOUND),
            (AppError::MethodNotAllowed, StatusCode::METHOD_NOT_ALLOWED),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn internal_message_carries_description() {
        let err = AppError::Internal("disk on fire".into());
        assert_eq!(err.to_string(), "Internal server error: disk on fire");
    }

    #[test]
    fn serde_errors_become_internal() {
        let json_err = serde_json::from_str::<u8>("not json").unwrap_err();
        assert!(matches!(AppError::from(json_err), AppError::Internal(_)));
    }
}
