//! Hardening and anti-caching response headers.
//!
//! This middleware runs around every route, including the fallback and
//! error responses, and:
//! 1. Lets the request through untouched
//! 2. Stamps the fixed header set onto the response

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue, header},
    middleware::Next,
    response::Response,
};

/// Headers set on every response, overriding any handler-provided value.
pub const SECURITY_HEADERS: [(HeaderName, &str); 6] = [
    (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
    (header::X_FRAME_OPTIONS, "DENY"),
    (header::X_XSS_PROTECTION, "1; mode=block"),
    (header::CACHE_CONTROL, "no-cache, no-store, must-revalidate"),
    (header::PRAGMA, "no-cache"),
    (header::EXPIRES, "0"),
];

/// Security header middleware function.
///
/// # Arguments
///
/// * `request` - Incoming HTTP request
/// * `next` - Next middleware/handler in the chain
pub async fn security_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    let headers = response.headers_mut();
    for (name, value) in SECURITY_HEADERS {
        headers.insert(name, HeaderValue::from_static(value));
    }

    response
}
