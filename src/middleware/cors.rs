//! Cross-origin resource sharing policy.

use axum::http::{HeaderName, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Public API policy: any origin, no credentials.
///
/// Allowed request headers are `Content-Type`, `Authorization` and
/// `Access-Control-Allow-Credentials`.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("access-control-allow-credentials"),
        ])
        .allow_credentials(false)
}
