//! Health check endpoint for service monitoring.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::app::ServiceKind;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "healthy"
    pub status: &'static str,

    /// e.g. "Transactions API is running"
    pub message: String,
}

/// Health check handler.
///
/// No dependencies are probed, the datasets are compiled in.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "message": "Transactions API is running"
/// }
/// ```
pub async fn health_check(State(kind): State<ServiceKind>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: kind.health_message(),
    })
}
