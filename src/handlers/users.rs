//! User HTTP handlers.
//!
//! - GET /api/users - List all users (`userType` is validated, then ignored)

use axum::Json;
use serde_json::Value;

use crate::{
    app::ServiceKind,
    error::AppError,
    handlers::{QueryPairs, first_param},
    services::user_service,
};

/// List users.
///
/// # Endpoint
///
/// `GET /api/users`
///
/// # Query Parameters
///
/// - `userType` (optional) - `ACTIVE` or `INACTIVE`, any case. Has no effect
///   on the result: all three users are always returned.
///
/// # Response
///
/// - **Success (200 OK)**: JSON array of users ordered by id
/// - **Error (400)**: Unknown user type
/// - **Error (500)**: Response could not be built
pub async fn list_users(query: QueryPairs) -> Result<Json<Value>, AppError> {
    let user_type = first_param(query, ServiceKind::Users.filter_param())?;

    let users = user_service::list_users(user_type.as_deref())?;

    Ok(Json(serde_json::to_value(users)?))
}
