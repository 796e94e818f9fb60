//! Service selection and HTTP router assembly.
//!
//! Both APIs share the same shape: a documentation root, a health check and
//! one listing endpoint with a single optional filter. `ServiceKind`
//! describes the differences and `router` wires the handlers for one of them.

use std::{fmt, str::FromStr};

use axum::{
    Router, middleware as axum_middleware,
    routing::{MethodRouter, get},
};
use serde::{Deserialize, Deserializer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::{
    config::Config,
    handlers, middleware,
    models::{transaction::TransactionType, user::UserType},
};

/// Which API a process serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceKind {
    #[default]
    Transactions,
    Users,
}

impl ServiceKind {
    /// Human-readable API name, e.g. "Transactions API"
    pub fn name(self) -> &'static str {
        match self {
            ServiceKind::Transactions => "Transactions API",
            ServiceKind::Users => "Users API",
        }
    }

    pub fn health_message(self) -> String {
        format!("{} is running", self.name())
    }

    /// Path of the listing endpoint
    pub fn listing_path(self) -> &'static str {
        match self {
            ServiceKind::Transactions => "/api/transactions",
            ServiceKind::Users => "/api/users",
        }
    }

    /// Name of the optional filter query parameter
    pub fn filter_param(self) -> &'static str {
        match self {
            ServiceKind::Transactions => "transactionType",
            ServiceKind::Users => "userType",
        }
    }

    /// Accepted filter values, in canonical upper case
    pub fn filter_values(self) -> Vec<&'static str> {
        match self {
            ServiceKind::Transactions => TransactionType::ALL.iter().map(|t| t.as_str()).collect(),
            ServiceKind::Users => UserType::ALL.iter().map(|t| t.as_str()).collect(),
        }
    }

    /// Named example request paths for the documentation endpoint.
    pub fn examples(self) -> Vec<(&'static str, String)> {
        let path = self.listing_path();
        let param = self.filter_param();
        let (all, filtered): (&str, [&str; 2]) = match self {
            ServiceKind::Transactions => ("all_transactions", ["credit_only", "debit_only"]),
            ServiceKind::Users => ("all_users", ["active_users", "inactive_users"]),
        };

        let mut examples = vec![(all, path.to_string())];
        examples.extend(
            filtered
                .into_iter()
                .zip(self.filter_values())
                .map(|(name, value)| (name, format!("{path}?{param}={value}"))),
        );
        examples
    }

    fn listing_route(self) -> MethodRouter<ServiceKind> {
        match self {
            ServiceKind::Transactions => get(handlers::transactions::list_transactions),
            ServiceKind::Users => get(handlers::users::list_users),
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown service '{0}', expected 'transactions' or 'users'")]
pub struct UnknownService(pub String);

impl FromStr for ServiceKind {
    type Err = UnknownService;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "transactions" => Ok(ServiceKind::Transactions),
            "users" => Ok(ServiceKind::Users),
            _ => Err(UnknownService(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for ServiceKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Build the HTTP router for the configured service.
///
/// # Routes
///
/// - `GET /` - API documentation
/// - `GET /api/health` - health check
/// - `GET /api/transactions` or `GET /api/users` - listing with optional filter
///
/// Unknown paths get a JSON 404, known paths with another method a JSON 405.
///
/// # Layers (innermost first)
///
/// 1. CORS (answers preflight requests)
/// 2. Security and anti-caching headers on every response
/// 3. Request tracing
pub fn router(config: &Config) -> Router {
    let kind = config.service;
    let level = if config.debug { Level::DEBUG } else { Level::INFO };

    Router::new()
        .route("/", get(handlers::docs::api_documentation))
        .route("/api/health", get(handlers::health::health_check))
        .route(kind.listing_path(), kind.listing_route())
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(middleware::cors::cors_layer())
        .layer(axum_middleware::from_fn(
            middleware::security_headers::security_headers,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(level))
                .on_response(DefaultOnResponse::new().level(level)),
        )
        // Handlers read the service descriptor via State extraction
        .with_state(kind)
}
