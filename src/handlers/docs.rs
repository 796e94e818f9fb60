//! Root documentation endpoint.

use axum::{Json, extract::State};
use serde_json::{Map, Value, json};

use crate::app::ServiceKind;

/// Documentation document version
pub const API_VERSION: &str = "1.0.0";

/// Describe the routes served by `kind`.
///
/// Built from the same `ServiceKind` the router uses, so the listing path,
/// parameter name and accepted values cannot drift from the routing table.
pub fn documentation(kind: ServiceKind) -> Value {
    let examples: Map<String, Value> = kind
        .examples()
        .into_iter()
        .map(|(name, path)| (name.to_string(), Value::String(path)))
        .collect();

    let mut parameters = Map::new();
    parameters.insert(
        kind.filter_param().to_string(),
        json!({
            "type": "string",
            "required": false,
            "description": format!("Filter by {}", filter_subject(kind)),
            "enum": kind.filter_values(),
        }),
    );

    let mut endpoints = Map::new();
    endpoints.insert(
        kind.listing_path().to_string(),
        json!({
            "method": "GET",
            "description": format!("Get {} with optional filtering", collection(kind)),
            "parameters": parameters,
            "examples": examples,
        }),
    );
    endpoints.insert(
        "/api/health".to_string(),
        json!({
            "method": "GET",
            "description": "Health check endpoint",
        }),
    );

    json!({
        "message": kind.name(),
        "version": API_VERSION,
        "endpoints": endpoints,
    })
}

fn collection(kind: ServiceKind) -> &'static str {
    match kind {
        ServiceKind::Transactions => "transactions",
        ServiceKind::Users => "users",
    }
}

fn filter_subject(kind: ServiceKind) -> &'static str {
    match kind {
        ServiceKind::Transactions => "transaction type",
        ServiceKind::Users => "user type (accepted but not applied)",
    }
}

/// API documentation handler.
///
/// # Endpoint
///
/// `GET /`
pub async fn api_documentation(State(kind): State<ServiceKind>) -> Json<Value> {
    Json(documentation(kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_docs_match_descriptor() {
        let doc = documentation(ServiceKind::Transactions);
        assert_eq!(doc["message"], "Transactions API");
        assert_eq!(doc["version"], "1.0.0");

        let listing = &doc["endpoints"]["/api/transactions"];
        assert_eq!(listing["method"], "GET");
        assert_eq!(
            listing["parameters"]["transactionType"]["enum"],
            json!(["CREDIT", "DEBIT"])
        );
        assert_eq!(listing["parameters"]["transactionType"]["required"], false);
        assert_eq!(
            listing["examples"]["credit_only"],
            "/api/transactions?transactionType=CREDIT"
        );
        assert_eq!(doc["endpoints"]["/api/health"]["method"], "GET");
    }

    #[test]
    fn user_docs_list_user_route_only() {
        let doc = documentation(ServiceKind::Users);
        let endpoints = doc["endpoints"].as_object().unwrap();
        assert!(endpoints.contains_key("/api/users"));
        assert!(!endpoints.contains_key("/api/transactions"));
        assert_eq!(
            doc["endpoints"]["/api/users"]["parameters"]["userType"]["enum"],
            json!(["ACTIVE", "INACTIVE"])
        );
    }
}
