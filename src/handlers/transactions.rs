//! Transaction HTTP handlers.
//!
//! This module implements the transaction listing endpoint:
//! - GET /api/transactions - List transactions, optionally by type

use axum::Json;
use serde_json::Value;

use crate::{
    app::ServiceKind,
    error::AppError,
    handlers::{QueryPairs, first_param},
    services::transaction_service,
};

/// List transactions.
///
/// # Endpoint
///
/// `GET /api/transactions`
///
/// # Query Parameters
///
/// - `transactionType` (optional) - `CREDIT` or `DEBIT`, any case. When
///   repeated, the first value is used.
///
/// # Response
///
/// - **Success (200 OK)**: JSON array of transactions in dataset order
/// - **Error (400)**: Unknown transaction type
/// - **Error (500)**: Response could not be built
///
/// ```json
/// [
///   {
///     "accountNumber": "12312",
///     "type": "New Account Deposit",
///     "amount": 1232.11,
///     "debitCredit": "C",
///     ...
///   }
/// ]
/// ```
pub async fn list_transactions(query: QueryPairs) -> Result<Json<Value>, AppError> {
    let transaction_type = first_param(query, ServiceKind::Transactions.filter_param())?;

    let transactions = transaction_service::list_transactions(transaction_type.as_deref())?;

    Ok(Json(serde_json::to_value(transactions)?))
}
