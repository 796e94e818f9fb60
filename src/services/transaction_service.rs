//! Transaction service - filtering logic for the Transactions API.
//!
//! This service handles:
//! - Validating the `transactionType` filter value
//! - Selecting transactions by their debit/credit marker
//!
//! # Ordering Guarantees
//!
//! Results always keep dataset order. Filtering only removes records.

use crate::{
    data::TRANSACTIONS,
    error::AppError,
    models::transaction::{Transaction, TransactionType},
};

/// Parse an optional raw `transactionType` value.
///
/// # Returns
///
/// - `Ok(None)` when the parameter is absent or empty
/// - `Ok(Some(_))` for any casing of `CREDIT` / `DEBIT`
///
/// # Errors
///
/// - `Validation`: any other non-empty value
pub fn parse_transaction_type(raw: Option<&str>) -> Result<Option<TransactionType>, AppError> {
    match raw {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(|_| {
            AppError::Validation(format!(
                "Invalid transaction type. Valid values are: {}",
                valid_values()
            ))
        }),
    }
}

fn valid_values() -> String {
    TransactionType::ALL
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Keep the transactions whose marker matches the filter.
///
/// With no filter, every transaction is returned.
pub fn filter_transactions(
    transactions: &[Transaction],
    transaction_type: Option<TransactionType>,
) -> Vec<&Transaction> {
    match transaction_type {
        None => transactions.iter().collect(),
        Some(t) => transactions
            .iter()
            .filter(|tx| tx.debit_credit == t.marker())
            .collect(),
    }
}

/// Validate the raw filter value, then filter the static dataset.
///
/// # Process
///
/// 1. Parse the filter (fails fast on an unknown value)
/// 2. Filter the sample transactions
///
/// # Errors
///
/// - `Validation`: filter value outside `CREDIT` / `DEBIT`
pub fn list_transactions(raw: Option<&str>) -> Result<Vec<&'static Transaction>, AppError> {
    let transaction_type = parse_transaction_type(raw)?;
    let transactions = filter_transactions(&TRANSACTIONS, transaction_type);

    tracing::debug!(
        filter = ?transaction_type,
        count = transactions.len(),
        "Filtered transactions"
    );

    Ok(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::transaction::DebitCredit;

    #[test]
    fn absent_or_empty_filter_is_none() {
        assert_eq!(parse_transaction_type(None).unwrap(), None);
        assert_eq!(parse_transaction_type(Some("")).unwrap(), None);
    }

    #[test]
    fn invalid_filter_names_valid_values() {
        let err = parse_transaction_type(Some("BOGUS")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid transaction type. Valid values are: CREDIT, DEBIT"
        );
    }

    #[test]
    fn every_filter_returns_only_matching_markers() {
        for t in TransactionType::ALL {
            let result = filter_transactions(&TRANSACTIONS, Some(t));
            assert!(!result.is_empty());
            assert!(result.iter().all(|tx| tx.debit_credit == t.marker()));

            let expected = TRANSACTIONS
                .iter()
                .filter(|tx| tx.debit_credit == t.marker())
                .count();
            assert_eq!(result.len(), expected);
        }
    }

    #[test]
    fn no_filter_returns_everything_in_order() {
        let result = filter_transactions(&TRANSACTIONS, None);
        let expected: Vec<&Transaction> = TRANSACTIONS.iter().collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn filtering_preserves_order() {
        let credits = list_transactions(Some("credit")).unwrap();
        let refs: Vec<_> = credits.iter().map(|tx| tx.reference_number).collect();
        assert_eq!(refs, ["12345 - 111", "DD001 - 456"]);
    }

    #[test]
    fn debit_lowercase() {
        let debits = list_transactions(Some("debit")).unwrap();
        assert_eq!(debits.len(), 2);
        assert!(debits.iter().all(|tx| tx.debit_credit == DebitCredit::Debit));
    }

    #[test]
    fn filter_over_empty_slice() {
        assert!(filter_transactions(&[], Some(TransactionType::Credit)).is_empty());
    }
}
