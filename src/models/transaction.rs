//! Transaction data models and filter types.
//!
//! This module defines:
//! - `Transaction`: a posted account transaction as served by the API
//! - `DebitCredit`: the single-character money-in / money-out marker
//! - `TransactionType`: the closed set accepted by the `transactionType` filter

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Serialize, Serializer, ser::Error as _};

/// A posted transaction on an account.
///
/// Records are compiled into the binary and never mutated. Field names
/// follow the public JSON contract, including the capitalised
/// `ExternalTransactionDescription`.
///
/// # JSON Example
///
/// ```json
/// {
///   "accountNumber": "12312",
///   "type": "New Account Deposit",
///   "checkNumber": 123,
///   "typeCd": "DEP",
///   "amount": 1232.11,
///   "postedDate": [2012, 9, 20],
///   "effectiveDate": [2012, 9, 20],
///   "debitCredit": "C",
///   "status": "Completed",
///   "runningBalance": "1234.56",
///   "internalTransactionDescription": "Internal Transaction Description",
///   "ExternalTransactionDescription": "External Transaction Description",
///   "referenceNumber": "12345 - 111",
///   "parentTransactionReferenceNumber": "12323 - 123",
///   "reversed": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub account_number: &'static str,

    #[serde(rename = "type")]
    pub kind: &'static str,

    /// Only present for cheque-backed transactions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_number: Option<u32>,

    /// Short code for the transaction type (e.g. "DEP")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_cd: Option<&'static str>,

    /// Scale 0 goes out as a JSON integer, anything else as a float
    #[serde(serialize_with = "serialize_amount")]
    pub amount: Decimal,

    #[serde(serialize_with = "serialize_date")]
    pub posted_date: NaiveDate,

    #[serde(serialize_with = "serialize_date")]
    pub effective_date: NaiveDate,

    pub debit_credit: DebitCredit,

    pub status: &'static str,

    /// Account balance after posting, kept as a decimal string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running_balance: Option<&'static str>,

    pub internal_transaction_description: &'static str,

    #[serde(rename = "ExternalTransactionDescription")]
    pub external_transaction_description: &'static str,

    pub reference_number: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_transaction_reference_number: Option<&'static str>,

    pub reversed: bool,
}

/// Dates go over the wire as `[year, month, day]`.
fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    [date.year(), date.month() as i32, date.day() as i32].serialize(serializer)
}

/// `1234` stays `1234`, while `200.00` is written as `200.0`.
fn serialize_amount<S>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if amount.scale() == 0 {
        if let Some(whole) = amount.to_i64() {
            return serializer.serialize_i64(whole);
        }
    }

    let value = amount
        .to_f64()
        .ok_or_else(|| S::Error::custom(format!("amount {amount} is not representable")))?;
    serializer.serialize_f64(value)
}

/// Direction of money movement on a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DebitCredit {
    /// Money in
    #[serde(rename = "C")]
    Credit,

    /// Money out
    #[serde(rename = "D")]
    Debit,
}

/// Accepted values of the `transactionType` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    Credit,
    Debit,
}

impl TransactionType {
    pub const ALL: [TransactionType; 2] = [TransactionType::Credit, TransactionType::Debit];

    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Credit => "CREDIT",
            TransactionType::Debit => "DEBIT",
        }
    }

    /// The debit/credit marker a transaction must carry to match this filter.
    pub fn marker(self) -> DebitCredit {
        match self {
            TransactionType::Credit => DebitCredit::Credit,
            TransactionType::Debit => DebitCredit::Debit,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of `CREDIT` / `DEBIT`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transaction type: {0}")]
pub struct UnknownTransactionType(pub String);

impl FromStr for TransactionType {
    type Err = UnknownTransactionType;

    /// Matching ignores case, so `credit` and `Credit` are both accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransactionType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownTransactionType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("CREDIT".parse(), Ok(TransactionType::Credit));
        assert_eq!("credit".parse(), Ok(TransactionType::Credit));
        assert_eq!("Debit".parse(), Ok(TransactionType::Debit));
    }

    #[test]
    fn rejects_unknown_values() {
        assert!("BOGUS".parse::<TransactionType>().is_err());
        assert!("C".parse::<TransactionType>().is_err());
        assert!(" CREDIT".parse::<TransactionType>().is_err());
    }

    #[test]
    fn filter_maps_to_marker() {
        assert_eq!(TransactionType::Credit.marker(), DebitCredit::Credit);
        assert_eq!(TransactionType::Debit.marker(), DebitCredit::Debit);
    }

    #[test]
    fn serializes_wire_shape() {
        let tx = Transaction {
            account_number: "1",
            kind: "Fee",
            check_number: None,
            type_cd: None,
            amount: Decimal::new(1050, 2),
            posted_date: NaiveDate::from_ymd_opt(2012, 9, 20).unwrap(),
            effective_date: NaiveDate::from_ymd_opt(2012, 9, 21).unwrap(),
            debit_credit: DebitCredit::Debit,
            status: "Completed",
            running_balance: None,
            internal_transaction_description: "int",
            external_transaction_description: "ext",
            reference_number: "R1",
            parent_transaction_reference_number: None,
            reversed: false,
        };

        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["type"], "Fee");
        assert_eq!(value["amount"], 10.5);
        assert_eq!(value["postedDate"], serde_json::json!([2012, 9, 20]));
        assert_eq!(value["effectiveDate"], serde_json::json!([2012, 9, 21]));
        assert_eq!(value["debitCredit"], "D");
        assert_eq!(value["ExternalTransactionDescription"], "ext");
        assert!(value.get("checkNumber").is_none());
        assert!(value.get("runningBalance").is_none());
        assert!(value.get("parentTransactionReferenceNumber").is_none());
    }

    #[test]
    fn whole_amounts_serialize_as_integers() {
        let mut amount = serde_json::Serializer::new(Vec::new());
        serialize_amount(&Decimal::from_parts(1234, 0, 0, false, 0), &mut amount).unwrap();
        assert_eq!(amount.into_inner(), b"1234");

        let mut amount = serde_json::Serializer::new(Vec::new());
        serialize_amount(&Decimal::from_parts(20000, 0, 0, false, 2), &mut amount).unwrap();
        assert_eq!(amount.into_inner(), b"200.0");
    }
}
