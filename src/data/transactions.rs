//! Sample transactions served by the Transactions API.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::transaction::{DebitCredit, Transaction};

const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid calendar date in sample data"),
    }
}

/// All sample transactions, in the order they are served.
pub static TRANSACTIONS: [Transaction; 4] = [
    Transaction {
        account_number: "12312",
        kind: "New Account Deposit",
        check_number: Some(123),
        type_cd: Some("DEP"),
        amount: Decimal::from_parts(123211, 0, 0, false, 2),
        posted_date: date(2012, 9, 20),
        effective_date: date(2012, 9, 20),
        debit_credit: DebitCredit::Credit,
        status: "Completed",
        running_balance: Some("1234.56"),
        internal_transaction_description: "Internal Transaction Description",
        external_transaction_description: "External Transaction Description",
        reference_number: "12345 - 111",
        parent_transaction_reference_number: Some("12323 - 123"),
        reversed: false,
    },
    Transaction {
        account_number: "1232322",
        kind: "Credit Card Payment",
        check_number: None,
        type_cd: None,
        amount: Decimal::from_parts(1234, 0, 0, false, 0),
        posted_date: date(2012, 9, 20),
        effective_date: date(2012, 9, 20),
        debit_credit: DebitCredit::Debit,
        status: "Completed",
        running_balance: None,
        internal_transaction_description: "internalTransactionDescription",
        external_transaction_description: "enternalTransactionDescription",
        reference_number: "90167149 - 316",
        parent_transaction_reference_number: None,
        reversed: true,
    },
    Transaction {
        account_number: "54321",
        kind: "ATM Withdrawal",
        check_number: None,
        type_cd: None,
        amount: Decimal::from_parts(20000, 0, 0, false, 2),
        posted_date: date(2012, 9, 21),
        effective_date: date(2012, 9, 21),
        debit_credit: DebitCredit::Debit,
        status: "Completed",
        running_balance: Some("1034.56"),
        internal_transaction_description: "ATM Withdrawal",
        external_transaction_description: "ATM Cash Withdrawal",
        reference_number: "ATM001 - 789",
        parent_transaction_reference_number: None,
        reversed: false,
    },
    Transaction {
        account_number: "12312",
        kind: "Direct Deposit",
        check_number: None,
        type_cd: None,
        amount: Decimal::from_parts(250000, 0, 0, false, 2),
        posted_date: date(2012, 9, 22),
        effective_date: date(2012, 9, 22),
        debit_credit: DebitCredit::Credit,
        status: "Completed",
        running_balance: Some("3534.56"),
        internal_transaction_description: "Payroll Deposit",
        external_transaction_description: "Direct Deposit - Salary",
        reference_number: "DD001 - 456",
        parent_transaction_reference_number: None,
        reversed: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_numbers_are_unique() {
        let mut refs: Vec<_> = TRANSACTIONS.iter().map(|t| t.reference_number).collect();
        refs.sort_unstable();
        refs.dedup();
        assert_eq!(refs.len(), TRANSACTIONS.len());
    }

    #[test]
    fn amounts_keep_published_precision() {
        let amounts: Vec<String> = TRANSACTIONS.iter().map(|t| t.amount.to_string()).collect();
        assert_eq!(amounts, ["1232.11", "1234", "200.00", "2500.00"]);
    }

    #[test]
    fn two_of_each_direction() {
        let credits = TRANSACTIONS
            .iter()
            .filter(|t| t.debit_credit == DebitCredit::Credit)
            .count();
        assert_eq!(credits, 2);
        assert_eq!(TRANSACTIONS.len() - credits, 2);
    }
}
