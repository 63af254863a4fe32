//! Expense model
//!
//! A single recorded expense plus the input parsing rules used when a user
//! enters a new one.

use rusqlite::Row;

use super::ids::ExpenseId;
use crate::error::{ExpenseError, ExpenseResult};

/// A recorded expense
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// Store-assigned identifier
    pub id: ExpenseId,

    /// Date as entered, expected `YYYY-MM-DD`
    pub date: String,

    /// Free-form description
    pub description: String,

    /// Amount in the configured currency; `None` when the column is NULL
    pub amount: Option<f64>,
}

impl Expense {
    /// Build an expense from a `SELECT id, date, description, amount` row
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            date: row.get(1)?,
            description: row.get(2)?,
            amount: row.get(3)?,
        })
    }
}

/// Input for creating a new expense
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub date: String,
    pub description: String,
    pub amount: f64,
}

impl NewExpense {
    /// Create a new expense input
    pub fn new(date: impl Into<String>, description: impl Into<String>, amount: f64) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            amount,
        }
    }

    /// Parse raw console input into a new expense
    ///
    /// The date is the first whitespace-delimited token of `date_line` and is
    /// not checked against the calendar.
    pub fn parse(date_line: &str, description: &str, amount: &str) -> ExpenseResult<Self> {
        let date = date_line
            .split_whitespace()
            .next()
            .ok_or_else(|| ExpenseError::invalid_input("a date is required"))?;

        Ok(Self::new(date, description, parse_amount(amount)?))
    }
}

/// Parse an amount entered on the console
///
/// `nan` and `inf` parse as floats but SQLite cannot keep them as amounts, so
/// they are rejected like any other non-numeric input.
pub fn parse_amount(input: &str) -> ExpenseResult<f64> {
    let trimmed = input.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| ExpenseError::invalid_input(format!("'{}' is not a valid amount", trimmed)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_takes_first_date_token() {
        let input = NewExpense::parse("2024-03-05 lunch break", "Lunch", "120.5").unwrap();
        assert_eq!(input.date, "2024-03-05");
        assert_eq!(input.description, "Lunch");
        assert_eq!(input.amount, 120.5);
    }

    #[test]
    fn test_parse_keeps_unvalidated_date() {
        let input = NewExpense::parse("yesterday", "Coffee", "3").unwrap();
        assert_eq!(input.date, "yesterday");
    }

    #[test]
    fn test_parse_requires_date() {
        let err = NewExpense::parse("   ", "Coffee", "3").unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 42 ").unwrap(), 42.0);
        assert_eq!(parse_amount("-7.25").unwrap(), -7.25);
        assert!(parse_amount("ten").unwrap_err().is_invalid_input());
        assert!(parse_amount("").is_err());
    }

    #[test]
    fn test_parse_amount_rejects_non_finite() {
        for input in ["nan", "NaN", "inf", "-infinity"] {
            assert!(parse_amount(input).unwrap_err().is_invalid_input(), "{}", input);
        }
    }

    #[test]
    fn test_from_row_reads_null_amount() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let expense = conn
            .query_row("SELECT 4, '2024-01-01', 'Odd', NULL", [], Expense::from_row)
            .unwrap();

        assert_eq!(expense.id, ExpenseId::new(4));
        assert_eq!(expense.amount, None);
    }
}
