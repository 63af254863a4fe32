//! Expense filters
//!
//! Every filter maps to a fixed SQL predicate plus the values bound to its
//! placeholders. User-supplied dates only ever travel as bound values.

use chrono::NaiveDate;
use rusqlite::types::Value;
use std::fmt;

use crate::error::{ExpenseError, ExpenseResult};

/// Format accepted for dates typed into the filter menu
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date-based filters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFilter {
    /// Expenses dated today (per SQLite's `date('now')`)
    Today,
    /// Expenses dated within the last month
    PastMonth,
    /// Expenses dated within the last year
    PastYear,
    /// Expenses dated between `start` and `end`, inclusive
    Range { start: NaiveDate, end: NaiveDate },
    /// Expenses dated exactly on the given day
    On(NaiveDate),
}

/// Fixed amount bands; contiguous and non-overlapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountBand {
    /// `[0, 500]`
    UpTo500,
    /// `(500, 2500]`
    From500To2500,
    /// `(2500, ∞)`
    Above2500,
}

impl AmountBand {
    /// Lower and upper bound of the band
    pub fn bounds(&self) -> (f64, Option<f64>) {
        match self {
            Self::UpTo500 => (0.0, Some(500.0)),
            Self::From500To2500 => (500.0, Some(2500.0)),
            Self::Above2500 => (2500.0, None),
        }
    }
}

impl fmt::Display for AmountBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UpTo500 => write!(f, "0 to 500"),
            Self::From500To2500 => write!(f, "500 to 2500"),
            Self::Above2500 => write!(f, "2500 and above"),
        }
    }
}

/// A filter selectable from the data filter menu
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExpenseFilter {
    Date(DateFilter),
    Amount(AmountBand),
}

/// SQL predicate text together with its bound values
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub sql: &'static str,
    pub values: Vec<Value>,
}

impl ExpenseFilter {
    /// Build the predicate for this filter
    pub fn predicate(&self) -> Predicate {
        let (sql, values) = match self {
            Self::Date(DateFilter::Today) => ("date = date('now')", vec![]),
            Self::Date(DateFilter::PastMonth) => (
                "date >= date('now', ?1)",
                vec![Value::Text("-1 month".into())],
            ),
            Self::Date(DateFilter::PastYear) => (
                "date >= date('now', ?1)",
                vec![Value::Text("-1 year".into())],
            ),
            Self::Date(DateFilter::Range { start, end }) => (
                "date BETWEEN ?1 AND ?2",
                vec![date_value(start), date_value(end)],
            ),
            Self::Date(DateFilter::On(day)) => ("date = ?1", vec![date_value(day)]),
            Self::Amount(band) => {
                let (low, high) = band.bounds();
                let mut values = vec![Value::Real(low)];
                values.extend(high.map(Value::Real));
                let sql = match band {
                    AmountBand::UpTo500 => "amount >= ?1 AND amount <= ?2",
                    AmountBand::From500To2500 => "amount > ?1 AND amount <= ?2",
                    AmountBand::Above2500 => "amount > ?1",
                };
                (sql, values)
            }
        };

        Predicate { sql, values }
    }
}

fn date_value(date: &NaiveDate) -> Value {
    Value::Text(date.format(DATE_FORMAT).to_string())
}

/// Parse a date typed into the filter menu
pub fn parse_filter_date(input: &str) -> ExpenseResult<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| ExpenseError::invalid_input(format!("'{}' is not a YYYY-MM-DD date", trimmed)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_predicate_binds_dates() {
        let filter = ExpenseFilter::Date(DateFilter::Range {
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        });
        let predicate = filter.predicate();

        assert_eq!(predicate.sql, "date BETWEEN ?1 AND ?2");
        assert_eq!(
            predicate.values,
            vec![
                Value::Text("2024-01-01".into()),
                Value::Text("2024-01-31".into())
            ]
        );
    }

    #[test]
    fn test_amount_predicates() {
        let low = ExpenseFilter::Amount(AmountBand::UpTo500).predicate();
        assert_eq!(low.sql, "amount >= ?1 AND amount <= ?2");

        let mid = ExpenseFilter::Amount(AmountBand::From500To2500).predicate();
        assert_eq!(mid.sql, "amount > ?1 AND amount <= ?2");
        assert_eq!(mid.values, vec![Value::Real(500.0), Value::Real(2500.0)]);

        let high = ExpenseFilter::Amount(AmountBand::Above2500).predicate();
        assert_eq!(high.values, vec![Value::Real(2500.0)]);
    }

    #[test]
    fn test_parse_filter_date() {
        assert_eq!(
            parse_filter_date("2024-02-29\n").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert!(parse_filter_date("2024-13-40").unwrap_err().is_invalid_input());
        assert!(parse_filter_date("2023-02-29").is_err());
        assert!(parse_filter_date("01/02/2024").is_err());
    }
}
