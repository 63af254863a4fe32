//! Identifier type for expense records
//!
//! Ids are assigned by SQLite (`INTEGER PRIMARY KEY AUTOINCREMENT`), so the
//! newtype wraps the raw row id rather than generating its own.

use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use std::fmt;
use std::str::FromStr;

use crate::error::ExpenseError;

/// Store-assigned identifier of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpenseId(i64);

impl ExpenseId {
    /// Wrap a raw row id
    pub const fn new(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExpenseId {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| ExpenseError::invalid_input(format!("'{}' is not a valid expense ID", s.trim())))
    }
}

impl ToSql for ExpenseId {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        self.0.to_sql()
    }
}

impl FromSql for ExpenseId {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        i64::column_result(value).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!("42".parse::<ExpenseId>().unwrap(), ExpenseId::new(42));
        assert_eq!(" 7 \n".parse::<ExpenseId>().unwrap(), ExpenseId::new(7));
    }

    #[test]
    fn test_parse_invalid_id() {
        let err = "abc".parse::<ExpenseId>().unwrap_err();
        assert!(err.is_invalid_input());
        assert!("1.5".parse::<ExpenseId>().is_err());
        assert!("".parse::<ExpenseId>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ExpenseId::new(3).to_string(), "3");
    }
}
