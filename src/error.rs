//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File or console I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Errors raised by the SQLite store
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Malformed user input (non-numeric amount or id, bad date)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An aggregate was requested over an empty table
    #[error("No data: {0}")]
    NoData(String),

    /// Standard input was closed while a value was expected
    #[error("Input closed")]
    InputClosed,
}

impl ExpenseError {
    /// Create an invalid input error
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }

    /// Check if this is an invalid input error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Whether the menu loop can report this error and keep running
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Storage(_) | Self::Export(_) | Self::InvalidInput(_) | Self::NoData(_)
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<rusqlite::Error> for ExpenseError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<csv::Error> for ExpenseError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
