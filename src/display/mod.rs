//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and reports for the console.

pub mod expense;

pub use expense::{
    format_amount, format_analysis, format_expense_list, format_expense_row,
    format_optional_amount, format_total,
};
