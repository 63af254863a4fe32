//! Core data models for the expense tracker
//!
//! This module contains the expense record, its identifier, and the filters
//! the data filter menu can apply.

pub mod expense;
pub mod filter;
pub mod ids;

pub use expense::{parse_amount, Expense, NewExpense};
pub use filter::{parse_filter_date, AmountBand, DateFilter, ExpenseFilter, Predicate};
pub use ids::ExpenseId;
