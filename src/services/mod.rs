//! Service layer for the expense tracker
//!
//! Business logic sits here, between the menu and the storage handle.

pub mod analysis;
pub mod expense;

pub use analysis::ExpenseAnalysis;
pub use expense::ExpenseService;
