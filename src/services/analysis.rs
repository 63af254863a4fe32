//! Expense analysis
//!
//! Summary statistics over every recorded amount.

use crate::error::{ExpenseError, ExpenseResult};
use crate::storage::{queries, Storage};

/// Aggregate statistics over all expenses
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseAnalysis {
    /// Largest single amount
    pub maximum: f64,
    /// Smallest single amount
    pub minimum: f64,
    /// Mean amount
    pub average: f64,
    /// Sum of all amounts
    pub total: f64,
    /// Number of expenses
    pub count: i64,
}

impl ExpenseAnalysis {
    /// Run the five aggregate queries
    ///
    /// # Errors
    ///
    /// Returns [`ExpenseError::NoData`] when no expenses are recorded, since
    /// every aggregate but the count is NULL on an empty table.
    pub fn generate(storage: &Storage) -> ExpenseResult<Self> {
        let maximum = storage.fetch_scalar::<f64, _>(queries::MAX_AMOUNT, [])?;
        let minimum = storage.fetch_scalar::<f64, _>(queries::MIN_AMOUNT, [])?;
        let average = storage.fetch_scalar::<f64, _>(queries::AVG_AMOUNT, [])?;
        let total = storage.fetch_scalar::<f64, _>(queries::SUM_AMOUNT, [])?;
        let count = storage
            .fetch_scalar::<i64, _>(queries::COUNT_EXPENSES, [])?
            .unwrap_or(0);

        match (maximum, minimum, average, total) {
            (Some(maximum), Some(minimum), Some(average), Some(total)) if count > 0 => Ok(Self {
                maximum,
                minimum,
                average,
                total,
                count,
            }),
            _ => Err(ExpenseError::NoData("no expenses recorded yet".into())),
        }
    }
}
