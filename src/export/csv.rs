//! CSV Export functionality
//!
//! Writes every expense plus a trailing total row, echoing each record to the
//! console as it goes.

use std::io::Write;

use crate::display::{format_amount, format_expense_row};
use crate::error::{ExpenseError, ExpenseResult};
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Header row of the export file
pub const EXPORT_HEADER: [&str; 4] = ["ID", "DATE", "Desc", "description"];

/// Label in the third column of the trailing row
pub const TOTAL_LABEL: &str = "Total Expenses:";

/// Outcome of an export
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    /// Number of expense rows written (header and total excluded)
    pub expense_count: usize,
}

/// Export all expenses to CSV
///
/// `echo` receives one console line per expense, in the same format as the
/// expense list.
pub fn export_expenses_csv<W: Write, E: Write>(
    storage: &Storage,
    writer: W,
    echo: &mut E,
    currency: &str,
) -> ExpenseResult<ExportSummary> {
    let service = ExpenseService::new(storage);
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(EXPORT_HEADER)?;

    let expenses = service.list()?;
    for expense in &expenses {
        writeln!(echo, "{}", format_expense_row(expense, currency))?;
        csv_writer.write_record([
            expense.id.to_string(),
            expense.date.clone(),
            expense.description.clone(),
            expense.amount.map(format_amount).unwrap_or_default(),
        ])?;
    }

    let total_cell = service.total()?.map(format_amount).unwrap_or_default();
    csv_writer.write_record(["", "", TOTAL_LABEL, total_cell.as_str()])?;

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(ExportSummary {
        expense_count: expenses.len(),
    })
}
