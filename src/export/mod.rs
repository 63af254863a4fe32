//! Export module for the expense tracker
//!
//! Provides CSV export of all expenses to a fixed file, overwritten on each
//! run.

pub mod csv;

pub use self::csv::{export_expenses_csv, ExportSummary, EXPORT_HEADER, TOTAL_LABEL};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{ExpenseError, ExpenseResult};
use crate::storage::Storage;

/// Export all expenses to the CSV file at `output`
pub fn export_to_file<E: Write>(
    storage: &Storage,
    output: &Path,
    echo: &mut E,
    currency: &str,
) -> ExpenseResult<ExportSummary> {
    let file = File::create(output).map_err(|e| {
        ExpenseError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;

    let summary = export_expenses_csv(storage, BufWriter::new(file), echo, currency)?;
    tracing::info!(
        path = %output.display(),
        count = summary.expense_count,
        "Exported expenses"
    );
    Ok(summary)
}
