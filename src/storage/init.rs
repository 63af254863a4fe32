//! Storage initialization
//!
//! Creates the `expenses` table on first run.

use rusqlite::{Connection, OptionalExtension};

use super::queries;
use crate::error::ExpenseResult;

/// Create the `expenses` table if it does not exist yet
///
/// Returns `true` when the table had to be created.
pub fn initialize_schema(conn: &Connection) -> ExpenseResult<bool> {
    if !needs_initialization(conn)? {
        return Ok(false);
    }

    conn.execute(queries::CREATE_TABLE, [])?;
    tracing::info!("Created expenses table");
    Ok(true)
}

/// Check if the `expenses` table is missing
pub fn needs_initialization(conn: &Connection) -> ExpenseResult<bool> {
    let existing: Option<String> = conn
        .query_row(queries::TABLE_EXISTS, [], |row| row.get(0))
        .optional()?;
    Ok(existing.is_none())
}
