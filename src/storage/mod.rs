//! Storage layer for the expense tracker
//!
//! Wraps a single SQLite connection holding the `expenses` table. The
//! connection runs in autocommit mode, so every mutating statement is
//! committed before [`Storage::execute`] returns.

pub mod init;
pub mod queries;

pub use init::{initialize_schema, needs_initialization};

use std::path::Path;

use rusqlite::types::FromSql;
use rusqlite::{Connection, Params};

use crate::config::paths::ExpensePaths;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId};

/// Owned handle to the expense store
pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Open the database configured by `paths`
    pub fn new(paths: &ExpensePaths) -> ExpenseResult<Self> {
        paths.ensure_directories()?;
        Self::open(&paths.database_file())
    }

    /// Open or create a database at the given path
    pub fn open(path: &Path) -> ExpenseResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ExpenseError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let conn = Connection::open(path)?;
        tracing::debug!(path = %path.display(), "Opened expense database");
        Self::from_connection(conn)
    }

    /// Open an in-memory database
    pub fn open_in_memory() -> ExpenseResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> ExpenseResult<Self> {
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Execute a mutating statement, returning the number of affected rows
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> ExpenseResult<usize> {
        Ok(self.conn.execute(sql, params)?)
    }

    /// Execute a select over the `expenses` columns and collect every row
    pub fn fetch_all<P: Params>(&self, sql: &str, params: P) -> ExpenseResult<Vec<Expense>> {
        let mut stmt = self.conn.prepare(sql)?;
        let expenses = stmt
            .query_map(params, Expense::from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(expenses)
    }

    /// Execute a single-row, single-column query such as an aggregate
    ///
    /// SQL `NULL` (e.g. `SUM` over an empty table) comes back as `None`.
    pub fn fetch_scalar<T: FromSql, P: Params>(
        &self,
        sql: &str,
        params: P,
    ) -> ExpenseResult<Option<T>> {
        Ok(self.conn.query_row(sql, params, |row| row.get(0))?)
    }

    /// Id assigned to the most recent successful insert
    pub fn last_insert_id(&self) -> ExpenseId {
        ExpenseId::new(self.conn.last_insert_rowid())
    }
}
