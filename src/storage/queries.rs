//! Query templates for the `expenses` table

pub const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS expenses (\
    id INTEGER PRIMARY KEY AUTOINCREMENT, \
    date TEXT, \
    description TEXT, \
    amount REAL)";

pub const TABLE_EXISTS: &str =
    "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'expenses'";

pub const INSERT_EXPENSE: &str =
    "INSERT INTO expenses (date, description, amount) VALUES (?1, ?2, ?3)";

pub const SELECT_EXPENSES: &str =
    "SELECT id, date, description, amount FROM expenses ORDER BY date";

pub const DELETE_EXPENSE_BY_ID: &str = "DELETE FROM expenses WHERE id = ?1";

pub const UPDATE_DESCRIPTION_BY_ID: &str = "UPDATE expenses SET description = ?1 WHERE id = ?2";

pub const MAX_AMOUNT: &str = "SELECT MAX(amount) FROM expenses";
pub const MIN_AMOUNT: &str = "SELECT MIN(amount) FROM expenses";
pub const AVG_AMOUNT: &str = "SELECT AVG(amount) FROM expenses";
pub const SUM_AMOUNT: &str = "SELECT SUM(amount) FROM expenses";
pub const COUNT_EXPENSES: &str = "SELECT COUNT(amount) FROM expenses";

/// Select the expenses matching a fixed predicate, ordered by date
///
/// `predicate` must be one of the static predicates from
/// [`ExpenseFilter::predicate`](crate::models::ExpenseFilter::predicate);
/// user input is bound, never spliced in.
pub fn select_filtered(predicate: &'static str) -> String {
    format!(
        "SELECT id, date, description, amount FROM expenses WHERE {} ORDER BY date",
        predicate
    )
}
