//! Expense service
//!
//! Business logic for recording, listing, editing and filtering expenses.
//! Every call goes straight to the store; nothing is cached between calls.

use crate::error::ExpenseResult;
use crate::models::{Expense, ExpenseFilter, ExpenseId, NewExpense};
use crate::storage::{queries, Storage};

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense and return its store-assigned id
    pub fn add(&self, input: NewExpense) -> ExpenseResult<ExpenseId> {
        self.storage.execute(
            queries::INSERT_EXPENSE,
            (&input.date, &input.description, input.amount),
        )?;
        let id = self.storage.last_insert_id();

        tracing::info!(%id, date = %input.date, amount = input.amount, "Added expense");
        Ok(id)
    }

    /// List all expenses ordered by date
    pub fn list(&self) -> ExpenseResult<Vec<Expense>> {
        self.storage.fetch_all(queries::SELECT_EXPENSES, [])
    }

    /// Sum of all amounts, `None` when there are no expenses
    pub fn total(&self) -> ExpenseResult<Option<f64>> {
        self.storage.fetch_scalar(queries::SUM_AMOUNT, [])
    }

    /// Delete an expense by id
    ///
    /// Deleting an unknown id is not an error; the returned row count is 0.
    pub fn delete(&self, id: ExpenseId) -> ExpenseResult<usize> {
        let affected = self.storage.execute(queries::DELETE_EXPENSE_BY_ID, [id])?;
        tracing::info!(%id, affected, "Deleted expense");
        Ok(affected)
    }

    /// Replace the description of an expense
    ///
    /// Date and amount are never touched. An unknown id affects 0 rows.
    pub fn update_description(&self, id: ExpenseId, description: &str) -> ExpenseResult<usize> {
        let affected = self
            .storage
            .execute(queries::UPDATE_DESCRIPTION_BY_ID, (description, id))?;
        tracing::info!(%id, affected, "Updated expense description");
        Ok(affected)
    }

    /// Check whether no expenses are recorded
    pub fn is_empty(&self) -> ExpenseResult<bool> {
        Ok(self.list()?.is_empty())
    }

    /// List the expenses matching a filter, ordered by date
    pub fn filter(&self, filter: &ExpenseFilter) -> ExpenseResult<Vec<Expense>> {
        let predicate = filter.predicate();
        tracing::debug!(?filter, "Filtering expenses");
        self.storage.fetch_all(
            &queries::select_filtered(predicate.sql),
            rusqlite::params_from_iter(predicate.values),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AmountBand, DateFilter};
    use chrono::{NaiveDate, Utc};

    fn create_test_storage() -> Storage {
        Storage::open_in_memory().unwrap()
    }

    fn add(service: &ExpenseService, date: &str, description: &str, amount: f64) -> ExpenseId {
        service
            .add(NewExpense::new(date, description, amount))
            .unwrap()
    }

    fn amounts(expenses: &[Expense]) -> Vec<f64> {
        expenses.iter().filter_map(|e| e.amount).collect()
    }

    #[test]
    fn test_add_then_list() {
        let storage = create_test_storage();
        let service = ExpenseService::new(&storage);

        let id = add(&service, "2024-02-10", "Groceries", 45.5);

        let expenses = service.list().unwrap();
        assert_eq!(
            expenses,
            vec![Expense {
                id,
                date: "2024-02-10".into(),
                description: "Groceries".into(),
                amount: Some(45.5),
            }]
        );
    }

    #[test]
    fn test_ids_are_unique() {
        let storage = create_test_storage();
        let service = ExpenseService::new(&storage);

        let first = add(&service, "2024-01-01", "A", 1.0);
        let second = add(&service, "2024-01-01", "B", 2.0);
        assert_ne!(first, second);

        service.delete(second).unwrap();
        let third = add(&service, "2024-01-01", "C", 3.0);
        assert!(third > second);
    }

    #[test]
    fn test_list_orders_by_date() {
        let storage = create_test_storage();
        let service = ExpenseService::new(&storage);

        add(&service, "2024-03-01", "March", 3.0);
        add(&service, "2024-01-01", "January", 1.0);
        add(&service, "2024-02-01", "February", 2.0);

        let dates: Vec<_> = service
            .list()
            .unwrap()
            .into_iter()
            .map(|e| e.date)
            .collect();
        assert_eq!(dates, vec!["2024-01-01", "2024-02-01", "2024-03-01"]);
    }

    #[test]
    fn test_total() {
        let storage = create_test_storage();
        let service = ExpenseService::new(&storage);

        assert_eq!(service.total().unwrap(), None);

        add(&service, "2024-01-01", "A", 10.0);
        add(&service, "2024-01-02", "B", 32.5);
        assert_eq!(service.total().unwrap(), Some(42.5));
    }

    #[test]
    fn test_delete_nonexistent_id_is_noop() {
        let storage = create_test_storage();
        let service = ExpenseService::new(&storage);
        add(&service, "2024-01-01", "Rent", 900.0);

        let affected = service.delete(ExpenseId::new(999)).unwrap();

        assert_eq!(affected, 0);
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn test_delete_existing() {
        let storage = create_test_storage();
        let service = ExpenseService::new(&storage);
        let id = add(&service, "2024-01-01", "Rent", 900.0);

        assert_eq!(service.delete(id).unwrap(), 1);
        assert!(service.is_empty().unwrap());
    }

    #[test]
    fn test_update_changes_only_description() {
        let storage = create_test_storage();
        let service = ExpenseService::new(&storage);
        let id = add(&service, "2024-04-04", "Taxi", 180.0);

        assert_eq!(service.update_description(id, "Airport taxi").unwrap(), 1);

        let expense = &service.list().unwrap()[0];
        assert_eq!(expense.id, id);
        assert_eq!(expense.description, "Airport taxi");
        assert_eq!(expense.date, "2024-04-04");
        assert_eq!(expense.amount, Some(180.0));
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let storage = create_test_storage();
        let service = ExpenseService::new(&storage);
        add(&service, "2024-04-04", "Taxi", 180.0);

        assert_eq!(service.update_description(ExpenseId::new(42), "x").unwrap(), 0);
        assert_eq!(service.list().unwrap()[0].description, "Taxi");
    }

    #[test]
    fn test_is_empty() {
        let storage = create_test_storage();
        let service = ExpenseService::new(&storage);

        assert!(service.is_empty().unwrap());
        add(&service, "2024-01-01", "Coffee", 3.0);
        assert!(!service.is_empty().unwrap());
    }

    #[test]
    fn test_filter_lowest_band() {
        let storage = create_test_storage();
        let service = ExpenseService::new(&storage);
        add(&service, "2024-01-01", "Edge", 500.0);
        add(&service, "2024-01-02", "Over", 501.0);
        add(&service, "2024-01-03", "Zero", 0.0);

        let found = service
            .filter(&ExpenseFilter::Amount(AmountBand::UpTo500))
            .unwrap();
        assert_eq!(amounts(&found), vec![500.0, 0.0]);
    }

    #[test]
    fn test_filter_middle_band() {
        let storage = create_test_storage();
        let service = ExpenseService::new(&storage);
        add(&service, "2024-01-01", "Low edge", 500.0);
        add(&service, "2024-01-02", "Just over", 500.01);
        add(&service, "2024-01-03", "High edge", 2500.0);
        add(&service, "2024-01-04", "Too much", 2500.01);

        let found = service
            .filter(&ExpenseFilter::Amount(AmountBand::From500To2500))
            .unwrap();
        assert_eq!(amounts(&found), vec![500.01, 2500.0]);

        let high = service
            .filter(&ExpenseFilter::Amount(AmountBand::Above2500))
            .unwrap();
        assert_eq!(amounts(&high), vec![2500.01]);
    }

    #[test]
    fn test_filter_custom_range_is_inclusive() {
        let storage = create_test_storage();
        let service = ExpenseService::new(&storage);
        add(&service, "2023-12-31", "Before", 1.0);
        add(&service, "2024-01-01", "Start", 2.0);
        add(&service, "2024-01-15", "Middle", 3.0);
        add(&service, "2024-01-31", "End", 4.0);
        add(&service, "2024-02-01", "After", 5.0);

        let filter = ExpenseFilter::Date(DateFilter::Range {
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        });
        let found = service.filter(&filter).unwrap();
        assert_eq!(amounts(&found), vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_filter_exact_date() {
        let storage = create_test_storage();
        let service = ExpenseService::new(&storage);
        add(&service, "2024-06-01", "One", 1.0);
        add(&service, "2024-06-02", "Two", 2.0);

        let filter = ExpenseFilter::Date(DateFilter::On(NaiveDate::from_ymd_opt(2024, 6, 2).unwrap()));
        let found = service.filter(&filter).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].description, "Two");
    }

    #[test]
    fn test_filter_relative_dates() {
        let storage = create_test_storage();
        let service = ExpenseService::new(&storage);
        let today = Utc::now().date_naive();
        let fmt = |d: NaiveDate| d.format("%Y-%m-%d").to_string();

        add(&service, &fmt(today), "Today", 1.0);
        add(&service, &fmt(today - chrono::Duration::days(10)), "Recent", 2.0);
        add(&service, &fmt(today - chrono::Duration::days(200)), "Months ago", 3.0);
        add(&service, &fmt(today - chrono::Duration::days(800)), "Years ago", 4.0);

        let today_only = service
            .filter(&ExpenseFilter::Date(DateFilter::Today))
            .unwrap();
        assert_eq!(amounts(&today_only), vec![1.0]);

        let month = service
            .filter(&ExpenseFilter::Date(DateFilter::PastMonth))
            .unwrap();
        assert_eq!(amounts(&month), vec![2.0, 1.0]);

        let year = service
            .filter(&ExpenseFilter::Date(DateFilter::PastYear))
            .unwrap();
        assert_eq!(amounts(&year), vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_update_binds_description_as_data() {
        let storage = create_test_storage();
        let service = ExpenseService::new(&storage);
        let id = add(&service, "2024-01-01", "Safe", 1.0);

        service
            .update_description(id, "x'; DROP TABLE expenses; --")
            .unwrap();

        assert_eq!(service.list().unwrap()[0].description, "x'; DROP TABLE expenses; --");
    }
}
