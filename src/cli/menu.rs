//! Interactive menu
//!
//! A single-state read/dispatch loop: print the menu, read a choice, run the
//! matching operation, repeat until the user quits or input ends.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use super::filter::prompt_filter;
use super::prompt::Console;
use crate::display::{format_analysis, format_expense_list, format_total};
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::export_to_file;
use crate::models::{ExpenseId, NewExpense};
use crate::services::{ExpenseAnalysis, ExpenseService};
use crate::storage::Storage;

pub const NO_EXPENSES: &str = "No expenses recorded yet.";
pub const NO_FILTERED_EXPENSES: &str = "No expenses recorded based on the selected filter.";
pub const STORE_EMPTY: &str = "The Database is empty";
pub const STORE_NOT_EMPTY: &str = "The Database is not empty";
pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";

/// An entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Total,
    Delete,
    Update,
    Export,
    Filter,
    CheckEmpty,
    Analyze,
    Quit,
}

impl MenuChoice {
    /// All entries in menu order
    pub const ALL: [MenuChoice; 10] = [
        Self::Add,
        Self::View,
        Self::Total,
        Self::Delete,
        Self::Update,
        Self::Export,
        Self::Filter,
        Self::CheckEmpty,
        Self::Analyze,
        Self::Quit,
    ];

    /// Parse the number typed at the menu prompt
    ///
    /// Only the exact numerals `1` to `10` match.
    pub fn parse(input: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .zip(1..)
            .find(|(_, number)| input == number.to_string())
            .map(|(choice, _)| *choice)
    }

    /// Label shown in the menu
    pub fn label(&self) -> &'static str {
        match self {
            Self::Add => "Add Expense",
            Self::View => "View Expenses",
            Self::Total => "Total Expenses",
            Self::Delete => "Delete Expense",
            Self::Update => "Update Expense Description",
            Self::Export => "Export Expense",
            Self::Filter => "Data Filter",
            Self::CheckEmpty => "Check if the database is Empty",
            Self::Analyze => "Analyze Expense",
            Self::Quit => "Quit",
        }
    }
}

/// The interactive expense menu
pub struct Menu<'a, R, W> {
    storage: &'a Storage,
    console: Console<R, W>,
    currency: String,
    export_path: PathBuf,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    /// Create a menu over the given store and console
    pub fn new(
        storage: &'a Storage,
        console: Console<R, W>,
        currency: impl Into<String>,
        export_path: PathBuf,
    ) -> Self {
        Self {
            storage,
            console,
            currency: currency.into(),
            export_path,
        }
    }

    /// Run until the user picks Quit or input ends
    ///
    /// Storage, export, and input errors are reported and the loop goes on.
    /// Console I/O failures end the loop with an error.
    pub fn run(&mut self) -> ExpenseResult<()> {
        loop {
            self.print_menu()?;

            let Some(line) = self.console.read_line()? else {
                tracing::info!("Input closed, leaving menu");
                return Ok(());
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                tracing::debug!(input = %line, "Invalid menu choice");
                self.console.say(INVALID_CHOICE)?;
                continue;
            };

            if choice == MenuChoice::Quit {
                tracing::info!("Quit selected");
                return Ok(());
            }

            match self.dispatch(choice) {
                Ok(()) => {}
                Err(ExpenseError::InputClosed) => {
                    tracing::info!(?choice, "Input closed during operation");
                    return Ok(());
                }
                Err(e) if e.is_recoverable() => {
                    if e.is_invalid_input() {
                        tracing::debug!(?choice, error = %e, "Rejected input");
                    } else {
                        tracing::warn!(?choice, error = %e, "Operation failed");
                    }
                    self.console.say(&e.to_string())?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn print_menu(&mut self) -> ExpenseResult<()> {
        self.console.say("\nExpense Tracker Menu:")?;
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            self.console.say(&format!("{}. {}", i + 1, choice.label()))?;
        }
        self.console.print("Enter your choice (1-10): ")
    }

    fn dispatch(&mut self, choice: MenuChoice) -> ExpenseResult<()> {
        tracing::debug!(?choice, "Dispatching menu choice");
        match choice {
            MenuChoice::Add => self.add_expense(),
            MenuChoice::View => self.view_expenses(),
            MenuChoice::Total => self.total_expenses(),
            MenuChoice::Delete => self.delete_expense(),
            MenuChoice::Update => self.update_expense(),
            MenuChoice::Export => self.export_expenses(),
            MenuChoice::Filter => self.filter_expenses(),
            MenuChoice::CheckEmpty => self.check_empty(),
            MenuChoice::Analyze => self.analyze_expenses(),
            MenuChoice::Quit => Ok(()),
        }
    }

    fn service(&self) -> ExpenseService<'a> {
        ExpenseService::new(self.storage)
    }

    fn add_expense(&mut self) -> ExpenseResult<()> {
        let date = self.console.ask("Enter date (YYYY-MM-DD): ")?;
        let description = self.console.ask("Enter description: ")?;
        let amount = self.console.ask("Enter amount: ")?;
        let input = NewExpense::parse(&date, &description, &amount)?;

        match self.service().add(input) {
            Ok(_) => self.console.say("Expense added successfully."),
            Err(e) => self.console.say(&format!("Error adding expense: {}", e)),
        }
    }

    fn view_expenses(&mut self) -> ExpenseResult<()> {
        let expenses = self.service().list()?;
        let listing = format_expense_list(&expenses, "Expenses:", NO_EXPENSES, &self.currency);
        self.console.print(&listing)
    }

    fn total_expenses(&mut self) -> ExpenseResult<()> {
        let total = self.service().total()?;
        self.console.say(&format_total(total, &self.currency))
    }

    fn delete_expense(&mut self) -> ExpenseResult<()> {
        // Warns only; the prompt follows either way.
        self.check_empty()?;

        let id: ExpenseId = self.console.ask("Enter ID to delete: ")?.parse()?;
        match self.service().delete(id) {
            Ok(_) => self.console.say("Expense deleted successfully."),
            Err(e) => self.console.say(&format!("Error deleting expense: {}", e)),
        }
    }

    fn update_expense(&mut self) -> ExpenseResult<()> {
        self.check_empty()?;

        let id: ExpenseId = self.console.ask("Enter ID to update: ")?.parse()?;
        let description = self.console.ask("Enter new description: ")?;
        match self.service().update_description(id, &description) {
            Ok(_) => self.console.say("Expense updated successfully."),
            Err(e) => self.console.say(&format!("Error updating expense: {}", e)),
        }
    }

    fn export_expenses(&mut self) -> ExpenseResult<()> {
        let result = export_to_file(
            self.storage,
            &self.export_path,
            self.console.writer(),
            &self.currency,
        );

        match result {
            Ok(summary) => self.console.say(&format!(
                "Exported {} expenses to: {}",
                summary.expense_count,
                self.export_path.display()
            )),
            Err(e) if e.is_recoverable() => {
                self.console.say(&format!("Error exporting expenses: {}", e))
            }
            Err(e) => Err(e),
        }
    }

    fn filter_expenses(&mut self) -> ExpenseResult<()> {
        let Some(filter) = prompt_filter(&mut self.console)? else {
            return Ok(());
        };

        let expenses = self.service().filter(&filter)?;
        let listing = format_expense_list(
            &expenses,
            "Filtered Expenses:",
            NO_FILTERED_EXPENSES,
            &self.currency,
        );
        self.console.print(&listing)
    }

    fn check_empty(&mut self) -> ExpenseResult<()> {
        if self.service().is_empty()? {
            self.console.say(STORE_EMPTY)
        } else {
            self.console.say(STORE_NOT_EMPTY)
        }
    }

    fn analyze_expenses(&mut self) -> ExpenseResult<()> {
        let analysis = ExpenseAnalysis::generate(self.storage)?;
        self.console.print(&format_analysis(&analysis))
    }
}
