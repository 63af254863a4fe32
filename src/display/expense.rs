//! Expense display formatting
//!
//! Formats expenses, totals and the analysis report for the console.

use crate::models::Expense;
use crate::services::ExpenseAnalysis;

/// Printed in place of a total when the store has no expenses
pub const NO_TOTAL: &str = "None";

/// Format an amount the way it is shown everywhere in the tracker
///
/// Uses the shortest representation that round-trips. Whole numbers keep one
/// decimal place (`60.0`). Decimal exponents below -4 or from 16 up switch to
/// exponent form with a signed two-digit exponent (`1e-05`, `1.5e+16`).
pub fn format_amount(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string().to_lowercase();
    }

    let scientific = format!("{:e}", amount);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if amount != 0.0 && !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    } else if amount.fract() == 0.0 {
        format!("{:.1}", amount)
    } else {
        amount.to_string()
    }
}

/// Format an optional sum, printing [`NO_TOTAL`] when absent
pub fn format_optional_amount(amount: Option<f64>) -> String {
    amount.map(format_amount).unwrap_or_else(|| NO_TOTAL.to_string())
}

/// Format a single expense as one console line
pub fn format_expense_row(expense: &Expense, currency: &str) -> String {
    format!(
        "ID: {}, Date: {}, Description: {}, Amount: {}: {}",
        expense.id,
        expense.date,
        expense.description,
        currency,
        format_optional_amount(expense.amount)
    )
}

/// Format a heading followed by one line per expense
///
/// Returns `empty_message` alone when there is nothing to list.
pub fn format_expense_list(
    expenses: &[Expense],
    heading: &str,
    empty_message: &str,
    currency: &str,
) -> String {
    if expenses.is_empty() {
        return format!("{}\n", empty_message);
    }

    let mut output = String::new();
    output.push_str(heading);
    output.push('\n');
    for expense in expenses {
        output.push_str(&format_expense_row(expense, currency));
        output.push('\n');
    }
    output
}

/// Format the total expenses line
pub fn format_total(total: Option<f64>, currency: &str) -> String {
    format!("Total expenses: {}: {}", currency, format_optional_amount(total))
}

/// Format the analysis report
pub fn format_analysis(analysis: &ExpenseAnalysis) -> String {
    let mut output = String::new();

    output.push_str("\n***EXPENSE ANALYSIS***\n\n");
    output.push_str(&format!(
        "a. Maximum amount spent = {}\n",
        format_amount(analysis.maximum)
    ));
    output.push_str(&format!(
        "b. Minimum amount spent = {}\n",
        format_amount(analysis.minimum)
    ));
    output.push_str(&format!("c. Average amount spent = {:.2}\n", analysis.average));
    output.push_str(&format!(
        "d. Total amount spent = {}\n",
        format_amount(analysis.total)
    ));
    output.push_str(&format!("e. Total number of expenses = {}\n", analysis.count));
    output.push_str("\n***END OF EXPENSE ANALYSIS***\n");

    output
}
