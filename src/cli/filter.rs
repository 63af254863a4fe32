//! Data filter submenu
//!
//! Walks the user through the two-level filter menu and turns the answers
//! into an [`ExpenseFilter`]. Invalid answers are reported here and yield
//! `None`, so no query runs.

use std::io::{BufRead, Write};

use super::prompt::Console;
use crate::error::ExpenseResult;
use crate::models::{parse_filter_date, AmountBand, DateFilter, ExpenseFilter};

pub const INVALID_INPUT: &str = "Invalid input.";
pub const INVALID_DATES: &str = "Invalid date format. Please enter dates in YYYY-MM-DD format.";
pub const INVALID_DATE: &str = "Invalid date format. Please enter date in YYYY-MM-DD format.";

/// Ask which filter to apply
pub fn prompt_filter<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> ExpenseResult<Option<ExpenseFilter>> {
    console.say("Select Filter Option:")?;
    console.say("1. Filter by Date")?;
    console.say("2. Filter by Amount")?;

    match console.ask_inline("Enter your choice (1 or 2): ")?.trim() {
        "1" => Ok(prompt_date_filter(console)?.map(ExpenseFilter::Date)),
        "2" => Ok(prompt_amount_band(console)?.map(ExpenseFilter::Amount)),
        _ => {
            console.say(INVALID_INPUT)?;
            Ok(None)
        }
    }
}

fn prompt_date_filter<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> ExpenseResult<Option<DateFilter>> {
    console.say("Select Date Range:")?;
    console.say("1. Today")?;
    console.say("2. Past Month")?;
    console.say("3. Past Year")?;
    console.say("4. Custom Range")?;
    console.say("5. Custom Date Search")?;

    let filter = match console.ask_inline("Enter your choice (1, 2, 3, 4, or 5): ")?.trim() {
        "1" => DateFilter::Today,
        "2" => DateFilter::PastMonth,
        "3" => DateFilter::PastYear,
        "4" => {
            let start = console.ask_inline("Enter start date (YYYY-MM-DD): ")?;
            let end = console.ask_inline("Enter end date (YYYY-MM-DD): ")?;
            match (parse_filter_date(&start), parse_filter_date(&end)) {
                (Ok(start), Ok(end)) => DateFilter::Range { start, end },
                _ => {
                    console.say(INVALID_DATES)?;
                    return Ok(None);
                }
            }
        }
        "5" => {
            let day = console.ask_inline("Enter the date (YYYY-MM-DD): ")?;
            match parse_filter_date(&day) {
                Ok(day) => DateFilter::On(day),
                Err(_) => {
                    console.say(INVALID_DATE)?;
                    return Ok(None);
                }
            }
        }
        _ => {
            console.say(INVALID_INPUT)?;
            return Ok(None);
        }
    };

    Ok(Some(filter))
}

fn prompt_amount_band<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> ExpenseResult<Option<AmountBand>> {
    console.say("Select Amount Range:")?;
    for (i, band) in [
        AmountBand::UpTo500,
        AmountBand::From500To2500,
        AmountBand::Above2500,
    ]
    .iter()
    .enumerate()
    {
        console.say(&format!("{}. {}", i + 1, band))?;
    }

    let band = match console.ask_inline("Enter your choice (1, 2, or 3): ")?.trim() {
        "1" => AmountBand::UpTo500,
        "2" => AmountBand::From500To2500,
        "3" => AmountBand::Above2500,
        _ => {
            console.say(INVALID_INPUT)?;
            return Ok(None);
        }
    };

    Ok(Some(band))
}
