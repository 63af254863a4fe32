//! Expense Tracker - menu-driven personal expense tracking
//!
//! This library provides the core functionality for the `expense` binary:
//! recording, editing, filtering, summarizing and exporting expenses kept in
//! a local SQLite table.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: File-based tracing setup
//! - `models`: The expense record, its id, and filters
//! - `storage`: SQLite handle and query templates
//! - `services`: Business logic layer
//! - `display`: Console formatting
//! - `export`: CSV export
//! - `cli`: Interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{ExpensePaths, Settings};
//! use expense_tracker::storage::Storage;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(&paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
