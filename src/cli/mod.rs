//! CLI command handlers
//!
//! This module contains the interactive menu and the console plumbing it
//! runs on, bridging user input with the service layer.

pub mod filter;
pub mod menu;
pub mod prompt;

pub use filter::prompt_filter;
pub use menu::{Menu, MenuChoice};
pub use prompt::Console;
