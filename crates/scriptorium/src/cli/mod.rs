//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the scriptorium binary.

mod books;
mod commands;
mod generate;
mod serve;

pub use books::{fetch_book, list_books};
pub use commands::{Cli, Commands};
pub use generate::generate_book;
pub use serve::serve;
