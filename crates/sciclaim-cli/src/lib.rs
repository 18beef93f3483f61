//! Sciclaim CLI library.
//!
//! This library provides the core functionality for the `sciclaim` command-line
//! interface, including argument parsing, input handling, and output formatting.

pub mod cli;
pub mod error;
pub mod input;
pub mod output;

pub use cli::{Cli, CliFormat};
pub use error::{CliError, Result};
pub use output::{Formatter, OutputFormat};
