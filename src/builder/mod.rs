//! Builder API for calculator session construction.
//!
//! This module provides a fluent builder for wiring a calculator session to
//! its history backend, plus shortcuts for the two common setups.

pub mod error;
pub mod session;

pub use error::BuildError;
pub use session::CalculatorBuilder;

use crate::effects::Calculator;
use crate::store::{FileStore, HistoryStore, MemoryStore};
use std::path::PathBuf;

/// Create a session whose history lasts only as long as the process.
///
/// # Example
///
/// ```
/// use calcpad::builder::ephemeral_calculator;
///
/// let calc = ephemeral_calculator();
/// assert!(calc.history().is_empty());
/// ```
pub fn ephemeral_calculator() -> Calculator<MemoryStore> {
    Calculator::new(HistoryStore::new(MemoryStore::new()))
}

/// Create a session persisting history as files under `directory`.
///
/// # Example
///
/// ```
/// use calcpad::builder::file_calculator;
///
/// let dir = std::env::temp_dir().join("calcpad-doc");
/// let calc = file_calculator(dir);
/// assert_eq!(calc.display(), "0");
/// ```
pub fn file_calculator(directory: impl Into<PathBuf>) -> Calculator<FileStore> {
    Calculator::new(HistoryStore::new(FileStore::new(directory)))
}
