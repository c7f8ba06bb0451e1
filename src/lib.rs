//! Calcpad: a keypad calculator with a persisted history
//!
//! Calcpad follows a "pure core, imperative shell" layout. The calculator
//! itself is a small state machine made of pure functions; storage and
//! terminal I/O are kept at the edges.
//!
//! # Core Concepts
//!
//! - **State**: display text, pending operation and overwrite mode
//! - **Transitions**: pure functions from a state and an input to the next state
//! - **History**: capped, most-recent-first log of completed operations
//! - **Session**: applies transitions and writes completed operations to a store
//!
//! Arithmetic is strictly left to right with a single pending operator.
//! Invalid results such as division by zero show `NaN` instead of failing.
//!
//! # Example
//!
//! ```rust
//! use calcpad::builder::ephemeral_calculator;
//! use calcpad::shell::input_for_key;
//!
//! let mut calc = ephemeral_calculator();
//! for key in ["1", "+", "2", "Enter"] {
//!     if let Some(input) = input_for_key(key) {
//!         calc.press(input);
//!     }
//! }
//!
//! assert_eq!(calc.display(), "3");
//! assert_eq!(calc.history().to_strings(), vec!["1 + 2 = 3"]);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod effects;
pub mod shell;
pub mod store;

// Re-export commonly used types
pub use builder::CalculatorBuilder;
pub use crate::core::{CalculatorState, History, HistoryEntry, Input, Operator};
pub use effects::{Calculator, StepResult};
pub use store::{FileStore, HistoryStore, KeyValueStore, MemoryStore};
