//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - Calculator state and operators
//! - Arithmetic and number formatting
//! - Guard predicates for blocked inputs
//! - The transition function
//! - Immutable history entries
//!
//! Nothing in this module performs I/O. Side effects live in
//! [`crate::effects`] and [`crate::store`].

mod arithmetic;
mod guard;
mod history;
mod state;
mod transition;

pub use arithmetic::{compute, format_number, parse_display, NAN_TOKEN};
pub use guard::Guard;
pub use history::{History, HistoryEntry, HISTORY_LIMIT};
pub use state::{CalculatorState, Operator, Pending};
pub use transition::{step, Digit, Input, Transition, TransitionError};
