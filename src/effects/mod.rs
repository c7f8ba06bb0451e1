//! The imperative shell around the pure core.
//!
//! [`Calculator`] owns the live state and a history store. Each input runs
//! the pure transition from [`crate::core`], then performs its side effects:
//! writing completed operations to the store and re-reading the history
//! shown to the user.
//!
//! Everything runs synchronously on the caller's thread; an input is fully
//! applied before the next one is accepted.

mod machine;

pub use machine::{Calculator, StepResult};
