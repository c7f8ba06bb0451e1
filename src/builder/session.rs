//! Builder for constructing calculator sessions.

use crate::builder::error::BuildError;
use crate::core::CalculatorState;
use crate::effects::Calculator;
use crate::store::{HistoryStore, KeyValueStore, DEFAULT_HISTORY_KEY};

/// Builder for constructing calculator sessions with a fluent API.
///
/// # Example
///
/// ```rust
/// use calcpad::builder::CalculatorBuilder;
/// use calcpad::store::MemoryStore;
///
/// let calc = CalculatorBuilder::new()
///     .store(MemoryStore::new())
///     .history_key("scratch.history")
///     .build()
///     .unwrap();
///
/// assert_eq!(calc.display(), "0");
/// assert_eq!(calc.store().key(), "scratch.history");
/// ```
pub struct CalculatorBuilder<B: KeyValueStore> {
    backend: Option<B>,
    history_key: String,
    initial: CalculatorState,
}

impl<B: KeyValueStore> CalculatorBuilder<B> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            backend: None,
            history_key: DEFAULT_HISTORY_KEY.to_string(),
            initial: CalculatorState::new(),
        }
    }

    /// Set the history backend (required).
    pub fn store(mut self, backend: B) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Store history under a different key.
    pub fn history_key(mut self, key: impl Into<String>) -> Self {
        self.history_key = key.into();
        self
    }

    /// Start from a state other than the fresh session state.
    pub fn initial(mut self, state: CalculatorState) -> Self {
        self.initial = state;
        self
    }

    /// Build the session, loading its history from the store.
    pub fn build(self) -> Result<Calculator<B>, BuildError> {
        let backend = self.backend.ok_or(BuildError::MissingStore)?;

        if self.history_key.trim().is_empty() {
            return Err(BuildError::EmptyHistoryKey);
        }

        let store = HistoryStore::with_key(backend, self.history_key);
        Ok(Calculator::with_state(self.initial, store))
    }
}

impl<B: KeyValueStore> Default for CalculatorBuilder<B> {
    fn default() -> Self {
        Self::new()
    }
}
