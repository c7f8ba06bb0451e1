//! Calculator session that applies transitions and performs their effects.

use crate::core::{
    step, CalculatorState, History, HistoryEntry, Input, Transition, TransitionError,
};
use crate::store::{HistoryStore, KeyValueStore};
use tracing::{debug, info};

/// Result of executing a single step
#[derive(Clone, Debug, PartialEq)]
pub enum StepResult {
    /// State changed, nothing was logged
    Applied,

    /// State changed and the entry was written to the history
    Logged(HistoryEntry),

    /// Input was blocked by a guard; state is unchanged
    Ignored { reason: &'static str },
}

/// One running calculator: the live state, its history store, and the
/// history copy shown to the user.
///
/// The store is the source of truth for history. The render copy is re-read
/// from it after every write.
pub struct Calculator<B: KeyValueStore> {
    state: CalculatorState,
    store: HistoryStore<B>,
    history: History,
}

impl<B: KeyValueStore> Calculator<B> {
    /// Start a session with a fresh state, loading history from `store`.
    pub fn new(store: HistoryStore<B>) -> Self {
        Self::with_state(CalculatorState::new(), store)
    }

    pub(crate) fn with_state(state: CalculatorState, store: HistoryStore<B>) -> Self {
        let history = store.load();
        info!(entries = history.len(), "calculator session started");
        Self {
            state,
            store,
            history,
        }
    }

    /// Get current state (pure)
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Display text to render (pure)
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// History as last read from the store, newest first (pure)
    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn store(&self) -> &HistoryStore<B> {
        &self.store
    }

    /// Compute the transition for `input` without applying it.
    /// Call [`Calculator::apply_result`] with the outcome to commit it.
    pub fn step(&self, input: Input) -> Result<Transition, TransitionError> {
        step(&self.state, input)
    }

    /// Apply the result from step() to update the session.
    pub fn apply_result(
        &mut self,
        result: Result<Transition, TransitionError>,
    ) -> StepResult {
        match result {
            Ok(transition) => {
                self.state = transition.next;
                match transition.record {
                    Some(entry) => {
                        self.store.save(entry.clone());
                        self.refresh_history();
                        StepResult::Logged(entry)
                    }
                    None => StepResult::Applied,
                }
            }
            Err(TransitionError::GuardBlocked { reason, .. }) => StepResult::Ignored { reason },
        }
    }

    /// Run one input to completion.
    pub fn press(&mut self, input: Input) -> StepResult {
        let result = self.step(input);
        let outcome = self.apply_result(result);
        debug!(
            input = input.name(),
            display = self.state.display(),
            outcome = ?outcome,
            "input applied"
        );
        outcome
    }

    /// Run several inputs in order, returning the last outcome.
    pub fn press_all<I>(&mut self, inputs: I) -> Option<StepResult>
    where
        I: IntoIterator<Item = Input>,
    {
        inputs.into_iter().map(|input| self.press(input)).last()
    }

    /// Delete all stored history.
    pub fn clear_history(&mut self) {
        self.store.clear();
        self.refresh_history();
    }

    /// Re-read the render copy of the history from the store.
    pub fn refresh_history(&mut self) {
        self.history = self.store.load();
    }
}
