//! Guard predicates for blocking transitions.
//!
//! A guard is a pure check over the current state. When it fails the input
//! is ignored and the state stays as it was.

/// Pure predicate that determines if a transition can execute.
///
/// # Example
///
/// ```rust
/// use calcpad::core::{CalculatorState, Guard};
///
/// let has_pending = Guard::new("nothing pending", |s: &CalculatorState| s.has_pending());
///
/// assert!(!has_pending.check(&CalculatorState::new()));
/// assert_eq!(has_pending.reason(), "nothing pending");
/// ```
pub struct Guard<S> {
    reason: &'static str,
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
}

impl<S> Guard<S> {
    /// Create a guard from a pure predicate.
    ///
    /// `reason` describes why the transition is blocked when the predicate
    /// returns `false`.
    pub fn new<F>(reason: &'static str, predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            reason,
            predicate: Box::new(predicate),
        }
    }

    /// Check if the guard allows a transition from this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }

    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

impl<S> std::fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").field("reason", &self.reason).finish()
    }
}
