//! History entries and the capped, most-recent-first history list.
//!
//! Like the state, a [`History`] is immutable: [`History::record`] returns a
//! new list with the entry added.

use super::arithmetic::format_number;
use super::state::Operator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of entries kept in a history.
pub const HISTORY_LIMIT: usize = 20;

/// One completed operation, already formatted for display.
///
/// # Example
///
/// ```rust
/// use calcpad::core::{HistoryEntry, Operator};
///
/// let entry = HistoryEntry::equals(1.0, Operator::Add, "2", 3.0);
/// assert_eq!(entry.as_str(), "1 + 2 = 3");
///
/// let entry = HistoryEntry::chained(3.0, Operator::Add);
/// assert_eq!(entry.as_str(), "3 (+)");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryEntry(String);

impl HistoryEntry {
    /// Entry written when equals completes: `"<a> <op> <b> = <result>"`.
    ///
    /// `operand` is the right-hand display text exactly as typed.
    pub fn equals(accumulator: f64, operator: Operator, operand: &str, result: f64) -> Self {
        Self(format!(
            "{} {} {} = {}",
            format_number(accumulator),
            operator,
            operand,
            format_number(result)
        ))
    }

    /// Entry written when an operator press completes a chained step:
    /// `"<result> (<op>)"`, where `op` is the operator that was applied.
    pub fn chained(result: f64, applied: Operator) -> Self {
        Self(format!("{} ({})", format_number(result), applied))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for HistoryEntry {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for HistoryEntry {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered history of completed operations, newest first, at most
/// [`HISTORY_LIMIT`] entries.
///
/// # Example
///
/// ```rust
/// use calcpad::core::History;
///
/// let history = History::new();
/// let history = history.record("1 + 1 = 2".into());
/// let history = history.record("2 * 3 = 6".into());
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.latest().map(|e| e.as_str()), Some("2 * 3 = 6"));
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a history from stored entries, newest first.
    ///
    /// Entries beyond [`HISTORY_LIMIT`] are dropped from the tail.
    pub fn from_entries<I, E>(entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<HistoryEntry>,
    {
        Self {
            entries: entries
                .into_iter()
                .take(HISTORY_LIMIT)
                .map(Into::into)
                .collect(),
        }
    }

    /// Record an entry, returning a new history.
    ///
    /// The entry goes to the front; the oldest entries fall off the tail
    /// once the limit is reached. The existing history is left unchanged.
    pub fn record(&self, entry: HistoryEntry) -> Self {
        let mut entries = Vec::with_capacity(HISTORY_LIMIT);
        entries.push(entry);
        entries.extend(
            self.entries
                .iter()
                .take(HISTORY_LIMIT.saturating_sub(1))
                .cloned(),
        );
        Self { entries }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries as plain strings, in storage order.
    pub fn to_strings(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.as_str().to_string()).collect()
    }
}
