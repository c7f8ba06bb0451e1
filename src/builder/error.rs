//! Build errors for calculator sessions.

use thiserror::Error;

/// Errors that can occur when building a calculator session.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("History backend not specified. Call .store(backend) before .build()")]
    MissingStore,

    #[error("History key must not be empty")]
    EmptyHistoryKey,
}
