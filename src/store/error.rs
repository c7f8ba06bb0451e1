//! Storage error types.

use thiserror::Error;

/// Errors that can occur while reading or writing a key-value store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage medium could not be read or written
    #[error("Storage I/O failed for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Serialization to JSON failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Stored data could not be decoded
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Key cannot be mapped onto the storage medium
    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),
}
