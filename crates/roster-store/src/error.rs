//! Store error types.
//!
//! Storage failures are not retried; they surface from the mutating call
//! with a user-facing message and an optional hint.

use std::path::PathBuf;

use thiserror::Error;

/// Store or storage backend failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Storage key cannot be used by this backend.
    #[error("Invalid storage key {key:?}: {reason}")]
    InvalidKey { key: String, reason: &'static str },

    /// Serialization error.
    #[error("Failed to serialize employees for key {key}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Stored data could not be parsed.
    #[error("Failed to deserialize employees for key {key}")]
    Deserialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} the file at {}", operation, path.display())
            }
            Self::InvalidKey { key, reason } => {
                format!("The storage key '{}' cannot be used: {}", key, reason)
            }
            Self::Serialization { .. } => {
                "An error occurred while saving the employee data.".to_string()
            }
            Self::Deserialization { key, .. } => {
                format!(
                    "The stored employee data under '{}' could not be read. It may be corrupted.",
                    key
                )
            }
            Self::AtomicWriteFailed { target_path, .. } => {
                format!(
                    "Could not save the file to {}. Please check disk space and permissions.",
                    target_path.display()
                )
            }
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that you have permission to read the data directory.".into())
                } else {
                    Some("Check that you have permission to write to the data directory.".into())
                }
            }
            Self::InvalidKey { .. } => {
                Some("Use only letters, digits, '-', '_' and '.' in the storage key.".into())
            }
            Self::Serialization { .. } => None,
            Self::Deserialization { .. } => {
                Some("Move the damaged file aside or run `roster reset` to start over.".into())
            }
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or choose a different data directory.".into())
            }
        }
    }
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
