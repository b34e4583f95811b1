//! Saved-state error types.
//!
//! Every persistence operation returns a structured error that carries a
//! user-facing message and an optional remediation hint.

use std::path::PathBuf;
use thiserror::Error;

/// Saved-state operation error.
#[derive(Debug, Error)]
pub enum StateError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data is not a navigation state record, or it does not fit the
    /// controller it is restored into.
    #[error("Invalid navigation state: {reason}")]
    InvalidFormat { reason: String },

    /// Unsupported schema version.
    #[error("Navigation state version {found} is not supported (maximum: {max_supported})")]
    UnsupportedVersion { found: u32, max_supported: u32 },

    /// Serialization error.
    #[error("Failed to serialize navigation state")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// Deserialization error.
    #[error("Failed to deserialize navigation state")]
    Deserialization {
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

impl StateError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            reason: reason.into(),
        }
    }

    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} the file at {}", operation, path.display())
            }
            Self::InvalidFormat { reason } => {
                format!("The saved navigation state cannot be used: {reason}")
            }
            Self::UnsupportedVersion {
                found,
                max_supported,
            } => {
                format!(
                    "This state was saved by a newer version of TabNav \
                    (state version {found}, this version supports up to {max_supported})."
                )
            }
            Self::Serialization { .. } => {
                "An error occurred while writing the navigation state.".to_string()
            }
            Self::Deserialization { .. } => {
                "An error occurred while reading the navigation state. The file may be corrupted."
                    .to_string()
            }
            Self::AtomicWriteFailed { target_path, .. } => {
                format!(
                    "Could not save the state to {}. Please check disk space and permissions.",
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
                    Some("Check that the file exists and you have permission to read it.".into())
                } else {
                    Some("Check that you have permission to write to this location.".into())
                }
            }
            Self::InvalidFormat { .. } => {
                Some("Delete the state file to start from the initial tabs.".into())
            }
            Self::UnsupportedVersion { .. } => Some("Upgrade TabNav to read this state.".into()),
            Self::Serialization { .. } => None,
            Self::Deserialization { .. } => {
                Some("Delete the state file to start from the initial tabs.".into())
            }
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or try saving to a different location.".into())
            }
        }
    }
}

/// Result type alias for saved-state operations.
pub type Result<T> = std::result::Result<T, StateError>;
