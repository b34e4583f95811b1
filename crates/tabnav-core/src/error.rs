//! Non-fatal errors raised while the controller talks to its host.
//!
//! Configuration and contract errors live in [`tabnav_model::NavError`]. The
//! types here never abort an operation; the controller logs them through
//! `tracing` and hands them to the configured [`crate::ErrorLogger`].

use tabnav_model::Tag;
use tabnav_persistence::StateError;
use thiserror::Error;

/// Failure reported by a host capability.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The host already saved its state and refuses further changes.
    #[error("host state has already been saved")]
    StateSaved,
}

/// An inconsistency the controller recovered from.
#[derive(Debug, Error)]
pub enum RecoveryError {
    /// A stack entry whose unit the host no longer knows about.
    #[error("no unit found for tag {tag}")]
    UnresolvedTag { tag: Tag },

    /// Saved state was rejected; the controller started fresh.
    #[error("saved navigation state was rejected: {0}")]
    Restore(#[from] StateError),

    /// An overlay could not be shown.
    #[error("dialog could not be shown: {0}")]
    Dialog(#[from] HostError),
}
