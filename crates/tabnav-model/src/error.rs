//! Navigation error taxonomy.
//!
//! Configuration and contract violations are returned to the caller. Host-state
//! inconsistencies never surface here; the controller absorbs and logs them.

use thiserror::Error;

use crate::tab::MAX_TABS;

/// Error returned by navigation operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// The controller was configured incorrectly. Always a programming error.
    #[error("invalid navigation configuration: {0}")]
    Configuration(#[from] ConfigError),

    /// The operation is not permitted in the controller's current state.
    #[error("unsupported navigation operation: {0}")]
    Unsupported(#[from] UnsupportedOperation),

    /// A tab index outside `[0, tab_count)` was requested.
    #[error("tab index {index} is out of range (tab count: {tab_count})")]
    IndexOutOfRange { index: usize, tab_count: usize },
}

/// Configuration mistakes detected at build or initialize time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("either root units or a root factory must be configured")]
    MissingRootSource,

    #[error("root units and a root factory cannot both be configured")]
    ConflictingRootSources,

    #[error("at least one tab must be configured")]
    NoTabs,

    #[error("{count} tabs configured, the maximum is {MAX_TABS}")]
    TooManyTabs { count: usize },

    #[error("starting tab {index} is not below the configured tab count {tab_count}")]
    StartIndexOutOfRange { index: usize, tab_count: usize },

    #[error("the {strategy} strategy requires a switch controller")]
    MissingSwitchController { strategy: &'static str },

    #[error("no root unit is available for tab {index}")]
    MissingRootUnit { index: usize },
}

/// Documented contract violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnsupportedOperation {
    #[error("the root unit cannot be popped; replace it instead")]
    PopRoot,

    #[error("pop depth must be at least 1 (got {0})")]
    InvalidPopDepth(usize),

    #[error("no tab is selected")]
    NoActiveTab,
}

pub type Result<T> = std::result::Result<T, NavError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let err = NavError::IndexOutOfRange {
            index: 7,
            tab_count: 3,
        };
        assert_eq!(
            err.to_string(),
            "tab index 7 is out of range (tab count: 3)"
        );

        let err = NavError::from(ConfigError::TooManyTabs { count: 21 });
        assert_eq!(
            err.to_string(),
            "invalid navigation configuration: 21 tabs configured, the maximum is 20"
        );
    }

    #[test]
    fn unsupported_converts_into_nav_error() {
        let err: NavError = UnsupportedOperation::PopRoot.into();
        assert!(matches!(
            err,
            NavError::Unsupported(UnsupportedOperation::PopRoot)
        ));
    }
}
