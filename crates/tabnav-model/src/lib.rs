//! Navigation vocabulary shared by the TabNav crates.
//!
//! - [`TabIndex`]: validated tab index bounded by [`MAX_TABS`]
//! - [`Tag`]: unique key of a stack entry
//! - [`TransactionOptions`]: per-transaction animation and commit settings
//! - [`NavError`]: configuration and contract errors

pub mod enums;
pub mod error;
pub mod options;
pub mod tab;
pub mod tag;

pub use enums::{HideStrategy, NavigationStrategy, TransactionType};
pub use error::{ConfigError, NavError, Result, UnsupportedOperation};
pub use options::{
    AnimationPair, SharedElement, TransactionOptions, TransactionOptionsBuilder, Transit,
};
pub use tab::{MAX_TABS, TabIndex};
pub use tag::Tag;
