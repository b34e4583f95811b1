//! Multi-stack tab navigation.
//!
//! A [`NavController`] keeps one back-stack of screen units per tab and decides
//! which unit is visible. Every navigation call (push, pop, replace, switch,
//! clear) becomes one [`Transaction`] of add/remove/attach/detach/show/hide
//! operations committed to a [`TransactionHost`]. The host owns the units; the
//! controller only tracks their [`Tag`]s.
//!
//! # Example
//!
//! ```ignore
//! use tabnav_core::{NavControllerBuilder, NavigationStrategy};
//!
//! let mut nav = NavControllerBuilder::new(host)
//!     .root_units(vec![home, search, profile])
//!     .navigation_strategy(NavigationStrategy::UniqueTabHistory)
//!     .switch_controller(bottom_bar)
//!     .build()?;
//! nav.initialize(Some(TabIndex::FIRST), saved.as_ref())?;
//!
//! nav.push_fragment(details, None);
//! nav.pop_fragment(None)?;
//! let saved = nav.save_state();
//! ```
//!
//! # Modules
//!
//! - `host` - capabilities the host provides
//! - `transaction` - the operations committed to the host
//! - `history` - tab-history policies
//! - `controller` - the controller itself
//! - `builder` - configuration and validation

mod builder;
mod cache;
mod controller;
pub mod error;
pub mod history;
pub mod host;
pub mod transaction;

pub use builder::NavControllerBuilder;
pub use controller::NavController;
pub use error::{HostError, RecoveryError};
pub use history::{
    PopController, SwitchController, TabHistoryController, UniqueTabHistory, UnlimitedTabHistory,
};
pub use host::{
    DialogScope, ErrorLogger, RootFactory, ScreenUnit, TransactionHost, TransactionListener,
    WeakUnit,
};
pub use transaction::{CommitMode, Operation, Transaction};

pub use tabnav_model::{
    AnimationPair, ConfigError, HideStrategy, MAX_TABS, NavError, NavigationStrategy, Result,
    TabIndex, Tag, TransactionOptions, TransactionType, UnsupportedOperation,
};
pub use tabnav_persistence::SavedState;
