//! Saved navigation state for TabNav.
//!
//! A controller captures its tab stacks, tag counter, selection and tab
//! history into a [`SavedState`] record. This crate owns the record, its JSON
//! encoding and the file I/O around it.
//!
//! # Format
//!
//! ```text
//! {
//!   "SCHEMA_VERSION": 1,
//!   "TAG_COUNT": 4,
//!   "SELECTED_TAB_INDEX": 1,          // null when no tab is selected
//!   "CURRENT_FRAGMENT": "Post4",
//!   "FRAGMENT_STACK": [["Home1"], ["Feed2", "Post4"]],
//!   "TAB_HISTORY": [0, 1]             // null for the current-tab strategy
//! }
//! ```
//!
//! Records with a newer `SCHEMA_VERSION` are rejected.

mod codec;
mod error;
mod io;
mod types;

pub use codec::{decode_state, encode_state};
pub use error::{Result, StateError};
pub use io::{load_state, save_state};
pub use types::{CURRENT_SCHEMA_VERSION, SavedState};
