//! File I/O for saved navigation state.
//!
//! Saves are atomic (temp file + rename); loads go through the schema gate
//! in [`crate::codec`].

mod load;
mod save;

pub use load::load_state;
pub use save::save_state;
