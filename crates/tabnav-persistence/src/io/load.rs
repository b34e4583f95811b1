//! State loading.

use std::fs;
use std::path::Path;

use crate::codec::decode_state;
use crate::error::{Result, StateError};
use crate::types::SavedState;

/// Load a state record from a JSON file.
pub fn load_state(path: &Path) -> Result<SavedState> {
    let text = fs::read_to_string(path).map_err(|e| StateError::Io {
        operation: "read",
        path: path.to_path_buf(),
        source: e,
    })?;

    let state = decode_state(&text)?;

    tracing::info!(
        path = %path.display(),
        tabs = state.tab_count(),
        selected = ?state.selected_tab_index,
        "loaded navigation state"
    );
    Ok(state)
}
