//! State saving.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::codec::encode_state;
use crate::error::{Result, StateError};
use crate::types::SavedState;

/// Save a state record to a JSON file.
///
/// Uses atomic write (temp file + rename) so a crash never leaves a
/// half-written state behind.
pub fn save_state(state: &SavedState, path: &Path) -> Result<()> {
    let text = encode_state(state)?;
    let temp_path = temp_path_for(path);

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| StateError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut file = File::create(&temp_path).map_err(|e| StateError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;

    file.write_all(text.as_bytes()).map_err(|e| StateError::Io {
        operation: "write",
        path: temp_path.clone(),
        source: e,
    })?;

    file.sync_all().map_err(|e| StateError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| StateError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(
        path = %path.display(),
        tabs = state.tab_count(),
        tag_count = state.tag_count,
        "saved navigation state"
    );
    Ok(())
}

/// `state.json` -> `state.json.tmp`, `state` -> `state.tmp`.
fn temp_path_for(path: &Path) -> PathBuf {
    let extension = match path.extension() {
        Some(ext) => format!("{}.tmp", ext.to_string_lossy()),
        None => "tmp".to_string(),
    };
    path.with_extension(extension)
}
