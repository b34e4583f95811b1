//! JSON encoding of [`SavedState`] with a schema-version gate.

use serde_json::Value;

use crate::error::{Result, StateError};
use crate::types::{CURRENT_SCHEMA_VERSION, SavedState};

const VERSION_KEY: &str = "SCHEMA_VERSION";

/// Encode a state record as pretty-printed JSON.
pub fn encode_state(state: &SavedState) -> Result<String> {
    serde_json::to_string_pretty(state).map_err(|source| StateError::Serialization { source })
}

/// Decode a state record, rejecting records written by a newer schema.
pub fn decode_state(text: &str) -> Result<SavedState> {
    let value: Value =
        serde_json::from_str(text).map_err(|source| StateError::Deserialization { source })?;

    let Some(object) = value.as_object() else {
        return Err(StateError::invalid("expected a JSON object"));
    };

    let version = object
        .get(VERSION_KEY)
        .and_then(Value::as_u64)
        .ok_or_else(|| StateError::invalid(format!("missing or malformed {VERSION_KEY}")))?;
    let version = u32::try_from(version).unwrap_or(u32::MAX);

    if version > CURRENT_SCHEMA_VERSION {
        return Err(StateError::UnsupportedVersion {
            found: version,
            max_supported: CURRENT_SCHEMA_VERSION,
        });
    }

    serde_json::from_value(value).map_err(|source| StateError::Deserialization { source })
}
