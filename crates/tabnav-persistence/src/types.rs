//! The saved navigation state record.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StateError};

/// Current schema version.
///
/// Increment this when making breaking changes to the record layout.
/// The decoder rejects records with version > CURRENT_SCHEMA_VERSION.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Everything a controller needs to rebuild its navigation after the host
/// process was torn down.
///
/// Tags are kept as raw strings: placeholder entries written by older
/// versions are filtered when the record is applied, not when it is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct SavedState {
    /// Schema version (for future migrations).
    pub schema_version: u32,

    /// Monotonic tag counter.
    pub tag_count: u64,

    /// Active tab, `None` when no tab is selected.
    pub selected_tab_index: Option<usize>,

    /// Tag of the current unit.
    #[serde(default)]
    pub current_fragment: Option<String>,

    /// Per-tab tag stacks, bottom first.
    pub fragment_stack: Vec<Vec<String>>,

    /// Visited-tab ordering, only for history-keeping strategies.
    #[serde(default)]
    pub tab_history: Option<Vec<usize>>,
}

impl SavedState {
    pub fn new(tag_count: u64, selected_tab_index: Option<usize>) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            tag_count,
            selected_tab_index,
            current_fragment: None,
            fragment_stack: Vec::new(),
            tab_history: None,
        }
    }

    pub fn with_current_fragment(mut self, tag: impl Into<String>) -> Self {
        self.current_fragment = Some(tag.into());
        self
    }

    pub fn with_stacks(mut self, stacks: Vec<Vec<String>>) -> Self {
        self.fragment_stack = stacks;
        self
    }

    pub fn with_tab_history(mut self, history: Vec<usize>) -> Self {
        self.tab_history = Some(history);
        self
    }

    pub fn tab_count(&self) -> usize {
        self.fragment_stack.len()
    }

    /// Checks that the record fits a controller managing `tab_count` tabs.
    pub fn validate(&self, tab_count: usize) -> Result<()> {
        if self.fragment_stack.len() != tab_count {
            return Err(StateError::invalid(format!(
                "{} stacks saved for {} tabs",
                self.fragment_stack.len(),
                tab_count
            )));
        }
        if let Some(index) = self.selected_tab_index
            && index >= tab_count
        {
            return Err(StateError::invalid(format!(
                "selected tab {index} is out of range (tab count: {tab_count})"
            )));
        }
        if let Some(history) = &self.tab_history
            && let Some(index) = history.iter().find(|index| **index >= tab_count)
        {
            return Err(StateError::invalid(format!(
                "tab history entry {index} is out of range (tab count: {tab_count})"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_tabs() -> SavedState {
        SavedState::new(3, Some(1))
            .with_stacks(vec![vec!["Home1".into()], vec!["Feed2".into(), "Post3".into()]])
            .with_current_fragment("Post3")
    }

    #[test]
    fn validate_accepts_matching_record() {
        assert!(two_tabs().validate(2).is_ok());
    }

    #[test]
    fn validate_rejects_stack_count_mismatch() {
        let err = two_tabs().validate(3).unwrap_err();
        assert!(err.to_string().contains("2 stacks saved for 3 tabs"));
    }

    #[test]
    fn validate_rejects_out_of_range_selection() {
        let mut state = two_tabs();
        state.selected_tab_index = Some(2);
        assert!(matches!(
            state.validate(2),
            Err(StateError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn validate_rejects_out_of_range_history() {
        let state = two_tabs().with_tab_history(vec![0, 1, 4]);
        let err = state.validate(2).unwrap_err();
        assert!(err.to_string().contains("entry 4"));
    }
}
