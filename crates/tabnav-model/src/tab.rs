#![deny(unsafe_code)]

use std::fmt;

use crate::NavError;

/// Hard cap on the number of tabs a controller can manage.
pub const MAX_TABS: usize = 20;

/// Index of a tab, validated against [`MAX_TABS`] at construction.
///
/// The "no tab selected" sentinel is modelled as `Option<TabIndex>::None`
/// rather than a magic value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "usize", into = "usize")]
pub struct TabIndex(u8);

impl TabIndex {
    /// The first tab.
    pub const FIRST: TabIndex = TabIndex(0);

    pub fn new(index: usize) -> Result<Self, NavError> {
        if index >= MAX_TABS {
            return Err(NavError::IndexOutOfRange {
                index,
                tab_count: MAX_TABS,
            });
        }
        Ok(Self(index as u8))
    }

    pub fn get(self) -> usize {
        usize::from(self.0)
    }

    /// Checks the index against a controller's configured tab count.
    pub fn check(self, tab_count: usize) -> Result<Self, NavError> {
        if self.get() >= tab_count {
            return Err(NavError::IndexOutOfRange {
                index: self.get(),
                tab_count,
            });
        }
        Ok(self)
    }

    /// All indices below `tab_count` (clamped to [`MAX_TABS`]).
    pub fn range(tab_count: usize) -> impl Iterator<Item = TabIndex> {
        (0..tab_count.min(MAX_TABS)).map(|index| TabIndex(index as u8))
    }
}

impl TryFrom<usize> for TabIndex {
    type Error = NavError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TabIndex> for usize {
    fn from(value: TabIndex) -> Self {
        value.get()
    }
}

impl fmt::Display for TabIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
