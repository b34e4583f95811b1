//! Weak tag → unit cache.
//!
//! The host only answers tag lookups for transactions it has applied. The
//! cache covers the gap between commit and application without keeping units
//! alive.

use std::collections::HashMap;

use tabnav_model::Tag;

use crate::host::{ScreenUnit, WeakUnit};

pub(crate) struct UnitCache<U: ScreenUnit> {
    entries: HashMap<Tag, U::Weak>,
}

impl<U: ScreenUnit> Default for UnitCache<U> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<U: ScreenUnit> UnitCache<U> {
    pub(crate) fn insert(&mut self, tag: Tag, unit: &U) {
        self.entries.insert(tag, unit.downgrade());
    }

    /// The unit for `tag` if it is still alive.
    pub(crate) fn get(&self, tag: &Tag) -> Option<U> {
        self.entries.get(tag).and_then(WeakUnit::upgrade)
    }

    pub(crate) fn remove(&mut self, tag: &Tag) {
        self.entries.remove(tag);
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    /// Drops entries whose unit has been reclaimed.
    pub(crate) fn prune(&mut self) {
        self.entries.retain(|_, weak| weak.upgrade().is_some());
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
