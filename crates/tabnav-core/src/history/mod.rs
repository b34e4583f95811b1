//! Tab-history policies.
//!
//! When a pop request exhausts the active stack, the history decides whether
//! navigation continues in a previously visited tab. The policy is a closed
//! set, see [`TabHistoryController`].
//!
//! A history-driven switch is recorded by the history itself once the
//! [`SwitchController`] succeeds; the switch controller must not record it
//! again.

mod unique;
mod unlimited;

pub use unique::UniqueTabHistory;
pub use unlimited::UnlimitedTabHistory;

use tabnav_model::{NavigationStrategy, Result, TabIndex, TransactionOptions};

/// Pops entries from the active stack.
pub trait PopController {
    /// Pops up to `depth` entries and returns how many were consumed.
    fn try_pop_fragments(
        &mut self,
        depth: usize,
        options: Option<&TransactionOptions>,
    ) -> Result<usize>;
}

/// Activates a tab.
pub trait SwitchController {
    fn switch_tab(&mut self, index: TabIndex, options: Option<&TransactionOptions>) -> Result<()>;
}

/// Active tab-history policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TabHistoryController {
    /// Pops never leave the active tab.
    #[default]
    CurrentTabOnly,
    UniqueTabHistory(UniqueTabHistory),
    UnlimitedTabHistory(UnlimitedTabHistory),
}

impl TabHistoryController {
    pub fn new(strategy: NavigationStrategy) -> Self {
        match strategy {
            NavigationStrategy::CurrentTab => Self::CurrentTabOnly,
            NavigationStrategy::UniqueTabHistory => {
                Self::UniqueTabHistory(UniqueTabHistory::new())
            }
            NavigationStrategy::UnlimitedTabHistory => {
                Self::UnlimitedTabHistory(UnlimitedTabHistory::new())
            }
        }
    }

    /// Records a visit to `index`.
    pub fn switch_tab(&mut self, index: TabIndex) {
        match self {
            Self::CurrentTabOnly => {}
            Self::UniqueTabHistory(history) => history.record(index),
            Self::UnlimitedTabHistory(history) => history.record(index),
        }
    }

    /// Visited tabs, oldest first.
    pub fn entries(&self) -> &[TabIndex] {
        match self {
            Self::CurrentTabOnly => &[],
            Self::UniqueTabHistory(history) => history.entries(),
            Self::UnlimitedTabHistory(history) => history.entries(),
        }
    }

    pub fn clear(&mut self) {
        match self {
            Self::CurrentTabOnly => {}
            Self::UniqueTabHistory(history) => history.clear(),
            Self::UnlimitedTabHistory(history) => history.clear(),
        }
    }

    /// The ordering to persist, `None` when the policy keeps none.
    pub fn save(&self) -> Option<Vec<usize>> {
        match self {
            Self::CurrentTabOnly => None,
            _ => Some(self.entries().iter().map(|index| index.get()).collect()),
        }
    }

    /// Rebuilds the ordering from a persisted list.
    ///
    /// Every entry must be below `tab_count`; on error the history is left
    /// untouched.
    pub fn restore(&mut self, saved: Option<&[usize]>, tab_count: usize) -> Result<()> {
        let Some(saved) = saved else {
            return Ok(());
        };
        let indices = saved
            .iter()
            .map(|index| TabIndex::new(*index).and_then(|tab| tab.check(tab_count)))
            .collect::<Result<Vec<_>>>()?;

        if let Self::UniqueTabHistory(history) = self {
            history.restore(indices);
        } else {
            self.clear();
            for index in indices {
                self.switch_tab(index);
            }
        }
        Ok(())
    }

    /// Pops `depth` entries, switching back through visited tabs whenever the
    /// active stack is exhausted.
    ///
    /// Returns whether anything was popped or switched.
    pub fn pop_fragments<N>(
        &mut self,
        depth: usize,
        options: Option<&TransactionOptions>,
        navigator: &mut N,
    ) -> Result<bool>
    where
        N: PopController + SwitchController + ?Sized,
    {
        if matches!(self, Self::CurrentTabOnly) {
            return Ok(navigator.try_pop_fragments(depth, options)? > 0);
        }

        let mut remaining = depth;
        let mut changed = false;
        while remaining > 0 {
            let popped = navigator.try_pop_fragments(remaining, options)?;
            if popped > 0 {
                remaining = remaining.saturating_sub(popped);
                changed = true;
                continue;
            }

            let Some(target) = self.previous() else {
                break;
            };
            navigator.switch_tab(target, options)?;
            self.returned_to(target);
            tracing::debug!(tab = %target, remaining, "returned to previous tab");
            remaining -= 1;
            changed = true;
        }
        Ok(changed)
    }

    fn previous(&self) -> Option<TabIndex> {
        match self {
            Self::CurrentTabOnly => None,
            Self::UniqueTabHistory(history) => history.previous(),
            Self::UnlimitedTabHistory(history) => history.previous(),
        }
    }

    fn returned_to(&mut self, index: TabIndex) {
        match self {
            Self::CurrentTabOnly => {}
            Self::UniqueTabHistory(history) => history.returned_to(index),
            Self::UnlimitedTabHistory(history) => history.returned_to(index),
        }
    }
}
