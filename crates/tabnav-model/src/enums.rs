//! Small closed sets used across the navigation crates.

use serde::{Deserialize, Serialize};

/// Kind of in-tab transaction reported to listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    Push,
    Pop,
    Replace,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Push => "push",
            Self::Pop => "pop",
            Self::Replace => "replace",
        }
    }
}

/// How units leave the screen when they stop being current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum HideStrategy {
    /// Detach and attach, both within a tab and across tabs.
    #[default]
    Detach,
    /// Hide and show, both within a tab and across tabs.
    Hide,
    /// Detach within a tab, hide when switching tabs.
    DetachOnNavigateHideOnSwitch,
    /// Detach within a tab, remove when switching tabs.
    Remove,
}

impl HideStrategy {
    /// Push/pop detaches the outgoing unit instead of hiding it.
    pub fn detach_on_push_pop(&self) -> bool {
        !matches!(self, Self::Hide)
    }

    /// Switching tabs detaches the outgoing unit.
    pub fn detach_on_switch(&self) -> bool {
        matches!(self, Self::Detach)
    }

    /// Switching tabs removes the outgoing unit from the host.
    pub fn remove_on_switch(&self) -> bool {
        matches!(self, Self::Remove)
    }
}

/// Tab-history policy applied when a pop exhausts the current stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum NavigationStrategy {
    /// Only pop within the current tab.
    #[default]
    CurrentTab,
    /// Return to previously visited tabs, each tab at most once.
    UniqueTabHistory,
    /// Return through every recorded tab visit.
    UnlimitedTabHistory,
}

impl NavigationStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CurrentTab => "current-tab",
            Self::UniqueTabHistory => "unique-tab-history",
            Self::UnlimitedTabHistory => "unlimited-tab-history",
        }
    }

    /// Whether the strategy switches tabs and therefore needs a switch controller.
    pub fn uses_tab_history(&self) -> bool {
        !matches!(self, Self::CurrentTab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hide_strategy_matrix() {
        let cases = [
            (HideStrategy::Detach, true, true, false),
            (HideStrategy::Hide, false, false, false),
            (HideStrategy::DetachOnNavigateHideOnSwitch, true, false, false),
            (HideStrategy::Remove, true, false, true),
        ];
        for (strategy, push_pop, detach_switch, remove_switch) in cases {
            assert_eq!(strategy.detach_on_push_pop(), push_pop, "{strategy:?}");
            assert_eq!(strategy.detach_on_switch(), detach_switch, "{strategy:?}");
            assert_eq!(strategy.remove_on_switch(), remove_switch, "{strategy:?}");
        }
    }

    #[test]
    fn only_history_strategies_need_switching() {
        assert!(!NavigationStrategy::CurrentTab.uses_tab_history());
        assert!(NavigationStrategy::UniqueTabHistory.uses_tab_history());
        assert!(NavigationStrategy::UnlimitedTabHistory.uses_tab_history());
    }
}
