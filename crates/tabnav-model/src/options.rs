//! Transaction options.
//!
//! Options describe *how* a transaction should look (animations, transit,
//! shared elements, breadcrumbs) and *how* it is committed. They are immutable
//! once built; a controller holds an optional default that applies whenever a
//! call does not pass its own.

use serde::{Deserialize, Serialize};

/// Standard transit animation requested from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Transit {
    #[default]
    None,
    Open,
    Close,
    Fade,
}

/// A view shared between the outgoing and incoming units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedElement {
    /// Host identifier of the view.
    pub view: String,
    /// Transition name the view is matched under.
    pub name: String,
}

impl SharedElement {
    pub fn new(view: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            view: view.into(),
            name: name.into(),
        }
    }
}

/// Enter/exit animation pair, as host resource identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnimationPair {
    pub enter: u32,
    pub exit: u32,
}

/// Immutable per-transaction configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionOptions {
    pub shared_elements: Vec<SharedElement>,
    pub transit: Transit,
    /// Used for push, switch and replace transactions.
    pub animations: Option<AnimationPair>,
    /// Used for pop and clear transactions.
    pub pop_animations: Option<AnimationPair>,
    pub transition_style: Option<u32>,
    pub breadcrumb_title: Option<String>,
    pub breadcrumb_short_title: Option<String>,
    /// Commit even after the host has saved its state.
    pub allow_state_loss: bool,
    /// Let the host reorder operations within the transaction.
    pub allow_reordering: bool,
}

impl TransactionOptions {
    pub fn builder() -> TransactionOptionsBuilder {
        TransactionOptionsBuilder::default()
    }

    /// Animations for a transaction, depending on whether it pops.
    pub fn animations_for(&self, popping: bool) -> Option<AnimationPair> {
        if popping {
            self.pop_animations
        } else {
            self.animations
        }
    }

    /// The breadcrumb shown for the transaction; the full title wins.
    pub fn breadcrumb(&self) -> Option<&str> {
        self.breadcrumb_title
            .as_deref()
            .or(self.breadcrumb_short_title.as_deref())
    }
}

/// Consuming builder for [`TransactionOptions`].
#[derive(Debug, Clone, Default)]
pub struct TransactionOptionsBuilder {
    options: TransactionOptions,
}

impl TransactionOptionsBuilder {
    pub fn add_shared_element(mut self, element: SharedElement) -> Self {
        self.options.shared_elements.push(element);
        self
    }

    pub fn shared_elements(mut self, elements: Vec<SharedElement>) -> Self {
        self.options.shared_elements = elements;
        self
    }

    pub fn transit(mut self, transit: Transit) -> Self {
        self.options.transit = transit;
        self
    }

    pub fn custom_animations(mut self, enter: u32, exit: u32) -> Self {
        self.options.animations = Some(AnimationPair { enter, exit });
        self
    }

    /// Sets both the forward and the pop animation pairs.
    pub fn custom_animations_with_pop(
        self,
        enter: u32,
        exit: u32,
        pop_enter: u32,
        pop_exit: u32,
    ) -> Self {
        let mut builder = self.custom_animations(enter, exit);
        builder.options.pop_animations = Some(AnimationPair {
            enter: pop_enter,
            exit: pop_exit,
        });
        builder
    }

    pub fn transition_style(mut self, style: u32) -> Self {
        self.options.transition_style = Some(style);
        self
    }

    pub fn breadcrumb_title(mut self, title: impl Into<String>) -> Self {
        self.options.breadcrumb_title = Some(title.into());
        self
    }

    pub fn breadcrumb_short_title(mut self, title: impl Into<String>) -> Self {
        self.options.breadcrumb_short_title = Some(title.into());
        self
    }

    pub fn allow_state_loss(mut self, allow: bool) -> Self {
        self.options.allow_state_loss = allow;
        self
    }

    pub fn allow_reordering(mut self, allow: bool) -> Self {
        self.options.allow_reordering = allow;
        self
    }

    pub fn build(self) -> TransactionOptions {
        self.options
    }
}
