//! Transactions handed to the host.
//!
//! A [`Transaction`] is a plain value: an ordered list of operations plus the
//! presentation settings taken from [`TransactionOptions`]. The controller
//! builds one per navigation call and commits it once.

use tabnav_model::{AnimationPair, SharedElement, Tag, TransactionOptions, Transit};

/// One host operation.
#[derive(Debug, Clone)]
pub enum Operation<U> {
    /// Add a new unit under `tag`.
    Add { unit: U, tag: Tag },
    Remove(U),
    Attach(U),
    Detach(U),
    Show(U),
    Hide(U),
    /// Swap the visible unit for `unit` in one step.
    Replace { unit: U, tag: Tag },
}

impl<U> Operation<U> {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add { .. } => "Add",
            Self::Remove(_) => "Remove",
            Self::Attach(_) => "Attach",
            Self::Detach(_) => "Detach",
            Self::Show(_) => "Show",
            Self::Hide(_) => "Hide",
            Self::Replace { .. } => "Replace",
        }
    }

    pub fn unit(&self) -> &U {
        match self {
            Self::Add { unit, .. } | Self::Replace { unit, .. } => unit,
            Self::Remove(unit)
            | Self::Attach(unit)
            | Self::Detach(unit)
            | Self::Show(unit)
            | Self::Hide(unit) => unit,
        }
    }

    /// Tag carried by `Add` and `Replace`.
    pub fn tag(&self) -> Option<&Tag> {
        match self {
            Self::Add { tag, .. } | Self::Replace { tag, .. } => Some(tag),
            _ => None,
        }
    }
}

/// How the host should treat a commit after it saved its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommitMode {
    #[default]
    Normal,
    AllowStateLoss,
}

/// Operations plus presentation settings, committed as a unit.
#[derive(Debug, Clone)]
pub struct Transaction<U> {
    operations: Vec<Operation<U>>,
    animations: Option<AnimationPair>,
    transit: Transit,
    transition_style: Option<u32>,
    shared_elements: Vec<SharedElement>,
    breadcrumb: Option<String>,
    reordering_allowed: bool,
    commit_mode: CommitMode,
}

impl<U> Default for Transaction<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> Transaction<U> {
    pub fn new() -> Self {
        Self {
            operations: Vec::new(),
            animations: None,
            transit: Transit::None,
            transition_style: None,
            shared_elements: Vec::new(),
            breadcrumb: None,
            reordering_allowed: false,
            commit_mode: CommitMode::Normal,
        }
    }

    /// A transaction presenting itself per `options`.
    ///
    /// Popping transactions use the pop animation pair.
    pub fn with_options(options: Option<&TransactionOptions>, popping: bool) -> Self {
        let mut transaction = Self::new();
        if let Some(options) = options {
            transaction.animations = options.animations_for(popping);
            transaction.transit = options.transit;
            transaction.transition_style = options.transition_style;
            transaction.shared_elements = options.shared_elements.clone();
            transaction.breadcrumb = options.breadcrumb().map(str::to_string);
            transaction.reordering_allowed = options.allow_reordering;
            transaction.commit_mode = commit_mode_for(Some(options));
        }
        transaction
    }

    /// A transaction that only takes the commit mode from `options`.
    pub fn without_presentation(options: Option<&TransactionOptions>) -> Self {
        let mut transaction = Self::new();
        transaction.commit_mode = commit_mode_for(options);
        transaction
    }

    pub fn add(&mut self, unit: U, tag: Tag) {
        self.operations.push(Operation::Add { unit, tag });
    }

    pub fn remove(&mut self, unit: U) {
        self.operations.push(Operation::Remove(unit));
    }

    pub fn attach(&mut self, unit: U) {
        self.operations.push(Operation::Attach(unit));
    }

    pub fn detach(&mut self, unit: U) {
        self.operations.push(Operation::Detach(unit));
    }

    pub fn show(&mut self, unit: U) {
        self.operations.push(Operation::Show(unit));
    }

    pub fn hide(&mut self, unit: U) {
        self.operations.push(Operation::Hide(unit));
    }

    pub fn replace(&mut self, unit: U, tag: Tag) {
        self.operations.push(Operation::Replace { unit, tag });
    }

    pub fn operations(&self) -> &[Operation<U>] {
        &self.operations
    }

    pub fn into_operations(self) -> Vec<Operation<U>> {
        self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn animations(&self) -> Option<AnimationPair> {
        self.animations
    }

    pub fn transit(&self) -> Transit {
        self.transit
    }

    pub fn transition_style(&self) -> Option<u32> {
        self.transition_style
    }

    pub fn shared_elements(&self) -> &[SharedElement] {
        &self.shared_elements
    }

    pub fn breadcrumb(&self) -> Option<&str> {
        self.breadcrumb.as_deref()
    }

    pub fn reordering_allowed(&self) -> bool {
        self.reordering_allowed
    }

    pub fn commit_mode(&self) -> CommitMode {
        self.commit_mode
    }
}

fn commit_mode_for(options: Option<&TransactionOptions>) -> CommitMode {
    match options {
        Some(options) if options.allow_state_loss => CommitMode::AllowStateLoss,
        _ => CommitMode::Normal,
    }
}
