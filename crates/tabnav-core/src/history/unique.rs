use tabnav_model::TabIndex;

/// Insertion-ordered set of visited tabs; revisiting moves a tab to the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniqueTabHistory {
    order: Vec<TabIndex>,
}

impl UniqueTabHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, index: TabIndex) {
        self.order.retain(|visited| *visited != index);
        self.order.push(index);
    }

    /// The tab visited before the current one.
    pub fn previous(&self) -> Option<TabIndex> {
        self.order.len().checked_sub(2).map(|at| self.order[at])
    }

    /// Forgets the current tab and the one being returned to, then records
    /// the return.
    pub(crate) fn returned_to(&mut self, index: TabIndex) {
        self.order.truncate(self.order.len().saturating_sub(2));
        self.record(index);
    }

    /// Replaces the order with `indices`; a repeated tab keeps its first
    /// position.
    pub(crate) fn restore(&mut self, indices: impl IntoIterator<Item = TabIndex>) {
        self.order.clear();
        for index in indices {
            if !self.order.contains(&index) {
                self.order.push(index);
            }
        }
    }

    pub fn entries(&self) -> &[TabIndex] {
        &self.order
    }

    pub fn clear(&mut self) {
        self.order.clear();
    }
}
