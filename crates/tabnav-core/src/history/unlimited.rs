use tabnav_model::TabIndex;

/// Every tab visit in order, duplicates included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnlimitedTabHistory {
    stack: Vec<TabIndex>,
}

impl UnlimitedTabHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, index: TabIndex) {
        self.stack.push(index);
    }

    pub fn previous(&self) -> Option<TabIndex> {
        self.stack.len().checked_sub(2).map(|at| self.stack[at])
    }

    pub(crate) fn returned_to(&mut self, index: TabIndex) {
        self.stack.truncate(self.stack.len().saturating_sub(2));
        self.record(index);
    }

    pub fn entries(&self) -> &[TabIndex] {
        &self.stack
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }
}
