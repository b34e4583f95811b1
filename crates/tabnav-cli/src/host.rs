//! In-memory host used to replay navigation scripts.
//!
//! [`ConsoleHost`] applies committed transactions to a flat list of units
//! and records every operation as one log line, e.g. `Add Feed`, `Detach Home`,
//! `Commit`.

use std::rc::{Rc, Weak};

use tabnav_core::{
    CommitMode, DialogScope, HostError, Operation, RootFactory, SavedState, ScreenUnit, TabIndex,
    Tag, Transaction, TransactionHost, WeakUnit,
};

// ============================================================================
// Units
// ============================================================================

#[derive(Debug)]
struct UnitData {
    type_name: String,
    overlay: bool,
}

/// A screen unit that only knows its type name.
#[derive(Debug, Clone)]
pub struct DemoUnit(Rc<UnitData>);

impl DemoUnit {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self(Rc::new(UnitData {
            type_name: type_name.into(),
            overlay: false,
        }))
    }

    /// A unit shown as a dialog.
    pub fn overlay(type_name: impl Into<String>) -> Self {
        Self(Rc::new(UnitData {
            type_name: type_name.into(),
            overlay: true,
        }))
    }
}

#[derive(Debug, Clone)]
pub struct DemoWeak(Weak<UnitData>);

impl WeakUnit<DemoUnit> for DemoWeak {
    fn upgrade(&self) -> Option<DemoUnit> {
        self.0.upgrade().map(DemoUnit)
    }
}

impl ScreenUnit for DemoUnit {
    type Weak = DemoWeak;

    fn type_name(&self) -> &str {
        &self.0.type_name
    }

    fn downgrade(&self) -> DemoWeak {
        DemoWeak(Rc::downgrade(&self.0))
    }

    fn same_unit(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn is_overlay(&self) -> bool {
        self.0.overlay
    }
}

/// Root units named `TabA`, `TabB`, ... created on demand.
#[derive(Debug, Clone, Copy)]
pub struct DemoRoots {
    tabs: usize,
}

impl DemoRoots {
    pub fn new(tabs: usize) -> Self {
        Self { tabs }
    }

    pub fn name(index: usize) -> String {
        let letter = u8::try_from(index)
            .ok()
            .and_then(|offset| b'A'.checked_add(offset))
            .filter(u8::is_ascii_uppercase)
            .map_or_else(|| index.to_string(), |byte| char::from(byte).to_string());
        format!("Tab{letter}")
    }
}

impl RootFactory<DemoUnit> for DemoRoots {
    fn unit_count(&self) -> usize {
        self.tabs
    }

    fn root_unit(&mut self, index: TabIndex) -> Option<DemoUnit> {
        (index.get() < self.tabs).then(|| DemoUnit::new(Self::name(index.get())))
    }
}

// ============================================================================
// Host
// ============================================================================

#[derive(Debug)]
struct HostedUnit {
    tag: Tag,
    unit: DemoUnit,
    attached: bool,
    visible: bool,
}

/// Host that keeps its units in memory and logs each operation.
#[derive(Debug, Default)]
pub struct ConsoleHost {
    log: Vec<String>,
    units: Vec<HostedUnit>,
    dialogs: Vec<DemoUnit>,
    pending: Vec<Transaction<DemoUnit>>,
    deferred: bool,
    state_saved: bool,
}

impl ConsoleHost {
    /// A deferred host applies commits only on
    /// [`TransactionHost::execute_pending_transactions`].
    pub fn new(deferred: bool) -> Self {
        Self {
            deferred,
            ..Self::default()
        }
    }

    /// Recreates the units a previous run left behind, the way a host
    /// restores its own state before the controller is rebuilt.
    ///
    /// Only the current unit comes back attached.
    pub fn restore_units(&mut self, saved: &SavedState) {
        for raw in saved.fragment_stack.iter().flatten() {
            let Some(tag) = Tag::parse(raw.as_str()) else {
                continue;
            };
            let attached = saved.current_fragment.as_deref() == Some(raw.as_str());
            self.units.push(HostedUnit {
                unit: DemoUnit::new(type_name_of(&tag)),
                tag,
                attached,
                visible: true,
            });
        }
    }

    /// Refuses dialogs from now on, as a host does after saving its state.
    pub fn mark_state_saved(&mut self) {
        self.state_saved = true;
        self.log.push("State saved".to_string());
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// Type names of attached, visible units.
    pub fn visible(&self) -> Vec<String> {
        self.units
            .iter()
            .filter(|hosted| hosted.attached && hosted.visible)
            .map(|hosted| hosted.unit.type_name().to_string())
            .collect()
    }

    pub fn dialogs(&self) -> Vec<String> {
        self.dialogs
            .iter()
            .map(|dialog| dialog.type_name().to_string())
            .collect()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    fn position(&self, unit: &DemoUnit) -> Option<usize> {
        self.units
            .iter()
            .position(|hosted| hosted.unit.same_unit(unit))
    }

    fn set(&mut self, unit: &DemoUnit, change: impl FnOnce(&mut HostedUnit)) {
        if let Some(index) = self.position(unit) {
            change(&mut self.units[index]);
        }
    }

    fn apply(&mut self, transaction: Transaction<DemoUnit>) {
        for operation in transaction.into_operations() {
            match operation {
                Operation::Add { unit, tag } => self.units.push(HostedUnit {
                    tag,
                    unit,
                    attached: true,
                    visible: true,
                }),
                Operation::Remove(unit) => {
                    self.units.retain(|hosted| !hosted.unit.same_unit(&unit));
                }
                Operation::Attach(unit) => self.set(&unit, |hosted| hosted.attached = true),
                Operation::Detach(unit) => self.set(&unit, |hosted| hosted.attached = false),
                Operation::Show(unit) => self.set(&unit, |hosted| hosted.visible = true),
                Operation::Hide(unit) => self.set(&unit, |hosted| hosted.visible = false),
                Operation::Replace { unit, tag } => {
                    self.units
                        .retain(|hosted| !(hosted.attached && hosted.visible));
                    self.units.push(HostedUnit {
                        tag,
                        unit,
                        attached: true,
                        visible: true,
                    });
                }
            }
        }
    }
}

/// `Feed12` -> `Feed`.
fn type_name_of(tag: &Tag) -> &str {
    tag.as_str().trim_end_matches(|c: char| c.is_ascii_digit())
}

impl TransactionHost for ConsoleHost {
    type Unit = DemoUnit;

    fn commit(&mut self, transaction: Transaction<DemoUnit>) {
        for operation in transaction.operations() {
            self.log
                .push(format!("{} {}", operation.name(), operation.unit().type_name()));
        }
        self.log.push(match transaction.commit_mode() {
            CommitMode::Normal => "Commit".to_string(),
            CommitMode::AllowStateLoss => "Commit (allowing state loss)".to_string(),
        });
        if self.deferred {
            self.pending.push(transaction);
        } else {
            self.apply(transaction);
        }
    }

    fn find_unit_by_tag(&self, tag: &Tag) -> Option<DemoUnit> {
        self.units
            .iter()
            .find(|hosted| &hosted.tag == tag)
            .map(|hosted| hosted.unit.clone())
    }

    fn active_units(&self) -> Vec<DemoUnit> {
        self.units.iter().map(|hosted| hosted.unit.clone()).collect()
    }

    fn is_state_saved(&self) -> bool {
        self.state_saved
    }

    fn execute_pending_transactions(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        if !pending.is_empty() {
            self.log.push(format!("Flush {}", pending.len()));
        }
        for transaction in pending {
            self.apply(transaction);
        }
    }

    fn is_attached(&self, unit: &DemoUnit) -> bool {
        self.position(unit)
            .is_some_and(|index| self.units[index].attached)
    }

    fn units_in_scope(&self, _scope: DialogScope<'_, DemoUnit>) -> Vec<DemoUnit> {
        self.dialogs.clone()
    }

    fn show_dialog(
        &mut self,
        unit: &DemoUnit,
        _scope: DialogScope<'_, DemoUnit>,
    ) -> Result<(), HostError> {
        if self.state_saved {
            return Err(HostError::StateSaved);
        }
        self.log.push(format!("Dialog {}", unit.type_name()));
        self.dialogs.push(unit.clone());
        Ok(())
    }

    fn dismiss_dialog(&mut self, unit: &DemoUnit) {
        self.log.push(format!("Dismiss {}", unit.type_name()));
        self.dialogs.retain(|dialog| !dialog.same_unit(unit));
    }
}
