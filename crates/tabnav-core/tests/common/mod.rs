//! Recording host shared by the controller integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::error::Error;
use std::rc::{Rc, Weak};

use tabnav_core::{
    DialogScope, ErrorLogger, HostError, NavControllerBuilder, Operation, RootFactory, ScreenUnit,
    SwitchController, TabIndex, Tag, Transaction, TransactionHost, TransactionListener,
    TransactionOptions, TransactionType, WeakUnit,
};

// ============================================================================
// Units
// ============================================================================

#[derive(Debug)]
struct UnitData {
    type_name: String,
    overlay: bool,
}

#[derive(Debug, Clone)]
pub struct MockUnit(Rc<UnitData>);

impl MockUnit {
    pub fn new(type_name: &str) -> Self {
        Self(Rc::new(UnitData {
            type_name: type_name.to_string(),
            overlay: false,
        }))
    }

    pub fn overlay(type_name: &str) -> Self {
        Self(Rc::new(UnitData {
            type_name: type_name.to_string(),
            overlay: true,
        }))
    }
}

#[derive(Debug, Clone)]
pub struct MockWeak(Weak<UnitData>);

impl WeakUnit<MockUnit> for MockWeak {
    fn upgrade(&self) -> Option<MockUnit> {
        self.0.upgrade().map(MockUnit)
    }
}

impl ScreenUnit for MockUnit {
    type Weak = MockWeak;

    fn type_name(&self) -> &str {
        &self.0.type_name
    }

    fn downgrade(&self) -> MockWeak {
        MockWeak(Rc::downgrade(&self.0))
    }

    fn same_unit(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn is_overlay(&self) -> bool {
        self.0.overlay
    }
}

// ============================================================================
// Host
// ============================================================================

#[derive(Debug)]
pub struct HostedUnit {
    pub tag: Tag,
    pub unit: MockUnit,
    pub attached: bool,
    pub visible: bool,
}

/// Host that logs every committed operation and applies transactions either
/// immediately or on [`TransactionHost::execute_pending_transactions`].
#[derive(Debug, Default)]
pub struct MockHost {
    pub log: Vec<String>,
    pub units: Vec<HostedUnit>,
    pub dialogs: Vec<(MockUnit, Option<MockUnit>)>,
    pub transactions: Vec<Transaction<MockUnit>>,
    pending: Vec<Transaction<MockUnit>>,
    deferred: bool,
    pub state_saved: bool,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transactions are only applied when flushed.
    pub fn deferred() -> Self {
        Self {
            deferred: true,
            ..Self::default()
        }
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    /// Type names of the units that are attached and visible.
    pub fn visible(&self) -> Vec<String> {
        self.units
            .iter()
            .filter(|hosted| hosted.attached && hosted.visible)
            .map(|hosted| hosted.unit.type_name().to_string())
            .collect()
    }

    fn position(&self, unit: &MockUnit) -> Option<usize> {
        self.units
            .iter()
            .position(|hosted| hosted.unit.same_unit(unit))
    }

    fn apply(&mut self, transaction: Transaction<MockUnit>) {
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

    fn set(&mut self, unit: &MockUnit, change: impl FnOnce(&mut HostedUnit)) {
        if let Some(index) = self.position(unit) {
            change(&mut self.units[index]);
        }
    }
}

impl TransactionHost for MockHost {
    type Unit = MockUnit;

    fn commit(&mut self, transaction: Transaction<MockUnit>) {
        for operation in transaction.operations() {
            self.log
                .push(format!("{} {}", operation.name(), operation.unit().type_name()));
        }
        self.log.push("Commit".to_string());
        self.transactions.push(transaction.clone());
        if self.deferred {
            self.pending.push(transaction);
        } else {
            self.apply(transaction);
        }
    }

    fn find_unit_by_tag(&self, tag: &Tag) -> Option<MockUnit> {
        self.units
            .iter()
            .find(|hosted| &hosted.tag == tag)
            .map(|hosted| hosted.unit.clone())
    }

    fn active_units(&self) -> Vec<MockUnit> {
        self.units.iter().map(|hosted| hosted.unit.clone()).collect()
    }

    fn is_state_saved(&self) -> bool {
        self.state_saved
    }

    fn execute_pending_transactions(&mut self) {
        for transaction in std::mem::take(&mut self.pending) {
            self.apply(transaction);
        }
    }

    fn is_attached(&self, unit: &MockUnit) -> bool {
        self.position(unit)
            .is_some_and(|index| self.units[index].attached)
    }

    fn units_in_scope(&self, scope: DialogScope<'_, MockUnit>) -> Vec<MockUnit> {
        self.dialogs
            .iter()
            .filter(|(_, parent)| match (&scope, parent) {
                (DialogScope::Root, None) => true,
                (DialogScope::Nested(expected), Some(parent)) => parent.same_unit(expected),
                _ => false,
            })
            .map(|(dialog, _)| dialog.clone())
            .collect()
    }

    fn show_dialog(
        &mut self,
        unit: &MockUnit,
        scope: DialogScope<'_, MockUnit>,
    ) -> Result<(), HostError> {
        if self.state_saved {
            return Err(HostError::StateSaved);
        }
        let parent = match scope {
            DialogScope::Root => None,
            DialogScope::Nested(parent) => Some(parent.clone()),
        };
        self.log.push(format!("Dialog {}", unit.type_name()));
        self.dialogs.push((unit.clone(), parent));
        Ok(())
    }

    fn dismiss_dialog(&mut self, unit: &MockUnit) {
        self.log.push(format!("Dismiss {}", unit.type_name()));
        self.dialogs.retain(|(dialog, _)| !dialog.same_unit(unit));
    }
}

// ============================================================================
// Collaborators
// ============================================================================

/// Creates a fresh unit per call and remembers which indices were asked for.
pub struct CountingFactory {
    names: Vec<&'static str>,
    pub calls: Rc<RefCell<Vec<usize>>>,
}

impl CountingFactory {
    pub fn new(names: &[&'static str]) -> Self {
        Self {
            names: names.to_vec(),
            calls: Rc::default(),
        }
    }
}

impl RootFactory<MockUnit> for CountingFactory {
    fn unit_count(&self) -> usize {
        self.names.len()
    }

    fn root_unit(&mut self, index: TabIndex) -> Option<MockUnit> {
        self.calls.borrow_mut().push(index.get());
        self.names.get(index.get()).map(|name| MockUnit::new(name))
    }
}

#[derive(Clone, Default)]
pub struct RecordingListener {
    pub events: Rc<RefCell<Vec<String>>>,
}

impl TransactionListener<MockUnit> for RecordingListener {
    fn on_tab_transaction(&mut self, unit: Option<&MockUnit>, tab: Option<TabIndex>) {
        self.events.borrow_mut().push(format!(
            "tab {} {}",
            tab.map_or_else(|| "none".to_string(), |tab| tab.to_string()),
            unit.map_or("none", ScreenUnit::type_name)
        ));
    }

    fn on_fragment_transaction(&mut self, unit: Option<&MockUnit>, kind: TransactionType) {
        self.events.borrow_mut().push(format!(
            "{} {}",
            kind.as_str(),
            unit.map_or("none", ScreenUnit::type_name)
        ));
    }
}

#[derive(Clone, Default)]
pub struct RecordingLogger {
    pub messages: Rc<RefCell<Vec<String>>>,
}

impl ErrorLogger for RecordingLogger {
    fn error(&self, message: &str, cause: &dyn Error) {
        self.messages
            .borrow_mut()
            .push(format!("{message}: {cause}"));
    }
}

#[derive(Clone, Default)]
pub struct RecordingSwitcher {
    pub switches: Rc<RefCell<Vec<usize>>>,
}

impl SwitchController for RecordingSwitcher {
    fn switch_tab(
        &mut self,
        index: TabIndex,
        _options: Option<&TransactionOptions>,
    ) -> tabnav_core::Result<()> {
        self.switches.borrow_mut().push(index.get());
        Ok(())
    }
}

// ============================================================================
// Helpers
// ============================================================================

pub fn tab(index: usize) -> TabIndex {
    TabIndex::new(index).unwrap()
}

/// Builder over an immediate host with one root per name.
pub fn builder(names: &[&str]) -> NavControllerBuilder<MockHost> {
    NavControllerBuilder::new(MockHost::new())
        .root_units(names.iter().map(|name| MockUnit::new(name)).collect())
}

pub fn tags(nav: &tabnav_core::NavController<MockHost>, index: usize) -> Vec<String> {
    nav.stack_tags(tab(index))
        .unwrap()
        .iter()
        .map(|tag| tag.as_str().to_string())
        .collect()
}
