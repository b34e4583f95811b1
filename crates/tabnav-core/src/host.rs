//! Capabilities the controller needs from its surroundings.
//!
//! The host owns every screen unit and materializes committed transactions.
//! The controller only ever holds clones of unit handles and weak references
//! to them; it never inspects a unit beyond [`ScreenUnit::type_name`] and
//! [`ScreenUnit::is_overlay`].

use std::error::Error;
use std::fmt;

use tabnav_model::{TabIndex, Tag, TransactionType};

use crate::error::HostError;
use crate::transaction::Transaction;

/// Handle to a host-managed screen unit.
///
/// Cloning a handle must not create a new unit; [`ScreenUnit::same_unit`]
/// compares identity.
pub trait ScreenUnit: Clone + fmt::Debug + 'static {
    /// Non-owning handle used by the tag cache.
    type Weak: WeakUnit<Self>;

    /// Type name used as the tag prefix.
    fn type_name(&self) -> &str;

    fn downgrade(&self) -> Self::Weak;

    fn same_unit(&self, other: &Self) -> bool;

    /// Whether the unit is a modal overlay.
    fn is_overlay(&self) -> bool {
        false
    }
}

/// Weak counterpart of a [`ScreenUnit`].
pub trait WeakUnit<U>: Clone {
    /// The unit, if the host still keeps it alive.
    fn upgrade(&self) -> Option<U>;
}

/// Where an overlay lives: the host's root scope or nested inside a unit.
#[derive(Debug)]
pub enum DialogScope<'a, U> {
    Root,
    Nested(&'a U),
}

/// The host's transaction system.
pub trait TransactionHost {
    type Unit: ScreenUnit;

    /// Hand over a transaction. The host may apply it later.
    fn commit(&mut self, transaction: Transaction<Self::Unit>);

    /// Look up a unit the host has already applied.
    fn find_unit_by_tag(&self, tag: &Tag) -> Option<Self::Unit>;

    /// Every unit currently added to the host.
    fn active_units(&self) -> Vec<Self::Unit>;

    fn is_state_saved(&self) -> bool;

    /// Apply every committed but not yet applied transaction.
    fn execute_pending_transactions(&mut self);

    fn is_attached(&self, unit: &Self::Unit) -> bool;

    fn units_in_scope(&self, scope: DialogScope<'_, Self::Unit>) -> Vec<Self::Unit>;

    fn show_dialog(
        &mut self,
        unit: &Self::Unit,
        scope: DialogScope<'_, Self::Unit>,
    ) -> Result<(), HostError>;

    fn dismiss_dialog(&mut self, unit: &Self::Unit);
}

/// Supplies root units on demand.
pub trait RootFactory<U> {
    /// Number of roots the factory can produce.
    fn unit_count(&self) -> usize;

    /// A fresh root unit for `index`, or `None` if the factory has none.
    fn root_unit(&mut self, index: TabIndex) -> Option<U>;
}

/// Observer of completed navigation.
pub trait TransactionListener<U> {
    fn on_tab_transaction(&mut self, _unit: Option<&U>, _tab: Option<TabIndex>) {}

    fn on_fragment_transaction(&mut self, _unit: Option<&U>, _kind: TransactionType) {}
}

/// Sink for recoverable inconsistencies.
pub trait ErrorLogger {
    fn error(&self, message: &str, cause: &dyn Error);
}
