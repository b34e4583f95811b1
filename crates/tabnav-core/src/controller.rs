//! The navigation controller.
//!
//! [`NavController`] owns one stack of [`Tag`]s per tab and turns every
//! navigation call into a single host [`Transaction`]. Its bookkeeping is
//! updated synchronously; it never waits for the host to apply a previous
//! commit, and resolves tags through the host first and its weak cache second.
//!
//! Host-state inconsistencies never fail an operation. Unresolvable tags are
//! dropped from their stack (walking down towards the root, recreating the
//! root when the stack runs empty) and reported through `tracing` and the
//! optional [`ErrorLogger`].

use std::mem;

use tabnav_model::{
    ConfigError, HideStrategy, NavigationStrategy, Result, TabIndex, Tag, TransactionOptions,
    TransactionType, UnsupportedOperation,
};
use tabnav_persistence::{SavedState, StateError};
use tracing::{debug, error, info, warn};

use crate::cache::UnitCache;
use crate::error::RecoveryError;
use crate::history::{PopController, SwitchController, TabHistoryController};
use crate::host::{
    DialogScope, ErrorLogger, RootFactory, ScreenUnit, TransactionHost, TransactionListener,
};
use crate::transaction::Transaction;

/// Where root units come from.
pub(crate) enum RootSource<U> {
    Units(Vec<U>),
    Factory(Box<dyn RootFactory<U>>),
}

/// Why a stack top is being brought back on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reveal {
    /// After a pop or clear within the tab.
    Navigate,
    /// After switching into the tab.
    Switch,
}

/// Everything [`NavController::new`] needs, assembled by the builder.
pub(crate) struct ControllerConfig<U> {
    pub(crate) roots: RootSource<U>,
    pub(crate) tab_count: usize,
    pub(crate) default_options: Option<TransactionOptions>,
    pub(crate) listener: Option<Box<dyn TransactionListener<U>>>,
    pub(crate) logger: Option<Box<dyn ErrorLogger>>,
    pub(crate) strategy: NavigationStrategy,
    pub(crate) switch_controller: Option<Box<dyn SwitchController>>,
    pub(crate) hide_strategy: HideStrategy,
    pub(crate) eager: bool,
}

/// Multi-stack navigation controller.
///
/// Built with [`crate::NavControllerBuilder`], then [`initialize`]d once.
///
/// [`initialize`]: NavController::initialize
pub struct NavController<H: TransactionHost> {
    host: H,
    roots: RootSource<H::Unit>,
    tab_count: usize,
    stacks: Vec<Vec<Tag>>,
    selected: Option<TabIndex>,
    tag_count: u64,
    cache: UnitCache<H::Unit>,
    current_unit: Option<H::Unit>,
    current_dialog: Option<H::Unit>,
    hide_strategy: HideStrategy,
    eager: bool,
    default_options: Option<TransactionOptions>,
    listener: Option<Box<dyn TransactionListener<H::Unit>>>,
    logger: Option<Box<dyn ErrorLogger>>,
    history: TabHistoryController,
    switch_controller: Option<Box<dyn SwitchController>>,
    root_pop_forbidden: bool,
}

impl<H: TransactionHost> NavController<H> {
    pub(crate) fn new(host: H, config: ControllerConfig<H::Unit>) -> Self {
        Self {
            host,
            roots: config.roots,
            tab_count: config.tab_count,
            stacks: vec![Vec::new(); config.tab_count],
            selected: None,
            tag_count: 0,
            cache: UnitCache::default(),
            current_unit: None,
            current_dialog: None,
            hide_strategy: config.hide_strategy,
            eager: config.eager,
            default_options: config.default_options,
            listener: config.listener,
            logger: config.logger,
            history: TabHistoryController::new(config.strategy),
            switch_controller: config.switch_controller,
            root_pop_forbidden: !config.strategy.uses_tab_history(),
        }
    }

    // ========================================================================
    // Initialization and persistence
    // ========================================================================

    /// Sets up the stacks, either from `saved` or from scratch on `start`.
    ///
    /// Saved state that does not fit this controller is logged and ignored.
    /// With `start == None` no tab is selected and nothing is created.
    pub fn initialize(
        &mut self,
        start: Option<TabIndex>,
        saved: Option<&SavedState>,
    ) -> Result<()> {
        if let Some(saved) = saved {
            match self.restore(saved) {
                Ok(()) => {
                    info!(
                        tabs = self.tab_count,
                        selected = ?self.selected.map(TabIndex::get),
                        tag_count = self.tag_count,
                        "restored navigation state"
                    );
                    return Ok(());
                }
                Err(err) => {
                    self.reset();
                    error!(error = %err, "saved navigation state rejected, starting fresh");
                    self.report(
                        "could not restore navigation state",
                        &RecoveryError::Restore(err),
                    );
                }
            }
        }

        if let Some(start) = start
            && start.get() >= self.tab_count
        {
            return Err(ConfigError::StartIndexOutOfRange {
                index: start.get(),
                tab_count: self.tab_count,
            }
            .into());
        }

        self.stacks = vec![Vec::new(); self.tab_count];
        self.selected = start;
        self.history.clear();
        if let Some(start) = start {
            self.history.switch_tab(start);
        }
        self.clear_host();
        self.clear_dialog_fragment();

        let Some(start) = start else {
            info!(tabs = self.tab_count, "initialized with no tab selected");
            return Ok(());
        };

        let options = self.default_options.clone();
        let mut transaction = Transaction::with_options(options.as_ref(), false);
        let tabs: Vec<TabIndex> = if self.eager {
            TabIndex::range(self.tab_count).collect()
        } else {
            vec![start]
        };
        for tab in tabs {
            let unit = self.root_unit(tab)?;
            let tag = self.generate_tag(&unit);
            self.stacks[tab.get()].push(tag.clone());
            self.add_unit(&mut transaction, unit.clone(), tag);
            if tab == start {
                self.current_unit = Some(unit);
            } else {
                self.leave_on_switch(&mut transaction, unit);
            }
        }
        self.commit(transaction);

        info!(
            tabs = self.tab_count,
            tab = %start,
            eager = self.eager,
            "initialized navigation"
        );
        self.notify_tab(Some(start));
        Ok(())
    }

    /// Captures everything needed to rebuild the current navigation.
    pub fn save_state(&self) -> SavedState {
        let stacks = self
            .stacks
            .iter()
            .map(|stack| stack.iter().map(|tag| tag.as_str().to_string()).collect())
            .collect();
        let mut state =
            SavedState::new(self.tag_count, self.selected.map(TabIndex::get)).with_stacks(stacks);
        if let Some(tag) = self.current_tag() {
            state = state.with_current_fragment(tag.as_str());
        }
        if let Some(history) = self.history.save() {
            state = state.with_tab_history(history);
        }
        state
    }

    /// Applies `saved` in full or not at all.
    fn restore(&mut self, saved: &SavedState) -> std::result::Result<(), StateError> {
        saved.validate(self.tab_count)?;

        let stacks: Vec<Vec<Tag>> = saved
            .fragment_stack
            .iter()
            .map(|stack| stack.iter().filter_map(|raw| Tag::parse(raw.as_str())).collect())
            .collect();
        let selected = saved
            .selected_tab_index
            .map(TabIndex::new)
            .transpose()
            .map_err(|err| StateError::InvalidFormat {
                reason: err.to_string(),
            })?;

        let mut history = self.history.clone();
        match saved.tab_history.as_deref() {
            Some(entries) => history
                .restore(Some(entries), self.tab_count)
                .map_err(|err| StateError::InvalidFormat {
                    reason: err.to_string(),
                })?,
            None => {
                history.clear();
                if let Some(tab) = selected {
                    history.switch_tab(tab);
                }
            }
        }

        self.stacks = stacks;
        self.selected = selected;
        self.tag_count = saved.tag_count;
        self.history = history;
        self.cache.clear();
        self.current_dialog = None;
        self.current_unit = saved
            .current_fragment
            .as_deref()
            .and_then(Tag::parse)
            .and_then(|tag| self.resolve(&tag))
            .or_else(|| self.current_tag().and_then(|tag| self.resolve(tag)));
        Ok(())
    }

    fn reset(&mut self) {
        self.stacks = vec![Vec::new(); self.tab_count];
        self.selected = None;
        self.tag_count = 0;
        self.cache.clear();
        self.current_unit = None;
        self.current_dialog = None;
        self.history.clear();
    }

    /// Removes whatever the host already holds.
    fn clear_host(&mut self) {
        let options = self.default_options.clone();
        let mut transaction = Transaction::with_options(options.as_ref(), false);
        for unit in self.host.active_units() {
            transaction.remove(unit);
        }
        self.commit(transaction);
        self.cache.clear();
        self.current_unit = None;
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Makes `index` the active tab.
    pub fn switch_tab(
        &mut self,
        index: TabIndex,
        options: Option<&TransactionOptions>,
    ) -> Result<()> {
        index.check(self.tab_count)?;
        if self.selected == Some(index) {
            return Ok(());
        }
        self.history.switch_tab(index);
        self.switch_tab_unrecorded(index, options)
    }

    fn switch_tab_unrecorded(
        &mut self,
        index: TabIndex,
        options: Option<&TransactionOptions>,
    ) -> Result<()> {
        index.check(self.tab_count)?;
        if self.selected == Some(index) {
            return Ok(());
        }

        let options = self.options_or_default(options);
        let mut transaction = Transaction::with_options(options.as_ref(), false);
        if let Some(current) = self.current_unit.take() {
            self.leave_on_switch(&mut transaction, current);
        }
        self.selected = Some(index);
        let unit = self.reveal_top(index, &mut transaction, Reveal::Switch)?;
        self.commit(transaction);
        self.current_unit = Some(unit);

        debug!(tab = %index, "switched tab");
        self.notify_tab(Some(index));
        Ok(())
    }

    /// Pushes `unit` onto the active stack. Does nothing without an active tab.
    pub fn push_fragment(&mut self, unit: H::Unit, options: Option<&TransactionOptions>) {
        let Some(tab) = self.selected else {
            return;
        };

        let options = self.options_or_default(options);
        let mut transaction = Transaction::with_options(options.as_ref(), false);
        if let Some(current) = self.current_unit.take() {
            self.leave_on_navigate(&mut transaction, current);
        }
        let tag = self.generate_tag(&unit);
        self.stacks[tab.get()].push(tag.clone());
        self.add_unit(&mut transaction, unit.clone(), tag);
        self.commit(transaction);
        self.current_unit = Some(unit);

        self.notify_fragment(TransactionType::Push);
    }

    /// Pops one entry. See [`NavController::pop_fragments`].
    pub fn pop_fragment(&mut self, options: Option<&TransactionOptions>) -> Result<bool> {
        self.pop_fragments(1, options)
    }

    /// Pops `depth` entries through the configured tab history.
    ///
    /// Returns whether anything changed.
    pub fn pop_fragments(
        &mut self,
        depth: usize,
        options: Option<&TransactionOptions>,
    ) -> Result<bool> {
        let mut history = mem::take(&mut self.history);
        let mut switch_controller = self.switch_controller.take();
        let result = {
            let mut driver = HistoryDriver {
                nav: self,
                switch_controller: switch_controller.as_deref_mut(),
            };
            history.pop_fragments(depth, options, &mut driver)
        };
        self.history = history;
        self.switch_controller = switch_controller;
        result
    }

    /// Pops up to `depth` entries from the active stack only.
    ///
    /// Returns the number of entries removed. A depth that reaches the root
    /// clears the stack instead.
    pub fn try_pop_fragments(
        &mut self,
        depth: usize,
        options: Option<&TransactionOptions>,
    ) -> Result<usize> {
        if depth < 1 {
            return Err(UnsupportedOperation::InvalidPopDepth(depth).into());
        }
        let Some(tab) = self.selected else {
            return Err(UnsupportedOperation::NoActiveTab.into());
        };
        let poppable = self.stacks[tab.get()].len().saturating_sub(1);
        if self.root_pop_forbidden && poppable == 0 {
            return Err(UnsupportedOperation::PopRoot.into());
        }
        if depth >= poppable {
            self.clear_stack(Some(tab), options)?;
            return Ok(poppable);
        }

        let options = self.options_or_default(options);
        let mut transaction = Transaction::with_options(options.as_ref(), true);
        for _ in 0..depth {
            if let Some(tag) = self.stacks[tab.get()].pop() {
                self.remove_tag(&mut transaction, &tag);
            }
        }
        let unit = self.reveal_top(tab, &mut transaction, Reveal::Navigate)?;
        self.commit(transaction);
        self.current_unit = Some(unit);

        debug!(tab = %tab, depth, "popped fragments");
        self.notify_fragment(TransactionType::Pop);
        Ok(depth)
    }

    /// Pops `tab` (the active tab by default) down to its root.
    ///
    /// Clearing an inactive tab only removes its units; nothing is revealed
    /// and no listener is notified.
    pub fn clear_stack(
        &mut self,
        tab: Option<TabIndex>,
        options: Option<&TransactionOptions>,
    ) -> Result<()> {
        let Some(tab) = tab.or(self.selected) else {
            return Ok(());
        };
        tab.check(self.tab_count)?;
        if self.stacks[tab.get()].len() <= 1 {
            return Ok(());
        }

        let active = self.selected == Some(tab);
        let options = self.options_or_default(options);
        let mut transaction = if active {
            Transaction::with_options(options.as_ref(), true)
        } else {
            Transaction::without_presentation(options.as_ref())
        };
        while self.stacks[tab.get()].len() > 1 {
            if let Some(tag) = self.stacks[tab.get()].pop() {
                self.remove_tag(&mut transaction, &tag);
            }
        }

        if !active {
            self.commit(transaction);
            debug!(tab = %tab, "cleared inactive stack");
            return Ok(());
        }

        let unit = self.reveal_top(tab, &mut transaction, Reveal::Navigate)?;
        self.commit(transaction);
        self.current_unit = Some(unit);

        debug!(tab = %tab, "cleared stack");
        self.notify_fragment(TransactionType::Pop);
        Ok(())
    }

    /// Swaps the current unit for `unit`. Does nothing without a current unit.
    pub fn replace_fragment(&mut self, unit: H::Unit, options: Option<&TransactionOptions>) {
        if self.current_unit.is_none() {
            return;
        }
        let Some(tab) = self.selected else {
            return;
        };

        let options = self.options_or_default(options);
        let mut transaction = Transaction::with_options(options.as_ref(), false);
        let tag = self.generate_tag(&unit);
        transaction.replace(unit.clone(), tag.clone());
        self.cache.insert(tag.clone(), &unit);
        self.commit(transaction);

        let stack = &mut self.stacks[tab.get()];
        if let Some(replaced) = stack.pop() {
            self.cache.remove(&replaced);
        }
        stack.push(tag);
        self.current_unit = Some(unit);

        self.notify_fragment(TransactionType::Replace);
    }

    // ========================================================================
    // Dialogs
    // ========================================================================

    /// Shows `unit` as the single overlay, dismissing any previous one.
    ///
    /// A host failure is logged, not returned.
    pub fn show_dialog_fragment(&mut self, unit: H::Unit) {
        self.clear_dialog_fragment();

        let parent = self.attached_current_unit();
        let scope = match &parent {
            Some(parent) => DialogScope::Nested(parent),
            None => DialogScope::Root,
        };
        self.current_dialog = Some(unit.clone());
        if let Err(err) = self.host.show_dialog(&unit, scope) {
            error!(unit = unit.type_name(), error = %err, "could not show dialog");
            self.report("could not show dialog", &RecoveryError::Dialog(err));
        }
    }

    /// Dismisses the overlay, if any.
    pub fn clear_dialog_fragment(&mut self) {
        if let Some(dialog) = self.current_dialog.take() {
            self.host.dismiss_dialog(&dialog);
            return;
        }
        for dialog in self.overlays_in_scope() {
            self.host.dismiss_dialog(&dialog);
        }
    }

    /// The tracked overlay, or the first overlay found in scope.
    pub fn current_dialog_fragment(&mut self) -> Option<H::Unit> {
        if let Some(dialog) = &self.current_dialog {
            return Some(dialog.clone());
        }
        let found = self.overlays_in_scope().into_iter().next()?;
        self.current_dialog = Some(found.clone());
        Some(found)
    }

    fn attached_current_unit(&self) -> Option<H::Unit> {
        self.current_unit
            .clone()
            .filter(|unit| self.host.is_attached(unit))
    }

    fn overlays_in_scope(&self) -> Vec<H::Unit> {
        let parent = self.attached_current_unit();
        let scope = match &parent {
            Some(parent) => DialogScope::Nested(parent),
            None => DialogScope::Root,
        };
        self.host
            .units_in_scope(scope)
            .into_iter()
            .filter(ScreenUnit::is_overlay)
            .collect()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The visible unit of the active tab.
    pub fn current_fragment(&self) -> Option<H::Unit> {
        if let Some(unit) = &self.current_unit {
            return Some(unit.clone());
        }
        self.current_tag().and_then(|tag| self.resolve(tag))
    }

    /// The active tab, `None` when no tab is selected.
    pub fn current_stack_index(&self) -> Option<TabIndex> {
        self.selected
    }

    /// Resolved units of `tab`, bottom first. Unresolvable entries are skipped.
    pub fn get_stack(&self, tab: Option<TabIndex>) -> Result<Option<Vec<H::Unit>>> {
        let Some(tab) = tab else {
            return Ok(None);
        };
        tab.check(self.tab_count)?;
        let units = self
            .stacks
            .get(tab.get())
            .map(|stack| stack.iter().filter_map(|tag| self.resolve(tag)).collect())
            .unwrap_or_default();
        Ok(Some(units))
    }

    pub fn current_stack(&self) -> Option<Vec<H::Unit>> {
        self.get_stack(self.selected).ok().flatten()
    }

    /// Raw tags of `tab`, bottom first.
    pub fn stack_tags(&self, tab: TabIndex) -> Result<Vec<Tag>> {
        tab.check(self.tab_count)?;
        Ok(self.stacks.get(tab.get()).cloned().unwrap_or_default())
    }

    /// Whether the active stack holds only its root.
    pub fn is_root_fragment(&self) -> bool {
        self.selected
            .and_then(|tab| self.stacks.get(tab.get()))
            .is_some_and(|stack| stack.len() == 1)
    }

    /// Number of tabs.
    pub fn size(&self) -> usize {
        self.tab_count
    }

    pub fn tag_count(&self) -> u64 {
        self.tag_count
    }

    pub fn history(&self) -> &TabHistoryController {
        &self.history
    }

    pub fn is_state_saved(&self) -> bool {
        self.host.is_state_saved()
    }

    /// Asks the host to apply pending transactions, then forgets cached units
    /// the host has dropped.
    ///
    /// The host only borrows itself here, so it cannot re-enter the controller.
    pub fn execute_pending_transactions(&mut self) {
        self.host.execute_pending_transactions();
        self.cache.prune();
        debug!(cached = self.cache.len(), "executed pending transactions");
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn options_or_default(
        &self,
        options: Option<&TransactionOptions>,
    ) -> Option<TransactionOptions> {
        options.or(self.default_options.as_ref()).cloned()
    }

    fn generate_tag(&mut self, unit: &H::Unit) -> Tag {
        self.tag_count += 1;
        Tag::generate(unit.type_name(), self.tag_count)
    }

    fn current_tag(&self) -> Option<&Tag> {
        self.selected
            .and_then(|tab| self.stacks.get(tab.get()))
            .and_then(|stack| stack.last())
    }

    fn resolve(&self, tag: &Tag) -> Option<H::Unit> {
        self.host
            .find_unit_by_tag(tag)
            .or_else(|| self.cache.get(tag))
    }

    fn root_unit(&mut self, tab: TabIndex) -> Result<H::Unit> {
        let unit = match &mut self.roots {
            RootSource::Units(units) => units.get(tab.get()).cloned(),
            RootSource::Factory(factory) => factory.root_unit(tab),
        };
        unit.ok_or_else(|| ConfigError::MissingRootUnit { index: tab.get() }.into())
    }

    fn add_unit(&mut self, transaction: &mut Transaction<H::Unit>, unit: H::Unit, tag: Tag) {
        self.cache.insert(tag.clone(), &unit);
        transaction.add(unit, tag);
    }

    fn remove_tag(&mut self, transaction: &mut Transaction<H::Unit>, tag: &Tag) {
        if let Some(unit) = self.resolve(tag) {
            transaction.remove(unit);
        }
        self.cache.remove(tag);
    }

    fn leave_on_navigate(&self, transaction: &mut Transaction<H::Unit>, unit: H::Unit) {
        if self.hide_strategy.detach_on_push_pop() {
            transaction.detach(unit);
        } else {
            transaction.hide(unit);
        }
    }

    fn leave_on_switch(&self, transaction: &mut Transaction<H::Unit>, unit: H::Unit) {
        if self.hide_strategy.remove_on_switch() {
            transaction.remove(unit);
        } else if self.hide_strategy.detach_on_switch() {
            transaction.detach(unit);
        } else {
            transaction.hide(unit);
        }
    }

    /// Brings the top of `tab` back on screen.
    ///
    /// Tags that resolve to nothing are dropped one by one; an exhausted stack
    /// gets a fresh root. Returns the revealed unit.
    fn reveal_top(
        &mut self,
        tab: TabIndex,
        transaction: &mut Transaction<H::Unit>,
        reveal: Reveal,
    ) -> Result<H::Unit> {
        while let Some(tag) = self.stacks[tab.get()].last().cloned() {
            if let Some(unit) = self.resolve(&tag) {
                match reveal {
                    Reveal::Navigate if self.hide_strategy.detach_on_push_pop() => {
                        transaction.attach(unit.clone());
                    }
                    Reveal::Switch if self.hide_strategy.remove_on_switch() => {
                        self.add_unit(transaction, unit.clone(), tag);
                    }
                    Reveal::Switch if self.hide_strategy.detach_on_switch() => {
                        transaction.attach(unit.clone());
                    }
                    Reveal::Navigate | Reveal::Switch => transaction.show(unit.clone()),
                }
                return Ok(unit);
            }

            self.stacks[tab.get()].pop();
            self.cache.remove(&tag);
            warn!(tab = %tab, tag = %tag, "dropping unresolvable stack entry");
            self.report(
                "could not resolve stack entry",
                &RecoveryError::UnresolvedTag { tag },
            );
        }

        let unit = self.root_unit(tab)?;
        let tag = self.generate_tag(&unit);
        self.stacks[tab.get()].push(tag.clone());
        self.add_unit(transaction, unit.clone(), tag);
        Ok(unit)
    }

    fn commit(&mut self, transaction: Transaction<H::Unit>) {
        if transaction.is_empty() {
            return;
        }
        debug!(
            operations = transaction.len(),
            mode = ?transaction.commit_mode(),
            "committing transaction"
        );
        self.host.commit(transaction);
    }

    fn notify_tab(&mut self, tab: Option<TabIndex>) {
        if let Some(listener) = &mut self.listener {
            listener.on_tab_transaction(self.current_unit.as_ref(), tab);
        }
    }

    fn notify_fragment(&mut self, kind: TransactionType) {
        if let Some(listener) = &mut self.listener {
            listener.on_fragment_transaction(self.current_unit.as_ref(), kind);
        }
    }

    fn report(&self, message: &str, cause: &RecoveryError) {
        if let Some(logger) = &self.logger {
            logger.error(message, cause);
        }
    }
}

impl<H: TransactionHost> PopController for NavController<H> {
    fn try_pop_fragments(
        &mut self,
        depth: usize,
        options: Option<&TransactionOptions>,
    ) -> Result<usize> {
        NavController::try_pop_fragments(self, depth, options)
    }
}

/// Navigator handed to the tab history during a pop.
///
/// History-driven switches bypass recording (the history records them) and
/// are forwarded to the client's switch controller afterwards.
struct HistoryDriver<'a, H: TransactionHost> {
    nav: &'a mut NavController<H>,
    switch_controller: Option<&'a mut (dyn SwitchController + 'static)>,
}

impl<H: TransactionHost> PopController for HistoryDriver<'_, H> {
    fn try_pop_fragments(
        &mut self,
        depth: usize,
        options: Option<&TransactionOptions>,
    ) -> Result<usize> {
        self.nav.try_pop_fragments(depth, options)
    }
}

impl<H: TransactionHost> SwitchController for HistoryDriver<'_, H> {
    fn switch_tab(&mut self, index: TabIndex, options: Option<&TransactionOptions>) -> Result<()> {
        self.nav.switch_tab_unrecorded(index, options)?;
        if let Some(controller) = self.switch_controller.as_deref_mut() {
            controller.switch_tab(index, options)?;
        }
        Ok(())
    }
}
