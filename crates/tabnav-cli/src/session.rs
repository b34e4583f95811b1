//! Replays parsed scripts against a [`ConsoleHost`].

use std::cell::RefCell;
use std::error::Error;
use std::rc::Rc;

use anyhow::{Context, Result};
use tabnav_core::{
    ErrorLogger, HideStrategy, NavController, NavControllerBuilder, NavigationStrategy,
    SavedState, ScreenUnit, SwitchController, TabIndex, TransactionListener, TransactionOptions,
    TransactionType,
};
use tracing::{debug, info_span};

use crate::host::{ConsoleHost, DemoRoots, DemoUnit};
use crate::script::Step;

/// Controller settings taken from the command line.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub tabs: usize,
    pub start: Option<usize>,
    pub strategy: NavigationStrategy,
    pub hide_strategy: HideStrategy,
    pub eager: bool,
    pub deferred: bool,
    pub allow_state_loss: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tabs: 3,
            start: Some(0),
            strategy: NavigationStrategy::default(),
            hide_strategy: HideStrategy::default(),
            eager: false,
            deferred: false,
            allow_state_loss: false,
        }
    }
}

/// One tab's stack at the end of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackRow {
    pub tab: usize,
    pub active: bool,
    pub tags: Vec<String>,
}

/// Collects controller callbacks as transcript notes.
#[derive(Clone, Default)]
struct Notes(Rc<RefCell<Vec<String>>>);

impl Notes {
    fn push(&self, note: String) {
        self.0.borrow_mut().push(note);
    }

    fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

fn unit_name(unit: Option<&DemoUnit>) -> &str {
    unit.map_or("none", ScreenUnit::type_name)
}

impl TransactionListener<DemoUnit> for Notes {
    fn on_tab_transaction(&mut self, unit: Option<&DemoUnit>, tab: Option<TabIndex>) {
        let tab = tab.map_or_else(|| "none".to_string(), |tab| tab.to_string());
        self.push(format!("tab {tab}: {}", unit_name(unit)));
    }

    fn on_fragment_transaction(&mut self, unit: Option<&DemoUnit>, kind: TransactionType) {
        self.push(format!("{}: {}", kind.as_str(), unit_name(unit)));
    }
}

impl ErrorLogger for Notes {
    fn error(&self, message: &str, cause: &dyn Error) {
        self.push(format!("recovered: {message}: {cause}"));
    }
}

/// Stands in for a tab bar that follows history-driven switches.
impl SwitchController for Notes {
    fn switch_tab(
        &mut self,
        index: TabIndex,
        _options: Option<&TransactionOptions>,
    ) -> tabnav_core::Result<()> {
        self.push(format!("tab bar: select {index}"));
        Ok(())
    }
}

/// A controller over an in-memory host plus the transcript of what it did.
pub struct Session {
    nav: NavController<ConsoleHost>,
    notes: Notes,
    transcript: Vec<String>,
    logged: usize,
}

impl Session {
    /// Builds and initializes the controller, restoring `saved` if given.
    pub fn open(config: &SessionConfig, saved: Option<&SavedState>) -> Result<Self> {
        let notes = Notes::default();
        let mut host = ConsoleHost::new(config.deferred);
        if let Some(saved) = saved {
            host.restore_units(saved);
        }

        let options = TransactionOptions::builder()
            .allow_state_loss(config.allow_state_loss)
            .build();
        let mut builder = NavControllerBuilder::new(host)
            .root_factory(DemoRoots::new(config.tabs), config.tabs)
            .default_transaction_options(options)
            .navigation_strategy(config.strategy)
            .hide_strategy(config.hide_strategy)
            .eager(config.eager)
            .transaction_listener(notes.clone())
            .logger(notes.clone());
        if config.strategy.uses_tab_history() {
            builder = builder.switch_controller(notes.clone());
        }
        let mut nav = builder.build()?;

        let start = config.start.map(TabIndex::new).transpose()?;
        nav.initialize(start, saved)
            .context("could not initialize navigation")?;

        let mut session = Self {
            nav,
            notes,
            transcript: Vec::new(),
            logged: 0,
        };
        session.record(if saved.is_some() {
            "restore"
        } else {
            "initialize"
        });
        Ok(session)
    }

    /// Runs `steps` in order, stopping at the first failing one.
    pub fn run(&mut self, steps: &[Step]) -> Result<()> {
        for (index, step) in steps.iter().enumerate() {
            let span = info_span!("step", number = index + 1, step = %step);
            let _guard = span.enter();
            self.apply(step)
                .with_context(|| format!("step {} (`{step}`) failed", index + 1))?;
            self.record(&step.to_string());
        }
        Ok(())
    }

    fn apply(&mut self, step: &Step) -> Result<()> {
        match step {
            Step::Push(name) => self.nav.push_fragment(DemoUnit::new(name.as_str()), None),
            Step::Pop(depth) => {
                if !self.nav.pop_fragments(*depth, None)? {
                    self.notes.push("nothing to pop".to_string());
                }
            }
            Step::Switch(tab) => self.nav.switch_tab(TabIndex::new(*tab)?, None)?,
            Step::Clear(tab) => {
                let tab = tab.map(TabIndex::new).transpose()?;
                self.nav.clear_stack(tab, None)?;
            }
            Step::Replace(name) => self
                .nav
                .replace_fragment(DemoUnit::new(name.as_str()), None),
            Step::Dialog(name) => self
                .nav
                .show_dialog_fragment(DemoUnit::overlay(name.as_str())),
            Step::Dismiss => self.nav.clear_dialog_fragment(),
            Step::Flush => self.nav.execute_pending_transactions(),
            Step::SaveState => self.nav.host_mut().mark_state_saved(),
        }
        Ok(())
    }

    /// Appends everything the host and the callbacks produced since the
    /// previous record.
    fn record(&mut self, label: &str) {
        self.transcript.push(format!("> {label}"));
        let log = self.nav.host().log();
        for line in &log[self.logged.min(log.len())..] {
            self.transcript.push(format!("  {line}"));
        }
        self.logged = log.len();
        for note in self.notes.drain() {
            self.transcript.push(format!("  = {note}"));
        }
        debug!(lines = self.transcript.len(), "recorded step");
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn stacks(&self) -> Vec<StackRow> {
        let active = self.nav.current_stack_index();
        TabIndex::range(self.nav.size())
            .map(|tab| StackRow {
                tab: tab.get(),
                active: active == Some(tab),
                tags: self
                    .nav
                    .stack_tags(tab)
                    .unwrap_or_default()
                    .iter()
                    .map(|tag| tag.as_str().to_string())
                    .collect(),
            })
            .collect()
    }

    /// Type name of the visible unit of the active tab.
    pub fn current(&self) -> Option<String> {
        self.nav
            .current_fragment()
            .map(|unit| unit.type_name().to_string())
    }

    pub fn save_state(&self) -> SavedState {
        self.nav.save_state()
    }

    pub fn host(&self) -> &ConsoleHost {
        self.nav.host()
    }
}
