//! Assembly and validation of a [`NavController`].

use tabnav_model::{
    ConfigError, HideStrategy, MAX_TABS, NavigationStrategy, Result, TransactionOptions,
};
use tracing::warn;

use crate::controller::{ControllerConfig, NavController, RootSource};
use crate::history::SwitchController;
use crate::host::{ErrorLogger, RootFactory, TransactionHost, TransactionListener};

/// Consuming builder for [`NavController`].
///
/// Exactly one root source is required: a fixed list of root units
/// ([`root_units`](Self::root_units)) or a factory with a declared tab count
/// ([`root_factory`](Self::root_factory)).
pub struct NavControllerBuilder<H: TransactionHost> {
    host: H,
    root_units: Option<Vec<H::Unit>>,
    root_factory: Option<(Box<dyn RootFactory<H::Unit>>, usize)>,
    default_options: Option<TransactionOptions>,
    listener: Option<Box<dyn TransactionListener<H::Unit>>>,
    strategy: NavigationStrategy,
    switch_controller: Option<Box<dyn SwitchController>>,
    hide_strategy: HideStrategy,
    eager: bool,
    logger: Option<Box<dyn ErrorLogger>>,
}

impl<H: TransactionHost> NavControllerBuilder<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            root_units: None,
            root_factory: None,
            default_options: None,
            listener: None,
            strategy: NavigationStrategy::default(),
            switch_controller: None,
            hide_strategy: HideStrategy::default(),
            eager: false,
            logger: None,
        }
    }

    /// A single tab rooted at `unit`.
    pub fn root_unit(self, unit: H::Unit) -> Self {
        self.root_units(vec![unit])
    }

    /// One tab per unit, in order.
    pub fn root_units(mut self, units: Vec<H::Unit>) -> Self {
        self.root_units = Some(units);
        self
    }

    /// `tab_count` tabs whose roots are created on demand.
    pub fn root_factory(
        mut self,
        factory: impl RootFactory<H::Unit> + 'static,
        tab_count: usize,
    ) -> Self {
        self.root_factory = Some((Box::new(factory), tab_count));
        self
    }

    pub fn default_transaction_options(mut self, options: TransactionOptions) -> Self {
        self.default_options = Some(options);
        self
    }

    pub fn transaction_listener(
        mut self,
        listener: impl TransactionListener<H::Unit> + 'static,
    ) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn navigation_strategy(mut self, strategy: NavigationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Notified after every switch the tab history performs.
    pub fn switch_controller(mut self, controller: impl SwitchController + 'static) -> Self {
        self.switch_controller = Some(Box::new(controller));
        self
    }

    pub fn hide_strategy(mut self, strategy: HideStrategy) -> Self {
        self.hide_strategy = strategy;
        self
    }

    /// Create every tab's root during initialization.
    pub fn eager(mut self, eager: bool) -> Self {
        self.eager = eager;
        self
    }

    pub fn logger(mut self, logger: impl ErrorLogger + 'static) -> Self {
        self.logger = Some(Box::new(logger));
        self
    }

    /// Validates the configuration.
    pub fn build(self) -> Result<NavController<H>> {
        let (roots, tab_count) = match (self.root_units, self.root_factory) {
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingRootSources.into()),
            (None, None) => return Err(ConfigError::MissingRootSource.into()),
            (Some(units), None) => {
                let count = units.len();
                (RootSource::Units(units), count)
            }
            (None, Some((factory, count))) => {
                if factory.unit_count() != count {
                    warn!(
                        declared = count,
                        available = factory.unit_count(),
                        "root factory unit count differs from the declared tab count"
                    );
                }
                (RootSource::Factory(factory), count)
            }
        };

        if tab_count == 0 {
            return Err(ConfigError::NoTabs.into());
        }
        if tab_count > MAX_TABS {
            return Err(ConfigError::TooManyTabs { count: tab_count }.into());
        }
        if self.strategy.uses_tab_history() && self.switch_controller.is_none() {
            return Err(ConfigError::MissingSwitchController {
                strategy: self.strategy.name(),
            }
            .into());
        }

        let config = ControllerConfig {
            roots,
            tab_count,
            default_options: self.default_options,
            listener: self.listener,
            logger: self.logger,
            strategy: self.strategy,
            switch_controller: self.switch_controller,
            hide_strategy: self.hide_strategy,
            eager: self.eager,
        };
        Ok(NavController::new(self.host, config))
    }
}
