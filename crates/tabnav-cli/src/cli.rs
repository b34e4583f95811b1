//! CLI argument definitions for the `tabnav` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tabnav_cli::session::SessionConfig;
use tabnav_core::{HideStrategy, MAX_TABS, NavigationStrategy};

#[derive(Parser)]
#[command(
    name = "tabnav",
    version,
    about = "Replay tab navigation scripts against an in-memory host",
    long_about = "Replay tab navigation scripts against an in-memory host.\n\n\
                  Every navigation step is turned into one host transaction; the\n\
                  committed operations and the final stack of each tab are printed."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix each log line with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Replay a navigation script.
    Run(RunArgs),

    /// Print a saved navigation state file.
    Inspect(InspectArgs),
}

#[derive(Args)]
pub struct RunArgs {
    /// Script with one navigation step per line.
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Number of tabs.
    #[arg(
        long,
        default_value_t = 3,
        value_parser = clap::value_parser!(u8).range(1..=MAX_TABS as i64)
    )]
    pub tabs: u8,

    /// Tab selected after initialization.
    #[arg(long, default_value_t = 0, conflicts_with = "no_start")]
    pub start: usize,

    /// Initialize without selecting a tab.
    #[arg(long = "no-start")]
    pub no_start: bool,

    /// What popping past a tab's root does.
    #[arg(long, value_enum, default_value = "current")]
    pub strategy: StrategyArg,

    /// How units leave the screen.
    #[arg(long, value_enum, default_value = "detach")]
    pub hide: HideArg,

    /// Create every tab's root during initialization.
    #[arg(long)]
    pub eager: bool,

    /// Only apply commits on `flush` steps.
    #[arg(long)]
    pub deferred: bool,

    /// Restore from this file before running and save to it afterwards.
    #[arg(long, value_name = "PATH")]
    pub state: Option<PathBuf>,

    /// Commit every transaction allowing state loss.
    #[arg(long = "allow-state-loss")]
    pub allow_state_loss: bool,
}

impl RunArgs {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            tabs: usize::from(self.tabs),
            start: (!self.no_start).then_some(self.start),
            strategy: self.strategy.into(),
            hide_strategy: self.hide.into(),
            eager: self.eager,
            deferred: self.deferred,
            allow_state_loss: self.allow_state_loss,
        }
    }
}

#[derive(Args)]
pub struct InspectArgs {
    /// Saved navigation state file.
    #[arg(value_name = "STATE")]
    pub state: PathBuf,

    /// Print the raw JSON instead of tables.
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StrategyArg {
    /// Pops never leave the active tab.
    Current,
    /// Return through previously visited tabs, each once.
    Unique,
    /// Return through every visit in order.
    Unlimited,
}

impl From<StrategyArg> for NavigationStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Current => Self::CurrentTab,
            StrategyArg::Unique => Self::UniqueTabHistory,
            StrategyArg::Unlimited => Self::UnlimitedTabHistory,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum HideArg {
    Detach,
    Hide,
    DetachOnNavigate,
    Remove,
}

impl From<HideArg> for HideStrategy {
    fn from(value: HideArg) -> Self {
        match value {
            HideArg::Detach => Self::Detach,
            HideArg::Hide => Self::Hide,
            HideArg::DetachOnNavigate => Self::DetachOnNavigateHideOnSwitch,
            HideArg::Remove => Self::Remove,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
