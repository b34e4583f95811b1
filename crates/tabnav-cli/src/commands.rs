use std::fs;

use anyhow::{Context, Result};
use tabnav_cli::script::parse_script;
use tabnav_cli::session::Session;
use tabnav_cli::summary::{stack_table, state_tables};
use tabnav_persistence::{encode_state, load_state, save_state};
use tracing::{info, info_span};

use crate::cli::{InspectArgs, RunArgs};

pub fn run_script(args: &RunArgs) -> Result<()> {
    let span = info_span!("run", script = %args.script.display());
    let _guard = span.enter();

    let text = fs::read_to_string(&args.script)
        .with_context(|| format!("read script {}", args.script.display()))?;
    let steps = parse_script(&text)
        .with_context(|| format!("parse script {}", args.script.display()))?;

    let saved = match &args.state {
        Some(path) if path.exists() => Some(
            load_state(path).with_context(|| format!("load state {}", path.display()))?,
        ),
        _ => None,
    };

    let mut session = Session::open(&args.session_config(), saved.as_ref())?;
    let outcome = session.run(&steps);

    for line in session.transcript() {
        println!("{line}");
    }
    println!();
    println!("{}", stack_table(&session.stacks()));
    if let Some(dialog) = session.host().dialogs().first() {
        println!("Dialog: {dialog}");
    }
    outcome?;

    if let Some(path) = &args.state {
        save_state(&session.save_state(), path)
            .with_context(|| format!("save state {}", path.display()))?;
        info!(path = %path.display(), "saved navigation state");
        println!("State saved to {}", path.display());
    }
    Ok(())
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let state = load_state(&args.state)
        .with_context(|| format!("load state {}", args.state.display()))?;
    if args.json {
        println!("{}", encode_state(&state)?);
        return Ok(());
    }
    let (fields, stacks) = state_tables(&state);
    println!("{fields}");
    println!("{stacks}");
    Ok(())
}
