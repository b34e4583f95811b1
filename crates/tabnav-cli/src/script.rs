//! Navigation script parsing.
//!
//! One step per line; blank lines and `#` comments are ignored.
//!
//! ```text
//! push Feed
//! pop 2
//! switch 1
//! clear        # the active tab
//! clear 2
//! replace Settings
//! dialog Confirm
//! dismiss
//! flush
//! save-state   # the host refuses dialogs afterwards
//! ```

use std::fmt;

use anyhow::{Context, Result, anyhow, bail};

/// One scripted navigation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Push(String),
    Pop(usize),
    Switch(usize),
    Clear(Option<usize>),
    Replace(String),
    Dialog(String),
    Dismiss,
    Flush,
    SaveState,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Push(name) => write!(f, "push {name}"),
            Self::Pop(depth) => write!(f, "pop {depth}"),
            Self::Switch(tab) => write!(f, "switch {tab}"),
            Self::Clear(Some(tab)) => write!(f, "clear {tab}"),
            Self::Clear(None) => f.write_str("clear"),
            Self::Replace(name) => write!(f, "replace {name}"),
            Self::Dialog(name) => write!(f, "dialog {name}"),
            Self::Dismiss => f.write_str("dismiss"),
            Self::Flush => f.write_str("flush"),
            Self::SaveState => f.write_str("save-state"),
        }
    }
}

/// Parses a whole script, reporting the first bad line.
pub fn parse_script(text: &str) -> Result<Vec<Step>> {
    let mut steps = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let step = parse_step(line).with_context(|| format!("line {}: `{line}`", index + 1))?;
        steps.push(step);
    }
    Ok(steps)
}

fn parse_step(line: &str) -> Result<Step> {
    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or_default();
    let argument = words.next();
    if let Some(extra) = words.next() {
        bail!("unexpected argument `{extra}`");
    }

    let step = match command {
        "push" => Step::Push(type_name(argument)?),
        "replace" => Step::Replace(type_name(argument)?),
        "dialog" => Step::Dialog(type_name(argument)?),
        "pop" => Step::Pop(argument.map(number).transpose()?.unwrap_or(1)),
        "switch" => {
            let argument = argument.ok_or_else(|| anyhow!("missing tab index"))?;
            Step::Switch(number(argument)?)
        }
        "clear" => Step::Clear(argument.map(number).transpose()?),
        "dismiss" | "flush" | "save-state" if argument.is_some() => {
            bail!("`{command}` takes no argument")
        }
        "dismiss" => Step::Dismiss,
        "flush" => Step::Flush,
        "save-state" => Step::SaveState,
        other => bail!("unknown command `{other}`"),
    };
    Ok(step)
}

fn type_name(argument: Option<&str>) -> Result<String> {
    let name = argument.ok_or_else(|| anyhow!("missing unit type name"))?;
    if !name.chars().all(|c| c.is_ascii_alphabetic() || c == '_') {
        bail!("unit type names may only contain letters and `_`, got `{name}`");
    }
    Ok(name.to_string())
}

fn number(argument: &str) -> Result<usize> {
    argument
        .parse()
        .with_context(|| format!("`{argument}` is not a number"))
}
