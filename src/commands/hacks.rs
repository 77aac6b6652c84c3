//! Commands that list, show and switch individual hacks.
use anyhow::{Result, bail};
use serde::Serialize;
use std::sync::Arc;

use crate::cli::{GlobalOpts, HackOpts, ListOpts};
use crate::logging::Logger;
use crate::session::HackStatus;

/// One row of `list --json`.
#[derive(Debug, Serialize)]
struct ListEntry<'a> {
    name: &'a str,
    command: &'a str,
    file: &'a str,
    enabled: bool,
    materialized: bool,
}

impl<'a> From<&'a HackStatus> for ListEntry<'a> {
    fn from(status: &'a HackStatus) -> Self {
        Self {
            name: &status.hack.name,
            command: &status.hack.command,
            file: status.hack.file_key(),
            enabled: status.hack.enabled,
            materialized: status.materialized,
        }
    }
}

/// Render the hack table printed by `list`.
fn format_table(statuses: &[HackStatus]) -> String {
    let width = statuses
        .iter()
        .map(|s| s.hack.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for status in statuses {
        let mark = if status.hack.enabled { "[x]" } else { "[ ]" };
        let drift = if status.in_sync() { "" } else { "  (out of sync)" };
        out.push_str(&format!(
            "{mark} {:<width$}  {}{drift}\n",
            status.hack.name,
            status.hack.file_key()
        ));
    }
    out
}

/// Run the list command.
///
/// # Errors
///
/// Returns an error if the store or an init file cannot be read.
pub fn list(global: &GlobalOpts, opts: &ListOpts, log: &Arc<Logger>) -> Result<()> {
    let session = super::open_session(global, log)?;
    let statuses = session.hack_statuses()?;

    if opts.json {
        let entries: Vec<ListEntry<'_>> = statuses.iter().map(ListEntry::from).collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if statuses.is_empty() {
        log.info("no hacks configured");
        return Ok(());
    }
    print!("{}", format_table(&statuses));

    let drifted = statuses.iter().filter(|s| !s.in_sync()).count();
    if drifted > 0 {
        log.warn(&format!(
            "{drifted} hack(s) differ from the init files; run `lnp-hacks rebuild`"
        ));
    }
    Ok(())
}

/// Run the show command.
///
/// # Errors
///
/// Returns an error if the store cannot be read or the hack is unknown.
pub fn show(global: &GlobalOpts, opts: &HackOpts, log: &Arc<Logger>) -> Result<()> {
    let session = super::open_session(global, log)?;
    let Some(status) = session
        .hack_statuses()?
        .into_iter()
        .find(|s| s.hack.name == opts.name)
    else {
        bail!("no hack configured with name '{}'", opts.name);
    };

    let hack = &status.hack;
    println!("name:      {}", hack.name);
    println!("command:   {}", hack.command);
    println!("file:      {}", hack.file_key());
    println!("enabled:   {}", hack.enabled);
    println!("in file:   {}", status.materialized);
    for (i, line) in hack.tooltip.lines().enumerate() {
        let label = if i == 0 { "tooltip:" } else { "" };
        println!("{label:<10} {line}");
    }
    Ok(())
}

fn report(name: &str, result: Option<bool>, log: &Logger) -> Result<()> {
    match result {
        Some(enabled) => {
            log.info(&format!(
                "{name} is now {}",
                if enabled { "enabled" } else { "disabled" }
            ));
            super::finish(log)
        }
        None => bail!("no change made to '{name}'"),
    }
}

/// Run the toggle command.
///
/// # Errors
///
/// Returns an error if the hack is unknown or invalid, or its init file
/// cannot be rebuilt.
pub fn toggle(global: &GlobalOpts, opts: &HackOpts, log: &Arc<Logger>) -> Result<()> {
    let mut session = super::open_session(global, log)?;
    log.stage(&format!("Toggling {}", opts.name));
    let result = session.toggle_hack(&opts.name)?;
    report(&opts.name, result, log)
}

/// Run the enable or disable command.
///
/// # Errors
///
/// Returns an error if the hack is unknown or invalid, or its init file
/// cannot be rebuilt.
pub fn set(global: &GlobalOpts, opts: &HackOpts, enabled: bool, log: &Arc<Logger>) -> Result<()> {
    let mut session = super::open_session(global, log)?;
    log.stage(&format!(
        "{} {}",
        if enabled { "Enabling" } else { "Disabling" },
        opts.name
    ));
    let result = session.set_hack_enabled(&opts.name, enabled)?;
    report(&opts.name, result, log)
}
