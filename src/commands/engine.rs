//! Command: inspect or flip the global DFHack switch.
use anyhow::Result;
use std::sync::Arc;

use crate::cli::{EngineAction, EngineOpts, GlobalOpts};
use crate::logging::Logger;
use crate::platform::EngineMechanism;

const fn describe(mechanism: EngineMechanism) -> &'static str {
    match mechanism {
        EngineMechanism::ConfigFlag => "user setting",
        EngineMechanism::LibrarySwap => "SDL library swap",
    }
}

const fn state(enabled: bool) -> &'static str {
    if enabled { "enabled" } else { "disabled" }
}

/// Run the engine command.
///
/// # Errors
///
/// Returns an error if the switch state cannot be read or persisted.
pub fn run(global: &GlobalOpts, opts: &EngineOpts, log: &Arc<Logger>) -> Result<()> {
    let mut session = super::open_session(global, log)?;
    let dry_run = session.dry_run;
    let mut switch = session.engine_switch();
    let mechanism = describe(switch.mechanism());
    let enabled = switch.is_enabled()?;

    match opts.action.unwrap_or(EngineAction::Status) {
        EngineAction::Status => {
            println!("DFHack is {} ({mechanism})", state(enabled));
        }
        EngineAction::Toggle if dry_run => {
            log.dry_run(&format!(
                "would toggle DFHack (currently {}, {mechanism})",
                state(enabled)
            ));
        }
        EngineAction::Toggle => {
            let now = switch.toggle()?;
            if now == enabled {
                log.warn(&format!(
                    "DFHack is still {}; the installation does not support switching it",
                    state(now)
                ));
            } else {
                log.info(&format!("DFHack is now {}", state(now)));
            }
        }
    }
    Ok(())
}
