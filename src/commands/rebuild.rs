//! Command: regenerate every init file from `hacks.toml`.
use anyhow::Result;
use std::sync::Arc;

use crate::cli::GlobalOpts;
use crate::logging::Logger;

/// Run the rebuild command.
///
/// # Errors
///
/// Returns an error if the store cannot be read or an init file cannot be
/// written.
pub fn run(global: &GlobalOpts, log: &Arc<Logger>) -> Result<()> {
    let session = super::open_session(global, log)?;

    log.stage("Rebuilding init files");
    log.debug(&format!("init directory {}", session.sync.dir().display()));
    session.rebuild_all()?;

    super::finish(log)
}
