//! Top-level subcommand handlers.
pub mod docs;
pub mod engine;
pub mod hacks;
pub mod rebuild;
pub mod version;

use anyhow::{Context as _, Result};
use std::path::PathBuf;
use std::sync::Arc;

use crate::cli::GlobalOpts;
use crate::logging::{Log, Logger};
use crate::platform::Platform;
use crate::session::{Session, SessionOptions};

/// Resolve the launcher root: `--root` if given, else the current directory.
///
/// # Errors
///
/// Returns an error if the directory does not exist or the current
/// directory cannot be determined.
pub fn resolve_root(global: &GlobalOpts) -> Result<PathBuf> {
    let root = match &global.root {
        Some(root) => root.clone(),
        None => std::env::current_dir().context("cannot determine current directory")?,
    };
    dunce::canonicalize(&root)
        .with_context(|| format!("launcher root {} does not exist", root.display()))
}

/// Build the [`Session`] shared by the hack and engine commands.
///
/// # Errors
///
/// Returns an error if the root cannot be resolved or `user.toml` is invalid.
pub fn open_session(global: &GlobalOpts, log: &Arc<Logger>) -> Result<Session> {
    let root = resolve_root(global)?;
    let options = SessionOptions {
        df: global.df.clone(),
        dry_run: global.dry_run,
        ..SessionOptions::new(&root)
    };

    let log: Arc<dyn Log> = log.clone();
    log.debug(&format!("launcher root {}", root.display()));
    if options.dry_run {
        log.info("dry run: no files will be changed");
    }
    Ok(Session::open(&options, Platform::detect(), log)?)
}

/// Print the summary and fail if any step recorded a failure.
///
/// # Errors
///
/// Returns an error if one or more files failed to reconcile.
pub fn finish(log: &Logger) -> Result<()> {
    log.print_summary();

    let count = log.failure_count();
    if count > 0 {
        anyhow::bail!("{count} init file(s) failed");
    }
    Ok(())
}
