//! Console and file logger with dry-run awareness and summary collection.
use std::path::PathBuf;
use std::sync::Mutex;

use super::subscriber::{DRY_RUN_TARGET, STAGE_TARGET};
use super::types::{Log, Outcome, OutcomeEntry};
use super::utils::log_file_path;

/// Implement the display methods of [`Log`] by delegating to inherent methods
/// of the same name on the implementing type.
macro_rules! forward_log_methods {
    ($($method:ident),+ $(,)?) => {
        $(
            fn $method(&self, msg: &str) {
                self.$method(msg);
            }
        )+
    };
}

/// Structured logger backed by [`tracing`].
///
/// Messages go through the global subscriber installed by
/// [`init_subscriber`](super::subscriber::init_subscriber), which mirrors
/// every event into `$XDG_CACHE_HOME/lnp-hacks/<command>.log`.
#[derive(Debug)]
pub struct Logger {
    outcomes: Mutex<Vec<OutcomeEntry>>,
    log_file: Option<PathBuf>,
}

impl Logger {
    /// Create a new logger for `command`.
    ///
    /// Only remembers the log file path for the summary; the file itself is
    /// created by the subscriber.
    #[must_use]
    pub fn new(command: &str) -> Self {
        Self {
            outcomes: Mutex::new(Vec::new()),
            log_file: log_file_path(command),
        }
    }

    /// Return a clone of all recorded outcomes.
    #[must_use]
    pub fn outcomes(&self) -> Vec<OutcomeEntry> {
        self.outcomes.lock().map_or_else(|_| vec![], |g| g.clone())
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log a stage header (major section).
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: STAGE_TARGET, "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (suppressed on console unless verbose; always
    /// written to the log file).
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Log a dry-run action message.
    pub fn dry_run(&self, msg: &str) {
        tracing::info!(target: DRY_RUN_TARGET, "{msg}");
    }

    /// Record a reconciliation outcome for the summary.
    pub fn record(&self, name: &str, status: Outcome, message: Option<&str>) {
        if let Ok(mut guard) = self.outcomes.lock() {
            guard.push(OutcomeEntry {
                name: name.to_string(),
                status,
                message: message.map(String::from),
            });
        }
    }

    /// Count the number of failed outcomes.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.outcomes.lock().map_or(0, |guard| {
            guard
                .iter()
                .filter(|o| o.status == Outcome::Failed)
                .count()
        })
    }

    /// Print one line per recorded init file and a closing tally.
    pub fn print_summary(&self) {
        let outcomes = self.outcomes();
        if outcomes.is_empty() {
            return;
        }

        self.stage("Summary");
        let mut tally = Tally::default();
        for entry in &outcomes {
            tally.add(entry.status);
            let (icon, color) = entry.status.marker();
            let detail = entry
                .message
                .as_deref()
                .map_or_else(String::new, |msg| format!(" ({msg})"));
            self.info(&format!("{color}{icon} {}{detail}\x1b[0m", entry.name));
        }
        self.info(&tally.to_string());

        if let Some(path) = &self.log_file {
            self.info(&format!("\x1b[2mlog: {}\x1b[0m", path.display()));
        }
    }
}

impl Outcome {
    const fn marker(self) -> (&'static str, &'static str) {
        match self {
            Self::Written => ("✓", "\x1b[32m"),
            Self::Removed => ("-", "\x1b[32m"),
            Self::Unchanged => ("·", "\x1b[2m"),
            Self::DryRun => ("~", "\x1b[37m"),
            Self::Failed => ("✗", "\x1b[31m"),
        }
    }
}

/// Outcome counts for the closing summary line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Tally {
    changed: usize,
    unchanged: usize,
    previewed: usize,
    failed: usize,
}

impl Tally {
    const fn add(&mut self, status: Outcome) {
        match status {
            Outcome::Written | Outcome::Removed => self.changed += 1,
            Outcome::Unchanged => self.unchanged += 1,
            Outcome::DryRun => self.previewed += 1,
            Outcome::Failed => self.failed += 1,
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let total = self.changed + self.unchanged + self.previewed + self.failed;
        write!(f, "{total} init files: {} changed, {} unchanged", self.changed, self.unchanged)?;
        if self.previewed > 0 {
            write!(f, ", {} would change", self.previewed)?;
        }
        if self.failed > 0 {
            write!(f, ", \x1b[31m{} failed\x1b[0m", self.failed)?;
        }
        Ok(())
    }
}

impl Log for Logger {
    forward_log_methods!(stage, info, debug, warn, error, dry_run);

    fn record(&self, name: &str, status: Outcome, message: Option<&str>) {
        self.record(name, status, message);
    }
}
