//! Core logging types: outcome entries, outcome status, and the [`Log`] trait.

/// Result of one reconciliation step, collected for the run summary.
#[derive(Debug, Clone)]
pub struct OutcomeEntry {
    /// What was reconciled (usually an init file name).
    pub name: String,
    /// Final status of the step.
    pub status: Outcome,
    /// Optional detail message (e.g., hack count or error description).
    pub message: Option<String>,
}

/// Status of a completed reconciliation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The file was written with new content.
    Written,
    /// The file was deleted because nothing targets it.
    Removed,
    /// The file already matched.
    Unchanged,
    /// A change was needed but only previewed.
    DryRun,
    /// The step failed.
    Failed,
}

/// Abstraction over logging backends.
///
/// Components receive an `Arc<dyn Log>` so tests can substitute a recorder
/// and assert on what was reported.
pub trait Log: Send + Sync {
    /// Log a stage header (major section).
    fn stage(&self, msg: &str);
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a debug message (may be suppressed on console).
    fn debug(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
    /// Log a dry-run action message.
    fn dry_run(&self, msg: &str);
    /// Record a reconciliation outcome for the summary.
    fn record(&self, name: &str, status: Outcome, message: Option<&str>);
}
