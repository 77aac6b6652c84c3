//! Idempotent resource primitives (check + apply pattern).
//!
//! A resource knows its desired state, can compare it with what is on disk,
//! and can make the disk match.  Callers check first so unchanged resources
//! are never rewritten.
pub mod helpers;
pub mod init_file;

use anyhow::Result;

/// What a resource currently looks like compared with its desired state.
///
/// # Examples
///
/// ```
/// use lnp_hacks::resources::ResourceState;
///
/// let stale = ResourceState::Incorrect { current: "12 bytes with different content".into() };
/// assert_ne!(stale, ResourceState::Correct);
/// assert_eq!(ResourceState::Missing, ResourceState::Missing);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceState {
    /// Should exist but does not.
    Missing,
    /// Already matches.
    Correct,
    /// Exists with the wrong contents, or exists but should not.
    Incorrect {
        /// Short description of what was found.
        current: String,
    },
    /// Cannot be reconciled (e.g. a directory sits where a file belongs).
    Invalid {
        /// Why the resource was left alone.
        reason: String,
    },
}

/// Outcome of reconciling a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceChange {
    /// The disk was changed.
    Applied,
    /// Nothing needed to change.
    AlreadyCorrect,
    /// A change was needed but not made.
    Skipped {
        /// Why the change was not made (dry run, invalid target).
        reason: String,
    },
}

/// A piece of on-disk state that can be checked and reconciled.
pub trait Resource {
    /// Human-readable description, usually a path.
    fn description(&self) -> String;

    /// Compare the disk with the desired state.
    ///
    /// # Errors
    ///
    /// Returns an error if the current state cannot be read.
    fn current_state(&self) -> Result<ResourceState>;

    /// Make the disk match the desired state.
    ///
    /// # Errors
    ///
    /// Returns an error if the change cannot be written.
    fn apply(&self) -> Result<ResourceChange>;
}
