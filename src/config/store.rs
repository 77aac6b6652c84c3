//! Hack definition store (`hacks.toml`).
//!
//! Each top-level table is one hack, keyed by its name:
//!
//! ```toml
//! [reveal]
//! command = "!reveal"
//! tooltip = "Reveals the map"
//! file = "onLoad"
//! enabled = true
//! ```
//!
//! [`TomlHackStore::persist`] writes the whole file from the parsed
//! definitions, so comments and keys other than the four above are lost on
//! the first toggle.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::toml_loader;
use crate::error::StoreError;

/// Hack definitions keyed (and therefore ordered) by name.
pub type Definitions = BTreeMap<String, HackDefinition>;

/// One hack as it is persisted in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HackDefinition {
    /// Line written into the init file while the hack is enabled.
    pub command: String,
    /// Human-readable description; may span several lines.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tooltip: String,
    /// Target init file, verbatim; `None` means `dfhack`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Whether the hack should be active.
    #[serde(default)]
    pub enabled: bool,
}

/// Source of hack definitions.
pub trait HackStore: std::fmt::Debug {
    /// Read every hack definition, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read or parsed.
    fn hack_definitions(&self) -> Result<Definitions, StoreError>;

    /// Replace the stored definitions with `definitions`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn persist(&mut self, definitions: &Definitions) -> Result<(), StoreError>;
}

/// [`HackStore`] backed by a TOML file.
#[derive(Debug, Clone)]
pub struct TomlHackStore {
    path: PathBuf,
}

impl TomlHackStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HackStore for TomlHackStore {
    fn hack_definitions(&self) -> Result<Definitions, StoreError> {
        toml_loader::load_config(&self.path)
    }

    fn persist(&mut self, definitions: &Definitions) -> Result<(), StoreError> {
        toml_loader::save_config(&self.path, definitions)
    }
}
