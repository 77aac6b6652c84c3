//! Hack registry backed by the definition store.
//!
//! The store is the source of truth for which hacks are enabled; init files
//! are regenerated from it by the [`synchronizer`](super::sync).
use std::collections::BTreeMap;
use std::sync::Arc;

use super::hack::{Hack, TargetFile};
use crate::config::{Definitions, HackStore};
use crate::error::{HackError, StoreError};
use crate::logging::Log;

/// Hacks keyed (and ordered) by name.
pub type Hacks = BTreeMap<String, Hack>;

/// Result of changing a hack's enabled state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// State after the change.
    pub enabled: bool,
    /// File that must be rebuilt to materialize the change.
    pub target: TargetFile,
    /// `false` when the hack was already in the requested state.
    pub changed: bool,
}

/// Lookup and enablement of configured hacks.
pub struct HackRegistry {
    store: Box<dyn HackStore>,
    log: Arc<dyn Log>,
}

impl std::fmt::Debug for HackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HackRegistry")
            .field("store", &self.store)
            .field("log", &"<dyn Log>")
            .finish()
    }
}

impl HackRegistry {
    #[must_use]
    pub fn new(store: Box<dyn HackStore>, log: Arc<dyn Log>) -> Self {
        Self { store, log }
    }

    /// All configured hacks, sorted by name.
    ///
    /// Reads the store on every call so external edits are picked up.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn list_hacks(&self) -> Result<Hacks, StoreError> {
        Ok(self
            .store
            .hack_definitions()?
            .iter()
            .map(|(name, def)| (name.clone(), Hack::from_definition(name, def)))
            .collect())
    }

    /// The hack called `name`, or `None` if it is not configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn get_hack(&self, name: &str) -> Result<Option<Hack>, StoreError> {
        let hack = self.list_hacks()?.remove(name);
        if hack.is_none() {
            self.log.debug(&HackError::NotFound(name.to_string()).to_string());
        }
        Ok(hack)
    }

    /// Look up `name` and validate its target file.
    ///
    /// Logs an error and returns `None` when the hack is unknown or its
    /// target file is invalid.
    fn resolve(&self, name: &str) -> Result<Option<(Definitions, TargetFile)>, StoreError> {
        let definitions = self.store.hack_definitions()?;
        let Some(definition) = definitions.get(name) else {
            self.log.error(&HackError::NotFound(name.to_string()).to_string());
            return Ok(None);
        };

        match Hack::from_definition(name, definition).target_file() {
            Ok(target) => Ok(Some((definitions, target))),
            Err(e) => {
                self.log.error(&e.to_string());
                Ok(None)
            }
        }
    }

    /// The hacks as they would be after setting `enabled` on `name`,
    /// without persisting anything.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn preview(
        &self,
        name: &str,
        enabled: bool,
    ) -> Result<Option<(Hacks, Transition)>, StoreError> {
        let Some((definitions, target)) = self.resolve(name)? else {
            return Ok(None);
        };
        let mut hacks: Hacks = definitions
            .iter()
            .map(|(n, def)| (n.clone(), Hack::from_definition(n, def)))
            .collect();
        let changed = hacks.get_mut(name).is_some_and(|hack| {
            let changed = hack.enabled != enabled;
            hack.enabled = enabled;
            changed
        });
        Ok(Some((
            hacks,
            Transition {
                enabled,
                target,
                changed,
            },
        )))
    }

    /// Persist `enabled` for the hack called `name`.
    ///
    /// Returns `None` without touching the store when the hack is unknown or
    /// its target file is invalid; the reason is logged as an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub fn set_enabled(
        &mut self,
        name: &str,
        enabled: bool,
    ) -> Result<Option<Transition>, StoreError> {
        let Some((mut definitions, target)) = self.resolve(name)? else {
            return Ok(None);
        };
        let Some(definition) = definitions.get_mut(name) else {
            return Ok(None);
        };

        if definition.enabled == enabled {
            self.log.debug(&format!(
                "{name} is already {}",
                if enabled { "enabled" } else { "disabled" }
            ));
            return Ok(Some(Transition {
                enabled,
                target,
                changed: false,
            }));
        }

        definition.enabled = enabled;
        self.store.persist(&definitions)?;
        self.log.debug(&format!(
            "{name} {} in {target}",
            if enabled { "enabled" } else { "disabled" }
        ));
        Ok(Some(Transition {
            enabled,
            target,
            changed: true,
        }))
    }

    /// Flip the enabled state of the hack called `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub fn toggle(&mut self, name: &str) -> Result<Option<Transition>, StoreError> {
        let current = self
            .store
            .hack_definitions()?
            .get(name)
            .map(|def| def.enabled);
        match current {
            Some(enabled) => self.set_enabled(name, !enabled),
            None => {
                self.log.error(&HackError::NotFound(name.to_string()).to_string());
                Ok(None)
            }
        }
    }
}
