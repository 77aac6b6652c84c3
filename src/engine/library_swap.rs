//! Engine switch expressed by which SDL library occupies `SDL.dll`.
//!
//! A DFHack-enabled Windows install ships three copies of the library:
//! `SDL.dll` is the one the game loads, `SDLreal.dll` is the vanilla build
//! and `SDLhack.dll` is the DFHack hook.  DFHack is active while `SDL.dll`
//! differs from `SDLreal.dll`.
//!
//! The two copies that make up a toggle are not atomic; an interruption
//! between them can leave `SDL.dll` and its backup out of step.
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::EngineSwitch;
use crate::error::{EngineError, LnpError};
use crate::install::{DFHACK_VARIATION, Installation};
use crate::logging::Log;
use crate::paths::{Component, Paths};
use crate::platform::EngineMechanism;
use crate::resources::helpers::fs::files_identical;

/// Swaps SDL library variants in the game directory.
pub struct LibrarySwapSwitch {
    active: PathBuf,
    real: PathBuf,
    hack: PathBuf,
    supported: bool,
    log: Arc<dyn Log>,
}

impl std::fmt::Debug for LibrarySwapSwitch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LibrarySwapSwitch")
            .field("active", &self.active)
            .field("real", &self.real)
            .field("hack", &self.hack)
            .field("supported", &self.supported)
            .finish_non_exhaustive()
    }
}

impl LibrarySwapSwitch {
    #[must_use]
    pub fn new(paths: &Paths, installation: &Installation, log: Arc<dyn Log>) -> Self {
        Self {
            active: paths.get(Component::Df, &["SDL.dll"]),
            real: paths.get(Component::Df, &["SDLreal.dll"]),
            hack: paths.get(Component::Df, &["SDLhack.dll"]),
            supported: installation.supports(DFHACK_VARIATION),
            log,
        }
    }

    /// Why the switch cannot operate, if it cannot.
    fn unavailable(&self) -> Option<String> {
        if !self.supported {
            return Some("installation has no DFHack variation".to_string());
        }
        if !self.real.is_file() {
            return Some(format!("{} not found", self.real.display()));
        }
        None
    }

    fn copy(from: &Path, to: &Path) -> Result<(), EngineError> {
        std::fs::copy(from, to)
            .map(|_| ())
            .map_err(|source| EngineError::Copy {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
                source,
            })
    }
}

impl EngineSwitch for LibrarySwapSwitch {
    fn mechanism(&self) -> EngineMechanism {
        EngineMechanism::LibrarySwap
    }

    fn is_enabled(&self) -> Result<bool, LnpError> {
        if self.unavailable().is_some() || !self.active.is_file() {
            return Ok(false);
        }
        let identical = files_identical(&self.active, &self.real)
            .map_err(|(path, source)| EngineError::Compare { path, source })?;
        Ok(!identical)
    }

    fn toggle(&mut self) -> Result<bool, LnpError> {
        if let Some(reason) = self.unavailable() {
            self.log.debug(&format!("{reason}; engine switch unchanged"));
            return Ok(false);
        }

        if self.is_enabled()? {
            Self::copy(&self.active, &self.hack)?;
            Self::copy(&self.real, &self.active)?;
        } else {
            if !self.hack.is_file() {
                self.log.debug(&format!(
                    "{} not found; engine switch unchanged",
                    self.hack.display()
                ));
                return Ok(false);
            }
            Self::copy(&self.active, &self.real)?;
            Self::copy(&self.hack, &self.active)?;
        }

        let enabled = self.is_enabled()?;
        self.log.debug(&format!(
            "{} now holds the {} library",
            self.active.display(),
            if enabled { "DFHack" } else { "vanilla" }
        ));
        Ok(enabled)
    }
}
