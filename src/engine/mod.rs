//! The global "use DFHack" switch.
//!
//! The switch is expressed differently per platform: a user setting on
//! Linux and macOS, and the identity of `SDL.dll` on Windows.  Callers pick
//! an implementation once with [`select`] and then only see
//! [`EngineSwitch`].
pub mod config_flag;
pub mod library_swap;

pub use config_flag::ConfigFlagSwitch;
pub use library_swap::LibrarySwapSwitch;

use std::sync::Arc;

use crate::config::UserConfig;
use crate::error::LnpError;
use crate::install::Installation;
use crate::logging::Log;
use crate::paths::Paths;
use crate::platform::{EngineMechanism, Platform};

/// Enables or disables DFHack for the whole game.
pub trait EngineSwitch: std::fmt::Debug {
    /// How this switch stores its state.
    fn mechanism(&self) -> EngineMechanism;

    /// Whether DFHack will be used on the next launch.
    ///
    /// # Errors
    ///
    /// Returns an error if the persisted state cannot be inspected.
    fn is_enabled(&self) -> Result<bool, LnpError>;

    /// Flip the switch and return the resulting state.
    ///
    /// # Errors
    ///
    /// Returns an error if the new state cannot be persisted.
    fn toggle(&mut self) -> Result<bool, LnpError>;
}

/// Build the switch appropriate for `platform`.
#[must_use]
pub fn select<'a>(
    platform: &Platform,
    paths: &Paths,
    installation: &Installation,
    user: &'a mut dyn UserConfig,
    log: Arc<dyn Log>,
) -> Box<dyn EngineSwitch + 'a> {
    match platform.engine_mechanism() {
        EngineMechanism::ConfigFlag => Box::new(ConfigFlagSwitch::new(user, log)),
        EngineMechanism::LibrarySwap => {
            Box::new(LibrarySwapSwitch::new(paths, installation, log))
        }
    }
}
