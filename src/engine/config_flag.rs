//! Engine switch stored as a boolean user setting.
use std::sync::Arc;

use super::EngineSwitch;
use crate::config::{USE_DFHACK_KEY, UserConfig};
use crate::error::LnpError;
use crate::logging::Log;
use crate::platform::EngineMechanism;

/// Reads and flips `use_dfhack` in the user configuration.
///
/// An unset key counts as enabled.  Every toggle is saved immediately.
pub struct ConfigFlagSwitch<'a> {
    config: &'a mut dyn UserConfig,
    log: Arc<dyn Log>,
}

impl std::fmt::Debug for ConfigFlagSwitch<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigFlagSwitch")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<'a> ConfigFlagSwitch<'a> {
    #[must_use]
    pub fn new(config: &'a mut dyn UserConfig, log: Arc<dyn Log>) -> Self {
        Self { config, log }
    }
}

impl EngineSwitch for ConfigFlagSwitch<'_> {
    fn mechanism(&self) -> EngineMechanism {
        EngineMechanism::ConfigFlag
    }

    fn is_enabled(&self) -> Result<bool, LnpError> {
        Ok(self.config.get_bool(USE_DFHACK_KEY, true))
    }

    fn toggle(&mut self) -> Result<bool, LnpError> {
        let enabled = !self.config.get_bool(USE_DFHACK_KEY, true);
        self.config
            .set(USE_DFHACK_KEY, toml::Value::Boolean(enabled));
        self.config.save()?;
        self.log
            .debug(&format!("{USE_DFHACK_KEY} set to {enabled}"));
        Ok(enabled)
    }
}
