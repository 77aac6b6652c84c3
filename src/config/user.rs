//! Generic user configuration (`user.toml`).
use std::path::PathBuf;

use super::toml_loader;
use crate::error::StoreError;

/// Key/value user settings.
///
/// Mutations are held in memory until [`save`](Self::save) is called.
pub trait UserConfig: std::fmt::Debug {
    /// Current value for `key`, if set.
    fn get(&self, key: &str) -> Option<toml::Value>;

    /// Set `key` to `value` in memory.
    fn set(&mut self, key: &str, value: toml::Value);

    /// Write the current settings to durable storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be written.
    fn save(&self) -> Result<(), StoreError>;

    /// Boolean value for `key`, or `default` when unset or not a boolean.
    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get(key)
            .and_then(|v| v.as_bool())
            .unwrap_or(default)
    }

    /// String-array value for `key`; non-string elements are dropped.
    fn get_strings(&self, key: &str) -> Option<Vec<String>> {
        let value = self.get(key)?;
        let items = value.as_array()?;
        Some(
            items
                .iter()
                .filter_map(|v| v.as_str().map(String::from))
                .collect(),
        )
    }
}

/// [`UserConfig`] backed by a TOML table on disk.
#[derive(Debug, Clone)]
pub struct TomlUserConfig {
    path: PathBuf,
    values: toml::Table,
}

impl TomlUserConfig {
    /// Load settings from `path`; a missing file yields empty settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let values = toml_loader::load_config(&path)?;
        Ok(Self { path, values })
    }
}

impl UserConfig for TomlUserConfig {
    fn get(&self, key: &str) -> Option<toml::Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: toml::Value) {
        self.values.insert(key.to_string(), value);
    }

    fn save(&self) -> Result<(), StoreError> {
        toml_loader::save_config(&self.path, &self.values)
    }
}
