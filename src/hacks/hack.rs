use std::fmt;
use std::str::FromStr;

use crate::config::HackDefinition;
use crate::error::HackError;

/// One of the three DFHack init scripts a hack can live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TargetFile {
    /// Run once when DFHack starts.
    Dfhack,
    /// Run whenever a world is loaded.
    OnLoad,
    /// Run whenever a map (fortress or adventure) is loaded.
    OnMapLoad,
}

impl TargetFile {
    /// Every target file, in the order they are rebuilt.
    pub const ALL: [Self; 3] = [Self::Dfhack, Self::OnLoad, Self::OnMapLoad];

    /// Key used in hack definitions and as the file name stem.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Dfhack => "dfhack",
            Self::OnLoad => "onLoad",
            Self::OnMapLoad => "onMapLoad",
        }
    }

    /// File name for this target, e.g. `onLoad_LNP.init`.
    #[must_use]
    pub fn file_name(self, suffix: &str) -> String {
        format!("{}_{suffix}.init", self.key())
    }
}

impl fmt::Display for TargetFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TargetFile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.key() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// A named, toggleable DFHack command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hack {
    pub name: String,
    pub command: String,
    pub tooltip: String,
    /// Target file as configured; `None` means [`TargetFile::Dfhack`].
    pub file: Option<String>,
    pub enabled: bool,
}

impl Hack {
    #[must_use]
    pub fn from_definition(name: &str, definition: &HackDefinition) -> Self {
        Self {
            name: name.to_string(),
            command: definition.command.clone(),
            tooltip: definition.tooltip.clone(),
            file: definition.file.clone(),
            enabled: definition.enabled,
        }
    }

    /// The configured target file key, defaulting to `dfhack`.
    #[must_use]
    pub fn file_key(&self) -> &str {
        self.file.as_deref().unwrap_or(TargetFile::Dfhack.key())
    }

    /// Parse the configured target file.
    ///
    /// # Errors
    ///
    /// Returns [`HackError::InvalidTargetFile`] if the configured value is not
    /// one of `dfhack`, `onLoad`, `onMapLoad`.
    pub fn target_file(&self) -> Result<TargetFile, HackError> {
        self.file_key()
            .parse()
            .map_err(|file| HackError::InvalidTargetFile {
                hack: self.name.clone(),
                file,
            })
    }
}
