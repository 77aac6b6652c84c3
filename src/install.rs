//! Installation descriptor: which optional game variations are present.
use std::collections::BTreeSet;

use crate::config::{UserConfig, VARIATIONS_KEY};
use crate::paths::{Component, Paths};

/// Variation name advertised by a DFHack-capable installation.
pub const DFHACK_VARIATION: &str = "dfhack";

/// Optional variations of the game installation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Installation {
    variations: BTreeSet<String>,
}

impl Installation {
    /// Inspect the game directory for known variations.
    ///
    /// DFHack is present when `hack/` exists or either alternate SDL library
    /// is found next to the game.
    #[must_use]
    pub fn detect(paths: &Paths) -> Self {
        let mut variations = BTreeSet::new();
        let has_dfhack = paths.get(Component::Df, &["hack"]).is_dir()
            || ["SDLhack.dll", "SDLreal.dll"]
                .iter()
                .any(|lib| paths.get(Component::Df, &[lib]).is_file());
        if has_dfhack {
            variations.insert(DFHACK_VARIATION.to_string());
        }
        Self { variations }
    }

    /// Use the `variations` user setting if present, else [`detect`](Self::detect).
    #[must_use]
    pub fn resolve(paths: &Paths, user: &dyn UserConfig) -> Self {
        user.get_strings(VARIATIONS_KEY)
            .map_or_else(|| Self::detect(paths), Self::with_variations)
    }

    /// Build a descriptor from explicit variation names.
    #[must_use]
    pub fn with_variations<I, S>(variations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            variations: variations.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the installation advertises `variation`.
    #[must_use]
    pub fn supports(&self, variation: &str) -> bool {
        self.variations.contains(variation)
    }

    /// All advertised variations, sorted.
    #[must_use]
    pub const fn variations(&self) -> &BTreeSet<String> {
        &self.variations
    }
}
