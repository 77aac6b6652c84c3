//! Launcher directory layout.
//!
//! Every file the hack manager touches is located through [`Paths::get`],
//! which joins path segments onto one of a few well-known base directories.
use std::path::{Path, PathBuf};

/// Well-known base directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    /// Launcher root (holds `hacks.toml` and `user.toml`).
    Root,
    /// Dwarf Fortress game directory.
    Df,
    /// DFHack init script directory (`<df>/dfhack-config/init`).
    DfhackConfig,
    /// Bundled DFHack documentation (`<df>/hack/docs`).
    Docs,
}

/// Resolved base directories for one launcher installation.
#[derive(Debug, Clone)]
pub struct Paths {
    root: PathBuf,
    df: PathBuf,
}

impl Paths {
    /// Build the layout for a launcher rooted at `root`.
    ///
    /// The game directory defaults to `<root>/df` when `df` is `None`.
    #[must_use]
    pub fn new(root: &Path, df: Option<&Path>) -> Self {
        let df = df.map_or_else(|| root.join("df"), Path::to_path_buf);
        Self {
            root: root.to_path_buf(),
            df,
        }
    }

    /// Resolve `segments` relative to the base directory of `component`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lnp_hacks::paths::{Component, Paths};
    /// use std::path::Path;
    ///
    /// let paths = Paths::new(Path::new("/lnp"), None);
    /// assert_eq!(
    ///     paths.get(Component::DfhackConfig, &["onLoad_LNP.init"]),
    ///     Path::new("/lnp/df/dfhack-config/init/onLoad_LNP.init"),
    /// );
    /// ```
    #[must_use]
    pub fn get(&self, component: Component, segments: &[&str]) -> PathBuf {
        let mut path = match component {
            Component::Root => self.root.clone(),
            Component::Df => self.df.clone(),
            Component::DfhackConfig => self.df.join("dfhack-config").join("init"),
            Component::Docs => self.df.join("hack").join("docs"),
        };
        path.extend(segments);
        path
    }

    /// Dwarf Fortress game directory.
    #[must_use]
    pub fn df(&self) -> &Path {
        &self.df
    }
}
