//! Hand files and URLs to the desktop environment.
use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::exec::Invocation;
use crate::logging::Log;
use crate::paths::{Component, Paths};
use crate::platform::Platform;

/// Online DFHack documentation, used when no local copy is installed.
pub const DFHACK_DOCS_URL: &str = "https://dfhack.readthedocs.org";

/// Opens documents with the user's default application.
#[cfg_attr(test, mockall::automock)]
pub trait Launcher {
    /// Open a local file.
    ///
    /// # Errors
    ///
    /// Returns an error if the opener cannot be started or fails.
    fn open_file(&self, path: &Path) -> Result<()>;

    /// Open a URL in the default browser.
    ///
    /// # Errors
    ///
    /// Returns an error if the opener cannot be started or fails.
    fn open_url(&self, url: &str) -> Result<()>;
}

/// [`Launcher`] that shells out to the platform opener.
#[derive(Debug, Clone)]
pub struct SystemLauncher {
    platform: Platform,
}

impl SystemLauncher {
    #[must_use]
    pub const fn new(platform: Platform) -> Self {
        Self { platform }
    }

    fn open(&self, target: &str) -> Result<()> {
        let (program, prefix) = self.platform.opener();
        Invocation::new(program, prefix, target).run()
    }
}

impl Launcher for SystemLauncher {
    fn open_file(&self, path: &Path) -> Result<()> {
        self.open(&path.to_string_lossy())
    }

    fn open_url(&self, url: &str) -> Result<()> {
        self.open(url)
    }
}

/// What [`open_dfhack_readme`] tried to open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocsTarget {
    /// The bundled `hack/docs/index.html`.
    Local(PathBuf),
    /// [`DFHACK_DOCS_URL`].
    Online,
}

/// Open the DFHack documentation, preferring the copy shipped with the game.
///
/// Failure to launch is logged as a warning and otherwise ignored.
pub fn open_dfhack_readme(paths: &Paths, launcher: &dyn Launcher, log: &dyn Log) -> DocsTarget {
    let index = paths.get(Component::Docs, &["index.html"]);
    let (target, result) = if index.is_file() {
        let result = launcher.open_file(&index);
        (DocsTarget::Local(index), result)
    } else {
        (DocsTarget::Online, launcher.open_url(DFHACK_DOCS_URL))
    };

    match &result {
        Ok(()) => log.debug(&format!("opened {target:?}")),
        Err(e) => log.warn(&format!("could not open DFHack documentation: {e:#}")),
    }
    target
}
