//! Per-invocation context tying the registry, synchronizer and engine
//! switch to one launcher installation.
use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::{HACKS_FILE, TomlHackStore, TomlUserConfig, USER_FILE, UserConfig};
use crate::engine::{self, EngineSwitch};
use crate::error::{HackError, StoreError};
use crate::hacks::{DEFAULT_SUFFIX, Hack, HackRegistry, InitFileSynchronizer, TargetFile};
use crate::install::Installation;
use crate::launcher::{self, DocsTarget, Launcher, SystemLauncher};
use crate::logging::Log;
use crate::paths::{Component, Paths};
use crate::platform::Platform;
use crate::resources::ResourceChange;

/// Where the session looks for its files and how it writes them.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Launcher root holding `hacks.toml` and `user.toml`.
    pub root: PathBuf,
    /// Game directory; `<root>/df` when `None`.
    pub df: Option<PathBuf>,
    /// Report init-file and switch changes without making them.
    pub dry_run: bool,
    /// Suffix of generated init files.
    pub suffix: String,
}

impl SessionOptions {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            df: None,
            dry_run: false,
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

/// A hack together with what its init file currently says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HackStatus {
    /// The hack as stored.
    pub hack: Hack,
    /// Whether the hack's command is present in an init file.
    pub materialized: bool,
}

impl HackStatus {
    /// Whether the store and the init files agree.
    #[must_use]
    pub const fn in_sync(&self) -> bool {
        self.hack.enabled == self.materialized
    }
}

/// Shared state for one command invocation.
pub struct Session {
    pub paths: Paths,
    pub platform: Platform,
    pub installation: Installation,
    pub registry: HackRegistry,
    pub user: Box<dyn UserConfig>,
    pub sync: InitFileSynchronizer,
    pub launcher: Box<dyn Launcher>,
    pub log: Arc<dyn Log>,
    pub dry_run: bool,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("paths", &self.paths)
            .field("platform", &self.platform)
            .field("installation", &self.installation)
            .field("registry", &self.registry)
            .field("user", &self.user)
            .field("sync", &self.sync)
            .field("launcher", &"<dyn Launcher>")
            .field("log", &"<dyn Log>")
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

impl Session {
    /// Load the stores under `options.root` and detect the installation.
    ///
    /// # Errors
    ///
    /// Returns an error if `user.toml` exists but cannot be read or parsed.
    pub fn open(
        options: &SessionOptions,
        platform: Platform,
        log: Arc<dyn Log>,
    ) -> Result<Self, StoreError> {
        let paths = Paths::new(&options.root, options.df.as_deref());
        let user = TomlUserConfig::load(paths.get(Component::Root, &[USER_FILE]))?;
        let installation = Installation::resolve(&paths, &user);
        log.debug(&format!(
            "game directory {}, variations: {:?}",
            paths.df().display(),
            installation.variations()
        ));

        let store = TomlHackStore::new(paths.get(Component::Root, &[HACKS_FILE]));
        let registry = HackRegistry::new(Box::new(store), Arc::clone(&log));
        let sync = InitFileSynchronizer::new(
            &paths,
            &options.suffix,
            options.dry_run,
            Arc::clone(&log),
        );

        Ok(Self {
            launcher: Box::new(SystemLauncher::new(platform.clone())),
            paths,
            platform,
            installation,
            registry,
            user: Box::new(user),
            sync,
            log,
            dry_run: options.dry_run,
        })
    }

    /// Replace the launcher used by [`open_docs`](Self::open_docs).
    #[must_use]
    pub fn with_launcher(mut self, launcher: Box<dyn Launcher>) -> Self {
        self.launcher = launcher;
        self
    }

    /// Set `enabled` on the hack called `name` and rebuild its init file.
    ///
    /// Returns the resulting state, or `None` if the hack is unknown or has
    /// an invalid target file.  In dry-run mode nothing is persisted and the
    /// rebuild is only reported.
    ///
    /// # Errors
    ///
    /// Returns an error if the store or the init file cannot be updated.
    pub fn set_hack_enabled(&mut self, name: &str, enabled: bool) -> Result<Option<bool>> {
        if self.dry_run {
            let Some((hacks, transition)) = self.registry.preview(name, enabled)? else {
                return Ok(None);
            };
            if transition.changed {
                self.log.dry_run(&format!(
                    "would {} {name}",
                    if enabled { "enable" } else { "disable" }
                ));
            }
            self.sync.rebuild(transition.target, &hacks)?;
            return Ok(Some(transition.enabled));
        }

        let Some(transition) = self.registry.set_enabled(name, enabled)? else {
            return Ok(None);
        };
        let hacks = self.registry.list_hacks()?;
        self.sync.rebuild(transition.target, &hacks)?;
        Ok(Some(transition.enabled))
    }

    /// Flip the hack called `name` and rebuild its init file.
    ///
    /// # Errors
    ///
    /// Returns an error if the store or the init file cannot be updated.
    pub fn toggle_hack(&mut self, name: &str) -> Result<Option<bool>> {
        let current = self.registry.list_hacks()?.get(name).map(|h| h.enabled);
        match current {
            Some(enabled) => self.set_hack_enabled(name, !enabled),
            None => {
                self.log
                    .error(&HackError::NotFound(name.to_string()).to_string());
                Ok(None)
            }
        }
    }

    /// Regenerate every init file from the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or a file cannot be
    /// written.
    pub fn rebuild_all(&self) -> Result<Vec<(TargetFile, ResourceChange)>> {
        let hacks = self.registry.list_hacks()?;
        self.sync.rebuild_all(&hacks)
    }

    /// Every hack with its stored and on-disk state, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the store or an init file cannot be read.
    pub fn hack_statuses(&self) -> Result<Vec<HackStatus>> {
        let hacks = self.registry.list_hacks()?;
        let materialized = self.sync.read_enabled(&hacks)?;
        Ok(hacks
            .into_values()
            .map(|hack| HackStatus {
                materialized: materialized.contains(&hack.name),
                hack,
            })
            .collect())
    }

    /// The global engine switch for this platform.
    pub fn engine_switch(&mut self) -> Box<dyn EngineSwitch + '_> {
        engine::select(
            &self.platform,
            &self.paths,
            &self.installation,
            self.user.as_mut(),
            Arc::clone(&self.log),
        )
    }

    /// Open the DFHack documentation.
    pub fn open_docs(&self) -> DocsTarget {
        launcher::open_dfhack_readme(&self.paths, self.launcher.as_ref(), self.log.as_ref())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::launcher::MockLauncher;
    use crate::logging::RecordingLog;
    use crate::platform::Os;

    const HACKS: &str = r#"[reveal]
command = "!reveal"
tooltip = "Reveals the map"
file = "onLoad"

[autodump]
command = "autodump"
tooltip = "Dump items"
enabled = true

[fastdwarf]
command = "fastdwarf 1"
file = "onMapLoad"
"#;

    fn session(dry_run: bool) -> (Session, tempfile::TempDir, Arc<RecordingLog>) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(HACKS_FILE), HACKS).unwrap();
        let log = Arc::new(RecordingLog::default());
        let mut options = SessionOptions::new(dir.path());
        options.dry_run = dry_run;
        let session = Session::open(&options, Platform::new(Os::Linux), log.clone()).unwrap();
        (session, dir, log)
    }

    #[test]
    fn toggle_rebuilds_only_target_file() {
        let (mut s, _dir, _log) = session(false);
        s.rebuild_all().unwrap();
        let dfhack = std::fs::read(s.sync.path(TargetFile::Dfhack)).unwrap();

        assert_eq!(s.toggle_hack("reveal").unwrap(), Some(true));

        assert!(s.sync.path(TargetFile::OnLoad).exists());
        assert!(!s.sync.path(TargetFile::OnMapLoad).exists());
        assert_eq!(std::fs::read(s.sync.path(TargetFile::Dfhack)).unwrap(), dfhack);
        assert!(s.registry.get_hack("reveal").unwrap().unwrap().enabled);
    }

    #[test]
    fn toggle_unknown_hack_is_none() {
        let (mut s, _dir, log) = session(false);
        assert_eq!(s.toggle_hack("nope").unwrap(), None);
        assert_eq!(log.at("error"), ["No hack configured with name 'nope'"]);
    }

    #[test]
    fn statuses_report_drift() {
        let (s, _dir, _log) = session(false);
        let statuses = s.hack_statuses().unwrap();
        let autodump = statuses.iter().find(|st| st.hack.name == "autodump").unwrap();
        assert!(!autodump.in_sync());

        s.rebuild_all().unwrap();
        assert!(s.hack_statuses().unwrap().iter().all(HackStatus::in_sync));
    }

    #[test]
    fn dry_run_changes_nothing() {
        let (mut s, _dir, log) = session(true);
        assert_eq!(s.set_hack_enabled("reveal", true).unwrap(), Some(true));

        assert!(!s.registry.get_hack("reveal").unwrap().unwrap().enabled);
        assert!(!s.sync.path(TargetFile::OnLoad).exists());
        assert_eq!(log.at("dry_run").len(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn init_file_write_failure_reaches_caller() {
        use crate::resources::helpers::fs::read_only;

        let (mut s, _dir, _log) = session(false);
        std::fs::create_dir_all(s.sync.dir()).unwrap();
        if !read_only::lock(s.sync.dir()) {
            return;
        }

        let result = s.set_hack_enabled("reveal", true);
        read_only::unlock(s.sync.dir());

        let err = result.unwrap_err();
        assert!(format!("{err:#}").contains("onLoad_LNP.init"), "got {err:#}");
        assert!(!s.sync.path(TargetFile::OnLoad).exists());
    }

    #[test]
    fn config_flag_engine_persists_to_user_file() {
        let (mut s, dir, _log) = session(false);
        assert!(s.engine_switch().is_enabled().unwrap());
        assert!(!s.engine_switch().toggle().unwrap());

        let saved = std::fs::read_to_string(dir.path().join(USER_FILE)).unwrap();
        assert!(saved.contains("use_dfhack = false"), "got {saved}");
    }

    #[test]
    fn docs_open_through_launcher() {
        let (s, _dir, _log) = session(false);
        let mut launcher = MockLauncher::new();
        launcher.expect_open_url().times(1).returning(|_| Ok(()));
        let s = s.with_launcher(Box::new(launcher));
        assert_eq!(s.open_docs(), DocsTarget::Online);
    }
}
