// Shared helpers for integration tests.
//
// Provides a temporary launcher installation and a fluent builder so each
// integration test can set up hacks and game files without repeating
// filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use lnp_hacks::config::{Definitions, HACKS_FILE, HackDefinition, HackStore, TomlHackStore};
use lnp_hacks::hacks::TargetFile;
use lnp_hacks::logging::Logger;
use lnp_hacks::platform::{Os, Platform};
use lnp_hacks::session::{Session, SessionOptions};

/// An isolated launcher root backed by a [`tempfile::TempDir`].
///
/// The game directory is `<root>/df`.
pub struct IntegrationTestContext {
    /// Temporary directory acting as the launcher root.
    pub root: tempfile::TempDir,
}

impl IntegrationTestContext {
    /// Path to the launcher root.
    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// Path to the game directory.
    pub fn df_path(&self) -> PathBuf {
        self.root.path().join("df")
    }

    /// Path of `file` with the default suffix.
    pub fn init_file(&self, file: TargetFile) -> PathBuf {
        self.df_path()
            .join("dfhack-config")
            .join("init")
            .join(file.file_name("LNP"))
    }

    /// Raw bytes of `file`, or `None` if it does not exist.
    pub fn read_init(&self, file: TargetFile) -> Option<Vec<u8>> {
        std::fs::read(self.init_file(file)).ok()
    }

    /// Open a session for `os`.
    pub fn session(&self, os: Os, dry_run: bool) -> (Session, Arc<Logger>) {
        let log = Arc::new(Logger::new("test"));
        let mut options = SessionOptions::new(self.root.path());
        options.dry_run = dry_run;
        let session =
            Session::open(&options, Platform::new(os), log.clone()).expect("open session");
        (session, log)
    }

    /// Stored definitions, read straight from `hacks.toml`.
    pub fn definitions(&self) -> Definitions {
        TomlHackStore::new(self.root.path().join(HACKS_FILE))
            .hack_definitions()
            .expect("read hacks.toml")
    }
}

/// Fluent builder for [`IntegrationTestContext`].
pub struct TestContextBuilder {
    ctx: IntegrationTestContext,
    definitions: Definitions,
}

impl TestContextBuilder {
    /// Begin building a context with an empty game directory.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        std::fs::create_dir_all(root.path().join("df")).expect("create df dir");
        Self {
            ctx: IntegrationTestContext { root },
            definitions: Definitions::new(),
        }
    }

    /// Add a hack definition.
    pub fn with_hack(
        mut self,
        name: &str,
        command: &str,
        tooltip: &str,
        file: Option<&str>,
        enabled: bool,
    ) -> Self {
        self.definitions.insert(
            name.to_string(),
            HackDefinition {
                command: command.to_string(),
                tooltip: tooltip.to_string(),
                file: file.map(String::from),
                enabled,
            },
        );
        self
    }

    /// Write a file into the game directory.
    pub fn with_df_file(self, name: &str, content: &[u8]) -> Self {
        let path = self.ctx.df_path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create df file parent");
        }
        std::fs::write(&path, content).expect("write df file");
        self
    }

    /// Write `content` to `<root>/<filename>`.
    pub fn with_root_file(self, filename: &str, content: &str) -> Self {
        std::fs::write(self.ctx.root.path().join(filename), content).expect("write root file");
        self
    }

    /// Persist the hacks and return the configured context.
    pub fn build(self) -> IntegrationTestContext {
        TomlHackStore::new(self.ctx.root.path().join(HACKS_FILE))
            .persist(&self.definitions)
            .expect("write hacks.toml");
        self.ctx
    }
}

/// A launcher with a small, representative set of hacks.
pub fn sample_context() -> IntegrationTestContext {
    TestContextBuilder::new()
        .with_hack("reveal", "!reveal", "Reveals the map", Some("onLoad"), false)
        .with_hack("autodump", "autodump", "Dump items\nto the cursor", None, true)
        .with_hack("fastdwarf", "fastdwarf 1", "Speed up dwarves", Some("onMapLoad"), false)
        .with_hack("prospect", "prospect all", "Show minerals", None, true)
        .build()
}
