//! Regenerate DFHack init files from the hack registry.
//!
//! Each [`TargetFile`] is rendered from the enabled hacks that name it and
//! reconciled through an [`InitFileResource`], so a file is only written
//! when its bytes would change and is deleted once nothing targets it.
use anyhow::{Context as _, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::hack::TargetFile;
use super::registry::Hacks;
use crate::encoding;
use crate::error::EncodingError;
use crate::logging::{Log, Outcome};
use crate::paths::{Component, Paths};
use crate::resources::helpers::fs::read_optional;
use crate::resources::init_file::InitFileResource;
use crate::resources::{Resource as _, ResourceChange, ResourceState};

/// Suffix used in init file names and the generated header.
pub const DEFAULT_SUFFIX: &str = "LNP";

/// Writes and reads the init files under `<df>/dfhack-config/init`.
pub struct InitFileSynchronizer {
    dir: PathBuf,
    suffix: String,
    dry_run: bool,
    log: Arc<dyn Log>,
}

impl std::fmt::Debug for InitFileSynchronizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InitFileSynchronizer")
            .field("dir", &self.dir)
            .field("suffix", &self.suffix)
            .field("dry_run", &self.dry_run)
            .finish_non_exhaustive()
    }
}

impl InitFileSynchronizer {
    #[must_use]
    pub fn new(paths: &Paths, suffix: &str, dry_run: bool, log: Arc<dyn Log>) -> Self {
        Self {
            dir: paths.get(Component::DfhackConfig, &[]),
            suffix: suffix.to_string(),
            dry_run,
            log,
        }
    }

    /// Directory holding the init files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of `file`.
    #[must_use]
    pub fn path(&self, file: TargetFile) -> PathBuf {
        self.dir.join(file.file_name(&self.suffix))
    }

    /// Render the contents of `file` for the enabled hacks that target it.
    ///
    /// Returns `None` when no enabled hack targets the file.  Hacks with an
    /// invalid target are never rendered.
    #[must_use]
    pub fn render(&self, file: TargetFile, hacks: &Hacks) -> Option<String> {
        let mut selected = hacks
            .values()
            .filter(|h| h.enabled && h.target_file().ok() == Some(file))
            .peekable();
        selected.peek()?;

        let mut out = format!("# Generated by {}\n\n", self.suffix);
        for hack in selected {
            out.push_str(&format!(
                "# {}\n# {}\n{}\n\n",
                hack.name,
                hack.tooltip.replace('\n', "\n#"),
                hack.command
            ));
        }
        Some(out)
    }

    /// Desired state of `file` as a resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the rendered text is not representable in latin-1.
    pub fn resource(&self, file: TargetFile, hacks: &Hacks) -> Result<InitFileResource, EncodingError> {
        let desired = self
            .render(file, hacks)
            .map(|text| encoding::encode(&text))
            .transpose()?;
        Ok(InitFileResource::new(self.path(file), desired))
    }

    /// Bring `file` in line with the enabled hacks that target it.
    ///
    /// The file is left untouched when it already holds the rendered bytes.
    /// In dry-run mode the pending change is only reported.
    ///
    /// # Errors
    ///
    /// Returns an error if the content cannot be encoded, or the file cannot
    /// be read, written or removed.
    pub fn rebuild(&self, file: TargetFile, hacks: &Hacks) -> Result<ResourceChange> {
        let name = file.file_name(&self.suffix);
        let resource = self
            .resource(file, hacks)
            .with_context(|| format!("render {name}"))?;
        let count = hacks
            .values()
            .filter(|h| h.enabled && h.target_file().ok() == Some(file))
            .count();
        let detail = format!("{count} hack{}", if count == 1 { "" } else { "s" });

        match resource.current_state()? {
            ResourceState::Correct => {
                self.log.debug(&format!("{name} already up to date"));
                self.log.record(&name, Outcome::Unchanged, Some(&detail));
                return Ok(ResourceChange::AlreadyCorrect);
            }
            ResourceState::Invalid { reason } => {
                self.log.warn(&format!("skipping {name}: {reason}"));
                self.log.record(&name, Outcome::Failed, Some(&reason));
                return Ok(ResourceChange::Skipped { reason });
            }
            ResourceState::Missing | ResourceState::Incorrect { .. } => {}
        }

        let removing = resource.desired.is_none();
        if self.dry_run {
            let verb = if removing { "remove" } else { "write" };
            self.log
                .dry_run(&format!("would {verb} {}", resource.description()));
            self.log.record(&name, Outcome::DryRun, Some(&detail));
            return Ok(ResourceChange::Skipped {
                reason: "dry run".to_string(),
            });
        }

        self.log.info(&format!(
            "Rebuilding {} with the enabled hacks",
            resource.description()
        ));
        match resource.apply() {
            Ok(change) => {
                let status = if removing {
                    Outcome::Removed
                } else {
                    Outcome::Written
                };
                self.log.record(&name, status, Some(&detail));
                Ok(change)
            }
            Err(e) => {
                self.log.record(&name, Outcome::Failed, Some(&format!("{e:#}")));
                Err(e)
            }
        }
    }

    /// Rebuild every init file.
    ///
    /// Enabled hacks with an invalid target file are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`rebuild`](Self::rebuild).
    pub fn rebuild_all(&self, hacks: &Hacks) -> Result<Vec<(TargetFile, ResourceChange)>> {
        for hack in hacks.values().filter(|h| h.enabled) {
            if let Err(e) = hack.target_file() {
                self.log.warn(&format!("{e}; skipping"));
            }
        }

        TargetFile::ALL
            .into_iter()
            .map(|file| Ok((file, self.rebuild(file, hacks)?)))
            .collect()
    }

    /// Trimmed lines of `file`; an absent file has none.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn read_lines(&self, file: TargetFile) -> Result<Vec<String>> {
        let path = self.path(file);
        let Some(bytes) =
            read_optional(&path).with_context(|| format!("read {}", path.display()))?
        else {
            self.log
                .debug(&format!("{} not found", file.file_name(&self.suffix)));
            return Ok(Vec::new());
        };
        Ok(encoding::decode(&bytes)
            .lines()
            .map(|line| line.trim().to_string())
            .collect())
    }

    /// Names of hacks whose command currently appears in any init file.
    ///
    /// # Errors
    ///
    /// Returns an error if an init file exists but cannot be read.
    pub fn read_enabled(&self, hacks: &Hacks) -> Result<BTreeSet<String>> {
        let mut lines = BTreeSet::new();
        for file in TargetFile::ALL {
            lines.extend(self.read_lines(file)?);
        }
        Ok(hacks
            .values()
            .filter(|h| lines.contains(h.command.trim()))
            .map(|h| h.name.clone())
            .collect())
    }
}
