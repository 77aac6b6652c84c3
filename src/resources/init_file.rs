//! DFHack init-file resource.
use anyhow::{Context as _, Result};
use std::path::PathBuf;

use super::helpers::fs::{ensure_parent_dir, read_optional, remove_existing};
use super::{Resource, ResourceChange, ResourceState};

/// An init file whose desired state is either exact contents or absence.
#[derive(Debug, Clone)]
pub struct InitFileResource {
    /// Location of the init file.
    pub path: PathBuf,
    /// Desired bytes, or `None` when the file should not exist.
    pub desired: Option<Vec<u8>>,
}

impl InitFileResource {
    #[must_use]
    pub const fn new(path: PathBuf, desired: Option<Vec<u8>>) -> Self {
        Self { path, desired }
    }
}

impl Resource for InitFileResource {
    fn description(&self) -> String {
        self.path.display().to_string()
    }

    fn apply(&self) -> Result<ResourceChange> {
        match &self.desired {
            Some(bytes) => {
                ensure_parent_dir(&self.path)?;
                std::fs::write(&self.path, bytes)
                    .with_context(|| format!("write {}", self.path.display()))?;
                Ok(ResourceChange::Applied)
            }
            None => {
                if remove_existing(&self.path)? {
                    Ok(ResourceChange::Applied)
                } else {
                    Ok(ResourceChange::AlreadyCorrect)
                }
            }
        }
    }

    fn current_state(&self) -> Result<ResourceState> {
        if self.path.is_dir() {
            return Ok(ResourceState::Invalid {
                reason: format!("{} is a directory", self.path.display()),
            });
        }

        let current = read_optional(&self.path)
            .with_context(|| format!("read {}", self.path.display()))?;

        Ok(match (current, &self.desired) {
            (None, None) => ResourceState::Correct,
            (None, Some(_)) => ResourceState::Missing,
            (Some(_), None) => ResourceState::Incorrect {
                current: "file present but no hacks enabled".to_string(),
            },
            (Some(bytes), Some(desired)) if &bytes == desired => ResourceState::Correct,
            (Some(bytes), Some(_)) => ResourceState::Incorrect {
                current: format!("{} bytes with different content", bytes.len()),
            },
        })
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    fn resource(dir: &tempfile::TempDir, desired: Option<&[u8]>) -> InitFileResource {
        InitFileResource::new(
            dir.path().join("init").join("onLoad_LNP.init"),
            desired.map(<[u8]>::to_vec),
        )
    }

    // ------------------------------------------------------------------
    // current_state
    // ------------------------------------------------------------------

    #[test]
    fn absent_file_with_no_content_is_correct() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            resource(&dir, None).current_state().unwrap(),
            ResourceState::Correct
        );
    }

    #[test]
    fn absent_file_with_content_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            resource(&dir, Some(b"x\n")).current_state().unwrap(),
            ResourceState::Missing
        );
    }

    #[test]
    fn matching_content_is_correct() {
        let dir = tempfile::tempdir().unwrap();
        let r = resource(&dir, Some(b"!reveal\n"));
        r.apply().unwrap();
        assert_eq!(r.current_state().unwrap(), ResourceState::Correct);
    }

    #[test]
    fn stale_content_is_incorrect() {
        let dir = tempfile::tempdir().unwrap();
        resource(&dir, Some(b"old\n")).apply().unwrap();
        let state = resource(&dir, Some(b"new\n")).current_state().unwrap();
        assert!(
            matches!(state, ResourceState::Incorrect { .. }),
            "expected Incorrect, got {state:?}"
        );
    }

    #[test]
    fn present_file_with_no_content_is_incorrect() {
        let dir = tempfile::tempdir().unwrap();
        resource(&dir, Some(b"old\n")).apply().unwrap();
        let state = resource(&dir, None).current_state().unwrap();
        assert!(
            matches!(state, ResourceState::Incorrect { .. }),
            "expected Incorrect, got {state:?}"
        );
    }

    #[test]
    fn directory_in_place_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let r = resource(&dir, Some(b"x"));
        std::fs::create_dir_all(&r.path).unwrap();
        assert!(matches!(
            r.current_state().unwrap(),
            ResourceState::Invalid { .. }
        ));
    }

    // ------------------------------------------------------------------
    // apply
    // ------------------------------------------------------------------

    #[test]
    fn apply_creates_parent_and_writes_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let r = resource(&dir, Some(b"caf\xE9\n"));
        assert_eq!(r.apply().unwrap(), ResourceChange::Applied);
        assert_eq!(std::fs::read(&r.path).unwrap(), b"caf\xE9\n");
    }

    #[test]
    fn apply_without_content_deletes_file() {
        let dir = tempfile::tempdir().unwrap();
        let written = resource(&dir, Some(b"x"));
        written.apply().unwrap();
        let r = resource(&dir, None);
        assert_eq!(r.apply().unwrap(), ResourceChange::Applied);
        assert!(!r.path.exists());
        assert_eq!(r.apply().unwrap(), ResourceChange::AlreadyCorrect);
    }

    #[test]
    fn description_is_path() {
        let dir = tempfile::tempdir().unwrap();
        let r = resource(&dir, None);
        assert!(r.description().ends_with("onLoad_LNP.init"));
    }
}
