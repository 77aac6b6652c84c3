//! File-system resource helpers.
use anyhow::{Context as _, Result};
use std::io::ErrorKind;
use std::path::Path;

/// Ensure the parent directory of `path` exists, creating it (and any
/// ancestors) if necessary.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create parent: {}", parent.display()))?;
    }
    Ok(())
}

/// Remove the file at `path`.  Does nothing if `path` does not exist.
///
/// Returns whether a file was removed.
///
/// # Errors
///
/// Returns an error if the path exists but cannot be removed.
pub fn remove_existing(path: &Path) -> Result<bool> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).with_context(|| format!("remove existing: {}", path.display())),
    }
}

/// Read the file at `path`, mapping "not found" to `None`.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn read_optional(path: &Path) -> std::io::Result<Option<Vec<u8>>> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Compare two files byte for byte.
///
/// Sizes are compared first so differing files of different length are
/// rejected without reading their contents.
///
/// # Errors
///
/// Returns the path that could not be inspected together with the I/O error.
pub fn files_identical(a: &Path, b: &Path) -> Result<bool, (std::path::PathBuf, std::io::Error)> {
    let meta = |p: &Path| std::fs::metadata(p).map_err(|e| (p.to_path_buf(), e));
    if meta(a)?.len() != meta(b)?.len() {
        return Ok(false);
    }
    let read = |p: &Path| std::fs::read(p).map_err(|e| (p.to_path_buf(), e));
    Ok(read(a)? == read(b)?)
}

/// Toggle write permission on directories in tests.
#[cfg(all(test, unix))]
pub(crate) mod read_only {
    use std::os::unix::fs::PermissionsExt as _;
    use std::path::Path;

    /// Make `dir` read-only. Returns `false` when writes still succeed,
    /// as they do for root, so the caller can skip its assertions.
    pub(crate) fn lock(dir: &Path) -> bool {
        if std::fs::set_permissions(dir, std::fs::Permissions::from_mode(0o555)).is_err() {
            return false;
        }
        let check = dir.join(".write-check");
        if std::fs::write(&check, b"").is_ok() {
            std::fs::remove_file(&check).ok();
            unlock(dir);
            return false;
        }
        true
    }

    pub(crate) fn unlock(dir: &Path) {
        std::fs::set_permissions(dir, std::fs::Permissions::from_mode(0o755)).ok();
    }
}
