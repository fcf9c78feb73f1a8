//! Cache manager for persisting feed bodies and plots to disk
//!
//! Provides a `CacheManager` that stores raw bytes in a single data directory.
//! Every write goes to a temporary file next to the destination and is renamed
//! into place only once fully written, so a failed write never clobbers the
//! previous contents.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// Manages reading and writing files in the data directory
#[derive(Debug, Clone)]
pub struct CacheManager {
    /// Directory where cache and plot files are stored
    dir: PathBuf,
}

impl CacheManager {
    /// Creates a new CacheManager rooted at `dir`
    ///
    /// The directory is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the path of `file_name` inside the data directory
    pub fn path(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }

    /// Atomically replaces `file_name` with `bytes`
    ///
    /// # Returns
    /// * `Ok(PathBuf)` - The path that was written
    /// * `Err` if directory creation, writing, or the final rename fails
    pub fn write(&self, file_name: &str, bytes: &[u8]) -> io::Result<PathBuf> {
        let path = self.path(file_name);
        write_atomic(&path, bytes)?;
        Ok(path)
    }

    /// Reads `file_name` from the data directory
    ///
    /// Fails with `io::ErrorKind::NotFound` if nothing has been cached yet.
    pub fn read(&self, file_name: &str) -> io::Result<Vec<u8>> {
        fs::read(self.path(file_name))
    }
}

/// Writes `bytes` to `path` via a temporary file in the same directory
///
/// The parent directory is created if missing. On error the temporary file is
/// removed and `path` keeps whatever it held before. The result keeps the mode
/// of the file it replaces, or gets `0644` when new.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    if let Some(permissions) = target_permissions(path) {
        tmp.as_file().set_permissions(permissions)?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote file");
    Ok(())
}

/// Permissions for a file about to replace `path`
///
/// Temporary files are created owner-only, which is too strict for plots and
/// cached feeds.
fn target_permissions(path: &Path) -> Option<fs::Permissions> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => Some(meta.permissions()),
        _ => default_permissions(),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}
