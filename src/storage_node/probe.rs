// File: src/storage_node/probe.rs
//! Filesystem measurements used by the pre-flight checks.

use std::fs;
use std::io;
use std::path::Path;

use async_trait::async_trait;
use tracing::debug;
use walkdir::WalkDir;

/// Source of filesystem facts about a storage path.
///
/// `LocalDisk` asks the operating system; tests substitute their own
/// implementation to control existence and the two measurements.
#[async_trait]
pub trait StorageProbe: Send + Sync {
    /// Whether the path can be stat'ed.
    fn exists(&self, path: &Path) -> bool;

    /// Bytes available on the volume that holds `path`.
    async fn free_space(&self, path: &Path) -> io::Result<u64>;

    /// Bytes occupied by the files under `path`.
    async fn directory_size(&self, path: &Path) -> io::Result<u64>;
}

/// Returns true when a stat of `path` succeeds, whether it names a file or a
/// directory. Every error, including permission errors, reads as false.
pub fn directory_exists(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).is_ok()
}

/// Bytes available to unprivileged users on the filesystem that holds `path`,
/// as reported by a statvfs of the path itself.
pub fn free_space(path: impl AsRef<Path>) -> io::Result<u64> {
    let path = path.as_ref();
    let available = fs2::available_space(path)?;
    debug!("{} bytes free on the volume holding {}", available, path.display());
    Ok(available)
}

/// Total length of the regular files under `path`, recursively.
///
/// Walks every entry, so cost grows with the number of files. A symlinked
/// root is resolved first; symlinks below it are neither followed nor
/// counted. A plain file yields its own length.
pub fn directory_size(path: impl AsRef<Path>) -> io::Result<u64> {
    let root = fs::canonicalize(path)?;
    let mut total: u64 = 0;

    for entry in WalkDir::new(&root).follow_links(false) {
        let entry = entry?;
        if entry.file_type().is_file() {
            total = total.saturating_add(entry.metadata()?.len());
        }
    }

    Ok(total)
}

/// Probe backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDisk;

#[async_trait]
impl StorageProbe for LocalDisk {
    fn exists(&self, path: &Path) -> bool {
        directory_exists(path)
    }

    async fn free_space(&self, path: &Path) -> io::Result<u64> {
        let path = path.to_path_buf();
        tokio::task::spawn_blocking(move || free_space(path))
            .await
            .map_err(io::Error::other)?
    }

    async fn directory_size(&self, path: &Path) -> io::Result<u64> {
        let path = path.to_path_buf();
        tokio::task::spawn_blocking(move || directory_size(path))
            .await
            .map_err(io::Error::other)?
    }
}
