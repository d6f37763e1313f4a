//! Writing theme files.
//!
//! Each file is written to a temporary file in the destination directory and
//! then renamed over the target, so a reader never observes a half-written
//! theme. The published file keeps the target's existing permissions, or
//! gets `0644` on Unix when it is new. Writes are independent of each other: with `parallel` set they run
//! on scoped threads, and every write is attempted even if another fails.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::thread;

use tempfile::NamedTempFile;

use crate::error::{Result, ThemeError};

/// Creates `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|source| ThemeError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Atomically replaces `path` with `contents`.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let write_err = |source| ThemeError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    #[cfg(unix)]
    tmp.as_file()
        .set_permissions(published_permissions(path))
        .map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

/// The target's current permissions, or [`PUBLISHED_MODE`] for a new file.
#[cfg(unix)]
fn published_permissions(path: &Path) -> std::fs::Permissions {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|meta| meta.permissions())
        .unwrap_or_else(|_| std::fs::Permissions::from_mode(PUBLISHED_MODE))
}

/// Mode given to newly created theme files.
#[cfg(unix)]
pub const PUBLISHED_MODE: u32 = 0o644;

/// Writes every `(path, contents)` pair, waiting for all of them.
///
/// Returns the written paths, or [`ThemeError::Incomplete`] listing every
/// write that failed.
pub fn write_all(files: &[(PathBuf, String)], parallel: bool) -> Result<Vec<PathBuf>> {
    let results: Vec<Result<()>> = if parallel {
        thread::scope(|scope| {
            let handles: Vec<_> = files
                .iter()
                .map(|(path, contents)| scope.spawn(move || write_atomic(path, contents)))
                .collect();
            handles
                .into_iter()
                .zip(files)
                .map(|(handle, (path, _))| {
                    handle.join().unwrap_or_else(|_| {
                        Err(ThemeError::Write {
                            path: path.clone(),
                            source: std::io::Error::other("writer thread panicked"),
                        })
                    })
                })
                .collect()
        })
    } else {
        files
            .iter()
            .map(|(path, contents)| write_atomic(path, contents))
            .collect()
    };

    let mut written = Vec::with_capacity(files.len());
    let mut failures = Vec::new();
    for ((path, _), result) in files.iter().zip(results) {
        match result {
            Ok(()) => {
                tracing::info!(path = %path.display(), "wrote theme");
                written.push(path.clone());
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to write theme");
                failures.push(err);
            }
        }
    }

    if failures.is_empty() {
        Ok(written)
    } else {
        Err(ThemeError::Incomplete {
            failures,
            total: files.len(),
        })
    }
}
