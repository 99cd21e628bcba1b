//! Directory listing snapshots

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::debug;

use crate::error::{Result, TreeError};

/// What an entry resolves to once symlinks are followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
}

/// One entry of a directory, captured at listing time.
///
/// Size and modification time are read together with the kind so that
/// formatting never has to go back to the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
    /// The entry itself is a symlink (its kind is the target's kind).
    pub is_symlink: bool,
    pub size: u64,
    pub modified: Option<SystemTime>,
}

impl DirectoryEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// Read the immediate entries of `dir` with a single `read_dir` pass.
///
/// Symlinks are classified by their target. Links that cannot be resolved
/// and entries that are neither files nor directories (sockets, FIFOs) are
/// skipped. Any other I/O failure is returned.
pub fn list_dir(dir: &Path) -> Result<Vec<DirectoryEntry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error(dir))? {
        let entry = entry.map_err(io_error(dir))?;
        let path = entry.path();
        let is_symlink = entry.file_type().map_err(io_error(&path))?.is_symlink();

        let metadata = match fs::metadata(&path) {
            Ok(m) => m,
            Err(e) if is_symlink => {
                debug!(path = %path.display(), error = %e, "skipping unresolvable symlink");
                continue;
            }
            Err(source) => return Err(TreeError::Io { path, source }),
        };

        let kind = if metadata.is_dir() {
            EntryKind::Dir
        } else if metadata.is_file() {
            EntryKind::File
        } else {
            debug!(path = %path.display(), "skipping special file");
            continue;
        };

        entries.push(DirectoryEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path,
            kind,
            is_symlink,
            size: metadata.len(),
            modified: metadata.modified().ok(),
        });
    }

    Ok(entries)
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> TreeError {
    let path = path.to_path_buf();
    move |source| TreeError::Io { path, source }
}

/// Split entries into `(files, dirs)`, each sorted case-insensitively.
///
/// The sort is stable, so names that differ only in case keep listing order.
pub fn partition_sorted(
    entries: Vec<DirectoryEntry>,
) -> (Vec<DirectoryEntry>, Vec<DirectoryEntry>) {
    let (mut dirs, mut files): (Vec<_>, Vec<_>) =
        entries.into_iter().partition(|e| e.is_dir());
    files.sort_by_cached_key(|e| e.name.to_lowercase());
    dirs.sort_by_cached_key(|e| e.name.to_lowercase());
    (files, dirs)
}
