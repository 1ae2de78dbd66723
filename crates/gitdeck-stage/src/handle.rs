//! Opaque file handles at the intake boundary
//!
//! A [`FileHandle`] is what a drop or browse action hands the staging
//! core: a name and a size, plus the source path when one exists. The
//! core never reads file contents.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{StageError, StageResult};

/// A user-selected file entering the staging area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    /// Display name, normally the final path component
    pub name: String,
    /// Size in bytes as reported by the producer of the handle
    pub size_bytes: u64,
    /// Source path when the handle came from the local filesystem
    pub path: Option<PathBuf>,
}

impl FileHandle {
    /// Creates a handle from a bare name and size.
    ///
    /// Used by embedders that produce handles from something other than
    /// the local filesystem, and by tests.
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        FileHandle {
            name: name.into(),
            size_bytes,
            path: None,
        }
    }

    /// Builds a handle from a filesystem path, reading only metadata.
    ///
    /// # Errors
    ///
    /// Returns [`StageError::Io`] when metadata cannot be read,
    /// [`StageError::NotAFile`] for directories and other non-regular
    /// files, and [`StageError::NoFileName`] for paths like `/` or `..`
    /// that have no final component.
    pub fn from_path(path: &Path) -> StageResult<Self> {
        let meta = fs::metadata(path)?;
        if !meta.is_file() {
            return Err(StageError::NotAFile(path.to_path_buf()));
        }

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| StageError::NoFileName(path.to_path_buf()))?;

        Ok(FileHandle {
            name,
            size_bytes: meta.len(),
            path: Some(path.to_path_buf()),
        })
    }
}
