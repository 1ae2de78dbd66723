//! Error types for the gitdeck-stage crate

use std::path::PathBuf;
use thiserror::Error;

/// Staging-specific errors
///
/// The staging core itself performs no I/O; the only fallible surface is
/// building a [`crate::FileHandle`] from a filesystem path at the intake
/// boundary.
#[derive(Error, Debug)]
pub enum StageError {
    /// Filesystem metadata could not be read
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Path exists but does not point at a regular file
    #[error("not a regular file: {0}")]
    NotAFile(PathBuf),

    /// Path has no usable file name component
    #[error("path has no file name: {0}")]
    NoFileName(PathBuf),
}

/// Result type alias for staging operations
pub type StageResult<T> = Result<T, StageError>;
