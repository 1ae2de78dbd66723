//! Core error types for gitdeck-core
//!
//! This module provides error types used throughout the gitdeck dashboard
//! framework.

use thiserror::Error;

/// Core errors that can occur in the gitdeck dashboard framework.
///
/// These errors represent failures in framework operations such as tab
/// management and event distribution.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Tab with the specified ID was not found.
    ///
    /// This occurs when attempting to access, focus, or close a tab
    /// that does not exist in the tab manager.
    #[error("tab not found: {0}")]
    TabNotFound(u32),

    /// Attempted to close a tab that is pinned open.
    ///
    /// Core dashboard tabs report `can_close() == false` and refuse
    /// user-initiated closing when they are the last tab standing.
    #[error("tab cannot be closed: {0}")]
    TabPinned(u32),

    /// Event system error.
    ///
    /// This occurs when the message bus encounters an error, such as a
    /// send with no live subscribers.
    #[error("event error: {0}")]
    EventError(String),

    /// Theme definition could not be parsed.
    #[error("invalid theme: {0}")]
    Theme(#[from] toml::de::Error),
}

/// Result type alias using [`CoreError`].
pub type CoreResult<T> = Result<T, CoreError>;
