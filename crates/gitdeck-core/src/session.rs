//! Shared session state for the dashboard
//!
//! A single [`SessionState`] is owned at the top of the composition tree
//! (the binary) and handed to each tab as a [`SharedSession`]. Tabs read
//! and write it through accessors instead of reaching for ambient
//! globals, so the data every pane displays has exactly one source.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Handle to the session state shared across tabs and the shell.
pub type SharedSession = Arc<RwLock<SessionState>>;

/// The signed-in user shown in the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name
    pub name: String,
    /// Contact address shown in tooltips/logs
    pub email: String,
}

/// A long-running operation surfaced in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationStatus {
    /// Human-readable operation name, e.g. "Staging files"
    pub name: String,
    /// Completion percentage in `0..=100`
    pub percent: u8,
}

/// Mutable application state shared by every tab.
///
/// Covers the session-scoped fields the dashboard displays: who is signed
/// in, which repository is active, whether something is in flight, and
/// the last error worth surfacing.
#[derive(Debug, Default)]
pub struct SessionState {
    user: Option<UserProfile>,
    repositories: Vec<String>,
    active_repository: Option<String>,
    operation: Option<OperationStatus>,
    last_error: Option<String>,
}

impl SessionState {
    /// Creates an empty session.
    pub fn new() -> Self {
        SessionState::default()
    }

    /// Wraps a session in the shared handle tabs expect.
    pub fn shared(self) -> SharedSession {
        Arc::new(RwLock::new(self))
    }

    /// Returns the signed-in user, if any.
    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// Sets the signed-in user.
    pub fn set_user(&mut self, user: Option<UserProfile>) {
        self.user = user;
    }

    /// Returns the known repository names, in display order.
    pub fn repositories(&self) -> &[String] {
        &self.repositories
    }

    /// Replaces the known repository list.
    ///
    /// If the active repository is no longer present it is cleared.
    pub fn set_repositories(&mut self, names: Vec<String>) {
        if let Some(active) = &self.active_repository {
            if !names.iter().any(|n| n == active) {
                self.active_repository = None;
            }
        }
        self.repositories = names;
    }

    /// Returns the name of the active repository, if one is selected.
    pub fn active_repository(&self) -> Option<&str> {
        self.active_repository.as_deref()
    }

    /// Makes the named repository active.
    ///
    /// Unknown names are ignored so a stale selection message cannot
    /// point the header at a repository that does not exist.
    pub fn select_repository(&mut self, name: &str) {
        if self.repositories.iter().any(|n| n == name) {
            self.active_repository = Some(name.to_string());
        }
    }

    /// Returns the operation currently in flight, if any.
    pub fn operation(&self) -> Option<&OperationStatus> {
        self.operation.as_ref()
    }

    /// True while an operation is in flight.
    pub fn is_busy(&self) -> bool {
        self.operation.is_some()
    }

    /// Records the start of an operation at 0%.
    pub fn begin_operation(&mut self, name: impl Into<String>) {
        self.operation = Some(OperationStatus {
            name: name.into(),
            percent: 0,
        });
    }

    /// Updates the percentage of the operation in flight; no-op when idle.
    pub fn update_operation(&mut self, percent: u8) {
        if let Some(op) = &mut self.operation {
            op.percent = percent.min(100);
        }
    }

    /// Clears the operation in flight.
    pub fn finish_operation(&mut self) {
        self.operation = None;
    }

    /// Returns the last recorded error, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Records an error for the status bar to surface.
    pub fn record_error(&mut self, err: impl std::fmt::Display) {
        self.last_error = Some(err.to_string());
    }

    /// Clears the recorded error.
    pub fn clear_error(&mut self) {
        self.last_error = None;
    }
}
