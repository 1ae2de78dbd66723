//! gitdeck-repos - Repository overview for the gitdeck dashboard
//!
//! This crate provides the overview tab of the dashboard: a repository
//! selector, a welcome panel, and a status panel showing branch, pending
//! changes, and recent commits. All data comes from a hard-coded sample
//! [`Catalog`]; there is no version-control backend behind it.
//!
//! # Example
//!
//! ```
//! use gitdeck_repos::{Catalog, OverviewTab};
//!
//! let tab = OverviewTab::new(1, Catalog::sample());
//! ```

pub mod catalog;
pub mod error;
mod tab;
pub mod widgets;

pub use catalog::{
    format_relative, Catalog, ChangeKind, CommitRecord, PendingChange, RepoState,
    RepositorySummary,
};
pub use error::{CatalogError, CatalogResult};
pub use tab::OverviewTab;
