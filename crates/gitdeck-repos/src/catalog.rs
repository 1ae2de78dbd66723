//! Mock repository catalog
//!
//! The dashboard displays repository, commit, and pending-change data
//! without talking to any version-control backend; this module holds the
//! hard-coded sample catalog the panels render from. The types mirror
//! what a real backend would provide so swapping one in later only
//! replaces the construction path.

use chrono::{DateTime, Duration, Utc};

use crate::error::{CatalogError, CatalogResult};

/// Kind of a pending working-tree change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// File is newly added
    Added,
    /// File has been modified
    Modified,
    /// File has been deleted
    Deleted,
}

impl ChangeKind {
    /// Get a single character indicator for the change
    pub fn indicator(&self) -> char {
        match self {
            ChangeKind::Added => 'A',
            ChangeKind::Modified => 'M',
            ChangeKind::Deleted => 'D',
        }
    }

    /// Badge label shown next to the file name
    pub fn label(&self) -> &'static str {
        match self {
            ChangeKind::Added => "added",
            ChangeKind::Modified => "modified",
            ChangeKind::Deleted => "deleted",
        }
    }
}

/// A file with uncommitted changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingChange {
    /// Path relative to the repository root
    pub file: String,
    /// What happened to it
    pub kind: ChangeKind,
}

/// Working-tree state of a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoState {
    /// No pending changes
    Clean,
    /// Uncommitted changes present
    Dirty,
}

impl RepoState {
    /// Short label for badges
    pub fn label(&self) -> &'static str {
        match self {
            RepoState::Clean => "clean",
            RepoState::Dirty => "dirty",
        }
    }
}

/// A repository the user can switch to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySummary {
    /// Display name
    pub name: String,
    /// Working-tree state
    pub state: RepoState,
    /// When the repository last changed
    pub last_update: DateTime<Utc>,
}

/// Information about a commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Commit id (short form)
    pub hash: String,
    /// Commit message (first line)
    pub message: String,
    /// Author name
    pub author: String,
    /// Commit timestamp
    pub time: DateTime<Utc>,
}

/// The data behind the overview tab and status panel.
#[derive(Debug, Clone)]
pub struct Catalog {
    repositories: Vec<RepositorySummary>,
    active: usize,
    branch: String,
    last_sync: DateTime<Utc>,
    commits: Vec<CommitRecord>,
    pending: Vec<PendingChange>,
}

impl Catalog {
    /// Builds the sample catalog the dashboard ships with.
    pub fn sample() -> Self {
        let now = Utc::now();
        Catalog {
            repositories: vec![
                RepositorySummary {
                    name: "website".to_string(),
                    state: RepoState::Dirty,
                    last_update: now - Duration::hours(2),
                },
                RepositorySummary {
                    name: "portfolio".to_string(),
                    state: RepoState::Clean,
                    last_update: now - Duration::days(1),
                },
                RepositorySummary {
                    name: "blog-drafts".to_string(),
                    state: RepoState::Clean,
                    last_update: now - Duration::days(3),
                },
            ],
            active: 0,
            branch: "main".to_string(),
            last_sync: now - Duration::hours(2),
            commits: vec![
                CommitRecord {
                    hash: "b7e91c4".to_string(),
                    message: "Refresh landing page copy".to_string(),
                    author: "Alex Reid".to_string(),
                    time: now - Duration::hours(2),
                },
                CommitRecord {
                    hash: "3fa2d81".to_string(),
                    message: "Fix navigation layout on small screens".to_string(),
                    author: "Alex Reid".to_string(),
                    time: now - Duration::days(1),
                },
                CommitRecord {
                    hash: "9c04e7a".to_string(),
                    message: "Add release notes post".to_string(),
                    author: "Sam Porter".to_string(),
                    time: now - Duration::days(3),
                },
            ],
            pending: vec![
                PendingChange {
                    file: "index.html".to_string(),
                    kind: ChangeKind::Modified,
                },
                PendingChange {
                    file: "styles.css".to_string(),
                    kind: ChangeKind::Modified,
                },
                PendingChange {
                    file: "release-notes.md".to_string(),
                    kind: ChangeKind::Added,
                },
            ],
        }
    }

    /// All repositories in display order.
    pub fn repositories(&self) -> &[RepositorySummary] {
        &self.repositories
    }

    /// Names of all repositories, for seeding the session state.
    pub fn repository_names(&self) -> Vec<String> {
        self.repositories.iter().map(|r| r.name.clone()).collect()
    }

    /// The active repository, if the catalog is non-empty.
    pub fn active(&self) -> Option<&RepositorySummary> {
        self.repositories.get(self.active)
    }

    /// Index of the active repository.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Makes the named repository active.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownRepository`] when no repository
    /// with that name exists.
    pub fn select(&mut self, name: &str) -> CatalogResult<()> {
        match self.repositories.iter().position(|r| r.name == name) {
            Some(index) => {
                self.active = index;
                Ok(())
            }
            None => Err(CatalogError::UnknownRepository(name.to_string())),
        }
    }

    /// Current branch of the active repository.
    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// When the active repository was last synchronised.
    pub fn last_sync(&self) -> DateTime<Utc> {
        self.last_sync
    }

    /// Recent commits, newest first.
    pub fn recent_commits(&self) -> &[CommitRecord] {
        &self.commits
    }

    /// Uncommitted changes in the active repository.
    pub fn pending_changes(&self) -> &[PendingChange] {
        &self.pending
    }

    /// One-line status for the panel badge.
    pub fn status_line(&self) -> &'static str {
        if self.pending.is_empty() {
            "Up to date"
        } else {
            "Changes pending"
        }
    }
}

/// Renders a timestamp relative to `now`, e.g. "2 hours ago".
pub fn format_relative(time: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(time);
    if elapsed < Duration::zero() {
        return "just now".to_string();
    }

    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{} minute{} ago", minutes, plural(minutes))
    } else if hours < 24 {
        format!("{} hour{} ago", hours, plural(hours))
    } else {
        format!("{} day{} ago", days, plural(days))
    }
}

fn plural(n: i64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_shape() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.repositories().len(), 3);
        assert_eq!(catalog.recent_commits().len(), 3);
        assert_eq!(catalog.pending_changes().len(), 3);
        assert_eq!(catalog.branch(), "main");
        assert_eq!(catalog.active().map(|r| r.name.as_str()), Some("website"));
    }

    #[test]
    fn test_select_known_repository() {
        let mut catalog = Catalog::sample();
        catalog.select("portfolio").expect("select portfolio");
        assert_eq!(catalog.active().map(|r| r.name.as_str()), Some("portfolio"));
    }

    #[test]
    fn test_select_unknown_repository() {
        let mut catalog = Catalog::sample();
        let result = catalog.select("missing");
        assert!(matches!(
            result,
            Err(CatalogError::UnknownRepository(name)) if name == "missing"
        ));
        // Active repository is unchanged on failure
        assert_eq!(catalog.active().map(|r| r.name.as_str()), Some("website"));
    }

    #[test]
    fn test_status_line_with_pending() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.status_line(), "Changes pending");
    }

    #[test]
    fn test_status_line_clean() {
        let mut catalog = Catalog::sample();
        catalog.pending.clear();
        assert_eq!(catalog.status_line(), "Up to date");
    }

    #[test]
    fn test_repository_names() {
        let catalog = Catalog::sample();
        assert_eq!(
            catalog.repository_names(),
            vec!["website", "portfolio", "blog-drafts"]
        );
    }

    #[test]
    fn test_change_kind_indicators() {
        assert_eq!(ChangeKind::Added.indicator(), 'A');
        assert_eq!(ChangeKind::Modified.indicator(), 'M');
        assert_eq!(ChangeKind::Deleted.indicator(), 'D');
        assert_eq!(ChangeKind::Added.label(), "added");
    }

    #[test]
    fn test_format_relative_just_now() {
        let now = Utc::now();
        assert_eq!(format_relative(now, now), "just now");
        assert_eq!(format_relative(now - Duration::seconds(30), now), "just now");
    }

    #[test]
    fn test_format_relative_minutes() {
        let now = Utc::now();
        assert_eq!(
            format_relative(now - Duration::minutes(1), now),
            "1 minute ago"
        );
        assert_eq!(
            format_relative(now - Duration::minutes(45), now),
            "45 minutes ago"
        );
    }

    #[test]
    fn test_format_relative_hours() {
        let now = Utc::now();
        assert_eq!(
            format_relative(now - Duration::hours(2), now),
            "2 hours ago"
        );
    }

    #[test]
    fn test_format_relative_days() {
        let now = Utc::now();
        assert_eq!(format_relative(now - Duration::days(3), now), "3 days ago");
        assert_eq!(format_relative(now - Duration::days(1), now), "1 day ago");
    }

    #[test]
    fn test_format_relative_future_timestamp() {
        let now = Utc::now();
        assert_eq!(format_relative(now + Duration::hours(1), now), "just now");
    }

    proptest::proptest! {
        #[test]
        fn prop_format_relative_always_readable(secs in 0i64..10_000_000) {
            let now = Utc::now();
            let rendered = format_relative(now - Duration::seconds(secs), now);
            proptest::prop_assert!(
                rendered == "just now" || rendered.ends_with("ago"),
                "unexpected rendering: {}",
                rendered
            );
        }
    }
}
