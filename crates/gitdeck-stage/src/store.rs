//! Staged-file records and the store that owns them
//!
//! The store keeps an insertion-ordered list of everything the user has
//! dropped or picked, assigns each record its identity exactly once at
//! intake, and exposes read-only snapshots to the presentation layer.

use chrono::Utc;

use crate::handle::FileHandle;

/// Category tag derived from a file's extension.
///
/// A closed-set classification used to pick the icon/badge next to a
/// staged file. Unknown and missing extensions fall back to
/// [`FileCategory::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileCategory {
    /// Raster and vector images
    Image,
    /// Source and markup files
    Code,
    /// Plain text and documents
    Text,
    /// Everything else
    #[default]
    Other,
}

impl FileCategory {
    /// Classifies a file name by its lowercase extension.
    pub fn classify(name: &str) -> FileCategory {
        let extension = match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext.to_lowercase(),
            _ => return FileCategory::Other,
        };

        match extension.as_str() {
            "jpg" | "jpeg" | "png" | "gif" | "svg" | "webp" => FileCategory::Image,
            "js" | "jsx" | "ts" | "tsx" | "html" | "css" | "json" => FileCategory::Code,
            "txt" | "md" | "doc" | "docx" => FileCategory::Text,
            _ => FileCategory::Other,
        }
    }

    /// Short label used as the badge text.
    pub fn label(&self) -> &'static str {
        match self {
            FileCategory::Image => "img",
            FileCategory::Code => "code",
            FileCategory::Text => "text",
            FileCategory::Other => "file",
        }
    }
}

/// Formats a byte count with binary prefixes.
///
/// Uses 1024-based units up to GB, rounding to two decimals and trimming
/// trailing zeros, so `1536` renders as `1.5 KB` and `1024` as `1 KB`.
/// Zero renders as `0 Bytes`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    const K: f64 = 1024.0;

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exponent = ((bytes as f64).ln() / K.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / K.powi(exponent as i32);

    let mut rendered = format!("{:.2}", value);
    if rendered.contains('.') {
        rendered = rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string();
    }

    format!("{} {}", rendered, UNITS[exponent])
}

/// A file the user has staged but which has not been transmitted anywhere.
///
/// Immutable after creation; progress lives separately in the animator,
/// keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    /// Opaque identity, unique for the lifetime of the staging session
    pub id: String,
    /// Display name carried over from the handle
    pub name: String,
    /// Size in bytes carried over from the handle
    pub size_bytes: u64,
    /// Category derived from the name at intake
    pub category: FileCategory,
}

impl StagedFile {
    /// Human-readable size for display.
    pub fn display_size(&self) -> String {
        format_file_size(self.size_bytes)
    }
}

/// Insertion-ordered store of staged files.
///
/// Identity is assigned here, once, when a handle enters the store: the
/// id combines the file name, the arrival timestamp, and a session-wide
/// sequence number so concurrently staged files never collide even when
/// they share a name and arrive within the same millisecond.
#[derive(Debug, Default)]
pub struct StagingStore {
    files: Vec<StagedFile>,
    sequence: u64,
}

impl StagingStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        StagingStore::default()
    }

    /// Appends a batch of handles, preserving batch order.
    ///
    /// Existing entries are never replaced or reordered. Returns the
    /// newly created records so the caller can register progress
    /// tracking for exactly those.
    pub fn add_files(&mut self, batch: &[FileHandle]) -> Vec<StagedFile> {
        let arrived_at = Utc::now().timestamp_millis();
        let mut added = Vec::with_capacity(batch.len());

        for handle in batch {
            let staged = StagedFile {
                id: format!("{}-{}-{}", handle.name, arrived_at, self.sequence),
                name: handle.name.clone(),
                size_bytes: handle.size_bytes,
                category: FileCategory::classify(&handle.name),
            };
            self.sequence += 1;
            self.files.push(staged.clone());
            added.push(staged);
        }

        added
    }

    /// Removes the entry at `index` and returns it.
    ///
    /// Out-of-bounds indices are a silent no-op returning `None`,
    /// matching the behaviour of the uploader this store models.
    pub fn remove_file(&mut self, index: usize) -> Option<StagedFile> {
        if index < self.files.len() {
            Some(self.files.remove(index))
        } else {
            None
        }
    }

    /// Read-only snapshot of the staged list in insertion order.
    pub fn list_files(&self) -> &[StagedFile] {
        &self.files
    }

    /// Returns the entry at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&StagedFile> {
        self.files.get(index)
    }

    /// Number of staged files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// True when nothing is staged.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
