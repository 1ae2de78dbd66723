//! Intake orchestration for the staging area
//!
//! [`FileStagingSimulator`] ties the pieces together: it accepts batches
//! of [`FileHandle`]s from a drop target or browse dialog, records them
//! in the [`StagingStore`], kicks off one [`ProgressAnimator`] run per
//! new file, and forwards the raw batch to the callback supplied by the
//! embedding page. It also owns the small drag-state machine the drop
//! target renders from.

use tracing::debug;

use crate::handle::FileHandle;
use crate::progress::{AnimatorConfig, ProgressAnimator, COMPLETE};
use crate::store::{StagedFile, StagingStore};

/// Callback receiving the raw, unmodified intake batch.
///
/// Invoked exactly once per intake event. The embedding page decides
/// what to do with the handles; the staging core neither persists nor
/// transmits them.
pub type IntakeCallback = Box<dyn Fn(&[FileHandle]) + Send + Sync>;

/// Visual state of the drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// Nothing hovering, ready for intake
    #[default]
    Idle,
    /// A drag is hovering over the drop target
    Hovering,
    /// Intake is suppressed by the embedder
    Disabled,
}

/// Orchestrates file intake, progress animation, and removal.
///
/// All operations run synchronously with respect to the caller; the
/// animator's timers are the only asynchronous activity.
pub struct FileStagingSimulator {
    store: StagingStore,
    animator: ProgressAnimator,
    on_files_selected: Option<IntakeCallback>,
    hovering: bool,
    disabled: bool,
}

impl std::fmt::Debug for FileStagingSimulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileStagingSimulator")
            .field("staged", &self.store.len())
            .field("drag_state", &self.drag_state())
            .finish()
    }
}

impl FileStagingSimulator {
    /// Creates a simulator with default timer tuning, enabled, with no
    /// callback.
    pub fn new() -> Self {
        FileStagingSimulator::with_config(AnimatorConfig::default())
    }

    /// Creates a simulator with custom animator tuning.
    pub fn with_config(config: AnimatorConfig) -> Self {
        FileStagingSimulator {
            store: StagingStore::new(),
            animator: ProgressAnimator::with_config(config),
            on_files_selected: None,
            hovering: false,
            disabled: false,
        }
    }

    /// Sets the callback invoked with each raw intake batch.
    pub fn on_files_selected(mut self, callback: IntakeCallback) -> Self {
        self.on_files_selected = Some(callback);
        self
    }

    /// Sets the initial disabled flag.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Current state of the drop target.
    pub fn drag_state(&self) -> DragState {
        if self.disabled {
            DragState::Disabled
        } else if self.hovering {
            DragState::Hovering
        } else {
            DragState::Idle
        }
    }

    /// Flips the external disabled flag.
    ///
    /// Disabling drops any hover in progress so clearing the flag
    /// returns the target to `Idle`.
    pub fn set_disabled(&mut self, disabled: bool) {
        if disabled {
            self.hovering = false;
        }
        self.disabled = disabled;
    }

    /// True while intake is suppressed.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Drag entered (or moved over) the drop target.
    pub fn drag_enter(&mut self) {
        if !self.disabled {
            self.hovering = true;
        }
    }

    /// Drag left the drop target without dropping.
    pub fn drag_leave(&mut self) {
        if !self.disabled {
            self.hovering = false;
        }
    }

    /// Drop completed over the target with the given batch.
    ///
    /// Clears the hover state and runs the intake path.
    pub fn drop_files(&mut self, batch: Vec<FileHandle>) {
        if self.disabled {
            return;
        }
        self.hovering = false;
        self.on_files_entered(batch);
    }

    /// Intake entry point for both drop and browse selection.
    ///
    /// Appends the batch to the store, starts a progress run for each
    /// newly added file, then hands the raw batch to the embedder's
    /// callback. Empty batches are ignored.
    pub fn on_files_entered(&mut self, batch: Vec<FileHandle>) {
        if self.disabled || batch.is_empty() {
            return;
        }

        let added = self.store.add_files(&batch);
        debug!(count = added.len(), "files entered staging");
        for staged in &added {
            self.animator.start(&staged.id);
        }

        if let Some(callback) = &self.on_files_selected {
            callback(&batch);
        }
    }

    /// Removes the staged file at `index`.
    ///
    /// Cancels its timer first so no tick can land on a removed record;
    /// out-of-bounds indices are a silent no-op.
    pub fn on_remove_requested(&mut self, index: usize) {
        if let Some(staged) = self.store.get(index) {
            let id = staged.id.clone();
            self.animator.cancel(&id);
        }
        self.store.remove_file(index);
    }

    /// Insertion-ordered snapshot of the staged files.
    pub fn files(&self) -> &[StagedFile] {
        self.store.list_files()
    }

    /// Progress value for a staged file id; 0 when unknown.
    pub fn progress_of(&self, file_id: &str) -> u8 {
        self.animator.progress_of(file_id)
    }

    /// True once the file at `index` has finished animating.
    pub fn is_ready(&self, index: usize) -> bool {
        self.store
            .get(index)
            .map(|f| self.animator.progress_of(&f.id) >= COMPLETE)
            .unwrap_or(false)
    }

    /// Number of staged files.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// True when nothing is staged.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// The animator, for diagnostics and tests.
    pub fn animator(&self) -> &ProgressAnimator {
        &self.animator
    }
}

impl Default for FileStagingSimulator {
    fn default() -> Self {
        FileStagingSimulator::new()
    }
}
