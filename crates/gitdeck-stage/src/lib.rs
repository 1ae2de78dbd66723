//! gitdeck-stage - File staging simulation for the gitdeck dashboard
//!
//! This crate provides the staging area of the dashboard: users drop or
//! pick files, each file gets a staged record and an animated progress
//! counter, and the raw batch is forwarded to whatever the embedding
//! page wants to do with it. Nothing is read, persisted, or transmitted.
//!
//! # Structure
//!
//! - [`StagingStore`] owns the ordered staged-file records
//! - [`ProgressAnimator`] walks one counter per file from 0 to 100 on a
//!   timer, with synchronous cancellation
//! - [`FileStagingSimulator`] orchestrates intake, animation, removal,
//!   and the drop target's drag-state machine
//! - [`StageTab`] renders it all as a dashboard tab
//!
//! # Example
//!
//! ```no_run
//! use gitdeck_stage::{FileStagingSimulator, StageTab};
//!
//! let simulator = FileStagingSimulator::new()
//!     .on_files_selected(Box::new(|batch| {
//!         tracing::info!(count = batch.len(), "files selected");
//!     }));
//! let tab = StageTab::new(2, simulator);
//! ```

pub mod error;
pub mod handle;
pub mod progress;
pub mod simulator;
pub mod store;
mod tab;
pub mod widgets;

pub use error::{StageError, StageResult};
pub use handle::FileHandle;
pub use progress::{AnimatorConfig, ProgressAnimator, COMPLETE};
pub use simulator::{DragState, FileStagingSimulator, IntakeCallback};
pub use store::{format_file_size, FileCategory, StagedFile, StagingStore};
pub use tab::StageTab;
