//! Widgets for rendering the staging area

mod staging;

pub use staging::{StagingList, StagingListState, StagingRow};
