//! Widgets for rendering repository information

mod status;

pub use status::StatusPanel;
