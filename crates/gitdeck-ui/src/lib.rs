//! gitdeck-ui - Application shell for the gitdeck dashboard
//!
//! This crate hosts the pieces that frame every tab: the [`App`]
//! coordinator, the [`TabManager`], the frame layout, and the tab-bar
//! and status-bar widgets.
//!
//! # Example
//!
//! ```ignore
//! use gitdeck_core::SessionState;
//! use gitdeck_ui::App;
//!
//! let session = SessionState::new().shared();
//! let mut app = App::new(session);
//! app.add_tab(Box::new(my_tab));
//! ```

pub mod app;
pub mod renderer;
pub mod tab_manager;
pub mod widgets;

pub use app::App;
pub use renderer::FrameLayout;
pub use tab_manager::TabManager;
