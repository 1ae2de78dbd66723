//! # gitdeck-core
//!
//! Core traits and types for the gitdeck terminal dashboard.
//!
//! This crate provides the foundational abstractions shared by every
//! gitdeck component: the tab interface, the event/message plumbing, the
//! theme system, and the session state that holds what the dashboard is
//! currently looking at.
//!
//! ## Overview
//!
//! The dashboard is a tab-based interface. Each feature (repository
//! overview, file staging) ships as a crate exposing a [`Tab`]
//! implementation; the shell hosts them, routes [`Message`]s, and renders
//! the active one. Shared display state (active repository, signed-in
//! user, in-flight operation) lives in a single [`SessionState`] owned at
//! the top of the composition tree and passed down as a
//! [`SharedSession`].
//!
//! ## Core Abstractions
//!
//! - [`Tab`] - Trait for tab implementations
//! - [`AppCoordinator`] - Trait for the main application loop
//! - [`Message`] - Event/message types for framework communication
//! - [`MessageBus`] - Publish-subscribe message distribution
//! - [`SessionState`] - Shared application state with accessors
//! - [`Theme`] - Theming system with colors and border styles
//! - [`CoreError`] - Error types for framework operations

pub mod app;
pub mod error;
pub mod event;
pub mod session;
pub mod tab;
pub mod theme;

pub use app::AppCoordinator;
pub use error::{CoreError, CoreResult};
pub use event::{InputEvent, Message, MessageBus};
pub use session::{OperationStatus, SessionState, SharedSession, UserProfile};
pub use tab::{Tab, TabId};
pub use theme::{BorderStyle, Theme, ThemeColors};
