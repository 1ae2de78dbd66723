//! Tab trait and related types for the dashboard framework.
//!
//! This module defines the [`Tab`] trait which all tab implementations
//! must satisfy to be hosted by the gitdeck shell.

use crate::event::Message;
use ratatui::prelude::*;

/// Unique identifier for a tab.
///
/// Each tab in the dashboard has a unique numeric identifier used for
/// lookup and switching.
pub type TabId = u32;

/// Trait that all tabs must implement.
///
/// Tabs are the primary content containers of the dashboard. The shell
/// renders the active tab into the content area and routes input to it.
///
/// # Thread Safety
///
/// Tabs are driven from the main TUI thread; there is no strict
/// `Send + Sync` requirement on implementations.
///
/// # Example
///
/// ```ignore
/// use gitdeck_core::{Tab, TabId};
/// use ratatui::prelude::*;
///
/// struct MyTab {
///     id: TabId,
///     title: String,
///     focused: bool,
/// }
///
/// impl Tab for MyTab {
///     fn id(&self) -> TabId { self.id }
///     fn title(&self) -> &str { &self.title }
///     fn focus(&mut self) { self.focused = true; }
///     fn blur(&mut self) { self.focused = false; }
///     fn view(&self, frame: &mut Frame, area: Rect) {
///         // Render tab content
///     }
/// }
/// ```
pub trait Tab {
    /// Returns the unique identifier for this tab.
    ///
    /// The ID should remain constant for the lifetime of the tab.
    fn id(&self) -> TabId;

    /// Returns the display title shown in the tab bar.
    fn title(&self) -> &str;

    /// Returns an optional icon character for the tab bar.
    ///
    /// `None` by default; override to provide a custom icon.
    fn icon(&self) -> Option<&str> {
        None
    }

    /// Returns whether this tab can be closed by the user.
    ///
    /// The core dashboard tabs are permanent and return `false`.
    fn can_close(&self) -> bool {
        true
    }

    /// Called when the tab receives focus.
    ///
    /// Use this to refresh data or resume work that should only happen
    /// while the tab is active.
    fn focus(&mut self);

    /// Called when the tab loses focus.
    fn blur(&mut self);

    /// Renders the tab content to the given area.
    ///
    /// Called during the render phase of the event loop. Implementations
    /// draw their content into the provided frame within `area`.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Optional handler invoked when the active tab receives a message.
    ///
    /// Tabs can inspect messages such as keyboard input and optionally
    /// return a follow-up message for the coordinator to process.
    fn handle_message(&mut self, _message: &Message) -> Option<Message> {
        None
    }

    /// Optional per-tick update invoked by the coordinator.
    fn tick(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestTab {
        id: TabId,
        title: String,
        icon: Option<String>,
        closeable: bool,
        focused: bool,
    }

    impl TestTab {
        fn new(id: TabId, title: &str) -> Self {
            Self {
                id,
                title: title.to_string(),
                icon: None,
                closeable: true,
                focused: false,
            }
        }

        fn with_icon(mut self, icon: &str) -> Self {
            self.icon = Some(icon.to_string());
            self
        }

        fn pinned(mut self) -> Self {
            self.closeable = false;
            self
        }
    }

    impl Tab for TestTab {
        fn id(&self) -> TabId {
            self.id
        }

        fn title(&self) -> &str {
            &self.title
        }

        fn icon(&self) -> Option<&str> {
            self.icon.as_deref()
        }

        fn can_close(&self) -> bool {
            self.closeable
        }

        fn focus(&mut self) {
            self.focused = true;
        }

        fn blur(&mut self) {
            self.focused = false;
        }

        fn view(&self, _frame: &mut Frame, _area: Rect) {}
    }

    #[test]
    fn test_tab_id_and_title() {
        let tab = TestTab::new(42, "Staging");
        assert_eq!(tab.id(), 42);
        assert_eq!(tab.title(), "Staging");
    }

    #[test]
    fn test_tab_icon_default() {
        let tab = TestTab::new(1, "Test");
        assert!(tab.icon().is_none());
    }

    #[test]
    fn test_tab_icon_custom() {
        let tab = TestTab::new(1, "Test").with_icon("folder");
        assert_eq!(tab.icon(), Some("folder"));
    }

    #[test]
    fn test_tab_can_close_default() {
        let tab = TestTab::new(1, "Test");
        assert!(tab.can_close());
    }

    #[test]
    fn test_tab_pinned() {
        let tab = TestTab::new(1, "Test").pinned();
        assert!(!tab.can_close());
    }

    #[test]
    fn test_tab_focus_blur() {
        let mut tab = TestTab::new(1, "Test");
        assert!(!tab.focused);

        tab.focus();
        assert!(tab.focused);

        tab.blur();
        assert!(!tab.focused);
    }

    #[test]
    fn test_tab_trait_is_object_safe() {
        fn accept_tab(_tab: &dyn Tab) {}
        let tab = TestTab::new(1, "Test");
        accept_tab(&tab);
    }
}
