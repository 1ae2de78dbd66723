//! Tab management for the dashboard shell
//!
//! The [`TabManager`] owns the tab collection, drives focus/blur on
//! switches, and consumes tab-related messages.

use gitdeck_core::{CoreError, CoreResult, Message, Tab, TabId};

/// Manages the dashboard's tabs.
///
/// Tabs are stored in display order. The manager keeps exactly one tab
/// active, calls `focus`/`blur` as the active tab changes, and consumes
/// `SwitchTab`/`CloseTab`/`NextTab`/`PrevTab` messages.
///
/// # Thread Safety
///
/// TabManager is not thread-safe; wrap it in a lock if it must cross
/// threads.
pub struct TabManager {
    tabs: Vec<Box<dyn Tab>>,
    active: usize,
}

impl TabManager {
    /// Creates an empty tab manager.
    #[must_use]
    pub fn new() -> Self {
        TabManager {
            tabs: Vec::new(),
            active: 0,
        }
    }

    fn index_of(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id() == id)
    }

    /// Adds a tab at the end of the bar and returns its ID.
    ///
    /// The first tab added becomes active and receives focus.
    pub fn add_tab(&mut self, mut tab: Box<dyn Tab>) -> TabId {
        let id = tab.id();
        if self.tabs.is_empty() {
            tab.focus();
        }
        self.tabs.push(tab);
        id
    }

    /// Closes a tab by ID.
    ///
    /// If the closed tab was active, focus shifts to an adjacent tab.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::TabNotFound`] for unknown ids and
    /// [`CoreError::TabPinned`] for tabs that report
    /// `can_close() == false`.
    pub fn close_tab(&mut self, id: TabId) -> CoreResult<()> {
        let index = self.index_of(id).ok_or(CoreError::TabNotFound(id))?;

        if !self.tabs[index].can_close() {
            return Err(CoreError::TabPinned(id));
        }

        if index == self.active {
            self.tabs[index].blur();
        }
        self.tabs.remove(index);

        if self.tabs.is_empty() {
            self.active = 0;
            return Ok(());
        }

        if index < self.active {
            // A tab before the active one vanished; keep pointing at the
            // same tab
            self.active -= 1;
        } else if index == self.active {
            if self.active >= self.tabs.len() {
                self.active = self.tabs.len() - 1;
            }
            self.tabs[self.active].focus();
        }

        Ok(())
    }

    /// Switches to the tab with the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::TabNotFound`] if the tab doesn't exist.
    pub fn activate(&mut self, id: TabId) -> CoreResult<()> {
        let index = self.index_of(id).ok_or(CoreError::TabNotFound(id))?;

        if index != self.active {
            self.tabs[self.active].blur();
            self.active = index;
            self.tabs[self.active].focus();
        }

        Ok(())
    }

    /// Switches to the next tab, wrapping around.
    pub fn next_tab(&mut self) {
        if self.tabs.len() <= 1 {
            return;
        }
        self.tabs[self.active].blur();
        self.active = (self.active + 1) % self.tabs.len();
        self.tabs[self.active].focus();
    }

    /// Switches to the previous tab, wrapping around.
    pub fn prev_tab(&mut self) {
        if self.tabs.len() <= 1 {
            return;
        }
        self.tabs[self.active].blur();
        self.active = if self.active == 0 {
            self.tabs.len() - 1
        } else {
            self.active - 1
        };
        self.tabs[self.active].focus();
    }

    /// The active tab, if any.
    #[must_use]
    pub fn active_tab(&self) -> Option<&dyn Tab> {
        self.tabs.get(self.active).map(|t| t.as_ref())
    }

    /// Mutable access to the active tab, if any.
    pub fn active_tab_mut(&mut self) -> Option<&mut Box<dyn Tab>> {
        self.tabs.get_mut(self.active)
    }

    /// The active tab's ID, if any.
    #[must_use]
    pub fn active_id(&self) -> Option<TabId> {
        self.active_tab().map(|t| t.id())
    }

    /// Zero-based index of the active tab (0 when empty).
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// All tabs in display order.
    #[must_use]
    pub fn tabs(&self) -> &[Box<dyn Tab>] {
        &self.tabs
    }

    /// Number of tabs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// True when no tabs have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Looks up a tab by ID.
    #[must_use]
    pub fn get(&self, id: TabId) -> Option<&dyn Tab> {
        self.index_of(id).map(|i| self.tabs[i].as_ref())
    }

    /// Mutable lookup by ID.
    pub fn get_mut(&mut self, id: TabId) -> Option<&mut Box<dyn Tab>> {
        match self.index_of(id) {
            Some(i) => self.tabs.get_mut(i),
            None => None,
        }
    }

    /// Handles a tab-related message.
    ///
    /// Consumes `SwitchTab`, `CloseTab`, `NextTab`, and `PrevTab`;
    /// anything else is returned for further processing.
    pub fn handle_message(&mut self, msg: &Message) -> Option<Message> {
        match msg {
            Message::SwitchTab(id) => {
                let _ = self.activate(*id);
                None
            }
            Message::CloseTab(id) => {
                let _ = self.close_tab(*id);
                None
            }
            Message::NextTab => {
                self.next_tab();
                None
            }
            Message::PrevTab => {
                self.prev_tab();
                None
            }
            _ => Some(msg.clone()),
        }
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::prelude::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    struct MockTab {
        id: TabId,
        title: String,
        can_close: bool,
        focus_count: Arc<AtomicU32>,
        blur_count: Arc<AtomicU32>,
    }

    impl MockTab {
        fn new(id: TabId, title: &str) -> Self {
            MockTab {
                id,
                title: title.to_string(),
                can_close: true,
                focus_count: Arc::new(AtomicU32::new(0)),
                blur_count: Arc::new(AtomicU32::new(0)),
            }
        }

        fn pinned(mut self) -> Self {
            self.can_close = false;
            self
        }
    }

    impl Tab for MockTab {
        fn id(&self) -> TabId {
            self.id
        }

        fn title(&self) -> &str {
            &self.title
        }

        fn can_close(&self) -> bool {
            self.can_close
        }

        fn focus(&mut self) {
            self.focus_count.fetch_add(1, Ordering::SeqCst);
        }

        fn blur(&mut self) {
            self.blur_count.fetch_add(1, Ordering::SeqCst);
        }

        fn view(&self, _frame: &mut Frame, _area: Rect) {}
    }

    fn manager_with(count: u32) -> TabManager {
        let mut manager = TabManager::new();
        for i in 1..=count {
            manager.add_tab(Box::new(MockTab::new(i, &format!("Tab {}", i))));
        }
        manager
    }

    #[test]
    fn test_new_manager_is_empty() {
        let manager = TabManager::new();
        assert!(manager.is_empty());
        assert_eq!(manager.len(), 0);
        assert!(manager.active_tab().is_none());
        assert!(manager.active_id().is_none());
    }

    #[test]
    fn test_add_tab_returns_id() {
        let mut manager = TabManager::new();
        let id = manager.add_tab(Box::new(MockTab::new(42, "Tab 42")));
        assert_eq!(id, 42);
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_first_tab_gets_focus() {
        let mut manager = TabManager::new();
        let tab = MockTab::new(1, "Tab 1");
        let focus = Arc::clone(&tab.focus_count);
        manager.add_tab(Box::new(tab));
        assert_eq!(focus.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_subsequent_tabs_not_focused() {
        let mut manager = manager_with(1);
        let tab2 = MockTab::new(2, "Tab 2");
        let focus2 = Arc::clone(&tab2.focus_count);
        manager.add_tab(Box::new(tab2));
        assert_eq!(focus2.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_activate_switches_focus() {
        let mut manager = TabManager::new();
        let tab1 = MockTab::new(1, "Tab 1");
        let blur1 = Arc::clone(&tab1.blur_count);
        let tab2 = MockTab::new(2, "Tab 2");
        let focus2 = Arc::clone(&tab2.focus_count);

        manager.add_tab(Box::new(tab1));
        manager.add_tab(Box::new(tab2));

        manager.activate(2).expect("should activate");
        assert_eq!(manager.active_id(), Some(2));
        assert_eq!(blur1.load(Ordering::SeqCst), 1);
        assert_eq!(focus2.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_activate_same_tab_no_op() {
        let mut manager = TabManager::new();
        let tab = MockTab::new(1, "Tab 1");
        let blur = Arc::clone(&tab.blur_count);
        manager.add_tab(Box::new(tab));

        manager.activate(1).expect("should activate");
        assert_eq!(blur.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_activate_unknown_tab() {
        let mut manager = manager_with(1);
        let result = manager.activate(999);
        assert!(matches!(result, Err(CoreError::TabNotFound(999))));
    }

    #[test]
    fn test_next_tab_cycles() {
        let mut manager = manager_with(3);
        assert_eq!(manager.active_id(), Some(1));

        manager.next_tab();
        assert_eq!(manager.active_id(), Some(2));
        manager.next_tab();
        assert_eq!(manager.active_id(), Some(3));
        manager.next_tab();
        assert_eq!(manager.active_id(), Some(1)); // Wraps around
    }

    #[test]
    fn test_prev_tab_cycles() {
        let mut manager = manager_with(3);
        manager.prev_tab();
        assert_eq!(manager.active_id(), Some(3)); // Wraps to end
        manager.prev_tab();
        assert_eq!(manager.active_id(), Some(2));
    }

    #[test]
    fn test_next_tab_single_tab_no_op() {
        let mut manager = manager_with(1);
        manager.next_tab();
        assert_eq!(manager.active_id(), Some(1));
    }

    #[test]
    fn test_next_prev_empty_no_panic() {
        let mut manager = TabManager::new();
        manager.next_tab();
        manager.prev_tab();
        assert!(manager.is_empty());
    }

    #[test]
    fn test_close_tab() {
        let mut manager = manager_with(3);
        manager.close_tab(2).expect("should close");
        assert_eq!(manager.len(), 2);
        assert!(manager.get(2).is_none());
        assert!(manager.get(3).is_some());
    }

    #[test]
    fn test_close_unknown_tab() {
        let mut manager = manager_with(1);
        assert!(matches!(
            manager.close_tab(9),
            Err(CoreError::TabNotFound(9))
        ));
    }

    #[test]
    fn test_close_pinned_tab_refused() {
        let mut manager = TabManager::new();
        manager.add_tab(Box::new(MockTab::new(1, "Core").pinned()));
        manager.add_tab(Box::new(MockTab::new(2, "Other")));

        assert!(matches!(manager.close_tab(1), Err(CoreError::TabPinned(1))));
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn test_close_active_tab_shifts_focus() {
        let mut manager = TabManager::new();
        let tab1 = MockTab::new(1, "Tab 1");
        let tab2 = MockTab::new(2, "Tab 2");
        let focus2 = Arc::clone(&tab2.focus_count);
        manager.add_tab(Box::new(tab1));
        manager.add_tab(Box::new(tab2));

        manager.close_tab(1).expect("should close");
        assert_eq!(manager.active_id(), Some(2));
        assert_eq!(focus2.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_close_last_position_adjusts_active() {
        let mut manager = manager_with(3);
        manager.activate(3).expect("activate 3");
        manager.close_tab(3).expect("close 3");
        assert_eq!(manager.active_id(), Some(2));
        assert!(manager.active_index() < manager.len());
    }

    #[test]
    fn test_close_before_active_keeps_active_tab() {
        let mut manager = manager_with(3);
        manager.activate(3).expect("activate 3");

        manager.close_tab(1).expect("close 1");
        assert_eq!(manager.active_id(), Some(3));
    }

    #[test]
    fn test_close_only_tab() {
        let mut manager = manager_with(1);
        manager.close_tab(1).expect("should close");
        assert!(manager.is_empty());
        assert!(manager.active_tab().is_none());
    }

    #[test]
    fn test_get_by_id() {
        let manager = manager_with(2);
        assert_eq!(manager.get(2).map(|t| t.title()), Some("Tab 2"));
        assert!(manager.get(7).is_none());
    }

    #[test]
    fn test_handle_message_switch() {
        let mut manager = manager_with(2);
        assert!(manager.handle_message(&Message::SwitchTab(2)).is_none());
        assert_eq!(manager.active_id(), Some(2));
    }

    #[test]
    fn test_handle_message_next_prev() {
        let mut manager = manager_with(2);
        assert!(manager.handle_message(&Message::NextTab).is_none());
        assert_eq!(manager.active_id(), Some(2));
        assert!(manager.handle_message(&Message::PrevTab).is_none());
        assert_eq!(manager.active_id(), Some(1));
    }

    #[test]
    fn test_handle_message_close() {
        let mut manager = manager_with(2);
        assert!(manager.handle_message(&Message::CloseTab(2)).is_none());
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_handle_message_passthrough() {
        let mut manager = manager_with(1);
        let out = manager.handle_message(&Message::Quit);
        assert!(matches!(out, Some(Message::Quit)));
    }
}
