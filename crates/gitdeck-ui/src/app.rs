//! Main application struct
//!
//! The [`App`] struct implements [`AppCoordinator`] and serves as the
//! central coordinator for the dashboard: it owns the tab manager, the
//! theme, the message bus, and a handle to the shared session state, and
//! renders the full frame (header, tab bar, active tab, status bar).

use gitdeck_core::{
    AppCoordinator, CoreResult, Message, MessageBus, SharedSession, Tab, TabId, Theme,
};
use ratatui::prelude::*;
use tracing::debug;

use crate::renderer::FrameLayout;
use crate::tab_manager::TabManager;
use crate::widgets::{StatusBar, TabBar};

/// Main application state
///
/// # Example
///
/// ```ignore
/// use gitdeck_core::SessionState;
/// use gitdeck_ui::App;
///
/// let session = SessionState::new().shared();
/// let mut app = App::new(session);
/// app.add_tab(Box::new(my_tab));
///
/// loop {
///     terminal.draw(|f| app.render(f))?;
///     // ... dispatch input events ...
///     if app.should_quit() {
///         break;
///     }
/// }
/// ```
pub struct App {
    tab_manager: TabManager,
    theme: Theme,
    message_bus: MessageBus,
    session: SharedSession,
    should_quit: bool,
    status_left: String,
    status_right: String,
}

impl App {
    /// Creates a new app over the shared session with the default theme.
    #[must_use]
    pub fn new(session: SharedSession) -> Self {
        App::with_theme(session, Theme::dark())
    }

    /// Creates a new app with a custom theme.
    #[must_use]
    pub fn with_theme(session: SharedSession, theme: Theme) -> Self {
        App {
            tab_manager: TabManager::new(),
            theme,
            message_bus: MessageBus::new(256),
            session,
            should_quit: false,
            status_left: String::new(),
            status_right: "Tab:switch  Ctrl+Q:quit".to_string(),
        }
    }

    /// Adds a tab and returns its ID.
    pub fn add_tab(&mut self, tab: Box<dyn Tab>) -> TabId {
        self.tab_manager.add_tab(tab)
    }

    /// Removes a tab by ID.
    ///
    /// # Errors
    ///
    /// Returns an error when the tab doesn't exist or is pinned.
    pub fn remove_tab(&mut self, id: TabId) -> CoreResult<()> {
        self.tab_manager.close_tab(id)
    }

    /// The message bus, for subscribing or cross-component sends.
    #[must_use]
    pub fn message_bus(&self) -> &MessageBus {
        &self.message_bus
    }

    /// Handle to the shared session state.
    #[must_use]
    pub fn session(&self) -> &SharedSession {
        &self.session
    }

    /// Sets the status bar left section (typically the mode).
    pub fn set_status_left(&mut self, text: impl Into<String>) {
        self.status_left = text.into();
    }

    /// Sets the status bar right section (typically help hints).
    pub fn set_status_right(&mut self, text: impl Into<String>) {
        self.status_right = text.into();
    }

    /// Replaces the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Renders the full application frame.
    pub fn render(&self, frame: &mut Frame) {
        let layout = FrameLayout::new(frame.area());

        self.render_header(frame, layout.header);

        let tab_bar = TabBar::new(
            self.tab_manager.tabs(),
            self.tab_manager.active_index(),
            &self.theme,
        );
        frame.render_widget(tab_bar, layout.tab_bar);

        if let Some(tab) = self.tab_manager.active_tab() {
            tab.view(frame, layout.content);
        }

        let center = self.status_center_text();
        let status = StatusBar::new(&self.theme)
            .left(&self.status_left)
            .center(&center)
            .right(&self.status_right);
        frame.render_widget(status, layout.status_bar);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let session = self.session.read();
        let repo = session.active_repository().unwrap_or("no repository");
        let title = format!(" gitdeck · {} ", repo);

        let buf = frame.buffer_mut();
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_bg(self.theme.colors.selection);
        }
        buf.set_string(
            area.x,
            area.y,
            &title,
            Style::default()
                .fg(self.theme.colors.accent)
                .bg(self.theme.colors.selection)
                .add_modifier(Modifier::BOLD),
        );

        if let Some(user) = session.user() {
            let label = format!(" {} ", user.name);
            if (label.len() as u16) < area.width {
                let x = area.x + area.width - label.len() as u16;
                buf.set_string(
                    x,
                    area.y,
                    &label,
                    Style::default()
                        .fg(self.theme.colors.muted)
                        .bg(self.theme.colors.selection),
                );
            }
        }
    }

    /// Status bar centre: last error wins, then the in-flight operation.
    fn status_center_text(&self) -> String {
        let session = self.session.read();
        if let Some(err) = session.last_error() {
            return format!("error: {}", err);
        }
        if let Some(op) = session.operation() {
            return format!("{} ({}%)", op.name, op.percent);
        }
        String::new()
    }
}

impl AppCoordinator for App {
    fn tabs(&self) -> &[Box<dyn Tab>] {
        self.tab_manager.tabs()
    }

    fn active_tab(&self) -> TabId {
        self.tab_manager.active_id().unwrap_or(0)
    }

    fn theme(&self) -> &Theme {
        &self.theme
    }

    fn dispatch(&mut self, msg: Message) {
        for message in msg.flatten() {
            match message {
                Message::Quit => {
                    self.should_quit = true;
                }
                Message::SelectRepository(name) => {
                    debug!(repository = %name, "switching active repository");
                    self.session.write().select_repository(&name);
                }
                other => {
                    let Some(unhandled) = self.tab_manager.handle_message(&other) else {
                        continue;
                    };
                    let follow_up = self
                        .tab_manager
                        .active_tab_mut()
                        .and_then(|tab| tab.handle_message(&unhandled));
                    if let Some(follow_up) = follow_up {
                        self.dispatch(follow_up);
                    }
                }
            }
        }
    }

    fn tick(&mut self) {
        if let Some(tab) = self.tab_manager.active_tab_mut() {
            tab.tick();
        }
    }

    fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gitdeck_core::SessionState;

    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    struct MockTab {
        id: TabId,
        title: String,
        ticks: Arc<AtomicU32>,
        reply: Option<Message>,
    }

    impl MockTab {
        fn new(id: TabId, title: &str) -> Self {
            MockTab {
                id,
                title: title.to_string(),
                ticks: Arc::new(AtomicU32::new(0)),
                reply: None,
            }
        }

        fn replying(mut self, reply: Message) -> Self {
            self.reply = Some(reply);
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

        fn focus(&mut self) {}

        fn blur(&mut self) {}

        fn view(&self, _frame: &mut Frame, _area: Rect) {}

        fn handle_message(&mut self, _message: &Message) -> Option<Message> {
            self.reply.take()
        }

        fn tick(&mut self) {
            self.ticks.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn session() -> SharedSession {
        let mut state = SessionState::new();
        state.set_repositories(vec!["website".into(), "portfolio".into()]);
        state.select_repository("website");
        state.shared()
    }

    #[test]
    fn test_new_app() {
        let app = App::new(session());
        assert!(!app.should_quit());
        assert!(app.tabs().is_empty());
        assert_eq!(app.theme().name, "Dark");
    }

    #[test]
    fn test_dispatch_quit() {
        let mut app = App::new(session());
        app.dispatch(Message::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_dispatch_tab_navigation() {
        let mut app = App::new(session());
        app.add_tab(Box::new(MockTab::new(1, "One")));
        app.add_tab(Box::new(MockTab::new(2, "Two")));

        app.dispatch(Message::NextTab);
        assert_eq!(app.active_tab(), 2);

        app.dispatch(Message::SwitchTab(1));
        assert_eq!(app.active_tab(), 1);
    }

    #[test]
    fn test_dispatch_select_repository_updates_session() {
        let mut app = App::new(session());
        app.dispatch(Message::SelectRepository("portfolio".to_string()));
        assert_eq!(
            app.session().read().active_repository(),
            Some("portfolio")
        );
    }

    #[test]
    fn test_dispatch_batch() {
        let mut app = App::new(session());
        app.add_tab(Box::new(MockTab::new(1, "One")));
        app.add_tab(Box::new(MockTab::new(2, "Two")));

        app.dispatch(Message::batch(vec![Message::NextTab, Message::Quit]));
        assert_eq!(app.active_tab(), 2);
        assert!(app.should_quit());
    }

    #[test]
    fn test_follow_up_message_from_tab() {
        let mut app = App::new(session());
        app.add_tab(Box::new(
            MockTab::new(1, "One")
                .replying(Message::SelectRepository("portfolio".to_string())),
        ));

        let key = Message::Key(crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Enter,
            crossterm::event::KeyModifiers::NONE,
        ));
        app.dispatch(key);

        assert_eq!(
            app.session().read().active_repository(),
            Some("portfolio")
        );
    }

    #[test]
    fn test_tick_reaches_active_tab() {
        let mut app = App::new(session());
        let tab = MockTab::new(1, "One");
        let ticks = Arc::clone(&tab.ticks);
        app.add_tab(Box::new(tab));

        app.tick();
        app.tick();
        assert_eq!(ticks.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_status_center_prefers_error() {
        let app = App::new(session());
        app.session().write().begin_operation("Staging files");
        app.session().write().record_error("disk full");
        assert_eq!(app.status_center_text(), "error: disk full");

        app.session().write().clear_error();
        assert_eq!(app.status_center_text(), "Staging files (0%)");
    }
}
