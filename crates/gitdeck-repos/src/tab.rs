//! Repository overview tab implementation

use crossterm::event::{KeyCode, KeyModifiers};
use parking_lot::Mutex;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use gitdeck_core::{Message, Tab, TabId};

use crate::catalog::{format_relative, Catalog, RepoState};
use crate::widgets::StatusPanel;

/// Internal mutable state for the overview tab
struct OverviewState {
    catalog: Catalog,
    selected: usize,
    pending_selection: Option<String>,
}

impl OverviewState {
    fn new(catalog: Catalog) -> Self {
        let selected = catalog.active_index();
        OverviewState {
            catalog,
            selected,
            pending_selection: None,
        }
    }

    fn move_down(&mut self) {
        let len = self.catalog.repositories().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Activates the highlighted repository and queues a session update.
    fn activate_selected(&mut self) {
        let name = match self.catalog.repositories().get(self.selected) {
            Some(repo) => repo.name.clone(),
            None => return,
        };
        // Selection by position cannot miss; ignore the impossible error
        let _ = self.catalog.select(&name);
        self.pending_selection = Some(name);
    }
}

/// Overview tab with repository selector, welcome panel, and status panel
pub struct OverviewTab {
    id: TabId,
    state: Mutex<OverviewState>,
}

impl OverviewTab {
    /// Creates an overview tab over the given catalog.
    pub fn new(id: TabId, catalog: Catalog) -> Self {
        OverviewTab {
            id,
            state: Mutex::new(OverviewState::new(catalog)),
        }
    }

    /// Handle a key event
    pub fn handle_key(&self, code: KeyCode, modifiers: KeyModifiers) {
        let mut state = self.state.lock();
        match (modifiers, code) {
            (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => state.move_down(),
            (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => state.move_up(),
            (KeyModifiers::NONE, KeyCode::Enter) => state.activate_selected(),
            _ => {}
        }
    }
}

impl Tab for OverviewTab {
    fn id(&self) -> TabId {
        self.id
    }

    fn title(&self) -> &str {
        "Overview"
    }

    fn icon(&self) -> Option<&str> {
        Some("\u{f1d3}") // Git icon (nerd font)
    }

    fn can_close(&self) -> bool {
        false // Overview tab is a core tab
    }

    fn focus(&mut self) {
        // Catalog is static mock data; nothing to refresh
    }

    fn blur(&mut self) {
        // Nothing to do
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let state = self.state.lock();

        // Sidebar | main content | status panel
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(26),
                Constraint::Min(20),
                Constraint::Length(38),
            ])
            .split(area);

        render_sidebar(frame, chunks[0], &state);
        render_main(frame, chunks[1], &state);
        frame.render_widget(StatusPanel::new(&state.catalog), chunks[2]);
    }

    fn handle_message(&mut self, message: &Message) -> Option<Message> {
        if let Message::Key(key) = message {
            self.handle_key(key.code, key.modifiers);
        }
        // Hand any queued repository switch to the coordinator so the
        // session state follows the catalog
        self.state
            .lock()
            .pending_selection
            .take()
            .map(Message::SelectRepository)
    }
}

fn render_sidebar(frame: &mut Frame, area: Rect, state: &OverviewState) {
    let block = Block::default()
        .title(" Repositories ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let buf = frame.buffer_mut();
    let now = chrono::Utc::now();

    for (i, repo) in state.catalog.repositories().iter().enumerate() {
        let y = inner.y + (i as u16) * 2;
        if y + 1 >= inner.y + inner.height {
            break;
        }

        let is_active = i == state.catalog.active_index();
        let is_selected = i == state.selected;

        let marker = if is_active { "●" } else { "○" };
        let name_style = if is_selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        };

        buf.set_string(inner.x, y, format!(" {} {}", marker, repo.name), name_style);

        let state_color = match repo.state {
            RepoState::Clean => Color::Green,
            RepoState::Dirty => Color::Yellow,
        };
        buf.set_string(
            inner.x,
            y + 1,
            format!(
                "   {} · {}",
                repo.state.label(),
                format_relative(repo.last_update, now)
            ),
            Style::default().fg(state_color),
        );
    }
}

fn render_main(frame: &mut Frame, area: Rect, state: &OverviewState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 4 {
        return;
    }

    let buf = frame.buffer_mut();
    let active = state
        .catalog
        .active()
        .map(|r| r.name.clone())
        .unwrap_or_else(|| "(none)".to_string());

    let mut y = inner.y + 1;
    buf.set_string(
        inner.x + 2,
        y,
        "Manage your repositories with the simplicity of drag and drop",
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    );
    y += 2;

    buf.set_string(
        inner.x + 2,
        y,
        format!("Active repository: {}", active),
        Style::default().fg(Color::Cyan),
    );
    y += 2;

    let hints = [
        "j/k  select repository",
        "Enter  switch to selection",
        "Tab  jump to the staging area",
    ];
    for hint in hints {
        if y >= inner.y + inner.height {
            break;
        }
        buf.set_string(
            inner.x + 2,
            y,
            format!("  {}", hint),
            Style::default().fg(Color::Gray),
        );
        y += 1;
    }

    y += 1;
    if y < inner.y + inner.height {
        buf.set_string(
            inner.x + 2,
            y,
            "New here? Stage files in the Staging tab, review pending",
            Style::default().fg(Color::DarkGray),
        );
    }
    y += 1;
    if y < inner.y + inner.height {
        buf.set_string(
            inner.x + 2,
            y,
            "changes on the right, and the rest is handled for you.",
            Style::default().fg(Color::DarkGray),
        );
    }
}
