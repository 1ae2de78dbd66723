//! Staging tab implementation

use crossterm::event::{KeyCode, KeyModifiers};
use parking_lot::Mutex;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use gitdeck_core::{Message, Tab, TabId};

use crate::handle::FileHandle;
use crate::simulator::{DragState, FileStagingSimulator};
use crate::widgets::{StagingList, StagingListState, StagingRow};

/// Internal mutable state for the staging tab
struct StageTabState {
    simulator: FileStagingSimulator,
    list_state: StagingListState,
    input: String,
    prompt_open: bool,
    error_message: Option<String>,
}

impl StageTabState {
    fn new(simulator: FileStagingSimulator) -> Self {
        StageTabState {
            simulator,
            list_state: StagingListState::new(),
            input: String::new(),
            prompt_open: false,
            error_message: None,
        }
    }

    fn open_prompt(&mut self) {
        if self.simulator.is_disabled() {
            return;
        }
        self.prompt_open = true;
        self.input.clear();
        self.simulator.drag_enter();
    }

    fn cancel_prompt(&mut self) {
        self.prompt_open = false;
        self.input.clear();
        self.simulator.drag_leave();
    }

    /// Turns the typed paths into handles and drops them on the target.
    ///
    /// Paths are whitespace-separated so a batch can be staged in one go,
    /// mirroring a multi-file browse selection.
    fn submit_prompt(&mut self) {
        let mut handles = Vec::new();
        let mut failures = Vec::new();

        for raw in self.input.split_whitespace() {
            match FileHandle::from_path(std::path::Path::new(raw)) {
                Ok(handle) => handles.push(handle),
                Err(e) => failures.push(format!("{}: {}", raw, e)),
            }
        }

        self.prompt_open = false;
        self.input.clear();
        // The drop always ends the hover; intake ignores an empty batch
        self.simulator.drop_files(handles);
        self.list_state.clamp(self.simulator.len());

        if !failures.is_empty() {
            self.error_message = Some(failures.join("; "));
        }
    }

    fn remove_selected(&mut self) {
        if self.simulator.is_empty() {
            return;
        }
        self.simulator.on_remove_requested(self.list_state.selected);
        self.list_state.clamp(self.simulator.len());
    }

    fn rows(&self) -> Vec<StagingRow> {
        self.simulator
            .files()
            .iter()
            .map(|f| StagingRow::new(f, self.simulator.progress_of(&f.id)))
            .collect()
    }
}

/// Staging tab hosting the drop target and the staged-file list
pub struct StageTab {
    id: TabId,
    state: Mutex<StageTabState>,
}

impl StageTab {
    /// Creates a staging tab around a configured simulator.
    pub fn new(id: TabId, simulator: FileStagingSimulator) -> Self {
        StageTab {
            id,
            state: Mutex::new(StageTabState::new(simulator)),
        }
    }

    /// Handle a key event
    pub fn handle_key(&self, code: KeyCode, modifiers: KeyModifiers) {
        let mut state = self.state.lock();
        state.error_message = None;

        if state.prompt_open {
            match (modifiers, code) {
                (KeyModifiers::NONE, KeyCode::Esc) => state.cancel_prompt(),
                (KeyModifiers::NONE, KeyCode::Enter) => state.submit_prompt(),
                (KeyModifiers::NONE, KeyCode::Backspace) => {
                    state.input.pop();
                }
                (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                    state.input.push(c);
                }
                _ => {}
            }
            return;
        }

        let len = state.simulator.len();
        match (modifiers, code) {
            (KeyModifiers::NONE, KeyCode::Char('a') | KeyCode::Char('o')) => {
                state.open_prompt();
            }
            (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => {
                state.list_state.move_down(len);
            }
            (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => {
                state.list_state.move_up(len);
            }
            (KeyModifiers::NONE, KeyCode::Char('d') | KeyCode::Delete) => {
                state.remove_selected();
            }
            _ => {}
        }
    }
}

impl Tab for StageTab {
    fn id(&self) -> TabId {
        self.id
    }

    fn title(&self) -> &str {
        "Staging"
    }

    fn icon(&self) -> Option<&str> {
        Some("\u{f093}") // Upload icon (nerd font)
    }

    fn can_close(&self) -> bool {
        false // Staging tab is a core tab
    }

    fn focus(&mut self) {
        // Nothing to refresh; timers run independently of focus
    }

    fn blur(&mut self) {
        // Keep the prompt; the user may come back mid-edit
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let mut state = self.state.lock();

        let footer = u16::from(state.error_message.is_some());
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Min(3),
                Constraint::Length(footer),
            ])
            .split(area);

        render_drop_zone(frame, chunks[0], &state);

        let rows = state.rows();
        let widget = StagingList::new(&rows).focused(!state.prompt_open);
        frame.render_stateful_widget(widget, chunks[1], &mut state.list_state);

        if let Some(msg) = &state.error_message {
            let buf = frame.buffer_mut();
            let text = format!(" {}", msg);
            buf.set_string(
                chunks[2].x,
                chunks[2].y,
                truncate_line(&text, chunks[2].width as usize),
                Style::default().fg(Color::Red),
            );
        }
    }

    fn handle_message(&mut self, message: &Message) -> Option<Message> {
        if let Message::Key(key) = message {
            self.handle_key(key.code, key.modifiers);
        }
        None
    }

    fn tick(&mut self) {
        // Selection can go stale when the list shrinks between frames
        let mut state = self.state.lock();
        let len = state.simulator.len();
        state.list_state.clamp(len);
    }
}

fn render_drop_zone(frame: &mut Frame, area: Rect, state: &StageTabState) {
    let (border_color, headline) = match state.simulator.drag_state() {
        DragState::Hovering => (Color::Cyan, "Drop files here"),
        DragState::Disabled => (Color::DarkGray, "Staging disabled"),
        DragState::Idle => (Color::Gray, "Drag and drop files here"),
    };

    let block = Block::default()
        .title(" Add Files ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let buf = frame.buffer_mut();
    let headline_style = if state.simulator.drag_state() == DragState::Hovering {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let x = inner.x + (inner.width.saturating_sub(headline.len() as u16)) / 2;
    buf.set_string(x, inner.y, headline, headline_style);

    let hint_y = inner.y + 1;
    if hint_y < inner.y + inner.height {
        if state.prompt_open {
            let prompt = format!(" > {}_", state.input);
            buf.set_string(
                inner.x,
                hint_y,
                truncate_line(&prompt, inner.width as usize),
                Style::default().fg(Color::White),
            );
        } else {
            let hint = match state.simulator.drag_state() {
                DragState::Disabled => "intake is suppressed by the embedder",
                _ => "press a to browse, Enter to stage, Esc to cancel",
            };
            let x = inner.x + (inner.width.saturating_sub(hint.len() as u16)) / 2;
            buf.set_string(x, hint_y, hint, Style::default().fg(Color::DarkGray));
        }
    }
}

fn truncate_line(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn key(tab: &StageTab, code: KeyCode) {
        tab.handle_key(code, KeyModifiers::NONE);
    }

    fn type_str(tab: &StageTab, text: &str) {
        for c in text.chars() {
            key(tab, KeyCode::Char(c));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_tab_properties() {
        let tab = StageTab::new(2, FileStagingSimulator::new());
        assert_eq!(tab.id(), 2);
        assert_eq!(tab.title(), "Staging");
        assert!(!tab.can_close());
        assert!(tab.icon().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_prompt_stages_existing_file() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("notes.md");
        fs::write(&path, "hello").expect("write file");

        let tab = StageTab::new(2, FileStagingSimulator::new());
        key(&tab, KeyCode::Char('a'));
        {
            let state = tab.state.lock();
            assert_eq!(state.simulator.drag_state(), DragState::Hovering);
            assert!(state.prompt_open);
        }

        type_str(&tab, path.to_str().expect("utf8 path"));
        key(&tab, KeyCode::Enter);

        let state = tab.state.lock();
        assert_eq!(state.simulator.drag_state(), DragState::Idle);
        assert_eq!(state.simulator.len(), 1);
        assert_eq!(state.simulator.files()[0].name, "notes.md");
        assert!(state.error_message.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_prompt_escape_cancels() {
        let tab = StageTab::new(2, FileStagingSimulator::new());
        key(&tab, KeyCode::Char('a'));
        type_str(&tab, "whatever");
        key(&tab, KeyCode::Esc);

        let state = tab.state.lock();
        assert_eq!(state.simulator.drag_state(), DragState::Idle);
        assert!(state.simulator.is_empty());
        assert!(!state.prompt_open);
    }

    #[tokio::test(start_paused = true)]
    async fn test_prompt_missing_file_reports_error() {
        let tab = StageTab::new(2, FileStagingSimulator::new());
        key(&tab, KeyCode::Char('a'));
        type_str(&tab, "/no/such/file.txt");
        key(&tab, KeyCode::Enter);

        let state = tab.state.lock();
        assert!(state.simulator.is_empty());
        assert!(state.error_message.is_some());
        // The failed drop still ends the hover
        assert_eq!(state.simulator.drag_state(), DragState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_remove_selected_file() {
        let dir = tempdir().expect("create temp dir");
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "a").expect("write a");
        fs::write(&b, "b").expect("write b");

        let tab = StageTab::new(2, FileStagingSimulator::new());
        key(&tab, KeyCode::Char('a'));
        type_str(
            &tab,
            &format!("{} {}", a.display(), b.display()),
        );
        key(&tab, KeyCode::Enter);
        assert_eq!(tab.state.lock().simulator.len(), 2);

        key(&tab, KeyCode::Char('d'));
        let state = tab.state.lock();
        assert_eq!(state.simulator.len(), 1);
        assert_eq!(state.simulator.files()[0].name, "b.txt");
    }

    #[tokio::test(start_paused = true)]
    async fn test_disabled_prompt_never_opens() {
        let tab = StageTab::new(2, FileStagingSimulator::new().disabled(true));
        key(&tab, KeyCode::Char('a'));

        let state = tab.state.lock();
        assert!(!state.prompt_open);
        assert_eq!(state.simulator.drag_state(), DragState::Disabled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_navigation_clamps() {
        let dir = tempdir().expect("create temp dir");
        let a = dir.path().join("a.txt");
        fs::write(&a, "a").expect("write a");

        let tab = StageTab::new(2, FileStagingSimulator::new());
        key(&tab, KeyCode::Char('a'));
        type_str(&tab, a.to_str().expect("utf8 path"));
        key(&tab, KeyCode::Enter);

        key(&tab, KeyCode::Char('j'));
        key(&tab, KeyCode::Char('j'));
        assert_eq!(tab.state.lock().list_state.selected, 0);

        key(&tab, KeyCode::Char('k'));
        assert_eq!(tab.state.lock().list_state.selected, 0);
    }
}
