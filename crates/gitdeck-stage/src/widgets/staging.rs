//! Staged-file list widget with per-file progress

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, StatefulWidget},
};

use crate::progress::COMPLETE;
use crate::store::{FileCategory, StagedFile};

/// One display row of the staged list.
#[derive(Debug, Clone)]
pub struct StagingRow {
    /// File name
    pub name: String,
    /// Category badge
    pub category: FileCategory,
    /// Pre-formatted size label
    pub size_label: String,
    /// Progress in `0..=100`
    pub progress: u8,
}

impl StagingRow {
    /// Builds a row from a staged record and its current progress.
    pub fn new(file: &StagedFile, progress: u8) -> Self {
        StagingRow {
            name: file.name.clone(),
            category: file.category,
            size_label: file.display_size(),
            progress,
        }
    }
}

/// Widget for displaying the staged files with progress gauges.
pub struct StagingList<'a> {
    rows: &'a [StagingRow],
    focused: bool,
}

impl<'a> StagingList<'a> {
    /// Creates a new staged list widget.
    pub fn new(rows: &'a [StagingRow]) -> Self {
        StagingList {
            rows,
            focused: false,
        }
    }

    /// Sets whether the widget is focused.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

/// Selection state for [`StagingList`].
#[derive(Debug, Default, Clone)]
pub struct StagingListState {
    /// Selected index within the list
    pub selected: usize,
}

impl StagingListState {
    /// Creates a new state with the first row selected.
    pub fn new() -> Self {
        StagingListState::default()
    }

    /// Moves the selection down, stopping at the last row.
    pub fn move_down(&mut self, len: usize) {
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    /// Moves the selection up, stopping at the first row.
    pub fn move_up(&mut self, _len: usize) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Ensures the selection stays in bounds after removals.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else {
            self.selected = self.selected.min(len - 1);
        }
    }
}

fn category_color(category: FileCategory) -> Color {
    match category {
        FileCategory::Image => Color::Magenta,
        FileCategory::Code => Color::Cyan,
        FileCategory::Text => Color::Yellow,
        FileCategory::Other => Color::Gray,
    }
}

impl StatefulWidget for StagingList<'_> {
    type State = StagingListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .title(format!(" Staged Files ({}) ", self.rows.len()))
            .borders(Borders::ALL)
            .border_style(border_style);

        let inner = block.inner(area);
        ratatui::widgets::Widget::render(block, area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.rows.is_empty() {
            let msg = "Nothing staged yet";
            let x = inner.x + (inner.width.saturating_sub(msg.len() as u16)) / 2;
            let y = inner.y + inner.height / 2;
            buf.set_string(x, y, msg, Style::default().fg(Color::DarkGray));
            return;
        }

        for (i, row) in self.rows.iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.y + inner.height {
                break;
            }
            let selected = state.selected == i;
            render_row(buf, inner.x, y, inner.width, row, selected);
        }
    }
}

fn render_row(buf: &mut Buffer, x: u16, y: u16, width: u16, row: &StagingRow, selected: bool) {
    let base_style = if selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    // Right side: size plus gauge or Ready badge
    let trailer = if row.progress >= COMPLETE {
        format!("{:>10}  {:^12}", row.size_label, "Ready")
    } else {
        format!(
            "{:>10}  {} {:>3}%",
            row.size_label,
            gauge(row.progress, 10),
            row.progress
        )
    };

    let badge = format!("[{}]", row.category.label());
    let reserved = badge.len() + trailer.len() + 3;
    let name_width = (width as usize).saturating_sub(reserved);
    let name = truncate(&row.name, name_width);

    let line = format!(" {} {:<nw$} {}", badge, name, trailer, nw = name_width);
    let line = truncate(&line, width as usize);
    buf.set_string(x, y, &line, base_style);

    // Re-color the badge unless the whole row is highlighted
    if !selected {
        buf.set_string(
            x + 1,
            y,
            &badge,
            Style::default().fg(category_color(row.category)),
        );
        if row.progress >= COMPLETE {
            // "Ready" sits centred inside the 12-column trailer slot
            let ready_x = x + width.saturating_sub(9);
            buf.set_string(
                ready_x,
                y,
                "Ready",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            );
        }
    }
}

/// Renders a fixed-width text gauge, e.g. `████░░░░░░` at 40%.
fn gauge(progress: u8, width: usize) -> String {
    let filled = (progress as usize * width) / 100;
    let mut bar = String::with_capacity(width * 3);
    for i in 0..width {
        bar.push(if i < filled { '█' } else { '░' });
    }
    bar
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else if width <= 3 {
        text.chars().take(width).collect()
    } else {
        let kept: String = text.chars().take(width - 3).collect();
        format!("{}...", kept)
    }
}
