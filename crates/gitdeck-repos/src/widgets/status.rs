//! Repository status panel showing branch, pending changes, and activity

use chrono::Utc;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::catalog::{format_relative, Catalog, ChangeKind};

/// Widget summarising the active repository.
///
/// Renders the branch, a status badge, the pending-change list, and
/// recent commits with relative timestamps, in the style of the side
/// panel of the dashboard mock.
pub struct StatusPanel<'a> {
    catalog: &'a Catalog,
    focused: bool,
}

impl<'a> StatusPanel<'a> {
    /// Creates a status panel over the given catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        StatusPanel {
            catalog,
            focused: false,
        }
    }

    /// Set whether the widget is focused.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

fn change_color(kind: ChangeKind) -> Color {
    match kind {
        ChangeKind::Added => Color::Green,
        ChangeKind::Modified => Color::Yellow,
        ChangeKind::Deleted => Color::Red,
    }
}

impl Widget for StatusPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .title(" Repository Status ")
            .borders(Borders::ALL)
            .border_style(border_style);

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 3 || inner.width == 0 {
            return;
        }

        let now = Utc::now();
        let bottom = inner.y + inner.height;
        let mut y = inner.y;

        // Branch and status badge
        buf.set_string(
            inner.x,
            y,
            format!(" Branch   {}", self.catalog.branch()),
            Style::default().fg(Color::White),
        );
        y += 1;

        if y < bottom {
            let status = self.catalog.status_line();
            let status_color = if self.catalog.pending_changes().is_empty() {
                Color::Green
            } else {
                Color::Yellow
            };
            buf.set_string(
                inner.x,
                y,
                format!(" Status   {}", status),
                Style::default().fg(status_color),
            );
            y += 1;
        }

        if y < bottom {
            buf.set_string(
                inner.x,
                y,
                format!(
                    " Synced   {}",
                    format_relative(self.catalog.last_sync(), now)
                ),
                Style::default().fg(Color::Gray),
            );
            y += 2;
        }

        // Pending changes section
        let pending = self.catalog.pending_changes();
        if !pending.is_empty() && y < bottom {
            let header_style = Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
            buf.set_string(
                inner.x,
                y,
                format!("── Pending Changes ({}) ──", pending.len()),
                header_style,
            );
            y += 1;

            for change in pending {
                if y >= bottom {
                    break;
                }
                buf.set_string(
                    inner.x,
                    y,
                    format!(" {} {}", change.kind.indicator(), change.file),
                    Style::default().fg(change_color(change.kind)),
                );
                y += 1;
            }
            y += 1;
        }

        // Recent activity section
        let commits = self.catalog.recent_commits();
        if !commits.is_empty() && y < bottom {
            let header_style = Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD);
            buf.set_string(
                inner.x,
                y,
                format!("── Recent Activity ({}) ──", commits.len()),
                header_style,
            );
            y += 1;

            for commit in commits {
                if y >= bottom {
                    break;
                }
                buf.set_string(
                    inner.x,
                    y,
                    format!(" {}", commit.message),
                    Style::default().fg(Color::White),
                );
                y += 1;

                if y >= bottom {
                    break;
                }
                buf.set_string(
                    inner.x,
                    y,
                    format!(
                        "   {} · {} · {}",
                        commit.hash,
                        commit.author,
                        format_relative(commit.time, now)
                    ),
                    Style::default().fg(Color::DarkGray),
                );
                y += 1;
            }
        }
    }
}
