//! Status bar widget for displaying application state
//!
//! Renders a three-section bar at the bottom of the terminal: mode on
//! the left, context in the centre, help hints on the right.

use gitdeck_core::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Widget;

/// Status bar with left, center, and right sections
///
/// - **Left**: current mode or in-flight operation
/// - **Center**: context (active repository, staged count)
/// - **Right**: help hints
///
/// Configure the sections with the builder methods:
///
/// ```ignore
/// let status = StatusBar::new(&theme)
///     .left("NORMAL")
///     .center("website")
///     .right("Tab:switch  Ctrl+Q:quit");
/// frame.render_widget(status, area);
/// ```
pub struct StatusBar<'a> {
    left: &'a str,
    center: &'a str,
    right: &'a str,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Creates a new status bar with empty sections.
    pub fn new(theme: &'a Theme) -> Self {
        StatusBar {
            left: "",
            center: "",
            right: "",
            theme,
        }
    }

    /// Sets the left section (accent colored, bold).
    pub fn left(mut self, text: &'a str) -> Self {
        self.left = text;
        self
    }

    /// Sets the center section (centered, standard foreground).
    pub fn center(mut self, text: &'a str) -> Self {
        self.center = text;
        self
    }

    /// Sets the right section (right-aligned, muted).
    pub fn right(mut self, text: &'a str) -> Self {
        self.right = text;
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        // Fill background with the selection color
        for x in area.left()..area.right() {
            for y in area.top()..area.bottom() {
                buf[(x, y)].set_bg(self.theme.colors.selection);
            }
        }

        let y = area.top();
        let width = area.width as usize;

        // Left section
        if !self.left.is_empty() {
            let text = format!(" {} ", self.left);
            let text: String = text.chars().take(width).collect();
            buf.set_string(
                area.x,
                y,
                &text,
                Style::default()
                    .fg(self.theme.colors.accent)
                    .bg(self.theme.colors.selection)
                    .add_modifier(Modifier::BOLD),
            );
        }

        // Center section
        if !self.center.is_empty() && self.center.len() < width {
            let x = area.x + ((width - self.center.len()) / 2) as u16;
            buf.set_string(
                x,
                y,
                self.center,
                Style::default()
                    .fg(self.theme.colors.foreground)
                    .bg(self.theme.colors.selection),
            );
        }

        // Right section
        if !self.right.is_empty() {
            let text = format!(" {} ", self.right);
            if text.len() <= width {
                let x = area.x + (width - text.len()) as u16;
                buf.set_string(
                    x,
                    y,
                    &text,
                    Style::default()
                        .fg(self.theme.colors.muted)
                        .bg(self.theme.colors.selection),
                );
            }
        }
    }
}
