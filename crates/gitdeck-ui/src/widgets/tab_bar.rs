//! Tab bar widget for displaying and selecting tabs
//!
//! Renders a horizontal bar showing all tab titles, with the active tab
//! highlighted using the theme's accent color.

use gitdeck_core::{Tab, Theme};
use ratatui::prelude::*;
use ratatui::widgets::{Tabs, Widget};

/// Tab bar widget that displays tab titles
///
/// Inactive tabs use the theme's muted color; the active tab is bold in
/// the accent color. Icons are rendered before titles when a tab
/// provides one.
pub struct TabBar<'a> {
    tabs: &'a [Box<dyn Tab>],
    active_index: usize,
    theme: &'a Theme,
}

impl<'a> TabBar<'a> {
    /// Creates a new tab bar.
    ///
    /// # Arguments
    ///
    /// * `tabs` - Slice of tabs to display in the bar
    /// * `active_index` - Index of the currently active tab (0-based)
    /// * `theme` - Theme for styling the tab bar
    pub fn new(tabs: &'a [Box<dyn Tab>], active_index: usize, theme: &'a Theme) -> Self {
        TabBar {
            tabs,
            active_index,
            theme,
        }
    }

    /// Number of tabs in this bar.
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// True when there are no tabs to show.
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.tabs.is_empty() || area.width == 0 || area.height == 0 {
            return;
        }

        let titles: Vec<Line> = self
            .tabs
            .iter()
            .enumerate()
            .map(|(i, tab)| {
                let icon = tab.icon().unwrap_or("");
                let title = tab.title();
                let content = if icon.is_empty() {
                    format!(" {} ", title)
                } else {
                    format!(" {} {} ", icon, title)
                };

                if i == self.active_index {
                    Line::from(content).style(
                        Style::default()
                            .fg(self.theme.colors.accent)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Line::from(content).style(Style::default().fg(self.theme.colors.muted))
                }
            })
            .collect();

        let tabs_widget = Tabs::new(titles)
            .select(self.active_index)
            .divider("│")
            .style(Style::default().bg(self.theme.colors.background));

        tabs_widget.render(area, buf);
    }
}
