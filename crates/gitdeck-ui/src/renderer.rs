//! Frame layout for the dashboard shell
//!
//! Divides the terminal into the four fixed regions of the dashboard:
//! header, tab bar, content, and status bar.

use ratatui::prelude::*;

/// Main application layout areas
///
/// # Layout Structure
///
/// ```text
/// +---------------------------------+
/// | Header (1 line)                 |
/// +---------------------------------+
/// | Tab Bar (1 line)                |
/// +---------------------------------+
/// |                                 |
/// | Content Area                    |
/// | (remaining space)               |
/// |                                 |
/// +---------------------------------+
/// | Status Bar (1 line)             |
/// +---------------------------------+
/// ```
///
/// # Example
///
/// ```
/// use gitdeck_ui::renderer::FrameLayout;
/// use ratatui::prelude::Rect;
///
/// let layout = FrameLayout::new(Rect::new(0, 0, 80, 24));
/// assert_eq!(layout.header.height, 1);
/// assert_eq!(layout.tab_bar.height, 1);
/// assert_eq!(layout.status_bar.height, 1);
/// assert_eq!(layout.content.height, 21);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameLayout {
    /// Area for the header line (app title, repository, user)
    pub header: Rect,
    /// Area for the tab bar
    pub tab_bar: Rect,
    /// Area for the main content
    pub content: Rect,
    /// Area for the status bar (bottom)
    pub status_bar: Rect,
}

impl FrameLayout {
    /// Calculates layout areas from the total terminal area.
    ///
    /// Terminals shorter than four lines degrade gracefully: decorations
    /// are dropped and the content keeps whatever remains.
    #[must_use]
    pub fn new(area: Rect) -> Self {
        if area.height < 4 {
            // Minimal space: keep the tab bar as orientation, give the
            // rest to content
            let tab_bar = Rect::new(area.x, area.y, area.width, 1.min(area.height));
            let content = Rect::new(
                area.x,
                area.y + tab_bar.height,
                area.width,
                area.height.saturating_sub(tab_bar.height),
            );
            return FrameLayout {
                header: Rect::default(),
                tab_bar,
                content,
                status_bar: Rect::default(),
            };
        }

        let header = Rect::new(area.x, area.y, area.width, 1);
        let tab_bar = Rect::new(area.x, area.y + 1, area.width, 1);
        let status_bar = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
        let content = Rect::new(
            area.x,
            area.y + 2,
            area.width,
            area.height.saturating_sub(3),
        );

        FrameLayout {
            header,
            tab_bar,
            content,
            status_bar,
        }
    }

    /// Total width of the layout.
    #[must_use]
    pub fn width(&self) -> u16 {
        self.content.width
    }

    /// Total height across all regions.
    #[must_use]
    pub fn height(&self) -> u16 {
        self.header.height + self.tab_bar.height + self.content.height + self.status_bar.height
    }
}
