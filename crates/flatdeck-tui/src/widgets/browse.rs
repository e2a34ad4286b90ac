//! Browse panel: catalog address and system-browser hand-off

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Static catalog panel. Browsing itself happens in the system browser;
/// this panel only shows the address and the hand-off key.
pub struct BrowseView<'a> {
    url: &'a str,
}

impl<'a> BrowseView<'a> {
    pub fn new(url: &'a str) -> Self {
        Self { url }
    }
}

impl Widget for BrowseView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(Span::styled(" Browse Flathub ", styles::accent()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        // Vertically center the short message block
        let lines = vec![
            Line::from(Span::styled("Software catalog", styles::text_secondary())),
            Line::default(),
            Line::from(Span::styled(self.url.to_string(), styles::accent_bold())),
            Line::default(),
            Line::from(vec![
                Span::styled("Enter", styles::keybinding()),
                Span::styled(" opens the catalog in your browser", styles::text_muted()),
            ]),
            Line::from(vec![
                Span::styled(
                    "Pick an app ID there, then install it from the ",
                    styles::text_muted(),
                ),
                Span::styled("Manual Install", styles::text_secondary()),
                Span::styled(" panel", styles::text_muted()),
            ]),
        ];

        let top_pad = inner.height.saturating_sub(lines.len() as u16) / 2;
        let content_area = Rect {
            x: inner.x,
            y: inner.y + top_pad,
            width: inner.width,
            height: inner.height.saturating_sub(top_pad),
        };

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(content_area, buf);
    }
}
