//! Blocking warning modal

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use flatdeck_app::state::Warning;

use crate::theme::styles;

/// Center a fixed-size rect within an area, clamped to the area dimensions.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Modal shown for input errors. All keys are swallowed by the handler
/// while this is visible; Enter or Esc dismisses it.
pub struct WarningModal<'a> {
    warning: &'a Warning,
}

impl<'a> WarningModal<'a> {
    pub fn new(warning: &'a Warning) -> Self {
        Self { warning }
    }
}

impl Widget for WarningModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect(46, 7, area);
        Clear.render(modal_area, buf);

        let title = format!(" {} ", self.warning.title);
        let block = styles::modal_block(&title);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                self.warning.message.clone(),
                styles::text_primary(),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("Enter", styles::keybinding()),
                Span::styled(" to dismiss", styles::text_muted()),
            ]),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
