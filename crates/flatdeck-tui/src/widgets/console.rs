//! Console view widget: the tail of a panel's output buffer

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use flatdeck_core::{ConsoleLine, PanelPhase};

use crate::theme::styles;

/// Scrolling output console for one panel.
///
/// Always follows the tail: the newest lines are visible, older ones fall
/// off the top. The block title carries a spinner while the panel's
/// command is running.
pub struct ConsoleView<'a> {
    lines: &'a [ConsoleLine],
    title: &'a str,
    phase: PanelPhase,
    spinner_frame: u8,
}

impl<'a> ConsoleView<'a> {
    pub fn new(lines: &'a [ConsoleLine], title: &'a str) -> Self {
        Self {
            lines,
            title,
            phase: PanelPhase::Idle,
            spinner_frame: 0,
        }
    }

    pub fn phase(mut self, phase: PanelPhase, spinner_frame: u8) -> Self {
        self.phase = phase;
        self.spinner_frame = spinner_frame;
        self
    }

    fn title_line(&self) -> Line<'_> {
        let mut spans = vec![Span::styled(
            format!(" {} ", self.title),
            styles::text_secondary(),
        )];
        if self.phase.is_running() {
            spans.push(Span::styled(
                format!("{} ", styles::spinner_char(self.spinner_frame)),
                styles::keybinding(),
            ));
        }
        Line::from(spans)
    }

    fn render_line(line: &ConsoleLine) -> Line<'_> {
        Line::from(vec![
            Span::styled(
                line.timestamp.format("%H:%M:%S ").to_string(),
                ratatui::style::Style::default().fg(crate::theme::palette::LINE_TIMESTAMP),
            ),
            Span::styled(line.text.as_str(), styles::console_line(line.kind)),
        ])
    }
}

impl Widget for ConsoleView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.phase.is_running()).title(self.title_line());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        // Tail the buffer: show the newest lines that fit
        let visible = inner.height as usize;
        let start = self.lines.len().saturating_sub(visible);
        let text: Vec<Line> = self.lines[start..].iter().map(Self::render_line).collect();

        Paragraph::new(text).render(inner, buf);
    }
}
