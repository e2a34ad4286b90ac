//! App-id input form for the manual install panel

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use flatdeck_app::state::InputState;

use crate::theme::styles;

const PLACEHOLDER: &str = "e.g. org.mozilla.firefox";

/// Single-line app-id input with a visible cursor.
///
/// When the value is wider than the field, the window scrolls so the
/// cursor stays visible.
pub struct InstallForm<'a> {
    input: &'a InputState,
    busy: bool,
}

impl<'a> InstallForm<'a> {
    pub fn new(input: &'a InputState, busy: bool) -> Self {
        Self { input, busy }
    }

    /// First visible char index such that the span from there to the
    /// cursor fits in `avail` columns.
    fn scroll_start(chars: &[char], cursor: usize, avail: usize) -> usize {
        let mut start = 0;
        loop {
            let width: usize = chars[start..cursor]
                .iter()
                .map(|c| c.width().unwrap_or(0))
                .sum();
            if width < avail || start >= cursor {
                return start;
            }
            start += 1;
        }
    }

    fn content_line(&self, avail: usize) -> Line<'_> {
        if self.input.value.is_empty() {
            return Line::from(vec![
                Span::styled(" ", styles::focused_selected()),
                Span::styled(PLACEHOLDER, styles::text_muted()),
            ]);
        }

        let chars: Vec<char> = self.input.value.chars().collect();
        let cursor = self.input.cursor.min(chars.len());
        let start = Self::scroll_start(&chars, cursor, avail.saturating_sub(1).max(1));

        let before: String = chars[start..cursor].iter().collect();
        let at_cursor = chars.get(cursor).copied().unwrap_or(' ').to_string();
        let after: String = chars.iter().skip(cursor + 1).collect();

        let cursor_style = if self.busy {
            styles::text_muted()
        } else {
            styles::focused_selected()
        };

        Line::from(vec![
            Span::styled(before, styles::text_primary()),
            Span::styled(at_cursor, cursor_style),
            Span::styled(after, styles::text_primary()),
        ])
    }
}

impl Widget for InstallForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(!self.busy)
            .title(Span::styled(" App ID ", styles::accent()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        Paragraph::new(self.content_line(inner.width as usize)).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn input_with(value: &str) -> InputState {
        let mut input = InputState::default();
        for c in value.chars() {
            input.insert(c);
        }
        input
    }

    fn render_to_string(form: InstallForm, width: u16) -> String {
        let backend = TestBackend::new(width, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| f.render_widget(form, f.area())).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_placeholder_when_empty() {
        let input = InputState::default();
        let content = render_to_string(InstallForm::new(&input, false), 50);
        assert!(content.contains(PLACEHOLDER));
    }

    #[test]
    fn test_value_replaces_placeholder() {
        let input = input_with("org.gnome.Maps");
        let content = render_to_string(InstallForm::new(&input, false), 50);
        assert!(content.contains("org.gnome.Maps"));
        assert!(!content.contains(PLACEHOLDER));
    }

    #[test]
    fn test_long_value_scrolls_to_keep_cursor_visible() {
        let input = input_with("org.verylongvendorname.SomeVeryLongApplicationName");
        // 12 columns of field: only the tail near the cursor should show
        let content = render_to_string(InstallForm::new(&input, false), 12);
        assert!(content.contains("Name"));
        assert!(!content.contains("org.verylong"));
    }

    #[test]
    fn test_scroll_start_keeps_cursor_in_window() {
        let chars: Vec<char> = "abcdefghij".chars().collect();
        assert_eq!(InstallForm::scroll_start(&chars, 3, 20), 0);
        assert_eq!(InstallForm::scroll_start(&chars, 10, 5), 6);
        // Cursor at zero never scrolls
        assert_eq!(InstallForm::scroll_start(&chars, 0, 1), 0);
    }
}
