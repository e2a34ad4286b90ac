//! Main header widget: title, panel tabs, and tool status

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Widget},
};

use flatdeck_app::{PanelKind, ToolAvailability};

use crate::theme::{palette, styles};

/// Top bar with the app title, the three panel tabs, and the flatpak
/// availability indicator.
pub struct MainHeader<'a> {
    active: PanelKind,
    tools: Option<&'a ToolAvailability>,
}

impl<'a> MainHeader<'a> {
    pub fn new(active: PanelKind, tools: Option<&'a ToolAvailability>) -> Self {
        Self { active, tools }
    }

    fn tab_titles() -> Vec<Line<'static>> {
        PanelKind::ALL
            .iter()
            .map(|panel| Line::from(format!(" {} ", panel.title())))
            .collect()
    }

    /// Right-aligned tool status: probing, found, or missing
    fn status_line(&self) -> Line<'static> {
        match self.tools {
            None => Line::from(Span::styled("checking flatpak…", styles::text_muted())),
            Some(tools) if tools.flatpak => Line::from(vec![
                Span::styled("flatpak ", styles::text_muted()),
                Span::styled("✓", ratatui::style::Style::default().fg(palette::STATUS_GREEN)),
            ]),
            Some(_) => Line::from(Span::styled(
                "flatpak missing",
                ratatui::style::Style::default().fg(palette::STATUS_YELLOW),
            )),
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(Span::styled(
            concat!(" flatdeck v", env!("CARGO_PKG_VERSION"), " "),
            styles::accent_bold(),
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let status = self.status_line();
        let status_width = status.width() as u16 + 2;
        let chunks =
            Layout::horizontal([Constraint::Min(10), Constraint::Length(status_width)])
                .split(inner);

        let tabs = Tabs::new(Self::tab_titles())
            .select(self.active.index())
            .style(styles::text_secondary())
            .highlight_style(styles::focused_selected())
            .divider("│");

        // Left padding for the tabs row
        let tabs_area = Rect {
            x: chunks[0].x + 1,
            y: chunks[0].y,
            width: chunks[0].width.saturating_sub(1),
            height: chunks[0].height,
        };
        tabs.render(tabs_area, buf);

        Paragraph::new(status)
            .right_aligned()
            .render(chunks[1], buf);
    }
}
