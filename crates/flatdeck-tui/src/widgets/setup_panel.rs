//! Environment setup panel summary: the two-step chain and its progress

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use flatdeck_app::config::Settings;
use flatdeck_app::state::{SetupPanel, SetupStep};

use crate::theme::styles;

/// Step list shown above the setup console.
///
/// Indicators: `○` pending, spinner while that step runs, `✓` once the
/// install step has handed off to the remote step.
pub struct SetupSummary<'a> {
    panel: &'a SetupPanel,
    settings: &'a Settings,
    spinner_frame: u8,
}

impl<'a> SetupSummary<'a> {
    pub fn new(panel: &'a SetupPanel, settings: &'a Settings, spinner_frame: u8) -> Self {
        Self {
            panel,
            settings,
            spinner_frame,
        }
    }

    fn step_indicator(&self, step: SetupStep) -> Span<'static> {
        let running = self.panel.phase.is_running();
        match (step, self.panel.step) {
            (_, Some(current)) if current == step && running => Span::styled(
                styles::spinner_char(self.spinner_frame).to_string(),
                styles::keybinding(),
            ),
            // The install step is done once the chain has moved past it
            (SetupStep::InstallingTool, Some(SetupStep::AddingRemote)) => Span::styled(
                "✓".to_string(),
                ratatui::style::Style::default().fg(crate::theme::palette::STATUS_GREEN),
            ),
            _ => Span::styled("○".to_string(), styles::text_muted()),
        }
    }

    fn lines(&self) -> Vec<Line<'_>> {
        let install_cmd = self
            .settings
            .setup_install_spec()
            .map(|spec| spec.to_string())
            .unwrap_or_else(|| "(not configured)".to_string());
        let remote_cmd = self.settings.remote_add_spec().to_string();

        vec![
            Line::from(Span::styled(
                "Install Flatpak and register the Flathub repository.",
                styles::text_secondary(),
            )),
            Line::default(),
            Line::from(vec![
                Span::raw("  "),
                self.step_indicator(SetupStep::InstallingTool),
                Span::raw(" 1. "),
                Span::styled(install_cmd, styles::text_primary()),
            ]),
            Line::from(vec![
                Span::raw("  "),
                self.step_indicator(SetupStep::AddingRemote),
                Span::raw(" 2. "),
                Span::styled(remote_cmd, styles::text_primary()),
            ]),
        ]
    }
}

impl Widget for SetupSummary<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(Span::styled(" Setup Environment ", styles::accent()));
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.lines()).render(inner, buf);
    }
}
