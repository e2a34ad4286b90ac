//! Main render/view function (View in TEA pattern)

use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};
use ratatui::Frame;

use flatdeck_app::state::{AppState, PanelKind};

use crate::layout::{self as screen, ScreenAreas};
use crate::theme::{palette, styles};
use crate::widgets;

/// Render the complete UI (View function in TEA)
///
/// This is a pure rendering function - it does not modify state.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with the deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = screen::create(area);

    let header = widgets::MainHeader::new(state.active_panel, state.tools.as_ref());
    frame.render_widget(header, areas.header);

    match state.active_panel {
        PanelKind::Browse => render_browse(frame, state, &areas),
        PanelKind::Install => render_install(frame, state, &areas),
        PanelKind::Setup => render_setup(frame, state, &areas),
    }

    // Blocking warning modal on top of everything
    if let Some(ref warning) = state.warning {
        frame.render_widget(widgets::WarningModal::new(warning), area);
    }
}

fn render_browse(frame: &mut Frame, state: &AppState, areas: &ScreenAreas) {
    frame.render_widget(
        widgets::BrowseView::new(&state.settings.catalog.url),
        areas.content,
    );
}

fn render_install(frame: &mut Frame, state: &AppState, areas: &ScreenAreas) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // App-id form
        Constraint::Length(1), // Key hints
        Constraint::Min(3),    // Output console
    ])
    .split(areas.content);

    let busy = state.install.phase.is_running();
    frame.render_widget(widgets::InstallForm::new(&state.install.input, busy), chunks[0]);

    frame.render_widget(install_hints(busy), chunks[1]);

    let console = widgets::ConsoleView::new(state.install.console.lines(), "Installation Output")
        .phase(state.install.phase, state.spinner_frame);
    frame.render_widget(console, chunks[2]);
}

fn install_hints(busy: bool) -> impl Widget {
    let spans = if busy {
        vec![Span::styled(
            " Installing… the form unlocks when the command finishes",
            styles::text_muted(),
        )]
    } else {
        vec![
            Span::styled(" Enter", styles::keybinding()),
            Span::styled(" install  ", styles::text_muted()),
            Span::styled("Esc", styles::keybinding()),
            Span::styled(" clear  ", styles::text_muted()),
            Span::styled("Tab", styles::keybinding()),
            Span::styled(" switch panel  ", styles::text_muted()),
            Span::styled("Ctrl+C", styles::keybinding()),
            Span::styled(" quit", styles::text_muted()),
        ]
    };
    Paragraph::new(Line::from(spans))
}

fn render_setup(frame: &mut Frame, state: &AppState, areas: &ScreenAreas) {
    let chunks = Layout::vertical([
        Constraint::Length(6), // Step summary
        Constraint::Length(1), // Key hints
        Constraint::Min(3),    // Output console
    ])
    .split(areas.content);

    frame.render_widget(
        widgets::SetupSummary::new(&state.setup, &state.settings, state.spinner_frame),
        chunks[0],
    );

    frame.render_widget(setup_hints(state.setup.phase.is_running()), chunks[1]);

    let console = widgets::ConsoleView::new(state.setup.console.lines(), "Setup Output")
        .phase(state.setup.phase, state.spinner_frame);
    frame.render_widget(console, chunks[2]);
}

fn setup_hints(busy: bool) -> impl Widget {
    let spans = if busy {
        vec![Span::styled(
            " Running setup… this may ask for your password in the console",
            styles::text_muted(),
        )]
    } else {
        vec![
            Span::styled(" Enter", styles::keybinding()),
            Span::styled(" run setup  ", styles::text_muted()),
            Span::styled("Tab", styles::keybinding()),
            Span::styled(" switch panel  ", styles::text_muted()),
            Span::styled("q", styles::keybinding()),
            Span::styled(" quit", styles::text_muted()),
        ]
    };
    Paragraph::new(Line::from(spans))
}
