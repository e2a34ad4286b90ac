//! Semantic style builders for the flatdeck theme.

use flatdeck_core::{LineKind, PanelPhase};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

/// Braille spinner characters for busy indicators
pub const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Pick the spinner character for an animation frame
pub fn spinner_char(frame: u8) -> &'static str {
    SPINNER[frame as usize % SPINNER.len()]
}

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" - used for the selected panel tab and the input cursor
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette::STATUS_YELLOW))
        .style(Style::default().bg(palette::POPUP_BG))
}

// --- Console line styling ---

/// Style for one console line by kind
pub fn console_line(kind: LineKind) -> Style {
    match kind {
        LineKind::Output => Style::default().fg(palette::LINE_OUTPUT),
        LineKind::Notice => Style::default().fg(palette::LINE_NOTICE),
        LineKind::Success => Style::default()
            .fg(palette::LINE_SUCCESS)
            .add_modifier(Modifier::BOLD),
        LineKind::Failure => Style::default()
            .fg(palette::LINE_FAILURE)
            .add_modifier(Modifier::BOLD),
    }
}

// --- Phase indicator mapping ---

/// Phase indicator for panel headers.
///
/// Returns `(icon_char, label, Style)` for the given panel phase.
pub fn phase_indicator(phase: PanelPhase) -> (&'static str, &'static str, Style) {
    match phase {
        PanelPhase::Running => (
            "↻",
            "Working",
            Style::default()
                .fg(palette::STATUS_YELLOW)
                .add_modifier(Modifier::BOLD),
        ),
        PanelPhase::Idle => ("○", "Idle", Style::default().fg(palette::TEXT_MUTED)),
    }
}
