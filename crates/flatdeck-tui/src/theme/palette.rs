//! Color palette for the flatdeck theme.
//!
//! Named terminal colors only, so the theme follows the user's terminal
//! scheme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const POPUP_BG: Color = Color::DarkGray; // Modal/popup backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan; // Primary accent
pub const CONTRAST_FG: Color = Color::Black; // Foreground on accent backgrounds

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Success
pub const STATUS_RED: Color = Color::Red; // Failure
pub const STATUS_YELLOW: Color = Color::Yellow; // Busy/warnings, key hints

// --- Console line colors ---
pub const LINE_OUTPUT: Color = Color::White;
pub const LINE_NOTICE: Color = Color::Cyan;
pub const LINE_SUCCESS: Color = Color::Green;
pub const LINE_FAILURE: Color = Color::Red;
pub const LINE_TIMESTAMP: Color = Color::DarkGray;
