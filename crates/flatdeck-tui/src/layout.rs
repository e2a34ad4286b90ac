//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header area (title + panel tabs + tool status)
    pub header: Rect,

    /// Active panel content area
    pub content: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    // Header: top border + content row + bottom border
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(3),    // Panel content
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        content: chunks[1],
    }
}
