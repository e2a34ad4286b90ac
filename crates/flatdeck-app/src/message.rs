//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::state::PanelKind;
use flatdeck_core::CommandEvent;
use flatdeck_runner::ToolAvailability;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Command Runner Messages
    // ─────────────────────────────────────────────────────────
    /// Event from a running command, routed to the panel that started it
    Command {
        panel: PanelKind,
        event: CommandEvent,
    },

    /// A command could not be started at all (missing executable, etc.)
    CommandSpawnFailed { panel: PanelKind, reason: String },

    // ─────────────────────────────────────────────────────────
    // Startup Messages
    // ─────────────────────────────────────────────────────────
    /// Background PATH probe completed
    ToolsChecked { tools: ToolAvailability },
}
