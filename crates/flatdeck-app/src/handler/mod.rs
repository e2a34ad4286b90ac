//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per panel, plus the warning modal
//! - `command`: Command runner event handling and the setup chain

pub(crate) mod command;
pub(crate) mod keys;
pub(crate) mod update;

use crate::message::Message;
use crate::state::PanelKind;
use flatdeck_runner::CommandSpec;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Spawn a command runner for a panel
    StartCommand { panel: PanelKind, spec: CommandSpec },

    /// Open a URL in the system browser (fire-and-forget OS call)
    OpenUrl { url: String },

    /// Probe PATH for the flatpak binary (runs at startup)
    CheckTools { flatpak_bin: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
