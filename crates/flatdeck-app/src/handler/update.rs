//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;
use flatdeck_core::prelude::*;

use super::{command, keys, UpdateResult};

/// Process a message and update state.
/// Returns optional follow-up message and/or action.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => keys::handle_key(state, key),

        Message::Tick => {
            state.tick_spinner();
            UpdateResult::none()
        }

        Message::Command { panel, event } => command::handle_command_event(state, panel, event),

        Message::CommandSpawnFailed { panel, reason } => {
            command::handle_spawn_failed(state, panel, reason)
        }

        Message::ToolsChecked { tools } => {
            if let Some(message) = tools.unavailable_message() {
                info!("Tool probe: {}", message);
            }
            state.tools = Some(tools);
            UpdateResult::none()
        }
    }
}
