//! Command runner event handling
//!
//! Routes line and exit events to the panel that owns the runner, appends
//! summary lines, and drives the setup panel's two-step chain: the remote
//! is registered only when the tool install step exited successfully.

use crate::state::{AppState, PanelKind, SetupStep};
use flatdeck_core::prelude::*;
use flatdeck_core::{CommandEvent, ConsoleLine, PanelPhase};

use super::{UpdateAction, UpdateResult};

pub(crate) fn handle_command_event(
    state: &mut AppState,
    panel: PanelKind,
    event: CommandEvent,
) -> UpdateResult {
    match panel {
        PanelKind::Install => handle_install_event(state, event),
        PanelKind::Setup => handle_setup_event(state, event),
        PanelKind::Browse => {
            // The browse panel owns no runner
            warn!("Dropping command event for browse panel: {:?}", event);
            UpdateResult::none()
        }
    }
}

/// A command could not be started: report one diagnostic line, then take
/// the ordinary failure path for the panel.
pub(crate) fn handle_spawn_failed(
    state: &mut AppState,
    panel: PanelKind,
    reason: String,
) -> UpdateResult {
    let console = match panel {
        PanelKind::Install => &mut state.install.console,
        PanelKind::Setup => &mut state.setup.console,
        PanelKind::Browse => {
            warn!("Dropping spawn failure for browse panel: {}", reason);
            return UpdateResult::none();
        }
    };
    console.push(ConsoleLine::failure(format!(
        "Error running command: {}",
        reason
    )));

    handle_command_event(state, panel, CommandEvent::Exited { code: None })
}

// ─────────────────────────────────────────────────────────────────
// Manual install panel
// ─────────────────────────────────────────────────────────────────

fn handle_install_event(state: &mut AppState, event: CommandEvent) -> UpdateResult {
    match event {
        CommandEvent::Line(text) => {
            state.install.console.push(ConsoleLine::output(text));
        }
        CommandEvent::Exited { code } => {
            debug!("Install command exited with code {:?}", code);
            state.install.phase = PanelPhase::Idle;
            if code == Some(0) {
                state
                    .install
                    .console
                    .push(ConsoleLine::success("Installation completed successfully."));
            } else {
                state.install.console.push(ConsoleLine::failure(
                    "Installation failed. See above for details.",
                ));
            }
        }
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────
// Environment setup panel
// ─────────────────────────────────────────────────────────────────

fn handle_setup_event(state: &mut AppState, event: CommandEvent) -> UpdateResult {
    match event {
        CommandEvent::Line(text) => {
            state.setup.console.push(ConsoleLine::output(text));
            UpdateResult::none()
        }
        CommandEvent::Exited { code } => match state.setup.step {
            Some(SetupStep::InstallingTool) => handle_install_step_exit(state, code),
            Some(SetupStep::AddingRemote) => handle_remote_step_exit(state, code),
            None => {
                warn!("Setup exit event with no step in flight (code {:?})", code);
                state.setup.phase = PanelPhase::Idle;
                UpdateResult::none()
            }
        },
    }
}

fn handle_install_step_exit(state: &mut AppState, code: Option<i32>) -> UpdateResult {
    if code != Some(0) {
        debug!("Setup install step failed with code {:?}", code);
        state.setup.phase = PanelPhase::Idle;
        state.setup.step = None;
        state
            .setup
            .console
            .push(ConsoleLine::failure("Failed to install Flatpak."));
        return UpdateResult::none();
    }

    // Tool installed; chain straight into registering the remote
    state
        .setup
        .console
        .push(ConsoleLine::notice("Flatpak installed. Adding Flathub repo..."));
    let spec = state.settings.remote_add_spec();
    state.setup.console.push(ConsoleLine::notice(format!("$ {}", spec)));
    state.setup.step = Some(SetupStep::AddingRemote);

    UpdateResult::action(UpdateAction::StartCommand {
        panel: PanelKind::Setup,
        spec,
    })
}

fn handle_remote_step_exit(state: &mut AppState, code: Option<i32>) -> UpdateResult {
    state.setup.phase = PanelPhase::Idle;
    state.setup.step = None;
    if code == Some(0) {
        state
            .setup
            .console
            .push(ConsoleLine::success("Flathub repository added successfully."));
    } else {
        state
            .setup
            .console
            .push(ConsoleLine::failure("Failed to add Flathub repository."));
    }
    UpdateResult::none()
}
