//! Main TUI runner - entry point and event loop

use tokio::sync::mpsc;

use flatdeck_app::config::Settings;
use flatdeck_app::message::Message;
use flatdeck_app::state::AppState;
use flatdeck_app::{actions, process_message, signals, UpdateAction};
use flatdeck_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI application with the given settings
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // Initialize terminal
    let mut term = ratatui::init();

    let mut state = AppState::new(settings);

    // Unified message channel: runners, signal handler, and the tool probe
    // all report through it
    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(256);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(msg_tx.clone());

    // Kick off the PATH probe for the configured flatpak binary
    actions::handle_action(
        UpdateAction::CheckTools {
            flatpak_bin: state.settings.flatpak.bin.clone(),
        },
        msg_tx.clone(),
    );

    info!("flatdeck TUI started");

    let result = run_loop(&mut term, &mut state, &mut msg_rx, &msg_tx);

    // Restore terminal
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    msg_rx: &mut mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // Process queued messages from background tasks (non-blocking)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, msg_tx);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events (blocks up to the 50ms poll timeout)
        if let Some(message) = event::poll()? {
            process_message(state, message, msg_tx);
        }
    }

    info!("flatdeck TUI exiting");
    Ok(())
}
