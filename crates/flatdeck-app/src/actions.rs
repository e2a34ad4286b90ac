//! Side-effect dispatcher for update actions
//!
//! `update()` stays pure; everything that touches the OS happens here.
//! Each started command gets its own event channel plus a forwarding task
//! that rewraps runner events as `Message::Command` for the UI loop, so
//! independent panels can run commands concurrently without sharing state.

use tokio::sync::mpsc;

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::state::PanelKind;
use flatdeck_core::prelude::*;
use flatdeck_core::CommandEvent;
use flatdeck_runner::{CommandRunner, CommandSpec, ToolAvailability};

/// Perform one action requested by the update function
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>) {
    match action {
        UpdateAction::StartCommand { panel, spec } => start_command(panel, spec, msg_tx),
        UpdateAction::OpenUrl { url } => open_url(&url),
        UpdateAction::CheckTools { flatpak_bin } => check_tools(flatpak_bin, msg_tx),
    }
}

/// Spawn a command runner for a panel and forward its events to the UI loop
fn start_command(panel: PanelKind, spec: CommandSpec, msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let (event_tx, mut event_rx) = mpsc::channel::<CommandEvent>(256);

        match CommandRunner::spawn(&spec, event_tx) {
            Ok(runner) => {
                info!(
                    "Command started for {:?} panel (PID: {:?})",
                    panel,
                    runner.id()
                );

                while let Some(event) = event_rx.recv().await {
                    let done = event.is_terminal();
                    if msg_tx
                        .send(Message::Command { panel, event })
                        .await
                        .is_err()
                    {
                        // Main loop closed; nothing left to report to
                        break;
                    }
                    if done {
                        break;
                    }
                }
            }
            Err(e) => {
                warn!("Failed to spawn '{}': {}", spec, e);
                let reason = match e {
                    Error::CommandSpawn { reason } => reason,
                    other => other.to_string(),
                };
                let _ = msg_tx
                    .send(Message::CommandSpawnFailed { panel, reason })
                    .await;
            }
        }
    });
}

/// Open a URL in the system browser. Fire-and-forget OS call; failures are
/// logged and otherwise ignored.
fn open_url(url: &str) {
    let mut command = opener_command(url);
    match command
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .spawn()
    {
        Ok(_) => info!("Opened {} in system browser", url),
        Err(e) => warn!("Failed to open {}: {}", url, e),
    }
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> tokio::process::Command {
    let mut cmd = tokio::process::Command::new("open");
    cmd.arg(url);
    cmd
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> tokio::process::Command {
    let mut cmd = tokio::process::Command::new("cmd");
    cmd.args(["/C", "start", "", url]);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(url: &str) -> tokio::process::Command {
    let mut cmd = tokio::process::Command::new("xdg-open");
    cmd.arg(url);
    cmd
}

/// Probe PATH for the flatpak binary and report back
fn check_tools(flatpak_bin: String, msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let tools = ToolAvailability::check(&flatpak_bin).await;
        let _ = msg_tx.send(Message::ToolsChecked { tools }).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_start_command_forwards_lines_then_exit() {
        let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(64);
        let spec = CommandSpec::new("sh", ["-c", "echo hello; exit 3"]);

        start_command(PanelKind::Install, spec, msg_tx);

        let mut lines = Vec::new();
        let mut exit_code = None;
        for _ in 0..50 {
            match tokio::time::timeout(Duration::from_millis(200), msg_rx.recv()).await {
                Ok(Some(Message::Command { panel, event })) => {
                    assert_eq!(panel, PanelKind::Install);
                    match event {
                        CommandEvent::Line(text) => lines.push(text),
                        CommandEvent::Exited { code } => {
                            exit_code = Some(code);
                            break;
                        }
                    }
                }
                Ok(Some(other)) => panic!("unexpected message {:?}", other),
                _ => break,
            }
        }

        assert_eq!(lines, ["hello"]);
        assert_eq!(exit_code, Some(Some(3)));
    }

    #[tokio::test]
    async fn test_start_command_reports_spawn_failure() {
        let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(16);
        let spec = CommandSpec::new("definitely-not-a-real-binary-xyz", Vec::<String>::new());

        start_command(PanelKind::Setup, spec, msg_tx);

        match tokio::time::timeout(Duration::from_millis(500), msg_rx.recv()).await {
            Ok(Some(Message::CommandSpawnFailed { panel, reason })) => {
                assert_eq!(panel, PanelKind::Setup);
                assert!(!reason.is_empty());
            }
            other => panic!("expected CommandSpawnFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_check_tools_reports_back() {
        let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(16);
        check_tools("sh".to_string(), msg_tx);

        match tokio::time::timeout(Duration::from_millis(500), msg_rx.recv()).await {
            Ok(Some(Message::ToolsChecked { tools })) => assert!(tools.flatpak),
            other => panic!("expected ToolsChecked, got {:?}", other),
        }
    }
}
