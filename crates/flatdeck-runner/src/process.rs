//! Child process execution and output streaming

use std::process::Stdio;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::{Child, Command};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::command::CommandSpec;
use flatdeck_core::events::CommandEvent;
use flatdeck_core::prelude::*;

/// Runs one external command and streams its output.
///
/// The `Child` handle is moved into a dedicated `wait_for_exit` background
/// task that calls `child.wait()`. This ensures the real exit code is
/// captured and emitted as `CommandEvent::Exited { code: Some(N) }` rather
/// than always `None`. The wait task also joins both reader tasks before
/// emitting the exit event, so every captured line reaches the channel
/// ahead of the terminal notification.
///
/// There is no stdin plumbing and no cancellation: once started, the
/// command runs to completion. `kill_on_drop` reaps the child if the whole
/// application exits first.
pub struct CommandRunner {
    /// Process ID for logging
    pid: Option<u32>,
    /// Set to `true` by the wait task once the child has exited.
    /// Allows synchronous `has_exited()` / `is_running()` checks.
    exited: Arc<AtomicBool>,
}

impl CommandRunner {
    /// Spawn the command described by `spec`.
    ///
    /// Events are sent to `event_tx` for processing by the TUI event loop.
    /// A spawn failure is returned as `Err`; no event is emitted in that
    /// case and the caller is responsible for reporting it.
    pub fn spawn(spec: &CommandSpec, event_tx: mpsc::Sender<CommandEvent>) -> Result<Self> {
        info!("Spawning command: {}", spec);

        let mut child = Command::new(&spec.program)
            .args(&spec.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| Error::CommandSpawn {
                reason: e.to_string(),
            })?;

        let pid = child.id();
        info!("Command started with PID: {:?}", pid);

        let stdout = child.stdout.take().expect("stdout was configured");
        let stdout_task = tokio::spawn(Self::line_reader(stdout, event_tx.clone(), "stdout"));

        let stderr = child.stderr.take().expect("stderr was configured");
        let stderr_task = tokio::spawn(Self::line_reader(stderr, event_tx.clone(), "stderr"));

        let exited = Arc::new(AtomicBool::new(false));

        // The wait task takes ownership of `child` and both reader handles.
        tokio::spawn(Self::wait_for_exit(
            child,
            [stdout_task, stderr_task],
            event_tx,
            Arc::clone(&exited),
        ));

        Ok(Self { pid, exited })
    }

    /// Read lines from one output stream and send them as `CommandEvent::Line`.
    ///
    /// A read error produces one diagnostic line and ends the reader; the
    /// wait task still emits the terminal event afterwards.
    async fn line_reader<R>(stream: R, tx: mpsc::Sender<CommandEvent>, name: &'static str)
    where
        R: AsyncRead + Unpin,
    {
        let mut reader = BufReader::new(stream).lines();

        loop {
            match reader.next_line().await {
                Ok(Some(line)) => {
                    trace!("{}: {}", name, line);
                    if tx.send(CommandEvent::Line(line)).await.is_err() {
                        debug!("{} channel closed", name);
                        return;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    warn!("{} read error: {}", name, e);
                    let _ = tx
                        .send(CommandEvent::Line(format!(
                            "Error reading command output: {}",
                            e
                        )))
                        .await;
                    break;
                }
            }
        }

        debug!("{} reader finished", name);
    }

    /// Background task: owns `child`, waits for it to exit, emits the single
    /// `CommandEvent::Exited` with the real exit code.
    ///
    /// Readers hit EOF when the child's pipes close; they are joined first so
    /// line events cannot trail the exit event.
    async fn wait_for_exit(
        mut child: Child,
        readers: [JoinHandle<()>; 2],
        event_tx: mpsc::Sender<CommandEvent>,
        exited: Arc<AtomicBool>,
    ) {
        let code = match child.wait().await {
            Ok(status) => {
                info!("Command exited with status: {:?}", status);
                status.code()
            }
            Err(e) => {
                error!("Error waiting for command: {}", e);
                None
            }
        };

        for reader in readers {
            let _ = reader.await;
        }

        exited.store(true, Ordering::Release);
        debug!("Sending CommandEvent::Exited {{ code: {:?} }}", code);
        let _ = event_tx.send(CommandEvent::Exited { code }).await;
    }

    /// Check if the process has already exited.
    ///
    /// Non-blocking, synchronous check backed by an atomic flag set by the
    /// `wait_for_exit` task.
    pub fn has_exited(&self) -> bool {
        self.exited.load(Ordering::Acquire)
    }

    /// Check if the process is still running.
    pub fn is_running(&self) -> bool {
        !self.has_exited()
    }

    /// Get the process ID
    pub fn id(&self) -> Option<u32> {
        self.pid
    }
}
