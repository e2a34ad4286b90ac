//! Availability probing for the external flatpak tooling
//!
//! Checked once at startup and surfaced in the header. An absent binary is
//! a hint only; triggering a panel with a missing binary still takes the
//! generic spawn-failure path.

use std::path::PathBuf;

use flatdeck_core::prelude::*;

/// Cached availability of the flatpak binary
#[derive(Debug, Clone, Default)]
pub struct ToolAvailability {
    /// Whether the configured flatpak binary resolves on PATH
    pub flatpak: bool,

    /// Resolved path to the binary if found
    pub flatpak_path: Option<PathBuf>,
}

impl ToolAvailability {
    /// Check tool availability (run once at startup).
    ///
    /// The PATH walk is blocking filesystem work, so it runs on the
    /// blocking pool.
    pub async fn check(flatpak_bin: &str) -> Self {
        let bin = flatpak_bin.to_string();
        let resolved = tokio::task::spawn_blocking(move || which::which(&bin).ok())
            .await
            .unwrap_or_default();

        match &resolved {
            Some(path) => info!("Found flatpak at {}", path.display()),
            None => warn!("flatpak binary '{}' not found on PATH", flatpak_bin),
        }

        Self {
            flatpak: resolved.is_some(),
            flatpak_path: resolved,
        }
    }

    /// Get a user-friendly message when flatpak is unavailable
    pub fn unavailable_message(&self) -> Option<&'static str> {
        if self.flatpak {
            None
        } else {
            Some("flatpak not found on PATH. Run setup to install it.")
        }
    }
}
