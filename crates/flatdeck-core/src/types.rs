//! Domain types for panel state and console output

use chrono::{DateTime, Local};

/// Panel state machine phase.
///
/// Every panel that can run a command cycles `Idle -> Running -> Idle`;
/// its trigger is refused while `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelPhase {
    #[default]
    Idle,
    Running,
}

impl PanelPhase {
    pub fn is_running(&self) -> bool {
        matches!(self, PanelPhase::Running)
    }
}

/// How a console line should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Verbatim process output
    Output,
    /// Informational text produced by flatdeck itself (command echo,
    /// progress between setup steps)
    Notice,
    /// Success summary
    Success,
    /// Diagnostic or failure summary
    Failure,
}

/// One line in a panel's console buffer
#[derive(Debug, Clone)]
pub struct ConsoleLine {
    pub kind: LineKind,
    pub text: String,
    pub timestamp: DateTime<Local>,
}

impl ConsoleLine {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            timestamp: Local::now(),
        }
    }

    /// Verbatim process output line
    pub fn output(text: impl Into<String>) -> Self {
        Self::new(LineKind::Output, text)
    }

    /// Informational line produced by the shell itself
    pub fn notice(text: impl Into<String>) -> Self {
        Self::new(LineKind::Notice, text)
    }

    /// Success summary line
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(LineKind::Success, text)
    }

    /// Diagnostic or failure summary line
    pub fn failure(text: impl Into<String>) -> Self {
        Self::new(LineKind::Failure, text)
    }
}
