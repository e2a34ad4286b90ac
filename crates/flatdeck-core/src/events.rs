//! Command event definitions
//!
//! A running external command emits zero or more [`CommandEvent::Line`]
//! notifications, in the order the process produced them, followed by
//! exactly one [`CommandEvent::Exited`].

/// Events from a spawned external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandEvent {
    /// One line of combined stdout/stderr output
    Line(String),

    /// The process has exited. `code` is `None` when the process was
    /// terminated by a signal or could not be awaited.
    Exited { code: Option<i32> },
}

impl CommandEvent {
    /// Whether this is a terminal event
    pub fn is_terminal(&self) -> bool {
        matches!(self, CommandEvent::Exited { .. })
    }

    /// Whether this event reports a successful exit (code zero)
    pub fn is_success(&self) -> bool {
        matches!(self, CommandEvent::Exited { code: Some(0) })
    }
}
