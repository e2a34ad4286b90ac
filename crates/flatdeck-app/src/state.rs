//! Application state (Model in TEA pattern)

use crate::config::Settings;
use flatdeck_core::{ConsoleLine, PanelPhase};
use flatdeck_runner::ToolAvailability;

/// The three panels of the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelKind {
    /// Catalog browsing (hands the catalog URL to the system browser)
    #[default]
    Browse,
    /// Manual install by app identifier
    Install,
    /// Environment setup (install flatpak, register the remote)
    Setup,
}

impl PanelKind {
    pub const ALL: [PanelKind; 3] = [PanelKind::Browse, PanelKind::Install, PanelKind::Setup];

    /// Tab title shown in the header
    pub fn title(&self) -> &'static str {
        match self {
            PanelKind::Browse => "Browse Flathub",
            PanelKind::Install => "Manual Install",
            PanelKind::Setup => "Setup",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            PanelKind::Browse => 0,
            PanelKind::Install => 1,
            PanelKind::Setup => 2,
        }
    }

    pub fn next(&self) -> PanelKind {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> PanelKind {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Single-line text input with a char-indexed cursor
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub value: String,
    /// Cursor position in chars (0..=value.chars().count())
    pub cursor: usize,
}

impl InputState {
    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index();
        self.value.insert(idx, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index();
            self.value.remove(idx);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let idx = self.byte_index();
            self.value.remove(idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }
}

/// Append-only console buffer for one panel
#[derive(Debug, Clone, Default)]
pub struct Console {
    lines: Vec<ConsoleLine>,
}

impl Console {
    pub fn push(&mut self, line: ConsoleLine) {
        self.lines.push(line);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[ConsoleLine] {
        &self.lines
    }

    pub fn last(&self) -> Option<&ConsoleLine> {
        self.lines.last()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Second step of the environment setup chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStep {
    /// Running the privileged system install of flatpak
    InstallingTool,
    /// Registering the remote (only entered when the install step succeeded)
    AddingRemote,
}

/// Manual install panel state
#[derive(Debug, Clone, Default)]
pub struct InstallPanel {
    pub input: InputState,
    pub console: Console,
    pub phase: PanelPhase,
}

/// Environment setup panel state
#[derive(Debug, Clone, Default)]
pub struct SetupPanel {
    pub console: Console,
    pub phase: PanelPhase,
    /// Which step of the chain is running; `None` while idle
    pub step: Option<SetupStep>,
}

/// Blocking warning modal content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub title: String,
    pub message: String,
}

impl Warning {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Top-level application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Settings,
    pub active_panel: PanelKind,
    pub install: InstallPanel,
    pub setup: SetupPanel,
    /// PATH probe result; `None` until the startup check completes
    pub tools: Option<ToolAvailability>,
    /// Blocking warning modal; captures all input until dismissed
    pub warning: Option<Warning>,
    /// Shared spinner animation frame, advanced on every tick
    pub spinner_frame: u8,
    quit: bool,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            active_panel: PanelKind::default(),
            install: InstallPanel::default(),
            setup: SetupPanel::default(),
            tools: None,
            warning: None,
            spinner_frame: 0,
            quit: false,
        }
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn tick_spinner(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    /// Whether any panel currently has a command running
    pub fn any_panel_busy(&self) -> bool {
        self.install.phase.is_running() || self.setup.phase.is_running()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
