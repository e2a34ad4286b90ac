//! Key event handlers per panel
//!
//! The warning modal is strictly blocking: while it is shown, every key is
//! consumed and only a dismissal key closes it. Panel triggers are refused
//! while that panel's command is running; switching panels never interrupts
//! a running command.

use crate::input_key::InputKey;
use crate::state::{AppState, PanelKind, SetupStep, Warning};
use flatdeck_core::{ConsoleLine, PanelPhase};

use super::{UpdateAction, UpdateResult};

pub(crate) fn handle_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    // Blocking warning modal captures everything until dismissed.
    // Ctrl+C still quits: in raw mode it arrives as a key, not a signal.
    if state.warning.is_some() {
        match key {
            InputKey::CharCtrl('c') => state.request_quit(),
            InputKey::Enter | InputKey::Esc => state.warning = None,
            _ => {}
        }
        return UpdateResult::none();
    }

    match key {
        InputKey::CharCtrl('c') => {
            state.request_quit();
            UpdateResult::none()
        }
        InputKey::Tab => {
            state.active_panel = state.active_panel.next();
            UpdateResult::none()
        }
        InputKey::BackTab => {
            state.active_panel = state.active_panel.prev();
            UpdateResult::none()
        }
        key => match state.active_panel {
            PanelKind::Browse => handle_browse_key(state, key),
            PanelKind::Install => handle_install_key(state, key),
            PanelKind::Setup => handle_setup_key(state, key),
        },
    }
}

// ─────────────────────────────────────────────────────────────────
// Browse panel
// ─────────────────────────────────────────────────────────────────

fn handle_browse_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    match key {
        InputKey::Char('q') => {
            state.request_quit();
            UpdateResult::none()
        }
        InputKey::Enter | InputKey::Char('o') => UpdateResult::action(UpdateAction::OpenUrl {
            url: state.settings.catalog.url.clone(),
        }),
        _ => UpdateResult::none(),
    }
}

// ─────────────────────────────────────────────────────────────────
// Manual install panel
// ─────────────────────────────────────────────────────────────────

fn handle_install_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    match key {
        InputKey::Enter => trigger_install(state),
        InputKey::Char(c) => {
            state.install.input.insert(c);
            UpdateResult::none()
        }
        InputKey::Backspace => {
            state.install.input.backspace();
            UpdateResult::none()
        }
        InputKey::Delete => {
            state.install.input.delete();
            UpdateResult::none()
        }
        InputKey::Left => {
            state.install.input.move_left();
            UpdateResult::none()
        }
        InputKey::Right => {
            state.install.input.move_right();
            UpdateResult::none()
        }
        InputKey::Home => {
            state.install.input.move_home();
            UpdateResult::none()
        }
        InputKey::End => {
            state.install.input.move_end();
            UpdateResult::none()
        }
        InputKey::Esc => {
            state.install.input.clear();
            UpdateResult::none()
        }
        _ => UpdateResult::none(),
    }
}

fn trigger_install(state: &mut AppState) -> UpdateResult {
    if state.install.phase.is_running() {
        return UpdateResult::none();
    }

    let app_id = state.install.input.value.trim().to_string();
    if app_id.is_empty() {
        state.warning = Some(Warning::new(
            "Input Error",
            "Please enter a Flatpak app ID.",
        ));
        return UpdateResult::none();
    }

    let spec = state.settings.install_spec(&app_id);
    state.install.console.clear();
    state.install.console.push(ConsoleLine::notice(format!("$ {}", spec)));
    state.install.phase = PanelPhase::Running;

    UpdateResult::action(UpdateAction::StartCommand {
        panel: PanelKind::Install,
        spec,
    })
}

// ─────────────────────────────────────────────────────────────────
// Environment setup panel
// ─────────────────────────────────────────────────────────────────

fn handle_setup_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    match key {
        InputKey::Char('q') => {
            state.request_quit();
            UpdateResult::none()
        }
        InputKey::Enter => trigger_setup(state),
        _ => UpdateResult::none(),
    }
}

fn trigger_setup(state: &mut AppState) -> UpdateResult {
    if state.setup.phase.is_running() {
        return UpdateResult::none();
    }

    let Some(spec) = state.settings.setup_install_spec() else {
        state.setup.console.push(ConsoleLine::failure(
            "Setup install command is empty; check setup.install_command in config.toml.",
        ));
        return UpdateResult::none();
    };

    state.setup.console.clear();
    state.setup.console.push(ConsoleLine::notice(format!("$ {}", spec)));
    state.setup.phase = PanelPhase::Running;
    state.setup.step = Some(SetupStep::InstallingTool);

    UpdateResult::action(UpdateAction::StartCommand {
        panel: PanelKind::Setup,
        spec,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_key(state, InputKey::Char(c));
        }
    }

    #[test]
    fn test_tab_cycles_panels() {
        let mut state = AppState::default();
        assert_eq!(state.active_panel, PanelKind::Browse);
        handle_key(&mut state, InputKey::Tab);
        assert_eq!(state.active_panel, PanelKind::Install);
        handle_key(&mut state, InputKey::BackTab);
        assert_eq!(state.active_panel, PanelKind::Browse);
    }

    #[test]
    fn test_browse_enter_opens_catalog() {
        let mut state = AppState::default();
        let result = handle_key(&mut state, InputKey::Enter);
        match result.action {
            Some(UpdateAction::OpenUrl { url }) => assert_eq!(url, "https://flathub.org"),
            other => panic!("expected OpenUrl action, got {:?}", other),
        }
    }

    #[test]
    fn test_q_types_into_install_input() {
        let mut state = AppState::default();
        state.active_panel = PanelKind::Install;
        handle_key(&mut state, InputKey::Char('q'));
        assert!(!state.should_quit());
        assert_eq!(state.install.input.value, "q");
    }

    #[test]
    fn test_q_quits_from_browse_and_setup() {
        let mut state = AppState::default();
        handle_key(&mut state, InputKey::Char('q'));
        assert!(state.should_quit());

        let mut state = AppState::default();
        state.active_panel = PanelKind::Setup;
        handle_key(&mut state, InputKey::Char('q'));
        assert!(state.should_quit());
    }

    #[test]
    fn test_install_trigger_builds_command() {
        let mut state = AppState::default();
        state.active_panel = PanelKind::Install;
        type_text(&mut state, "org.mozilla.firefox");

        let result = handle_key(&mut state, InputKey::Enter);
        match result.action {
            Some(UpdateAction::StartCommand { panel, spec }) => {
                assert_eq!(panel, PanelKind::Install);
                assert_eq!(spec.program, "flatpak");
                assert_eq!(
                    spec.args,
                    ["install", "-y", "flathub", "org.mozilla.firefox"]
                );
            }
            other => panic!("expected StartCommand action, got {:?}", other),
        }
        assert!(state.install.phase.is_running());
    }

    #[test]
    fn test_install_input_is_trimmed() {
        let mut state = AppState::default();
        state.active_panel = PanelKind::Install;
        type_text(&mut state, "  org.gnome.Maps  ");

        let result = handle_key(&mut state, InputKey::Enter);
        match result.action {
            Some(UpdateAction::StartCommand { spec, .. }) => {
                assert_eq!(spec.args.last().unwrap(), "org.gnome.Maps");
            }
            other => panic!("expected StartCommand action, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_install_shows_warning_and_no_action() {
        let mut state = AppState::default();
        state.active_panel = PanelKind::Install;

        let result = handle_key(&mut state, InputKey::Enter);
        assert!(result.action.is_none());
        assert!(state.warning.is_some());
        assert!(!state.install.phase.is_running());

        // Whitespace-only behaves the same
        state.warning = None;
        type_text(&mut state, "   ");
        let result = handle_key(&mut state, InputKey::Enter);
        assert!(result.action.is_none());
        assert!(state.warning.is_some());
    }

    #[test]
    fn test_warning_blocks_all_keys_until_dismissed() {
        let mut state = AppState::default();
        state.active_panel = PanelKind::Install;
        handle_key(&mut state, InputKey::Enter);
        assert!(state.warning.is_some());

        // Typed characters are swallowed, not inserted
        let result = handle_key(&mut state, InputKey::Char('x'));
        assert!(result.action.is_none());
        assert!(state.warning.is_some());
        assert_eq!(state.install.input.value, "");

        // Tab does not switch panels while blocked
        handle_key(&mut state, InputKey::Tab);
        assert_eq!(state.active_panel, PanelKind::Install);

        handle_key(&mut state, InputKey::Enter);
        assert!(state.warning.is_none());
    }

    #[test]
    fn test_ctrl_c_quits_even_while_warning_shown() {
        let mut state = AppState::default();
        state.active_panel = PanelKind::Install;
        handle_key(&mut state, InputKey::Enter);
        assert!(state.warning.is_some());

        handle_key(&mut state, InputKey::CharCtrl('c'));
        assert!(state.should_quit());
    }

    #[test]
    fn test_install_retrigger_refused_while_running() {
        let mut state = AppState::default();
        state.active_panel = PanelKind::Install;
        type_text(&mut state, "org.gnome.Maps");
        let first = handle_key(&mut state, InputKey::Enter);
        assert!(first.action.is_some());

        let second = handle_key(&mut state, InputKey::Enter);
        assert!(second.action.is_none());
    }

    #[test]
    fn test_setup_trigger_starts_install_step() {
        let mut state = AppState::default();
        state.active_panel = PanelKind::Setup;

        let result = handle_key(&mut state, InputKey::Enter);
        match result.action {
            Some(UpdateAction::StartCommand { panel, spec }) => {
                assert_eq!(panel, PanelKind::Setup);
                assert_eq!(spec.program, "sudo");
                assert_eq!(spec.args, ["apt", "install", "-y", "flatpak"]);
            }
            other => panic!("expected StartCommand action, got {:?}", other),
        }
        assert!(state.setup.phase.is_running());
        assert_eq!(state.setup.step, Some(SetupStep::InstallingTool));
    }

    #[test]
    fn test_setup_retrigger_refused_while_running() {
        let mut state = AppState::default();
        state.active_panel = PanelKind::Setup;
        handle_key(&mut state, InputKey::Enter);
        let second = handle_key(&mut state, InputKey::Enter);
        assert!(second.action.is_none());
    }

    #[test]
    fn test_setup_with_empty_install_command() {
        let mut state = AppState::default();
        state.settings.setup.install_command.clear();
        state.active_panel = PanelKind::Setup;

        let result = handle_key(&mut state, InputKey::Enter);
        assert!(result.action.is_none());
        assert!(!state.setup.phase.is_running());
        assert!(state
            .setup
            .console
            .last()
            .unwrap()
            .text
            .contains("install command is empty"));
    }

    #[test]
    fn test_ctrl_c_quits_from_any_panel() {
        for panel in PanelKind::ALL {
            let mut state = AppState::default();
            state.active_panel = panel;
            handle_key(&mut state, InputKey::CharCtrl('c'));
            assert!(state.should_quit());
        }
    }
}
