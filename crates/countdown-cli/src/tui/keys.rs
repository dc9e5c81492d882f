//! Keyboard bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use countdown_core::Input;

use super::Action;

/// Translate a key press into an action. Releases and unbound keys map to `None`.
///
/// Raw mode means arrows and space never reach the shell, so there is no
/// default action to suppress here.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    let action = match key.code {
        KeyCode::Up => Action::Timer(Input::IncrementValue),
        KeyCode::Down => Action::Timer(Input::DecrementValue),
        KeyCode::Left => Action::Timer(Input::FocusMinutes),
        KeyCode::Right => Action::Timer(Input::FocusSeconds),
        KeyCode::Char(' ') => Action::Timer(Input::ToggleRun),
        KeyCode::Char('r') | KeyCode::Char('R') => Action::Timer(Input::Reset),
        KeyCode::Char('t') | KeyCode::Char('T') => Action::ToggleTheme,
        KeyCode::Char('s') | KeyCode::Char('S') => Action::ToggleStyle,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}
