//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Which surface receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// The board: place, discard, start, reset, open panels.
    #[default]
    Board,
    /// The settings modal: slider and save/cancel only.
    Settings,
}

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent, mode: InputMode) -> Option<GameAction> {
    match mode {
        InputMode::Board => board_key(key.code),
        InputMode::Settings => settings_key(key.code),
    }
}

fn board_key(code: KeyCode) -> Option<GameAction> {
    match code {
        // Rod actions
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => {
            Some(GameAction::Place)
        }
        KeyCode::Backspace
        | KeyCode::Delete
        | KeyCode::Char('d')
        | KeyCode::Char('D')
        | KeyCode::Char('x')
        | KeyCode::Char('X') => Some(GameAction::Discard),

        // Session
        KeyCode::Char('n') | KeyCode::Char('N') => Some(GameAction::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Reset),

        // Panels
        KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::OpenSettings),
        KeyCode::Char('i') | KeyCode::Char('I') | KeyCode::Char('?') => {
            Some(GameAction::ToggleInstructions)
        }

        _ => None,
    }
}

fn settings_key(code: KeyCode) -> Option<GameAction> {
    match code {
        KeyCode::Left | KeyCode::Down | KeyCode::Char('-') | KeyCode::Char('h') => {
            Some(GameAction::DecreaseTarget)
        }
        KeyCode::Right
        | KeyCode::Up
        | KeyCode::Char('+')
        | KeyCode::Char('=')
        | KeyCode::Char('l') => Some(GameAction::IncreaseTarget),
        KeyCode::Enter => Some(GameAction::SaveSettings),
        KeyCode::Esc | KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::CancelSettings),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn board(code: KeyCode) -> Option<GameAction> {
        handle_key_event(KeyEvent::from(code), InputMode::Board)
    }

    fn settings(code: KeyCode) -> Option<GameAction> {
        handle_key_event(KeyEvent::from(code), InputMode::Settings)
    }

    #[test]
    fn test_rod_keys() {
        assert_eq!(board(KeyCode::Enter), Some(GameAction::Place));
        assert_eq!(board(KeyCode::Char(' ')), Some(GameAction::Place));
        assert_eq!(board(KeyCode::Char('P')), Some(GameAction::Place));

        assert_eq!(board(KeyCode::Char('d')), Some(GameAction::Discard));
        assert_eq!(board(KeyCode::Char('X')), Some(GameAction::Discard));
        assert_eq!(board(KeyCode::Backspace), Some(GameAction::Discard));
    }

    #[test]
    fn test_session_keys() {
        assert_eq!(board(KeyCode::Char('n')), Some(GameAction::Start));
        assert_eq!(board(KeyCode::Char('R')), Some(GameAction::Reset));
        assert_eq!(board(KeyCode::Char('s')), Some(GameAction::OpenSettings));
        assert_eq!(board(KeyCode::Char('?')), Some(GameAction::ToggleInstructions));
        assert_eq!(board(KeyCode::Char('z')), None);
    }

    #[test]
    fn test_settings_keys() {
        assert_eq!(settings(KeyCode::Left), Some(GameAction::DecreaseTarget));
        assert_eq!(settings(KeyCode::Char('-')), Some(GameAction::DecreaseTarget));
        assert_eq!(settings(KeyCode::Up), Some(GameAction::IncreaseTarget));
        assert_eq!(settings(KeyCode::Char('+')), Some(GameAction::IncreaseTarget));
        assert_eq!(settings(KeyCode::Enter), Some(GameAction::SaveSettings));
        assert_eq!(settings(KeyCode::Esc), Some(GameAction::CancelSettings));
    }

    #[test]
    fn test_modal_swallows_board_keys() {
        assert_eq!(settings(KeyCode::Char('d')), None);
        assert_eq!(settings(KeyCode::Char(' ')), None);
        assert_eq!(settings(KeyCode::Char('r')), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
