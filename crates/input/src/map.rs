//! Key mapping from terminal events to game actions.

use crate::types::{slot_for_key, GameAction, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to an action for the given screen.
///
/// Bug slots are selected with `1`..`9`, then `a`.. for larger catalogs
/// (`a` is slot 9). Slots past the catalog size are left for the caller to
/// reject.
pub fn handle_key_event(key: KeyEvent, screen: Screen) -> Option<GameAction> {
    match screen {
        Screen::Game => game_key(key.code),
        Screen::Help => help_key(key.code),
    }
}

fn game_key(code: KeyCode) -> Option<GameAction> {
    if let KeyCode::Char(c) = code {
        if let Some(slot) = slot_for_key(c) {
            return Some(GameAction::SelectBug(slot));
        }
    }

    match code {
        // Feedback panel close
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char('x') | KeyCode::Char('X') => {
            Some(GameAction::ToggleFeedback)
        }

        KeyCode::Char('?') | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::F(1) => {
            Some(GameAction::OpenHelp)
        }

        _ => None,
    }
}

fn help_key(code: KeyCode) -> Option<GameAction> {
    match code {
        KeyCode::Right
        | KeyCode::PageDown
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('n')
        | KeyCode::Char('N') => Some(GameAction::NextPage),
        KeyCode::Left
        | KeyCode::PageUp
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('p')
        | KeyCode::Char('P') => Some(GameAction::PrevPage),

        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') | KeyCode::Char('B') => {
            Some(GameAction::Back)
        }

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
