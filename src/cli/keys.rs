//! Terminal key events to logical game input.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folioquest::Key;

/// What a terminal key means to the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Input {
    /// A game key.
    Game(Key),
    /// Leave immediately.
    Quit,
}

/// Map a crossterm key event. Unbound keys map to `None`.
pub(crate) fn map_key(event: &KeyEvent) -> Option<Input> {
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c' | 'C') => Some(Input::Quit),
            _ => None,
        };
    }
    let key = match event.code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Enter | KeyCode::Char('z' | 'Z') => Key::Confirm,
        KeyCode::Char('x' | 'X') => Key::Skip,
        KeyCode::Esc => Key::Cancel,
        KeyCode::Char('m' | 'M') => Key::Mute,
        KeyCode::Char('s' | 'S') => Key::Save,
        KeyCode::Char('c' | 'C') => Key::SwitchCharacter,
        KeyCode::Char('q' | 'Q') => return Some(Input::Quit),
        _ => return None,
    };
    Some(Input::Game(key))
}
