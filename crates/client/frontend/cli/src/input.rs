//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// High-level command decoded from a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Open or close the ability submenu.
    Ability,
    /// Open or close the potion submenu.
    Potion,
    Rest,
    Flee,
    /// Choose the zero-based entry of the open submenu.
    Pick(usize),
    /// Fight the next monster after a victory.
    Continue,
    /// Leave the battlefield after a victory.
    Retreat,
    /// No meaningful command was produced.
    None,
}

/// Converts a raw key event into a battle command.
pub fn map_key(key: KeyEvent) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    match key.code {
        KeyCode::Char(ch) => map_char(ch),
        KeyCode::Esc => KeyAction::Quit,
        _ => KeyAction::None,
    }
}

fn map_char(raw: char) -> KeyAction {
    match raw.to_ascii_lowercase() {
        'q' => KeyAction::Quit,
        'a' => KeyAction::Ability,
        'p' => KeyAction::Potion,
        'r' => KeyAction::Rest,
        'f' => KeyAction::Flee,
        'c' => KeyAction::Continue,
        'x' => KeyAction::Retreat,
        digit @ '1'..='9' => KeyAction::Pick(digit as usize - '1' as usize),
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn maps_battle_keys() {
        assert_eq!(map_key(key(KeyCode::Char('a'))), KeyAction::Ability);
        assert_eq!(map_key(key(KeyCode::Char('P'))), KeyAction::Potion);
        assert_eq!(map_key(key(KeyCode::Char('r'))), KeyAction::Rest);
        assert_eq!(map_key(key(KeyCode::Char('f'))), KeyAction::Flee);
        assert_eq!(map_key(key(KeyCode::Char('c'))), KeyAction::Continue);
        assert_eq!(map_key(key(KeyCode::Char('x'))), KeyAction::Retreat);
    }

    #[test]
    fn digits_pick_zero_based_entries() {
        assert_eq!(map_key(key(KeyCode::Char('1'))), KeyAction::Pick(0));
        assert_eq!(map_key(key(KeyCode::Char('9'))), KeyAction::Pick(8));
        assert_eq!(map_key(key(KeyCode::Char('0'))), KeyAction::None);
    }

    #[test]
    fn maps_quit_keys() {
        assert_eq!(map_key(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(map_key(key(KeyCode::Esc)), KeyAction::Quit);

        let ctrl_c = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char('c'))
        };
        assert_eq!(map_key(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn ignores_unknown_keys() {
        assert_eq!(map_key(key(KeyCode::Char('z'))), KeyAction::None);
        assert_eq!(map_key(key(KeyCode::Left)), KeyAction::None);
    }
}
