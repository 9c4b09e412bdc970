//! Key mapping from terminal events to game commands.
//!
//! Unrecognized keys map to None and are treated as no-ops by the loops.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::life::LifeCommand;
use crate::tetris::Command;

/// Map a Tetris key press to a command.
pub fn tetris_key_press(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(Command::MoveRight),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(Command::Rotate),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(Command::SoftDropOn),
        _ => None,
    }
}

/// Map a Tetris key release to a command.
///
/// Only the soft-drop key has release semantics. Release events require a
/// keyboard enhancement protocol most terminals don't run; the run loop
/// also expires a held soft drop on a grace timeout so it never sticks.
pub fn tetris_key_release(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(Command::SoftDropOff),
        _ => None,
    }
}

/// Map a Life key press to a command. Cell toggles come from the mouse path.
pub fn life_key_press(code: KeyCode) -> Option<LifeCommand> {
    match code {
        KeyCode::Char(' ') => Some(LifeCommand::ToggleAutoplay),
        KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => Some(LifeCommand::SpeedUp),
        KeyCode::Down | KeyCode::Char('-') => Some(LifeCommand::SpeedDown),
        _ => None,
    }
}

/// Check if the key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
