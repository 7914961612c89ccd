//! Key mapping for the terminal front end.
//!
//! A quiz needs no held-key handling; every key press maps to at most one
//! command, gated on the screen currently shown.

use crossterm::event::KeyCode;

use crate::types::{Difficulty, PlayerCommand, SessionStatus};

/// Map a key press to a command for the current screen.
pub fn map_key(status: SessionStatus, code: KeyCode) -> Option<PlayerCommand> {
    match status {
        SessionStatus::Idle => match code {
            KeyCode::Char('1') => Some(PlayerCommand::Start(Difficulty::Easy)),
            KeyCode::Char('2') => Some(PlayerCommand::Start(Difficulty::Medium)),
            KeyCode::Char('3') => Some(PlayerCommand::Start(Difficulty::Hard)),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(PlayerCommand::Quit),
            _ => None,
        },
        SessionStatus::Loading => match code {
            KeyCode::Esc => Some(PlayerCommand::ReturnToMenu),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(PlayerCommand::Quit),
            _ => None,
        },
        SessionStatus::Playing => match code {
            KeyCode::Char(c @ '1'..='9') => {
                Some(PlayerCommand::Select(c as usize - '1' as usize))
            }
            KeyCode::Esc => Some(PlayerCommand::ReturnToMenu),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(PlayerCommand::Quit),
            _ => None,
        },
        SessionStatus::GameOver => match code {
            KeyCode::Char('r') | KeyCode::Char('R') => Some(PlayerCommand::RestartSame),
            KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Esc => {
                Some(PlayerCommand::ReturnToMenu)
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(PlayerCommand::Quit),
            _ => None,
        },
    }
}
