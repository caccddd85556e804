//! Keyboard input capture
//!
//! Thin wrapper mapping crossterm key events onto the fixed command set the
//! orchestrator consumes. Blocking reads: the game is strictly turn-based.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::core::Result;
use crate::game::Command;

/// Source of one command per turn
pub trait InputSource {
    fn next_command(&mut self) -> Result<Command>;
}

/// Blocking crossterm keyboard reader
#[derive(Debug, Default)]
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn next_command(&mut self) -> Result<Command> {
        loop {
            if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
                if kind == KeyEventKind::Release {
                    continue;
                }
                return Ok(map_key(code));
            }
        }
    }
}

fn map_key(code: KeyCode) -> Command {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        KeyCode::Up | KeyCode::Char('w') => Command::Up,
        KeyCode::Down | KeyCode::Char('s') => Command::Down,
        KeyCode::Left | KeyCode::Char('a') => Command::Left,
        KeyCode::Right | KeyCode::Char('d') => Command::Right,
        KeyCode::Char(' ') => Command::Attack,
        _ => Command::Idle,
    }
}
