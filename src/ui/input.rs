//! Translate terminal events into game commands.
//!
//! Number buttons only respond while the round is active; "Play Again" only
//! exists once it is over.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::layout::GameLayout;
use crate::core::{Outcome, STAR_CONFIG};

/// What the player asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// A number button was pressed.
    Select(u32),
    PlayAgain,
    Quit,
}

/// Map a key press. Digits stand for the matching button, `Enter`/`p` for
/// "Play Again".
#[must_use]
pub fn command_for_key(key: KeyEvent, outcome: Outcome) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Enter | KeyCode::Char('p') if outcome.is_over() => Some(Command::PlayAgain),
        KeyCode::Char(c) if !outcome.is_over() => c
            .to_digit(10)
            .filter(|&n| STAR_CONFIG.is_board_number(n))
            .map(Command::Select),
        _ => None,
    }
}

/// Map a left click to whatever was drawn under it.
#[must_use]
pub fn command_for_mouse(mouse: MouseEvent, layout: &GameLayout, outcome: Outcome) -> Option<Command> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    if outcome.is_over() {
        layout
            .is_play_again(mouse.column, mouse.row)
            .then_some(Command::PlayAgain)
    } else {
        layout.number_at(mouse.column, mouse.row).map(Command::Select)
    }
}
