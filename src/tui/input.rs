//! Translation of terminal events into widget input.

use crate::board::{Position, Step};
use crate::view::PointerPhase;
use crossterm::event::{KeyCode, MouseButton, MouseEventKind};

/// Host-level action for a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Move the cursor one cell.
    Move(Step),
    /// Release over the cursor cell.
    PlaceAtCursor,
    /// Jump the cursor to a cell and release over it.
    PlaceAt(Position),
    /// Save and exit.
    Quit,
    /// Not bound.
    Ignore,
}

/// Maps a key to an action.
pub fn key_action(code: KeyCode) -> KeyAction {
    match code {
        KeyCode::Up | KeyCode::Char('k') => KeyAction::Move(Step::Up),
        KeyCode::Down | KeyCode::Char('j') => KeyAction::Move(Step::Down),
        KeyCode::Left | KeyCode::Char('h') => KeyAction::Move(Step::Left),
        KeyCode::Right | KeyCode::Char('l') => KeyAction::Move(Step::Right),
        KeyCode::Enter | KeyCode::Char(' ') => KeyAction::PlaceAtCursor,
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|digit| (digit as usize).checked_sub(1))
            .and_then(Position::from_index)
            .map_or(KeyAction::Ignore, KeyAction::PlaceAt),
        _ => KeyAction::Ignore,
    }
}

/// Maps a mouse event kind to a pointer phase. Only the left button counts.
pub fn pointer_phase(kind: MouseEventKind) -> Option<PointerPhase> {
    match kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerPhase::Press),
        MouseEventKind::Drag(MouseButton::Left) => Some(PointerPhase::Drag),
        MouseEventKind::Up(MouseButton::Left) => Some(PointerPhase::Release),
        _ => None,
    }
}
