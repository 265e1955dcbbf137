//! Instance state carried across a view recreation.
//!
//! The saved layout is nine cell tokens, an integer turn flag (0 when Circle
//! is next, 1 when Cross is next) and the host's own parent state, which is
//! stored and handed back without inspection.

use crate::board::{BoardError, BoardState, Cell, Mark};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Saved widget state bundled with the opaque parent state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceState<P> {
    /// Parent state, round-tripped unmodified.
    pub super_state: P,
    /// Cells in row-major order.
    pub cells: Vec<Cell>,
    /// 0 when Circle is next, 1 when Cross is next.
    pub turn_flag: u8,
}

impl<P> InstanceState<P> {
    /// Captures a board together with the parent state.
    pub fn from_board(board: &BoardState, super_state: P) -> Self {
        Self {
            super_state,
            cells: board.cells().to_vec(),
            turn_flag: turn_flag(board.next_mark()),
        }
    }

    /// Splits off the parent state and rebuilds the board.
    ///
    /// The parent state is returned even when the board is rejected.
    /// The board is `BoardError::InvalidSnapshot` when the cell count is not
    /// nine or the turn flag is neither 0 nor 1.
    pub fn into_board(self) -> (P, Result<BoardState, BoardError>) {
        let Self {
            super_state,
            cells,
            turn_flag,
        } = self;

        let board = mark_for_flag(turn_flag).and_then(|next_mark| {
            let mut board = BoardState::new();
            board.restore(&cells, next_mark)?;
            Ok(board)
        });
        (super_state, board)
    }
}

impl<P: Serialize> InstanceState<P> {
    /// Encodes the state as JSON.
    pub fn to_json(&self) -> Result<String, PersistError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PersistError::new(format!("Failed to encode state: {}", e)))
    }

    /// Writes the state to a JSON file.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), PersistError> {
        let json = self.to_json()?;
        std::fs::write(path.as_ref(), json)
            .map_err(|e| PersistError::new(format!("Failed to write state file: {}", e)))?;
        info!(filled = self.cells.iter().filter(|c| !c.is_blank()).count(), "State saved");
        Ok(())
    }
}

impl<P: DeserializeOwned> InstanceState<P> {
    /// Decodes state from JSON.
    ///
    /// Unknown cell tokens are rejected here; the cell count and turn flag
    /// are checked by [`InstanceState::into_board`].
    pub fn from_json(json: &str) -> Result<Self, PersistError> {
        serde_json::from_str(json)
            .map_err(|e| PersistError::new(format!("Failed to decode state: {}", e)))
    }

    /// Reads state from a JSON file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, PersistError> {
        debug!("Loading state file");
        let json = std::fs::read_to_string(path.as_ref())
            .map_err(|e| PersistError::new(format!("Failed to read state file: {}", e)))?;
        Self::from_json(&json)
    }
}

fn turn_flag(next_mark: Mark) -> u8 {
    match next_mark {
        Mark::Circle => 0,
        Mark::Cross => 1,
    }
}

fn mark_for_flag(flag: u8) -> Result<Mark, BoardError> {
    match flag {
        0 => Ok(Mark::Circle),
        1 => Ok(Mark::Cross),
        other => Err(BoardError::InvalidSnapshot {
            reason: format!("turn flag must be 0 or 1, got {}", other),
        }),
    }
}

/// Error reading or writing saved state.
#[derive(Debug, Clone, Display, Error)]
#[display("Persist error: {} at {}:{}", message, file, line)]
pub struct PersistError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PersistError {
    /// Creates a new persistence error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_flag_follows_next_mark() {
        let mut board = BoardState::new();
        assert_eq!(InstanceState::from_board(&board, ()).turn_flag, 0);
        board.place_mark(3).unwrap();
        assert_eq!(InstanceState::from_board(&board, ()).turn_flag, 1);
    }

    #[test]
    fn test_json_layout_uses_tokens() {
        let mut board = BoardState::new();
        board.place_mark(0).unwrap();
        board.place_mark(1).unwrap();

        let json = InstanceState::from_board(&board, 7u32).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["super_state"], 7);
        assert_eq!(value["cells"][0], "circle");
        assert_eq!(value["cells"][1], "cross");
        assert_eq!(value["cells"][2], "blank");
        assert_eq!(value["turn_flag"], 0);
    }

    #[test]
    fn test_rejects_bad_flag() {
        let state = InstanceState {
            super_state: 'p',
            cells: vec![Cell::Blank; 9],
            turn_flag: 2,
        };
        let (parent, board) = state.into_board();
        assert_eq!(parent, 'p');
        assert!(matches!(board, Err(BoardError::InvalidSnapshot { .. })));
    }

    #[test]
    fn test_rejects_unknown_token() {
        let json = r#"{"super_state":null,"cells":["blank","blank","blank","blank","triangle","blank","blank","blank","blank"],"turn_flag":0}"#;
        assert!(InstanceState::<()>::from_json(json).is_err());
    }
}
