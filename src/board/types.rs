//! Core domain types for the board.

use serde::{Deserialize, Serialize};

/// Mark placed by a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    /// Circle (placed first on a fresh board).
    Circle,
    /// Cross.
    Cross,
}

impl Mark {
    /// Returns the mark placed after this one.
    pub fn next(self) -> Self {
        match self {
            Mark::Circle => Mark::Cross,
            Mark::Cross => Mark::Circle,
        }
    }

    /// Single-character symbol for text output.
    pub fn symbol(self) -> char {
        match self {
            Mark::Circle => 'O',
            Mark::Cross => 'X',
        }
    }
}

/// Content of one of the nine cells.
///
/// Serializes as a short lowercase token (`"blank"`, `"circle"`, `"cross"`),
/// which is the layout used by saved instance state.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Cell {
    /// No mark yet.
    #[default]
    Blank,
    /// Holds a circle.
    Circle,
    /// Holds a cross.
    Cross,
}

impl Cell {
    /// Returns the mark held by this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Blank => None,
            Cell::Circle => Some(Mark::Circle),
            Cell::Cross => Some(Mark::Cross),
        }
    }

    /// Checks if the cell is blank.
    pub fn is_blank(self) -> bool {
        self == Cell::Blank
    }

    /// Single-character symbol for text output.
    pub fn symbol(self) -> char {
        self.mark().map_or('.', Mark::symbol)
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::Circle => Cell::Circle,
            Mark::Cross => Cell::Cross,
        }
    }
}

/// Outcome of a placement attempt on a valid index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// The mark was written to the cell.
    Placed {
        /// Mark that was placed.
        mark: Mark,
        /// Cell index (0-8).
        index: usize,
    },
    /// The cell already held a mark; nothing changed.
    AlreadyOccupied,
}

impl Placement {
    /// Returns true if the board changed.
    pub fn is_placed(&self) -> bool {
        matches!(self, Placement::Placed { .. })
    }
}

/// Errors raised by board operations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Index outside 0-8.
    #[display("Cell index {} out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// Restored cell sequence was malformed.
    #[display("Invalid snapshot: {}", reason)]
    InvalidSnapshot {
        /// What was wrong with the snapshot.
        reason: String,
    },
}

impl std::error::Error for BoardError {}
