//! Board state machine: nine cells and the mark placed next.

#[cfg(debug_assertions)]
use super::invariants::{InvariantSet, PlacementInvariants};
use super::types::{BoardError, Cell, Mark, Placement};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Full capture of the board, as handed to persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    /// Cells in row-major order (0-8).
    pub cells: [Cell; CELL_COUNT],
    /// Mark placed by the next successful placement.
    pub next_mark: Mark,
}

/// 3x3 board with strict Circle/Cross alternation.
///
/// Cells only ever go from [`Cell::Blank`] to a mark through
/// [`BoardState::place_mark`]; an occupied cell is never overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    cells: [Cell; CELL_COUNT],
    next_mark: Mark,
}

impl BoardState {
    /// Creates a blank board with Circle to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            cells: [Cell::Blank; CELL_COUNT],
            next_mark: Mark::Circle,
        }
    }

    /// Places the next mark at `index`.
    ///
    /// An occupied cell yields [`Placement::AlreadyOccupied`] and leaves the
    /// board untouched. An index outside 0-8 is a caller bug: it panics in
    /// debug builds and returns [`BoardError::OutOfRange`] otherwise.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::OutOfRange` for `index >= 9` in release builds.
    #[instrument(skip(self), fields(next_mark = %self.next_mark))]
    pub fn place_mark(&mut self, index: usize) -> Result<Placement, BoardError> {
        debug_assert!(index < CELL_COUNT, "cell index {index} out of range");
        if index >= CELL_COUNT {
            warn!(index, "Ignoring placement outside the board");
            return Err(BoardError::OutOfRange(index));
        }

        if !self.cells[index].is_blank() {
            debug!(index, cell = %self.cells[index], "Cell already occupied");
            return Ok(Placement::AlreadyOccupied);
        }

        #[cfg(debug_assertions)]
        let before = self.snapshot();

        let mark = self.next_mark;
        self.cells[index] = Cell::from(mark);
        self.next_mark = mark.next();

        #[cfg(debug_assertions)]
        assert_invariants(&before, &self.snapshot());

        debug!(index, %mark, "Mark placed");
        Ok(Placement::Placed { mark, index })
    }

    /// Returns the cell at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 9`. Use [`BoardState::get`] for a checked read.
    pub fn mark_at(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Returns the cell at `index`, or `None` outside the board.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the cell at `index` is blank.
    pub fn is_blank(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Blank))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Returns the mark the next placement will write.
    pub fn next_mark(&self) -> Mark {
        self.next_mark
    }

    /// Number of cells holding a mark.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_blank()).count()
    }

    /// Captures the full board state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: self.cells,
            next_mark: self.next_mark,
        }
    }

    /// Replaces the board wholesale with saved cells and turn.
    ///
    /// The cells are taken verbatim; no turn-consistency check is made.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::InvalidSnapshot` if `cells` does not hold exactly
    /// nine entries. The board is left unchanged in that case.
    #[instrument(skip(self, cells), fields(len = cells.len()))]
    pub fn restore(&mut self, cells: &[Cell], next_mark: Mark) -> Result<(), BoardError> {
        let cells: [Cell; CELL_COUNT] = cells.try_into().map_err(|_| {
            warn!("Rejecting snapshot with wrong cell count");
            BoardError::InvalidSnapshot {
                reason: format!("expected {} cells, got {}", CELL_COUNT, cells.len()),
            }
        })?;

        self.cells = cells;
        self.next_mark = next_mark;
        debug!(filled = self.filled_count(), %next_mark, "Board restored");
        Ok(())
    }
}

/// Panics if a placement broke any transition invariant.
#[cfg(debug_assertions)]
fn assert_invariants(before: &Snapshot, after: &Snapshot) {
    if let Err(violations) = PlacementInvariants::check_all(before, after) {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        panic!("Placement broke board invariants: {descriptions}");
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Snapshot> for BoardState {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            cells: snapshot.cells,
            next_mark: snapshot.next_mark,
        }
    }
}

impl std::fmt::Display for BoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in chunk {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_blank() {
        let board = BoardState::new();
        assert!(board.cells().iter().all(|c| c.is_blank()));
        assert_eq!(board.next_mark(), Mark::Circle);
        assert_eq!(board.filled_count(), 0);
    }

    #[test]
    fn test_placements_alternate() {
        let mut board = BoardState::new();
        let expected = [Mark::Circle, Mark::Cross, Mark::Circle, Mark::Cross];

        for (index, mark) in [8, 0, 3, 5].into_iter().zip(expected) {
            assert_eq!(
                board.place_mark(index),
                Ok(Placement::Placed { mark, index })
            );
            assert_eq!(board.mark_at(index), Cell::from(mark));
        }
        assert_eq!(board.next_mark(), Mark::Circle);
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut board = BoardState::new();
        board.place_mark(2).unwrap();
        let before = board.clone();

        assert_eq!(board.place_mark(2), Ok(Placement::AlreadyOccupied));
        assert_eq!(board, before);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_panics_in_debug() {
        let mut board = BoardState::new();
        let _ = board.place_mark(9);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_out_of_range_is_ignored_in_release() {
        let mut board = BoardState::new();
        assert_eq!(board.place_mark(9), Err(BoardError::OutOfRange(9)));
        assert_eq!(board, BoardState::new());
    }

    #[test]
    fn test_restore_rejects_wrong_length() {
        let mut board = BoardState::new();
        board.place_mark(4).unwrap();
        let before = board.clone();

        let result = board.restore(&[Cell::Cross; 8], Mark::Circle);
        assert!(matches!(result, Err(BoardError::InvalidSnapshot { .. })));
        assert_eq!(board, before);

        let result = board.restore(&[Cell::Cross; 10], Mark::Circle);
        assert!(matches!(result, Err(BoardError::InvalidSnapshot { .. })));
        assert_eq!(board, before);
    }

    #[test]
    fn test_display() {
        let mut board = BoardState::new();
        board.place_mark(0).unwrap();
        board.place_mark(4).unwrap();
        assert_eq!(board.to_string(), "O..\n.X.\n...");
    }
}
