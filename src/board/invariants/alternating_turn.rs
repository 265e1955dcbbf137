//! Alternating turn invariant: Circle, Cross, Circle, Cross, ...

use super::super::Snapshot;
use super::TransitionInvariant;

/// Invariant: the filled cell holds the mark that was due, and the turn
/// flips exactly when a cell was filled.
pub struct AlternatingTurnInvariant;

impl TransitionInvariant<Snapshot> for AlternatingTurnInvariant {
    fn holds(before: &Snapshot, after: &Snapshot) -> bool {
        let filled = before
            .cells
            .iter()
            .zip(after.cells.iter())
            .find(|(old, new)| old != new)
            .map(|(_, new)| *new);

        match filled {
            None => after.next_mark == before.next_mark,
            Some(cell) => {
                cell.mark() == Some(before.next_mark)
                    && after.next_mark == before.next_mark.next()
            }
        }
    }

    fn description() -> &'static str {
        "Marks alternate (Circle, Cross, Circle, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardState, Cell, Mark};

    #[test]
    fn test_sequence_holds() {
        let mut board = BoardState::new();
        for index in 0..9 {
            let before = board.snapshot();
            board.place_mark(index).unwrap();
            assert!(AlternatingTurnInvariant::holds(&before, &board.snapshot()));
        }
    }

    #[test]
    fn test_ignored_tap_keeps_turn() {
        let mut board = BoardState::new();
        board.place_mark(0).unwrap();
        let before = board.snapshot();
        board.place_mark(0).unwrap();
        assert!(AlternatingTurnInvariant::holds(&before, &board.snapshot()));
    }

    #[test]
    fn test_wrong_mark_violates() {
        let before = BoardState::new().snapshot();
        let mut after = before;
        after.cells[4] = Cell::Cross;
        after.next_mark = Mark::Cross;
        assert!(!AlternatingTurnInvariant::holds(&before, &after));
    }

    #[test]
    fn test_flip_without_fill_violates() {
        let before = BoardState::new().snapshot();
        let mut after = before;
        after.next_mark = Mark::Cross;
        assert!(!AlternatingTurnInvariant::holds(&before, &after));
    }
}
