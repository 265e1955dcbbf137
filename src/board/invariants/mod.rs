//! Transition invariants for board placements.
//!
//! Each invariant compares the board before and after a placement attempt.
//! They are checked in debug builds and can be tested independently.

pub mod alternating_turn;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// A logical property relating two consecutive states.
pub trait TransitionInvariant<S> {
    /// Checks if the invariant holds across the transition.
    fn holds(before: &S, after: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: TransitionInvariant<S>,
    I2: TransitionInvariant<S>,
{
    fn check_all(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(before, after) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(before, after) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All placement invariants as a composable set.
pub type PlacementInvariants = (MonotonicBoardInvariant, AlternatingTurnInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardState, Cell, Mark};

    #[test]
    fn test_set_holds_for_real_placements() {
        let mut board = BoardState::new();
        for index in [4, 0, 8, 2] {
            let before = board.snapshot();
            board.place_mark(index).unwrap();
            assert!(PlacementInvariants::check_all(&before, &board.snapshot()).is_ok());
        }
    }

    #[test]
    fn test_set_reports_every_violation() {
        let before = BoardState::new().snapshot();
        let mut after = before;
        after.cells[0] = Cell::Cross;
        after.cells[1] = Cell::Cross;
        after.next_mark = Mark::Circle;

        let violations = PlacementInvariants::check_all(&before, &after).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}
