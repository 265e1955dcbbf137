//! Monotonic board invariant: marks are never overwritten.

use super::super::Snapshot;
use super::TransitionInvariant;

/// Invariant: a placement changes at most one cell, and only a blank one.
pub struct MonotonicBoardInvariant;

impl TransitionInvariant<Snapshot> for MonotonicBoardInvariant {
    fn holds(before: &Snapshot, after: &Snapshot) -> bool {
        let mut changed = 0;

        for (old, new) in before.cells.iter().zip(after.cells.iter()) {
            if old == new {
                continue;
            }
            if !old.is_blank() {
                return false;
            }
            changed += 1;
        }

        changed <= 1
    }

    fn description() -> &'static str {
        "Marks are monotonic (at most one blank cell filled, none overwritten)"
    }
}
