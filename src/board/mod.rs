mod position;
mod state;
mod types;

pub mod invariants;

pub use position::{Position, Step};
pub use state::{BoardState, CELL_COUNT, Snapshot};
pub use types::{BoardError, Cell, Mark, Placement};
