//! Tic-tac-toe board widget.
//!
//! Draws a 3x3 grid, places circle and cross marks alternately on pointer
//! release, and saves/restores its board across a view recreation.
//!
//! # Architecture
//!
//! - **Board**: nine cells plus the mark placed next ([`BoardState`])
//! - **Geometry**: square surface to cell mapping ([`Geometry`])
//! - **Render**: pure drawing onto a host [`Canvas`]
//! - **View**: the widget itself ([`TicTacToeView`])
//! - **Persistence**: saved instance state ([`InstanceState`])
//! - **TUI**: a terminal host built on ratatui and crossterm
//!
//! # Example
//!
//! ```
//! use tictactoe_board::{Cell, PointerEvent, PointerPhase, TicTacToeView};
//!
//! let mut view = TicTacToeView::default();
//! let (w, h) = view.on_measure(300, 300);
//! view.on_size_changed(w, h);
//!
//! view.on_touch_event(PointerEvent::new(PointerPhase::Release, 150, 150));
//! assert_eq!(view.board().mark_at(4), Cell::Circle);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod config;
mod geometry;
mod persistence;
mod render;
mod view;

pub mod tui;

// Crate-level exports - Board state machine
pub use board::invariants::{
    AlternatingTurnInvariant, InvariantSet, InvariantViolation, MonotonicBoardInvariant,
    PlacementInvariants, TransitionInvariant,
};
pub use board::{
    BoardError, BoardState, CELL_COUNT, Cell, Mark, Placement, Position, Snapshot, Step,
};

// Crate-level exports - Geometry and rendering
pub use geometry::{CellRect, Geometry};
pub use render::{Canvas, DrawOp, Paint, RecordingCanvas, render};

// Crate-level exports - Widget
pub use view::{PointerEvent, PointerPhase, TicTacToeView, TouchOutcome};

// Crate-level exports - Configuration and persistence
pub use config::{ConfigError, PaintColor, ViewConfig};
pub use persistence::{InstanceState, PersistError};
