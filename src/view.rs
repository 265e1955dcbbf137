//! The board widget: pointer input, invalidation and instance state.

use crate::board::{BoardError, BoardState, Placement};
use crate::config::ViewConfig;
use crate::geometry::Geometry;
use crate::persistence::InstanceState;
use crate::render::{Canvas, Paint, render};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Phase of a pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerPhase {
    /// Pointer went down.
    Press,
    /// Pointer moved while down.
    Drag,
    /// Pointer went up; the only phase that places a mark.
    Release,
}

/// Pointer event in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Gesture phase.
    pub phase: PointerPhase,
    /// Horizontal position.
    pub x: i32,
    /// Vertical position.
    pub y: i32,
}

impl PointerEvent {
    /// Creates a pointer event.
    pub fn new(phase: PointerPhase, x: i32, y: i32) -> Self {
        Self { phase, x, y }
    }
}

/// What a pointer event did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchOutcome {
    /// Press or drag, claimed without effect.
    Consumed,
    /// Release outside every cell.
    Missed,
    /// Release over a cell; carries the placement result.
    Released(Placement),
}

/// Tic-tac-toe board widget.
///
/// The host measures it, tells it its size, forwards pointer events, draws it
/// when invalidated and saves/restores its instance state across recreation.
#[derive(Debug, Clone)]
pub struct TicTacToeView {
    board: BoardState,
    geometry: Geometry,
    paint: Paint,
    cross_inset: f32,
    invalidated: bool,
}

impl TicTacToeView {
    /// Creates a widget with a blank board.
    #[instrument(skip(config))]
    pub fn new(config: &ViewConfig) -> Self {
        Self {
            board: BoardState::new(),
            geometry: Geometry::default(),
            paint: Paint::from_config(config),
            cross_inset: *config.cross_inset(),
            invalidated: true,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Returns the current grid.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Returns the stroke paint.
    pub fn paint(&self) -> &Paint {
        &self.paint
    }

    /// Size the widget wants within the offered space: a square.
    pub fn on_measure(&self, width: i32, height: i32) -> (i32, i32) {
        let side = Geometry::measure(width, height);
        (side, side)
    }

    /// Regenerates the grid for the new size.
    #[instrument(skip(self))]
    pub fn on_size_changed(&mut self, width: i32, height: i32) {
        self.geometry.on_size_changed(width, height);
        self.invalidate();
    }

    /// Handles a pointer event. Always claims the gesture.
    pub fn on_touch_event(&mut self, event: PointerEvent) -> bool {
        self.handle_pointer(event);
        true
    }

    /// Handles a pointer event and reports what it did.
    ///
    /// Only [`PointerPhase::Release`] attempts a placement. A successful
    /// placement invalidates the widget.
    #[instrument(skip(self))]
    pub fn handle_pointer(&mut self, event: PointerEvent) -> TouchOutcome {
        if event.phase != PointerPhase::Release {
            return TouchOutcome::Consumed;
        }

        let Some(index) = self.geometry.cell_index_at(event.x, event.y) else {
            debug!("Release outside the grid");
            return TouchOutcome::Missed;
        };

        // Index comes from the grid, so it is always in range.
        match self.board.place_mark(index) {
            Ok(placement) => {
                if placement.is_placed() {
                    self.invalidate();
                }
                TouchOutcome::Released(placement)
            }
            Err(_) => TouchOutcome::Missed,
        }
    }

    /// Requests a redraw.
    pub fn invalidate(&mut self) {
        self.invalidated = true;
    }

    /// Returns whether a redraw was requested, clearing the request.
    pub fn take_invalidated(&mut self) -> bool {
        std::mem::replace(&mut self.invalidated, false)
    }

    /// Draws the grid and marks onto `canvas`.
    pub fn draw(&self, canvas: &mut impl Canvas) {
        render(
            &self.board,
            &self.geometry,
            &self.paint,
            self.cross_inset,
            canvas,
        );
    }

    /// Bundles the board with the host's parent state for saving.
    #[instrument(skip(self, super_state))]
    pub fn save_instance_state<P>(&self, super_state: P) -> InstanceState<P> {
        info!(filled = self.board.filled_count(), "Saving instance state");
        InstanceState::from_board(&self.board, super_state)
    }

    /// Restores a saved board, always handing back the parent state untouched.
    ///
    /// The board result is `BoardError::InvalidSnapshot` if the saved board
    /// is malformed; the current board is kept in that case.
    #[instrument(skip(self, state))]
    pub fn restore_instance_state<P>(
        &mut self,
        state: InstanceState<P>,
    ) -> (P, Result<(), BoardError>) {
        let (super_state, board) = state.into_board();
        let restored = board.map(|board| {
            self.board = board;
            self.invalidate();
            info!(
                filled = self.board.filled_count(),
                next_mark = %self.board.next_mark(),
                "Instance state restored"
            );
        });
        (super_state, restored)
    }
}

impl Default for TicTacToeView {
    fn default() -> Self {
        Self::new(&ViewConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Mark};

    fn sized_view() -> TicTacToeView {
        let mut view = TicTacToeView::default();
        let (w, h) = view.on_measure(300, 500);
        view.on_size_changed(w, h);
        view.take_invalidated();
        view
    }

    #[test]
    fn test_measure_is_square() {
        let view = TicTacToeView::default();
        assert_eq!(view.on_measure(640, 480), (480, 480));
    }

    #[test]
    fn test_press_and_drag_do_not_place() {
        let mut view = sized_view();
        assert!(view.on_touch_event(PointerEvent::new(PointerPhase::Press, 10, 10)));
        assert!(view.on_touch_event(PointerEvent::new(PointerPhase::Drag, 20, 20)));
        assert_eq!(view.board(), &BoardState::new());
        assert!(!view.take_invalidated());
    }

    #[test]
    fn test_release_places_and_invalidates() {
        let mut view = sized_view();
        let outcome = view.handle_pointer(PointerEvent::new(PointerPhase::Release, 150, 150));
        assert_eq!(
            outcome,
            TouchOutcome::Released(Placement::Placed {
                mark: Mark::Circle,
                index: 4
            })
        );
        assert_eq!(view.board().mark_at(4), Cell::Circle);
        assert!(view.take_invalidated());
        assert!(!view.take_invalidated());
    }

    #[test]
    fn test_occupied_release_does_not_invalidate() {
        let mut view = sized_view();
        view.on_touch_event(PointerEvent::new(PointerPhase::Release, 10, 10));
        view.take_invalidated();

        let outcome = view.handle_pointer(PointerEvent::new(PointerPhase::Release, 20, 20));
        assert_eq!(outcome, TouchOutcome::Released(Placement::AlreadyOccupied));
        assert!(!view.take_invalidated());
        assert_eq!(view.board().next_mark(), Mark::Cross);
    }

    #[test]
    fn test_release_outside_grid_is_missed() {
        let mut view = sized_view();
        let outcome = view.handle_pointer(PointerEvent::new(PointerPhase::Release, 310, 10));
        assert_eq!(outcome, TouchOutcome::Missed);
        assert_eq!(view.board().filled_count(), 0);
    }

    #[test]
    fn test_unsized_view_ignores_release() {
        let mut view = TicTacToeView::default();
        let outcome = view.handle_pointer(PointerEvent::new(PointerPhase::Release, 0, 0));
        assert_eq!(outcome, TouchOutcome::Missed);
    }
}
