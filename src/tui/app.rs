//! Terminal host state and event handling.

use super::input::{KeyAction, key_action, pointer_phase};
use super::ui;
use crate::board::{BoardError, Placement, Position};
use crate::config::ViewConfig;
use crate::persistence::InstanceState;
use crate::view::{PointerEvent, PointerPhase, TicTacToeView, TouchOutcome};
use crossterm::event::{Event, KeyEventKind, MouseEvent};
use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Host-owned state saved alongside the board as its parent state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HostState {
    /// Keyboard cursor.
    pub cursor: Position,
}

/// Terminal host wrapping the widget.
pub struct App {
    view: TicTacToeView,
    cursor: Position,
    status_message: String,
    board_area: Rect,
    redraw: bool,
    should_quit: bool,
}

impl App {
    /// Creates a host with a fresh widget.
    pub fn new(config: &ViewConfig) -> Self {
        Self {
            view: TicTacToeView::new(config),
            cursor: Position::default(),
            status_message: "Click a cell or press Enter to place a mark.".to_string(),
            board_area: Rect::default(),
            redraw: true,
            should_quit: false,
        }
    }

    /// Returns the widget.
    pub fn view(&self) -> &TicTacToeView {
        &self.view
    }

    /// Returns the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Returns the status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Terminal area occupied by the board canvas.
    pub fn board_area(&self) -> Rect {
        self.board_area
    }

    /// Whether the user asked to exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns whether the screen needs redrawing, clearing the request.
    pub fn take_redraw(&mut self) -> bool {
        let invalidated = self.view.take_invalidated();
        std::mem::replace(&mut self.redraw, false) || invalidated
    }

    /// Lays the screen out for a terminal of the given area.
    ///
    /// One terminal column is one surface unit wide and one row is two units
    /// tall, so the canvas looks roughly square.
    #[instrument(skip(self))]
    pub fn resize(&mut self, area: Rect) {
        let screen = ui::screen_layout(area);
        let (width, height) = self.view.on_measure(
            i32::from(screen.board.width),
            i32::from(screen.board.height) * 2,
        );
        self.board_area = ui::center_rect(
            screen.board,
            u16::try_from(width).unwrap_or(0),
            u16::try_from(height).unwrap_or(0).div_ceil(2),
        );
        self.view.on_size_changed(width, height);
        self.redraw = true;
        debug!(board_area = ?self.board_area, side = width, "Screen laid out");
    }

    /// Saves the widget with the host state as parent.
    pub fn save(&self) -> InstanceState<HostState> {
        self.view.save_instance_state(HostState {
            cursor: self.cursor,
        })
    }

    /// Restores the host state carried with a saved widget, then the widget.
    ///
    /// The host state is applied even when the saved board is rejected.
    pub fn restore(&mut self, state: InstanceState<HostState>) -> Result<(), BoardError> {
        let (host, restored) = self.view.restore_instance_state(state);
        self.cursor = host.cursor;
        self.redraw = true;
        restored?;
        self.status_message = format!(
            "Board restored. {} to move.",
            self.view.board().next_mark()
        );
        Ok(())
    }

    /// Handles a terminal event.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key(key_action(key.code))
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => self.resize(Rect::new(0, 0, width, height)),
            _ => {}
        }
    }

    fn handle_key(&mut self, action: KeyAction) {
        match action {
            KeyAction::Move(step) => {
                self.cursor = self.cursor.step(step);
                self.redraw = true;
            }
            KeyAction::PlaceAtCursor => self.release_over_cursor(),
            KeyAction::PlaceAt(position) => {
                self.cursor = position;
                self.release_over_cursor();
            }
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Ignore => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let Some(phase) = pointer_phase(mouse.kind) else {
            return;
        };
        let Some((x, y)) = self.surface_point(mouse.column, mouse.row) else {
            return;
        };
        self.dispatch(PointerEvent::new(phase, x, y));
    }

    /// Synthesizes a release at the center of the cursor cell.
    fn release_over_cursor(&mut self) {
        let Some(rect) = self.view.geometry().cell_rect(self.cursor.to_index()) else {
            return;
        };
        let (x, y) = rect.center();
        self.dispatch(PointerEvent::new(PointerPhase::Release, x as i32, y as i32));
    }

    fn dispatch(&mut self, event: PointerEvent) {
        match self.view.handle_pointer(event) {
            TouchOutcome::Consumed => {}
            TouchOutcome::Missed => {
                self.status_message = "Board too small or outside the grid.".to_string();
                self.redraw = true;
            }
            TouchOutcome::Released(Placement::Placed { mark, index }) => {
                if let Some(position) = Position::from_index(index) {
                    self.cursor = position;
                    self.status_message = format!(
                        "{} placed at {}. {} to move.",
                        mark,
                        position,
                        self.view.board().next_mark()
                    );
                }
                self.redraw = true;
            }
            TouchOutcome::Released(Placement::AlreadyOccupied) => {}
        }
    }

    /// Converts a terminal cell to surface coordinates, or `None` outside
    /// the canvas.
    fn surface_point(&self, column: u16, row: u16) -> Option<(i32, i32)> {
        let area = self.board_area;
        if column < area.x || column >= area.right() || row < area.y || row >= area.bottom() {
            return None;
        }
        let x = i32::from(column - area.x);
        let y = i32::from(row - area.y) * 2 + 1;
        Some((x, y))
    }
}
