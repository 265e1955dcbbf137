//! Stateless board rendering.
//!
//! Rendering is a pure function of the board, the grid and the paint. The
//! host supplies a [`Canvas`] that turns the draw calls into pixels (or
//! terminal cells).

use crate::board::{BoardState, Cell};
use crate::config::{PaintColor, ViewConfig};
use crate::geometry::{CellRect, Geometry};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Stroke settings shared by every draw call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    /// Stroke color.
    pub color: PaintColor,
    /// Stroke width in surface units.
    pub stroke_width: f32,
}

impl Paint {
    /// Builds the paint described by a configuration.
    pub fn from_config(config: &ViewConfig) -> Self {
        Self {
            color: *config.color(),
            stroke_width: config.stroke_width(),
        }
    }
}

impl Default for Paint {
    fn default() -> Self {
        Self::from_config(&ViewConfig::default())
    }
}

/// Drawing surface for the renderer, in surface units (y grows downward).
pub trait Canvas {
    /// Strokes the outline of a rectangle.
    fn draw_rect(&mut self, rect: CellRect, paint: &Paint);

    /// Strokes a circle.
    fn draw_circle(&mut self, center: (f64, f64), radius: f64, paint: &Paint);

    /// Strokes a straight line.
    fn draw_line(&mut self, from: (f64, f64), to: (f64, f64), paint: &Paint);
}

/// A single recorded draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    /// Rectangle outline.
    Rect(CellRect),
    /// Circle outline.
    Circle {
        /// Center point.
        center: (f64, f64),
        /// Radius.
        radius: f64,
    },
    /// Line segment.
    Line {
        /// Start point.
        from: (f64, f64),
        /// End point.
        to: (f64, f64),
    },
}

/// Canvas that records draw calls instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    /// Creates an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded draw calls, in order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of recorded circles.
    pub fn circle_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
            .count()
    }

    /// Number of recorded lines.
    pub fn line_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { .. }))
            .count()
    }
}

impl Canvas for RecordingCanvas {
    fn draw_rect(&mut self, rect: CellRect, _paint: &Paint) {
        self.ops.push(DrawOp::Rect(rect));
    }

    fn draw_circle(&mut self, center: (f64, f64), radius: f64, _paint: &Paint) {
        self.ops.push(DrawOp::Circle { center, radius });
    }

    fn draw_line(&mut self, from: (f64, f64), to: (f64, f64), _paint: &Paint) {
        self.ops.push(DrawOp::Line { from, to });
    }
}

/// Draws the grid and every mark.
///
/// Each cell outline is stroked first. Circle cells get a centered circle of
/// radius one third of the cell side; Cross cells get both diagonals, inset
/// from the cell corners by `cross_inset` times the cell side.
#[instrument(skip_all, fields(side = geometry.side()))]
pub fn render(
    board: &BoardState,
    geometry: &Geometry,
    paint: &Paint,
    cross_inset: f32,
    canvas: &mut impl Canvas,
) {
    for rect in geometry.cell_rects() {
        canvas.draw_rect(rect, paint);
    }

    let cell_side = f64::from(geometry.cell_side());
    let inset = cell_side * f64::from(cross_inset);

    for (rect, cell) in geometry.cell_rects().zip(board.cells()) {
        match cell {
            Cell::Blank => {}
            Cell::Circle => canvas.draw_circle(rect.center(), cell_side / 3.0, paint),
            Cell::Cross => {
                let left = f64::from(rect.left) + inset;
                let top = f64::from(rect.top) + inset;
                let right = f64::from(rect.right) - inset;
                let bottom = f64::from(rect.bottom) - inset;
                canvas.draw_line((left, top), (right, bottom), paint);
                canvas.draw_line((right, top), (left, bottom), paint);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_board_draws_grid_only() {
        let mut canvas = RecordingCanvas::new();
        render(
            &BoardState::new(),
            &Geometry::new(300),
            &Paint::default(),
            0.25,
            &mut canvas,
        );
        assert_eq!(canvas.ops().len(), 9);
        assert!(canvas.ops().iter().all(|op| matches!(op, DrawOp::Rect(_))));
    }

    #[test]
    fn test_marks_are_drawn_in_their_cells() {
        let mut board = BoardState::new();
        board.place_mark(4).unwrap();
        board.place_mark(0).unwrap();

        let mut canvas = RecordingCanvas::new();
        render(&board, &Geometry::new(300), &Paint::default(), 0.25, &mut canvas);

        assert_eq!(canvas.circle_count(), 1);
        assert_eq!(canvas.line_count(), 2);
        assert!(canvas.ops().contains(&DrawOp::Circle {
            center: (150.0, 150.0),
            radius: 100.0 / 3.0,
        }));
        assert!(canvas.ops().contains(&DrawOp::Line {
            from: (25.0, 25.0),
            to: (75.0, 75.0),
        }));
        assert!(canvas.ops().contains(&DrawOp::Line {
            from: (75.0, 25.0),
            to: (25.0, 75.0),
        }));
    }
}
