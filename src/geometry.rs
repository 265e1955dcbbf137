//! Mapping between a square drawing surface and the nine cells.
//!
//! Coordinates are integer surface units with the origin at the top-left
//! corner and y growing downward. Cells use half-open bounds
//! `[left, right) x [top, bottom)`, so a point on a shared border belongs to
//! the cell to its right or below.

use crate::board::CELL_COUNT;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Axis-aligned cell rectangle in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRect {
    /// Left edge (inclusive).
    pub left: i32,
    /// Top edge (inclusive).
    pub top: i32,
    /// Right edge (exclusive).
    pub right: i32,
    /// Bottom edge (exclusive).
    pub bottom: i32,
}

impl CellRect {
    /// Width of the rectangle.
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Height of the rectangle.
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Exact center point.
    pub fn center(&self) -> (f64, f64) {
        (
            f64::from(self.left + self.right) / 2.0,
            f64::from(self.top + self.bottom) / 2.0,
        )
    }

    /// Checks containment under half-open bounds.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}

/// Square surface divided into a 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Geometry {
    side: i32,
    cell_side: i32,
}

impl Geometry {
    /// Side the widget asks for given the space offered: always square.
    pub fn measure(width: i32, height: i32) -> i32 {
        width.min(height).max(0)
    }

    /// Creates the grid for a surface of the given side.
    #[instrument]
    pub fn new(side: i32) -> Self {
        let side = side.max(0);
        Self {
            side,
            cell_side: side / 3,
        }
    }

    /// Recomputes the grid after the surface was resized.
    #[instrument(skip(self))]
    pub fn on_size_changed(&mut self, width: i32, height: i32) {
        *self = Self::new(Self::measure(width, height));
        debug!(side = self.side, cell_side = self.cell_side, "Grid regenerated");
    }

    /// Side of the whole surface.
    pub fn side(&self) -> i32 {
        self.side
    }

    /// Side of a single cell.
    pub fn cell_side(&self) -> i32 {
        self.cell_side
    }

    /// Rectangle of the cell at `index` (row-major), or `None` past 8.
    pub fn cell_rect(&self, index: usize) -> Option<CellRect> {
        if index >= CELL_COUNT {
            return None;
        }
        let row = (index / 3) as i32;
        let column = (index % 3) as i32;
        let left = column * self.cell_side;
        let top = row * self.cell_side;
        Some(CellRect {
            left,
            top,
            right: left + self.cell_side,
            bottom: top + self.cell_side,
        })
    }

    /// All nine cell rectangles in row-major order.
    pub fn cell_rects(&self) -> impl Iterator<Item = CellRect> + '_ {
        (0..CELL_COUNT).filter_map(|index| self.cell_rect(index))
    }

    /// Index of the cell containing `(x, y)`, if any.
    ///
    /// Points left of or above the origin, in the strip left over when the
    /// side is not a multiple of three, or on an empty surface map to `None`.
    #[instrument(skip(self), fields(cell_side = self.cell_side))]
    pub fn cell_index_at(&self, x: i32, y: i32) -> Option<usize> {
        if self.cell_side <= 0 || x < 0 || y < 0 {
            return None;
        }
        let column = x / self.cell_side;
        let row = y / self.cell_side;
        if column >= 3 || row >= 3 {
            return None;
        }
        Some((row * 3 + column) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_takes_smaller_side() {
        assert_eq!(Geometry::measure(400, 300), 300);
        assert_eq!(Geometry::measure(120, 800), 120);
        assert_eq!(Geometry::measure(-5, 10), 0);
    }

    #[test]
    fn test_cell_rects_tile_the_surface() {
        let geometry = Geometry::new(300);
        let rects: Vec<_> = geometry.cell_rects().collect();
        assert_eq!(rects.len(), 9);
        assert_eq!(
            rects[0],
            CellRect {
                left: 0,
                top: 0,
                right: 100,
                bottom: 100,
            }
        );
        assert_eq!(
            rects[5],
            CellRect {
                left: 200,
                top: 100,
                right: 300,
                bottom: 200,
            }
        );
        assert!(geometry.cell_rect(9).is_none());
    }

    #[test]
    fn test_index_agrees_with_rects() {
        let geometry = Geometry::new(91);
        for (index, rect) in geometry.cell_rects().enumerate() {
            let (cx, cy) = rect.center();
            assert_eq!(geometry.cell_index_at(cx as i32, cy as i32), Some(index));
            assert!(rect.contains(rect.left, rect.top));
            assert!(!rect.contains(rect.right, rect.top));
        }
    }

    #[test]
    fn test_borders_are_half_open() {
        let geometry = Geometry::new(300);
        assert_eq!(geometry.cell_index_at(99, 0), Some(0));
        assert_eq!(geometry.cell_index_at(100, 0), Some(1));
        assert_eq!(geometry.cell_index_at(0, 200), Some(6));
        assert_eq!(geometry.cell_index_at(299, 299), Some(8));
        assert_eq!(geometry.cell_index_at(300, 0), None);
    }

    #[test]
    fn test_slack_strip_and_empty_surface() {
        let geometry = Geometry::new(100);
        assert_eq!(geometry.cell_side(), 33);
        assert_eq!(geometry.cell_index_at(98, 10), None);
        assert_eq!(geometry.cell_index_at(-1, 10), None);
        assert_eq!(Geometry::default().cell_index_at(0, 0), None);
    }

    #[test]
    fn test_size_change_uses_smaller_side() {
        let mut geometry = Geometry::new(300);
        geometry.on_size_changed(900, 600);
        assert_eq!(geometry.side(), 600);
        assert_eq!(geometry.cell_side(), 200);
    }
}
