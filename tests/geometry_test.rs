//! Tests for surface-to-cell mapping.

use tictactoe_board::{Geometry, Position};

#[test]
fn test_hit_test_on_300_surface() {
    let geometry = Geometry::new(300);
    assert_eq!(geometry.cell_index_at(10, 10), Some(0));
    assert_eq!(geometry.cell_index_at(150, 10), Some(1));
    assert_eq!(geometry.cell_index_at(10, 150), Some(3));
    assert_eq!(geometry.cell_index_at(250, 250), Some(8));
}

#[test]
fn test_cell_origin_is_row_major() {
    let geometry = Geometry::new(300);
    for position in Position::ALL {
        let rect = geometry.cell_rect(position.to_index()).unwrap();
        assert_eq!(rect.left, position.column() as i32 * 100);
        assert_eq!(rect.top, position.row() as i32 * 100);
        assert_eq!(rect.width(), 100);
        assert_eq!(rect.height(), 100);
    }
}

#[test]
fn test_points_outside_grid_map_to_none() {
    let geometry = Geometry::new(300);
    assert_eq!(geometry.cell_index_at(-1, 0), None);
    assert_eq!(geometry.cell_index_at(0, -1), None);
    assert_eq!(geometry.cell_index_at(300, 150), None);
    assert_eq!(geometry.cell_index_at(150, 300), None);
}
