//! Tests for the grid model: construction, bounds enforcement, neighbors.

use mazecore::{CellState, Coord, Grid, GridError};

#[test]
fn test_new_grid_is_all_walls() {
    let grid = Grid::new(4, 3).expect("valid dimensions");
    assert_eq!(grid.width(), 4);
    assert_eq!(grid.height(), 3);
    for y in 0..3 {
        for x in 0..4 {
            assert_eq!(grid.get(Coord::new(x, y)), Ok(CellState::Wall));
        }
    }
}

#[test]
fn test_degenerate_dimensions_rejected() {
    assert!(matches!(
        Grid::new(0, 5),
        Err(GridError::InvalidDimension(0, 5))
    ));
    assert!(matches!(
        Grid::new(5, 0),
        Err(GridError::InvalidDimension(5, 0))
    ));
    assert!(matches!(
        Grid::new(-1, -1),
        Err(GridError::InvalidDimension(-1, -1))
    ));
}

#[test]
fn test_get_out_of_bounds_fails() {
    let grid = Grid::new(3, 3).expect("valid dimensions");

    // One representative negative and one over-range coordinate per axis.
    for coord in [
        Coord::new(-1, 0),
        Coord::new(0, -1),
        Coord::new(3, 0),
        Coord::new(0, 3),
    ] {
        assert!(
            matches!(grid.get(coord), Err(GridError::OutOfBounds(c, 3, 3)) if c == coord),
            "expected OutOfBounds for {}",
            coord
        );
    }
}

#[test]
fn test_set_out_of_bounds_fails() {
    let mut grid = Grid::new(3, 3).expect("valid dimensions");

    for coord in [
        Coord::new(-1, 0),
        Coord::new(0, -1),
        Coord::new(3, 0),
        Coord::new(0, 3),
    ] {
        assert!(matches!(
            grid.set(coord, CellState::Passage),
            Err(GridError::OutOfBounds(..))
        ));
    }
}

#[test]
fn test_set_then_get_round_trips() {
    let mut grid = Grid::new(3, 3).expect("valid dimensions");
    let coord = Coord::new(1, 2);

    grid.set(coord, CellState::Passage).expect("in bounds");
    assert_eq!(grid.get(coord), Ok(CellState::Passage));
    assert!(grid.is_passage(coord));

    grid.set(coord, CellState::Wall).expect("in bounds");
    assert_eq!(grid.get(coord), Ok(CellState::Wall));
    assert!(!grid.is_passage(coord));
}

#[test]
fn test_neighbors4_fixed_order() {
    let grid = Grid::new(3, 3).expect("valid dimensions");

    // Interior cell: north, east, south, west.
    assert_eq!(
        grid.neighbors4(Coord::new(1, 1)),
        vec![
            Coord::new(1, 0),
            Coord::new(2, 1),
            Coord::new(1, 2),
            Coord::new(0, 1),
        ]
    );
}

#[test]
fn test_neighbors4_clipped_at_edges() {
    let grid = Grid::new(3, 3).expect("valid dimensions");

    // Top-left corner keeps only east and south, still in order.
    assert_eq!(
        grid.neighbors4(Coord::new(0, 0)),
        vec![Coord::new(1, 0), Coord::new(0, 1)]
    );

    // Bottom-right corner keeps only north and west.
    assert_eq!(
        grid.neighbors4(Coord::new(2, 2)),
        vec![Coord::new(2, 1), Coord::new(1, 2)]
    );
}

#[test]
fn test_adjacency_is_4_directional() {
    let center = Coord::new(1, 1);
    assert!(center.is_adjacent(Coord::new(1, 0)));
    assert!(center.is_adjacent(Coord::new(0, 1)));
    // No diagonals, no self.
    assert!(!center.is_adjacent(Coord::new(0, 0)));
    assert!(!center.is_adjacent(center));
    assert!(!center.is_adjacent(Coord::new(3, 1)));
}
