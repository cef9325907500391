//! The generated maze value, consumed read-only by solver and session.

use crate::grid::{CellState, Coord, Grid, GridError};
use serde::{Deserialize, Serialize};

/// A grid whose `Passage` cells form a single connected component
/// containing the designated `start` and `end` coordinates.
///
/// A maze is created once per game by the generator and never mutated
/// afterward: there are no public mutators, and every consumer reads it
/// through `&` access. Player movement is tracked externally as a
/// coordinate validated against `is_passage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maze {
    grid: Grid,
    start: Coord,
    end: Coord,
}

impl Maze {
    /// Wraps a grid with its endpoints.
    ///
    /// Exposed so that tests and tooling can hand-author mazes; such
    /// mazes are not guaranteed connected, which is exactly why the
    /// solver treats unreachability as a value rather than a panic.
    ///
    /// # Errors
    ///
    /// Returns `GridError::OutOfBounds` if either endpoint lies
    /// outside the grid.
    pub fn new(grid: Grid, start: Coord, end: Coord) -> Result<Self, GridError> {
        for endpoint in [start, end] {
            if !grid.contains(endpoint) {
                return Err(GridError::OutOfBounds(endpoint, grid.width(), grid.height()));
            }
        }
        Ok(Self { grid, start, end })
    }

    /// Returns the underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the entry coordinate.
    pub fn start(&self) -> Coord {
        self.start
    }

    /// Returns the exit coordinate.
    pub fn end(&self) -> Coord {
        self.end
    }

    /// Returns the maze width (number of columns).
    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    /// Returns the maze height (number of rows).
    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    /// Returns true if `(x, y)` is in bounds and traversable.
    ///
    /// Unlike the grid accessors this never fails: rendering and input
    /// code probe arbitrary coordinates, and "outside the maze" simply
    /// means "not a passage" there.
    pub fn is_passage(&self, x: i32, y: i32) -> bool {
        self.grid.is_passage(Coord::new(x, y))
    }

    /// Serializes the maze shape for rendering: one row per grid row,
    /// `0` for walls and `1` for passages.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.height())
            .map(|y| {
                (0..self.width())
                    .map(|x| match self.grid.get(Coord::new(x, y)) {
                        Ok(CellState::Passage) => 1,
                        _ => 0,
                    })
                    .collect()
            })
            .collect()
    }
}

impl std::fmt::Display for Maze {
    /// Formats the maze as ASCII art: `#` walls, spaces for passages,
    /// `S` and `E` marking the endpoints.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                let coord = Coord::new(x, y);
                let symbol = if coord == self.start {
                    'S'
                } else if coord == self.end {
                    'E'
                } else if self.grid.is_passage(coord) {
                    ' '
                } else {
                    '#'
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
