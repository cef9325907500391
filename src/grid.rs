//! Fixed-size 2D cell grid underlying every maze.
//!
//! The grid is the only mutable structure in the core, and it is only
//! mutated by the generator. Coordinates are signed so that callers
//! passing negative values hit the same fail-fast bounds check as
//! over-range values, rather than wrapping.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// A solid cell that cannot be traversed.
    Wall,
    /// A traversable cell.
    Passage,
}

/// A cell coordinate: `x` is the column, `y` the row.
///
/// `(0, 0)` is the top-left cell; `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl Coord {
    /// Creates a coordinate from column and row indices.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true if this coordinate is 4-adjacent to `other`
    /// (one unit apart in exactly one axis, no diagonals).
    pub fn is_adjacent(self, other: Coord) -> bool {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        dx + dy == 1
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Error that can occur when constructing or accessing a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GridError {
    /// Requested dimensions cannot hold a grid.
    #[display("Invalid dimensions {}x{}: both axes must be at least 1", _0, _1)]
    InvalidDimension(i32, i32),

    /// A coordinate fell outside the grid. Precondition violation:
    /// the access fails rather than clamping, so caller bugs surface.
    #[display("Coordinate {} outside {}x{} grid", _0, _1, _2)]
    OutOfBounds(Coord, i32, i32),
}

impl std::error::Error for GridError {}

/// A `width` x `height` grid of cells, stored row-major.
///
/// Dimensions are fixed at construction. All cells start as `Wall`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<CellState>,
}

impl Grid {
    /// Creates a grid with every cell set to `Wall`.
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidDimension` if either axis is below 1.
    #[instrument]
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width < 1 || height < 1 {
            return Err(GridError::InvalidDimension(width, height));
        }
        Ok(Self {
            width,
            height,
            cells: vec![CellState::Wall; width as usize * height as usize],
        })
    }

    /// Returns the grid width (number of columns).
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Returns the grid height (number of rows).
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Returns true if the coordinate lies inside the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0 && coord.x < self.width && coord.y >= 0 && coord.y < self.height
    }

    fn index(&self, coord: Coord) -> Result<usize, GridError> {
        if !self.contains(coord) {
            return Err(GridError::OutOfBounds(coord, self.width, self.height));
        }
        Ok(coord.y as usize * self.width as usize + coord.x as usize)
    }

    /// Gets the state of the cell at `coord`.
    ///
    /// # Errors
    ///
    /// Returns `GridError::OutOfBounds` for coordinates outside the grid.
    pub fn get(&self, coord: Coord) -> Result<CellState, GridError> {
        Ok(self.cells[self.index(coord)?])
    }

    /// Sets the state of the cell at `coord`.
    ///
    /// # Errors
    ///
    /// Returns `GridError::OutOfBounds` for coordinates outside the grid.
    pub fn set(&mut self, coord: Coord, state: CellState) -> Result<(), GridError> {
        let idx = self.index(coord)?;
        self.cells[idx] = state;
        Ok(())
    }

    /// Returns true if `coord` is in bounds and holds a `Passage` cell.
    pub fn is_passage(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Ok(CellState::Passage))
    }

    /// Returns the in-bounds 4-neighbors of `coord` in fixed
    /// north, east, south, west order.
    ///
    /// The order is load-bearing: the generator's direction shuffle and
    /// the solver's BFS tie-breaking are both defined relative to it.
    pub fn neighbors4(&self, coord: Coord) -> Vec<Coord> {
        const OFFSETS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
        OFFSETS
            .iter()
            .map(|&(dx, dy)| Coord::new(coord.x + dx, coord.y + dy))
            .filter(|&c| self.contains(c))
            .collect()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }
}
