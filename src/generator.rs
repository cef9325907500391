//! Randomized depth-first maze carving.
//!
//! The generator works on the "double resolution" pattern: maze chambers
//! (nodes) sit on even coordinates, and the odd cells between them are the
//! walls the carver knocks out when linking two adjacent nodes. Depth-first
//! carving visits every node exactly once, so the passages form a spanning
//! tree over the nodes - a perfect maze - before any braiding runs.

use crate::grid::{CellState, Coord, Grid};
use crate::maze::Maze;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Smallest usable axis: a meaningful maze needs at least one interior node.
pub const MIN_DIMENSION: i32 = 3;

/// Carving directions as node-to-node offsets, in the same north, east,
/// south, west order as `Grid::neighbors4`. Shuffled per step.
const DIRECTIONS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Braiding policy for a generation run.
///
/// Braiding knocks out extra walls after carving to introduce loops,
/// trading the perfect maze's single-path purity for alternate routes.
/// A braided maze is still fully connected; it just stops being a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Braid {
    /// No braiding: exactly one simple path between any two passages.
    #[default]
    Perfect,
    /// Attempt `attempts` random wall removals; each succeeds only when
    /// the wall has exactly two passage neighbors, so removal creates a
    /// short loop rather than a wide-open room.
    Loops {
        /// Number of random wall cells to consider.
        attempts: usize,
    },
}

/// Options for a generation run.
///
/// Generation is a pure function of `(width, height, start, end, seed)`:
/// the same inputs always produce bit-identical mazes. Leaving `seed`
/// unset draws fresh entropy, giving a fresh puzzle each call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GeneratorConfig {
    /// Seed for the carving RNG. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Entry coordinate. Defaults to the top-left cell.
    pub start: Option<Coord>,
    /// Exit coordinate. Defaults to the bottom-right cell.
    pub end: Option<Coord>,
    /// Braiding policy applied after carving.
    pub braid: Braid,
}

/// Error that can occur when generating a maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GenerateError {
    /// Requested dimensions cannot hold a maze.
    #[display("Invalid dimensions {}x{}: both axes must be at least {}", _0, _1, MIN_DIMENSION)]
    InvalidDimension(i32, i32),

    /// A configured endpoint lies outside the grid.
    #[display("Endpoint {} outside {}x{} grid", _0, _1, _2)]
    EndpointOutOfBounds(Coord, i32, i32),
}

impl std::error::Error for GenerateError {}

/// Generates a maze with default options: random seed, entry at the
/// top-left cell, exit at the bottom-right cell, no braiding.
///
/// # Errors
///
/// Returns `GenerateError::InvalidDimension` if either axis is below
/// [`MIN_DIMENSION`].
#[instrument]
pub fn generate(width: i32, height: i32) -> Result<Maze, GenerateError> {
    generate_with(width, height, GeneratorConfig::default())
}

/// Generates a maze with explicit options.
///
/// # Errors
///
/// Returns `GenerateError::InvalidDimension` for degenerate dimensions
/// and `GenerateError::EndpointOutOfBounds` for endpoints outside the
/// grid. The carve itself cannot fail: it is a finite depth-first walk
/// over a finite node set.
#[instrument]
pub fn generate_with(
    width: i32,
    height: i32,
    config: GeneratorConfig,
) -> Result<Maze, GenerateError> {
    if width < MIN_DIMENSION || height < MIN_DIMENSION {
        return Err(GenerateError::InvalidDimension(width, height));
    }

    let mut grid = Grid::new(width, height)
        .map_err(|_| GenerateError::InvalidDimension(width, height))?;

    let start = config.start.unwrap_or(Coord::new(0, 0));
    let end = config.end.unwrap_or(Coord::new(width - 1, height - 1));
    for endpoint in [start, end] {
        if !grid.contains(endpoint) {
            return Err(GenerateError::EndpointOutOfBounds(endpoint, width, height));
        }
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    carve(&mut grid, &mut rng, nearest_node(start));
    punch_endpoint(&mut grid, start);
    punch_endpoint(&mut grid, end);

    if let Braid::Loops { attempts } = config.braid {
        braid(&mut grid, &mut rng, attempts);
    }

    let passages = grid
        .cells()
        .iter()
        .filter(|c| **c == CellState::Passage)
        .count();
    debug!(width, height, passages, ?config.braid, "maze carved");

    Maze::new(grid, start, end)
        .map_err(|_| GenerateError::EndpointOutOfBounds(start, width, height))
}

/// Snaps a coordinate to the node lattice (nearest even coordinate at
/// or below it). Validated endpoints always snap to an in-bounds node.
fn nearest_node(coord: Coord) -> Coord {
    Coord::new(coord.x - coord.x.rem_euclid(2), coord.y - coord.y.rem_euclid(2))
}

/// Iterative recursive-backtracker carve over the node lattice.
///
/// An explicit stack replaces call-stack recursion so large mazes cannot
/// overflow the stack. A node is unvisited exactly while its cell is
/// still `Wall`.
fn carve(grid: &mut Grid, rng: &mut StdRng, origin: Coord) {
    grid.set(origin, CellState::Passage)
        .expect("carve origin is in bounds");
    let mut stack = vec![origin];

    while let Some(current) = stack.last().copied() {
        let mut directions = DIRECTIONS;
        directions.shuffle(rng);

        let mut advanced = false;
        for (dx, dy) in directions {
            let node = Coord::new(current.x + 2 * dx, current.y + 2 * dy);
            if grid.contains(node) && !grid.is_passage(node) {
                let wall = Coord::new(current.x + dx, current.y + dy);
                grid.set(wall, CellState::Passage)
                    .expect("wall between in-bounds nodes is in bounds");
                grid.set(node, CellState::Passage)
                    .expect("node is in bounds");
                stack.push(node);
                advanced = true;
                break;
            }
        }

        if !advanced {
            stack.pop();
        }
    }
}

/// Punches the entry or exit open after carving.
///
/// Endpoints may sit off the node lattice (on odd coordinates, e.g. the
/// bottom-right cell of an even-sized grid). Clearing the endpoint, its
/// lattice-aligned column neighbor, and the nearest node links it to the
/// carved interior by at most two 4-adjacent steps.
fn punch_endpoint(grid: &mut Grid, endpoint: Coord) {
    let node = nearest_node(endpoint);
    for cell in [endpoint, Coord::new(node.x, endpoint.y), node] {
        grid.set(cell, CellState::Passage)
            .expect("endpoint link cells are in bounds");
    }
}

/// Braiding pass: converts random interior wall cells with exactly two
/// passage neighbors into passages, adding loops without opening rooms.
fn braid(grid: &mut Grid, rng: &mut StdRng, attempts: usize) {
    let mut opened = 0usize;
    for _ in 0..attempts {
        let coord = Coord::new(
            rng.gen_range(1..grid.width() - 1),
            rng.gen_range(1..grid.height() - 1),
        );
        if grid.is_passage(coord) {
            continue;
        }
        let open_neighbors = grid
            .neighbors4(coord)
            .into_iter()
            .filter(|&n| grid.is_passage(n))
            .count();
        if open_neighbors == 2 {
            grid.set(coord, CellState::Passage)
                .expect("interior cell is in bounds");
            opened += 1;
        }
    }
    debug!(attempts, opened, "braiding pass complete");
}
