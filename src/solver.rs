//! Breadth-first shortest-path search over a maze.
//!
//! The solver backs the games' "hint" feature. It is deliberately robust
//! against mazes that violate the generator's connectivity invariant
//! (hand-authored or corrupted mazes): unreachability is a defined
//! outcome, never a panic.

use crate::grid::{CellState, Coord};
use crate::maze::Maze;
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Outcome of a solve: either a shortest path or a statement that no
/// path exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// A shortest path (by cell count) from `from` to `to`, inclusive.
    ///
    /// Multiple shortest paths may exist after braiding; the one
    /// returned is fixed by the BFS expansion order (north, east,
    /// south, west), so it is deterministic for a given maze.
    Path(Vec<Coord>),
    /// The endpoints lie in different connected components.
    NotReachable,
}

/// Work counters from a solve, used to verify the linear-in-cells bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveMetrics {
    /// Number of cells dequeued during the search. BFS visits each
    /// passage cell at most once, so this never exceeds the cell count.
    pub visited_cells: usize,
}

/// Error that can occur when requesting a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SolveError {
    /// An endpoint is a wall cell or outside the maze entirely.
    /// Precondition violation: the caller must supply passage cells.
    #[display("Endpoint {} is not a passage cell", _0)]
    InvalidEndpoint(Coord),
}

impl std::error::Error for SolveError {}

/// Computes a shortest path between two passage cells.
///
/// # Errors
///
/// Returns `SolveError::InvalidEndpoint` if `from` or `to` is not a
/// passage cell of the maze.
#[instrument(skip(maze), fields(width = maze.width(), height = maze.height()))]
pub fn solve(maze: &Maze, from: Coord, to: Coord) -> Result<SolveOutcome, SolveError> {
    solve_with_metrics(maze, from, to).map(|(outcome, _)| outcome)
}

/// Like [`solve`], but also reports how much work the search did.
#[instrument(skip(maze), fields(width = maze.width(), height = maze.height()))]
pub fn solve_with_metrics(
    maze: &Maze,
    from: Coord,
    to: Coord,
) -> Result<(SolveOutcome, SolveMetrics), SolveError> {
    for endpoint in [from, to] {
        if !maze.is_passage(endpoint.x, endpoint.y) {
            return Err(SolveError::InvalidEndpoint(endpoint));
        }
    }

    let grid = maze.grid();
    let width = grid.width() as usize;
    let cell_count = width * grid.height() as usize;
    let index = |c: Coord| c.y as usize * width + c.x as usize;

    let mut predecessor: Vec<Option<Coord>> = vec![None; cell_count];
    let mut seen = vec![false; cell_count];
    let mut queue = VecDeque::new();
    let mut visited_cells = 0usize;

    seen[index(from)] = true;
    queue.push_back(from);

    while let Some(current) = queue.pop_front() {
        visited_cells += 1;
        if current == to {
            break;
        }
        for neighbor in grid.neighbors4(current) {
            if grid.get(neighbor) == Ok(CellState::Passage) && !seen[index(neighbor)] {
                seen[index(neighbor)] = true;
                predecessor[index(neighbor)] = Some(current);
                queue.push_back(neighbor);
            }
        }
    }

    let metrics = SolveMetrics { visited_cells };

    if !seen[index(to)] {
        debug!(%from, %to, visited_cells, "endpoints not connected");
        return Ok((SolveOutcome::NotReachable, metrics));
    }

    // Walk predecessors back from the target, then reverse.
    let mut path = vec![to];
    let mut current = to;
    while current != from {
        current = predecessor[index(current)]
            .expect("every seen cell after the start has a predecessor");
        path.push(current);
    }
    path.reverse();

    debug!(%from, %to, path_len = path.len(), visited_cells, "shortest path found");
    Ok((SolveOutcome::Path(path), metrics))
}
