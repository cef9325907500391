//! Mazecore - maze generation and shortest-path solving engine
//!
//! This library provides the grid-based maze logic shared by the maze games:
//! deterministic maze carving, breadth-first shortest-path search, and
//! per-game session state.
//!
//! # Architecture
//!
//! - **Grid**: fixed-size 2D cell grid of `Wall`/`Passage` states
//! - **Generator**: randomized depth-first carving with optional braiding
//! - **Solver**: breadth-first shortest-path search with predecessor pointers
//! - **Session**: per-game player position, move counter, and elapsed timer
//! - **Records**: best-score bookkeeping serialized as JSON
//!
//! # Example
//!
//! ```
//! use mazecore::{generate_with, solve, GeneratorConfig, SolveOutcome};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GeneratorConfig {
//!     seed: Some(7),
//!     ..Default::default()
//! };
//! let maze = generate_with(15, 15, config)?;
//!
//! match solve(&maze, maze.start(), maze.end())? {
//!     SolveOutcome::Path(path) => assert_eq!(path[0], maze.start()),
//!     SolveOutcome::NotReachable => unreachable!("generated mazes are connected"),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod generator;
mod grid;
mod maze;
mod records;
mod session;
mod solver;

// Crate-level exports - Grid model
pub use grid::{CellState, Coord, Grid, GridError};

// Crate-level exports - Maze generation
pub use generator::{Braid, GenerateError, GeneratorConfig, generate, generate_with};

// Crate-level exports - Maze value
pub use maze::Maze;

// Crate-level exports - Path solving
pub use solver::{SolveError, SolveMetrics, SolveOutcome, solve, solve_with_metrics};

// Crate-level exports - Session management
pub use session::{Direction, GameSession, StepOutcome};

// Crate-level exports - Best-score records
pub use records::{ScoreBoard, ScoreEntry};
