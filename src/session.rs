//! Per-game session state: player position, move counter, elapsed time.
//!
//! A session is an explicit value owned by the caller and constructed
//! fresh per game - there is no ambient "current maze" state. It consumes
//! only `solve` and `is_passage` from the core and never mutates the maze.

use crate::grid::Coord;
use crate::maze::Maze;
use crate::records::ScoreEntry;
use crate::solver::{SolveError, SolveOutcome, solve};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// A cardinal movement direction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Direction {
    /// Up one row.
    North,
    /// Right one column.
    East,
    /// Down one row.
    South,
    /// Left one column.
    West,
}

impl Direction {
    /// Returns the unit coordinate offset for this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// Returns the direction that moves one step from `from` to `to`,
    /// or `None` if the coordinates are not 4-adjacent.
    pub fn between(from: Coord, to: Coord) -> Option<Direction> {
        Direction::iter().find(|direction| {
            let (dx, dy) = direction.offset();
            to.x - from.x == dx && to.y - from.y == dy
        })
    }
}

/// Result of a single player step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Player moved to the given cell; the game continues.
    Moved(Coord),
    /// The target cell is a wall or outside the maze; position and
    /// move counter are unchanged.
    Blocked,
    /// Player is standing on the exit cell.
    Finished,
}

/// A single game of maze solving.
///
/// Owns the player position, move counter, hint counter, and elapsed
/// timer. The maze itself is read-only for the whole session lifetime.
#[derive(Debug, Clone)]
pub struct GameSession {
    maze: Maze,
    player: Coord,
    moves: u32,
    hints: u32,
    started: Instant,
}

impl GameSession {
    /// Starts a session with the player on the maze's entry cell.
    #[instrument(skip(maze), fields(width = maze.width(), height = maze.height()))]
    pub fn new(maze: Maze) -> Self {
        let player = maze.start();
        info!(%player, "starting maze session");
        Self {
            maze,
            player,
            moves: 0,
            hints: 0,
            started: Instant::now(),
        }
    }

    /// Returns the maze being played.
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Returns the current player position.
    pub fn player(&self) -> Coord {
        self.player
    }

    /// Returns the number of successful moves so far.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Returns the number of hints requested so far.
    pub fn hints_used(&self) -> u32 {
        self.hints
    }

    /// Returns the time elapsed since the session started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Returns true if the player stands on the exit cell.
    pub fn is_finished(&self) -> bool {
        self.player == self.maze.end()
    }

    /// Attempts to move the player one cell in `direction`.
    ///
    /// Moves into walls or off the maze are rejected with
    /// `StepOutcome::Blocked` and do not count as moves. Once the exit
    /// is reached, further steps report `Finished` without moving.
    #[instrument(skip(self), fields(player = %self.player))]
    pub fn step(&mut self, direction: Direction) -> StepOutcome {
        if self.is_finished() {
            return StepOutcome::Finished;
        }

        let (dx, dy) = direction.offset();
        let target = Coord::new(self.player.x + dx, self.player.y + dy);

        if !self.maze.is_passage(target.x, target.y) {
            debug!(%target, "step blocked by wall");
            return StepOutcome::Blocked;
        }

        self.player = target;
        self.moves += 1;

        if self.is_finished() {
            info!(moves = self.moves, hints = self.hints, "maze completed");
            StepOutcome::Finished
        } else {
            StepOutcome::Moved(target)
        }
    }

    /// Computes a hint: the shortest path from the player's current
    /// position to the exit, inclusive of both.
    ///
    /// # Errors
    ///
    /// Returns `SolveError::InvalidEndpoint` if the session was built
    /// on a hand-authored maze whose exit is a wall cell.
    #[instrument(skip(self), fields(player = %self.player))]
    pub fn hint(&mut self) -> Result<SolveOutcome, SolveError> {
        self.hints += 1;
        solve(&self.maze, self.player, self.maze.end())
    }

    /// Snapshots the session as a score entry for the record board.
    pub fn score(&self) -> ScoreEntry {
        ScoreEntry {
            moves: self.moves,
            millis: self.elapsed().as_millis() as u64,
        }
    }
}
