//! Best-score bookkeeping.
//!
//! Records are keyed by maze dimensions so that a personal best on a
//! 15x15 maze never shadows one on a 31x31. Storage stays the caller's
//! concern; the board only round-trips itself through JSON.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// A finished game's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Number of successful moves taken.
    pub moves: u32,
    /// Elapsed time in milliseconds.
    pub millis: u64,
}

impl ScoreEntry {
    /// Returns true if this entry beats `other`: fewer moves wins,
    /// ties broken by elapsed time.
    pub fn beats(&self, other: &ScoreEntry) -> bool {
        (self.moves, self.millis) < (other.moves, other.millis)
    }
}

/// Best results per maze dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    entries: HashMap<String, ScoreEntry>,
}

impl ScoreBoard {
    /// Creates an empty score board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the storage key for a maze size, e.g. `"15x15"`.
    pub fn dimension_key(width: i32, height: i32) -> String {
        format!("{}x{}", width, height)
    }

    /// Returns the best recorded entry for the given maze size.
    pub fn best(&self, width: i32, height: i32) -> Option<&ScoreEntry> {
        self.entries.get(&Self::dimension_key(width, height))
    }

    /// Records an entry if it beats the current best for its size.
    /// Returns true if the board changed.
    #[instrument(skip(self))]
    pub fn record(&mut self, width: i32, height: i32, entry: ScoreEntry) -> bool {
        let key = Self::dimension_key(width, height);
        match self.entries.get(&key) {
            Some(best) if !entry.beats(best) => {
                debug!(key, "entry does not beat current best");
                false
            }
            _ => {
                debug!(key, moves = entry.moves, millis = entry.millis, "new best");
                self.entries.insert(key, entry);
                true
            }
        }
    }

    /// Serializes the board to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Restores a board from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` for malformed input.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
