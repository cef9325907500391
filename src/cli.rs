//! Command-line interface for the mazecore demo binary.

use clap::{Parser, Subcommand};

/// Mazecore - generate and solve mazes in the terminal
#[derive(Parser, Debug)]
#[command(name = "mazecore")]
#[command(about = "Maze generation and solving engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a maze and print it as ASCII art
    Generate {
        /// Maze width in cells
        #[arg(short = 'W', long, default_value = "21")]
        width: i32,

        /// Maze height in cells
        #[arg(short = 'H', long, default_value = "21")]
        height: i32,

        /// RNG seed for reproducible mazes (fresh puzzle if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Braiding attempts: wall removals that add loops
        #[arg(long)]
        braid: Option<usize>,
    },

    /// Generate a maze and print it with the shortest path overlaid
    Solve {
        /// Maze width in cells
        #[arg(short = 'W', long, default_value = "21")]
        width: i32,

        /// Maze height in cells
        #[arg(short = 'H', long, default_value = "21")]
        height: i32,

        /// RNG seed for reproducible mazes (fresh puzzle if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Braiding attempts: wall removals that add loops
        #[arg(long)]
        braid: Option<usize>,
    },
}
