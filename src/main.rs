//! Mazecore demo CLI - generate and solve mazes in the terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use mazecore::{Braid, Coord, GeneratorConfig, Maze, SolveOutcome, generate_with, solve};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            width,
            height,
            seed,
            braid,
        } => run_generate(width, height, seed, braid),
        Command::Solve {
            width,
            height,
            seed,
            braid,
        } => run_solve(width, height, seed, braid),
    }
}

fn build_config(seed: Option<u64>, braid: Option<usize>) -> GeneratorConfig {
    GeneratorConfig {
        seed,
        braid: match braid {
            Some(attempts) => Braid::Loops { attempts },
            None => Braid::Perfect,
        },
        ..Default::default()
    }
}

/// Generate a maze and print it
fn run_generate(width: i32, height: i32, seed: Option<u64>, braid: Option<usize>) -> Result<()> {
    let maze = generate_with(width, height, build_config(seed, braid))?;
    info!(width, height, ?seed, "maze generated");
    print!("{}", maze);
    Ok(())
}

/// Generate a maze and print it with the BFS solution overlaid
fn run_solve(width: i32, height: i32, seed: Option<u64>, braid: Option<usize>) -> Result<()> {
    let maze = generate_with(width, height, build_config(seed, braid))?;

    match solve(&maze, maze.start(), maze.end())? {
        SolveOutcome::Path(path) => {
            info!(width, height, path_len = path.len(), "maze solved");
            print!("{}", render_with_path(&maze, &path));
        }
        SolveOutcome::NotReachable => {
            // Cannot happen for generated mazes, but the outcome exists.
            anyhow::bail!("generated maze has no path from start to end");
        }
    }
    Ok(())
}

/// Renders the maze with path cells marked `*`, endpoints `S` and `E`.
fn render_with_path(maze: &Maze, path: &[Coord]) -> String {
    let mut out = String::new();
    for y in 0..maze.height() {
        for x in 0..maze.width() {
            let coord = Coord::new(x, y);
            let symbol = if coord == maze.start() {
                'S'
            } else if coord == maze.end() {
                'E'
            } else if path.contains(&coord) {
                '*'
            } else if maze.is_passage(x, y) {
                ' '
            } else {
                '#'
            };
            out.push(symbol);
        }
        out.push('\n');
    }
    out
}
