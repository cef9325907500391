//! Tests for maze generation: connectivity, determinism, braiding,
//! degenerate input rejection.

use mazecore::{
    Braid, Coord, GenerateError, GeneratorConfig, Maze, SolveOutcome, generate, generate_with,
    solve,
};

fn seeded(seed: u64) -> GeneratorConfig {
    GeneratorConfig {
        seed: Some(seed),
        ..Default::default()
    }
}

fn assert_connected(maze: &Maze) {
    match solve(maze, maze.start(), maze.end()).expect("endpoints are passages") {
        SolveOutcome::Path(path) => {
            assert_eq!(path[0], maze.start());
            assert_eq!(*path.last().expect("path is non-empty"), maze.end());
        }
        SolveOutcome::NotReachable => panic!(
            "generated {}x{} maze is not connected",
            maze.width(),
            maze.height()
        ),
    }
}

#[test]
fn test_generated_mazes_are_connected() {
    for (width, height) in [(3, 3), (4, 4), (5, 7), (8, 3), (13, 13), (20, 16)] {
        for seed in [0, 1, 7, 42, 1234] {
            let maze =
                generate_with(width, height, seeded(seed)).expect("valid dimensions");
            assert_connected(&maze);
        }
    }
}

#[test]
fn test_endpoints_are_passages() {
    let maze = generate_with(9, 9, seeded(5)).expect("valid dimensions");
    assert!(maze.is_passage(maze.start().x, maze.start().y));
    assert!(maze.is_passage(maze.end().x, maze.end().y));
}

#[test]
fn test_fixed_seed_is_deterministic() {
    let first = generate_with(7, 7, seeded(42)).expect("valid dimensions");
    let second = generate_with(7, 7, seeded(42)).expect("valid dimensions");

    // Bit-identical grid contents.
    assert_eq!(first, second);
    assert_eq!(first.to_rows(), second.to_rows());
}

#[test]
fn test_different_seeds_differ() {
    let first = generate_with(15, 15, seeded(1)).expect("valid dimensions");
    let second = generate_with(15, 15, seeded(2)).expect("valid dimensions");
    assert_ne!(first.to_rows(), second.to_rows());
}

#[test]
fn test_degenerate_dimensions_rejected() {
    for (width, height) in [(0, 5), (5, 0), (-1, -1), (2, 8), (8, 2)] {
        let result = generate(width, height);
        assert!(
            matches!(result, Err(GenerateError::InvalidDimension(w, h)) if w == width && h == height),
            "expected InvalidDimension for {}x{}",
            width,
            height
        );
    }
}

#[test]
fn test_custom_endpoint_out_of_bounds_rejected() {
    let config = GeneratorConfig {
        seed: Some(1),
        end: Some(Coord::new(9, 9)),
        ..Default::default()
    };
    assert!(matches!(
        generate_with(5, 5, config),
        Err(GenerateError::EndpointOutOfBounds(..))
    ));
}

#[test]
fn test_scenario_five_by_five() {
    let config = GeneratorConfig {
        seed: Some(1),
        start: Some(Coord::new(0, 0)),
        end: Some(Coord::new(4, 4)),
        ..Default::default()
    };
    let maze = generate_with(5, 5, config).expect("valid dimensions");

    assert!(maze.is_passage(0, 0));
    assert!(maze.is_passage(4, 4));

    match solve(&maze, Coord::new(0, 0), Coord::new(4, 4)).expect("passage endpoints") {
        SolveOutcome::Path(path) => {
            assert!(!path.is_empty());
            assert_eq!(path[0], Coord::new(0, 0));
            assert_eq!(*path.last().expect("non-empty"), Coord::new(4, 4));
        }
        SolveOutcome::NotReachable => panic!("5x5 scenario maze must be solvable"),
    }
}

#[test]
fn test_braided_mazes_stay_connected() {
    for seed in [3, 11, 99] {
        let config = GeneratorConfig {
            seed: Some(seed),
            braid: Braid::Loops { attempts: 200 },
            ..Default::default()
        };
        let maze = generate_with(15, 15, config).expect("valid dimensions");
        assert_connected(&maze);
    }
}

#[test]
fn test_braiding_only_opens_cells() {
    // Same seed means the carve is identical; braiding can only turn
    // additional walls into passages, never the reverse.
    let perfect = generate_with(15, 15, seeded(8)).expect("valid dimensions");
    let braided = generate_with(
        15,
        15,
        GeneratorConfig {
            seed: Some(8),
            braid: Braid::Loops { attempts: 200 },
            ..Default::default()
        },
    )
    .expect("valid dimensions");

    let count = |maze: &Maze| {
        maze.to_rows()
            .iter()
            .flatten()
            .filter(|&&cell| cell == 1)
            .count()
    };
    assert!(count(&braided) >= count(&perfect));

    // Every passage of the perfect maze survives in the braided one.
    for (perfect_row, braided_row) in perfect.to_rows().iter().zip(braided.to_rows()) {
        for (&p, b) in perfect_row.iter().zip(braided_row) {
            if p == 1 {
                assert_eq!(b, 1);
            }
        }
    }
}

#[test]
fn test_to_rows_shape() {
    let maze = generate_with(6, 4, seeded(2)).expect("valid dimensions");
    let rows = maze.to_rows();
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|row| row.len() == 6));
    assert!(rows.iter().flatten().all(|&cell| cell == 0 || cell == 1));
}

#[test]
fn test_even_dimensions_connect_offlattice_endpoints() {
    // The bottom-right endpoint of an even-sized grid sits on odd
    // coordinates, off the node lattice; entry/exit punching must still
    // link it to the carved interior.
    for seed in [0, 4, 21] {
        let maze = generate_with(10, 10, seeded(seed)).expect("valid dimensions");
        assert_eq!(maze.end(), Coord::new(9, 9));
        assert_connected(&maze);
    }
}
