// generations.rs - End-to-end simulation scenarios

use life_core::{GameOfLife, Grid, GridSize, Pattern, next_state};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn from_art(art: &[&str]) -> GameOfLife {
    let pattern = Pattern::from_art(art).unwrap();
    GameOfLife::new(Grid::from_pattern((0, 0), &pattern))
}

fn states(grid: &Grid) -> Vec<bool> {
    grid.cells().iter().map(|cell| cell.is_alive()).collect()
}

/// Full-rescan generation on a torus, without any dirty tracking.
fn reference_step(rows: usize, cols: usize, cells: &[bool]) -> Vec<bool> {
    let mut next = vec![false; cells.len()];
    for row in 0..rows {
        for col in 0..cols {
            let mut seen = Vec::new();
            for dy in [rows - 1, 0, 1] {
                for dx in [cols - 1, 0, 1] {
                    let index = ((row + dy) % rows) * cols + (col + dx) % cols;
                    if index != row * cols + col && !seen.contains(&index) {
                        seen.push(index);
                    }
                }
            }
            let live = seen.iter().filter(|&&i| cells[i]).count();
            next[row * cols + col] = next_state(cells[row * cols + col], live);
        }
    }
    next
}

#[test]
fn blinker_on_five_by_five() {
    let mut game = from_art(&[
        ".....", //
        ".....",
        ".OOO.",
        ".....",
        ".....",
    ]);
    assert_eq!(game.grid().alive_positions(), vec![(1, 2), (2, 2), (3, 2)]);

    game.run_generation();
    assert_eq!(game.grid().alive_positions(), vec![(2, 1), (2, 2), (2, 3)]);

    game.run_generation();
    assert_eq!(game.grid().alive_positions(), vec![(1, 2), (2, 2), (3, 2)]);
}

#[test]
fn glider_crosses_the_wrapped_edge() {
    let glider = Pattern::from_art(&[".O.", "..O", "OOO"]).unwrap();
    let mut game = GameOfLife::new(Grid::empty((0, 0), GridSize::new(8, 8).unwrap()));
    game.stamp(5, 0, &glider);
    let start = game.grid().alive_positions();

    // A glider moves one cell diagonally every four generations.
    for _ in 0..32 {
        game.run_generation();
    }
    assert_eq!(game.grid().alive_count(), 5);
    assert_eq!(game.grid().alive_positions(), start);
}

#[test]
fn pulsar_has_period_three() {
    let pulsar = life_core::patterns::find("pulsar").unwrap().padded(3);
    let mut game = GameOfLife::new(Grid::from_pattern((0, 0), &pulsar));
    let start = states(game.grid());
    game.run_generation();
    assert_ne!(states(game.grid()), start);
    game.run_generation();
    assert_ne!(states(game.grid()), start);
    game.run_generation();
    assert_eq!(states(game.grid()), start);
}

#[test]
fn settled_soup_stops_working() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut game = GameOfLife::new(Grid::random((0, 0), GridSize::new(40, 40).unwrap(), &mut rng));
    let first = game.run_generation();
    assert_eq!(first.evaluated, 1600);

    let mut later = first;
    for _ in 0..50 {
        later = game.run_generation();
    }
    // Once the soup calms down only the active regions are revisited.
    assert!(later.evaluated < first.evaluated);
}

#[test]
fn origin_shifted_grid_edits_use_absolute_coordinates() {
    let pattern = Pattern::from_art(&["...", "...", "..."]).unwrap();
    let mut grid = Grid::from_pattern((0, 0), &pattern);
    grid.move_to(20, 30);
    let mut game = GameOfLife::new(grid);
    game.switch_cell_at(21, 31).unwrap();
    assert_eq!(game.grid().alive_positions(), vec![(21, 31)]);
    assert!(game.switch_cell_at(1, 1).is_err());
}

proptest! {
    #[test]
    fn incremental_step_matches_full_rescan(
        rows in 1usize..12,
        cols in 1usize..12,
        seed in any::<u64>(),
        steps in 1usize..12,
    ) {
        let size = GridSize::new(rows, cols).unwrap();
        let mut game = GameOfLife::new(Grid::random((0, 0), size, &mut StdRng::seed_from_u64(seed)));
        let mut expected = states(game.grid());
        for _ in 0..steps {
            expected = reference_step(rows, cols, &expected);
            game.run_generation();
            prop_assert_eq!(states(game.grid()), expected.clone());
        }
    }

    #[test]
    fn same_seed_same_history(seed in any::<u64>()) {
        let size = GridSize::new(16, 16).unwrap();
        let mut a = GameOfLife::new(Grid::random((0, 0), size, &mut StdRng::seed_from_u64(seed)));
        let mut b = GameOfLife::new(Grid::random((0, 0), size, &mut StdRng::seed_from_u64(seed)));
        for _ in 0..10 {
            prop_assert_eq!(a.run_generation(), b.run_generation());
            prop_assert_eq!(a.grid().alive_positions(), b.grid().alive_positions());
        }
    }

    #[test]
    fn neighbors_are_distinct_and_symmetric(rows in 1usize..6, cols in 1usize..6) {
        let grid = Grid::empty((0, 0), GridSize::new(rows, cols).unwrap());
        for index in 0..rows * cols {
            let hood = grid.neighbors(index);
            prop_assert!(!hood.contains(&index));
            let mut sorted = hood.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), hood.len());
            for &other in hood {
                prop_assert!(grid.neighbors(other).contains(&index));
            }
        }
    }

    #[test]
    fn explicit_set_of_current_state_changes_nothing(
        seed in any::<u64>(),
        col in 0i32..10,
        row in 0i32..10,
    ) {
        let size = GridSize::new(10, 10).unwrap();
        let mut game = GameOfLife::new(Grid::random((0, 0), size, &mut StdRng::seed_from_u64(seed)));
        for _ in 0..3 {
            game.run_generation();
        }
        let pending = game.pending();
        let before = states(game.grid());
        let current = game.grid().cell_at(col, row).unwrap().is_alive();
        prop_assert!(!game.set_cell_state_at(col, row, current).unwrap());
        prop_assert_eq!(game.pending(), pending);
        prop_assert_eq!(states(game.grid()), before);
    }
}
