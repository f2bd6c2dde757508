// lib.rs - Game of Life simulation core
//
// Cells live on a toroidal grid; `GameOfLife` advances it one generation at
// a time, re-evaluating only cells near the last round of changes.

use std::time::Duration;

pub mod cell;
pub mod changed;
pub mod engine;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod template;

pub use cell::Cell;
pub use changed::ChangedSet;
pub use engine::{GameOfLife, Step, next_state};
pub use error::{LifeError, Result};
pub use grid::{Grid, GridSize};
pub use template::{Pattern, TemplateCollection, display_name};

/// Side length of a cell in pixels.
pub const CELL_SIZE: u32 = 7;
/// Default window size in pixels when no start grid is given.
pub const WIDTH: u32 = 301;
pub const HEIGHT: u32 = 301;

/// Interval between generations while the simulation is running.
pub const SIMULATION_TICK: Duration = Duration::from_millis(50);
pub const MIN_TICK: Duration = Duration::from_millis(1);
/// Most generations [`GameOfLife::advance`] runs in one call.
pub const MAX_CATCH_UP: u32 = 4;

/// Chance of a cell starting alive in a randomly populated grid.
pub const ALIVE_PROBABILITY: f64 = 1.0 / 3.0;

/// Dead border added around templates and start grids before use.
pub const TEMPLATE_PADDING: usize = 1;
