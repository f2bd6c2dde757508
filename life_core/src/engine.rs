// engine.rs - Generation stepper with dirty-set tracking

use crate::changed::ChangedSet;
use crate::error::Result;
use crate::grid::Grid;
use crate::template::Pattern;
use crate::{MAX_CATCH_UP, MIN_TICK, SIMULATION_TICK};
use std::time::Duration;

/// Conway's rule: survival on 2 or 3 neighbors, birth on exactly 3.
pub fn next_state(alive: bool, live_neighbors: usize) -> bool {
    match (alive, live_neighbors) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3) => true,            // Birth
        _ => false,                    // Death or stays dead
    }
}

/// Work done by one call to [`GameOfLife::run_generation`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Step {
    /// Cells whose neighborhoods were counted.
    pub evaluated: usize,
    /// Cells that changed state.
    pub flipped: usize,
}

/// Simulates the game of life on a [`Grid`].
///
/// Only cells in the changed set are re-evaluated each generation. A cell
/// enters the set when it or one of its neighbors flipped, so once the
/// grid settles the set drains and stepping costs nothing.
pub struct GameOfLife {
    grid: Grid,
    changed: ChangedSet,
    scratch: ChangedSet,
    flips: Vec<usize>,
    running: bool,
    tick: Duration,
    pending_time: Duration,
    generation: u64,
}

impl GameOfLife {
    /// Wraps `grid`; every cell is considered changed for the first
    /// generation and the scheduler starts out running.
    pub fn new(grid: Grid) -> Self {
        let len = grid.cells().len();
        Self {
            grid,
            changed: ChangedSet::full(len),
            scratch: ChangedSet::with_capacity(len),
            flips: Vec::new(),
            running: true,
            tick: SIMULATION_TICK,
            pending_time: Duration::ZERO,
            generation: 0,
        }
    }

    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick.max(MIN_TICK);
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of cells queued for the next generation.
    pub fn pending(&self) -> usize {
        self.changed.len()
    }

    pub fn is_quiescent(&self) -> bool {
        self.changed.is_empty()
    }

    pub fn is_pending(&self, index: usize) -> bool {
        self.changed.contains(index)
    }

    /// Runs a single generation.
    ///
    /// Every neighbor count is taken from the state before the step; flips
    /// are applied only after all cells have been evaluated.
    pub fn run_generation(&mut self) -> Step {
        if self.changed.is_empty() {
            return Step::default();
        }

        self.flips.clear();
        for index in self.changed.iter() {
            let alive = self.grid.cell(index).is_alive();
            if next_state(alive, self.grid.live_neighbors(index)) != alive {
                self.flips.push(index);
                self.scratch.extend(self.grid.neighborhood(index));
            }
        }

        let step = Step {
            evaluated: self.changed.len(),
            flipped: self.flips.len(),
        };
        for &index in &self.flips {
            self.grid.cell_mut(index).toggle();
        }
        self.changed.clear();
        std::mem::swap(&mut self.changed, &mut self.scratch);
        self.generation += 1;

        log::trace!(
            "generation {}: evaluated {}, flipped {}, {} pending",
            self.generation,
            step.evaluated,
            step.flipped,
            self.changed.len()
        );
        step
    }

    /// Feeds wall-clock time to the fixed-interval scheduler and runs every
    /// generation that came due. Does nothing while paused.
    ///
    /// At most [`MAX_CATCH_UP`] generations run per call; time beyond that is
    /// dropped so a stalled frame does not cause a burst of steps.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if !self.running {
            return 0;
        }
        self.pending_time += elapsed;
        let mut ran = 0;
        while self.pending_time >= self.tick {
            if ran == MAX_CATCH_UP {
                self.pending_time = Duration::ZERO;
                break;
            }
            self.pending_time -= self.tick;
            self.run_generation();
            ran += 1;
        }
        ran
    }

    /// Toggles the cell at `(col, row)` and queues its neighborhood, whether
    /// or not the simulation is running.
    pub fn switch_cell_at(&mut self, col: i32, row: i32) -> Result<()> {
        let index = self.grid.index_of(col, row)?;
        self.flip(index);
        Ok(())
    }

    /// Sets the cell at `(col, row)` to `state`. Returns whether the cell
    /// changed; an unchanged cell leaves the changed set untouched.
    pub fn set_cell_state_at(&mut self, col: i32, row: i32, state: bool) -> Result<bool> {
        let index = self.grid.index_of(col, row)?;
        if self.grid.cell(index).is_alive() == state {
            return Ok(false);
        }
        self.flip(index);
        Ok(true)
    }

    /// Copies `pattern` onto the grid with its bottom-left cell at
    /// `(col, row)`. Cells landing outside the grid are skipped.
    /// Returns the number of cells that changed.
    pub fn stamp(&mut self, col: i32, row: i32, pattern: &Pattern) -> usize {
        let mut changed = 0;
        let mut clipped = 0;
        for (x, y, alive) in pattern.iter() {
            let (Ok(dx), Ok(dy)) = (i32::try_from(x), i32::try_from(y)) else {
                clipped += 1;
                continue;
            };
            match self.grid.index_of(col.saturating_add(dx), row.saturating_add(dy)) {
                Ok(index) => {
                    if self.grid.cell(index).is_alive() != alive {
                        self.flip(index);
                        changed += 1;
                    }
                }
                Err(_) => clipped += 1,
            }
        }
        if clipped > 0 {
            log::debug!("stamp at ({col}, {row}) clipped {clipped} cells");
        }
        changed
    }

    /// Kills every cell. A dead grid cannot change, so nothing stays queued.
    pub fn clear(&mut self) {
        for index in 0..self.grid.cells().len() {
            if self.grid.cell(index).is_alive() {
                self.grid.cell_mut(index).toggle();
            }
        }
        self.changed.clear();
    }

    /// Pauses a running simulation or resumes a paused one.
    pub fn start_stop(&mut self) {
        self.running = !self.running;
        self.pending_time = Duration::ZERO;
        log::debug!("simulation {}", if self.running { "resumed" } else { "paused" });
    }

    pub fn pause(&mut self) {
        if self.running {
            self.start_stop();
        }
    }

    fn flip(&mut self, index: usize) {
        self.changed.extend(self.grid.neighborhood(index));
        self.grid.cell_mut(index).toggle();
    }
}
