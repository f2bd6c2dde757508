// grid.rs - Row-major cell storage on a torus

use crate::cell::Cell;
use crate::error::{LifeError, Result};
use crate::template::Pattern;
use crate::ALIVE_PROBABILITY;
use rand::Rng;

/// Number of rows and columns of a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSize {
    pub rows: usize,
    pub cols: usize,
}

impl GridSize {
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(LifeError::ZeroDimension { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Size of a grid covering `width` x `height` pixels with square cells of
    /// `cell_size` pixels. Partial cells at the edges are dropped.
    pub fn from_pixels(width: u32, height: u32, cell_size: u32) -> Result<Self> {
        if cell_size == 0 {
            return Err(LifeError::ZeroDimension { rows: 0, cols: 0 });
        }
        Self::new((height / cell_size) as usize, (width / cell_size) as usize)
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

/// Distinct neighbors of one cell, excluding the cell itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighborhood {
    indices: [usize; 8],
    len: u8,
}

impl Neighborhood {
    fn push_unique(&mut self, index: usize) {
        if !self.as_slice().contains(&index) {
            self.indices[self.len as usize] = index;
            self.len += 1;
        }
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.indices[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Grid of [`Cell`]s.
///
/// Row 0 is the bottom row. The cell at index `i` sits at grid-relative
/// column `i % cols` and row `i / cols`; its absolute coordinates add the
/// grid origin. Neighbor lookups wrap around both axes.
#[derive(Clone, Debug)]
pub struct Grid {
    size: GridSize,
    origin: (i32, i32),
    cells: Vec<Cell>,
    neighbors: Vec<Neighborhood>,
}

impl Grid {
    /// Builds a grid from `seed` if one is given, otherwise a randomly
    /// populated grid of `size`. A seed determines its own dimensions.
    pub fn new<R: Rng + ?Sized>(
        origin: (i32, i32),
        size: GridSize,
        seed: Option<&Pattern>,
        rng: &mut R,
    ) -> Self {
        match seed {
            Some(pattern) => Self::from_pattern(origin, pattern),
            None => Self::random(origin, size, rng),
        }
    }

    /// Grid where each cell is alive with probability [`ALIVE_PROBABILITY`].
    pub fn random<R: Rng + ?Sized>(origin: (i32, i32), size: GridSize, rng: &mut R) -> Self {
        let mut grid = Self::empty(origin, size);
        for cell in &mut grid.cells {
            if rng.random_bool(ALIVE_PROBABILITY) {
                cell.toggle();
            }
        }
        log::debug!(
            "populated {}x{} grid randomly, {} alive",
            size.cols,
            size.rows,
            grid.alive_count()
        );
        grid
    }

    /// Grid with the dimensions and states of `pattern`.
    pub fn from_pattern(origin: (i32, i32), pattern: &Pattern) -> Self {
        let size = GridSize {
            rows: pattern.rows(),
            cols: pattern.cols(),
        };
        let mut grid = Self::empty(origin, size);
        for (index, cell) in grid.cells.iter_mut().enumerate() {
            if pattern.get(index % size.cols, index / size.cols) {
                cell.toggle();
            }
        }
        log::debug!("seeded {}x{} grid from pattern", size.cols, size.rows);
        grid
    }

    /// Grid of dead cells.
    pub fn empty(origin: (i32, i32), size: GridSize) -> Self {
        let (x0, y0) = origin;
        let cells = (0..size.cell_count())
            .map(|index| {
                Cell::new(
                    x0 + (index % size.cols) as i32,
                    y0 + (index / size.cols) as i32,
                )
            })
            .collect();
        Self {
            size,
            origin,
            cells,
            neighbors: adjacency(size),
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn row_count(&self) -> usize {
        self.size.rows
    }

    pub fn col_count(&self) -> usize {
        self.size.cols
    }

    pub fn origin(&self) -> (i32, i32) {
        self.origin
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> &Cell {
        &self.cells[index]
    }

    pub(crate) fn cell_mut(&mut self, index: usize) -> &mut Cell {
        &mut self.cells[index]
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index_of(x, y).is_ok()
    }

    /// Index of the cell at absolute coordinates `(x, y)`.
    pub fn index_of(&self, x: i32, y: i32) -> Result<usize> {
        let col = i64::from(x) - i64::from(self.origin.0);
        let row = i64::from(y) - i64::from(self.origin.1);
        if col < 0 || row < 0 || col >= self.size.cols as i64 || row >= self.size.rows as i64 {
            return Err(LifeError::OutOfRange {
                x,
                y,
                cols: self.size.cols,
                rows: self.size.rows,
                origin_x: self.origin.0,
                origin_y: self.origin.1,
            });
        }
        Ok(row as usize * self.size.cols + col as usize)
    }

    pub fn cell_at(&self, x: i32, y: i32) -> Result<&Cell> {
        self.index_of(x, y).map(|index| &self.cells[index])
    }

    /// Precomputed neighbors of the cell at `index`.
    pub fn neighbors(&self, index: usize) -> &[usize] {
        self.neighbors[index].as_slice()
    }

    /// The cell at `index` followed by its neighbors.
    pub fn neighborhood(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        std::iter::once(index).chain(self.neighbors(index).iter().copied())
    }

    pub fn live_neighbors(&self, index: usize) -> usize {
        self.neighbors(index)
            .iter()
            .filter(|&&n| self.cells[n].is_alive())
            .count()
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Absolute coordinates of every alive cell, in index order.
    pub fn alive_positions(&self) -> Vec<(i32, i32)> {
        self.cells
            .iter()
            .filter(|cell| cell.is_alive())
            .map(Cell::position)
            .collect()
    }

    /// Moves the grid so its origin is at `(x, y)`.
    ///
    /// Only absolute coordinates change; adjacency is position independent.
    pub fn move_to(&mut self, x: i32, y: i32) {
        let (dx, dy) = (x - self.origin.0, y - self.origin.1);
        if dx == 0 && dy == 0 {
            return;
        }
        for cell in &mut self.cells {
            cell.move_to(cell.x() + dx, cell.y() + dy);
        }
        self.origin = (x, y);
    }
}

/// Wrapped Moore neighborhoods for every index of a grid of `size`.
fn adjacency(size: GridSize) -> Vec<Neighborhood> {
    let GridSize { rows, cols } = size;
    (0..size.cell_count())
        .map(|index| {
            let (col, row) = (index % cols, index / cols);
            let mut hood = Neighborhood {
                indices: [0; 8],
                len: 0,
            };
            let up = (row + 1) % rows;
            let down = (row + rows - 1) % rows;
            let right = (col + 1) % cols;
            let left = (col + cols - 1) % cols;
            for (r, c) in [
                (down, left),
                (down, col),
                (down, right),
                (row, left),
                (row, right),
                (up, left),
                (up, col),
                (up, right),
            ] {
                let neighbor = r * cols + c;
                if neighbor != index {
                    hood.push_unique(neighbor);
                }
            }
            hood
        })
        .collect()
}
