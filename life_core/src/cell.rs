// cell.rs - A single automaton unit

use std::fmt;

/// One cell of a [`Grid`](crate::Grid).
///
/// Coordinates are absolute: they already include the owning grid's origin.
/// The renderer identifies a cell by its index in the grid, so the cell
/// itself carries no drawing state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    x: i32,
    y: i32,
    alive: bool,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y, alive: false }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Flips the cell between alive and dead.
    pub fn toggle(&mut self) {
        self.alive = !self.alive;
    }

    pub(crate) fn move_to(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Cell x={}, y={}, alive={}>", self.x, self.y, self.alive)
    }
}
