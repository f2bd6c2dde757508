// error.rs - Error type shared by the simulation core

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = LifeError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum LifeError {
    #[error("cell ({x}, {y}) is outside the {cols}x{rows} grid at origin ({origin_x}, {origin_y})")]
    OutOfRange {
        x: i32,
        y: i32,
        cols: usize,
        rows: usize,
        origin_x: i32,
        origin_y: i32,
    },

    #[error("grid dimensions must be non-zero (got {rows} rows, {cols} columns)")]
    ZeroDimension { rows: usize, cols: usize },

    #[error("pattern has no cells")]
    EmptyPattern,

    #[error("pattern row {row} has {found} cells, expected {expected}")]
    RaggedPattern { row: usize, expected: usize, found: usize },

    #[error("pattern cell value {value} at row {row}, column {col} is not 0 or 1")]
    InvalidCellValue { row: usize, col: usize, value: u8 },

    #[error("invalid pattern character {ch:?} at row {row}, column {col}")]
    InvalidCellChar { row: usize, col: usize, ch: char },

    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed template document {}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
