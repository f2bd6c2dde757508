// template.rs - Seed patterns and the template collection format

use crate::error::{LifeError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Rectangular matrix of cell states, stored bottom row first.
///
/// Files and text art list rows top first, matching how a pattern looks on
/// screen; constructors reverse them so that row 0 is the bottom row, the
/// same convention [`Grid`](crate::Grid) uses.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>")]
pub struct Pattern {
    cols: usize,
    cells: Vec<bool>,
}

impl Pattern {
    /// Builds a pattern from 0/1 rows listed top first.
    pub fn from_rows_top_first(rows: Vec<Vec<u8>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(LifeError::EmptyPattern);
        }
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row, values) in rows.iter().enumerate().rev() {
            if values.len() != cols {
                return Err(LifeError::RaggedPattern {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                match value {
                    0 => cells.push(false),
                    1 => cells.push(true),
                    _ => return Err(LifeError::InvalidCellValue { row, col, value }),
                }
            }
        }
        Ok(Self { cols, cells })
    }

    /// Builds a pattern from text rows listed top first. `O`, `*` and `#`
    /// are alive, `.` is dead.
    pub fn from_art(rows: &[&str]) -> Result<Self> {
        let rows = rows
            .iter()
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, ch)| match ch {
                        'O' | '*' | '#' => Ok(1),
                        '.' => Ok(0),
                        _ => Err(LifeError::InvalidCellChar { row, col, ch }),
                    })
                    .collect::<Result<Vec<u8>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_rows_top_first(rows)
    }

    pub fn rows(&self) -> usize {
        self.cells.len() / self.cols
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// State at column `x`, row `y` (row 0 is the bottom row).
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.cols + x]
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Every cell as `(x, y, alive)`, bottom row first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, &alive)| (index % self.cols, index / self.cols, alive))
    }

    /// Copy surrounded by a border of `shell` dead cells on every side.
    ///
    /// Keeps small patterns from touching themselves through the wrapped
    /// edges when simulated on their own grid.
    pub fn padded(&self, shell: usize) -> Self {
        let cols = self.cols + 2 * shell;
        let rows = self.rows() + 2 * shell;
        let mut cells = vec![false; cols * rows];
        for (x, y, alive) in self.iter() {
            cells[(y + shell) * cols + x + shell] = alive;
        }
        Self { cols, cells }
    }

    /// Reads a single pattern file: a JSON matrix of 0/1 rows, top first.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = read(path)?;
        serde_json::from_slice(&bytes).map_err(|source| LifeError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl TryFrom<Vec<Vec<u8>>> for Pattern {
    type Error = LifeError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self> {
        Self::from_rows_top_first(rows)
    }
}

/// A file of named templates shown together in the template popup.
#[derive(Clone, Debug, Deserialize)]
pub struct TemplateCollection {
    /// Static templates are displayed but not simulated in the popup.
    #[serde(rename = "STATIC")]
    is_static: bool,
    #[serde(rename = "PAGE")]
    page: u32,
    templates: BTreeMap<String, Pattern>,
}

impl TemplateCollection {
    pub fn new(is_static: bool, page: u32, templates: BTreeMap<String, Pattern>) -> Self {
        Self {
            is_static,
            page,
            templates,
        }
    }

    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bytes = read(path)?;
        Self::from_slice(&bytes).map_err(|source| LifeError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn templates(&self) -> &BTreeMap<String, Pattern> {
        &self.templates
    }
}

/// Title-cases a template name unless it is already all upper case,
/// so acronyms such as `LWSS` survive.
pub fn display_name(name: &str) -> String {
    let has_upper = name.chars().any(char::is_uppercase);
    if has_upper && !name.chars().any(char::is_lowercase) {
        return name.to_string();
    }
    let mut out = String::with_capacity(name.len());
    let mut prev_alpha = false;
    for ch in name.chars() {
        if prev_alpha {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
        prev_alpha = ch.is_alphabetic();
    }
    out
}

fn read(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| LifeError::Io {
        path: path.to_path_buf(),
        source,
    })
}
