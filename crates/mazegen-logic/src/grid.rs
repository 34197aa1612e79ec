//! Immutable template grid.
//!
//! A [`TemplateGrid`] is the authored top-left quadrant of the maze: a
//! rectangular array of raw tile codes, stored row-major in one flat `Vec`.
//! It is never mutated after construction. Lookups take signed coordinates
//! and return `None` outside the grid, so neighbor probing never needs a
//! bounds check at the call site.

use crate::tiles::TileType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building a grid from authored rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("template grid has no rows")]
    NoRows,
    #[error("template grid has no columns")]
    NoColumns,
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("{found} cells cannot fill a {rows}×{cols} grid")]
    CellCount {
        rows: usize,
        cols: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, GridError>;

/// Rectangular grid of tile codes. Origin (0, 0) is the top-left cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct TemplateGrid {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl TemplateGrid {
    /// Build a grid from authored rows. Every row must have the same length.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let first = rows.first().ok_or(GridError::NoRows)?;
        let cols = first.as_ref().len();
        if cols == 0 {
            return Err(GridError::NoColumns);
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row, codes) in rows.iter().enumerate() {
            let codes = codes.as_ref();
            if codes.len() != cols {
                return Err(GridError::Ragged {
                    row,
                    expected: cols,
                    found: codes.len(),
                });
            }
            cells.extend_from_slice(codes);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Build a grid from a flat row-major code list.
    pub fn from_codes(rows: usize, cols: usize, cells: Vec<u8>) -> Result<Self> {
        if rows == 0 {
            return Err(GridError::NoRows);
        }
        if cols == 0 {
            return Err(GridError::NoColumns);
        }
        if cells.len() != rows * cols {
            return Err(GridError::CellCount {
                rows,
                cols,
                found: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Build a grid from a fixed-size array literal.
    ///
    /// Rectangular by construction. A zero dimension fails to compile:
    ///
    /// ```compile_fail
    /// use mazegen_logic::grid::TemplateGrid;
    ///
    /// let rows: [[u8; 0]; 2] = [[], []];
    /// let _ = TemplateGrid::from_array(&rows);
    /// ```
    pub fn from_array<const R: usize, const C: usize>(rows: &[[u8; C]; R]) -> Self {
        const { assert!(R > 0 && C > 0, "template grid needs at least one row and column") };
        Self {
            rows: R,
            cols: C,
            cells: rows.iter().flatten().copied().collect(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Flat index for a signed coordinate, `None` when out of bounds.
    fn index(&self, row: isize, col: isize) -> Option<usize> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    /// Raw code at (row, col). Total over all signed coordinates.
    pub fn code_at(&self, row: isize, col: isize) -> Option<u8> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Tile at (row, col). `None` when out of bounds or the code is unknown.
    pub fn tile_at(&self, row: isize, col: isize) -> Option<TileType> {
        self.code_at(row, col).and_then(TileType::from_code)
    }

    /// Raw code at an in-range `usize` coordinate.
    pub fn code(&self, row: usize, col: usize) -> Option<u8> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// One authored row of codes.
    pub fn row(&self, row: usize) -> Option<&[u8]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&self.cells[start..start + self.cols])
        } else {
            None
        }
    }

    /// Row-major iterator over `(row, col, code)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &code)| (i / cols, i % cols, code))
    }

    /// Number of cells in `row` that produce a placement record.
    pub fn placeable_in_row(&self, row: usize) -> usize {
        self.row(row)
            .map(|codes| {
                codes
                    .iter()
                    .filter_map(|&c| TileType::from_code(c))
                    .filter(|t| t.is_placeable())
                    .count()
            })
            .unwrap_or(0)
    }

    /// Number of cells in the whole grid that produce a placement record.
    pub fn placeable_count(&self) -> usize {
        (0..self.rows).map(|r| self.placeable_in_row(r)).sum()
    }

    /// Authored rows, as nested vectors.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells.chunks(self.cols).map(<[u8]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<u8>>> for TemplateGrid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self> {
        Self::from_rows(&rows)
    }
}

impl From<TemplateGrid> for Vec<Vec<u8>> {
    fn from(grid: TemplateGrid) -> Self {
        grid.to_rows()
    }
}
