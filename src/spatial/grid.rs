//! Validated binary grid backed by a dense 2D array
//!
//! Cells hold 0 (dead) or 1 (live). Construction fails fast on malformed
//! input; the update engine replaces the whole grid once per generation and
//! never mutates cells against in-progress reads of the same generation.

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, SimulationError};
use bitvec::vec::BitVec;
use ndarray::Array2;

/// Rectangular binary grid
///
/// Wraps a dense `Array2<u8>` whose values are guaranteed to stay in {0,1}
/// by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<u8>,
}

impl Grid {
    /// Create a zero-filled grid
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is below 2 (too small to hold a
    /// single block) or exceeds the allocation guard.
    pub fn new(height: usize, width: usize) -> Result<Self> {
        validate_dimensions(height, width)?;
        Ok(Self {
            cells: Array2::zeros((height, width)),
        })
    }

    /// Build a grid from row vectors
    ///
    /// # Errors
    ///
    /// Returns an error if the rows are ragged, any cell value is outside
    /// {0,1}, or the dimensions fail the checks of [`Grid::new`].
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        validate_dimensions(height, width)?;

        let mut flat = Vec::with_capacity(height * width);
        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(SimulationError::RaggedRows {
                    expected: width,
                    found: row.len(),
                    row: row_index,
                });
            }
            for (col_index, &value) in row.iter().enumerate() {
                if value > 1 {
                    return Err(SimulationError::InvalidCellValue {
                        row: row_index,
                        col: col_index,
                        value,
                    });
                }
                flat.push(value);
            }
        }

        let cells = Array2::from_shape_vec((height, width), flat).map_err(|_shape_error| {
            SimulationError::InvalidDimensions {
                height,
                width,
                reason: "row data does not match the declared shape",
            }
        })?;
        Ok(Self { cells })
    }

    /// Grid height in cells
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Grid width in cells
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Read a cell, treating out-of-range coordinates as dead
    pub fn cell(&self, row: usize, col: usize) -> u8 {
        self.cells.get([row, col]).copied().unwrap_or(0)
    }

    /// Number of live cells
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&value| value == 1).count()
    }

    /// Borrow the underlying cell array
    pub const fn cells(&self) -> &Array2<u8> {
        &self.cells
    }

    /// Stamp a pattern with its top-left corner at (top, left)
    ///
    /// # Errors
    ///
    /// Returns an error if the stamped region extends past the grid edge or
    /// a pattern value is outside {0,1}.
    pub fn stamp(&mut self, top: usize, left: usize, pattern: &[&[u8]]) -> Result<()> {
        for (row_offset, pattern_row) in pattern.iter().enumerate() {
            for (col_offset, &value) in pattern_row.iter().enumerate() {
                if value > 1 {
                    return Err(SimulationError::InvalidCellValue {
                        row: row_offset,
                        col: col_offset,
                        value,
                    });
                }
                let cell = self
                    .cells
                    .get_mut([top + row_offset, left + col_offset])
                    .ok_or_else(|| SimulationError::InvalidParameter {
                        parameter: "anchor",
                        value: format!("({top}, {left})"),
                        reason: "pattern extends past the grid edge".to_string(),
                    })?;
                *cell = value;
            }
        }
        Ok(())
    }

    /// Pack the cells into a bit vector in row-major order
    pub fn pack_bits(&self) -> BitVec {
        let mut bits = BitVec::with_capacity(self.cells.len());
        for &cell in &self.cells {
            bits.push(cell == 1);
        }
        bits
    }

    /// Wrap an already-validated buffer produced by the stepper
    pub(crate) const fn from_cells_unchecked(cells: Array2<u8>) -> Self {
        Self { cells }
    }
}

fn validate_dimensions(height: usize, width: usize) -> Result<()> {
    if height < 2 || width < 2 {
        return Err(SimulationError::InvalidDimensions {
            height,
            width,
            reason: "both dimensions must be at least 2 to hold one block",
        });
    }
    if height > MAX_GRID_DIMENSION || width > MAX_GRID_DIMENSION {
        return Err(SimulationError::InvalidDimensions {
            height,
            width,
            reason: "dimension exceeds the allocation limit",
        });
    }
    Ok(())
}
