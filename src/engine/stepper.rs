//! Generation stepping over the alternating Margolus partition
//!
//! Odd generations anchor blocks at even row/column indices, even
//! generations at odd indices. Reads always come from the grid as it stood
//! at generation start; writes land in a fresh buffer committed whole as
//! the returned grid, so the rule never observes in-progress values.

use crate::engine::rule::Block;
use crate::spatial::Grid;
use ndarray::Array2;

/// Advance the grid by exactly one generation
///
/// The generation counter's parity selects the partition offset: odd uses
/// (0,0), even uses (1,1). Blocks that would extend past the grid are
/// skipped, leaving their cells untouched for that generation. With
/// `wrap_around` set, even generations additionally process the bottom edge
/// row (row H-1 paired with row 0), the right edge column (column W-1
/// paired with column 0), and the single doubly-wrapped corner block; odd
/// generations never wrap. Grids too small to hold one block pass through
/// unchanged.
pub fn step(grid: &Grid, generation: u64, wrap_around: bool) -> Grid {
    let height = grid.height();
    let width = grid.width();
    if height < 2 || width < 2 {
        return grid.clone();
    }

    let mut next = grid.cells().clone();

    if generation % 2 == 1 {
        for row in (0..height - 1).step_by(2) {
            for col in (0..width - 1).step_by(2) {
                apply_block(grid, &mut next, [row, col], [row + 1, col + 1]);
            }
        }
    } else {
        for row in (1..height - 1).step_by(2) {
            for col in (1..width - 1).step_by(2) {
                apply_block(grid, &mut next, [row, col], [row + 1, col + 1]);
            }
        }
        if wrap_around {
            // Bottom edge row pairs row H-1 with row 0
            for col in (1..width - 1).step_by(2) {
                apply_block(grid, &mut next, [height - 1, col], [0, col + 1]);
            }
            // Right edge column pairs column W-1 with column 0
            for row in (1..height - 1).step_by(2) {
                apply_block(grid, &mut next, [row, width - 1], [row + 1, 0]);
            }
            // Exactly one doubly-wrapped corner block
            apply_block(grid, &mut next, [height - 1, width - 1], [0, 0]);
        }
    }

    Grid::from_cells_unchecked(next)
}

/// Run one block through the rule, reading the frozen grid and writing the
/// commit buffer
fn apply_block(grid: &Grid, next: &mut Array2<u8>, first: [usize; 2], second: [usize; 2]) {
    let [top, left] = first;
    let [bottom, right] = second;

    let block = Block::new(
        grid.cell(top, left),
        grid.cell(top, right),
        grid.cell(bottom, left),
        grid.cell(bottom, right),
    );
    let updated = block.apply();

    write_cell(next, top, left, updated.top_left);
    write_cell(next, top, right, updated.top_right);
    write_cell(next, bottom, left, updated.bottom_left);
    write_cell(next, bottom, right, updated.bottom_right);
}

fn write_cell(next: &mut Array2<u8>, row: usize, col: usize, value: u8) {
    if let Some(cell) = next.get_mut([row, col]) {
        *cell = value;
    }
}
