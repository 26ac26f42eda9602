//! Zig-zag payload placement.
//!
//! The walker visits the grid in two-module-wide column pairs, right to
//! left, alternating upward and downward sweeps. Cells already claimed by a
//! fixed pattern are skipped without consuming a payload bit.

use crate::error::BuildError;
use crate::models::{Module, ModuleMatrix, Overlay};

/// Full traversal order for a grid, fixed patterns ignored.
///
/// Column pairs start at the right edge and step left by two; once the
/// pair would straddle the vertical timing column the whole walk shifts
/// left by one, so column 6 is never visited. Within a pair the right
/// column comes before the left at every row.
pub fn traversal_order(grid_size: usize) -> Vec<(usize, usize)> {
    let mut order = Vec::with_capacity(grid_size * (grid_size - 1));
    let mut column = grid_size - 1;
    let mut upward = true;
    loop {
        let right = if column <= 6 { column - 1 } else { column };
        if upward {
            for row in (0..grid_size).rev() {
                order.push((row, right));
                order.push((row, right - 1));
            }
        } else {
            for row in 0..grid_size {
                order.push((row, right));
                order.push((row, right - 1));
            }
        }
        upward = !upward;
        if column <= 2 {
            break;
        }
        column -= 2;
    }
    order
}

/// Write the payload bits into the free cells of `matrix`, in traversal
/// order, and return the resulting overlay. The matrix itself is not
/// modified; the assembler applies the overlay once mask selection has
/// run against it.
///
/// Fails if any bits are left over after the last free cell.
pub fn place_payload(matrix: &ModuleMatrix, bits: &[bool]) -> Result<Overlay, BuildError> {
    let mut data = Overlay::new();
    let mut index = 0;
    for (row, col) in traversal_order(matrix.size()) {
        if index == bits.len() {
            break;
        }
        if matrix.is_free(row, col) {
            data.push(((row, col), Module::from_bit(bits[index])));
            index += 1;
        }
    }
    if index < bits.len() {
        return Err(BuildError::PayloadTooLong {
            payload: bits.len(),
            capacity: index,
        });
    }
    Ok(data)
}
