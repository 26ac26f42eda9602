//! Fixed function-pattern generators.
//!
//! Each generator is a pure function of the grid size and returns an
//! [`Overlay`]. The assembler applies them in a fixed order (timing row,
//! timing column, finders, separators, version information, format
//! reservation); later passes overwrite earlier ones by design.

use crate::models::{Module, Overlay};

/// Row index shared by the horizontal and vertical timing patterns.
const TIMING_INDEX: usize = 6;

/// Horizontal timing pattern: row 6 alternates dark/light starting dark at
/// column 0, across the full grid extent.
pub fn timing_row(grid_size: usize) -> Overlay {
    (0..grid_size)
        .map(|col| ((TIMING_INDEX, col), parity_module(col)))
        .collect()
}

/// Vertical timing pattern: column 6, same alternation. Applied after the
/// row pass, so it defines the shared cell (6, 6) - dark either way.
pub fn timing_column(grid_size: usize) -> Overlay {
    (0..grid_size)
        .map(|row| ((row, TIMING_INDEX), parity_module(row)))
        .collect()
}

fn parity_module(index: usize) -> Module {
    if index % 2 == 0 {
        Module::Black
    } else {
        Module::White
    }
}

/// The three 7x7 finder motifs at the top-left, bottom-left and top-right
/// corners, each with a one-module halo on the sides facing the grid
/// interior (clipped at the edges) so the separator sits flush against it.
pub fn finder_patterns(grid_size: usize) -> Overlay {
    let mut cells = Overlay::new();
    finder_at(0, 0, grid_size, &mut cells);
    finder_at(grid_size - 7, 0, grid_size, &mut cells);
    finder_at(0, grid_size - 7, grid_size, &mut cells);
    cells
}

fn finder_at(row: usize, col: usize, grid_size: usize, cells: &mut Overlay) {
    for r in -1i32..7 {
        let grid_row = row as i32 + r;
        if grid_row < 0 || grid_row >= grid_size as i32 {
            continue;
        }
        for c in -1i32..7 {
            let grid_col = col as i32 + c;
            if grid_col < 0 || grid_col >= grid_size as i32 {
                continue;
            }
            let on_ring = ((r == 0 || r == 6) && (0..=6).contains(&c))
                || ((c == 0 || c == 6) && (0..=6).contains(&r));
            let in_core = (2..=4).contains(&r) && (2..=4).contains(&c);
            let value = if on_ring || in_core {
                Module::Black
            } else {
                Module::White
            };
            cells.push(((grid_row as usize, grid_col as usize), value));
        }
    }
}

/// One-module-wide light border isolating each finder from the data region:
/// six row/column runs of length 8.
pub fn separator_pattern(grid_size: usize) -> Overlay {
    let len = 8;
    let edge = len - 1;
    let far = grid_size - len;

    let mut cells = Overlay::new();
    white_row(edge, 0, len, &mut cells); // below top-left finder
    white_col(edge, 0, len, &mut cells); // right of top-left finder
    white_row(edge, far, grid_size, &mut cells); // below top-right finder
    white_col(far, 0, len, &mut cells); // left of top-right finder
    white_row(far, 0, len, &mut cells); // above bottom-left finder
    white_col(edge, far, grid_size, &mut cells); // right of bottom-left finder
    cells
}

fn white_row(row: usize, col_start: usize, col_end: usize, cells: &mut Overlay) {
    for col in col_start..col_end {
        cells.push(((row, col), Module::White));
    }
}

fn white_col(col: usize, row_start: usize, row_end: usize, cells: &mut Overlay) {
    for row in row_start..row_end {
        cells.push(((row, col), Module::White));
    }
}

/// Reserve the format-information strips (row 8 and column 8 next to the
/// finders) so the data walker never writes payload bits there. The value
/// arrives only after mask selection; the dark module at (grid_size-8, 8)
/// is known now and set dark directly.
///
/// Applied last among the fixed passes: the strips override whatever the
/// timing passes put at (6, 8) and (8, 6), and the format commit restores
/// those two cells.
pub fn format_reservation(grid_size: usize) -> Overlay {
    let mut cells = Overlay::new();
    for col in 0..grid_size {
        if col <= 7 || col >= grid_size - 8 {
            cells.push(((8, col), Module::Reserved));
        }
    }
    for row in 0..grid_size {
        if row <= 8 || row >= grid_size - 8 {
            cells.push(((row, 8), Module::Reserved));
        }
    }
    cells.push(((grid_size - 8, 8), Module::Black));
    cells
}
