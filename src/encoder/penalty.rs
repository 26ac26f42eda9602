//! Penalty scoring for mask evaluation.
//!
//! The four rules from the symbol standard: long same-colour runs, 2x2
//! blocks, finder-lookalike windows, and dark/light imbalance. Scores are
//! only ever compared against each other, so placeholder cells are read
//! through [`Module::is_dark`] and count as light.

use crate::models::{Module, ModuleMatrix};

/// Per-module weight for each run of length 5 or more.
const N1: u32 = 3;
/// Weight for each 2x2 same-colour block.
const N2: u32 = 3;
/// Weight for each finder-lookalike window.
const N3: u32 = 40;
/// Weight per 5% step of dark-share deviation from 50%.
const N4: u32 = 10;

/// Total penalty for a fully placed candidate matrix.
pub fn score(matrix: &ModuleMatrix) -> u32 {
    run_penalty(matrix) + block_penalty(matrix) + finder_like_penalty(matrix) + balance_penalty(matrix)
}

/// Rule 1: every horizontal or vertical run of 5+ same-colour modules
/// costs N1 plus one per module beyond 5.
fn run_penalty(matrix: &ModuleMatrix) -> u32 {
    let n = matrix.size();
    let mut penalty = 0;
    for line in 0..n {
        penalty += line_runs(n, |i| matrix.get(line, i).is_dark());
        penalty += line_runs(n, |i| matrix.get(i, line).is_dark());
    }
    penalty
}

fn line_runs(n: usize, dark_at: impl Fn(usize) -> bool) -> u32 {
    let mut penalty = 0;
    let mut run = 1u32;
    for i in 1..n {
        if dark_at(i) == dark_at(i - 1) {
            run += 1;
        } else {
            penalty += run_cost(run);
            run = 1;
        }
    }
    penalty + run_cost(run)
}

fn run_cost(run: u32) -> u32 {
    if run >= 5 { N1 + run - 5 } else { 0 }
}

/// Rule 2: every 2x2 block of a single colour costs N2. Blocks overlap, so
/// a 3x3 patch contributes four times.
fn block_penalty(matrix: &ModuleMatrix) -> u32 {
    let n = matrix.size();
    let mut penalty = 0;
    for row in 0..n - 1 {
        for col in 0..n - 1 {
            let dark = matrix.get(row, col).is_dark();
            if matrix.get(row, col + 1).is_dark() == dark
                && matrix.get(row + 1, col).is_dark() == dark
                && matrix.get(row + 1, col + 1).is_dark() == dark
            {
                penalty += N2;
            }
        }
    }
    penalty
}

/// Rule 3: every horizontal or vertical 11-module window matching the
/// finder ratio 1:1:3:1:1 with a 4-module light margin on either side
/// costs N3.
fn finder_like_penalty(matrix: &ModuleMatrix) -> u32 {
    const WINDOW: usize = 11;
    const PATTERNS: [[bool; WINDOW]; 2] = [
        [
            true, false, true, true, true, false, true, false, false, false, false,
        ],
        [
            false, false, false, false, true, false, true, true, true, false, true,
        ],
    ];

    let n = matrix.size();
    if n < WINDOW {
        return 0;
    }
    let mut penalty = 0;
    for line in 0..n {
        for start in 0..=n - WINDOW {
            for pattern in &PATTERNS {
                if (0..WINDOW).all(|i| matrix.get(line, start + i).is_dark() == pattern[i]) {
                    penalty += N3;
                }
                if (0..WINDOW).all(|i| matrix.get(start + i, line).is_dark() == pattern[i]) {
                    penalty += N3;
                }
            }
        }
    }
    penalty
}

/// Rule 4: N4 for every full 5% step the dark-module share sits away
/// from 50%.
fn balance_penalty(matrix: &ModuleMatrix) -> u32 {
    let n = matrix.size();
    let total = (n * n) as u32;
    let mut dark = 0u32;
    for row in 0..n {
        for col in 0..n {
            if matrix.get(row, col).is_dark() {
                dark += 1;
            }
        }
    }
    let percent = dark * 100 / total;
    let deviation = percent.abs_diff(50);
    deviation / 5 * N4
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(n: usize, value: Module) -> ModuleMatrix {
        let mut matrix = ModuleMatrix::new(n);
        for row in 0..n {
            for col in 0..n {
                matrix.set(row, col, value);
            }
        }
        matrix
    }

    fn checkerboard(n: usize) -> ModuleMatrix {
        let mut matrix = ModuleMatrix::new(n);
        for row in 0..n {
            for col in 0..n {
                matrix.set(row, col, Module::from_bit((row + col) % 2 == 0));
            }
        }
        matrix
    }

    #[test]
    fn test_all_white_grid() {
        let matrix = filled(21, Module::White);
        // 42 lines of one 21-run each
        assert_eq!(run_penalty(&matrix), 42 * (N1 + 16));
        assert_eq!(block_penalty(&matrix), 20 * 20 * N2);
        assert_eq!(finder_like_penalty(&matrix), 0);
        assert_eq!(balance_penalty(&matrix), 10 * N4);
        assert_eq!(score(&matrix), 798 + 1200 + 100);
    }

    #[test]
    fn test_checkerboard_scores_zero() {
        assert_eq!(score(&checkerboard(21)), 0);
    }

    #[test]
    fn test_run_penalty_counts_overlength() {
        // a single dark 7-run in an otherwise alternating row
        let mut matrix = checkerboard(21);
        for col in 4..11 {
            matrix.set(0, col, Module::Black);
        }
        assert!(run_penalty(&matrix) >= N1 + 2);
    }

    #[test]
    fn test_finder_like_window_detected() {
        let mut matrix = filled(21, Module::White);
        let window = [
            true, false, true, true, true, false, true, false, false, false, false,
        ];
        for (i, &dark) in window.iter().enumerate() {
            matrix.set(10, 2 + i, Module::from_bit(dark));
        }
        assert!(finder_like_penalty(&matrix) >= N3);
    }

    #[test]
    fn test_reserved_cells_score_as_light() {
        let matrix = ModuleMatrix::new(21);
        assert_eq!(balance_penalty(&matrix), 10 * N4);
    }
}
