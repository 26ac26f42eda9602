//! Mask application and selection.
//!
//! All eight candidates are scored in parallel with `rayon`; the winner is
//! then picked sequentially so that ties always resolve to the lowest mask
//! id, independent of scheduling.

use rayon::prelude::*;

use crate::encoder::penalty;
use crate::models::{MaskPattern, Module, ModuleMatrix, Overlay};

/// Outcome of mask selection: the winning pattern, its penalty, and the
/// payload overlay with that mask already applied.
#[derive(Debug, Clone)]
pub struct MaskSelection {
    /// Winning mask pattern.
    pub mask: MaskPattern,
    /// The winner's penalty score.
    pub penalty: u32,
    /// Masked payload overlay, ready to commit.
    pub data: Overlay,
}

/// Toggle each data module where the mask predicate holds. Fixed patterns
/// are untouched because they are not part of the overlay.
pub fn apply_mask(mask: MaskPattern, data: &Overlay) -> Overlay {
    data.iter()
        .map(|&((row, col), value)| {
            let dark = value.is_dark() ^ mask.is_masked(row, col);
            ((row, col), Module::from_bit(dark))
        })
        .collect()
}

/// Score all eight masked candidates against the patterned matrix and
/// return the one with the lowest penalty (lowest mask id on ties).
///
/// `matrix` holds the fixed patterns only; `data` is the unmasked payload
/// overlay.
pub fn select_mask(matrix: &ModuleMatrix, data: &Overlay) -> MaskSelection {
    let scored: Vec<(MaskPattern, u32)> = MaskPattern::ALL
        .par_iter()
        .map(|&mask| {
            let mut candidate = matrix.clone();
            candidate.overlay(&apply_mask(mask, data));
            (mask, penalty::score(&candidate))
        })
        .collect();

    if cfg!(debug_assertions) && crate::debug::debug_enabled() {
        for &(mask, score) in &scored {
            eprintln!("mask {}: penalty {}", mask.bits(), score);
        }
    }

    let (mask, penalty) = pick_lowest(&scored);
    MaskSelection {
        mask,
        penalty,
        data: apply_mask(mask, data),
    }
}

/// Sequential fold over the scores in mask-id order. Strict less-than
/// keeps the earliest candidate on equal scores.
fn pick_lowest(scored: &[(MaskPattern, u32)]) -> (MaskPattern, u32) {
    let mut best = scored[0];
    for &entry in &scored[1..] {
        if entry.1 < best.1 {
            best = entry;
        }
    }
    best
}
