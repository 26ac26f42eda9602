//! Format-information encoding and placement.
//!
//! Five data bits (two for the EC level, three for the mask id) are
//! BCH-protected to 15 bits, XOR-masked with a fixed pattern so the field
//! is never all zero, and written twice along the reserved strips.

use crate::encoder::bch;
use crate::models::{ECLevel, MaskPattern, Module, Overlay};

/// BCH(15, 5) generator polynomial, most significant coefficient first:
/// x^10 + x^8 + x^5 + x^4 + x^2 + x + 1.
const GENERATOR: [u8; 11] = [1, 0, 1, 0, 0, 1, 1, 0, 1, 1, 1];

/// Number of BCH check bits.
const ECC_LEN: usize = 10;

/// Fixed XOR pattern applied to the codeword.
const FORMAT_MASK: u16 = 0b101010000010010;

/// The 15-bit format-information value for an EC level and mask pattern.
pub fn format_info(ecl: ECLevel, mask: MaskPattern) -> u16 {
    let value = ((ecl.indicator() as u16) << 3) | mask.bits() as u16;
    let data: Vec<u8> = (0..5).rev().map(|i| ((value >> i) & 1) as u8).collect();
    let codeword = bch::gf2_encode(&data, ECC_LEN, &GENERATOR);
    let codeword = codeword.iter().fold(0u16, |acc, &b| (acc << 1) | b as u16);
    codeword ^ FORMAT_MASK
}

/// Cell coordinates of the two format copies, most significant bit first.
///
/// The first copy wraps around the top-left finder, skipping the timing
/// row and column; the second splits between the bottom-left and top-right
/// strips so both finders carry the full value.
pub fn format_cells(grid_size: usize) -> [[(usize, usize); 15]; 2] {
    let n = grid_size;
    let around_top_left = [
        (8, 0),
        (8, 1),
        (8, 2),
        (8, 3),
        (8, 4),
        (8, 5),
        (8, 7),
        (8, 8),
        (7, 8),
        (5, 8),
        (4, 8),
        (3, 8),
        (2, 8),
        (1, 8),
        (0, 8),
    ];
    let split_copy = [
        (n - 1, 8),
        (n - 2, 8),
        (n - 3, 8),
        (n - 4, 8),
        (n - 5, 8),
        (n - 6, 8),
        (n - 7, 8),
        (8, n - 8),
        (8, n - 7),
        (8, n - 6),
        (8, n - 5),
        (8, n - 4),
        (8, n - 3),
        (8, n - 2),
        (8, n - 1),
    ];
    [around_top_left, split_copy]
}

/// Overlay committing `value` to both format copies. Also restores the
/// timing cells (6, 8) and (8, 6) that the reservation pass painted over;
/// both sit at even timing indices, hence dark.
pub fn format_overlay(grid_size: usize, value: u16) -> Overlay {
    let mut cells = Overlay::new();
    for copy in format_cells(grid_size) {
        for (bit_index, &(row, col)) in copy.iter().enumerate() {
            let bit = (value >> (14 - bit_index)) & 1;
            cells.push(((row, col), Module::from_bit(bit == 1)));
        }
    }
    cells.push(((6, 8), Module::Black));
    cells.push(((8, 6), Module::Black));
    cells
}
