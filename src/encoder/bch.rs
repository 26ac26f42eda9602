//! GF(2) polynomial arithmetic for the BCH(15, 5) format-information code.

/// Systematic BCH encode over GF(2): append `ecc_len` check bits computed
/// as the remainder of polynomial long division by `generator`.
///
/// Bits are one-per-element, most significant first. `generator` has
/// `ecc_len + 1` coefficients.
pub fn gf2_encode(data: &[u8], ecc_len: usize, generator: &[u8]) -> Vec<u8> {
    debug_assert_eq!(generator.len(), ecc_len + 1);

    let mut codeword = Vec::with_capacity(data.len() + ecc_len);
    codeword.extend_from_slice(data);
    codeword.resize(data.len() + ecc_len, 0);

    for i in 0..data.len() {
        if codeword[i] == 1 {
            for (j, &g) in generator.iter().enumerate() {
                codeword[i + j] ^= g;
            }
        }
    }

    // division leaves the remainder in the check positions; restore data
    codeword[..data.len()].copy_from_slice(data);
    codeword
}

/// Generator polynomial for the 15-bit format code, as a bitmask:
/// x^10 + x^8 + x^5 + x^4 + x^2 + x + 1.
const FORMAT_GENERATOR: u16 = 0x537;

/// Whether a raw (unmasked) 15-bit format codeword divides cleanly by the
/// format generator.
pub fn check_format(codeword: u16) -> bool {
    let mut remainder = codeword;
    for i in (0..5).rev() {
        if remainder & (1 << (i + 10)) != 0 {
            remainder ^= FORMAT_GENERATOR << i;
        }
    }
    remainder == 0
}
