use crate::error::BuildError;

/// QR symbol version. Only versions 1-6 are supported: they need no
/// version-information block and no alignment patterns beyond what the
/// fixed passes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version(u8);

impl Version {
    /// Smallest supported version.
    pub const MIN: u8 = 1;
    /// Largest supported version (versions 7+ need version information).
    pub const MAX: u8 = 6;

    /// Validate a version number before any matrix work begins.
    pub fn new(number: u8) -> Result<Self, BuildError> {
        if (Self::MIN..=Self::MAX).contains(&number) {
            Ok(Version(number))
        } else {
            Err(BuildError::UnsupportedVersion(number))
        }
    }

    /// The version number (1-6).
    pub fn number(self) -> u8 {
        self.0
    }

    /// Grid side length in modules: 4 * version + 17 (version 1 is 21).
    pub fn grid_size(self) -> usize {
        4 * self.0 as usize + 17
    }

    /// Inverse of [`Version::grid_size`].
    pub fn from_grid_size(grid_size: usize) -> Option<Self> {
        if grid_size < 21 || (grid_size - 17) % 4 != 0 {
            return None;
        }
        Version::new(((grid_size - 17) / 4) as u8).ok()
    }
}

/// Error correction level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ECLevel {
    /// Low (~7% recovery capacity).
    L,
    /// Medium (~15% recovery capacity).
    M,
    /// Quartile (~25% recovery capacity).
    Q,
    /// High (~30% recovery capacity).
    H,
}

impl ECLevel {
    /// Two-bit format-information indicator.
    ///
    /// The standard's mapping is not alphabetical: L=01, M=00, Q=11, H=10.
    pub fn indicator(self) -> u8 {
        match self {
            ECLevel::L => 1,
            ECLevel::M => 0,
            ECLevel::Q => 3,
            ECLevel::H => 2,
        }
    }
}

/// Mask pattern (0-7). `i` is the row, `j` the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskPattern {
    /// (i + j) % 2 == 0
    Pattern0 = 0,
    /// i % 2 == 0
    Pattern1 = 1,
    /// j % 3 == 0
    Pattern2 = 2,
    /// (i + j) % 3 == 0
    Pattern3 = 3,
    /// (i/2 + j/3) % 2 == 0
    Pattern4 = 4,
    /// (i*j)%2 + (i*j)%3 == 0
    Pattern5 = 5,
    /// ((i*j)%2 + (i*j)%3) % 2 == 0
    Pattern6 = 6,
    /// ((i+j)%2 + (i*j)%3) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// All eight candidates in mask-id order. Selection iterates this array,
    /// so "first index wins ties" is well defined.
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::Pattern0,
        MaskPattern::Pattern1,
        MaskPattern::Pattern2,
        MaskPattern::Pattern3,
        MaskPattern::Pattern4,
        MaskPattern::Pattern5,
        MaskPattern::Pattern6,
        MaskPattern::Pattern7,
    ];

    /// Get mask pattern from its three format-information bits.
    pub fn from_bits(bits: u8) -> Option<Self> {
        MaskPattern::ALL.get((bits & 0x07) as usize).copied()
    }

    /// The mask id (0-7) as carried in the format information.
    pub fn bits(self) -> u8 {
        self as u8
    }

    /// Check if the data module at (row, col) should be toggled.
    pub fn is_masked(self, row: usize, col: usize) -> bool {
        let (i, j) = (row, col);
        match self {
            MaskPattern::Pattern0 => (i + j) % 2 == 0,
            MaskPattern::Pattern1 => i % 2 == 0,
            MaskPattern::Pattern2 => j % 3 == 0,
            MaskPattern::Pattern3 => (i + j) % 3 == 0,
            MaskPattern::Pattern4 => (i / 2 + j / 3) % 2 == 0,
            MaskPattern::Pattern5 => ((i * j) % 2 + (i * j) % 3) == 0,
            MaskPattern::Pattern6 => (((i * j) % 2) + ((i * j) % 3)) % 2 == 0,
            MaskPattern::Pattern7 => (((i + j) % 2) + ((i * j) % 3)) % 2 == 0,
        }
    }
}
