use thiserror::Error;

/// Errors reported by symbol assembly.
///
/// Geometry violations (overlay coordinates outside the grid, non-square
/// consumers) are programming errors and panic instead; everything here is
/// an input-validation failure the caller can act on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Requested a symbol version outside the supported 1-6 range.
    ///
    /// Versions 7 and up need the 18-bit version-information block, which
    /// is deliberately not implemented; failing loudly beats emitting a
    /// symbol no reader will accept.
    #[error("version {0} is not supported (versions 7+ require a version information block)")]
    UnsupportedVersion(u8),

    /// The payload bitstream holds more bits than the grid has free modules.
    #[error("payload of {payload} bits exceeds the {capacity} free modules of the grid")]
    PayloadTooLong {
        /// Number of bits in the rejected payload.
        payload: usize,
        /// Number of modules available for data after fixed-pattern placement.
        capacity: usize,
    },

    /// A payload string contained something other than '0' or '1'.
    #[error("payload contains {0:?}, expected only '0' and '1'")]
    InvalidBit(char),
}
