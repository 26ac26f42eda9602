//! Version-information pass.
//!
//! Versions 7 and up carry two 3x6 version-information blocks near the
//! top-right and bottom-left finders. Up to version 6 the block does not
//! exist, so the pass is a no-op; the hook stays in the pipeline so the
//! pass order already matches the larger symbols.

use crate::error::BuildError;
use crate::models::{Overlay, Version};

/// Version-information cells for a symbol, empty for versions 1-6.
pub fn version_information(version: Version) -> Result<Overlay, BuildError> {
    // Version validation already caps the range at 6; the match is the
    // seam where the 18-bit BCH-coded block slots in later.
    match version.number() {
        1..=6 => Ok(Overlay::new()),
        number => Err(BuildError::UnsupportedVersion(number)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_versions_have_no_block() {
        for number in 1..=6 {
            let version = Version::new(number).unwrap();
            assert!(version_information(version).unwrap().is_empty());
        }
    }
}
