//! The assembly pipeline: fixed patterns, payload placement, mask
//! selection, format commit, quiet zone.

use crate::encoder::{format, mask, patterns, placement, version_info};
use crate::error::BuildError;
use crate::models::{ECLevel, ModuleMatrix, Version};

/// Builds finished symbols for one version / EC level combination.
#[derive(Debug, Clone, Copy)]
pub struct SymbolAssembler {
    version: Version,
    ecl: ECLevel,
}

impl SymbolAssembler {
    /// Validate the version and capture the symbol parameters.
    pub fn new(version: u8, ecl: ECLevel) -> Result<Self, BuildError> {
        Ok(Self {
            version: Version::new(version)?,
            ecl,
        })
    }

    /// Assemble the final module matrix from an error-correction-coded
    /// payload bitstream.
    ///
    /// The returned matrix includes the one-module quiet zone, so its side
    /// length is `grid_size + 2`.
    pub fn assemble(&self, bits: &[bool]) -> Result<ModuleMatrix, BuildError> {
        let grid_size = self.version.grid_size();
        let version_cells = version_info::version_information(self.version)?;

        let mut matrix = ModuleMatrix::new(grid_size);
        matrix.overlay(&patterns::timing_row(grid_size));
        matrix.overlay(&patterns::timing_column(grid_size));
        matrix.overlay(&patterns::finder_patterns(grid_size));
        matrix.overlay(&patterns::separator_pattern(grid_size));
        matrix.overlay(&version_cells);
        // reservation goes last so the strips override anything beneath them
        matrix.overlay(&patterns::format_reservation(grid_size));

        let data = placement::place_payload(&matrix, bits)?;
        let selection = mask::select_mask(&matrix, &data);
        if cfg!(debug_assertions) && crate::debug::debug_enabled() {
            eprintln!(
                "selected mask {} with penalty {}",
                selection.mask.bits(),
                selection.penalty
            );
        }
        matrix.overlay(&selection.data);

        let value = format::format_info(self.ecl, selection.mask);
        matrix.overlay(&format::format_overlay(grid_size, value));

        Ok(matrix.with_quiet_zone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::bch;
    use crate::models::Module;

    fn payload(len: usize) -> Vec<bool> {
        // xorshift keeps the fixture deterministic without a rand dependency
        let mut state = 0x2545_F491u64;
        (0..len)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                state & 1 == 1
            })
            .collect()
    }

    /// Read a format copy back out of a finished (quiet-zone) matrix.
    fn read_format(matrix: &ModuleMatrix, copy: usize) -> u16 {
        let grid_size = matrix.size() - 2;
        crate::encoder::format::format_cells(grid_size)[copy]
            .iter()
            .fold(0u16, |acc, &(row, col)| {
                (acc << 1) | matrix.get(row + 1, col + 1).is_dark() as u16
            })
    }

    #[test]
    fn test_assembled_symbol_is_fully_resolved() {
        let assembler = SymbolAssembler::new(1, ECLevel::M).unwrap();
        let matrix = assembler.assemble(&payload(208)).unwrap();

        assert_eq!(matrix.size(), 23);
        for row in 0..23 {
            for col in 0..23 {
                let module = matrix.get(row, col);
                assert!(
                    module == Module::White || module == Module::Black,
                    "unresolved cell at ({row}, {col})"
                );
            }
        }
    }

    #[test]
    fn test_short_payload_leaves_trailing_cells_unset() {
        let assembler = SymbolAssembler::new(1, ECLevel::L).unwrap();
        let matrix = assembler.assemble(&payload(8)).unwrap();
        assert_eq!(matrix.count_free(), 200);
    }

    #[test]
    fn test_format_copies_agree_and_decode() {
        let assembler = SymbolAssembler::new(1, ECLevel::Q).unwrap();
        let matrix = assembler.assemble(&payload(208)).unwrap();

        let first = read_format(&matrix, 0);
        let second = read_format(&matrix, 1);
        assert_eq!(first, second);

        let raw = first ^ 0b101010000010010;
        assert!(bch::check_format(raw));
        assert_eq!((raw >> 13) as u8, ECLevel::Q.indicator());
    }

    #[test]
    fn test_dark_module_and_timing_survive_assembly() {
        let assembler = SymbolAssembler::new(1, ECLevel::M).unwrap();
        let matrix = assembler.assemble(&payload(208)).unwrap();

        // quiet zone shifts everything by one
        assert_eq!(matrix.get(14, 9), Module::Black);
        assert_eq!(matrix.get(7, 9), Module::Black);
        assert_eq!(matrix.get(9, 7), Module::Black);
        assert_eq!(matrix.get(7, 11), Module::Black);
        assert_eq!(matrix.get(7, 12), Module::White);
    }

    #[test]
    fn test_larger_versions_assemble() {
        for (version, grid_size) in [(2u8, 25usize), (6, 41)] {
            let assembler = SymbolAssembler::new(version, ECLevel::H).unwrap();
            let matrix = assembler.assemble(&payload(128)).unwrap();
            assert_eq!(matrix.size(), grid_size + 2);
        }
    }

    #[test]
    fn test_overflow_is_rejected_with_capacity() {
        let assembler = SymbolAssembler::new(1, ECLevel::M).unwrap();
        assert_eq!(
            assembler.assemble(&payload(209)),
            Err(BuildError::PayloadTooLong {
                payload: 209,
                capacity: 208,
            })
        );
    }
}
