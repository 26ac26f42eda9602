/// State of a single module (cell) while the symbol is under construction.
///
/// The finished symbol only ever contains `White` and `Black`; the two
/// placeholder states exist mid-pipeline so later passes can tell which
/// cells are still theirs to claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Module {
    /// Light module.
    White,
    /// Dark module.
    Black,
    /// Cell not yet claimed by any pass; eligible for data placement.
    Unset,
    /// Cell reserved for format information whose value is not known yet.
    Reserved,
}

impl Module {
    /// Module colour for a payload bit (1 = dark).
    pub fn from_bit(bit: bool) -> Self {
        if bit { Module::Black } else { Module::White }
    }

    /// Whether the module reads as dark. Placeholders count as light.
    pub fn is_dark(self) -> bool {
        self == Module::Black
    }
}

/// Ordered list of cell writes. Later entries overwrite earlier ones, and
/// overlays themselves are applied in a fixed, documented sequence - the
/// order is part of the placement semantics, never incidental.
pub type Overlay = Vec<((usize, usize), Module)>;

/// Square module grid, indexed as (row, col).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    size: usize,
    cells: Vec<Module>,
}

impl ModuleMatrix {
    /// Create a new grid with every cell `Unset`.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Module::Unset; size * size],
        }
    }

    /// Grid side length in modules.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the module at (row, col). Panics outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Module {
        assert!(
            row < self.size && col < self.size,
            "module read out of bounds: ({}, {}) on a {}-grid",
            row,
            col,
            self.size
        );
        self.cells[row * self.size + col]
    }

    /// Set the module at (row, col). Panics outside the grid.
    pub fn set(&mut self, row: usize, col: usize, value: Module) {
        assert!(
            row < self.size && col < self.size,
            "module write out of bounds: ({}, {}) on a {}-grid",
            row,
            col,
            self.size
        );
        self.cells[row * self.size + col] = value;
    }

    /// Apply an overlay, unconditionally overwriting whatever each cell held.
    ///
    /// An out-of-range coordinate means a pattern generator produced bad
    /// geometry; that is a fatal contract violation, never silently clipped.
    pub fn overlay(&mut self, cells: &Overlay) {
        for &((row, col), value) in cells {
            self.set(row, col, value);
        }
    }

    /// Whether the cell is still available for data placement.
    pub fn is_free(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Module::Unset
    }

    /// Number of cells still available for data placement.
    pub fn count_free(&self) -> usize {
        self.cells.iter().filter(|&&m| m == Module::Unset).count()
    }

    /// Finished-symbol border: a copy grown by one `White` ring on each side.
    pub fn with_quiet_zone(&self) -> ModuleMatrix {
        let bordered_size = self.size + 2;
        let mut bordered = ModuleMatrix {
            size: bordered_size,
            cells: vec![Module::White; bordered_size * bordered_size],
        };
        for row in 0..self.size {
            for col in 0..self.size {
                bordered.set(row + 1, col + 1, self.get(row, col));
            }
        }
        bordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_matrix_is_all_unset() {
        let matrix = ModuleMatrix::new(21);
        assert_eq!(matrix.size(), 21);
        assert_eq!(matrix.count_free(), 21 * 21);
        assert!(matrix.is_free(10, 10));
    }

    #[test]
    fn test_overlay_overwrites_unconditionally() {
        let mut matrix = ModuleMatrix::new(5);
        matrix.overlay(&vec![((2, 2), Module::Black)]);
        assert_eq!(matrix.get(2, 2), Module::Black);

        matrix.overlay(&vec![((2, 2), Module::Reserved)]);
        assert_eq!(matrix.get(2, 2), Module::Reserved);
        assert!(!matrix.is_free(2, 2));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_overlay_out_of_bounds_panics() {
        let mut matrix = ModuleMatrix::new(5);
        matrix.overlay(&vec![((5, 0), Module::White)]);
    }

    #[test]
    fn test_quiet_zone_borders_with_white() {
        let mut matrix = ModuleMatrix::new(3);
        matrix.set(1, 1, Module::Black);
        let bordered = matrix.with_quiet_zone();

        assert_eq!(bordered.size(), 5);
        for i in 0..5 {
            assert_eq!(bordered.get(0, i), Module::White);
            assert_eq!(bordered.get(4, i), Module::White);
            assert_eq!(bordered.get(i, 0), Module::White);
            assert_eq!(bordered.get(i, 4), Module::White);
        }
        assert_eq!(bordered.get(2, 2), Module::Black);
        assert_eq!(bordered.get(1, 1), Module::Unset);
    }
}
