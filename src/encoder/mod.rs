//! Symbol assembly stages, one module per pipeline pass.

pub mod assembler;
pub mod bch;
pub mod format;
pub mod mask;
pub mod patterns;
pub mod penalty;
pub mod placement;
pub mod version_info;

pub use assembler::SymbolAssembler;
pub use mask::MaskSelection;
