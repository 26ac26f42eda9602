pub mod matrix;
pub mod symbol;

pub use matrix::{Module, ModuleMatrix, Overlay};
pub use symbol::{ECLevel, MaskPattern, Version};
