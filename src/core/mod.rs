//! Core storage: the fluid grid, its error type, and the access macros

// Utils with macros (must be first for macro export!)
#[macro_use]
pub mod utils;
pub mod error;
pub mod grid;

pub use error::FluidError;
pub use grid::{FluidGrid, MIN_GRID_SIZE};
