//! FluidGrid - Structure of Arrays (SoA) storage for the solver
//!
//! One square `size x size` grid, every quantity in its own flat array:
//!     density[], density_prev[], vx[], vy[], vx_prev[], vy_prev[]
//! indexed as `x + y * size`.
//!
//! The outer ring of every field is derived by the boundary fix after each
//! operator; only the interior is independent simulation state.

use super::error::FluidError;

mod indexing;
mod fields;

/// Smallest grid with at least one interior cell
pub const MIN_GRID_SIZE: usize = 3;

/// SoA Grid - all fluid data in separate arrays
pub struct FluidGrid {
    size: usize,
    len: usize,

    // Structure of Arrays - each quantity in its own contiguous array
    pub density: Vec<f32>,
    pub density_prev: Vec<f32>,  // diffusion output, advection source
    pub vx: Vec<f32>,
    pub vy: Vec<f32>,
    pub vx_prev: Vec<f32>,       // diffusion output / projection scratch
    pub vy_prev: Vec<f32>,

    // Previous-sweep copy for the Jacobi relaxation variant
    pub scratch: Vec<f32>,
}

impl FluidGrid {
    pub fn new(size: usize) -> Result<Self, FluidError> {
        let len = Self::cell_count_for(size)?;
        Ok(Self {
            size,
            len,
            density: vec![0.0; len],
            density_prev: vec![0.0; len],
            vx: vec![0.0; len],
            vy: vec![0.0; len],
            vx_prev: vec![0.0; len],
            vy_prev: vec![0.0; len],
            scratch: vec![0.0; len],
        })
    }

    /// `size * size`, rejecting sizes whose fields could not be addressed
    pub fn cell_count_for(size: usize) -> Result<usize, FluidError> {
        if size < MIN_GRID_SIZE {
            return Err(FluidError::InvalidSize(size));
        }
        size.checked_mul(size)
            .filter(|&len| {
                len.checked_mul(std::mem::size_of::<f32>())
                    .is_some_and(|bytes| bytes <= isize::MAX as usize)
            })
            .ok_or(FluidError::InvalidSize(size))
    }

    /// Zero every field (lengths are kept)
    pub fn clear(&mut self) {
        self.density.fill(0.0);
        self.density_prev.fill(0.0);
        self.vx.fill(0.0);
        self.vy.fill(0.0);
        self.vx_prev.fill(0.0);
        self.vy_prev.fill(0.0);
        self.scratch.fill(0.0);
    }
}
