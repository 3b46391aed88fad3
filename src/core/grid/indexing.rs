use super::*;

impl FluidGrid {
    // === Dimensions ===
    #[inline]
    pub fn size(&self) -> usize { self.size }

    /// Cells per field (`size * size`)
    #[inline]
    pub fn cell_count(&self) -> usize { self.len }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        x + y * self.size
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (usize, usize) {
        (idx % self.size, idx / self.size)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.size as i32 && y >= 0 && y < self.size as i32
    }

    /// Validated index for host-supplied coordinates
    #[inline]
    pub fn checked_index(&self, x: i32, y: i32) -> Result<usize, FluidError> {
        if !self.in_bounds(x, y) {
            return Err(FluidError::OutOfBounds { x, y, size: self.size });
        }
        Ok(self.index(x as usize, y as usize))
    }
}
