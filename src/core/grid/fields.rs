use super::*;

impl FluidGrid {
    // === Density access ===
    #[inline]
    pub fn density_at(&self, x: i32, y: i32) -> Result<f32, FluidError> {
        let idx = self.checked_index(x, y)?;
        Ok(self.density[idx])
    }

    /// Inject density at one cell; out-of-range cells are rejected untouched
    #[inline]
    pub fn add_density(&mut self, x: i32, y: i32, amount: f32) -> Result<(), FluidError> {
        let idx = self.checked_index(x, y)?;
        self.density[idx] += amount;
        Ok(())
    }

    // === Velocity access ===
    #[inline]
    pub fn velocity_at(&self, x: i32, y: i32) -> Result<(f32, f32), FluidError> {
        let idx = self.checked_index(x, y)?;
        Ok((self.vx[idx], self.vy[idx]))
    }

    #[inline]
    pub fn add_velocity(&mut self, x: i32, y: i32, dvx: f32, dvy: f32) -> Result<(), FluidError> {
        let idx = self.checked_index(x, y)?;
        self.vx[idx] += dvx;
        self.vy[idx] += dvy;
        Ok(())
    }

    // === Bulk views ===
    #[inline]
    pub fn density(&self) -> &[f32] { &self.density }

    #[inline]
    pub fn velocity_x(&self) -> &[f32] { &self.vx }

    #[inline]
    pub fn velocity_y(&self) -> &[f32] { &self.vy }

    pub fn total_density(&self) -> f32 {
        self.density.iter().sum()
    }

    pub fn density_ptr(&self) -> *const f32 {
        self.density.as_ptr()
    }
}
