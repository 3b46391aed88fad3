//! FluidCore - the simulation a host drives
//!
//! Owns one `FluidGrid` plus its settings and delegates:
//! - step/      the per-tick operator sequence
//! - commands/  source injection and reads
//! - init/      construction and runtime settings
//! - render/    density -> pixels for the host
//! - perf/      optional step timing
//!
//! Single-threaded and synchronous: the host serializes `step` and the
//! injection calls. Only the Jacobi relaxation fans out to rayon.

use crate::core::{FluidError, FluidGrid};
use crate::systems::fluid::RelaxationScheme;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::FluidVolume;
pub use perf_stats::PerfStats;
pub use settings::FluidSettings;

use perf_timer::PerfTimer;

/// The simulation
pub struct FluidCore {
    grid: FluidGrid,
    settings: FluidSettings,

    // State
    frame: u64,

    // Host-facing ABGR image of the density field
    pixels: Vec<u32>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl FluidCore {
    /// Create a zeroed `size x size` simulation.
    ///
    /// Fails for `size < 3` or a non-positive / non-finite `dt`; rates of 0
    /// mean "no diffusion".
    pub fn new(size: usize, diffusion: f32, viscosity: f32, dt: f32) -> Result<Self, FluidError> {
        Self::from_settings(FluidSettings {
            size,
            diffusion,
            viscosity,
            dt,
            ..FluidSettings::default()
        })
    }

    pub fn from_settings(settings: FluidSettings) -> Result<Self, FluidError> {
        init::create_fluid_core(settings)
    }

    pub fn from_settings_json(json: &str) -> Result<Self, FluidError> {
        Self::from_settings(FluidSettings::from_json(json)?)
    }

    pub fn size(&self) -> usize { self.grid.size() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn dt(&self) -> f32 { self.settings.dt }

    pub fn settings(&self) -> &FluidSettings { &self.settings }

    pub fn grid(&self) -> &FluidGrid { &self.grid }

    /// Advance every field by one `dt`
    pub fn step(&mut self) {
        step::step(self);
    }

    // === SOURCES ===

    pub fn add_density(&mut self, x: i32, y: i32, amount: f32) -> Result<(), FluidError> {
        commands::add_density(self, x, y, amount)
    }

    pub fn add_velocity(&mut self, x: i32, y: i32, dx: f32, dy: f32) -> Result<(), FluidError> {
        commands::add_velocity(self, x, y, dx, dy)
    }

    pub fn get_density(&self, x: i32, y: i32) -> Result<f32, FluidError> {
        commands::get_density(self, x, y)
    }

    pub fn get_velocity(&self, x: i32, y: i32) -> Result<(f32, f32), FluidError> {
        self.grid.velocity_at(x, y)
    }

    /// Add density and velocity over a disc (brush); returns cells touched
    pub fn add_source_in_radius(
        &mut self,
        cx: i32,
        cy: i32,
        radius: i32,
        density: f32,
        vx: f32,
        vy: f32,
    ) -> u32 {
        commands::add_source_in_radius(self, cx, cy, radius, density, vx, vy)
    }

    pub fn total_density(&self) -> f32 {
        self.grid.total_density()
    }

    /// Zero all fields and the frame counter
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    // === SETTINGS ===

    pub fn set_diffusion(&mut self, rate: f32) {
        settings::set_diffusion(self, rate);
    }

    pub fn set_viscosity(&mut self, rate: f32) {
        settings::set_viscosity(self, rate);
    }

    pub fn set_iterations(&mut self, iterations: u32) -> Result<(), FluidError> {
        settings::set_iterations(self, iterations)
    }

    pub fn set_relaxation_scheme(&mut self, scheme: RelaxationScheme) {
        settings::set_relaxation_scheme(self, scheme);
    }

    pub fn set_display_max_density(&mut self, max_density: f32) {
        settings::set_display_max_density(self, max_density);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === RENDER ===

    /// Get pointer to the live density array (for JS rendering)
    pub fn density_ptr(&self) -> *const f32 {
        self.grid.density_ptr()
    }

    pub fn density_len(&self) -> usize {
        self.grid.cell_count()
    }

    pub fn density(&self) -> &[f32] {
        self.grid.density()
    }

    /// Rebuild the grayscale image using `display_max_density`
    pub fn render_density(&mut self) -> *const u32 {
        let max_density = self.settings.display_max_density;
        render_extract::render_density(self, max_density)
    }

    /// Rebuild the grayscale image with an explicit white point
    pub fn render_density_with_max(&mut self, max_density: f32) -> *const u32 {
        render_extract::render_density(self, max_density)
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixels_ptr(&self) -> *const u32 {
        self.pixels.as_ptr()
    }

    pub fn pixels_len(&self) -> usize {
        self.pixels.len()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
