use wasm_bindgen::prelude::*;

use crate::core::FluidError;
use crate::systems::fluid::RelaxationScheme;

use super::perf_stats::PerfStats;
use super::FluidCore;

fn to_js(err: FluidError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct FluidVolume {
    core: FluidCore,
}

#[wasm_bindgen]
impl FluidVolume {
    /// Create a zeroed `size x size` fluid volume
    #[wasm_bindgen(constructor)]
    pub fn new(size: u32, diffusion: f32, viscosity: f32, dt: f32) -> Result<FluidVolume, JsValue> {
        let core = FluidCore::new(size as usize, diffusion, viscosity, dt).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(js_name = fromSettingsJson)]
    pub fn from_settings_json(json: String) -> Result<FluidVolume, JsValue> {
        let core = FluidCore::from_settings_json(&json).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn size(&self) -> u32 { self.core.size() as u32 }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn dt(&self) -> f32 { self.core.dt() }

    #[wasm_bindgen(js_name = settingsJson)]
    pub fn settings_json(&self) -> String {
        self.core.settings().to_json()
    }

    /// Step the simulation forward by one dt
    pub fn step(&mut self) {
        self.core.step();
    }

    #[wasm_bindgen(js_name = addDensity)]
    pub fn add_density(&mut self, x: i32, y: i32, amount: f32) -> Result<(), JsValue> {
        self.core.add_density(x, y, amount).map_err(to_js)
    }

    #[wasm_bindgen(js_name = addVelocity)]
    pub fn add_velocity(&mut self, x: i32, y: i32, dx: f32, dy: f32) -> Result<(), JsValue> {
        self.core.add_velocity(x, y, dx, dy).map_err(to_js)
    }

    #[wasm_bindgen(js_name = getDensity)]
    pub fn get_density(&self, x: i32, y: i32) -> Result<f32, JsValue> {
        self.core.get_density(x, y).map_err(to_js)
    }

    /// Brush: density and velocity over a disc, off-grid cells skipped
    #[wasm_bindgen(js_name = addSourceInRadius)]
    pub fn add_source_in_radius(
        &mut self,
        cx: i32,
        cy: i32,
        radius: i32,
        density: f32,
        vx: f32,
        vy: f32,
    ) -> u32 {
        self.core.add_source_in_radius(cx, cy, radius, density, vx, vy)
    }

    #[wasm_bindgen(js_name = totalDensity)]
    pub fn total_density(&self) -> f32 {
        self.core.total_density()
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    // === SETTINGS ===

    #[wasm_bindgen(js_name = setDiffusion)]
    pub fn set_diffusion(&mut self, rate: f32) {
        self.core.set_diffusion(rate);
    }

    #[wasm_bindgen(js_name = setViscosity)]
    pub fn set_viscosity(&mut self, rate: f32) {
        self.core.set_viscosity(rate);
    }

    #[wasm_bindgen(js_name = setIterations)]
    pub fn set_iterations(&mut self, iterations: u32) -> Result<(), JsValue> {
        self.core.set_iterations(iterations).map_err(to_js)
    }

    /// Switch between Gauss-Seidel (default) and the parallel Jacobi sweep
    #[wasm_bindgen(js_name = setJacobiRelaxation)]
    pub fn set_jacobi_relaxation(&mut self, enabled: bool) {
        let scheme = if enabled {
            RelaxationScheme::Jacobi
        } else {
            RelaxationScheme::GaussSeidel
        };
        self.core.set_relaxation_scheme(scheme);
    }

    #[wasm_bindgen(js_name = setDisplayMaxDensity)]
    pub fn set_display_max_density(&mut self, max_density: f32) {
        self.core.set_display_max_density(max_density);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === RENDER ===

    /// Get pointer to the density array (f32, size*size, row-major)
    pub fn density_ptr(&self) -> *const f32 {
        self.core.density_ptr()
    }

    pub fn density_len(&self) -> usize {
        self.core.density_len()
    }

    /// Redraw the ABGR image and return its pointer
    #[wasm_bindgen(js_name = renderDensity)]
    pub fn render_density(&mut self) -> *const u32 {
        self.core.render_density()
    }

    #[wasm_bindgen(js_name = renderDensityWithMax)]
    pub fn render_density_with_max(&mut self, max_density: f32) -> *const u32 {
        self.core.render_density_with_max(max_density)
    }

    pub fn pixels_ptr(&self) -> *const u32 {
        self.core.pixels_ptr()
    }

    pub fn pixels_len(&self) -> usize {
        self.core.pixels_len()
    }

    pub fn pixels_len_bytes(&self) -> usize {
        self.core.pixels_len() * std::mem::size_of::<u32>()
    }
}

impl FluidVolume {
    /// Borrow the wrapped simulation (native hosts and tests)
    pub fn core(&self) -> &FluidCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut FluidCore {
        &mut self.core
    }
}
