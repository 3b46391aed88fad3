use wasm_bindgen::prelude::*;

/// Timing snapshot of the last `step()` (all zeros while perf is disabled)
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) diffuse_ms: f64,
    pub(super) project_ms: f64,
    pub(super) advect_ms: f64,
    pub(super) relax_iterations: u32,
    pub(super) frame: u64,
    pub(super) cells: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn diffuse_ms(&self) -> f64 { self.diffuse_ms }
    #[wasm_bindgen(getter)]
    pub fn project_ms(&self) -> f64 { self.project_ms }
    #[wasm_bindgen(getter)]
    pub fn advect_ms(&self) -> f64 { self.advect_ms }
    /// Relaxation sweeps run during the step (diffusion + pressure)
    #[wasm_bindgen(getter)]
    pub fn relax_iterations(&self) -> u32 { self.relax_iterations }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
    #[wasm_bindgen(getter)]
    pub fn cells(&self) -> u32 { self.cells }
}
