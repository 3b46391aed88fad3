//! Fluid Volume Engine - 2D stable-fluids solver in WASM
//!
//! A fixed `size x size` grid carrying density and velocity. Each step
//! diffuses, projects, and advects velocity, then diffuses and advects
//! density along it. Hosts inject sources between steps and read density back.
//!
//! Architecture:
//! - core/        - Field storage, indexing, errors, macros
//! - systems/     - Numerical operators (boundary, relaxation, diffuse, project, advect)
//! - simulation/  - Orchestration, settings, render buffer, wasm facade

// Utils with access/log macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod systems;
pub mod simulation;

pub use crate::core::{FluidError, FluidGrid};
pub use simulation::{FluidCore, FluidSettings, FluidVolume, PerfStats};
pub use systems::fluid::{BoundaryKind, RelaxationScheme, SolverParams, DEFAULT_ITERATIONS};

use wasm_bindgen::prelude::*;

// Smaller allocator for size-sensitive wasm builds
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    engine_log!("Fluid Volume engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
