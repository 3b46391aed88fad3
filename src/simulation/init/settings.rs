use serde::{Deserialize, Serialize};

use crate::core::{FluidError, FluidGrid};
use crate::systems::fluid::{RelaxationScheme, SolverParams, DEFAULT_ITERATIONS};

use super::perf_stats::PerfStats;
use super::FluidCore;

/// Construction and runtime configuration.
///
/// JSON uses camelCase keys; every key is optional:
/// ```json
/// { "size": 128, "diffusion": 0.0001, "viscosity": 0.0, "dt": 0.1,
///   "iterations": 20, "relaxation": "gaussSeidel", "displayMaxDensity": 10.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FluidSettings {
    pub size: usize,
    pub diffusion: f32,
    pub viscosity: f32,
    pub dt: f32,
    pub iterations: u32,
    pub relaxation: RelaxationScheme,
    /// Density rendered as full white
    pub display_max_density: f32,
}

impl Default for FluidSettings {
    fn default() -> Self {
        Self {
            size: 64,
            diffusion: 0.0,
            viscosity: 0.0,
            dt: 0.1,
            iterations: DEFAULT_ITERATIONS,
            relaxation: RelaxationScheme::GaussSeidel,
            display_max_density: 10.0,
        }
    }
}

impl FluidSettings {
    pub fn from_json(json: &str) -> Result<Self, FluidError> {
        let settings: FluidSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Size and time step are the only hard constraints; rates are taken as given.
    pub fn validate(&self) -> Result<(), FluidError> {
        FluidGrid::cell_count_for(self.size)?;
        validate_dt(self.dt)?;
        validate_iterations(self.iterations)?;
        Ok(())
    }

    pub(crate) fn solver_params(&self) -> SolverParams {
        SolverParams {
            iterations: self.iterations,
            scheme: self.relaxation,
        }
    }
}

fn validate_dt(dt: f32) -> Result<(), FluidError> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(FluidError::InvalidTimeStep(dt));
    }
    Ok(())
}

fn validate_iterations(iterations: u32) -> Result<(), FluidError> {
    if iterations == 0 {
        return Err(FluidError::InvalidIterations(iterations));
    }
    Ok(())
}

pub(super) fn enable_perf_metrics(world: &mut FluidCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &FluidCore) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn set_diffusion(world: &mut FluidCore, rate: f32) {
    world.settings.diffusion = rate;
}

pub(super) fn set_viscosity(world: &mut FluidCore, rate: f32) {
    world.settings.viscosity = rate;
}

pub(super) fn set_iterations(world: &mut FluidCore, iterations: u32) -> Result<(), FluidError> {
    validate_iterations(iterations)?;
    world.settings.iterations = iterations;
    engine_log!("fluid: relaxation iterations = {}", iterations);
    Ok(())
}

pub(super) fn set_relaxation_scheme(world: &mut FluidCore, scheme: RelaxationScheme) {
    world.settings.relaxation = scheme;
    engine_log!("fluid: relaxation scheme = {:?}", scheme);
}

pub(super) fn set_display_max_density(world: &mut FluidCore, max_density: f32) {
    world.settings.display_max_density = max_density;
}
