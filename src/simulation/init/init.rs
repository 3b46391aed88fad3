use crate::core::{FluidError, FluidGrid};

use super::perf_stats::PerfStats;
use super::render_extract::OPAQUE_BLACK;
use super::settings::FluidSettings;
use super::FluidCore;

pub(super) fn create_fluid_core(settings: FluidSettings) -> Result<FluidCore, FluidError> {
    settings.validate()?;
    let grid = FluidGrid::new(settings.size)?;
    let pixels = vec![OPAQUE_BLACK; grid.cell_count()];

    engine_log!(
        "fluid: {}x{} grid, diffusion={}, viscosity={}, dt={}, {} x {:?}",
        settings.size,
        settings.size,
        settings.diffusion,
        settings.viscosity,
        settings.dt,
        settings.iterations,
        settings.relaxation
    );

    Ok(FluidCore {
        grid,
        settings,
        frame: 0,
        pixels,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}
