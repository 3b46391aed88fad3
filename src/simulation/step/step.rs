//! One simulation tick (stable-fluids splitting)
//!
//! Order is fixed:
//!   velocity: diffuse -> project -> self-advect -> project
//!   density:  diffuse -> advect along the new velocity
//!
//! Buffer roles per stage:
//! - `vx_prev/vy_prev` receive diffused velocity; `vx/vy` are the first
//!   projection's pressure/divergence scratch.
//! - `vx/vy` receive advected velocity; `vx_prev/vy_prev` are the second
//!   projection's scratch.
//! - `density_prev` receives diffused density; advection writes the result
//!   back into `density`, so `density` always holds the post-step field.

use crate::core::FluidGrid;
use crate::systems::fluid::{advect, diffuse, project, BoundaryKind, SolverParams};

use super::{FluidCore, PerfTimer};

pub(super) fn step(world: &mut FluidCore) {
    let perf_on = world.perf_enabled;
    let step_start = perf_on.then(PerfTimer::start);

    let params = world.settings.solver_params();
    let dt = world.settings.dt;
    let viscosity = world.settings.viscosity;
    let diffusion = world.settings.diffusion;
    let grid = &mut world.grid;

    let mut diffuse_ms = 0.0;
    let mut project_ms = 0.0;
    let mut advect_ms = 0.0;

    // === VELOCITY ===
    timed(perf_on, &mut diffuse_ms, || diffuse_velocity(grid, viscosity, dt, &params));
    timed(perf_on, &mut project_ms, || project_velocity_prev(grid, &params));
    timed(perf_on, &mut advect_ms, || advect_velocity(grid, dt));
    timed(perf_on, &mut project_ms, || project_velocity(grid, &params));

    // === DENSITY ===
    timed(perf_on, &mut diffuse_ms, || diffuse_density(grid, diffusion, dt, &params));
    timed(perf_on, &mut advect_ms, || advect_density(grid, dt));

    world.frame += 1;

    if let Some(start) = step_start {
        let stats = &mut world.perf_stats;
        stats.reset();
        stats.step_ms = start.elapsed_ms();
        stats.diffuse_ms = diffuse_ms;
        stats.project_ms = project_ms;
        stats.advect_ms = advect_ms;
        // Three diffusions and two pressure solves
        stats.relax_iterations = params.iterations * 5;
        stats.frame = world.frame;
        stats.cells = world.grid.cell_count() as u32;
    }
}

#[inline]
fn timed(perf_on: bool, slot: &mut f64, stage: impl FnOnce()) {
    if perf_on {
        let t0 = PerfTimer::start();
        stage();
        *slot += t0.elapsed_ms();
    } else {
        stage();
    }
}

fn diffuse_velocity(grid: &mut FluidGrid, viscosity: f32, dt: f32, params: &SolverParams) {
    let n = grid.size();
    let FluidGrid { vx, vy, vx_prev, vy_prev, scratch, .. } = grid;
    diffuse(BoundaryKind::VelocityX, vx_prev, vx, viscosity, dt, n, params, scratch);
    diffuse(BoundaryKind::VelocityY, vy_prev, vy, viscosity, dt, n, params, scratch);
}

/// `vx/vy` serve as pressure and divergence scratch here
fn project_velocity_prev(grid: &mut FluidGrid, params: &SolverParams) {
    let n = grid.size();
    let FluidGrid { vx, vy, vx_prev, vy_prev, scratch, .. } = grid;
    project(vx_prev, vy_prev, vx, vy, n, params, scratch);
}

fn advect_velocity(grid: &mut FluidGrid, dt: f32) {
    let n = grid.size();
    let FluidGrid { vx, vy, vx_prev, vy_prev, .. } = grid;
    advect(BoundaryKind::VelocityX, vx, vx_prev, vx_prev, vy_prev, dt, n);
    advect(BoundaryKind::VelocityY, vy, vy_prev, vx_prev, vy_prev, dt, n);
}

fn project_velocity(grid: &mut FluidGrid, params: &SolverParams) {
    let n = grid.size();
    let FluidGrid { vx, vy, vx_prev, vy_prev, scratch, .. } = grid;
    project(vx, vy, vx_prev, vy_prev, n, params, scratch);
}

fn diffuse_density(grid: &mut FluidGrid, diffusion: f32, dt: f32, params: &SolverParams) {
    let n = grid.size();
    let FluidGrid { density, density_prev, scratch, .. } = grid;
    diffuse(BoundaryKind::Scalar, density_prev, density, diffusion, dt, n, params, scratch);
}

fn advect_density(grid: &mut FluidGrid, dt: f32) {
    let n = grid.size();
    let FluidGrid { density, density_prev, vx, vy, .. } = grid;
    advect(BoundaryKind::Scalar, density, density_prev, vx, vy, dt, n);
}
