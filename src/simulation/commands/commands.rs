use crate::core::FluidError;

use super::FluidCore;

pub(super) fn add_density(
    world: &mut FluidCore,
    x: i32,
    y: i32,
    amount: f32,
) -> Result<(), FluidError> {
    world.grid.add_density(x, y, amount)
}

pub(super) fn add_velocity(
    world: &mut FluidCore,
    x: i32,
    y: i32,
    dx: f32,
    dy: f32,
) -> Result<(), FluidError> {
    world.grid.add_velocity(x, y, dx, dy)
}

pub(super) fn get_density(world: &FluidCore, x: i32, y: i32) -> Result<f32, FluidError> {
    world.grid.density_at(x, y)
}

/// Brush: inject density and velocity over a disc centred on `(cx, cy)`.
///
/// Offsets run `-radius..radius` on both axes and must satisfy
/// `dx^2 + dy^2 < radius^2`. Cells falling outside the grid are skipped, and
/// the offset ranges are cut to the grid first so the cost is bounded by the
/// grid, not the radius. Returns how many cells were touched.
pub(super) fn add_source_in_radius(
    world: &mut FluidCore,
    cx: i32,
    cy: i32,
    radius: i32,
    density: f32,
    vx: f32,
    vy: f32,
) -> u32 {
    if radius <= 0 {
        return 0;
    }
    let size = world.grid.size() as i64;
    let (cx, cy, radius) = (cx as i64, cy as i64, radius as i64);
    let r2 = radius * radius;

    let (dx_lo, dx_hi) = ((-radius).max(-cx), radius.min(size - cx));
    let (dy_lo, dy_hi) = ((-radius).max(-cy), radius.min(size - cy));

    let mut touched = 0;
    for dy in dy_lo..dy_hi {
        for dx in dx_lo..dx_hi {
            if dx * dx + dy * dy >= r2 {
                continue;
            }
            let idx = world.grid.index((cx + dx) as usize, (cy + dy) as usize);
            world.grid.density[idx] += density;
            world.grid.vx[idx] += vx;
            world.grid.vy[idx] += vy;
            touched += 1;
        }
    }
    touched
}

pub(super) fn clear(world: &mut FluidCore) {
    world.grid.clear();
    world.frame = 0;
    world.perf_stats.reset();
}
