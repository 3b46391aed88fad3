use super::FluidCore;

/// ABGR black with full alpha
pub(super) const OPAQUE_BLACK: u32 = 0xFF00_0000;

/// Grayscale ABGR for a normalized density (clamped to `[0, 1]`)
#[inline]
fn density_to_abgr(normalized: f32) -> u32 {
    let level = (normalized.clamp(0.0, 1.0) * 255.0) as u32;
    OPAQUE_BLACK | (level << 16) | (level << 8) | level
}

/// Fill the pixel buffer from the live density field.
///
/// `max_density` maps to white; non-positive (or NaN) renders all black.
pub(super) fn render_density(world: &mut FluidCore, max_density: f32) -> *const u32 {
    if max_density > 0.0 {
        let scale = 1.0 / max_density;
        for (pixel, &d) in world.pixels.iter_mut().zip(world.grid.density.iter()) {
            *pixel = density_to_abgr(d * scale);
        }
    } else {
        world.pixels.fill(OPAQUE_BLACK);
    }
    world.pixels.as_ptr()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_map_to_black_and_white() {
        assert_eq!(density_to_abgr(0.0), 0xFF00_0000);
        assert_eq!(density_to_abgr(1.0), 0xFFFF_FFFF);
        assert_eq!(density_to_abgr(-3.0), 0xFF00_0000);
        assert_eq!(density_to_abgr(7.5), 0xFFFF_FFFF);
    }

    #[test]
    fn channels_stay_equal() {
        let px = density_to_abgr(0.5);
        let r = px & 0xFF;
        assert_eq!((px >> 8) & 0xFF, r);
        assert_eq!((px >> 16) & 0xFF, r);
        assert_eq!(r, 127);
    }
}
