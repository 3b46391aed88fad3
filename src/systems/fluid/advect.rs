//! Semi-Lagrangian transport
//!
//! Each interior cell traces backwards along the velocity for one step and
//! takes the bilinear blend of `src` around the departure point.

use super::boundary::{fix_boundary, BoundaryKind};

/// Advect `src` along `(vx, vy)` into `dest`, then fix `dest`'s boundary.
///
/// The departure point is clamped to `[0.5, size - 1.5]` so the four
/// sampled cells `floor(x)..=floor(x) + 1` always lie inside the grid.
pub fn advect(
    kind: BoundaryKind,
    dest: &mut [f32],
    src: &[f32],
    vx: &[f32],
    vy: &[f32],
    dt: f32,
    size: usize,
) {
    let n = size;
    let dt0 = dt * (n - 2) as f32;
    let lo = 0.5f32;
    let hi = n as f32 - 1.5;

    for j in 1..n - 1 {
        let jf = j as f32;
        for i in 1..n - 1 {
            let x = (i as f32 - dt0 * cell!(vx, n, [i, j])).clamp(lo, hi);
            let y = (jf - dt0 * cell!(vy, n, [i, j])).clamp(lo, hi);

            let i0 = x.floor();
            let j0 = y.floor();
            let s1 = x - i0;
            let s0 = 1.0 - s1;
            let t1 = y - j0;
            let t0 = 1.0 - t1;

            let i0 = i0 as usize;
            let j0 = j0 as usize;
            let i1 = i0 + 1;
            let j1 = j0 + 1;

            cell!(
                dest,
                n,
                [i, j] = s0 * (t0 * cell!(src, n, [i0, j0]) + t1 * cell!(src, n, [i0, j1]))
                    + s1 * (t0 * cell!(src, n, [i1, j0]) + t1 * cell!(src, n, [i1, j1]))
            );
        }
    }
    fix_boundary(kind, dest, n);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn still_fluid_copies_the_interior() {
        let n = 6;
        let src: Vec<f32> = (0..n * n).map(|i| i as f32).collect();
        let still = vec![0.0; n * n];
        let mut dest = vec![0.0; n * n];
        advect(BoundaryKind::Scalar, &mut dest, &src, &still, &still, 0.1, n);
        for j in 1..n - 1 {
            for i in 1..n - 1 {
                assert_eq!(dest[i + j * n], src[i + j * n]);
            }
        }
    }

    #[test]
    fn whole_cell_shift_moves_a_value_downstream() {
        // dt0 = dt * (n - 2) = 1, vx = 1: every cell samples its left neighbour
        let n = 6;
        let dt = 1.0 / (n - 2) as f32;
        let mut src = vec![0.0; n * n];
        src[2 + 3 * n] = 8.0;
        let vx = vec![1.0; n * n];
        let vy = vec![0.0; n * n];
        let mut dest = vec![0.0; n * n];
        advect(BoundaryKind::Scalar, &mut dest, &src, &vx, &vy, dt, n);
        assert_eq!(dest[3 + 3 * n], 8.0);
        assert_eq!(dest[2 + 3 * n], 0.0);
    }

    #[test]
    fn half_cell_shift_blends_neighbours_equally() {
        let n = 6;
        let dt = 0.5 / (n - 2) as f32;
        let mut src = vec![0.0; n * n];
        src[2 + 2 * n] = 4.0;
        let vx = vec![0.0; n * n];
        let vy = vec![1.0; n * n];
        let mut dest = vec![0.0; n * n];
        advect(BoundaryKind::Scalar, &mut dest, &src, &vx, &vy, dt, n);
        // (2,2) samples y = 1.5, (2,3) samples y = 2.5
        assert!((dest[2 + 2 * n] - 2.0).abs() < 1e-6);
        assert!((dest[2 + 3 * n] - 2.0).abs() < 1e-6);
    }

    #[test]
    fn fast_flow_is_clamped_inside_the_grid() {
        let n = 5;
        let src = vec![1.0; n * n];
        let vx = vec![1000.0; n * n];
        let vy = vec![-1000.0; n * n];
        let mut dest = vec![0.0; n * n];
        advect(BoundaryKind::Scalar, &mut dest, &src, &vx, &vy, 0.1, n);
        assert!(dest.iter().all(|&d| (d - 1.0).abs() < 1e-6));
    }
}
