//! Pressure projection: push a velocity field towards zero divergence
//!
//! 1. div = -0.5 * (central-difference divergence) / size, p = 0
//! 2. relax `6p - sum(neighbour p) = div` (a = 1, c = 6)
//! 3. v -= 0.5 * size * grad(p)
//!
//! With a fixed sweep count this removes most, not all, of the divergence.

use super::boundary::{fix_boundary, BoundaryKind};
use super::relaxation::{linear_solve, SolverParams};

/// Negative scaled divergence at interior cell `(i, j)`
#[inline]
fn scaled_divergence(vx: &[f32], vy: &[f32], i: usize, j: usize, n: usize) -> f32 {
    -0.5 * (cell!(vx, n, [i + 1, j]) - cell!(vx, n, [i - 1, j]) + cell!(vy, n, [i, j + 1])
        - cell!(vy, n, [i, j - 1]))
        / n as f32
}

/// The discrete divergence `project` builds, for every interior cell.
///
/// Edge cells are left at zero. Used for diagnostics.
pub fn divergence(vx: &[f32], vy: &[f32], size: usize) -> Vec<f32> {
    let n = size;
    let mut div = vec![0.0; n * n];
    for j in 1..n - 1 {
        for i in 1..n - 1 {
            div[i + j * n] = scaled_divergence(vx, vy, i, j, n);
        }
    }
    div
}

/// Project `(vx, vy)` in place using `p` and `div` as scratch.
///
/// On return `p` holds the relaxed pressure and `div` the divergence that was
/// removed; callers may treat both as garbage.
pub fn project(
    vx: &mut [f32],
    vy: &mut [f32],
    p: &mut [f32],
    div: &mut [f32],
    size: usize,
    params: &SolverParams,
    scratch: &mut [f32],
) {
    let n = size;

    for j in 1..n - 1 {
        for i in 1..n - 1 {
            cell!(div, n, [i, j] = scaled_divergence(vx, vy, i, j, n));
            cell!(p, n, [i, j] = 0.0);
        }
    }
    fix_boundary(BoundaryKind::Scalar, div, n);
    fix_boundary(BoundaryKind::Scalar, p, n);
    linear_solve(BoundaryKind::Scalar, p, div, 1.0, 6.0, n, params, scratch);

    let half_n = 0.5 * n as f32;
    for j in 1..n - 1 {
        for i in 1..n - 1 {
            let gx = cell!(p, n, [i + 1, j]) - cell!(p, n, [i - 1, j]);
            let gy = cell!(p, n, [i, j + 1]) - cell!(p, n, [i, j - 1]);
            cell!(vx, n, [i, j] = cell!(vx, n, [i, j]) - half_n * gx);
            cell!(vy, n, [i, j] = cell!(vy, n, [i, j]) - half_n * gy);
        }
    }
    fix_boundary(BoundaryKind::VelocityX, vx, n);
    fix_boundary(BoundaryKind::VelocityY, vy, n);
}
