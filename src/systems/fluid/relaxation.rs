//! Iterative relaxation for `x - a * Laplacian(x) = x0`
//!
//! Both diffusion and the pressure solve reduce to
//!     x[i,j] = (x0[i,j] + a * (x[i+1,j] + x[i-1,j] + x[i,j+1] + x[i,j-1])) / c
//! over the interior, repeated a fixed number of sweeps, then one boundary fix.
//!
//! - Gauss-Seidel (reference): row-major (`j` outer, `i` inner), in place,
//!   each update sees the neighbours already rewritten in the same sweep.
//! - Jacobi: each sweep reads only the previous sweep. Rows are independent,
//!   so they run on the rayon pool with the `parallel` feature. Different
//!   numerics from Gauss-Seidel; no bit parity is claimed.

use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::boundary::{fix_boundary, BoundaryKind};

/// Sweeps per solve unless configured otherwise
pub const DEFAULT_ITERATIONS: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelaxationScheme {
    #[default]
    GaussSeidel,
    Jacobi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverParams {
    pub iterations: u32,
    pub scheme: RelaxationScheme,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            scheme: RelaxationScheme::GaussSeidel,
        }
    }
}

/// Relax `x` towards the solution, then fix its boundary once.
///
/// `scratch` must have the same length as `x`; only Jacobi touches it.
#[allow(clippy::too_many_arguments)]
pub fn linear_solve(
    kind: BoundaryKind,
    x: &mut [f32],
    x0: &[f32],
    a: f32,
    c: f32,
    size: usize,
    params: &SolverParams,
    scratch: &mut [f32],
) {
    let c_recip = 1.0 / c;
    match params.scheme {
        RelaxationScheme::GaussSeidel => {
            for _ in 0..params.iterations {
                gauss_seidel_sweep(x, x0, a, c_recip, size);
            }
        }
        RelaxationScheme::Jacobi => {
            for _ in 0..params.iterations {
                scratch.copy_from_slice(x);
                jacobi_sweep(x, scratch, x0, a, c_recip, size);
            }
        }
    }
    fix_boundary(kind, x, size);
}

#[inline]
fn gauss_seidel_sweep(x: &mut [f32], x0: &[f32], a: f32, c_recip: f32, size: usize) {
    let n = size;
    for j in 1..n - 1 {
        for i in 1..n - 1 {
            let neighbours = cell!(x, n, [i + 1, j])
                + cell!(x, n, [i - 1, j])
                + cell!(x, n, [i, j + 1])
                + cell!(x, n, [i, j - 1]);
            cell!(x, n, [i, j] = (cell!(x0, n, [i, j]) + a * neighbours) * c_recip);
        }
    }
}

/// One Jacobi sweep of interior row `j`, reading only `old`
#[inline]
fn jacobi_row(
    row: &mut [f32],
    j: usize,
    old: &[f32],
    x0: &[f32],
    a: f32,
    c_recip: f32,
    size: usize,
) {
    let n = size;
    for i in 1..n - 1 {
        let neighbours = cell!(old, n, [i + 1, j])
            + cell!(old, n, [i - 1, j])
            + cell!(old, n, [i, j + 1])
            + cell!(old, n, [i, j - 1]);
        row[i] = (cell!(x0, n, [i, j]) + a * neighbours) * c_recip;
    }
}

fn jacobi_sweep(x: &mut [f32], old: &[f32], x0: &[f32], a: f32, c_recip: f32, size: usize) {
    let n = size;

    #[cfg(feature = "parallel")]
    {
        x.par_chunks_mut(n)
            .enumerate()
            .skip(1)
            .take(n - 2)
            .for_each(|(j, row)| jacobi_row(row, j, old, x0, a, c_recip, n));
    }

    #[cfg(not(feature = "parallel"))]
    {
        for (j, row) in x.chunks_mut(n).enumerate().skip(1).take(n - 2) {
            jacobi_row(row, j, old, x0, a, c_recip, n);
        }
    }
}
