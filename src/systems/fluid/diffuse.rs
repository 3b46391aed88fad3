use super::boundary::BoundaryKind;
use super::relaxation::{linear_solve, SolverParams};

/// Implicit diffusion of `source` into `target`.
///
/// Solves `target - a * Laplacian(target) = source` with
/// `a = dt * rate * (size - 2)^2`, `c = 1 + 6a`. Stable for any `dt`.
/// `target`'s current contents seed the relaxation.
#[allow(clippy::too_many_arguments)]
pub fn diffuse(
    kind: BoundaryKind,
    target: &mut [f32],
    source: &[f32],
    rate: f32,
    dt: f32,
    size: usize,
    params: &SolverParams,
    scratch: &mut [f32],
) {
    let interior = (size - 2) as f32;
    let a = dt * rate * interior * interior;
    linear_solve(kind, target, source, a, 1.0 + 6.0 * a, size, params, scratch);
}
