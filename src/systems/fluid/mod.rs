//! Fluid System - stable-fluids operators over flat square fields
//!
//! Every operator works on `size * size` slices indexed `x + y * size` and
//! ends by reconciling the outer ring of the field it wrote:
//! - boundary:   wall laws for scalars and the two velocity components
//! - relaxation: fixed-sweep solver shared by diffusion and pressure
//! - diffuse:    implicit diffusion
//! - project:    divergence removal
//! - advect:     semi-Lagrangian transport

mod boundary;
mod relaxation;
mod diffuse;
mod project;
mod advect;

pub use boundary::{fix_boundary, BoundaryKind};
pub use relaxation::{linear_solve, RelaxationScheme, SolverParams, DEFAULT_ITERATIONS};
pub use diffuse::diffuse;
pub use project::{divergence, project};
pub use advect::advect;
