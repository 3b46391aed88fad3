//! Wall reconciliation for the outer ring of a field
//!
//! Free-slip, no-penetration walls: every edge cell mirrors its interior
//! neighbour, negated for the velocity component perpendicular to that wall.
//! Corners take the average of their two adjacent edge cells.

/// Which wall law a field obeys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryKind {
    /// Density, pressure, divergence: pure reflection
    Scalar,
    /// Negated at the left/right walls
    VelocityX,
    /// Negated at the top/bottom walls
    VelocityY,
}

impl BoundaryKind {
    #[inline]
    fn sign_left_right(self) -> f32 {
        if self == BoundaryKind::VelocityX { -1.0 } else { 1.0 }
    }

    #[inline]
    fn sign_top_bottom(self) -> f32 {
        if self == BoundaryKind::VelocityY { -1.0 } else { 1.0 }
    }
}

/// Overwrite the outer ring of `field` from its interior
pub fn fix_boundary(kind: BoundaryKind, field: &mut [f32], size: usize) {
    let n = size;
    let last = n - 1;

    // Top and bottom rows
    let s = kind.sign_top_bottom();
    for i in 1..last {
        cell!(field, n, [i, 0] = s * cell!(field, n, [i, 1]));
        cell!(field, n, [i, last] = s * cell!(field, n, [i, last - 1]));
    }

    // Left and right columns
    let s = kind.sign_left_right();
    for j in 1..last {
        cell!(field, n, [0, j] = s * cell!(field, n, [1, j]));
        cell!(field, n, [last, j] = s * cell!(field, n, [last - 1, j]));
    }

    cell!(field, n, [0, 0] = 0.5 * (cell!(field, n, [1, 0]) + cell!(field, n, [0, 1])));
    cell!(
        field,
        n,
        [0, last] = 0.5 * (cell!(field, n, [1, last]) + cell!(field, n, [0, last - 1]))
    );
    cell!(
        field,
        n,
        [last, 0] = 0.5 * (cell!(field, n, [last - 1, 0]) + cell!(field, n, [last, 1]))
    );
    cell!(
        field,
        n,
        [last, last] = 0.5 * (cell!(field, n, [last - 1, last]) + cell!(field, n, [last, last - 1]))
    );
}
