//! Zero-Cost Cell Access
//!
//! Solver inner loops index flat `size * size` fields with `x + y * size`.
//! Loop bounds already guarantee validity, so:
//!
//! In Debug mode: Normal bounds-checked access (panics with useful errors)
//! In Release mode: Unsafe unchecked access (zero overhead)
//!
//! Usage:
//! ```rust
//! use fluid_volume_engine::cell;
//!
//! let size = 4;
//! let mut field = vec![0.0f32; size * size];
//! // Write: cell!(field, size, [x, y] = value)
//! cell!(field, size, [1, 2] = 3.5);
//! // Read: cell!(field, size, [x, y])
//! assert_eq!(cell!(field, size, [1, 2]), 3.5);
//! assert_eq!(field[1 + 2 * size], 3.5);
//! ```

/// Read or write one cell of a flat square field
///
/// - Debug: Uses normal indexing with bounds checks
/// - Release: Uses get_unchecked/get_unchecked_mut
#[macro_export]
macro_rules! cell {
    // Read pattern: cell!(field, size, [x, y])
    ($field:expr, $size:expr, [$x:expr, $y:expr]) => {{
        let idx = ($x) + ($y) * ($size);
        #[cfg(debug_assertions)]
        {
            $field[idx]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$field.get_unchecked(idx) }
        }
    }};

    // Write pattern: cell!(field, size, [x, y] = value)
    ($field:expr, $size:expr, [$x:expr, $y:expr] = $val:expr) => {{
        let idx = ($x) + ($y) * ($size);
        let val = $val;
        #[cfg(debug_assertions)]
        {
            $field[idx] = val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$field.get_unchecked_mut(idx) = val; }
        }
    }};
}
