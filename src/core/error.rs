use std::fmt;

/// Everything that can go wrong outside the numeric kernel.
///
/// `step()` itself has no failure modes; errors come from construction,
/// configuration, and cell coordinates supplied by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Edge length below 3 (no interior ring inside the walls)
    InvalidSize(usize),
    /// Time step not finite or not positive
    InvalidTimeStep(f32),
    /// Relaxation needs at least one sweep
    InvalidIterations(u32),
    /// Cell coordinate outside `[0, size)`
    OutOfBounds { x: i32, y: i32, size: usize },
    /// Malformed settings document
    Settings(String),
}

impl fmt::Display for FluidError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FluidError::InvalidSize(size) => {
                write!(f, "grid size must be at least 3, got {}", size)
            }
            FluidError::InvalidTimeStep(dt) => {
                write!(f, "time step must be finite and > 0, got {}", dt)
            }
            FluidError::InvalidIterations(n) => {
                write!(f, "relaxation iterations must be >= 1, got {}", n)
            }
            FluidError::OutOfBounds { x, y, size } => {
                write!(f, "cell ({}, {}) is outside the {}x{} grid", x, y, size, size)
            }
            FluidError::Settings(msg) => write!(f, "invalid settings: {}", msg),
        }
    }
}

impl std::error::Error for FluidError {}

impl From<serde_json::Error> for FluidError {
    fn from(err: serde_json::Error) -> Self {
        FluidError::Settings(err.to_string())
    }
}
