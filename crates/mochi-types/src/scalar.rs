//! Scalar type alias for the simulation.

/// The floating-point type used throughout the simulation.
///
/// Set to `f32` to match the math stack (`glam`). Change to `f64` for
/// double-precision validation runs.
pub type Scalar = f32;
