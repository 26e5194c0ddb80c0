//! Physical constants and simulation defaults.

use crate::scalar::Scalar;

/// Default gravity vector `[gx, gy, gz]`.
///
/// Deliberately much stronger than 9.81 m/s²: the solver works in model
/// units (see [`MODEL_SCALE`]) and the stock scene expects a snappy drop.
pub const GRAVITY: [Scalar; 3] = [0.0, -50.0, 0.0];

/// Default fixed simulation timestep (seconds), decoupled from frame rate.
pub const DEFAULT_DT: Scalar = 0.02;

/// Fraction of the distance to the rigid target corrected per frame.
///
/// Not configurable: 0.5 means "move halfway toward the best-fit rigid
/// pose each step", which is what gives the body its springy response.
pub const SHAPE_STIFFNESS: Scalar = 0.5;

/// Default worker count for the parallel dispatcher.
pub const DEFAULT_WORKERS: usize = 8;

/// Uniform scale applied to mesh vertices at initialization.
pub const MODEL_SCALE: Scalar = 32.0;

/// Vertical offset applied to mesh vertices at initialization, so the
/// body starts above the ground plane and falls.
pub const DROP_HEIGHT: Scalar = 20.0;

/// Height of the ground plane (Y coordinate).
pub const GROUND_HEIGHT: Scalar = 0.0;

/// Epsilon for floating-point comparisons.
pub const EPSILON: Scalar = 1.0e-6;
