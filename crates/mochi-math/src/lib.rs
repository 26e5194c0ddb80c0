//! # mochi-math
//!
//! Linear algebra primitives for the Mochi solver.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3`, `Mat3`, etc.)
//! - Closed-form 3×3 singular value decomposition
//! - Best-fit rigid transform extraction (orthogonal Procrustes)

pub mod rigid;
pub mod svd3;

pub use rigid::{best_fit_rotation, outer_product, RigidTransform};
pub use svd3::{svd3, Svd3};

// Re-export glam types as the canonical math types for Mochi.
pub use glam::{Mat3, Quat, Vec3};
