//! Best-fit rigid transform between corresponding point sets.
//!
//! Solves the orthogonal Procrustes problem: given the 3×3
//! cross-covariance matrix `H = Σ (qᵢ − q̄)(pᵢ − p̄)ᵀ` between a rest
//! configuration `q` and a current configuration `p`, the rotation that
//! best maps rest onto current in the least-squares sense is
//! `R = V · Uᵀ` where `H = U·S·Vᵀ`.
//!
//! No reflection correction is applied: for highly degenerate point sets
//! (e.g. all points coplanar and mirrored) the result can be an improper
//! rotation with `det(R) = −1`. Callers that care can inspect the
//! determinant; the solver reports it per step.

use glam::{Mat3, Vec3};

use crate::svd3::svd3;

/// A rotation plus translation, applied as `R·p + t`.
#[derive(Debug, Clone, Copy)]
pub struct RigidTransform {
    /// Orthonormal rotation (possibly improper, see module docs).
    pub rotation: Mat3,
    /// Translation applied after rotation.
    pub translation: Vec3,
}

impl RigidTransform {
    /// Maps a point through the transform.
    #[inline]
    pub fn apply(&self, p: Vec3) -> Vec3 {
        self.rotation * p + self.translation
    }
}

/// Outer product `a · bᵀ` as a column-major 3×3 matrix.
#[inline]
pub fn outer_product(a: Vec3, b: Vec3) -> Mat3 {
    Mat3::from_cols(a * b.x, a * b.y, a * b.z)
}

/// Extracts the best-fit rotation from a cross-covariance matrix.
///
/// Accepts rank-deficient `h`: the SVD still returns orthonormal factors,
/// so the result is always orthonormal (if not unique).
pub fn best_fit_rotation(h: &Mat3) -> Mat3 {
    let f = svd3(h);
    f.v * f.u.transpose()
}
