//! Closed-form 3×3 singular value decomposition.
//!
//! Factors `A = U · diag(σ) · Vᵀ` with orthonormal `U`, `V` and singular
//! values `σ₁ ≥ σ₂ ≥ σ₃ ≥ 0`. The scheme follows McAdams, Selle, Tamstorf,
//! Teran, and Sifakis (2011), "Computing the Singular Value Decomposition
//! of 3x3 matrices with minimal branching and elementary floating point
//! operations" (UW-Madison TR1690):
//!
//! 1. Jacobi eigenanalysis of `AᵀA`, accumulated as a quaternion → `V`
//! 2. Sort the columns of `B = A·V` by length
//! 3. Givens QR of `B` → `U` and the singular values
//!
//! Rank-deficient input is fine: both factors stay orthonormal, the
//! trailing singular values come out (numerically) zero.

use glam::{Mat3, Quat, Vec3};

// Cutoff from the paper: beyond this ratio the approximate Givens angle is
// replaced by the fixed π/8 rotation.
const JACOBI_GAMMA: f32 = 5.828_427_3;
const COS_PI_8: f32 = 0.923_879_5;
const SIN_PI_8: f32 = 0.382_683_43;
const TINY: f32 = 1.0e-6;
const JACOBI_SWEEPS: usize = 4;

/// Result of a 3×3 singular value decomposition.
#[derive(Debug, Clone, Copy)]
pub struct Svd3 {
    /// Left singular vectors (orthonormal columns).
    pub u: Mat3,
    /// Singular values, descending and non-negative.
    pub sigma: Vec3,
    /// Right singular vectors (orthonormal columns).
    pub v: Mat3,
}

impl Svd3 {
    /// Reassembles `U · diag(σ) · Vᵀ`.
    pub fn reconstruct(&self) -> Mat3 {
        self.u * Mat3::from_diagonal(self.sigma) * self.v.transpose()
    }
}

/// Computes the SVD of `a`.
pub fn svd3(a: &Mat3) -> Svd3 {
    let mut v = Mat3::from_quat(jacobi_eigenvectors(a.transpose() * *a));
    let mut b = *a * v;
    sort_columns(&mut b, &mut v);

    let (mut u, r) = givens_qr(b);
    let mut sigma = Vec3::new(r.x_axis.x, r.y_axis.y, r.z_axis.z);

    // Fold negative diagonal entries of R into U so σ is non-negative.
    for c in 0..3 {
        if sigma[c] < 0.0 {
            sigma[c] = -sigma[c];
            *column_mut(&mut u, c) = -*column_mut(&mut u, c);
        }
    }

    Svd3 { u, sigma, v }
}

fn column_mut(m: &mut Mat3, c: usize) -> &mut Vec3 {
    match c {
        0 => &mut m.x_axis,
        1 => &mut m.y_axis,
        _ => &mut m.z_axis,
    }
}

/// Approximate half-angle Givens pair (cosine, sine) annihilating the
/// off-diagonal element `apq` of a symmetric matrix.
fn half_angle(app: f32, aqq: f32, apq: f32) -> (f32, f32) {
    let ch = 2.0 * (app - aqq);
    let sh = apq;
    if JACOBI_GAMMA * sh * sh < ch * ch {
        let w = (ch * ch + sh * sh).sqrt().recip();
        (w * ch, w * sh)
    } else {
        (COS_PI_8, SIN_PI_8)
    }
}

/// One cyclic pivot: returns the step quaternion for pivot pair
/// (0,1) / (1,2) / (0,2), rotating about z / x / y respectively.
fn pivot_rotation(s: &Mat3, pivot: usize) -> Quat {
    match pivot {
        0 => {
            let (ch, sh) = half_angle(s.x_axis.x, s.y_axis.y, s.x_axis.y);
            Quat::from_xyzw(0.0, 0.0, sh, ch)
        }
        1 => {
            let (ch, sh) = half_angle(s.y_axis.y, s.z_axis.z, s.y_axis.z);
            Quat::from_xyzw(sh, 0.0, 0.0, ch)
        }
        _ => {
            let (ch, sh) = half_angle(s.x_axis.x, s.z_axis.z, s.x_axis.z);
            Quat::from_xyzw(0.0, sh, 0.0, ch)
        }
    }
}

/// Jacobi eigenanalysis of the symmetric matrix `s`, returning the
/// accumulated eigenvector rotation as a quaternion.
fn jacobi_eigenvectors(mut s: Mat3) -> Quat {
    let mut q = Quat::IDENTITY;
    for _ in 0..JACOBI_SWEEPS {
        for pivot in 0..3 {
            let g = pivot_rotation(&s, pivot);
            let r = Mat3::from_quat(g);
            s = r.transpose() * s * r;
            q = q * g;
        }
        let off = s.x_axis.y * s.x_axis.y + s.x_axis.z * s.x_axis.z + s.y_axis.z * s.y_axis.z;
        if off < TINY {
            break;
        }
    }
    q.normalize()
}

/// Swaps columns `ci` and `cj` of both matrices, negating the column that
/// lands in the later slot so the accumulated `v` stays a rotation.
fn swap_negate(b: &mut Mat3, v: &mut Mat3, ci: usize, cj: usize) {
    for m in [b, v] {
        let tmp = *column_mut(m, ci);
        *column_mut(m, ci) = *column_mut(m, cj);
        *column_mut(m, cj) = -tmp;
    }
}

/// Sorts the columns of `b` by descending length, permuting `v` the same
/// way (comparison network over the three column pairs).
fn sort_columns(b: &mut Mat3, v: &mut Mat3) {
    if b.x_axis.length_squared() < b.y_axis.length_squared() {
        swap_negate(b, v, 0, 1);
    }
    if b.x_axis.length_squared() < b.z_axis.length_squared() {
        swap_negate(b, v, 0, 2);
    }
    if b.y_axis.length_squared() < b.z_axis.length_squared() {
        swap_negate(b, v, 1, 2);
    }
}

/// Full-angle Givens pair (cos θ, sin θ) rotating `(a, b)` onto the axis.
fn qr_rotation(a: f32, b: f32) -> (f32, f32) {
    let rho = (a * a + b * b).sqrt();
    let mut ch = a.abs() + rho.max(TINY);
    let mut sh = if rho > TINY { b } else { 0.0 };
    if a < 0.0 {
        std::mem::swap(&mut ch, &mut sh);
    }
    let w = (ch * ch + sh * sh).sqrt().recip();
    let (ch, sh) = (ch * w, sh * w);
    (1.0 - 2.0 * sh * sh, 2.0 * ch * sh)
}

fn rotate_rows(m: &mut Mat3, r0: usize, r1: usize, c: f32, s: f32) {
    for col in [&mut m.x_axis, &mut m.y_axis, &mut m.z_axis] {
        let a = col[r0];
        let b = col[r1];
        col[r0] = c * a + s * b;
        col[r1] = -s * a + c * b;
    }
}

/// QR decomposition of `b` via three Givens rotations.
/// Returns `(Q, R)` with `Q` orthonormal and `R` upper triangular.
fn givens_qr(mut b: Mat3) -> (Mat3, Mat3) {
    let (c1, s1) = qr_rotation(b.x_axis.x, b.x_axis.y);
    rotate_rows(&mut b, 0, 1, c1, s1);
    let (c2, s2) = qr_rotation(b.x_axis.x, b.x_axis.z);
    rotate_rows(&mut b, 0, 2, c2, s2);
    let (c3, s3) = qr_rotation(b.y_axis.y, b.y_axis.z);
    rotate_rows(&mut b, 1, 2, c3, s3);

    let q1 = Mat3::from_cols(Vec3::new(c1, s1, 0.0), Vec3::new(-s1, c1, 0.0), Vec3::Z);
    let q2 = Mat3::from_cols(Vec3::new(c2, 0.0, s2), Vec3::Y, Vec3::new(-s2, 0.0, c2));
    let q3 = Mat3::from_cols(Vec3::X, Vec3::new(0.0, c3, s3), Vec3::new(0.0, -s3, c3));

    (q1 * q2 * q3, b)
}
