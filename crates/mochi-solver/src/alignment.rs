//! Best-fit rigid alignment of the rest shape onto the deformed cloud.

use glam::Mat3;

use mochi_math::{best_fit_rotation, outer_product, RigidTransform};
use mochi_types::MochiResult;

use crate::state::ParticleState;

/// Solves for the rigid transform that best maps the rest positions onto
/// the current positions in the least-squares sense.
///
/// The cross-covariance matrix is accumulated single-threaded in index
/// order, so the result is bit-for-bit reproducible for a given state.
/// Degenerate inputs (coplanar or collinear clouds) still yield an
/// orthonormal rotation, possibly an improper one; callers can check
/// `rotation.determinant()`.
pub fn solve_alignment(state: &ParticleState) -> MochiResult<RigidTransform> {
    let curr_centroid = state.current_centroid()?;
    let rest_centroid = state.rest_centroid();

    let mut h = Mat3::ZERO;
    for (rest, curr) in state.rest.iter().zip(&state.curr) {
        h += outer_product(*rest - rest_centroid, *curr - curr_centroid);
    }

    let rotation = best_fit_rotation(&h);
    let translation = curr_centroid - rotation * rest_centroid;
    Ok(RigidTransform {
        rotation,
        translation,
    })
}
