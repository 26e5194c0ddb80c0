//! Per-vertex simulation state.

use glam::Vec3;

use mochi_mesh::MeshSource;
use mochi_types::{MochiError, MochiResult, Scalar};

/// Rest, current, and previous positions of every simulated vertex.
///
/// All three arrays have the same length and share one index space; the
/// rest positions and their centroid are frozen at initialization.
#[derive(Debug, Clone, Default)]
pub struct ParticleState {
    /// Undeformed reference positions.
    pub rest: Vec<Vec3>,
    /// Positions at the current timestep.
    pub curr: Vec<Vec3>,
    /// Positions at the previous timestep.
    pub prev: Vec<Vec3>,
    rest_centroid: Vec3,
}

impl ParticleState {
    /// A state with no vertices. Stepping it is an error.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds state from a mesh source: every vertex is scaled by `scale`,
    /// lifted by `lift` along Y, and starts at rest (`curr == prev`).
    ///
    /// Vertices are taken in sub-mesh order, so the same source always
    /// produces the same index space.
    pub fn from_source(
        source: &dyn MeshSource,
        scale: Scalar,
        lift: Scalar,
    ) -> MochiResult<Self> {
        let total = source.total_vertex_count();
        if total == 0 {
            return Err(MochiError::MeshSourceUnavailable(
                "mesh source has no vertices".into(),
            ));
        }

        let mut rest = Vec::with_capacity(total);
        for s in 0..source.submesh_count() {
            for i in 0..source.vertex_count(s) {
                let [x, y, z] = source.position(s, i);
                let mut p = Vec3::new(x, y, z) * scale;
                p.y += lift;
                rest.push(p);
            }
        }

        let rest_centroid = centroid(&rest);
        Ok(Self {
            curr: rest.clone(),
            prev: rest.clone(),
            rest,
            rest_centroid,
        })
    }

    /// Number of simulated vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.curr.len()
    }

    /// True if the state holds no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.curr.is_empty()
    }

    /// Centroid of the rest positions, frozen at initialization.
    #[inline]
    pub fn rest_centroid(&self) -> Vec3 {
        self.rest_centroid
    }

    /// Mean of the current positions.
    pub fn current_centroid(&self) -> MochiResult<Vec3> {
        if self.is_empty() {
            return Err(MochiError::EmptyConfiguration);
        }
        Ok(centroid(&self.curr))
    }
}

fn centroid(points: &[Vec3]) -> Vec3 {
    points.iter().copied().sum::<Vec3>() / points.len() as Scalar
}
