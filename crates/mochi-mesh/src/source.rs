//! The `MeshSource` trait and the in-memory SoA point mesh.

use serde::{Deserialize, Serialize};

/// A read-only supply of vertices, organized as sub-meshes.
///
/// The source is immutable for the lifetime of one solver initialization.
/// Positions are raw, unscaled model-space coordinates; scaling and
/// placement happen inside the solver.
pub trait MeshSource {
    /// Number of sub-meshes.
    fn submesh_count(&self) -> usize;

    /// Number of vertices in sub-mesh `submesh`.
    fn vertex_count(&self, submesh: usize) -> usize;

    /// Position of vertex `index` within sub-mesh `submesh`.
    fn position(&self, submesh: usize, index: usize) -> [f32; 3];

    /// Total vertex count across all sub-meshes.
    fn total_vertex_count(&self) -> usize {
        (0..self.submesh_count()).map(|s| self.vertex_count(s)).sum()
    }
}

/// A point cloud stored in Structure-of-Arrays layout.
///
/// Each coordinate channel is contiguous (`pos_x: [x0, x1, ...]`), and
/// `offsets` records where each sub-mesh begins; `offsets` always has one
/// more entry than there are sub-meshes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointMesh {
    /// X coordinates of all vertices.
    pub pos_x: Vec<f32>,
    /// Y coordinates of all vertices.
    pub pos_y: Vec<f32>,
    /// Z coordinates of all vertices.
    pub pos_z: Vec<f32>,
    /// Sub-mesh boundaries: sub-mesh `s` spans `offsets[s]..offsets[s+1]`.
    offsets: Vec<usize>,
}

impl PointMesh {
    /// Creates an empty mesh with no sub-meshes.
    pub fn new() -> Self {
        Self {
            pos_x: Vec::new(),
            pos_y: Vec::new(),
            pos_z: Vec::new(),
            offsets: vec![0],
        }
    }

    /// Appends a sub-mesh from a position array.
    pub fn add_submesh(&mut self, positions: &[[f32; 3]]) {
        for &[x, y, z] in positions {
            self.pos_x.push(x);
            self.pos_y.push(y);
            self.pos_z.push(z);
        }
        self.offsets.push(self.pos_x.len());
    }

    /// Starts a new, empty sub-mesh that subsequent [`Self::push_vertex`]
    /// calls append into.
    pub fn begin_submesh(&mut self) {
        self.offsets.push(self.pos_x.len());
    }

    /// Appends one vertex to the most recent sub-mesh; opens a first
    /// sub-mesh if none exists yet.
    pub fn push_vertex(&mut self, x: f32, y: f32, z: f32) {
        if self.offsets.len() == 1 {
            self.offsets.push(self.pos_x.len());
        }
        self.pos_x.push(x);
        self.pos_y.push(y);
        self.pos_z.push(z);
        *self.offsets.last_mut().unwrap() = self.pos_x.len();
    }

    /// Total vertex count.
    #[inline]
    pub fn len(&self) -> usize {
        self.pos_x.len()
    }

    /// True if the mesh holds no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos_x.is_empty()
    }
}

impl Default for PointMesh {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshSource for PointMesh {
    fn submesh_count(&self) -> usize {
        self.offsets.len() - 1
    }

    fn vertex_count(&self, submesh: usize) -> usize {
        self.offsets[submesh + 1] - self.offsets[submesh]
    }

    fn position(&self, submesh: usize, index: usize) -> [f32; 3] {
        let i = self.offsets[submesh] + index;
        [self.pos_x[i], self.pos_y[i], self.pos_z[i]]
    }

    fn total_vertex_count(&self) -> usize {
        self.len()
    }
}
