//! Procedural point-cloud generators for benchmarks and testing.
//!
//! All generators are deterministic and produce a single-sub-mesh
//! [`PointMesh`] in raw model-space coordinates.

use crate::source::PointMesh;

/// Four corners of a unit square in the XY plane, Z = 0.
///
/// # Example
/// ```
/// use mochi_mesh::generators::unit_square;
/// use mochi_mesh::MeshSource;
/// let mesh = unit_square();
/// assert_eq!(mesh.total_vertex_count(), 4);
/// ```
pub fn unit_square() -> PointMesh {
    let mut mesh = PointMesh::new();
    mesh.add_submesh(&[
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
    ]);
    mesh
}

/// A regular lattice of `nx × ny × nz` points with the given spacing,
/// centered at the origin.
pub fn point_grid(nx: usize, ny: usize, nz: usize, spacing: f32) -> PointMesh {
    let mut points = Vec::with_capacity(nx * ny * nz);
    let half = |n: usize| (n.saturating_sub(1)) as f32 * spacing * 0.5;
    let (hx, hy, hz) = (half(nx), half(ny), half(nz));

    for k in 0..nz {
        for j in 0..ny {
            for i in 0..nx {
                points.push([
                    i as f32 * spacing - hx,
                    j as f32 * spacing - hy,
                    k as f32 * spacing - hz,
                ]);
            }
        }
    }

    let mut mesh = PointMesh::new();
    mesh.add_submesh(&points);
    mesh
}

/// Points on a sphere surface, stacked by latitude and longitude.
///
/// Produces `(stacks + 1) * (slices + 1)` points (seam vertices are
/// duplicated, matching the usual UV-sphere layout).
pub fn sphere_shell(radius: f32, stacks: usize, slices: usize) -> PointMesh {
    let mut points = Vec::with_capacity((stacks + 1) * (slices + 1));

    for i in 0..=stacks {
        let phi = std::f32::consts::PI * i as f32 / stacks as f32;
        let (sin_phi, cos_phi) = phi.sin_cos();

        for j in 0..=slices {
            let theta = 2.0 * std::f32::consts::PI * j as f32 / slices as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();

            points.push([
                radius * sin_phi * cos_theta,
                radius * cos_phi,
                radius * sin_phi * sin_theta,
            ]);
        }
    }

    let mut mesh = PointMesh::new();
    mesh.add_submesh(&points);
    mesh
}
