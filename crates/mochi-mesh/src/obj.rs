//! Minimal Wavefront OBJ vertex reader.
//!
//! Reads only what the solver needs: `v x y z` position records, split
//! into sub-meshes at `o`/`g` markers. Faces, normals, UVs, and materials
//! are ignored — the solver simulates raw point clouds.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use mochi_types::{MochiError, MochiResult};

use crate::source::PointMesh;

/// Loads vertex positions from an OBJ file.
///
/// Returns [`MochiError::MeshSourceUnavailable`] if the file contains no
/// vertices, and [`MochiError::Parse`] on malformed `v` records.
pub fn load_obj_vertices(path: &Path) -> MochiResult<PointMesh> {
    let file = File::open(path)?;
    parse_obj_vertices(BufReader::new(file))
}

fn parse_obj_vertices<R: BufRead>(reader: R) -> MochiResult<PointMesh> {
    let mut mesh = PointMesh::new();
    let mut open_submesh = false;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();

        if trimmed.starts_with("o ") || trimmed.starts_with("g ") {
            // Only start a new sub-mesh if the previous one has content;
            // some exporters emit several markers back to back.
            if open_submesh {
                mesh.begin_submesh();
            }
            continue;
        }

        let Some(rest) = trimmed.strip_prefix("v ") else {
            continue;
        };

        let mut coords = rest.split_whitespace().map(|t| {
            t.parse::<f32>().map_err(|_| {
                MochiError::Parse(format!("bad vertex component {t:?} on line {}", line_no + 1))
            })
        });

        let mut next = |axis: &str| {
            coords.next().unwrap_or_else(|| {
                Err(MochiError::Parse(format!(
                    "missing {axis} component on line {}",
                    line_no + 1
                )))
            })
        };

        let x = next("x")?;
        let y = next("y")?;
        let z = next("z")?;
        mesh.push_vertex(x, y, z);
        open_submesh = true;
    }

    if mesh.is_empty() {
        return Err(MochiError::MeshSourceUnavailable(
            "OBJ file contains no vertices".into(),
        ));
    }
    Ok(mesh)
}
