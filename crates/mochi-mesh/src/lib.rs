//! # mochi-mesh
//!
//! Mesh sources for the Mochi solver.
//!
//! The solver consumes vertices through the [`MeshSource`] trait, which
//! models an immutable, sub-mesh-structured vertex supply. [`PointMesh`]
//! is the in-memory SoA implementation; [`generators`] builds procedural
//! test shapes and [`obj`] reads vertex records from Wavefront OBJ files.

pub mod generators;
pub mod obj;
pub mod source;

pub use source::{MeshSource, PointMesh};
