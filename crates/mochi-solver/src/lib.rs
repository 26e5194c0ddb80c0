//! # mochi-solver
//!
//! The Mochi shape-matching deformable body solver.
//!
//! Each fixed timestep runs four stages over the vertex arrays:
//!
//! 1. **Alignment** ([`alignment::solve_alignment`]): solve the orthogonal
//!    Procrustes problem for the rigid transform that best maps the rest
//!    shape onto the current, deformed positions.
//! 2. **Correction** ([`passes::correction_pass`]): pull every vertex a
//!    fixed fraction of the way toward its rigidly transformed rest
//!    position. This is what makes the body hold its shape.
//! 3. **Collision** ([`passes::collision_pass`]): clamp vertices below the
//!    ground plane back onto it.
//! 4. **Integration** ([`passes::integration_pass`]): position-Verlet
//!    update under gravity.
//!
//! [`ShapeMatcher`] owns the state, the worker pool, and the stage order;
//! the per-vertex passes fan out over the pool and return only once every
//! chunk has finished, so stages never overlap.

pub mod alignment;
pub mod config;
pub mod matcher;
pub mod passes;
pub mod state;

pub use config::SolverConfig;
pub use matcher::{ShapeMatcher, StepReport};
pub use state::ParticleState;
