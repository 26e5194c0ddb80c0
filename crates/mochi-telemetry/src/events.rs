//! Simulation event types.
//!
//! Lightweight value types tagged with a frame index. They carry just
//! enough data to monitor a run without touching solver state.

use serde::{Deserialize, Serialize};

/// An event emitted by the solver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Frame number (0-indexed).
    pub frame: u32,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventKind {
    /// State was (re)built from a mesh source.
    Reset {
        /// Number of simulated particles after initialization.
        vertex_count: usize,
    },

    /// The rigid alignment solve finished.
    Alignment {
        /// Determinant of the best-fit rotation. A value near −1 marks
        /// an improper rotation (reflection), which the solver does not
        /// correct.
        rotation_det: f32,
    },

    /// The ground collision pass clamped vertices this frame.
    GroundContact {
        /// Number of vertices clamped to the floor.
        clamped: u32,
    },

    /// A timestep completed.
    StepEnd {
        /// Wall-clock time for the whole step (seconds).
        wall_time: f64,
    },
}

impl SimulationEvent {
    /// Creates a new event for the given frame.
    pub fn new(frame: u32, kind: EventKind) -> Self {
        Self { frame, kind }
    }
}
