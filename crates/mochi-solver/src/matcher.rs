//! The top-level solver driver.

use std::time::Instant;

use glam::Vec3;

use mochi_dispatch::WorkerPool;
use mochi_mesh::MeshSource;
use mochi_telemetry::{EventBus, EventKind, SimulationEvent};
use mochi_types::constants::GROUND_HEIGHT;
use mochi_types::{MochiError, MochiResult};

use crate::alignment::solve_alignment;
use crate::config::SolverConfig;
use crate::passes::{collision_pass, correction_pass, integration_pass};
use crate::state::ParticleState;

/// Per-step diagnostics returned by [`ShapeMatcher::step`].
#[derive(Debug, Clone, Copy)]
pub struct StepReport {
    /// Wall-clock duration of the whole step, in seconds.
    pub wall_time: f64,
    /// Determinant of the best-fit rotation. A value near −1 marks an
    /// improper rotation from a degenerate cloud.
    pub rotation_det: f32,
    /// Number of vertices the collision pass clamped to the ground.
    pub clamped: u32,
}

/// Owns the simulation state, the worker pool, and the per-step pipeline.
///
/// Construct one with a validated [`SolverConfig`], feed it a mesh through
/// [`Self::initialize`], then call [`Self::step`] once per fixed timestep.
pub struct ShapeMatcher {
    state: ParticleState,
    pool: WorkerPool,
    config: SolverConfig,
    bus: Option<EventBus>,
    frame: u32,
}

impl ShapeMatcher {
    /// Creates a solver with no vertices loaded yet.
    pub fn new(config: SolverConfig) -> MochiResult<Self> {
        config.validate()?;
        let pool = WorkerPool::new(config.workers)?;
        Ok(Self {
            state: ParticleState::empty(),
            pool,
            config,
            bus: None,
            frame: 0,
        })
    }

    /// Attaches a telemetry bus. Events are flushed once per step.
    pub fn with_bus(mut self, bus: EventBus) -> Self {
        self.bus = Some(bus);
        self
    }

    /// Rebuilds the simulation state from a mesh source and resets the
    /// frame counter.
    ///
    /// On failure the previous state is left untouched.
    pub fn initialize(&mut self, source: &dyn MeshSource) -> MochiResult<()> {
        let state = ParticleState::from_source(
            source,
            self.config.model_scale,
            self.config.drop_height,
        )?;
        let vertex_count = state.len();
        self.state = state;
        self.frame = 0;
        self.emit(EventKind::Reset { vertex_count });
        self.flush();
        Ok(())
    }

    /// Advances the simulation by one fixed timestep.
    ///
    /// Stage order is alignment, correction, collision, integration; each
    /// stage completes fully before the next starts.
    pub fn step(&mut self) -> MochiResult<StepReport> {
        if self.state.is_empty() {
            return Err(MochiError::EmptyConfiguration);
        }
        let start = Instant::now();

        let xform = solve_alignment(&self.state)?;
        let rotation_det = xform.rotation.determinant();
        self.emit(EventKind::Alignment { rotation_det });

        correction_pass(&self.pool, &self.state.rest, &mut self.state.curr, &xform);

        let clamped = if self.config.ground_collision {
            let clamped = collision_pass(&self.pool, &mut self.state.curr, GROUND_HEIGHT);
            if clamped > 0 {
                self.emit(EventKind::GroundContact { clamped });
            }
            clamped
        } else {
            0
        };

        integration_pass(
            &self.pool,
            &mut self.state.curr,
            &mut self.state.prev,
            Vec3::from(self.config.gravity),
            self.config.dt,
        );

        let wall_time = start.elapsed().as_secs_f64();
        self.emit(EventKind::StepEnd { wall_time });
        self.flush();
        self.frame += 1;

        Ok(StepReport {
            wall_time,
            rotation_det,
            clamped,
        })
    }

    /// Current vertex positions.
    pub fn positions(&self) -> &[Vec3] {
        &self.state.curr
    }

    /// Read access to the full state.
    pub fn state(&self) -> &ParticleState {
        &self.state
    }

    /// Mutable access to the state, for tests and scripted setups.
    pub fn state_mut(&mut self) -> &mut ParticleState {
        &mut self.state
    }

    /// Number of completed steps since the last initialization.
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// The active configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    fn emit(&self, kind: EventKind) {
        if let Some(bus) = &self.bus {
            bus.emit(SimulationEvent::new(self.frame, kind));
        }
    }

    fn flush(&mut self) {
        if let Some(bus) = &mut self.bus {
            bus.flush();
        }
    }
}
