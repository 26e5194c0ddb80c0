//! Benchmark scenarios: procedural mesh + config for each test case.
//!
//! Three canonical scenarios for regression testing:
//! 1. **Cube drop** — a small point lattice dropped onto the ground
//! 2. **Dense lattice** — a larger lattice to stress the parallel passes
//! 3. **Shell bounce** — a hollow sphere shell, the degenerate-thin case

use serde::{Deserialize, Serialize};

use mochi_mesh::generators::{point_grid, sphere_shell};
use mochi_mesh::PointMesh;
use mochi_solver::SolverConfig;

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    /// Small 8×8×8 lattice dropped onto the ground.
    CubeDrop,
    /// 24×24×24 lattice, sized to make the parallel passes dominate.
    DenseLattice,
    /// Hollow sphere shell; its surface-only cloud exercises the
    /// near-degenerate alignment path.
    ShellBounce,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::CubeDrop,
            ScenarioKind::DenseLattice,
            ScenarioKind::ShellBounce,
        ]
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::CubeDrop => "cube_drop",
            ScenarioKind::DenseLattice => "dense_lattice",
            ScenarioKind::ShellBounce => "shell_bounce",
        }
    }

    /// Parses a scenario name as printed by [`Self::name`].
    pub fn parse(name: &str) -> Option<ScenarioKind> {
        Self::all().iter().copied().find(|k| k.name() == name)
    }
}

/// A fully specified benchmark scenario.
pub struct Scenario {
    /// Scenario type.
    pub kind: ScenarioKind,
    /// The point cloud to simulate.
    pub mesh: PointMesh,
    /// Solver configuration.
    pub config: SolverConfig,
    /// Number of timesteps to simulate.
    pub timesteps: u32,
}

impl Scenario {
    /// Builds the scenario for a kind.
    pub fn from_kind(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::CubeDrop => Self::cube_drop(),
            ScenarioKind::DenseLattice => Self::dense_lattice(),
            ScenarioKind::ShellBounce => Self::shell_bounce(),
        }
    }

    /// An 8×8×8 lattice falling for four simulated seconds.
    pub fn cube_drop() -> Self {
        Self {
            kind: ScenarioKind::CubeDrop,
            mesh: point_grid(8, 8, 8, 0.1),
            config: SolverConfig {
                model_scale: 4.0,
                drop_height: 10.0,
                ..SolverConfig::default()
            },
            timesteps: 200,
        }
    }

    /// A 24×24×24 lattice, ~14k vertices.
    pub fn dense_lattice() -> Self {
        Self {
            kind: ScenarioKind::DenseLattice,
            mesh: point_grid(24, 24, 24, 0.05),
            config: SolverConfig {
                model_scale: 8.0,
                drop_height: 15.0,
                ..SolverConfig::default()
            },
            timesteps: 200,
        }
    }

    /// A hollow sphere shell dropped from the stock height.
    pub fn shell_bounce() -> Self {
        Self {
            kind: ScenarioKind::ShellBounce,
            mesh: sphere_shell(0.5, 24, 48),
            config: SolverConfig::default(),
            timesteps: 300,
        }
    }
}
