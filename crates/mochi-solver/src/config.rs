//! Solver configuration, loadable from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use mochi_types::{constants, MochiError, MochiResult, Scalar};

/// Runtime parameters of the solver.
///
/// Every field has a default taken from [`mochi_types::constants`], so a
/// partial TOML file (or an empty one) is valid. The shape-matching
/// stiffness is intentionally not here: it is a fixed constant, not a
/// tuning knob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// Gravity vector `[gx, gy, gz]` in model units per second squared.
    pub gravity: [Scalar; 3],
    /// Fixed timestep in seconds.
    pub dt: Scalar,
    /// Worker thread count for the parallel passes.
    pub workers: usize,
    /// Uniform scale applied to mesh vertices at initialization.
    pub model_scale: Scalar,
    /// Vertical offset applied to mesh vertices at initialization.
    pub drop_height: Scalar,
    /// Whether the ground-plane collision pass runs.
    pub ground_collision: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            gravity: constants::GRAVITY,
            dt: constants::DEFAULT_DT,
            workers: constants::DEFAULT_WORKERS,
            model_scale: constants::MODEL_SCALE,
            drop_height: constants::DROP_HEIGHT,
            ground_collision: true,
        }
    }
}

impl SolverConfig {
    /// Reads and validates a configuration from a TOML file.
    pub fn load(path: &Path) -> MochiResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&text).map_err(|e| MochiError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every parameter is usable.
    pub fn validate(&self) -> MochiResult<()> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(MochiError::InvalidConfig(format!(
                "dt must be positive and finite, got {}",
                self.dt
            )));
        }
        if self.workers == 0 {
            return Err(MochiError::InvalidConfig(
                "workers must be at least 1".into(),
            ));
        }
        if self.gravity.iter().any(|g| !g.is_finite()) {
            return Err(MochiError::InvalidConfig(format!(
                "gravity must be finite, got {:?}",
                self.gravity
            )));
        }
        if !self.model_scale.is_finite() || self.model_scale <= 0.0 {
            return Err(MochiError::InvalidConfig(format!(
                "model_scale must be positive and finite, got {}",
                self.model_scale
            )));
        }
        if !self.drop_height.is_finite() {
            return Err(MochiError::InvalidConfig(format!(
                "drop_height must be finite, got {}",
                self.drop_height
            )));
        }
        Ok(())
    }
}
