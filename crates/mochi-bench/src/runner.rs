//! Executes scenarios with the solver and collects metrics.

use std::time::Instant;

use glam::Vec3;

use mochi_solver::ShapeMatcher;
use mochi_types::MochiResult;

use crate::metrics::BenchmarkMetrics;
use crate::scenarios::{Scenario, ScenarioKind};

/// Runs benchmark scenarios and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Run a single scenario.
    ///
    /// Returns metrics for the completed run.
    pub fn run(scenario: &Scenario) -> MochiResult<BenchmarkMetrics> {
        let mut matcher = ShapeMatcher::new(scenario.config.clone())?;
        matcher.initialize(&scenario.mesh)?;

        let initial: Vec<Vec3> = matcher.positions().to_vec();

        let mut step_times: Vec<f64> = Vec::with_capacity(scenario.timesteps as usize);
        let mut total_clamped: u64 = 0;
        let mut min_rotation_det = f32::MAX;

        let total_start = Instant::now();
        for _ in 0..scenario.timesteps {
            let report = matcher.step()?;
            step_times.push(report.wall_time);
            total_clamped += u64::from(report.clamped);
            min_rotation_det = min_rotation_det.min(report.rotation_det);
        }
        let total_wall_time = total_start.elapsed().as_secs_f64();

        let max_displacement = initial
            .iter()
            .zip(matcher.positions())
            .map(|(a, b)| a.distance(*b))
            .fold(0.0f32, f32::max);

        let avg_step = if step_times.is_empty() {
            0.0
        } else {
            step_times.iter().sum::<f64>() / step_times.len() as f64
        };
        let min_step = step_times.iter().copied().fold(f64::MAX, f64::min);
        let max_step = step_times.iter().copied().fold(0.0, f64::max);

        Ok(BenchmarkMetrics {
            scenario: scenario.kind.name().to_string(),
            vertex_count: initial.len(),
            timesteps: scenario.timesteps,
            total_wall_time,
            avg_step_time: avg_step,
            min_step_time: min_step,
            max_step_time: max_step,
            total_clamped,
            max_displacement,
            min_rotation_det,
        })
    }

    /// Run all scenarios and return metrics for each.
    pub fn run_all() -> MochiResult<Vec<BenchmarkMetrics>> {
        let mut results = Vec::new();
        for &kind in ScenarioKind::all() {
            let scenario = Scenario::from_kind(kind);
            results.push(Self::run(&scenario)?);
        }
        Ok(results)
    }
}
