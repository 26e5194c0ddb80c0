//! Data collected during a benchmark run.

use serde::{Deserialize, Serialize};

/// Metrics collected from one benchmark scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    /// Scenario name.
    pub scenario: String,
    /// Vertex count.
    pub vertex_count: usize,
    /// Number of timesteps executed.
    pub timesteps: u32,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Average wall-clock time per timestep (seconds).
    pub avg_step_time: f64,
    /// Minimum step time.
    pub min_step_time: f64,
    /// Maximum step time.
    pub max_step_time: f64,
    /// Total ground-plane clamps across the run.
    pub total_clamped: u64,
    /// Maximum vertex displacement from the initial positions.
    pub max_displacement: f32,
    /// Lowest rotation determinant seen; values near −1 mark frames where
    /// the alignment produced an improper rotation.
    pub min_rotation_det: f32,
}

impl BenchmarkMetrics {
    /// Format as a CSV header row.
    pub fn to_csv_header() -> String {
        "scenario,vertex_count,timesteps,total_wall_time_s,avg_step_ms,min_step_ms,max_step_ms,total_clamped,max_displacement,min_rotation_det"
            .to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{:.6},{:.4},{:.4},{:.4},{},{:.6},{:.4}",
            self.scenario,
            self.vertex_count,
            self.timesteps,
            self.total_wall_time,
            self.avg_step_time * 1000.0,
            self.min_step_time * 1000.0,
            self.max_step_time * 1000.0,
            self.total_clamped,
            self.max_displacement,
            self.min_rotation_det,
        )
    }

    /// Format multiple metrics as a complete CSV string.
    pub fn to_csv(metrics: &[BenchmarkMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
