//! Integration tests for mochi-bench.

use mochi_bench::metrics::BenchmarkMetrics;
use mochi_bench::runner::BenchmarkRunner;
use mochi_bench::scenarios::{Scenario, ScenarioKind};
use mochi_mesh::MeshSource;

// ─── Scenario Tests ───

#[test]
fn cube_drop_setup() {
    let s = Scenario::cube_drop();
    assert_eq!(s.kind, ScenarioKind::CubeDrop);
    assert_eq!(s.mesh.total_vertex_count(), 512); // 8×8×8
    s.config.validate().unwrap();
}

#[test]
fn shell_bounce_setup() {
    let s = Scenario::shell_bounce();
    assert_eq!(s.kind, ScenarioKind::ShellBounce);
    assert_eq!(s.mesh.total_vertex_count(), 25 * 49);
    s.config.validate().unwrap();
}

#[test]
fn all_scenarios_are_named_and_parseable() {
    assert_eq!(ScenarioKind::all().len(), 3);
    for &kind in ScenarioKind::all() {
        assert_eq!(ScenarioKind::parse(kind.name()), Some(kind));
    }
    assert_eq!(ScenarioKind::parse("no_such_scenario"), None);
}

// ─── Runner Tests ───

#[test]
fn run_cube_drop() {
    let mut scenario = Scenario::cube_drop();
    scenario.timesteps = 5; // Very short for testing
    let metrics = BenchmarkRunner::run(&scenario).unwrap();

    assert_eq!(metrics.scenario, "cube_drop");
    assert_eq!(metrics.timesteps, 5);
    assert_eq!(metrics.vertex_count, 512);
    assert!(metrics.total_wall_time > 0.0);
    assert!(metrics.max_displacement > 0.0); // Gravity moves everything
}

#[test]
fn run_every_kind_briefly() {
    for &kind in ScenarioKind::all() {
        let mut scenario = Scenario::from_kind(kind);
        scenario.timesteps = 3;
        let metrics = BenchmarkRunner::run(&scenario).unwrap();
        assert_eq!(metrics.scenario, kind.name());
        assert!(metrics.total_wall_time >= 0.0);
        assert!(metrics.min_step_time <= metrics.max_step_time);
    }
}

// ─── Metrics Tests ───

fn sample_metrics() -> BenchmarkMetrics {
    BenchmarkMetrics {
        scenario: "test".into(),
        vertex_count: 512,
        timesteps: 100,
        total_wall_time: 1.5,
        avg_step_time: 0.015,
        min_step_time: 0.01,
        max_step_time: 0.02,
        total_clamped: 42,
        max_displacement: 0.5,
        min_rotation_det: 1.0,
    }
}

#[test]
fn metrics_csv_output() {
    let csv_row = sample_metrics().to_csv_row();
    assert!(csv_row.contains("test"));
    assert!(csv_row.contains("512"));
    assert!(csv_row.contains("42"));
}

#[test]
fn metrics_csv_multi() {
    let csv = BenchmarkMetrics::to_csv(&[sample_metrics()]);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2); // Header + 1 data row
    assert!(lines[0].contains("scenario"));
    assert_eq!(
        lines[0].split(',').count(),
        lines[1].split(',').count(),
        "header and row column counts differ"
    );
}

#[test]
fn metrics_json_round_trip() {
    let metrics = sample_metrics();
    let json = serde_json::to_string(&metrics).unwrap();
    let back: BenchmarkMetrics = serde_json::from_str(&json).unwrap();
    assert_eq!(back.scenario, metrics.scenario);
    assert_eq!(back.total_clamped, metrics.total_clamped);
    assert_eq!(back.vertex_count, metrics.vertex_count);
}
