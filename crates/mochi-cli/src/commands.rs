//! CLI command implementations.

use std::path::Path;

use mochi_bench::metrics::BenchmarkMetrics;
use mochi_bench::runner::BenchmarkRunner;
use mochi_bench::scenarios::{Scenario, ScenarioKind};
use mochi_mesh::generators::point_grid;
use mochi_mesh::obj::load_obj_vertices;
use mochi_mesh::{MeshSource, PointMesh};
use mochi_solver::{ShapeMatcher, SolverConfig};
use mochi_telemetry::{EventBus, TracingSink};

/// Run a simulation and print a summary.
pub fn simulate(
    config_path: Option<&str>,
    mesh_path: Option<&str>,
    frames: u32,
    output_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Mochi Simulation");
    println!("────────────────");

    let config = match config_path {
        Some(path) => SolverConfig::load(Path::new(path))?,
        None => SolverConfig::default(),
    };
    println!("Config:   {}", config_path.unwrap_or("<defaults>"));

    let mesh: PointMesh = match mesh_path {
        Some(path) => load_obj_vertices(Path::new(path))?,
        None => point_grid(8, 8, 8, 0.1),
    };
    println!("Mesh:     {} ({} verts)", mesh_path.unwrap_or("<lattice>"), mesh.total_vertex_count());
    println!("Frames:   {frames}");
    println!();

    let mut bus = EventBus::new();
    bus.add_sink(Box::new(TracingSink));

    let mut matcher = ShapeMatcher::new(config)?.with_bus(bus);
    matcher.initialize(&mesh)?;

    let mut total_clamped: u64 = 0;
    let mut total_wall: f64 = 0.0;
    let mut min_det = f32::MAX;
    for _ in 0..frames {
        let report = matcher.step()?;
        total_clamped += u64::from(report.clamped);
        total_wall += report.wall_time;
        min_det = min_det.min(report.rotation_det);
    }

    let min_y = matcher
        .positions()
        .iter()
        .map(|p| p.y)
        .fold(f32::INFINITY, f32::min);

    println!("Wall time:      {total_wall:.3}s");
    println!("Ground clamps:  {total_clamped}");
    println!("Min rot det:    {min_det:.4}");
    println!("Lowest vertex:  {min_y:.4}");

    if let Some(path) = output_path {
        let positions: Vec<[f32; 3]> = matcher.positions().iter().map(|p| p.to_array()).collect();
        std::fs::write(path, serde_json::to_string_pretty(&positions)?)?;
        println!("Positions written to: {path}");
    }

    Ok(())
}

/// Run the benchmark suite.
pub fn benchmark(
    scenario_name: &str,
    output_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Mochi Benchmark Suite");
    println!("─────────────────────");
    println!();

    let scenarios: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        match ScenarioKind::parse(scenario_name) {
            Some(kind) => vec![kind],
            None => {
                eprintln!("Unknown scenario: {scenario_name}");
                eprintln!("Available: cube_drop, dense_lattice, shell_bounce, all");
                return Err("Unknown scenario".into());
            }
        }
    };

    let mut all_metrics = Vec::new();
    for &kind in &scenarios {
        let scenario = Scenario::from_kind(kind);
        println!(
            "Running: {} ({} verts, {} steps)",
            kind.name(),
            scenario.mesh.total_vertex_count(),
            scenario.timesteps,
        );

        let metrics =
            BenchmarkRunner::run(&scenario).map_err(|e| format!("Benchmark failed: {e}"))?;

        println!("  Wall time:     {:.3}s", metrics.total_wall_time);
        println!("  Avg step:      {:.3}ms", metrics.avg_step_time * 1000.0);
        println!("  Ground clamps: {}", metrics.total_clamped);
        println!("  Max displace:  {:.4}", metrics.max_displacement);
        println!();

        all_metrics.push(metrics);
    }

    if let Some(path) = output_path {
        let csv = BenchmarkMetrics::to_csv(&all_metrics);
        std::fs::write(path, &csv)?;
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        println!("{}", BenchmarkMetrics::to_csv(&all_metrics));
    }

    Ok(())
}

/// Validate a config or mesh file.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Mochi Validator");
    println!("───────────────");
    println!();

    if path.ends_with(".toml") {
        println!("Validating config: {path}");
        let config = SolverConfig::load(Path::new(path))?;
        println!("Config is valid:");
        println!("  dt:       {}", config.dt);
        println!("  workers:  {}", config.workers);
        println!("  gravity:  {:?}", config.gravity);
    } else if path.ends_with(".obj") {
        println!("Validating mesh: {path}");
        let mesh = load_obj_vertices(Path::new(path))?;
        println!("Mesh is valid:");
        println!("  sub-meshes: {}", mesh.submesh_count());
        println!("  vertices:   {}", mesh.total_vertex_count());
    } else {
        return Err(format!("Unsupported file type: {path} (expected .toml or .obj)").into());
    }

    Ok(())
}
