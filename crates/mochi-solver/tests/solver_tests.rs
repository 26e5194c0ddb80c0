//! Integration tests for mochi-solver.

use std::io::Write;
use std::sync::{Arc, Mutex};

use glam::{Mat3, Vec3};

use mochi_dispatch::WorkerPool;
use mochi_mesh::generators::{point_grid, unit_square};
use mochi_mesh::PointMesh;
use mochi_solver::passes::collision_pass;
use mochi_solver::{alignment, ParticleState, ShapeMatcher, SolverConfig};
use mochi_telemetry::{EventBus, EventKind, EventSink, SimulationEvent};
use mochi_types::constants;
use mochi_types::MochiError;

/// A still config: no gravity, no ground, raw mesh coordinates.
fn still_config() -> SolverConfig {
    SolverConfig {
        gravity: [0.0, 0.0, 0.0],
        workers: 4,
        model_scale: 1.0,
        drop_height: 0.0,
        ground_collision: false,
        ..SolverConfig::default()
    }
}

fn pairwise_distances(points: &[Vec3]) -> Vec<f32> {
    let mut out = Vec::new();
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            out.push(points[i].distance(points[j]));
        }
    }
    out
}

// ─── Configuration ───

#[test]
fn default_config_matches_constants() {
    let config = SolverConfig::default();
    assert_eq!(config.gravity, constants::GRAVITY);
    assert_eq!(config.dt, constants::DEFAULT_DT);
    assert_eq!(config.workers, constants::DEFAULT_WORKERS);
    assert_eq!(config.model_scale, constants::MODEL_SCALE);
    assert_eq!(config.drop_height, constants::DROP_HEIGHT);
    assert!(config.ground_collision);
    config.validate().unwrap();
}

#[test]
fn config_roundtrips_through_toml() {
    let config = SolverConfig {
        gravity: [0.0, -9.81, 0.0],
        dt: 0.01,
        workers: 2,
        model_scale: 4.0,
        drop_height: 1.5,
        ground_collision: false,
    };
    let text = toml::to_string(&config).unwrap();
    let back: SolverConfig = toml::from_str(&text).unwrap();
    assert_eq!(back, config);
}

#[test]
fn empty_toml_yields_defaults() {
    let config: SolverConfig = toml::from_str("").unwrap();
    assert_eq!(config, SolverConfig::default());
}

#[test]
fn partial_toml_overrides_only_named_fields() {
    let config: SolverConfig = toml::from_str("dt = 0.005\nworkers = 3\n").unwrap();
    assert_eq!(config.dt, 0.005);
    assert_eq!(config.workers, 3);
    assert_eq!(config.gravity, constants::GRAVITY);
}

#[test]
fn load_reads_and_validates_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "dt = 0.01\nground_collision = false").unwrap();
    let config = SolverConfig::load(file.path()).unwrap();
    assert_eq!(config.dt, 0.01);
    assert!(!config.ground_collision);
}

#[test]
fn load_rejects_malformed_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "dt = \"fast\"").unwrap();
    let err = SolverConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, MochiError::Parse(_)), "got {err:?}");
}

#[test]
fn load_reports_missing_file_as_io() {
    let err = SolverConfig::load(std::path::Path::new("/no/such/mochi.toml")).unwrap_err();
    assert!(matches!(err, MochiError::Io(_)), "got {err:?}");
}

#[test]
fn validate_rejects_bad_parameters() {
    let cases = [
        SolverConfig {
            dt: 0.0,
            ..SolverConfig::default()
        },
        SolverConfig {
            dt: f32::NAN,
            ..SolverConfig::default()
        },
        SolverConfig {
            workers: 0,
            ..SolverConfig::default()
        },
        SolverConfig {
            gravity: [0.0, f32::INFINITY, 0.0],
            ..SolverConfig::default()
        },
        SolverConfig {
            model_scale: -1.0,
            ..SolverConfig::default()
        },
    ];
    for config in cases {
        let err = config.validate().unwrap_err();
        assert!(matches!(err, MochiError::InvalidConfig(_)), "got {err:?}");
    }
}

// ─── State ───

#[test]
fn from_source_scales_then_lifts() {
    let state = ParticleState::from_source(&unit_square(), 2.0, 5.0).unwrap();
    assert_eq!(state.len(), 4);
    assert_eq!(state.curr[0], Vec3::new(0.0, 5.0, 0.0));
    assert_eq!(state.curr[2], Vec3::new(2.0, 7.0, 0.0));
    assert_eq!(state.rest, state.curr);
    assert_eq!(state.prev, state.curr);
}

#[test]
fn from_source_rejects_an_empty_mesh() {
    let err = ParticleState::from_source(&PointMesh::new(), 1.0, 0.0).unwrap_err();
    assert!(matches!(err, MochiError::MeshSourceUnavailable(_)), "got {err:?}");
}

#[test]
fn from_source_is_deterministic() {
    let mesh = point_grid(3, 3, 3, 0.5);
    let a = ParticleState::from_source(&mesh, 2.0, 1.0).unwrap();
    let b = ParticleState::from_source(&mesh, 2.0, 1.0).unwrap();
    assert_eq!(a.curr, b.curr);
    assert_eq!(a.rest_centroid(), b.rest_centroid());
}

#[test]
fn centroid_is_the_mean_of_current_positions() {
    let state = ParticleState::from_source(&unit_square(), 1.0, 0.0).unwrap();
    let c = state.current_centroid().unwrap();
    assert!(c.abs_diff_eq(Vec3::new(0.5, 0.5, 0.0), 1e-6));
    assert!(state.rest_centroid().abs_diff_eq(c, 1e-6));
}

#[test]
fn empty_state_has_no_centroid() {
    let err = ParticleState::empty().current_centroid().unwrap_err();
    assert!(matches!(err, MochiError::EmptyConfiguration), "got {err:?}");
}

// ─── Alignment ───

#[test]
fn alignment_of_undeformed_state_is_identity() {
    let state = ParticleState::from_source(&point_grid(2, 2, 2, 1.0), 1.0, 3.0).unwrap();
    let xform = alignment::solve_alignment(&state).unwrap();
    assert!(xform.rotation.abs_diff_eq(Mat3::IDENTITY, 1e-4));
    assert!(xform.translation.abs_diff_eq(Vec3::ZERO, 1e-4));
}

#[test]
fn alignment_recovers_a_pure_translation() {
    let mut state = ParticleState::from_source(&point_grid(2, 2, 2, 1.0), 1.0, 0.0).unwrap();
    let offset = Vec3::new(3.0, -1.0, 0.5);
    for p in &mut state.curr {
        *p += offset;
    }
    let xform = alignment::solve_alignment(&state).unwrap();
    assert!(xform.rotation.abs_diff_eq(Mat3::IDENTITY, 1e-4));
    assert!(xform.translation.abs_diff_eq(offset, 1e-4));
}

#[test]
fn alignment_recovers_a_rigid_pose() {
    let mut state = ParticleState::from_source(&point_grid(2, 2, 2, 1.0), 1.0, 0.0).unwrap();
    let rotation = Mat3::from_rotation_z(0.7) * Mat3::from_rotation_x(-0.3);
    let translation = Vec3::new(1.0, 4.0, -2.0);
    for i in 0..state.len() {
        state.curr[i] = rotation * state.rest[i] + translation;
    }
    let xform = alignment::solve_alignment(&state).unwrap();
    assert!(xform.rotation.abs_diff_eq(rotation, 1e-3));
    assert!(xform.translation.abs_diff_eq(translation, 1e-3));
    approx::assert_abs_diff_eq!(xform.rotation.determinant(), 1.0, epsilon = 1e-3);
}

// ─── Matcher ───

#[test]
fn step_before_initialize_fails() {
    let mut matcher = ShapeMatcher::new(still_config()).unwrap();
    let err = matcher.step().unwrap_err();
    assert!(matches!(err, MochiError::EmptyConfiguration), "got {err:?}");
}

#[test]
fn new_rejects_zero_workers() {
    let config = SolverConfig {
        workers: 0,
        ..SolverConfig::default()
    };
    assert!(ShapeMatcher::new(config).is_err());
}

#[test]
fn failed_initialize_keeps_previous_state() {
    let mut matcher = ShapeMatcher::new(still_config()).unwrap();
    matcher.initialize(&unit_square()).unwrap();
    assert!(matcher.initialize(&PointMesh::new()).is_err());
    assert_eq!(matcher.positions().len(), 4);
    matcher.step().unwrap();
}

#[test]
fn free_fall_drops_by_g_dt_squared() {
    let config = SolverConfig {
        workers: 4,
        model_scale: 1.0,
        drop_height: 20.0,
        ..SolverConfig::default()
    };
    let dt = config.dt;
    let gravity = Vec3::from(config.gravity);

    let mut matcher = ShapeMatcher::new(config).unwrap();
    matcher.initialize(&unit_square()).unwrap();
    let before: Vec<Vec3> = matcher.positions().to_vec();

    let report = matcher.step().unwrap();
    assert_eq!(report.clamped, 0);
    approx::assert_abs_diff_eq!(report.rotation_det, 1.0, epsilon = 1e-3);

    let drop = gravity * dt * dt;
    for (b, a) in before.iter().zip(matcher.positions()) {
        assert!(a.abs_diff_eq(*b + drop, 1e-5), "expected {:?}, got {a:?}", *b + drop);
    }
    let dist_before = pairwise_distances(&before);
    let dist_after = pairwise_distances(matcher.positions());
    for (d0, d1) in dist_before.iter().zip(&dist_after) {
        approx::assert_abs_diff_eq!(*d0, *d1, epsilon = 1e-4);
    }
}

#[test]
fn rigid_pose_is_a_fixed_point() {
    let mut matcher = ShapeMatcher::new(still_config()).unwrap();
    matcher.initialize(&point_grid(2, 2, 2, 1.0)).unwrap();

    let rotation = Mat3::from_rotation_z(0.5);
    let translation = Vec3::new(2.0, 10.0, -1.0);
    let posed: Vec<Vec3> = matcher
        .state()
        .rest
        .iter()
        .map(|&p| rotation * p + translation)
        .collect();
    matcher.state_mut().curr = posed.clone();
    matcher.state_mut().prev = posed.clone();

    let report = matcher.step().unwrap();
    approx::assert_abs_diff_eq!(report.rotation_det, 1.0, epsilon = 1e-3);
    for (expected, actual) in posed.iter().zip(matcher.positions()) {
        assert!(actual.abs_diff_eq(*expected, 1e-3), "expected {expected:?}, got {actual:?}");
    }
}

#[test]
fn collision_pass_clamps_to_the_ground_plane() {
    let pool = WorkerPool::new(4).unwrap();
    let mut curr = vec![
        Vec3::new(0.0, -5.0, 0.0),
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::new(-1.0, -0.25, 0.0),
    ];
    let clamped = collision_pass(&pool, &mut curr, 0.0);
    assert_eq!(clamped, 2);
    assert_eq!(curr[0].y, 0.0);
    assert_eq!(curr[1], Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(curr[2].y, 0.0);
    assert!(curr.iter().all(|p| p.y >= 0.0));
}

#[test]
fn disabled_collision_lets_vertices_sink() {
    let config = SolverConfig {
        workers: 2,
        model_scale: 1.0,
        drop_height: -10.0,
        ground_collision: false,
        ..SolverConfig::default()
    };
    let mut matcher = ShapeMatcher::new(config).unwrap();
    matcher.initialize(&unit_square()).unwrap();
    let report = matcher.step().unwrap();
    assert_eq!(report.clamped, 0);
    assert!(matcher.positions().iter().all(|p| p.y < 0.0));
}

#[test]
fn long_drop_stays_finite_and_hits_the_ground() {
    let config = SolverConfig {
        workers: 4,
        model_scale: 1.0,
        drop_height: 5.0,
        ..SolverConfig::default()
    };
    let mut matcher = ShapeMatcher::new(config).unwrap();
    matcher.initialize(&point_grid(3, 3, 3, 0.5)).unwrap();

    let mut total_clamped = 0u64;
    for _ in 0..200 {
        let report = matcher.step().unwrap();
        total_clamped += u64::from(report.clamped);
        assert!(report.wall_time >= 0.0);
    }
    assert_eq!(matcher.frame(), 200);
    assert!(total_clamped > 0, "the body never reached the ground");
    assert!(matcher.positions().iter().all(|p| p.is_finite()));
}

// ─── Telemetry ───

struct SharedSink(Arc<Mutex<Vec<SimulationEvent>>>);

impl EventSink for SharedSink {
    fn handle(&mut self, event: &SimulationEvent) {
        self.0.lock().unwrap().push(event.clone());
    }

    fn name(&self) -> &str {
        "shared_sink"
    }
}

#[test]
fn steps_emit_telemetry_events() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(SharedSink(Arc::clone(&events))));

    let mut matcher = ShapeMatcher::new(still_config()).unwrap().with_bus(bus);
    matcher.initialize(&unit_square()).unwrap();
    matcher.step().unwrap();
    matcher.step().unwrap();

    let events = events.lock().unwrap();
    assert!(matches!(events[0].kind, EventKind::Reset { vertex_count: 4 }));

    let frames: Vec<u32> = events
        .iter()
        .filter(|e| matches!(e.kind, EventKind::StepEnd { .. }))
        .map(|e| e.frame)
        .collect();
    assert_eq!(frames, vec![0, 1]);
    assert!(events
        .iter()
        .any(|e| matches!(e.kind, EventKind::Alignment { .. })));
}
