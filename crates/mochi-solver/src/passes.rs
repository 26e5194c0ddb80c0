//! Data-parallel per-vertex passes.
//!
//! Each pass fans the vertex range out over the worker pool. The pool
//! hands every worker a distinct contiguous chunk, so the `SliceCell`
//! writes below touch disjoint indices.

use std::sync::atomic::{AtomicU32, Ordering};

use glam::Vec3;

use mochi_dispatch::{SliceCell, WorkerPool};
use mochi_math::RigidTransform;
use mochi_types::constants::SHAPE_STIFFNESS;
use mochi_types::Scalar;

/// Pulls each vertex a fixed fraction of the way toward its rigid target
/// `R·rest + t`.
pub fn correction_pass(
    pool: &WorkerPool,
    rest: &[Vec3],
    curr: &mut [Vec3],
    xform: &RigidTransform,
) {
    debug_assert_eq!(rest.len(), curr.len());
    let cell = SliceCell::new(curr);
    pool.parallel_for(rest.len(), |begin, end| {
        for i in begin..end {
            // SAFETY: chunks are disjoint, no other worker touches index i.
            let p = unsafe { cell.get_mut(i) };
            let target = xform.apply(rest[i]);
            *p += (target - *p) * SHAPE_STIFFNESS;
        }
    });
}

/// Clamps vertices below the ground plane onto it and returns how many
/// were moved.
pub fn collision_pass(pool: &WorkerPool, curr: &mut [Vec3], ground: Scalar) -> u32 {
    let clamped = AtomicU32::new(0);
    let cell = SliceCell::new(curr);
    pool.parallel_for(cell.len(), |begin, end| {
        let mut local = 0;
        for i in begin..end {
            // SAFETY: chunks are disjoint, no other worker touches index i.
            let p = unsafe { cell.get_mut(i) };
            if p.y < ground {
                p.y = ground;
                local += 1;
            }
        }
        if local > 0 {
            clamped.fetch_add(local, Ordering::Relaxed);
        }
    });
    clamped.into_inner()
}

/// Position-Verlet step: `curr ← curr + (curr − prev) + g·dt²`, with the
/// old current positions shifted into `prev`.
pub fn integration_pass(
    pool: &WorkerPool,
    curr: &mut [Vec3],
    prev: &mut [Vec3],
    gravity: Vec3,
    dt: Scalar,
) {
    debug_assert_eq!(curr.len(), prev.len());
    let accel = gravity * dt * dt;
    let curr_cell = SliceCell::new(curr);
    let prev_cell = SliceCell::new(prev);
    pool.parallel_for(curr_cell.len(), |begin, end| {
        for i in begin..end {
            // SAFETY: chunks are disjoint, no other worker touches index i.
            let c = unsafe { curr_cell.get_mut(i) };
            let p = unsafe { prev_cell.get_mut(i) };
            let t = *c;
            *c = t + (t - *p) + accel;
            *p = t;
        }
    });
}
