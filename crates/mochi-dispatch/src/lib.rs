//! # mochi-dispatch
//!
//! A fixed-size worker pool for data-parallel loops over index ranges.
//!
//! The one primitive is [`WorkerPool::parallel_for`]: it splits `[0, count)`
//! into contiguous chunks, runs one chunk per worker, and blocks the caller
//! until every chunk has finished. The completion barrier is part of the
//! primitive itself — callers never have to wait separately, and no two
//! pipeline stages can race on the same arrays.
//!
//! [`SliceCell`] is the companion type the simulation passes use to write
//! disjoint index ranges of a shared slice from multiple workers.

pub mod pool;
pub mod slice_cell;

pub use pool::{chunk_ranges, WorkerPool};
pub use slice_cell::SliceCell;
