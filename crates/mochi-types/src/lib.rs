//! # mochi-types
//!
//! Shared error types, physical constants, and the scalar alias for the
//! Mochi shape-matching solver.
//!
//! This crate has zero domain logic — it defines the vocabulary that all
//! other Mochi crates share.

pub mod constants;
pub mod error;
pub mod scalar;

pub use error::{MochiError, MochiResult};
pub use scalar::Scalar;
