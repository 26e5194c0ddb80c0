//! Error types for the Mochi solver.
//!
//! All crates return `MochiResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for the Mochi solver.
#[derive(Debug, Error)]
pub enum MochiError {
    /// The simulation holds zero particles at a point where a centroid or
    /// alignment solve was requested. The current frame is aborted and
    /// state is left unchanged.
    #[error("Empty configuration: simulation holds no particles")]
    EmptyConfiguration,

    /// Initialization was requested from a missing or empty mesh source.
    /// Previous simulation state is left intact.
    #[error("Mesh source unavailable: {0}")]
    MeshSourceUnavailable(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Text decode failure (OBJ or TOML input).
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Convenience alias for `Result<T, MochiError>`.
pub type MochiResult<T> = Result<T, MochiError>;
