//! Error types for the checked entry points. The per-frame functions never
//! return errors; see `trajectory` and `steering`.

use thiserror::Error;

/// Invalid trajectory shape passed to [`crate::TrajectoryView::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TrajectoryError {
    #[error("trajectory has no samples")]
    Empty,
    #[error("time horizon must be finite and >= 0, got {0}")]
    InvalidHorizon(f32),
    #[error("trajectory has {actual} samples, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DebugNameError {
    #[error("debug name is {len} bytes, capacity is {capacity}")]
    TooLong { len: usize, capacity: usize },
}

/// Errors produced while loading stored trajectory JSON.
#[derive(Debug, Error)]
pub enum StoredTrajectoryError {
    #[error("trajectory json parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("sample {index} has a zero-length rotation")]
    DegenerateRotation { index: usize },
    #[error("sample {index} has a non-finite component")]
    NonFinite { index: usize },
    #[error(transparent)]
    Shape(#[from] TrajectoryError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config json parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be finite and >= 0, got {value}")]
    OutOfRange { field: &'static str, value: f32 },
    #[error("trajectory sample_count must be >= 1")]
    NoSamples,
}
