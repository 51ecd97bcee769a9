//! Vizij Motion Core (engine-agnostic)
//!
//! Per-frame motion-matching helpers:
//! - trajectory sampling: continuous-time lookup into a uniformly spaced
//!   window of future/past root transforms
//! - root-motion steering: speed-gated blend of the animation's root delta
//!   toward the gameplay-desired delta
//!
//! Both are stateless functions over `Copy` transforms and may be called from
//! any number of threads at once.

pub mod config;
pub mod error;
pub mod math;
pub mod query;
pub mod steering;
pub mod stored_trajectory;
pub mod trajectory;
pub mod transform;

// Re-exports for consumers (adapters)
pub use config::{Config, SteeringConfig, TrajectoryConfig};
pub use error::{ConfigError, DebugNameError, StoredTrajectoryError, TrajectoryError};
pub use math::EPSILON;
pub use query::{debug_label, DebugName, MotionMatchingQuery, NamedQuery, DEBUG_NAME_CAPACITY};
pub use steering::{speed_gate, steer_root_motion, DEFAULT_END_SPEED, DEFAULT_START_SPEED};
pub use stored_trajectory::parse_stored_trajectory_json;
pub use trajectory::{sample_rate, sample_time, sample_trajectory_at_time, Trajectory, TrajectoryView};
pub use transform::AffineTransform;
