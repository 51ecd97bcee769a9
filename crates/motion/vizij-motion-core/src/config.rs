//! Configuration for trajectory layout and root-motion steering.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, TrajectoryError};
use crate::steering::{steer_root_motion, DEFAULT_END_SPEED, DEFAULT_START_SPEED};
use crate::trajectory::TrajectoryView;
use crate::transform::AffineTransform;

/// Top-level configuration. Missing fields fall back to defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub trajectory: TrajectoryConfig,
    pub steering: SteeringConfig,
}

impl Config {
    /// Parse and validate a JSON config.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Config = serde_json::from_str(s)?;
        cfg.validate()?;
        log::debug!(
            "loaded motion config: horizon={}s samples={} steering={:?}",
            cfg.trajectory.time_horizon,
            cfg.trajectory.sample_count,
            cfg.steering
        );
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.trajectory.validate()?;
        self.steering.validate()
    }
}

/// Layout of the trajectories handed to the sampler.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrajectoryConfig {
    /// Half-width of the sampled window in seconds.
    pub time_horizon: f32,
    /// Samples across the whole window, both ends included.
    pub sample_count: usize,
}

impl Default for TrajectoryConfig {
    fn default() -> Self {
        Self {
            time_horizon: 1.0,
            sample_count: 21,
        }
    }
}

impl TrajectoryConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("trajectory.time_horizon", self.time_horizon)?;
        if self.sample_count == 0 {
            return Err(ConfigError::NoSamples);
        }
        Ok(())
    }

    /// View `samples` with this layout's horizon; the length must match `sample_count`.
    pub fn view<'a>(
        &self,
        samples: &'a [AffineTransform],
    ) -> Result<TrajectoryView<'a>, TrajectoryError> {
        if samples.len() != self.sample_count {
            return Err(TrajectoryError::LengthMismatch {
                expected: self.sample_count,
                actual: samples.len(),
            });
        }
        TrajectoryView::new(samples, self.time_horizon)
    }
}

/// Steering weights and speed range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SteeringConfig {
    pub translation_weight: f32,
    pub rotation_weight: f32,
    pub start_speed: f32,
    pub end_speed: f32,
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            translation_weight: 1.0,
            rotation_weight: 1.0,
            start_speed: DEFAULT_START_SPEED,
            end_speed: DEFAULT_END_SPEED,
        }
    }
}

impl SteeringConfig {
    /// Speeds must be finite and non-negative. An inverted range is accepted
    /// (it acts as a hard threshold at `start_speed`) but logged.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("steering.start_speed", self.start_speed)?;
        non_negative("steering.end_speed", self.end_speed)?;
        if self.end_speed <= self.start_speed {
            log::warn!(
                "steering speed range [{}, {}] is empty; steering switches on abruptly at {} m/s",
                self.start_speed,
                self.end_speed,
                self.start_speed
            );
        }
        Ok(())
    }

    #[inline]
    pub fn steer(
        &self,
        root_motion: AffineTransform,
        desired_root_motion: AffineTransform,
        delta_time: f32,
    ) -> AffineTransform {
        steer_root_motion(
            root_motion,
            desired_root_motion,
            delta_time,
            self.translation_weight,
            self.rotation_weight,
            self.start_speed,
            self.end_speed,
        )
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, value })
    }
}
