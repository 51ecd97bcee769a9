//! Uniform trajectory sampling.
//!
//! Model:
//! - A trajectory is `N` transforms spaced uniformly over `[-horizon, +horizon]`
//!   seconds around "now" (sample 0 at `-horizon`, sample `N-1` at `+horizon`).
//! - Query times outside the window clamp to the first/last sample; nothing is
//!   extrapolated.
//! - Inside the window the two bracketing samples are blended (translation lerp,
//!   rotation slerp). Queries that land on a sample time (within `EPSILON`)
//!   return that sample bit-for-bit.
//!
//! API:
//! - `sample_trajectory_at_time(&[AffineTransform], time, horizon)` for the
//!   per-frame path (panics on an empty slice or an invalid horizon).
//! - `TrajectoryView` for a validated borrow that cannot panic once built.

use serde::{Deserialize, Serialize};

use crate::error::TrajectoryError;
use crate::math::{saturate, EPSILON};
use crate::transform::AffineTransform;

/// Samples per second implied by `len` samples across `[-horizon, +horizon]`.
/// Zero when the horizon is zero or there is only one sample. Overflows to
/// infinity for subnormal horizons; the sampler does not divide by it.
#[inline]
pub fn sample_rate(len: usize, time_horizon: f32) -> f32 {
    if time_horizon > 0.0 {
        len.saturating_sub(1) as f32 / (2.0 * time_horizon)
    } else {
        0.0
    }
}

/// Canonical time (seconds relative to now) of sample `index`.
pub fn sample_time(index: usize, len: usize, time_horizon: f32) -> f32 {
    if len <= 1 {
        return 0.0;
    }
    -time_horizon + index as f32 * (2.0 * time_horizon / (len - 1) as f32)
}

/// Sample `trajectory` at `sample_time` seconds relative to now.
///
/// # Panics
///
/// If `trajectory` is empty or `time_horizon` is negative or not finite.
/// Both indicate a bug in whatever produced the trajectory.
pub fn sample_trajectory_at_time(
    trajectory: &[AffineTransform],
    sample_time: f32,
    time_horizon: f32,
) -> AffineTransform {
    assert!(!trajectory.is_empty(), "trajectory has no samples");
    assert!(
        time_horizon.is_finite() && time_horizon >= 0.0,
        "time horizon must be finite and >= 0, got {time_horizon}"
    );
    sample_validated(trajectory, sample_time, time_horizon)
}

fn sample_validated(
    trajectory: &[AffineTransform],
    sample_time: f32,
    time_horizon: f32,
) -> AffineTransform {
    let last = trajectory.len() - 1;
    if last == 0 || time_horizon <= 0.0 {
        return trajectory[0];
    }

    // Endpoints are decided in the time domain so they never depend on the
    // rounding of the index product below. NaN clamps low.
    let adjusted_time = time_horizon + sample_time;
    let window = 2.0 * time_horizon;
    if adjusted_time.is_nan() || adjusted_time <= 0.0 {
        return trajectory[0];
    }
    if adjusted_time >= window {
        return trajectory[last];
    }

    // Normalize before scaling: (N-1) / window overflows for subnormal horizons.
    let fractional = (adjusted_time / window) * last as f32;

    // fractional > 0 here, so floor and truncation agree.
    let base = fractional.floor();
    if base >= last as f32 {
        return trajectory[last];
    }

    let index = base as usize;
    let theta = saturate(fractional - base);
    if theta <= EPSILON {
        return trajectory[index];
    }
    if theta >= 1.0 - EPSILON {
        return trajectory[index + 1];
    }

    trajectory[index].lerp(&trajectory[index + 1], theta)
}

/// Validated, borrowed trajectory.
#[derive(Copy, Clone, Debug)]
pub struct TrajectoryView<'a> {
    samples: &'a [AffineTransform],
    time_horizon: f32,
}

impl<'a> TrajectoryView<'a> {
    pub fn new(samples: &'a [AffineTransform], time_horizon: f32) -> Result<Self, TrajectoryError> {
        if samples.is_empty() {
            return Err(TrajectoryError::Empty);
        }
        if !(time_horizon.is_finite() && time_horizon >= 0.0) {
            return Err(TrajectoryError::InvalidHorizon(time_horizon));
        }
        Ok(Self {
            samples,
            time_horizon,
        })
    }

    #[inline]
    pub fn samples(&self) -> &'a [AffineTransform] {
        self.samples
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; construction rejects empty slices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    pub fn time_horizon(&self) -> f32 {
        self.time_horizon
    }

    #[inline]
    pub fn sample_rate(&self) -> f32 {
        sample_rate(self.samples.len(), self.time_horizon)
    }

    #[inline]
    pub fn sample_time(&self, index: usize) -> f32 {
        sample_time(index, self.samples.len(), self.time_horizon)
    }

    #[inline]
    pub fn sample(&self, sample_time: f32) -> AffineTransform {
        sample_validated(self.samples, sample_time, self.time_horizon)
    }
}

/// Owned trajectory, as produced by the stored trajectory loader.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trajectory {
    #[serde(default)]
    pub name: String,
    pub time_horizon: f32,
    pub samples: Vec<AffineTransform>,
}

impl Trajectory {
    pub fn view(&self) -> Result<TrajectoryView<'_>, TrajectoryError> {
        TrajectoryView::new(&self.samples, self.time_horizon)
    }
}
