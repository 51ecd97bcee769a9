use serde::Deserialize;

use crate::error::StoredTrajectoryError;
use crate::math::{length_quat, normalize_quat};
use crate::trajectory::{Trajectory, TrajectoryView};
use crate::transform::AffineTransform;

/// Quaternions further than this from unit length are renormalized with a warning.
const UNIT_QUAT_TOLERANCE: f32 = 1e-3;

/// Public API: parse stored trajectory JSON into a [`Trajectory`].
///
/// ```json
/// { "name": "walk", "timeHorizon": 1.0,
///   "samples": [ { "t": [0, 0, 0], "q": [0, 0, 0, 1] } ] }
/// ```
///
/// Notes:
/// - `name` is optional.
/// - Samples are assumed to be evenly spaced over `[-timeHorizon, +timeHorizon]`.
/// - Zero-length rotations are rejected; other non-unit rotations are normalized.
pub fn parse_stored_trajectory_json(s: &str) -> Result<Trajectory, StoredTrajectoryError> {
    let st: StoredTrajectory = serde_json::from_str(s)?;

    let time_horizon = st.time_horizon as f32;
    let mut samples = Vec::with_capacity(st.samples.len());
    for (index, raw) in st.samples.iter().enumerate() {
        samples.push(to_transform(index, raw)?);
    }

    // Shape validation: non-empty, horizon finite and >= 0.
    TrajectoryView::new(&samples, time_horizon)?;

    log::debug!(
        "parsed stored trajectory '{}': {} samples over +/-{}s",
        st.name,
        samples.len(),
        time_horizon
    );

    Ok(Trajectory {
        name: st.name,
        time_horizon,
        samples,
    })
}

fn to_transform(index: usize, raw: &StoredSample) -> Result<AffineTransform, StoredTrajectoryError> {
    let t = raw.t.map(|v| v as f32);
    let q = raw.q.map(|v| v as f32);
    if t.iter().chain(q.iter()).any(|v| !v.is_finite()) {
        return Err(StoredTrajectoryError::NonFinite { index });
    }

    let len = length_quat(q);
    if len <= f32::EPSILON {
        return Err(StoredTrajectoryError::DegenerateRotation { index });
    }
    let q = if (len - 1.0).abs() > UNIT_QUAT_TOLERANCE {
        log::warn!("trajectory sample {index}: rotation length {len}, normalizing");
        normalize_quat(q)
    } else {
        q
    };

    Ok(AffineTransform::new(t, q))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredTrajectory {
    #[serde(default)]
    name: String,
    time_horizon: f64,
    samples: Vec<StoredSample>,
}

#[derive(Debug, Deserialize)]
struct StoredSample {
    t: [f64; 3],
    q: [f64; 4],
}
