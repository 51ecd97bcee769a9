//! Speed-gated steering of a root-motion delta toward a desired delta.

use crate::math::{
    conjugate_quat, length_vec3, lerp_vec3, mul_quat, rotate_vec3, slerp_quat, EPSILON,
    QUAT_IDENTITY,
};
use crate::transform::AffineTransform;

/// Root speed (m/s) at which steering starts to take effect.
pub const DEFAULT_START_SPEED: f32 = 0.0;
/// Root speed (m/s) at which steering is fully effective.
pub const DEFAULT_END_SPEED: f32 = 0.15;

/// Steering strength in [0, 1] for a given root speed.
///
/// Ramps linearly from `start_speed` to `end_speed`. When `end_speed <= start_speed`
/// the ramp collapses into a hard threshold at `start_speed`.
#[inline]
pub fn speed_gate(speed: f32, start_speed: f32, end_speed: f32) -> f32 {
    if end_speed > start_speed {
        ((speed - start_speed) / (end_speed - start_speed)).clamp(0.0, 1.0)
    } else if speed >= start_speed {
        1.0
    } else {
        0.0
    }
}

/// Blend one frame of `root_motion` toward `desired_root_motion`.
///
/// - `delta_time`: seconds covered by both deltas; the desired root speed is
///   `|desired_root_motion.t| / delta_time`.
/// - `translation_weight`: 0 keeps the root translation, 1 takes the desired one.
/// - `rotation_weight`: 0 keeps the root rotation, 1 takes the desired one.
/// - `start_speed`/`end_speed`: see [`speed_gate`].
///
/// Both weights are scaled by the speed gate. The rotation correction is applied
/// to the root translation as well as its rotation. Returns identity when
/// `delta_time <= 0` (or NaN). That case is logged with `log::trace!` only:
/// this runs once per frame, so a paused clock must not flood higher levels.
pub fn steer_root_motion(
    root_motion: AffineTransform,
    desired_root_motion: AffineTransform,
    delta_time: f32,
    translation_weight: f32,
    rotation_weight: f32,
    start_speed: f32,
    end_speed: f32,
) -> AffineTransform {
    if delta_time.is_nan() || delta_time <= 0.0 {
        log::trace!("steer_root_motion: non-positive delta_time {delta_time}, returning identity");
        return AffineTransform::IDENTITY;
    }

    let speed = length_vec3(desired_root_motion.t) / delta_time;
    let weight = speed_gate(speed, start_speed, end_speed);

    let mut steered = root_motion;

    let rotation_blend = rotation_weight * weight;
    if rotation_blend.abs() > EPSILON {
        let correction = mul_quat(desired_root_motion.q, conjugate_quat(root_motion.q));
        let correction = slerp_quat(QUAT_IDENTITY, correction, rotation_blend);
        steered.t = rotate_vec3(correction, steered.t);
        steered.q = mul_quat(correction, steered.q);
    }

    steered.t = lerp_vec3(steered.t, desired_root_motion.t, translation_weight * weight);
    steered
}
