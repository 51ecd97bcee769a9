//! Rigid transform (translation + rotation) used for trajectory samples and
//! root-motion deltas.

use serde::{Deserialize, Serialize};

use crate::math::{
    add_vec3, conjugate_quat, dot4, length_vec3, lerp_vec3, mul_quat, rotate_vec3, scale_vec3,
    slerp_quat, sub_vec3, QUAT_IDENTITY,
};

/// Translation `t` plus unit rotation `q` (x, y, z, w).
///
/// Applying the transform to a point rotates first, then translates.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    pub t: [f32; 3],
    pub q: [f32; 4],
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AffineTransform {
    pub const IDENTITY: AffineTransform = AffineTransform {
        t: [0.0, 0.0, 0.0],
        q: QUAT_IDENTITY,
    };

    #[inline]
    pub const fn new(t: [f32; 3], q: [f32; 4]) -> Self {
        Self { t, q }
    }

    #[inline]
    pub const fn from_translation(t: [f32; 3]) -> Self {
        Self { t, q: QUAT_IDENTITY }
    }

    #[inline]
    pub const fn from_rotation(q: [f32; 4]) -> Self {
        Self {
            t: [0.0, 0.0, 0.0],
            q,
        }
    }

    #[inline]
    pub fn transform_point(&self, p: [f32; 3]) -> [f32; 3] {
        add_vec3(rotate_vec3(self.q, p), self.t)
    }

    #[inline]
    pub fn transform_direction(&self, d: [f32; 3]) -> [f32; 3] {
        rotate_vec3(self.q, d)
    }

    /// Composition `self * rhs`: applies `rhs`, then `self`.
    #[inline]
    pub fn compose(&self, rhs: &AffineTransform) -> AffineTransform {
        AffineTransform {
            t: self.transform_point(rhs.t),
            q: mul_quat(self.q, rhs.q),
        }
    }

    pub fn inverse(&self) -> AffineTransform {
        let q = conjugate_quat(self.q);
        AffineTransform {
            t: scale_vec3(rotate_vec3(q, self.t), -1.0),
            q,
        }
    }

    /// Translation lerp and shortest-arc rotation slerp.
    #[inline]
    pub fn lerp(&self, other: &AffineTransform, t: f32) -> AffineTransform {
        AffineTransform {
            t: lerp_vec3(self.t, other.t, t),
            q: slerp_quat(self.q, other.q, t),
        }
    }

    /// Tolerant comparison; `q` and `-q` are treated as the same rotation.
    pub fn approx_eq(&self, other: &AffineTransform, eps: f32) -> bool {
        length_vec3(sub_vec3(self.t, other.t)) <= eps && 1.0 - dot4(self.q, other.q).abs() <= eps
    }
}

impl std::ops::Mul for AffineTransform {
    type Output = AffineTransform;

    fn mul(self, rhs: AffineTransform) -> AffineTransform {
        self.compose(&rhs)
    }
}
