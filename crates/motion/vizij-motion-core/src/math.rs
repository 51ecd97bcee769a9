//! Scalar, vector and quaternion helpers used by the sampler and steerer.
//! - vectors are `[f32; 3]`
//! - quaternions are `[f32; 4]` in (x, y, z, w) order
//! - slerp takes the shortest arc and falls back to NLERP for nearly equal inputs

/// Tolerance shared by the trajectory sampler and the root-motion steerer.
pub const EPSILON: f32 = 1e-5;

pub const QUAT_IDENTITY: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Above this |dot| two quaternions are blended with NLERP instead of slerp.
const SLERP_DOT_THRESHOLD: f32 = 0.9995;

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn lerp_vec3(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        lerp_f32(a[0], b[0], t),
        lerp_f32(a[1], b[1], t),
        lerp_f32(a[2], b[2], t),
    ]
}

/// Clamp to [0, 1].
#[inline]
pub fn saturate(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

#[inline]
pub fn add_vec3(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

#[inline]
pub fn sub_vec3(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
pub fn scale_vec3(v: [f32; 3], s: f32) -> [f32; 3] {
    [v[0] * s, v[1] * s, v[2] * s]
}

#[inline]
pub fn dot3(a: [f32; 3], b: [f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
pub fn cross3(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

#[inline]
pub fn length_vec3(v: [f32; 3]) -> f32 {
    dot3(v, v).sqrt()
}

#[inline]
pub fn dot4(a: [f32; 4], b: [f32; 4]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
}

#[inline]
pub fn length_quat(q: [f32; 4]) -> f32 {
    dot4(q, q).sqrt()
}

/// Normalize a quaternion; a zero quaternion maps to identity.
#[inline]
pub fn normalize_quat(q: [f32; 4]) -> [f32; 4] {
    let len2 = dot4(q, q);
    if len2 > 0.0 {
        let inv_len = len2.sqrt().recip();
        [q[0] * inv_len, q[1] * inv_len, q[2] * inv_len, q[3] * inv_len]
    } else {
        QUAT_IDENTITY
    }
}

#[inline]
pub fn conjugate_quat(q: [f32; 4]) -> [f32; 4] {
    [-q[0], -q[1], -q[2], q[3]]
}

/// Hamilton product `a * b` (applies `b` first, then `a`).
#[inline]
pub fn mul_quat(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
    let [ax, ay, az, aw] = a;
    let [bx, by, bz, bw] = b;
    [
        aw * bx + ax * bw + ay * bz - az * by,
        aw * by - ax * bz + ay * bw + az * bx,
        aw * bz + ax * by - ay * bx + az * bw,
        aw * bw - ax * bx - ay * by - az * bz,
    ]
}

/// Rotate `v` by the unit quaternion `q`.
#[inline]
pub fn rotate_vec3(q: [f32; 4], v: [f32; 3]) -> [f32; 3] {
    let u = [q[0], q[1], q[2]];
    let t = scale_vec3(cross3(u, v), 2.0);
    add_vec3(add_vec3(v, scale_vec3(t, q[3])), cross3(u, t))
}

/// Quaternion from a rotation axis (normalized internally) and an angle in radians.
pub fn quat_from_axis_angle(axis: [f32; 3], angle: f32) -> [f32; 4] {
    let len = length_vec3(axis);
    if len <= 0.0 {
        return QUAT_IDENTITY;
    }
    let (s, c) = (angle * 0.5).sin_cos();
    let k = s / len;
    [axis[0] * k, axis[1] * k, axis[2] * k, c]
}

/// Rotation angle (radians, in [0, pi]) between two unit quaternions.
pub fn quat_angle_between(a: [f32; 4], b: [f32; 4]) -> f32 {
    let d = dot4(a, b).abs().min(1.0);
    2.0 * d.acos()
}

/// Spherical interpolation between unit quaternions with shortest-arc correction.
pub fn slerp_quat(a: [f32; 4], mut b: [f32; 4], t: f32) -> [f32; 4] {
    let mut d = dot4(a, b);
    if d < 0.0 {
        b = [-b[0], -b[1], -b[2], -b[3]];
        d = -d;
    }

    if d > SLERP_DOT_THRESHOLD {
        let q = [
            lerp_f32(a[0], b[0], t),
            lerp_f32(a[1], b[1], t),
            lerp_f32(a[2], b[2], t),
            lerp_f32(a[3], b[3], t),
        ];
        return normalize_quat(q);
    }

    let theta_0 = d.min(1.0).acos();
    let sin_theta_0 = theta_0.sin();
    let s0 = (theta_0 * (1.0 - t)).sin() / sin_theta_0;
    let s1 = (theta_0 * t).sin() / sin_theta_0;
    [
        s0 * a[0] + s1 * b[0],
        s0 * a[1] + s1 * b[1],
        s0 * a[2] + s1 * b[2],
        s0 * a[3] + s1 * b[3],
    ]
}
