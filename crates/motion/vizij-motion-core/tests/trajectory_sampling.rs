use std::f32::consts::FRAC_PI_2;

use vizij_motion_core::math::{dot3, length_vec3, quat_angle_between, quat_from_axis_angle, sub_vec3};
use vizij_motion_core::{sample_time, sample_trajectory_at_time, AffineTransform, TrajectoryView};

/// `len` samples walking along +z with a slowly increasing yaw.
fn mk_trajectory(len: usize) -> Vec<AffineTransform> {
    (0..len)
        .map(|i| {
            let f = i as f32;
            AffineTransform::new(
                [0.1 * f, 0.0, 0.5 * f],
                quat_from_axis_angle([0.0, 1.0, 0.0], 0.05 * f),
            )
        })
        .collect()
}

#[test]
fn endpoints_are_exact() {
    for &(len, horizon) in &[(2usize, 1.0f32), (3, 1.0), (7, 0.3), (21, 1.3), (60, 2.0)] {
        let traj = mk_trajectory(len);
        assert_eq!(
            sample_trajectory_at_time(&traj, -horizon, horizon),
            traj[0],
            "first sample for len={len} horizon={horizon}"
        );
        assert_eq!(
            sample_trajectory_at_time(&traj, horizon, horizon),
            traj[len - 1],
            "last sample for len={len} horizon={horizon}"
        );
    }
}

#[test]
fn endpoints_are_exact_for_long_trajectories() {
    for len in 2..=200usize {
        let traj = mk_trajectory(len);
        for k in 0..299 {
            let horizon = 0.05 + k as f32 * 0.0107;
            assert_eq!(
                sample_trajectory_at_time(&traj, -horizon, horizon),
                traj[0],
                "first sample for len={len} horizon={horizon}"
            );
            assert_eq!(
                sample_trajectory_at_time(&traj, horizon, horizon),
                traj[len - 1],
                "last sample for len={len} horizon={horizon}"
            );
        }
    }
}

#[test]
fn clamps_outside_window() {
    let traj = mk_trajectory(11);
    let horizon = 1.0;
    for &t in &[-1.0f32, -1.0001, -1.5, -10.0, -1.0e9] {
        assert_eq!(sample_trajectory_at_time(&traj, t, horizon), traj[0], "t={t}");
    }
    for &t in &[1.0f32, 1.0001, 1.5, 10.0, 1.0e9] {
        assert_eq!(sample_trajectory_at_time(&traj, t, horizon), traj[10], "t={t}");
    }
}

#[test]
fn reproduces_samples_at_their_times() {
    for &horizon in &[0.5f32, 1.0, 1.3] {
        let traj = mk_trajectory(21);
        for (i, expected) in traj.iter().enumerate() {
            let t = sample_time(i, traj.len(), horizon);
            assert_eq!(
                sample_trajectory_at_time(&traj, t, horizon),
                *expected,
                "sample {i} at t={t} horizon={horizon}"
            );
        }
    }
}

#[test]
fn translation_stays_on_segment() {
    let traj = mk_trajectory(9);
    let horizon = 2.0;
    let step = 2.0 * horizon / 8.0;
    for i in 0..8 {
        let t0 = sample_time(i, traj.len(), horizon);
        let a = traj[i].t;
        let b = traj[i + 1].t;
        let ab = sub_vec3(b, a);
        for k in 1..10 {
            let t = t0 + step * (k as f32 / 10.0);
            let p = sample_trajectory_at_time(&traj, t, horizon).t;
            let ap = sub_vec3(p, a);
            let s = dot3(ap, ab) / dot3(ab, ab);
            assert!((-1e-5..=1.0 + 1e-5).contains(&s), "param {s} off segment");
            let off_line = length_vec3(sub_vec3(ap, [ab[0] * s, ab[1] * s, ab[2] * s]));
            assert!(off_line < 1e-5, "point {p:?} is {off_line} off the segment");
            assert!((s - k as f32 / 10.0).abs() < 1e-4, "param {s} for k={k}");
        }
    }
}

#[test]
fn three_sample_halfway_example() {
    let p0 = AffineTransform::IDENTITY;
    let p1 = AffineTransform::new([2.0, 0.0, 4.0], quat_from_axis_angle([0.0, 1.0, 0.0], FRAC_PI_2));
    let p2 = AffineTransform::new([4.0, 0.0, 8.0], quat_from_axis_angle([0.0, 1.0, 0.0], 2.0));
    let traj = [p0, p1, p2];

    let s = sample_trajectory_at_time(&traj, -0.5, 1.0);
    let expected = AffineTransform::new(
        [1.0, 0.0, 2.0],
        quat_from_axis_angle([0.0, 1.0, 0.0], FRAC_PI_2 * 0.5),
    );
    assert!(s.approx_eq(&expected, 1e-5), "got {s:?}");
    assert!((quat_angle_between(s.q, p0.q) - quat_angle_between(s.q, p1.q)).abs() < 1e-5);
}

#[test]
fn single_sample_always_returned() {
    let traj = mk_trajectory(1);
    for &horizon in &[0.0f32, 0.5, 3.0] {
        for &t in &[-5.0f32, -0.1, 0.0, 0.1, 5.0] {
            assert_eq!(sample_trajectory_at_time(&traj, t, horizon), traj[0]);
        }
    }
}

#[test]
fn view_matches_free_function() {
    let traj = mk_trajectory(13);
    let view = TrajectoryView::new(&traj, 0.6).expect("valid view");
    assert_eq!(view.len(), 13);
    assert_eq!(view.time_horizon(), 0.6);
    assert!(std::ptr::eq(view.samples(), traj.as_slice()));
    assert!((view.sample_rate() - 10.0).abs() < 1e-5);
    for k in -20..=20 {
        let t = k as f32 * 0.037;
        assert_eq!(view.sample(t), sample_trajectory_at_time(&traj, t, 0.6));
    }
}

#[test]
fn concurrent_sampling_shares_the_slice() {
    let traj = mk_trajectory(31);
    let expected: Vec<AffineTransform> = (0..64)
        .map(|k| sample_trajectory_at_time(&traj, -1.2 + k as f32 * 0.04, 1.0))
        .collect();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for (k, want) in expected.iter().enumerate() {
                    let got = sample_trajectory_at_time(&traj, -1.2 + k as f32 * 0.04, 1.0);
                    assert_eq!(got, *want);
                }
            });
        }
    });
}
