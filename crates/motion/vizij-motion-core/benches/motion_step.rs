use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vizij_motion_core::math::quat_from_axis_angle;
use vizij_motion_core::{
    parse_stored_trajectory_json, sample_trajectory_at_time, AffineTransform, SteeringConfig,
};

fn bench_sampling(c: &mut Criterion) {
    let json = vizij_test_fixtures::trajectories::json("walk-straight").expect("fixture");
    let traj = parse_stored_trajectory_json(&json).expect("parse");
    let times: Vec<f32> = (0..256).map(|i| -1.2 + i as f32 * 0.0095).collect();

    c.bench_function("sample_trajectory_at_time/256", |b| {
        b.iter(|| {
            for &t in &times {
                black_box(sample_trajectory_at_time(
                    black_box(&traj.samples),
                    t,
                    traj.time_horizon,
                ));
            }
        })
    });
}

fn bench_steering(c: &mut Criterion) {
    let cfg = SteeringConfig::default();
    let root = AffineTransform::new([0.01, 0.0, 0.02], quat_from_axis_angle([0.0, 1.0, 0.0], 0.1));
    let desired = AffineTransform::new([0.0, 0.0, 0.03], quat_from_axis_angle([0.0, 1.0, 0.0], -0.2));

    c.bench_function("steer_root_motion", |b| {
        b.iter(|| black_box(cfg.steer(black_box(root), black_box(desired), 1.0 / 60.0)))
    });
}

criterion_group!(benches, bench_sampling, bench_steering);
criterion_main!(benches);
