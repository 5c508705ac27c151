use criterion::{black_box, criterion_group, criterion_main, Criterion};

use kinematic_interp::kinematics::{get_position_from_coeffs, get_velocity_from_coeffs};
use kinematic_interp::polynomial::evaluate_derivatives;

fn bench_single_axis(c: &mut Criterion) {
    let coeffs: Vec<f64> = (0..16).map(|i| 1.0 / (i as f64 + 1.0)).collect();

    c.bench_function("evaluate_derivatives/degree_15/order_2", |b| {
        b.iter(|| black_box(evaluate_derivatives(&coeffs, black_box(0.37), 2).unwrap()))
    });
}

fn bench_three_axes(c: &mut Criterion) {
    let coeffs = [
        vec![7.0e3, -1.2, 3.0e-3, 4.0e-7],
        vec![-2.5e3, 0.8, -1.0e-4, 0.0],
        vec![1.0e2, 0.0, 0.0, 2.0e-9],
    ];

    c.bench_function("get_position_from_coeffs/degree_3", |b| {
        b.iter(|| black_box(get_position_from_coeffs(&coeffs, black_box(250.0)).unwrap()))
    });
    c.bench_function("get_velocity_from_coeffs/degree_3", |b| {
        b.iter(|| black_box(get_velocity_from_coeffs(&coeffs, black_box(250.0)).unwrap()))
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_single_axis, bench_three_axes
);
criterion_main!(benches);
