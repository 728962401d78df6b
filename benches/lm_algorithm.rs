//! Benchmarks for the Levenberg-Marquardt fit
//!
//! This file contains benchmarks for the core fit and its building blocks
//! to evaluate performance and facilitate optimizations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lmcurve_rs::lm::{parameter_error, step};
use lmcurve_rs::models::{ExponentialModel, GaussianModel, LinearModel};
use lmcurve_rs::{fit, Dataset, FitConfig};
use ndarray::{array, Array1};

fn bench_linear_fit(c: &mut Criterion) {
    let model = LinearModel::new("");
    let data = Dataset::from_model(&model, &array![3.0, 2.0], Array1::linspace(0.0, 10.0, 100)).unwrap();
    let config = FitConfig::new(array![1.0, 1.0]);

    c.bench_function("linear_fit_100", |b| {
        b.iter(|| fit(black_box(&data), &model, black_box(&config)).unwrap())
    });
}

fn bench_exponential_fit(c: &mut Criterion) {
    let model = ExponentialModel::new("");
    let data = Dataset::from_model(&model, &array![3.0, 2.0, 0.5], Array1::linspace(0.0, 5.0, 100)).unwrap();
    let config = FitConfig::new(array![2.8, 1.9, 0.45]).with_max_iterations(200);

    c.bench_function("exponential_fit_100", |b| {
        b.iter(|| fit(black_box(&data), &model, black_box(&config)).unwrap())
    });
}

fn bench_step(c: &mut Criterion) {
    let model = GaussianModel::new("", true);
    let truth = array![2.0, 1.0, 0.8, 0.1];
    let data = Dataset::from_model(&model, &truth, Array1::linspace(-2.0, 4.0, 1000)).unwrap();
    let params = array![1.8, 1.1, 0.9, 0.0];

    c.bench_function("gaussian_step_1000", |b| {
        b.iter(|| step(black_box(&data), black_box(&params), 0.5, 0.1, &model))
    });
    c.bench_function("gaussian_error_1000", |b| {
        b.iter(|| parameter_error(black_box(&data), black_box(&params), &model))
    });
}

criterion_group!(benches, bench_linear_fit, bench_exponential_fit, bench_step);
criterion_main!(benches);
