//! Benchmarks for the classifier hot path and the per-frame sampler step.
//!
//! Run with: cargo bench

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use nalgebra::DVector;

use condensation_rs::{
    ClassifierBundle, FrameBounds, ResamplingSampler, RvmClassifier, Sample, SamplerConfig,
};

/// Classifier sized like a reduced-set vector machine in production use:
/// a few dozen support vectors over a patch-sized feature space.
fn bench_classifier(support_vectors: usize, dimension: usize) -> RvmClassifier {
    let support_vectors: Vec<DVector<f64>> = (0..support_vectors)
        .map(|i| {
            DVector::from_iterator(dimension, (0..dimension).map(|j| ((i * j) % 7) as f64 / 7.0))
        })
        .collect();
    let coefficients: Vec<f64> = (0..support_vectors.len())
        .map(|i| if i % 2 == 0 { 1.0 } else { -1.0 })
        .collect();

    ClassifierBundle {
        kernel_type: "rbf".to_string(),
        kernel_params: vec![0.05],
        support_vectors,
        coefficients,
        bias: 0.1,
        threshold: 0.0,
    }
    .build()
    .expect("valid bundle")
}

fn benchmark_hyperplane_distance(c: &mut Criterion) {
    let classifier = bench_classifier(30, 400);
    let feature_vector = DVector::from_iterator(400, (0..400).map(|i| (i % 11) as f64 / 11.0));

    c.bench_function("hyperplane_distance_30sv_400d", |b| {
        b.iter(|| classifier.compute_hyperplane_distance(black_box(&feature_vector)))
    });
}

fn benchmark_classify(c: &mut Criterion) {
    let classifier = bench_classifier(30, 400);
    let feature_vector = DVector::from_iterator(400, (0..400).map(|i| (i % 5) as f64 / 5.0));

    c.bench_function("classify_30sv_400d", |b| {
        b.iter(|| classifier.classify(black_box(&feature_vector)))
    });
}

fn benchmark_sampler_step(c: &mut Criterion) {
    let bounds = FrameBounds::new(640, 480);

    let mut config = SamplerConfig::new(500);
    config.seed = Some(42);
    let mut sampler = ResamplingSampler::new(config).expect("valid config");

    let population: Vec<Sample> = (0..500)
        .map(|i| Sample::with_weight(100 + (i % 400) as i32, 100 + (i % 300) as i32, 60, 1.0))
        .collect();

    c.bench_function("sampler_step_500_particles", |b| {
        b.iter(|| {
            sampler
                .sample(black_box(&population), [2.0, 1.0], bounds)
                .expect("non-degenerate frame")
        })
    });
}

fn benchmark_sampler_step_from_empty(c: &mut Criterion) {
    let bounds = FrameBounds::new(640, 480);

    let mut config = SamplerConfig::new(500);
    config.seed = Some(7);
    let mut sampler = ResamplingSampler::new(config).expect("valid config");

    c.bench_function("sampler_step_500_fresh", |b| {
        b.iter(|| {
            sampler
                .sample(black_box(&[]), [0.0, 0.0], bounds)
                .expect("non-degenerate frame")
        })
    });
}

criterion_group!(
    benches,
    benchmark_hyperplane_distance,
    benchmark_classify,
    benchmark_sampler_step,
    benchmark_sampler_step_from_empty
);
criterion_main!(benches);
