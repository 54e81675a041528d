//! Benchmark classification and frame rendering.

use std::sync::atomic::AtomicBool;

use chhaya::{
    EscapeClassifier, EscapeConfig, FrameRenderer, LatticeConfig, LatticeSampler, PointCloud,
    Quaternion, RenderConfig,
};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn sampler(resolution: usize) -> LatticeSampler {
    LatticeSampler::new(LatticeConfig {
        resolution,
        seed: 42,
        ..Default::default()
    })
    .unwrap()
}

fn bench_classify(c: &mut Criterion) {
    let classifier = EscapeClassifier::new(EscapeConfig::default());
    let seeds = [
        Quaternion::ZERO,
        Quaternion::new(0.1, -0.2, 0.3, 0.0),
        Quaternion::new(0.9, 0.9, 0.0, 0.0),
    ];

    c.bench_function("classify_seed", |b| {
        b.iter(|| {
            for q in &seeds {
                black_box(classifier.classify(black_box(*q)));
            }
        })
    });
}

fn bench_build_cloud(c: &mut Criterion) {
    let classifier = EscapeClassifier::new(EscapeConfig::default());
    let cancel = AtomicBool::new(false);
    let mut group = c.benchmark_group("build_cloud");
    group.sample_size(10);

    for n in [41usize, 81] {
        let s = sampler(n);
        group.bench_with_input(BenchmarkId::new("sequential", n), &s, |b, s| {
            b.iter(|| PointCloud::build(s, &classifier).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("parallel", n), &s, |b, s| {
            b.iter(|| PointCloud::build_parallel(s, &classifier, &cancel).unwrap())
        });
    }

    group.finish();
}

fn bench_render_frame(c: &mut Criterion) {
    let classifier = EscapeClassifier::new(EscapeConfig::default());
    let cloud = PointCloud::build(&sampler(101), &classifier).unwrap();
    let renderer = FrameRenderer::new(RenderConfig::default());

    c.bench_function("render_frame_101", |b| {
        b.iter(|| black_box(renderer.render_frame(black_box(37), &cloud)))
    });
}

criterion_group!(benches, bench_classify, bench_build_cloud, bench_render_frame);
criterion_main!(benches);
