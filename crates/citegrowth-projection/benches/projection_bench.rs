use citegrowth_core::models::ArticleObservation;
use citegrowth_core::traits::ICitationProjector;
use citegrowth_projection::ProjectionEngine;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_single_projection(c: &mut Criterion) {
    let engine = ProjectionEngine::new().unwrap();

    c.bench_function("project_single", |b| {
        b.iter(|| engine.project(black_box(50.0), black_box(2020), black_box(2024)))
    });
}

fn bench_results_page(c: &mut Criterion) {
    let engine = ProjectionEngine::new().unwrap();
    // A results page lists 10-20 articles.
    let page: Vec<_> = (0..20)
        .map(|i| ArticleObservation::new(i * 17, 2004 + i as i32))
        .collect();

    c.bench_function("project_batch_20", |b| {
        b.iter(|| engine.project_batch(black_box(&page), 2024))
    });
}

criterion_group!(benches, bench_single_projection, bench_results_page);
criterion_main!(benches);
