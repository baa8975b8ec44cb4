use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use latency_density::kde::GaussianKde;

fn get_random_samples(num_samples: usize) -> Vec<i64> {
    let mut samples = Vec::with_capacity(num_samples);
    for _ in 0..num_samples {
        samples.push(rand::thread_rng().gen_range(200..1100));
    }
    samples
}

fn kde_curve_benchmark(c: &mut Criterion) {
    let samples = get_random_samples(2000);

    c.bench_function("kde curve 2000 samples", |b| {
        b.iter(|| {
            let kde = GaussianKde::new(black_box(&samples), 0.5);
            black_box(kde.curve(512))
        })
    });
}

criterion_group!(benches, kde_curve_benchmark);
criterion_main!(benches);
