use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kmeanspp::cluster::{kmeans_plus_plus, Kmeans};
use kmeanspp::sample_weighted;
use rand::prelude::*;

fn bench_kmeans(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeans");

    // Generate synthetic data
    let mut rng = StdRng::seed_from_u64(42);
    let n = 1000;
    let k = 10;

    let data: Vec<[f32; 16]> = (0..n).map(|_| rng.random()).collect();

    group.bench_function("fit_n1000_d16_k10", |b| {
        b.iter(|| {
            let model = Kmeans::new(k).with_max_iter(10).with_seed(42);
            model.fit(black_box(&data)).unwrap();
        })
    });

    group.bench_function("seed_n1000_d16_k10", |b| {
        let mut rng = StdRng::seed_from_u64(7);
        b.iter(|| kmeans_plus_plus(black_box(&data), k, &mut rng).unwrap())
    });

    group.finish();
}

fn bench_sampling(c: &mut Criterion) {
    let items: Vec<u32> = (0..1000).collect();
    let mut rng = StdRng::seed_from_u64(3);

    c.bench_function("sample_weighted_1000_of_100", |b| {
        b.iter(|| sample_weighted(black_box(&items), |&x| f64::from(x % 13), 100, &mut rng).unwrap())
    });
}

criterion_group!(benches, bench_kmeans, bench_sampling);
criterion_main!(benches);
