#[macro_use]
extern crate criterion;
extern crate itertools;
extern crate pulltools;

use criterion::{BenchmarkId, Criterion};
use pulltools::prelude::*;
use std::hint::black_box;

fn product_pairs(c: &mut Criterion) {
    let sizes = vec![100u32, 300, 1_000];
    let mut group = c.benchmark_group("product2 (square)");
    for size in sizes {
        group.bench_with_input(BenchmarkId::new("pulltools", size), &size, |b, &size| {
            b.iter(|| black_box(product2(0..size, 0..size).filter(|(i, j)| i == j).count()))
        });
        group.bench_with_input(BenchmarkId::new("itertools", size), &size, |b, &size| {
            b.iter(|| {
                black_box(
                    itertools::Itertools::cartesian_product(0..size, 0..size)
                        .filter(|(i, j)| i == j)
                        .count(),
                )
            })
        });
    }
    group.finish();
}

criterion_group!(benches, product_pairs);
criterion_main!(benches);
