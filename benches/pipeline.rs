use criterion::{criterion_group, criterion_main, Criterion};
use zpipe::prelude::*;

fn make_words(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("word-{}", i % 97)).collect()
}

fn bench_select_where_sum(c: &mut Criterion) {
    c.bench_function("range_select_where_sum", |b| {
        b.iter(|| {
            range(0i64, 100_000, 3)
                .unwrap()
                .pipe(Select::new(|x: i64| x * x))
                .pipe(Where::new(|x: &i64| x % 2 == 0))
                .pipe(Sum::from_seed(0i64))
        })
    });
}

fn bench_concat(c: &mut Criterion) {
    let words = make_words(4096);
    c.bench_function("slice_concat", |b| {
        b.iter(|| from_slice(&words).pipe(Concat::new(",")).len())
    });
}

fn bench_render(c: &mut Criterion) {
    let data: Vec<u32> = (0..4096).collect();
    c.bench_function("render_slice", |b| b.iter(|| render(from_slice(&data)).len()));
}

criterion_group!(pipelines, bench_select_where_sum, bench_concat, bench_render);
criterion_main!(pipelines);
