use allege::{assert_condition, assert_not_empty, assert_not_null, iterable, sequence};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::HashMap;

fn bench_condition(c: &mut Criterion) {
    let mut group = c.benchmark_group("condition");

    group.bench_function("assert_condition_true", |b| {
        b.iter(|| assert_condition(black_box(Some(true)), None));
    });

    // Failure path allocates the message
    group.bench_function("assert_condition_false", |b| {
        b.iter(|| assert_condition(black_box(Some(false)), Some("limit exceeded")));
    });

    group.bench_function("assert_not_null_some", |b| {
        b.iter(|| assert_not_null(black_box(Some(42u64)), Some("value")));
    });

    group.finish();
}

fn bench_not_empty(c: &mut Criterion) {
    let mut group = c.benchmark_group("not_empty");

    let text = String::from("payload");
    let items: Vec<u32> = (0..1024).collect();
    let map: HashMap<u32, u32> = (0..64).map(|i| (i, i)).collect();

    group.bench_function("text", |b| {
        b.iter(|| assert_not_empty(black_box(Some(&text)), None));
    });

    group.bench_function("vec_counted", |b| {
        b.iter(|| assert_not_empty(black_box(Some(&items)), None));
    });

    group.bench_function("hash_map_counted", |b| {
        b.iter(|| assert_not_empty(black_box(Some(&map)), None));
    });

    // Boxes the cursor, compare against the counted path
    group.bench_function("vec_iterable", |b| {
        b.iter(|| assert_not_empty(black_box(Some(iterable(&items))), None));
    });

    group.bench_function("filter_sequence", |b| {
        b.iter(|| assert_not_empty(Some(sequence(items.iter().filter(|n| **n > black_box(512)))), None));
    });

    group.finish();
}

criterion_group!(benches, bench_condition, bench_not_empty);
criterion_main!(benches);
