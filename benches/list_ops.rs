//! Benchmarks for the constant-time end operations and the linear indexed
//! lookup of [`LinkedList`].

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use singly::LinkedList;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");
    for size in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut list = LinkedList::new();
                for value in 0..size {
                    list.append(black_box(value));
                }
                list
            });
        });
    }
    group.finish();
}

fn insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for size in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut list = LinkedList::new();
                for value in 0..size {
                    list.insert(black_box(value));
                }
                list
            });
        });
    }
    group.finish();
}

fn get_value_at(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_value_at (last index)");
    for size in SIZES {
        let list: LinkedList<usize> = (0..size).collect();
        let last = isize::try_from(size - 1).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &last, |b, &last| {
            b.iter(|| list.get_value_at(black_box(last)).copied());
        });
    }
    group.finish();
}

fn drain(c: &mut Criterion) {
    c.bench_function("remove_first until empty (10000)", |b| {
        b.iter_batched(
            || (0..10_000).collect::<LinkedList<usize>>(),
            |mut list| {
                while let Some(value) = list.remove_first() {
                    black_box(value);
                }
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, append, insert, get_value_at, drain);
criterion_main!(benches);
