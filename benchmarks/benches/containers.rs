// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};

use benchmarks::{SIZES, measurement_settings};
use elastic_array::DynamicArray;
use elastic_stack::ArrayStack;

fn configure_group(group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>) {
    let (measurement_time, sample_size) = measurement_settings();
    group.measurement_time(measurement_time);
    group.sample_size(sample_size);
}

// =============================================================================
// Vec vs DynamicArray
// =============================================================================

fn bench_add_with_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_with_growth");
    configure_group(&mut group);

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..s {
                    vec.push(i as u32);
                }
                black_box(vec)
            });
        });

        group.bench_with_input(BenchmarkId::new("DynamicArray", size), &size, |b, &s| {
            b.iter(|| {
                let mut array = DynamicArray::new();
                for i in 0..s {
                    array.add(i as u32).expect("Failed to add(..)");
                }
                black_box(array)
            });
        });
    }

    group.finish();
}

fn bench_add_preallocated(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_preallocated");
    configure_group(&mut group);

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            let mut vec = Vec::with_capacity(s);
            b.iter(|| {
                vec.clear();
                for i in 0..s {
                    vec.push(i as u32);
                }
                black_box(&vec);
            });
        });

        group.bench_with_input(BenchmarkId::new("DynamicArray", size), &size, |b, &s| {
            let mut array = DynamicArray::with_capacity(s).expect("Failed to with_capacity(..)");
            b.iter(|| {
                array.clear();
                for i in 0..s {
                    array.add(i as u32).expect("Failed to add(..)");
                }
                black_box(&array);
            });
        });
    }

    group.finish();
}

fn bench_insert_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_front");
    configure_group(&mut group);

    // Quadratic: skip the largest size
    for size in &SIZES[..3] {
        let size = *size;
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..s {
                    vec.insert(0, i as u32);
                }
                black_box(vec)
            });
        });

        group.bench_with_input(BenchmarkId::new("DynamicArray", size), &size, |b, &s| {
            b.iter(|| {
                let mut array = DynamicArray::new();
                for i in 0..s {
                    array.insert_at(0, i as u32).expect("Failed to insert_at(..)");
                }
                black_box(array)
            });
        });
    }

    group.finish();
}

fn bench_remove_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_front");
    configure_group(&mut group);

    for size in &SIZES[..3] {
        let size = *size;
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter_batched(
                || (0..s as u32).collect::<Vec<_>>(),
                |mut vec| {
                    while !vec.is_empty() {
                        black_box(vec.remove(0));
                    }
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("DynamicArray", size), &size, |b, &s| {
            b.iter_batched(
                || (0..s as u32).collect::<DynamicArray<_>>(),
                |mut array| {
                    while let Ok(value) = array.remove(0) {
                        black_box(value);
                    }
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

// =============================================================================
// Vec vs ArrayStack
// =============================================================================

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");
    configure_group(&mut group);

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &s| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..s {
                    vec.push(i as u32);
                }
                while let Some(value) = vec.pop() {
                    black_box(value);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("ArrayStack", size), &size, |b, &s| {
            b.iter(|| {
                let mut stack = ArrayStack::new();
                for i in 0..s {
                    stack.push(i as u32).expect("Failed to push(..)");
                }
                while let Ok(value) = stack.pop() {
                    black_box(value);
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_add_with_growth,
    bench_add_preallocated,
    bench_insert_front,
    bench_remove_front,
    bench_push_pop,
);
criterion_main!(benches);
