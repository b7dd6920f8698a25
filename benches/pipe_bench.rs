//! Benchmark for the synchronous pipelines.
//!
//! The macros expand to direct calls, so `pipe!` should match hand-nested
//! calls. The dynamic pipeline pays for boxing and a downcast per step.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tryflow::compose::{DynPipeline, DynStep};
use tryflow::curried;
use tryflow::outcome::{Outcome, failure, success};
use tryflow::{flow, pipe, try_pipe};

fn add_one(value: u64) -> u64 {
    value + 1
}

fn double(value: u64) -> u64 {
    value * 2
}

fn below_limit(value: u64) -> Outcome<u64, u64> {
    if value < 1_000_000 {
        success(value)
    } else {
        failure(value)
    }
}

// =============================================================================
// Static pipelines
// =============================================================================

fn benchmark_pipe(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("pipe");

    group.bench_function("nested_calls", |bencher| {
        bencher.iter(|| black_box(add_one(double(add_one(double(black_box(3)))))));
    });

    group.bench_function("pipe_macro", |bencher| {
        bencher.iter(|| black_box(pipe!(black_box(3), double, add_one, double, add_one)));
    });

    let composed = flow!(double, add_one, double, add_one);
    group.bench_function("flow_macro", |bencher| {
        bencher.iter(|| black_box(composed(black_box(3))));
    });

    group.bench_function("pipe_curried_optional", |bencher| {
        bencher.iter(|| {
            black_box(pipe!(
                black_box(Some(3_u64)),
                curried::optional::map(double),
                curried::optional::map(add_one),
                curried::optional::unwrap_or(0),
            ))
        });
    });

    group.finish();
}

fn benchmark_try_pipe(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("try_pipe");

    for start in [1_u64, 999_999] {
        group.bench_with_input(BenchmarkId::new("try_pipe_macro", start), &start, |bencher, &start| {
            bencher.iter(|| {
                let result = try_pipe!(
                    success(black_box(start)),
                    below_limit,
                    |value| below_limit(double(value)),
                    |value| below_limit(add_one(value)),
                );
                black_box(result)
            });
        });

        group.bench_with_input(BenchmarkId::new("flat_map_chain", start), &start, |bencher, &start| {
            bencher.iter(|| {
                let result = success(black_box(start))
                    .flat_map(below_limit)
                    .flat_map(|value| below_limit(double(value)))
                    .flat_map(|value| below_limit(add_one(value)));
                black_box(result)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Dynamic pipeline
// =============================================================================

fn benchmark_dyn_pipeline(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("dyn_pipeline");

    for length in [4, 16, 64] {
        let pipeline: DynPipeline = (0..length).map(|_| DynStep::map(add_one)).collect();
        group.bench_with_input(BenchmarkId::new("steps", length), &pipeline, |bencher, pipeline| {
            bencher.iter(|| black_box(pipeline.run::<u64, u64>(black_box(0))));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_pipe, benchmark_try_pipe, benchmark_dyn_pipeline);
criterion_main!(benches);
