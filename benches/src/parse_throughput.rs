mod common;

use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use linesum::prelude::*;
use tokio::runtime::Runtime;

/// Benchmark in-memory parsing across worker counts
fn bench_in_memory_workers(c: &mut Criterion) {
    let mut group = c.benchmark_group("in_memory_workers");
    let runtime = Runtime::new().unwrap();
    let lines = common::generate_lines(10_000, 20);
    group.throughput(Throughput::Elements(lines.len() as u64));

    for workers in [1, 2, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(workers), &workers, |b, &workers| {
            b.to_async(&runtime).iter(|| {
                let lines = lines.clone();
                async move {
                    let sum = Arc::new(ThreadSafeSum::new());
                    let state = Arc::new(CancellationState::new());
                    let mut parser = Parser::from_lines(lines, sum.clone(), state).with_workers(workers);
                    parser.run().await;
                    black_box(sum.value())
                }
            });
        });
    }

    group.finish();
}

/// Benchmark reading and parsing a file end to end
fn bench_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("file");
    let runtime = Runtime::new().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("numbers.txt");
    common::generate_file(&path, 50_000, 20).unwrap();

    for workers in [1, 4] {
        group.bench_with_input(BenchmarkId::from_parameter(workers), &workers, |b, &workers| {
            b.to_async(&runtime).iter(|| {
                let path = path.clone();
                async move {
                    let sum = Arc::new(ThreadSafeSum::new());
                    let state = Arc::new(CancellationState::new());
                    let mut parser = Parser::from_path(path, sum.clone(), state)
                        .unwrap()
                        .with_workers(workers);
                    parser.run().await;
                    black_box(sum.value())
                }
            });
        });
    }

    group.finish();
}

/// Benchmark the tokenizer and sign normalization alone
fn bench_tokenize(c: &mut Criterion) {
    let lines = common::generate_lines(1_000, 20);

    c.bench_function("tokenize_and_parse", |b| {
        b.iter(|| {
            let mut total = 0i64;
            for line in &lines {
                for token in tokenize(line) {
                    total = total.wrapping_add(parse_token(token).unwrap());
                }
            }
            black_box(total)
        });
    });
}

criterion_group!(benches, bench_in_memory_workers, bench_file, bench_tokenize);
criterion_main!(benches);
