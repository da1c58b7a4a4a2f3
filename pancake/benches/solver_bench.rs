//! Solver benchmarks using criterion.
//!
//! Run with: cargo bench --bench solver_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pancake::{solve, CaseReader};

/// Deterministic pseudo-random row.
fn make_row(len: usize, seed: u64) -> Vec<bool> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            state >> 63 == 1
        })
        .collect()
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");

    for &len in &[1_000usize, 100_000] {
        for &width in &[3usize, 100] {
            let row = make_row(len, 42);
            group.throughput(Throughput::Elements(len as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("width_{width}"), len),
                &row,
                |b, row| {
                    b.iter(|| {
                        let mut pancakes = row.clone();
                        black_box(solve(&mut pancakes, width))
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_case");

    let row = make_row(100_000, 7);
    let source: String = row
        .iter()
        .map(|&up| if up { '+' } else { '-' })
        .chain(" 10".chars())
        .collect();
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("100k_pancakes", |b| {
        b.iter(|| black_box(CaseReader::new(&source).read_case()));
    });

    group.finish();
}

criterion_group!(benches, bench_solve, bench_read);
criterion_main!(benches);
