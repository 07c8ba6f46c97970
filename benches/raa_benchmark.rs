// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lychrel_check::engine::run;
use lychrel_check::kin::{highest_kin, kin_count, lowest_kin};
use lychrel_check::{Analyzer, DigitSequence};

const DIGIT_COUNTS: &[usize] = &[100, 1_000, 10_000];

/// The state 196 reaches after enough steps to have `digits` digits.
fn lychrel_state(digits: usize) -> DigitSequence {
    let mut n = DigitSequence::from_u64(196);
    while n.len() < digits {
        n = n.reverse_and_add();
    }
    n
}

fn bench_reverse_and_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("reverse_and_add");

    for &digits in DIGIT_COUNTS {
        let n = lychrel_state(digits);
        group.throughput(Throughput::Elements(n.len() as u64));
        group.bench_with_input(BenchmarkId::new("step", digits), &n, |bencher, n| {
            bencher.iter(|| black_box(n).reverse_and_add())
        });
        group.bench_with_input(BenchmarkId::new("is_palindrome", digits), &n, |bencher, n| {
            bencher.iter(|| black_box(n).is_palindrome())
        });
    }

    group.finish();
}

fn bench_kin(c: &mut Criterion) {
    let mut group = c.benchmark_group("kin");
    let n = lychrel_state(1_000);

    group.bench_function("lowest", |bencher| bencher.iter(|| lowest_kin(black_box(&n))));
    group.bench_function("highest", |bencher| bencher.iter(|| highest_kin(black_box(&n))));
    group.bench_function("count", |bencher| bencher.iter(|| kin_count(black_box(&n))));

    group.finish();
}

fn bench_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("records");
    group.sample_size(10);

    let record = DigitSequence::parse("1000206827388999999095750").unwrap();
    group.bench_function("run_293", |bencher| {
        bencher.iter(|| run(black_box(&record), 500, Some(0)))
    });

    // Cold: a fresh cache per pass. Warm: every lookup after the first pass hits.
    group.bench_function("verify_cold", |bencher| {
        bencher.iter(|| Analyzer::default().verify_records(..))
    });
    let warm = Analyzer::default();
    warm.verify_records(..);
    group.bench_function("verify_warm", |bencher| {
        bencher.iter(|| warm.verify_records(..))
    });

    group.finish();
}

criterion_group!(benches, bench_reverse_and_add, bench_kin, bench_records);
criterion_main!(benches);
