/*!
 * Parallel Filter Benchmarks
 *
 * Shared-lock and partition-order merges against the single-threaded run
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sync_lab::filter::{
    expel_ordered, expel_parallel, expel_sequential, ExpulsionList, Thresholds,
};
use sync_lab::RosterGenerator;

const ROSTER_SIZE: usize = 100_000;

fn bench_filter(c: &mut Criterion) {
    let roster = RosterGenerator::from_seed(42).generate(ROSTER_SIZE);
    let thresholds = Thresholds::new(2, 5);
    let mut group = c.benchmark_group("filter");

    group.bench_function("sequential", |b| {
        b.iter(|| {
            let list = ExpulsionList::new();
            expel_sequential(black_box(&roster), thresholds, &list).ok();
            black_box(list.len())
        });
    });

    for parts in [2usize, 4, 8] {
        group.bench_with_input(BenchmarkId::new("shared_lock", parts), &parts, |b, &parts| {
            b.iter(|| {
                let list = ExpulsionList::new();
                expel_parallel(black_box(&roster), thresholds, parts, &list).ok();
                black_box(list.len())
            });
        });

        group.bench_with_input(BenchmarkId::new("partition_order", parts), &parts, |b, &parts| {
            b.iter(|| black_box(expel_ordered(black_box(&roster), thresholds, parts).ok()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
