//! Performance benchmarks for the aggregation core
//!
//! # What We're Measuring
//!
//! 1. **Group-by** (`aggregate`): one pass, one accumulator per distinct
//!    (N, K, schedule, chunk, threads) key
//! 2. **Per-thread statistics** (`by_threads`): group-by plus a sort on the
//!    thread count, the shape used by every chart series
//! 3. **Summary table**: group-by, best-row lookup and speedup for every
//!    (N, K)
//!
//! Time should scale linearly with the number of rows.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench --bench aggregation
//!
//! # Only the group-by
//! cargo bench --bench aggregation aggregate
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use parbench_rs::data::{LoopVariant, Schedule, ScheduleRecord};
use parbench_rs::output::export::schedule_summary;
use parbench_rs::stats::{aggregate, by_threads};

/// Synthetic task A table with `trials` repetitions of every configuration
fn table(trials: usize) -> Vec<ScheduleRecord> {
    let mut rows = Vec::new();
    for n in [1_000_000u64, 10_000_000, 100_000_000] {
        for k in [16u32, 20, 24, 28] {
            for trial in 0..trials {
                let jitter = trial as f64 * 1e-3;
                rows.push(ScheduleRecord {
                    n,
                    k,
                    variant: LoopVariant::Sequential,
                    schedule: None,
                    chunk: 0,
                    threads: 1,
                    time: 1.0 + jitter,
                });
                for schedule in Schedule::ALL {
                    for chunk in [1u32, 4, 16, 64] {
                        for threads in [1u32, 2, 4, 8, 16] {
                            rows.push(ScheduleRecord {
                                n,
                                k,
                                variant: LoopVariant::Parallel,
                                schedule: Some(schedule),
                                chunk,
                                threads,
                                time: 1.0 / threads as f64 + jitter,
                            });
                        }
                    }
                }
            }
        }
    }
    rows
}

fn benchmark_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for trials in [1usize, 5, 20] {
        let rows = table(trials);
        group.throughput(Throughput::Elements(rows.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows.len()), &rows, |b, rows| {
            b.iter(|| aggregate(black_box(rows), |r: &ScheduleRecord| (r.n, r.k, r.schedule, r.chunk, r.threads)))
        });
    }

    group.finish();
}

fn benchmark_by_threads(c: &mut Criterion) {
    let rows = table(5);
    c.bench_function("by_threads/guided_chunk16", |b| {
        b.iter(|| {
            by_threads(
                black_box(&rows)
                    .iter()
                    .filter(|r| r.schedule == Some(Schedule::Guided) && r.chunk == 16),
            )
        })
    });
}

fn benchmark_summary(c: &mut Criterion) {
    let rows = table(5);
    c.bench_function("schedule_summary", |b| {
        b.iter(|| schedule_summary(black_box(&rows)))
    });
}

criterion_group!(benches, benchmark_aggregate, benchmark_by_threads, benchmark_summary);
criterion_main!(benches);
