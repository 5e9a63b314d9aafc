//! Summary tables: the best configuration found for every problem size
//!
//! - Task A: per (N, K), the fastest (schedule, chunk, threads) among the
//!   parallel runs
//! - Task B: per (N, B) and variant, the fastest thread count
//!
//! Each row carries its speedup against the matching sequential baseline.
//! Configurations without a baseline or without parallel runs are left out.

use super::Table;
use crate::data::{distinct_sorted, HistogramRecord, HistogramVariant, LoopVariant, ScheduleRecord};
use crate::output::format::format_count;
use crate::stats::{aggregate_iter, baseline_mean, by_threads, min_by};

pub const SCHEDULE_SECTION: &str = "Task A - Irregular loop and schedule";
pub const HISTOGRAM_SECTION: &str = "Task B - Histogram";

/// Best parallel configuration per (N, K)
pub fn schedule_summary(rows: &[ScheduleRecord]) -> Table {
    let mut table = Table::new(
        SCHEDULE_SECTION,
        "Best time per configuration",
        &["N", "K", "Best schedule", "Chunk", "Threads", "Time (s)", "Speedup"],
    );

    let stats = aggregate_iter(
        rows.iter().filter(|r| r.variant == LoopVariant::Parallel),
        |r: &ScheduleRecord| (r.n, r.k, r.schedule, r.chunk, r.threads),
    );

    let ks = distinct_sorted(rows, |r| r.k);
    for n in distinct_sorted(rows, |r| r.n) {
        for &k in &ks {
            let candidates: Vec<_> = stats
                .iter()
                .filter(|s| s.key.0 == n && s.key.1 == k)
                .collect();

            let Ok(best) = min_by(&candidates, |s| s.mean) else {
                continue;
            };
            let Some(seq) = baseline_mean(rows.iter().filter(|r| r.n == n && r.k == k)) else {
                log::debug!("summary: N={} K={} has no sequential baseline", n, k);
                continue;
            };

            let (_, _, schedule, chunk, threads) = best.key;
            let ratio = seq / best.mean;
            if !ratio.is_finite() {
                log::debug!(
                    "summary: N={} K={} {:?} chunk={} threads={} has mean time {}, speedup {}",
                    n,
                    k,
                    schedule,
                    chunk,
                    threads,
                    best.mean,
                    ratio
                );
            }

            table.push_row(vec![
                format_count(n),
                k.to_string(),
                schedule.map_or("none", |s| s.as_str()).to_string(),
                chunk.to_string(),
                threads.to_string(),
                format!("{:.4}", best.mean),
                format!("{:.2}x", ratio),
            ]);
        }
    }

    table
}

/// Best thread count per (N, B) and variant
pub fn histogram_summary(rows: &[HistogramRecord]) -> Table {
    let mut table = Table::new(
        HISTOGRAM_SECTION,
        "Variant comparison (best time per variant)",
        &["N", "B", "Variant", "Threads", "Time (s)", "Speedup"],
    );

    let bs = distinct_sorted(rows, |r| r.b);
    for n in distinct_sorted(rows, |r| r.n) {
        for &b in &bs {
            let subset: Vec<&HistogramRecord> =
                rows.iter().filter(|r| r.n == n && r.b == b).collect();

            let Some(seq) = baseline_mean(subset.iter().copied()) else {
                if !subset.is_empty() {
                    log::debug!("summary: N={} B={} has no sequential baseline", n, b);
                }
                continue;
            };

            for variant in HistogramVariant::PARALLEL {
                let stats = by_threads(subset.iter().copied().filter(|r| r.variant == variant));
                let Ok(best) = min_by(&stats, |s| s.mean) else {
                    continue;
                };

                let ratio = seq / best.mean;
                if !ratio.is_finite() {
                    log::debug!(
                        "summary: N={} B={} {} threads={} has mean time {}, speedup {}",
                        n,
                        b,
                        variant,
                        best.key,
                        best.mean,
                        ratio
                    );
                }

                table.push_row(vec![
                    format_count(n),
                    b.to_string(),
                    variant.to_string(),
                    best.key.to_string(),
                    format!("{:.6}", best.mean),
                    format!("{:.2}x", ratio),
                ]);
            }
        }
    }

    table
}

/// Both summary tables, task A first
pub fn summary_tables(schedule_rows: &[ScheduleRecord], histogram_rows: &[HistogramRecord]) -> Vec<Table> {
    vec![schedule_summary(schedule_rows), histogram_summary(histogram_rows)]
}
