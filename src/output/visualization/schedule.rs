//! Task A charts: loop-scheduling policies on an irregular workload
//!
//! # Available charts
//!
//! - [`schedule_comparison_charts`]: one image per N, one panel per K:
//!   static / dynamic / guided against the sequential baseline
//! - [`chunk_impact_chart`]: largest N, focus K: one series per chunk size
//!   for dynamic and guided
//! - [`schedule_speedup_chart`]: speedup of the preferred guided chunk for
//!   every (N, K) with a baseline, plus ideal speedup
//!
//! All builders are pure: same table in, same [`Chart`] out.

use super::chart::{Chart, Panel, PanelKind, ReferenceLine, Series};
use crate::config::ReportSettings;
use crate::data::{distinct_sorted, max_threads, Schedule, ScheduleRecord};
use crate::output::format::format_count;
use crate::stats::{baseline_mean, by_threads, ideal_speedup, speedup};

/// Horizontal reference line for a sequential baseline, in seconds
fn baseline_line(seconds: f64) -> ReferenceLine {
    ReferenceLine::Horizontal {
        label: format!("seq ({:.2}s)", seconds),
        y: seconds,
        color_key: Some("seq".to_string()),
    }
}

/// Row filter of the schedule comparison
///
/// Keeps the baseline, every static row, and dynamic / guided rows whose
/// chunk is one of `chunks`.
fn in_comparison(row: &ScheduleRecord, chunks: &[u32]) -> bool {
    match row.schedule {
        None => true,
        Some(Schedule::Static) => true,
        Some(_) => chunks.contains(&row.chunk),
    }
}

/// Schedule comparison, one chart per problem size
pub fn schedule_comparison_charts(
    rows: &[ScheduleRecord],
    settings: &ReportSettings,
) -> Vec<Chart> {
    let filtered: Vec<&ScheduleRecord> = rows
        .iter()
        .filter(|r| in_comparison(r, &settings.comparison_chunks))
        .collect();

    distinct_sorted(rows, |r| r.n)
        .into_iter()
        .map(|n| {
            let mut chart = Chart::new(
                format!("task-a_schedule_N{}", n),
                format!("Task A: schedule comparison (N = {})", format_count(n)),
            );

            let at_n: Vec<&ScheduleRecord> =
                filtered.iter().copied().filter(|r| r.n == n).collect();

            for k in distinct_sorted(&at_n, |r| r.k) {
                let subset: Vec<&ScheduleRecord> =
                    at_n.iter().copied().filter(|r| r.k == k).collect();

                let mut panel = Panel::new(format!("K = {}", k), PanelKind::Lines);

                match baseline_mean(subset.iter().copied()) {
                    Some(seq) => panel.push_reference(baseline_line(seq)),
                    None => log::debug!("N={} K={}: no sequential baseline", n, k),
                }

                for schedule in Schedule::ALL {
                    let stats = by_threads(
                        subset
                            .iter()
                            .copied()
                            .filter(|r| r.schedule == Some(schedule)),
                    );
                    panel.push_series(
                        Series::from_stats(schedule.as_str(), &stats)
                            .with_color_key(schedule.as_str()),
                    );
                }

                chart.panels.push(panel);
            }

            chart
        })
        .collect()
}

/// Chunk-size impact for dynamic and guided at the largest N and the focus K
pub fn chunk_impact_chart(rows: &[ScheduleRecord], settings: &ReportSettings) -> Chart {
    let n = rows.iter().map(|r| r.n).max().unwrap_or(0);
    let k = settings.focus_k;

    let mut chart = Chart::new(
        "task-a_chunk_impact",
        format!("Task A: chunk size impact (N = {}, K = {})", format_count(n), k),
    );

    for schedule in [Schedule::Dynamic, Schedule::Guided] {
        let subset: Vec<&ScheduleRecord> = rows
            .iter()
            .filter(|r| r.n == n && r.k == k && r.schedule == Some(schedule))
            .collect();

        let mut panel = Panel::new(format!("schedule({}, chunk)", schedule), PanelKind::Lines);

        // chunk 0 means "not applicable"
        for chunk in distinct_sorted(&subset, |r| r.chunk)
            .into_iter()
            .filter(|&c| c != 0)
        {
            let stats = by_threads(subset.iter().copied().filter(|r| r.chunk == chunk));
            panel.push_series(Series::from_stats(format!("chunk={}", chunk), &stats));
        }

        chart.panels.push(panel);
    }

    chart
}

/// Rows feeding the speedup curve of one (N, K)
///
/// Tries `settings.speedup_chunks` in order and returns the first chunk with
/// data, or `None` when no preferred chunk was measured.
pub fn speedup_source<'a>(
    rows: &[&'a ScheduleRecord],
    settings: &ReportSettings,
) -> Option<(u32, Vec<&'a ScheduleRecord>)> {
    settings.speedup_chunks.iter().find_map(|&chunk| {
        let data: Vec<&ScheduleRecord> = rows
            .iter()
            .copied()
            .filter(|r| r.schedule == Some(settings.speedup_schedule) && r.chunk == chunk)
            .collect();
        (!data.is_empty()).then_some((chunk, data))
    })
}

/// Speedup of the preferred schedule for every (N, K) with a baseline
pub fn schedule_speedup_chart(rows: &[ScheduleRecord], settings: &ReportSettings) -> Chart {
    let mut chart = Chart::new(
        "task-a_speedup",
        format!("Task A: speedup (schedule={})", settings.speedup_schedule),
    );
    let mut panel = Panel::new("Speedup", PanelKind::Lines).with_y_label("Speedup");

    let ks = distinct_sorted(rows, |r| r.k);
    for n in distinct_sorted(rows, |r| r.n) {
        for &k in &ks {
            let subset: Vec<&ScheduleRecord> =
                rows.iter().filter(|r| r.n == n && r.k == k).collect();
            if subset.is_empty() {
                continue;
            }

            let Some(seq) = baseline_mean(subset.iter().copied()) else {
                log::debug!("N={} K={}: no sequential baseline, speedup skipped", n, k);
                continue;
            };

            let Some((chunk, data)) = speedup_source(&subset, settings) else {
                log::debug!(
                    "N={} K={}: no {} run with chunk in {:?}, speedup skipped",
                    n,
                    k,
                    settings.speedup_schedule,
                    settings.speedup_chunks
                );
                continue;
            };
            log::debug!("N={} K={}: speedup from chunk={}", n, k, chunk);

            let stats = by_threads(data);
            panel.push_series(Series::from_speedup(
                format!("N={}, K={}", format_count(n), k),
                &speedup(seq, &stats),
            ));
        }
    }

    panel.push_reference(ReferenceLine::Path {
        label: "ideal speedup".to_string(),
        points: ideal_speedup(max_threads(rows))
            .iter()
            .map(|p| (p.threads, p.speedup))
            .collect(),
    });
    chart.panels.push(panel);
    chart
}
