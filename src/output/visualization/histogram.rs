//! Task B charts: synchronization strategies for a shared histogram
//!
//! - [`variant_comparison_charts`]: one image per N, one panel per B
//! - [`scalability_chart`]: bars per thread count for each variant
//! - [`histogram_speedup_chart`]: speedup of each variant with the ideal line
//!
//! The last two zoom into the largest N and `ReportSettings::focus_buckets`.

use super::chart::{Chart, Panel, PanelKind, ReferenceLine, Series};
use crate::config::ReportSettings;
use crate::data::{distinct_sorted, max_threads, HistogramRecord, HistogramVariant};
use crate::output::format::format_count;
use crate::stats::{baseline_mean, by_threads, ideal_speedup, speedup, GroupStats};

/// Rows at the largest N and the focus bucket count
fn focus_rows<'a>(
    rows: &'a [HistogramRecord],
    settings: &ReportSettings,
) -> (u64, Vec<&'a HistogramRecord>) {
    let n = rows.iter().map(|r| r.n).max().unwrap_or(0);
    let subset = rows
        .iter()
        .filter(|r| r.n == n && r.b == settings.focus_buckets)
        .collect();
    (n, subset)
}

fn variant_stats(rows: &[&HistogramRecord], variant: HistogramVariant) -> Vec<GroupStats<u32>> {
    by_threads(rows.iter().copied().filter(|r| r.variant == variant))
}

/// Variant comparison, one chart per problem size
pub fn variant_comparison_charts(rows: &[HistogramRecord]) -> Vec<Chart> {
    distinct_sorted(rows, |r| r.n)
        .into_iter()
        .map(|n| {
            let mut chart = Chart::new(
                format!("task-b_variants_N{}", n),
                format!("Task B: variant comparison (N = {})", format_count(n)),
            );

            let at_n: Vec<&HistogramRecord> = rows.iter().filter(|r| r.n == n).collect();

            for b in distinct_sorted(&at_n, |r| r.b) {
                let subset: Vec<&HistogramRecord> =
                    at_n.iter().copied().filter(|r| r.b == b).collect();

                let mut panel = Panel::new(format!("B = {}", b), PanelKind::Lines);

                match baseline_mean(subset.iter().copied()) {
                    // shown in milliseconds, the histogram runs are short
                    Some(seq) => panel.push_reference(ReferenceLine::Horizontal {
                        label: format!("seq ({:.2}ms)", seq * 1000.0),
                        y: seq,
                        color_key: Some("seq".to_string()),
                    }),
                    None => log::debug!("N={} B={}: no sequential baseline", n, b),
                }

                for variant in HistogramVariant::PARALLEL {
                    panel.push_series(
                        Series::from_stats(variant.as_str(), &variant_stats(&subset, variant))
                            .with_color_key(variant.as_str()),
                    );
                }

                chart.panels.push(panel);
            }

            chart
        })
        .collect()
}

/// Scalability of each variant as bars keyed by thread count
pub fn scalability_chart(rows: &[HistogramRecord], settings: &ReportSettings) -> Chart {
    let (n, subset) = focus_rows(rows, settings);

    let mut chart = Chart::new(
        "task-b_scalability",
        format!(
            "Task B: scalability by variant (N = {}, B = {})",
            format_count(n),
            settings.focus_buckets
        ),
    );

    let seq = baseline_mean(subset.iter().copied());

    for variant in HistogramVariant::PARALLEL {
        let mut panel = Panel::new(format!("Variant: {}", variant), PanelKind::Bars);
        panel.push_series(
            Series::from_stats(variant.as_str(), &variant_stats(&subset, variant))
                .with_color_key(variant.as_str()),
        );
        if let Some(seq) = seq {
            panel.push_reference(ReferenceLine::Horizontal {
                label: "seq".to_string(),
                y: seq,
                color_key: Some("seq".to_string()),
            });
        }
        chart.panels.push(panel);
    }

    chart
}

/// Speedup of each variant at the focus configuration
pub fn histogram_speedup_chart(rows: &[HistogramRecord], settings: &ReportSettings) -> Chart {
    let (n, subset) = focus_rows(rows, settings);

    let mut chart = Chart::new(
        "task-b_speedup",
        format!(
            "Task B: speedup (N = {}, B = {})",
            format_count(n),
            settings.focus_buckets
        ),
    );
    let mut panel = Panel::new("Speedup", PanelKind::Lines).with_y_label("Speedup");

    match baseline_mean(subset.iter().copied()) {
        Some(seq) => {
            for variant in HistogramVariant::PARALLEL {
                let stats = variant_stats(&subset, variant);
                panel.push_series(
                    Series::from_speedup(variant.as_str(), &speedup(seq, &stats))
                        .with_color_key(variant.as_str()),
                );
            }
        }
        None => log::debug!(
            "N={} B={}: no sequential baseline, speedup skipped",
            n,
            settings.focus_buckets
        ),
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
