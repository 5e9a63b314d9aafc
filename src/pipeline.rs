//! End-to-end run: load both tables, build every chart and the summary
//!
//! ```text
//! RunConfig ──► check inputs ──► load tables ──► create output dir
//!                                                   │
//!           ┌───────────────────────────────────────┘
//!           ▼
//!   task A charts ──► task B charts ──► summary tables ──► RunSummary
//! ```
//!
//! Missing or malformed inputs abort the run. Past that point every report
//! is isolated: a failure is logged and recorded, and the next report runs.

use std::fs;
use std::path::PathBuf;

use crate::config::RunConfig;
use crate::data::{load_histogram_table, load_schedule_table};
use crate::error::{ReportError, Result};
use crate::output::export::{summary_tables, MarkdownExporter, TableExporter};
use crate::output::visualization::{
    chunk_impact_chart, histogram_speedup_chart, scalability_chart, schedule_comparison_charts,
    schedule_speedup_chart, variant_comparison_charts, Chart, ChartRenderer, PlottersRenderer,
};

/// Outcome of one run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    /// Files written, in generation order
    pub written: Vec<PathBuf>,

    /// Charts not rendered because none of their panels had data
    pub skipped: Vec<String>,

    /// Reports that failed, with the error message
    pub failed: Vec<(String, String)>,
}

impl RunSummary {
    /// True when every report was produced
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty() && self.failed.is_empty()
    }
}

/// Orchestrates loading, chart building and report writing
pub struct Pipeline<R: ChartRenderer> {
    renderer: R,
    exporter: MarkdownExporter,
}

impl Default for Pipeline<PlottersRenderer> {
    fn default() -> Self {
        Self::new(PlottersRenderer::default())
    }
}

impl<R: ChartRenderer> Pipeline<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            exporter: MarkdownExporter::default(),
        }
    }

    /// Builder pattern: set the summary exporter
    pub fn with_exporter(mut self, exporter: MarkdownExporter) -> Self {
        self.exporter = exporter;
        self
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Run every report described by `config`
    ///
    /// # Errors
    ///
    /// Only fatal errors are returned: a missing input table
    /// ([`ReportError::MissingInput`]), a malformed one ([`ReportError::Csv`]),
    /// or an output directory that cannot be created. Per-report failures are
    /// collected in [`RunSummary::failed`].
    pub fn run(&self, config: &RunConfig) -> Result<RunSummary> {
        // both inputs are checked before anything is read
        for path in [config.schedule_path(), config.histogram_path()] {
            if !path.exists() {
                return Err(ReportError::MissingInput { path });
            }
        }

        log::info!("loading data");
        let schedule_rows = load_schedule_table(&config.schedule_path())?;
        let histogram_rows = load_histogram_table(&config.histogram_path())?;
        log::info!(
            "loaded {} task A rows, {} task B rows",
            schedule_rows.len(),
            histogram_rows.len()
        );

        fs::create_dir_all(&config.output_dir)
            .map_err(|e| ReportError::io(&config.output_dir, e))?;

        let settings = &config.settings;
        let mut summary = RunSummary::default();

        log::info!("generating task A charts");
        let mut charts = schedule_comparison_charts(&schedule_rows, settings);
        charts.push(chunk_impact_chart(&schedule_rows, settings));
        charts.push(schedule_speedup_chart(&schedule_rows, settings));
        for chart in &charts {
            self.emit_chart(chart, config, &mut summary);
        }

        log::info!("generating task B charts");
        let mut charts = variant_comparison_charts(&histogram_rows);
        charts.push(scalability_chart(&histogram_rows, settings));
        charts.push(histogram_speedup_chart(&histogram_rows, settings));
        for chart in &charts {
            self.emit_chart(chart, config, &mut summary);
        }

        log::info!("generating summary tables");
        let path = config.report_path();
        let tables = summary_tables(&schedule_rows, &histogram_rows);
        match self.exporter.export(&tables, &path) {
            Ok(()) => {
                log::info!("saved {}", config.report_file);
                summary.written.push(path);
            }
            Err(e) => {
                log::warn!("{}: {}", config.report_file, e);
                summary.failed.push((config.report_file.clone(), e.to_string()));
            }
        }

        log::info!(
            "{} artifact(s) saved in {}/",
            summary.written.len(),
            config.output_dir.display()
        );
        Ok(summary)
    }

    /// Render one chart, recording the outcome instead of propagating it
    fn emit_chart(&self, chart: &Chart, config: &RunConfig, summary: &mut RunSummary) {
        if chart.is_empty() {
            log::info!("{}: no data to plot, skipped", chart.name);
            summary.skipped.push(chart.name.clone());
            return;
        }

        let path = config.chart_path(&chart.name);
        match self.renderer.render(chart, &path) {
            Ok(()) => {
                log::info!(
                    "saved {}",
                    path.file_name().map_or_else(
                        || chart.name.clone(),
                        |f| f.to_string_lossy().into_owned()
                    )
                );
                summary.written.push(path);
            }
            Err(e) => {
                log::warn!("{}: {}", chart.name, e);
                summary.failed.push((chart.name.clone(), e.to_string()));
            }
        }
    }
}
