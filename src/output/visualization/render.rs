//! Chart rendering with `plotters`
//!
//! [`ChartRenderer`] is the seam between report builders and the drawing
//! backend. [`PlottersRenderer`] persists a [`Chart`] as a PNG bitmap or an
//! SVG document, chosen by the extension of the output path.
//!
//! # Layout
//!
//! ```text
//! ┌──────────────────────── figure title ────────────────────────┐
//! │ ┌── panel 1 ──┐   ┌── panel 2 ──┐   ...   ┌── panel n ──┐   │
//! │ │ series      │   │             │         │             │   │
//! │ │ references  │   │             │         │             │   │
//! │ └─────────────┘   └─────────────┘         └─────────────┘   │
//! └──────────────────────────────────────────────────────────────┘
//! ```

use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

use super::chart::{Chart, Panel, PanelKind, ReferenceLine};
use super::config::PlotConfig;
use crate::error::{ReportError, Result};

/// Persists a chart description as an image
pub trait ChartRenderer {
    /// Render `chart` to `path`, overwriting any existing file
    fn render(&self, chart: &Chart, path: &Path) -> Result<()>;
}

/// Renderer backed by `plotters` (`.svg` → vector, anything else → bitmap)
#[derive(Clone, Default)]
pub struct PlottersRenderer {
    pub config: PlotConfig,
}

impl PlottersRenderer {
    pub fn new(config: PlotConfig) -> Self {
        Self { config }
    }
}

impl ChartRenderer for PlottersRenderer {
    fn render(&self, chart: &Chart, path: &Path) -> Result<()> {
        let size = self.config.image_size(drawn_panels(chart).len());

        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("png");

        let outcome = match ext {
            "svg" => draw_chart(SVGBackend::new(path, size), chart, &self.config),
            _ => draw_chart(BitMapBackend::new(path, size), chart, &self.config),
        };

        outcome.map_err(|e| ReportError::Render {
            name: chart.name.clone(),
            message: e.to_string(),
        })
    }
}

// =================================================================================================
// Private Plot Implementations
// =================================================================================================

/// Split the figure into one area per panel and draw each one
fn draw_chart<DB: DrawingBackend>(
    backend: DB,
    chart: &Chart,
    config: &PlotConfig,
) -> std::result::Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let panels = drawn_panels(chart);
    let body = root.titled(&chart.title, ("sans-serif", config.title_font_size).into_font())?;
    let areas = body.split_evenly((1, panels.len().max(1)));

    for (panel, area) in panels.into_iter().zip(areas.iter()) {
        match panel.kind {
            PanelKind::Lines => draw_line_panel(area, panel, config)?,
            PanelKind::Bars => draw_bar_panel(area, panel, config)?,
        }
    }

    root.present()?;
    Ok(())
}

/// Panels with something to draw; the others are left out of the layout
fn drawn_panels(chart: &Chart) -> Vec<&Panel> {
    chart
        .panels
        .iter()
        .filter(|p| !p.series.is_empty() || !p.reference_lines.is_empty())
        .collect()
}

/// Decimals needed to tell apart the default y ticks on `0..y_max`
fn label_precision(y_max: f64) -> usize {
    if !y_max.is_finite() || y_max <= 0.0 {
        return 3;
    }
    let digits = (-(y_max / 10.0).log10()).ceil() + 1.0;
    digits.clamp(0.0, 9.0) as usize
}

/// Lines with markers and error bars over a numeric thread axis
fn draw_line_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    config: &PlotConfig,
) -> std::result::Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let x_max = panel.x_max() as f64 + 1.0;
    let y_max = (panel.y_max() * 1.1).max(1e-9);
    let precision = label_precision(y_max);
    let threads = panel.thread_counts();

    // ticks fall on every integer; only measured thread counts get a label
    let thread_label = |x: &f64| {
        let t = x.round();
        if (x - t).abs() < 1e-6 && t >= 0.0 && threads.contains(&(t as u32)) {
            format!("{}", t as u32)
        } else {
            String::new()
        }
    };

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, ("sans-serif", config.caption_font_size).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)?;

    let mut mesh = chart.configure_mesh();
    if !config.show_grid {
        mesh.disable_mesh();
    }
    mesh.x_desc(&panel.x_label)
        .y_desc(&panel.y_label)
        .x_labels(x_max as usize + 1)
        .x_label_formatter(&thread_label)
        .y_label_formatter(&|y| format!("{:.*}", precision, y))
        .draw()?;

    for (idx, series) in panel.series.iter().enumerate() {
        let color = config.series_color(series.color_key.as_deref(), idx);
        let points: Vec<(f64, f64)> = series.points.iter().map(|p| (p.x as f64, p.y)).collect();

        chart
            .draw_series(LineSeries::new(
                points.iter().copied(),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(series.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));

        chart.draw_series(
            points
                .iter()
                .map(|&p| Circle::new(p, config.marker_size, color.filled())),
        )?;

        chart.draw_series(series.points.iter().filter_map(|p| {
            p.error.map(|e| {
                ErrorBar::new_vertical(p.x as f64, p.y - e, p.y, p.y + e, color.filled(), 8)
            })
        }))?;
    }

    for (idx, line) in panel.reference_lines.iter().enumerate() {
        let (color, path) = match line {
            ReferenceLine::Horizontal { y, color_key, .. } => (
                config.series_color(color_key.as_deref(), idx),
                vec![(0.0, *y), (x_max, *y)],
            ),
            ReferenceLine::Path { points, .. } => (
                BLACK,
                points.iter().map(|(x, y)| (*x as f64, *y)).collect(),
            ),
        };
        let style = ShapeStyle::from(&color.mix(0.7)).stroke_width(1);

        chart
            .draw_series(DashedLineSeries::new(path, 10, 5, style))?
            .label(line.label())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
    }

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}

/// One bar per thread count, categories evenly spaced
fn draw_bar_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    config: &PlotConfig,
) -> std::result::Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let categories = panel.categories();
    let n = categories.len().max(1);
    let x_range = -0.5..(n as f64 - 0.5);
    let y_max = (panel.y_max() * 1.1).max(1e-9);
    let precision = label_precision(y_max);

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, ("sans-serif", config.caption_font_size).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range.clone(), 0.0..y_max)?;

    let category_label = |x: &f64| {
        let i = x.round();
        if (x - i).abs() < 1e-6 && i >= 0.0 {
            categories
                .get(i as usize)
                .map(|t| t.to_string())
                .unwrap_or_default()
        } else {
            String::new()
        }
    };

    let mut mesh = chart.configure_mesh();
    if !config.show_grid {
        mesh.disable_mesh();
    }
    mesh.x_desc(&panel.x_label)
        .y_desc(&panel.y_label)
        .x_labels(n)
        .x_label_formatter(&category_label)
        .y_label_formatter(&|y| format!("{:.*}", precision, y))
        .draw()?;

    let n_series = panel.series.len().max(1) as f64;
    let slot = 0.8 / n_series;

    for (idx, series) in panel.series.iter().enumerate() {
        let color = config.series_color(series.color_key.as_deref(), idx);
        let offset = -0.4 + slot * idx as f64;

        let bars: Vec<(f64, f64, Option<f64>)> = series
            .points
            .iter()
            .filter_map(|p| {
                let i = categories.iter().position(|&c| c == p.x)?;
                Some((i as f64 + offset, p.y, p.error))
            })
            .collect();

        chart
            .draw_series(bars.iter().map(|&(left, y, _)| {
                Rectangle::new([(left, 0.0), (left + slot, y)], color.mix(0.8).filled())
            }))?
            .label(series.label.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.filled()));

        chart.draw_series(bars.iter().filter_map(|&(left, y, err)| {
            let centre = left + slot / 2.0;
            err.map(|e| ErrorBar::new_vertical(centre, y - e, y, y + e, BLACK.filled(), 8))
        }))?;
    }

    for (idx, line) in panel.reference_lines.iter().enumerate() {
        if let ReferenceLine::Horizontal { y, color_key, label } = line {
            let color = config.series_color(color_key.as_deref(), idx);
            let style = ShapeStyle::from(&color.mix(0.7)).stroke_width(1);
            chart
                .draw_series(DashedLineSeries::new(
                    vec![(x_range.start, *y), (x_range.end, *y)],
                    10,
                    5,
                    style,
                ))?
                .label(label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
        }
    }

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
