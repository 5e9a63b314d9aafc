//! Renderer-independent chart description
//!
//! Report builders produce a [`Chart`]: a titled row of panels, each holding
//! data series and reference lines. The description carries no styling beyond
//! a colour key, so the same chart can be rendered by plotters, inspected in a
//! test, or handed to another backend.
//!
//! ```text
//! Chart ── title, file stem
//!  └── Panel (1..n, laid out left to right)
//!       ├── Series (label, colour key, points with optional error bar)
//!       └── ReferenceLine (horizontal baseline or ideal-speedup path)
//! ```

use crate::stats::{GroupStats, SpeedupPoint};

/// One (x, y) point with an optional symmetric error
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    /// Thread count
    pub x: u32,
    pub y: f64,
    /// Half-height of the error bar; `None` draws no bar
    pub error: Option<f64>,
}

/// A labelled data series
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    /// Key into the colour table of `PlotConfig` (e.g. `"guided"`);
    /// `None` falls back to the palette by position
    pub color_key: Option<String>,
    pub points: Vec<SeriesPoint>,
}

impl Series {
    /// Series of mean times with std-dev error bars, one point per thread count
    pub fn from_stats(label: impl Into<String>, stats: &[GroupStats<u32>]) -> Self {
        Self {
            label: label.into(),
            color_key: None,
            points: stats
                .iter()
                .map(|s| SeriesPoint {
                    x: s.key,
                    y: s.mean,
                    error: s.error_bar(),
                })
                .collect(),
        }
    }

    /// Speedup curve, no error bars
    pub fn from_speedup(label: impl Into<String>, points: &[SpeedupPoint]) -> Self {
        Self {
            label: label.into(),
            color_key: None,
            points: points
                .iter()
                .map(|p| SeriesPoint {
                    x: p.threads,
                    y: p.speedup,
                    error: None,
                })
                .collect(),
        }
    }

    pub fn with_color_key(mut self, key: impl Into<String>) -> Self {
        self.color_key = Some(key.into());
        self
    }

    /// Largest y reached, error bar included
    pub fn y_max(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.y + p.error.unwrap_or(0.0))
            .filter(|y| y.is_finite())
            .fold(0.0, f64::max)
    }
}

/// Non-data line drawn for reference
#[derive(Debug, Clone, PartialEq)]
pub enum ReferenceLine {
    /// Horizontal line at `y` across the whole panel (sequential baseline)
    Horizontal {
        label: String,
        y: f64,
        color_key: Option<String>,
    },
    /// Polyline through `points` (ideal speedup)
    Path { label: String, points: Vec<(u32, f64)> },
}

impl ReferenceLine {
    pub fn label(&self) -> &str {
        match self {
            ReferenceLine::Horizontal { label, .. } | ReferenceLine::Path { label, .. } => label,
        }
    }
}

/// How the series of a panel are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    /// Lines with markers and error bars over a numeric thread axis
    Lines,
    /// One bar per thread count, categories in ascending order
    Bars,
}

/// One subplot
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: String,
    pub kind: PanelKind,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
    pub reference_lines: Vec<ReferenceLine>,
}

impl Panel {
    pub fn new(title: impl Into<String>, kind: PanelKind) -> Self {
        Self {
            title: title.into(),
            kind,
            x_label: "Threads".to_string(),
            y_label: "Time (s)".to_string(),
            series: Vec::new(),
            reference_lines: Vec::new(),
        }
    }

    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    /// Append a series unless it has no points
    pub fn push_series(&mut self, series: Series) {
        if series.points.is_empty() {
            log::debug!("panel '{}': skipping empty series '{}'", self.title, series.label);
            return;
        }
        self.series.push(series);
    }

    pub fn push_reference(&mut self, line: ReferenceLine) {
        self.reference_lines.push(line);
    }

    /// True when the panel has no data series
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Largest thread count plotted in this panel
    pub fn x_max(&self) -> u32 {
        let from_series = self.series.iter().flat_map(|s| s.points.iter().map(|p| p.x));
        let from_refs = self.reference_lines.iter().flat_map(|r| match r {
            ReferenceLine::Path { points, .. } => points.iter().map(|(x, _)| *x).collect::<Vec<u32>>(),
            ReferenceLine::Horizontal { .. } => Vec::new(),
        });
        from_series.chain(from_refs).max().unwrap_or(1)
    }

    /// Largest y value plotted in this panel, error bars and references included
    pub fn y_max(&self) -> f64 {
        let from_series = self.series.iter().map(Series::y_max);
        let from_refs = self.reference_lines.iter().map(|r| match r {
            ReferenceLine::Horizontal { y, .. } => *y,
            ReferenceLine::Path { points, .. } => {
                points.iter().map(|(_, y)| *y).fold(0.0, f64::max)
            }
        });
        from_series
            .chain(from_refs)
            .filter(|y| y.is_finite())
            .fold(0.0, f64::max)
    }

    /// Distinct thread counts across series and reference paths, ascending
    /// (the labelled ticks of a line panel)
    pub fn thread_counts(&self) -> Vec<u32> {
        let mut xs = self.categories();
        for line in &self.reference_lines {
            if let ReferenceLine::Path { points, .. } = line {
                xs.extend(points.iter().map(|(x, _)| *x));
            }
        }
        xs.sort_unstable();
        xs.dedup();
        xs
    }

    /// Distinct thread counts across all series, ascending (bar categories)
    pub fn categories(&self) -> Vec<u32> {
        let mut xs: Vec<u32> = self
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.x))
            .collect();
        xs.sort_unstable();
        xs.dedup();
        xs
    }
}

/// A complete figure, persisted as one image
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    /// File stem, e.g. `task-a_schedule_N1000000`
    pub name: String,
    pub title: String,
    pub panels: Vec<Panel>,
}

impl Chart {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            panels: Vec::new(),
        }
    }

    /// True when no panel carries any data series
    pub fn is_empty(&self) -> bool {
        self.panels.iter().all(Panel::is_empty)
    }

    /// Labels of every series, panel by panel
    pub fn series_labels(&self) -> Vec<&str> {
        self.panels
            .iter()
            .flat_map(|p| p.series.iter().map(|s| s.label.as_str()))
            .collect()
    }
}
