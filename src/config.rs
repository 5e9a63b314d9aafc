//! Run configuration
//!
//! Two layers:
//!
//! - [`ReportSettings`]: the fixed parameters the reports are built around
//!   (which K / B to zoom into, which chunk sizes to compare)
//! - [`RunConfig`]: where tables are read from and artifacts written to
//!
//! Both default to the layout produced by the experiment scripts:
//!
//! ```text
//! results/task-a.csv  ─┐
//! results/task-b.csv  ─┴─► plots/*.png + plots/summary_tables.md
//! ```

use std::path::{Path, PathBuf};

use crate::data::Schedule;

/// Parameters fixed by the experiment design
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSettings {
    /// Chunk sizes kept for dynamic / guided in the schedule comparison
    /// (static is shown unfiltered)
    pub comparison_chunks: Vec<u32>,

    /// K of the chunk-size impact chart (default: 24)
    pub focus_k: u32,

    /// Schedule used for the task A speedup curve (default: guided)
    pub speedup_schedule: Schedule,

    /// Chunk sizes tried for the speedup curve, in order of preference
    pub speedup_chunks: Vec<u32>,

    /// B of the task B scalability and speedup charts (default: 256)
    pub focus_buckets: u32,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            comparison_chunks: vec![16, 1],
            focus_k: 24,
            speedup_schedule: Schedule::Guided,
            speedup_chunks: vec![16, 1],
            focus_buckets: 256,
        }
    }
}

/// Output image format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    #[default]
    Png,
    Svg,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

/// Input / output layout of one run
///
/// # Example
///
/// ```rust,ignore
/// let config = RunConfig::default()
///     .input_dir("bench/results")
///     .output_dir("bench/plots")
///     .image_format(ImageFormat::Svg);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Directory holding the input tables (default: `results`)
    pub input_dir: PathBuf,

    /// Directory receiving every artifact (default: `plots`)
    pub output_dir: PathBuf,

    /// Task A table file name (default: `task-a.csv`)
    pub schedule_file: String,

    /// Task B table file name (default: `task-b.csv`)
    pub histogram_file: String,

    /// Summary report file name (default: `summary_tables.md`)
    pub report_file: String,

    pub image_format: ImageFormat,

    pub settings: ReportSettings,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("results"),
            output_dir: PathBuf::from("plots"),
            schedule_file: "task-a.csv".to_string(),
            histogram_file: "task-b.csv".to_string(),
            report_file: "summary_tables.md".to_string(),
            image_format: ImageFormat::Png,
            settings: ReportSettings::default(),
        }
    }
}

impl RunConfig {
    /// Builder pattern: set input directory
    pub fn input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = dir.into();
        self
    }

    /// Builder pattern: set output directory
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Builder pattern: set image format
    pub fn image_format(mut self, format: ImageFormat) -> Self {
        self.image_format = format;
        self
    }

    /// Builder pattern: set report settings
    pub fn settings(mut self, settings: ReportSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn schedule_path(&self) -> PathBuf {
        self.input_dir.join(&self.schedule_file)
    }

    pub fn histogram_path(&self) -> PathBuf {
        self.input_dir.join(&self.histogram_file)
    }

    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(&self.report_file)
    }

    /// Path of the image for a chart named `stem`
    pub fn chart_path(&self, stem: &str) -> PathBuf {
        self.output_dir
            .join(Path::new(stem).with_extension(self.image_format.extension()))
    }
}
