//! parbench-rs: charts and summary tables for parallel-loop benchmarks
//!
//! Turns the timing tables produced by two OpenMP experiments into a fixed
//! set of comparison charts and a Markdown summary.
//!
//! - **Task A**: irregular loop `v[i] = fib(i % K)` under static / dynamic /
//!   guided scheduling with several chunk sizes
//! - **Task B**: histogram of N values into B buckets, synchronized with a
//!   critical section, atomics, or thread-local copies merged at the end
//!
//! # Architecture
//!
//! The crate separates statistics from presentation:
//!
//! 1. **Data and statistics** are pure
//!    - [`data`] deserializes the tables into typed rows
//!    - [`stats`] groups, averages, selects best rows and derives speedups
//!
//! 2. **Output** sits behind narrow seams
//!    - report builders produce renderer-independent chart and table values
//!    - a [`ChartRenderer`](output::visualization::ChartRenderer) and a
//!      [`TableExporter`](output::export::TableExporter) persist them
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use parbench_rs::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let config = RunConfig::default()
//!     .input_dir("results")
//!     .output_dir("plots");
//!
//! let summary = Pipeline::default().run(&config)?;
//! println!("{} artifacts written", summary.written.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`config`]: input / output layout and report parameters
//! - [`data`]: measurement rows and table loading
//! - [`stats`]: aggregation, best-row selection, speedup
//! - [`output`]: charts (plotters) and summary tables (Markdown)
//! - [`pipeline`]: the end-to-end run

pub mod config;
pub mod data;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod stats;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use parbench_rs::prelude::*;
    //! ```
    pub use crate::config::{ImageFormat, ReportSettings, RunConfig};
    pub use crate::data::{
        HistogramRecord, HistogramVariant, LoopVariant, Measurement, Schedule, ScheduleRecord,
    };
    pub use crate::error::{ReportError, Result};
    pub use crate::output::visualization::{Chart, ChartRenderer, PlotConfig, PlottersRenderer};
    pub use crate::pipeline::{Pipeline, RunSummary};
    pub use crate::stats::{aggregate, baseline_mean, by_threads, min_by, speedup, GroupStats};
}
