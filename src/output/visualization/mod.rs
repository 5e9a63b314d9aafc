//! Charts of benchmark results
//!
//! Report builders turn a measurement table into a [`Chart`] description;
//! a [`ChartRenderer`] persists it. The default renderer uses `plotters`.
//!
//! # Organization
//!
//! - **chart**: renderer-independent description (`Chart`, `Panel`, `Series`)
//! - **config**: shared plot styling (`PlotConfig`)
//! - **render**: `ChartRenderer` trait and the plotters implementation
//! - **schedule**: task A builders (scheduling policies)
//! - **histogram**: task B builders (synchronization strategies)
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use parbench_rs::output::visualization::{
//!     schedule_speedup_chart, ChartRenderer, PlottersRenderer,
//! };
//!
//! let chart = schedule_speedup_chart(&rows, &ReportSettings::default());
//! if !chart.is_empty() {
//!     PlottersRenderer::default().render(&chart, Path::new("plots/task-a_speedup.png"))?;
//! }
//! ```
//!
//! # Which builder produces which file
//!
//! | Chart | Function | File |
//! |-------|----------|------|
//! | Schedule comparison | `schedule_comparison_charts` | `task-a_schedule_N{N}` |
//! | Chunk-size impact | `chunk_impact_chart` | `task-a_chunk_impact` |
//! | Task A speedup | `schedule_speedup_chart` | `task-a_speedup` |
//! | Variant comparison | `variant_comparison_charts` | `task-b_variants_N{N}` |
//! | Scalability | `scalability_chart` | `task-b_scalability` |
//! | Task B speedup | `histogram_speedup_chart` | `task-b_speedup` |

pub mod chart;
pub mod config;
pub mod histogram;
pub mod render;
pub mod schedule;

pub use chart::{Chart, Panel, PanelKind, ReferenceLine, Series, SeriesPoint};
pub use config::PlotConfig;
pub use histogram::{histogram_speedup_chart, scalability_chart, variant_comparison_charts};
pub use render::{ChartRenderer, PlottersRenderer};
pub use schedule::{chunk_impact_chart, schedule_comparison_charts, schedule_speedup_chart};
