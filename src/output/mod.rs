//! Report artifacts: chart images and summary tables
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── format.rs           ← number formatting shared by both sides
//! ├── visualization/      ← charts (description, builders, plotters renderer)
//! └── export/             ← textual tables (summary builders, Markdown)
//! ```
//!
//! # Design Philosophy
//!
//! Both sub-modules split building from persisting:
//! - builders are pure functions of a table and the report settings
//! - renderers / exporters own every file written
//!
//! That keeps the report content testable without touching the disk.

pub mod export;
pub mod format;
pub mod visualization;

// Re-export commonly used items for convenience
pub use export::{MarkdownExporter, Table, TableExporter};
pub use format::format_count;
pub use visualization::{Chart, ChartRenderer, PlotConfig, PlottersRenderer};
