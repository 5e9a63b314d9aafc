//! Export of textual report tables
//!
//! # Architecture
//!
//! Report builders produce format-independent [`Table`]s; the [`TableExporter`]
//! trait turns them into a file. Adding a format means adding an
//! implementation next to [`markdown`], without touching the builders.
//!
//! | Format   | Module        |
//! |----------|---------------|
//! | Markdown | [`markdown`]  |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use parbench_rs::output::export::{summary, MarkdownExporter, TableExporter};
//!
//! let tables = summary::summary_tables(&schedule_rows, &histogram_rows);
//! MarkdownExporter::default().export(&tables, "plots/summary_tables.md")?;
//! ```

pub mod markdown;
pub mod summary;

pub use markdown::{MarkdownConfig, MarkdownExporter};
pub use summary::{histogram_summary, schedule_summary, summary_tables};

use std::path::Path;

/// A titled table of preformatted cells
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Section heading the table is filed under (e.g. `Task A - Irregular loop`)
    pub section: String,

    /// Caption printed right above the table
    pub caption: String,

    pub headers: Vec<String>,

    /// One entry per row, each with `headers.len()` cells
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(section: impl Into<String>, caption: impl Into<String>, headers: &[&str]) -> Self {
        Self {
            section: section.into(),
            caption: caption.into(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.headers.len());
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Abstraction over every textual export format
///
/// # Associated type `Error`
///
/// Each format reports its own error type, so callers can react to it
/// without boxing.
pub trait TableExporter {
    type Error: std::error::Error;

    /// Render `tables` in order into a single document
    fn render(&self, tables: &[Table]) -> String;

    /// Render `tables` and write the document to `path`, overwriting it
    fn export(&self, tables: &[Table], path: impl AsRef<Path>) -> Result<(), Self::Error>;
}
