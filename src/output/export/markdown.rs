//! Markdown export of report tables
//!
//! **Output** (`summary_tables.md`):
//! ```text
//! # Results tables
//!
//! ## Task A - Irregular loop and schedule
//!
//! ### Best time per configuration
//!
//! | N | K | Best schedule | Chunk | Threads | Time (s) | Speedup |
//! |---|---|---|---|---|---|---|
//! | 1,000,000 | 24 | guided | 16 | 8 | 0.1021 | 7.12x |
//! ```

use std::fs;
use std::path::Path;

use super::{Table, TableExporter};
use crate::error::{ReportError, Result};

/// Configuration for Markdown export
///
/// # Example
///
/// ```rust,ignore
/// let config = MarkdownConfig {
///     title: "Benchmark results".to_string(),
///     right_align: true,
/// };
/// ```
#[derive(Debug, Clone)]
pub struct MarkdownConfig {
    /// Top-level heading of the document (default: `Results tables`)
    pub title: String,

    /// Right-align every column after the first (default: false)
    pub right_align: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            title: "Results tables".to_string(),
            right_align: false,
        }
    }
}

/// Writes tables as GitHub-flavoured Markdown
#[derive(Debug, Clone, Default)]
pub struct MarkdownExporter {
    pub config: MarkdownConfig,
}

impl MarkdownExporter {
    pub fn new(config: MarkdownConfig) -> Self {
        Self { config }
    }

    fn push_table(&self, out: &mut String, table: &Table) {
        out.push_str(&format!("### {}\n\n", table.caption));
        out.push_str(&format!("| {} |\n", table.headers.join(" | ")));

        let separators: Vec<&str> = (0..table.headers.len())
            .map(|i| if self.config.right_align && i > 0 { "--:" } else { "---" })
            .collect();
        out.push_str(&format!("|{}|\n", separators.join("|")));

        for row in &table.rows {
            out.push_str(&format!("| {} |\n", row.join(" | ")));
        }
    }
}

impl TableExporter for MarkdownExporter {
    type Error = ReportError;

    fn render(&self, tables: &[Table]) -> String {
        let mut out = format!("# {}\n", self.config.title);
        let mut section: Option<&str> = None;

        for table in tables {
            if section != Some(table.section.as_str()) {
                out.push_str(&format!("\n## {}\n", table.section));
                section = Some(table.section.as_str());
            }
            out.push('\n');
            self.push_table(&mut out, table);
        }
        out
    }

    fn export(&self, tables: &[Table], path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.render(tables)).map_err(|e| ReportError::io(path, e))?;
        log::debug!("wrote {} table(s) to {}", tables.len(), path.display());
        Ok(())
    }
}
