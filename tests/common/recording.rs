//! Renderer double that records what it was asked to draw

use std::cell::RefCell;
use std::fs;
use std::path::Path;

use parbench_rs::error::{ReportError, Result};
use parbench_rs::output::visualization::{Chart, ChartRenderer};

/// Writes a placeholder file per chart and keeps every chart it received
#[derive(Default)]
pub struct RecordingRenderer {
    pub charts: RefCell<Vec<Chart>>,
}

impl RecordingRenderer {
    pub fn names(&self) -> Vec<String> {
        self.charts.borrow().iter().map(|c| c.name.clone()).collect()
    }

    pub fn chart(&self, name: &str) -> Option<Chart> {
        self.charts.borrow().iter().find(|c| c.name == name).cloned()
    }
}

impl ChartRenderer for RecordingRenderer {
    fn render(&self, chart: &Chart, path: &Path) -> Result<()> {
        fs::write(path, chart.title.as_bytes()).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.charts.borrow_mut().push(chart.clone());
        Ok(())
    }
}
