//! Error type shared by the loader, the report builders and the renderers

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning benchmark tables into charts and reports
#[derive(Debug, Error)]
pub enum ReportError {
    /// A required input table is absent. Fatal for the whole run.
    #[error("input file not found: {} (run the experiments first to produce it)", path.display())]
    MissingInput { path: PathBuf },

    /// A best-row lookup was asked to choose from zero rows
    #[error("empty selection: no rows match {context}")]
    EmptySelection { context: String },

    /// The table could not be parsed (missing column, non-numeric value, ...)
    #[error("malformed table {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The drawing backend failed while rendering a chart
    #[error("failed to render {name}: {message}")]
    Render { name: String, message: String },
}

impl ReportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for errors that must abort the run before any report is built
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::MissingInput { .. } | Self::Csv { .. })
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_message_names_file() {
        let err = ReportError::MissingInput {
            path: PathBuf::from("results/task-a.csv"),
        };
        let msg = err.to_string();
        assert!(msg.contains("results/task-a.csv"));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_empty_selection_is_recoverable() {
        let err = ReportError::EmptySelection {
            context: "N=1000, K=24".to_string(),
        };
        assert!(!err.is_fatal());
        assert!(err.to_string().contains("N=1000, K=24"));
    }
}
