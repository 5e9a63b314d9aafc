//! Common utilities for integration tests

pub mod fixtures;
pub mod recording;

// Re-export commonly used items
pub use fixtures::{histogram_rows, schedule_rows, write_histogram_csv, write_inputs, write_schedule_csv};
pub use recording::RecordingRenderer;
