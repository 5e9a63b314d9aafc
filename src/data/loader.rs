//! Delimited-text loading for the measurement tables

use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::Path;

use super::{HistogramRecord, ScheduleRecord};
use crate::error::{ReportError, Result};

/// Load every row of a headed, comma-delimited table
///
/// A missing file is reported as [`ReportError::MissingInput`] so the caller
/// can abort before any processing. Unknown columns are ignored; a missing or
/// non-numeric required column is a [`ReportError::Csv`].
pub fn load_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Err(ReportError::MissingInput {
            path: path.to_path_buf(),
        });
    }

    let file = std::fs::File::open(path).map_err(|e| ReportError::io(path, e))?;
    let rows = read_rows(file).map_err(|source| ReportError::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Load the task A (loop scheduling) table
pub fn load_schedule_table(path: &Path) -> Result<Vec<ScheduleRecord>> {
    load_table(path)
}

/// Load the task B (histogram) table
pub fn load_histogram_table(path: &Path) -> Result<Vec<HistogramRecord>> {
    load_table(path)
}

fn read_rows<T: DeserializeOwned, R: Read>(reader: R) -> std::result::Result<Vec<T>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader.deserialize().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{HistogramVariant, LoopVariant, Schedule};
    use std::fs;

    const TASK_A: &str = "\
task,variant,schedule,chunk,N,K,threads,time,checksum
A,seq,none,0,1000,24,1,0.800000,42
A,omp,static,0,1000,24,2,0.410000,42
A,omp,dynamic,16,1000,24,4,0.220000,42
";

    const TASK_B: &str = "\
task,variant,N,B,threads,time,checksum
B,seq,1000,256,1,0.004000,1000
B,critical,1000,256,2,0.009000,1000
B,local,1000,256,4,0.001000,1000
";

    #[test]
    fn test_read_schedule_rows() {
        let rows: Vec<ScheduleRecord> = read_rows(TASK_A.as_bytes()).unwrap();
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].variant, LoopVariant::Sequential);
        assert_eq!(rows[0].schedule, None);
        assert_eq!(rows[0].chunk, 0);

        assert_eq!(rows[2].schedule, Some(Schedule::Dynamic));
        assert_eq!(rows[2].chunk, 16);
        assert_eq!(rows[2].threads, 4);
        assert_eq!(rows[2].n, 1000);
        assert_eq!(rows[2].k, 24);
    }

    #[test]
    fn test_read_schedule_rows_blank_fields() {
        let data = "N,K,variant,schedule,chunk,threads,time\n2000,16,seq,,,1,1.5\n";
        let rows: Vec<ScheduleRecord> = read_rows(data.as_bytes()).unwrap();
        assert_eq!(rows[0].schedule, None);
        assert_eq!(rows[0].chunk, 0);
    }

    #[test]
    fn test_read_histogram_rows() {
        let rows: Vec<HistogramRecord> = read_rows(TASK_B.as_bytes()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].variant, HistogramVariant::Sequential);
        assert_eq!(rows[1].variant, HistogramVariant::Critical);
        assert_eq!(rows[2].b, 256);
    }

    #[test]
    fn test_non_numeric_time_is_malformed() {
        let data = "N,B,variant,threads,time\n1000,256,atomic,2,fast\n";
        let rows: std::result::Result<Vec<HistogramRecord>, _> = read_rows(data.as_bytes());
        assert!(rows.is_err());
    }

    #[test]
    fn test_load_table_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_schedule_table(&dir.path().join("task-a.csv")).unwrap_err();
        assert!(matches!(err, ReportError::MissingInput { .. }));
    }

    #[test]
    fn test_load_table_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("task-b.csv");
        fs::write(&path, TASK_B).unwrap();

        let rows = load_histogram_table(&path).unwrap();
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_load_table_missing_column_is_csv_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("task-b.csv");
        fs::write(&path, "N,B,variant,threads\n1000,256,seq,1\n").unwrap();

        let err = load_histogram_table(&path).unwrap_err();
        assert!(matches!(err, ReportError::Csv { .. }));
    }
}
