//! Measurement tables
//!
//! One row per executed trial, exactly as the experiment binaries print them.
//! Two tables exist:
//!
//! - **Task A** ([`ScheduleRecord`]): irregular loop `v[i] = fib(i % K)` run
//!   sequentially or with an OpenMP `schedule(static | dynamic | guided, chunk)`
//! - **Task B** ([`HistogramRecord`]): histogram of `N` values into `B` buckets,
//!   run sequentially or with one of three synchronization strategies
//!
//! Repeated trials of the same configuration are expected; they are the basis
//! for the averaging done in [`crate::stats`].
//!
//! # Input format
//!
//! ```text
//! task,variant,schedule,chunk,N,K,threads,time,checksum
//! A,seq,none,0,1000000,24,1,0.812345,123456
//! A,omp,dynamic,16,1000000,24,4,0.231002,123456
//!
//! task,variant,N,B,threads,time,checksum
//! B,seq,1000000,256,1,0.004120,1000000
//! B,local,1000000,256,4,0.001310,1000000
//! ```
//!
//! Extra columns (`task`, `checksum`) are ignored.

pub mod loader;

pub use loader::{load_histogram_table, load_schedule_table, load_table};

use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// Common view over a measurement row, used by the statistics helpers
pub trait Measurement {
    /// Number of threads the trial ran with (1 for the sequential baseline)
    fn threads(&self) -> u32;

    /// Elapsed wall time in seconds
    fn time(&self) -> f64;

    /// Whether this trial is the sequential baseline
    fn is_sequential(&self) -> bool;
}

// =================================================================================================
// Task A
// =================================================================================================

/// OpenMP loop-scheduling policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Schedule {
    Static,
    Dynamic,
    Guided,
}

impl Schedule {
    /// All policies, in plotting order
    pub const ALL: [Schedule; 3] = [Schedule::Static, Schedule::Dynamic, Schedule::Guided];

    pub fn as_str(&self) -> &'static str {
        match self {
            Schedule::Static => "static",
            Schedule::Dynamic => "dynamic",
            Schedule::Guided => "guided",
        }
    }

    /// Whether the policy honours a chunk size (static ignores it)
    pub fn uses_chunk(&self) -> bool {
        !matches!(self, Schedule::Static)
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Schedule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "static" => Ok(Schedule::Static),
            "dynamic" => Ok(Schedule::Dynamic),
            "guided" => Ok(Schedule::Guided),
            other => Err(format!("unknown schedule '{}'", other)),
        }
    }
}

/// Task A variant: sequential baseline or OpenMP loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum LoopVariant {
    #[serde(rename = "seq")]
    Sequential,
    #[serde(rename = "omp")]
    Parallel,
}

/// One task A trial
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScheduleRecord {
    /// Number of loop iterations
    #[serde(rename = "N")]
    pub n: u64,

    /// Fibonacci modulus controlling the irregularity of the workload
    #[serde(rename = "K")]
    pub k: u32,

    pub variant: LoopVariant,

    /// `None` for the sequential baseline (`none` or blank in the file)
    #[serde(default, deserialize_with = "deserialize_schedule")]
    pub schedule: Option<Schedule>,

    /// Chunk size; 0 means "not applicable"
    #[serde(default, deserialize_with = "deserialize_chunk")]
    pub chunk: u32,

    pub threads: u32,
    pub time: f64,
}

impl Measurement for ScheduleRecord {
    fn threads(&self) -> u32 {
        self.threads
    }

    fn time(&self) -> f64 {
        self.time
    }

    fn is_sequential(&self) -> bool {
        self.variant == LoopVariant::Sequential
    }
}

fn deserialize_schedule<'de, D>(deserializer: D) -> Result<Option<Schedule>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") | Some("none") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

fn deserialize_chunk<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<u32> = Option::deserialize(deserializer)?;
    Ok(raw.unwrap_or(0))
}

// =================================================================================================
// Task B
// =================================================================================================

/// Task B variant: how concurrent increments of the histogram are synchronized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistogramVariant {
    #[serde(rename = "seq")]
    Sequential,
    /// `#pragma omp critical` around each increment
    Critical,
    /// `#pragma omp atomic` increments
    Atomic,
    /// Thread-local histograms merged at the end
    Local,
}

impl HistogramVariant {
    /// Parallel variants, in plotting order
    pub const PARALLEL: [HistogramVariant; 3] = [
        HistogramVariant::Critical,
        HistogramVariant::Atomic,
        HistogramVariant::Local,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HistogramVariant::Sequential => "seq",
            HistogramVariant::Critical => "critical",
            HistogramVariant::Atomic => "atomic",
            HistogramVariant::Local => "local",
        }
    }
}

impl fmt::Display for HistogramVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One task B trial
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistogramRecord {
    /// Number of input values
    #[serde(rename = "N")]
    pub n: u64,

    /// Number of histogram buckets
    #[serde(rename = "B")]
    pub b: u32,

    pub variant: HistogramVariant,
    pub threads: u32,
    pub time: f64,
}

impl Measurement for HistogramRecord {
    fn threads(&self) -> u32 {
        self.threads
    }

    fn time(&self) -> f64 {
        self.time
    }

    fn is_sequential(&self) -> bool {
        self.variant == HistogramVariant::Sequential
    }
}

// =================================================================================================
// Helpers
// =================================================================================================

/// Distinct values of a column, ascending
pub fn distinct_sorted<T, K, F>(rows: &[T], column: F) -> Vec<K>
where
    K: Ord + Copy,
    F: Fn(&T) -> K,
{
    let mut values: Vec<K> = rows.iter().map(column).collect();
    values.sort_unstable();
    values.dedup();
    values
}

/// Largest thread count in a table (1 for an empty table)
pub fn max_threads<T: Measurement>(rows: &[T]) -> u32 {
    rows.iter().map(Measurement::threads).max().unwrap_or(1)
}
