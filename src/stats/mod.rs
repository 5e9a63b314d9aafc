//! Statistics over measurement tables
//!
//! # Module Organization
//!
//! - **`aggregate`**: group-by with per-group mean and sample std-dev
//! - **`select`**: best-row lookup (min / max of a metric, stable on ties)
//! - **`speedup`**: sequential baseline and speedup curves
//!
//! Everything here is pure: no I/O, no logging, no rendering.

pub mod aggregate;
pub mod select;
pub mod speedup;

pub use aggregate::{aggregate, aggregate_iter, aggregate_sorted, by_threads, GroupStats};
pub use select::{best_by, min_by, Objective};
pub use speedup::{baseline_mean, ideal_speedup, speedup, SpeedupPoint};
