//! Synthetic measurement tables
//!
//! Task A: N in {1000, 2000}, K in {16, 24}, a sequential baseline plus
//! static / dynamic / guided (chunks 1 and 16) on 1, 2 and 4 threads.
//! Task B: N = 1000, B = 256, a baseline plus critical / atomic / local.
//! Every configuration is measured twice.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use parbench_rs::config::RunConfig;
use parbench_rs::data::{HistogramRecord, HistogramVariant, LoopVariant, Schedule, ScheduleRecord};

pub const THREADS: [u32; 3] = [1, 2, 4];
pub const TRIALS: usize = 2;

/// Sequential time of a task A configuration (s)
pub fn schedule_baseline(n: u64, k: u32) -> f64 {
    n as f64 * k as f64 * 1e-5
}

fn schedule_factor(schedule: Schedule, chunk: u32) -> f64 {
    match (schedule, chunk) {
        (Schedule::Static, _) => 1.3,
        (Schedule::Dynamic, 1) => 1.2,
        (Schedule::Dynamic, _) => 1.05,
        (Schedule::Guided, 1) => 1.1,
        (Schedule::Guided, _) => 1.0,
    }
}

pub fn schedule_rows() -> Vec<ScheduleRecord> {
    let mut rows = Vec::new();
    for n in [1000u64, 2000] {
        for k in [16u32, 24] {
            let seq = schedule_baseline(n, k);
            for trial in 0..TRIALS {
                rows.push(ScheduleRecord {
                    n,
                    k,
                    variant: LoopVariant::Sequential,
                    schedule: None,
                    chunk: 0,
                    threads: 1,
                    time: seq + trial as f64 * 1e-4,
                });
            }

            let configs = [
                (Schedule::Static, 0),
                (Schedule::Dynamic, 1),
                (Schedule::Dynamic, 16),
                (Schedule::Guided, 1),
                (Schedule::Guided, 16),
            ];
            for (schedule, chunk) in configs {
                for threads in THREADS {
                    for trial in 0..TRIALS {
                        rows.push(ScheduleRecord {
                            n,
                            k,
                            variant: LoopVariant::Parallel,
                            schedule: Some(schedule),
                            chunk,
                            threads,
                            time: seq * schedule_factor(schedule, chunk) / threads as f64
                                + trial as f64 * 1e-4,
                        });
                    }
                }
            }
        }
    }
    rows
}

pub fn histogram_rows() -> Vec<HistogramRecord> {
    let mut rows = Vec::new();
    for trial in 0..TRIALS {
        rows.push(HistogramRecord {
            n: 1000,
            b: 256,
            variant: HistogramVariant::Sequential,
            threads: 1,
            time: 0.004 + trial as f64 * 1e-5,
        });
    }

    for (variant, factor) in [
        (HistogramVariant::Critical, 3.0),
        (HistogramVariant::Atomic, 1.5),
        (HistogramVariant::Local, 1.0),
    ] {
        for threads in THREADS {
            for trial in 0..TRIALS {
                rows.push(HistogramRecord {
                    n: 1000,
                    b: 256,
                    variant,
                    threads,
                    time: 0.004 * factor / threads as f64 + trial as f64 * 1e-5,
                });
            }
        }
    }
    rows
}

/// Write rows in the layout printed by the experiment binaries
pub fn write_schedule_csv(path: &Path, rows: &[ScheduleRecord]) {
    let mut text = String::from("task,variant,schedule,chunk,N,K,threads,time,checksum\n");
    for r in rows {
        let variant = match r.variant {
            LoopVariant::Sequential => "seq",
            LoopVariant::Parallel => "omp",
        };
        let schedule = r.schedule.map_or("none", |s| s.as_str());
        text.push_str(&format!(
            "A,{},{},{},{},{},{},{:.9},12345\n",
            variant, schedule, r.chunk, r.n, r.k, r.threads, r.time
        ));
    }
    fs::write(path, text).unwrap();
}

pub fn write_histogram_csv(path: &Path, rows: &[HistogramRecord]) {
    let mut text = String::from("task,variant,N,B,threads,time,checksum\n");
    for r in rows {
        text.push_str(&format!(
            "B,{},{},{},{},{:.9},{}\n",
            r.variant, r.n, r.b, r.threads, r.time, r.n
        ));
    }
    fs::write(path, text).unwrap();
}

/// Lay out both tables under `dir/results` and point a config at them
pub fn write_inputs(
    dir: &Path,
    schedule: &[ScheduleRecord],
    histogram: &[HistogramRecord],
) -> RunConfig {
    let input = dir.join("results");
    fs::create_dir_all(&input).unwrap();
    write_schedule_csv(&input.join("task-a.csv"), schedule);
    write_histogram_csv(&input.join("task-b.csv"), histogram);

    RunConfig::default()
        .input_dir(input)
        .output_dir(dir.join("plots"))
}
