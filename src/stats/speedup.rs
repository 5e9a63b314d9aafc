//! Speedup relative to the sequential baseline
//!
//! $$S(p) = \frac{T_{seq}}{T_{par}(p)}$$
//!
//! where $T_{seq}$ is the mean of every sequential trial sharing the same
//! problem parameters and $T_{par}(p)$ the mean parallel time on $p$ threads.

use super::aggregate::GroupStats;
use crate::data::Measurement;

/// One point of a speedup curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedupPoint {
    pub threads: u32,
    pub speedup: f64,
}

/// Mean time of the sequential trials among `rows`
///
/// Returns `None` when no sequential trial is present: the caller must skip
/// the configuration instead of dividing by an undefined baseline.
pub fn baseline_mean<'a, T, I>(rows: I) -> Option<f64>
where
    T: Measurement + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let (sum, count) = rows
        .into_iter()
        .filter(|r| r.is_sequential())
        .fold((0.0, 0usize), |(sum, count), r| (sum + r.time(), count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Speedup of each per-thread group against `baseline_time`
///
/// Zero parallel times are not guarded and produce an infinite speedup.
pub fn speedup(baseline_time: f64, parallel_stats: &[GroupStats<u32>]) -> Vec<SpeedupPoint> {
    parallel_stats
        .iter()
        .map(|s| SpeedupPoint {
            threads: s.key,
            speedup: baseline_time / s.mean,
        })
        .collect()
}

/// Ideal linear speedup reference, `S(p) = p`
///
/// Covers powers of two up to `max_threads`, plus `max_threads` itself.
pub fn ideal_speedup(max_threads: u32) -> Vec<SpeedupPoint> {
    let max_threads = max_threads.max(1);
    let mut threads: Vec<u32> = std::iter::successors(Some(1u32), |&p| p.checked_mul(2))
        .take_while(|&p| p <= max_threads)
        .collect();

    if threads.last() != Some(&max_threads) {
        threads.push(max_threads);
    }

    threads
        .into_iter()
        .map(|p| SpeedupPoint {
            threads: p,
            speedup: p as f64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    struct Trial {
        seq: bool,
        time: f64,
    }

    impl Measurement for Trial {
        fn threads(&self) -> u32 {
            1
        }
        fn time(&self) -> f64 {
            self.time
        }
        fn is_sequential(&self) -> bool {
            self.seq
        }
    }

    fn stats(threads: u32, mean: f64) -> GroupStats<u32> {
        GroupStats {
            key: threads,
            mean,
            std_dev: f64::NAN,
            count: 1,
        }
    }

    #[test]
    fn test_baseline_mean_uses_sequential_rows_only() {
        let rows = vec![
            Trial { seq: true, time: 1.0 },
            Trial { seq: false, time: 100.0 },
            Trial { seq: true, time: 3.0 },
        ];
        assert_relative_eq!(baseline_mean(&rows).unwrap(), 2.0);
    }

    #[test]
    fn test_baseline_mean_absent() {
        let rows = vec![Trial { seq: false, time: 1.0 }];
        assert_eq!(baseline_mean(&rows), None);

        let empty: Vec<Trial> = Vec::new();
        assert_eq!(baseline_mean(&empty), None);
    }

    #[test]
    fn test_single_thread_matching_baseline_is_unity() {
        let points = speedup(0.8, &[stats(1, 0.8)]);
        assert_eq!(points[0].threads, 1);
        assert_relative_eq!(points[0].speedup, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_speedup_per_thread_count() {
        let points = speedup(8.0, &[stats(1, 8.0), stats(2, 4.0), stats(4, 2.5)]);
        let values: Vec<f64> = points.iter().map(|p| p.speedup).collect();
        assert_relative_eq!(values[0], 1.0);
        assert_relative_eq!(values[1], 2.0);
        assert_relative_eq!(values[2], 3.2);
    }

    #[test]
    fn test_zero_parallel_time_is_infinite() {
        let points = speedup(1.0, &[stats(2, 0.0)]);
        assert!(points[0].speedup.is_infinite());
    }

    #[test]
    fn test_ideal_speedup_powers_of_two() {
        let ideal: Vec<u32> = ideal_speedup(16).iter().map(|p| p.threads).collect();
        assert_eq!(ideal, vec![1, 2, 4, 8, 16]);

        let ideal: Vec<u32> = ideal_speedup(6).iter().map(|p| p.threads).collect();
        assert_eq!(ideal, vec![1, 2, 4, 6]);

        let ideal = ideal_speedup(0);
        assert_eq!(ideal.len(), 1);
        assert_relative_eq!(ideal[0].speedup, 1.0);
    }
}
