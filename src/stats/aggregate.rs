//! Group-by aggregation of trial times
//!
//! Rows are partitioned by the key returned from a projection closure (the
//! tuple of grouping columns). Each partition keeps a running accumulator,
//! updated in a single pass, and is finalized into a [`GroupStats`].
//!
//! # Statistics
//!
//! For a partition with times $t_1, \dots, t_n$:
//!
//! - mean $\bar t = \frac{1}{n}\sum t_i$
//! - sample standard deviation $s = \sqrt{\frac{1}{n-1}\sum (t_i - \bar t)^2}$
//!
//! $s$ is NaN for $n = 1$. That is not an error: downstream it means
//! "draw no error bar".

use std::collections::HashMap;
use std::hash::Hash;

use crate::data::Measurement;

/// Aggregated statistics for one group of trials
#[derive(Debug, Clone, PartialEq)]
pub struct GroupStats<K> {
    /// Values of the grouping columns
    pub key: K,

    /// Mean elapsed time (s)
    pub mean: f64,

    /// Sample standard deviation (ddof = 1); NaN for single-trial groups
    pub std_dev: f64,

    /// Number of trials in the group
    pub count: usize,
}

impl<K> GroupStats<K> {
    /// Half-height of the error bar, `None` when the std-dev is undefined
    pub fn error_bar(&self) -> Option<f64> {
        if self.std_dev.is_finite() {
            Some(self.std_dev)
        } else {
            None
        }
    }
}

/// One-pass running mean / variance (Welford update)
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Accumulator {
    count: usize,
    mean: f64,
    m2: f64,
}

impl Accumulator {
    pub(crate) fn push(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
    }

    pub(crate) fn finish<K>(self, key: K) -> GroupStats<K> {
        let std_dev = if self.count < 2 {
            f64::NAN
        } else {
            (self.m2 / (self.count - 1) as f64).sqrt()
        };

        GroupStats {
            key,
            mean: self.mean,
            std_dev,
            count: self.count,
        }
    }
}

/// Group `rows` by `key` and compute mean / std-dev of their times
///
/// Groups are returned in order of first occurrence of their key.
///
/// # Example
///
/// ```rust,ignore
/// // Mean time per (schedule, threads)
/// let stats = aggregate(&rows, |r| (r.schedule, r.threads));
/// ```
pub fn aggregate<T, K, F>(rows: &[T], key: F) -> Vec<GroupStats<K>>
where
    T: Measurement,
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    aggregate_iter(rows, key)
}

/// [`aggregate`] over any iterator of row references (e.g. a filter)
pub fn aggregate_iter<'a, T, I, K, F>(rows: I, key: F) -> Vec<GroupStats<K>>
where
    T: Measurement + 'a,
    I: IntoIterator<Item = &'a T>,
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Accumulator)> = Vec::new();

    for row in rows {
        let k = key(row);
        let slot = match index.get(&k) {
            Some(&slot) => slot,
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, Accumulator::default()));
                groups.len() - 1
            }
        };
        groups[slot].1.push(row.time());
    }

    groups
        .into_iter()
        .map(|(k, acc)| acc.finish(k))
        .collect()
}

/// Same as [`aggregate`], with groups sorted by key
pub fn aggregate_sorted<T, K, F>(rows: &[T], key: F) -> Vec<GroupStats<K>>
where
    T: Measurement,
    K: Eq + Hash + Clone + Ord,
    F: Fn(&T) -> K,
{
    let mut stats = aggregate(rows, key);
    stats.sort_by(|a, b| a.key.cmp(&b.key));
    stats
}

/// Mean / std-dev per thread count, ascending
///
/// The shape every chart series is built from.
pub fn by_threads<'a, T, I>(rows: I) -> Vec<GroupStats<u32>>
where
    T: Measurement + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut stats = aggregate_iter(rows, |r: &T| r.threads());
    stats.sort_by_key(|s| s.key);
    stats
}
