//! Best-row selection over aggregated tables

use crate::error::{ReportError, Result};

/// Direction of the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Objective {
    #[default]
    Minimize,
    Maximize,
}

impl Objective {
    fn prefers(&self, candidate: f64, current: f64) -> bool {
        match self {
            Objective::Minimize => candidate < current,
            Objective::Maximize => candidate > current,
        }
    }
}

/// Return the row with the best `metric`
///
/// Ties keep the first row encountered. Rows whose metric is NaN are only
/// chosen when no row has a comparable metric.
///
/// # Errors
///
/// [`ReportError::EmptySelection`] when `rows` is empty. Report builders check
/// for emptiness first and skip the configuration instead.
///
/// # Example
///
/// ```rust,ignore
/// let stats = aggregate(&rows, |r| (r.schedule, r.chunk, r.threads));
/// let best = best_by(&stats, |s| s.mean, Objective::Minimize)?;
/// ```
pub fn best_by<T, F>(rows: &[T], metric: F, objective: Objective) -> Result<&T>
where
    F: Fn(&T) -> f64,
{
    let mut iter = rows.iter();
    let mut best = iter.next().ok_or_else(|| ReportError::EmptySelection {
        context: "best-row lookup".to_string(),
    })?;
    let mut best_value = metric(best);

    for row in iter {
        let value = metric(row);
        if value.is_nan() {
            continue;
        }
        if best_value.is_nan() || objective.prefers(value, best_value) {
            best = row;
            best_value = value;
        }
    }

    Ok(best)
}

/// [`best_by`] minimizing `metric`
pub fn min_by<T, F>(rows: &[T], metric: F) -> Result<&T>
where
    F: Fn(&T) -> f64,
{
    best_by(rows, metric, Objective::Minimize)
}
