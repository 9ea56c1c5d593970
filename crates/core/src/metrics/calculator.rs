//! Per-entry metrics
//!
//! - Time efficiency: estimated time as a percentage of time taken
//! - Target achievement: completed work as a percentage of what a
//!   standard-rate performer would complete in the same hours
//!
//! Both are rounded to two decimals on the final value only.

use std::sync::Arc;

use workpace_domain::{
    AchievementStatus, EntryMetrics, MetricsPreview, RawEntryInput, StandardsCatalog, ValidEntry,
};

use crate::utils::{positive, round2};

/// Computes entry metrics against the injected standards catalog.
#[derive(Debug, Clone)]
pub struct MetricsCalculator {
    catalog: Arc<StandardsCatalog>,
}

impl MetricsCalculator {
    pub fn new(catalog: Arc<StandardsCatalog>) -> Self {
        Self { catalog }
    }

    /// Metrics for a validated entry. Pure: same entry, same result.
    pub fn compute(&self, entry: &ValidEntry) -> EntryMetrics {
        let standard = self.catalog.target_for(&entry.task_type);
        let target_achieved_percent = target_achieved_percent(
            entry.completed_work,
            standard,
            entry.taken_time,
            self.catalog.work_hours_per_day(),
        );

        EntryMetrics {
            time_achieved_percent: time_achieved_percent(entry.estimated_time, entry.taken_time),
            target_achieved_percent,
            status: AchievementStatus::from_percent(target_achieved_percent),
        }
    }

    /// As-you-type metrics for a partial submission.
    ///
    /// Missing, unknown or non-positive inputs produce zeros instead of
    /// errors.
    pub fn preview(&self, input: &RawEntryInput) -> MetricsPreview {
        let standard = input
            .task_type
            .as_deref()
            .map_or(0.0, |task_type| self.catalog.target_for(task_type.trim()));

        let time_achieved_percent = match (positive(input.estimated_time), positive(input.taken_time))
        {
            (Some(estimated), Some(taken)) => time_achieved_percent(estimated, taken),
            _ => 0.0,
        };

        let target_achieved_percent =
            match (positive(input.completed_work), positive(input.taken_time)) {
                (Some(completed), Some(taken)) => target_achieved_percent(
                    completed,
                    standard,
                    taken,
                    self.catalog.work_hours_per_day(),
                ),
                _ => 0.0,
            };

        MetricsPreview { time_achieved_percent, target_achieved_percent }
    }
}

/// Output a standard-rate performer would complete in `taken_time` hours.
pub fn expected_output_for_taken_time(standard: f64, work_hours_per_day: f64, taken_time: f64) -> f64 {
    (standard / work_hours_per_day) * taken_time
}

/// `round2(estimated / taken * 100)`, `0` unless both are positive.
pub fn time_achieved_percent(estimated_time: f64, taken_time: f64) -> f64 {
    if estimated_time > 0.0 && taken_time > 0.0 {
        round2(estimated_time / taken_time * 100.0)
    } else {
        0.0
    }
}

/// `round2(completed / expected * 100)`, `0` unless standard and time are
/// positive.
pub fn target_achieved_percent(
    completed_work: f64,
    standard: f64,
    taken_time: f64,
    work_hours_per_day: f64,
) -> f64 {
    if standard > 0.0 && taken_time > 0.0 && work_hours_per_day > 0.0 {
        let expected = expected_output_for_taken_time(standard, work_hours_per_day, taken_time);
        round2(completed_work / expected * 100.0)
    } else {
        0.0
    }
}
