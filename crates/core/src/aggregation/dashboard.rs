//! Dashboard statistics
//!
//! Simple (unweighted) figures for the overview cards and charts.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use workpace_domain::{ActivityEntry, DailyTrendPoint, DashboardStats, TaskDistribution};

use crate::utils::{mean, round2};

/// Headline counts and plain means over the entries.
pub fn dashboard_stats(entries: &[ActivityEntry]) -> DashboardStats {
    let targets: Vec<f64> = entries.iter().map(ActivityEntry::target_achieved_percent).collect();
    let times: Vec<f64> = entries.iter().map(ActivityEntry::time_achieved_percent).collect();
    let performers: BTreeSet<&str> = entries.iter().map(ActivityEntry::performer_name).collect();

    DashboardStats {
        total_entries: entries.len(),
        average_target_achieved_percent: round2(mean(&targets)),
        average_time_achieved_percent: round2(mean(&times)),
        unique_performers: performers.len(),
    }
}

/// Number of entries per task type.
pub fn task_distribution(entries: &[ActivityEntry]) -> TaskDistribution {
    let mut distribution = TaskDistribution::new();
    for entry in entries {
        *distribution.entry(entry.task_type().to_string()).or_insert(0) += 1;
    }
    distribution
}

/// Mean target achievement per date, oldest first.
pub fn daily_trend(entries: &[ActivityEntry]) -> Vec<DailyTrendPoint> {
    let mut by_date: BTreeMap<NaiveDate, Vec<f64>> = BTreeMap::new();
    for entry in entries {
        by_date.entry(entry.date()).or_default().push(entry.target_achieved_percent());
    }

    by_date
        .into_iter()
        .map(|(date, targets)| DailyTrendPoint {
            date: date.format("%Y-%m-%d").to_string(),
            entry_count: targets.len(),
            average_target_achieved_percent: round2(mean(&targets)),
        })
        .collect()
}
