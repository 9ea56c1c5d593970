//! Aggregation and reporting types
//!
//! Everything here is computed on demand from a scoped entry set and never
//! persisted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_domain_status_conversions;

/* -------------------------------------------------------------------------- */
/* Weighted summaries */
/* -------------------------------------------------------------------------- */

/// Daily, cumulative or per-group achievement summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Summary {
    /// Sum of completed work across entries
    pub total_work: f64,

    /// Sum of taken time (hours) across entries
    pub total_time: f64,

    /// Weighted achievement, rounded to two decimals
    pub weighted_achievement_percent: f64,

    /// `weighted_achievement_percent >= 100`
    pub is_achieved: bool,
}

impl Summary {
    /// Summary of an empty entry set.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Key used to partition entries for grouped breakdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum GroupKey {
    Performer,
    /// Client / tenant scope the entry was submitted under
    Client,
    TaskType,
}

impl_domain_status_conversions!(GroupKey {
    Performer => "performer",
    Client => "client",
    TaskType => "task_type",
});

/// Group label → summary, ordered by label.
pub type GroupedSummary = BTreeMap<String, Summary>;

/* -------------------------------------------------------------------------- */
/* Leaderboard */
/* -------------------------------------------------------------------------- */

/// One performer's position on the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct RankingEntry {
    pub performer_name: String,
    /// Unweighted mean of the performer's target achievement, two decimals
    pub average_achievement_percent: f64,
}

/// Leaderboard plus where the viewer sits on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Leaderboard {
    pub rankings: Vec<RankingEntry>,
    /// `None` when the viewer logged nothing in the period
    pub viewer_rank: Option<usize>,
    pub viewer_score: Option<f64>,
}

/* -------------------------------------------------------------------------- */
/* Dashboard */
/* -------------------------------------------------------------------------- */

/// Headline numbers for the dashboard cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct DashboardStats {
    pub total_entries: usize,
    pub average_target_achieved_percent: f64,
    pub average_time_achieved_percent: f64,
    pub unique_performers: usize,
}

/// Task type → number of entries logged against it.
pub type TaskDistribution = BTreeMap<String, usize>;

/// Mean target achievement for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct DailyTrendPoint {
    /// ISO date (`YYYY-MM-DD`)
    pub date: String,
    pub entry_count: usize,
    pub average_target_achieved_percent: f64,
}
