//! Activity entry types
//!
//! An entry moves through three shapes:
//! - [`RawEntryInput`]: loosely structured submission, every field optional
//! - [`ValidEntry`]: all seven required fields present and sane
//! - [`ActivityEntry`]: a stored record with frozen metrics and ownership

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;
use uuid::Uuid;

use crate::constants::{ACHIEVED_LABEL, ACHIEVEMENT_THRESHOLD_PERCENT, MOTIVATIONAL_LABEL};
use crate::impl_domain_status_conversions;

/// Submission as received from the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(default)]
pub struct RawEntryInput {
    pub performer_name: Option<String>,
    pub title_name: Option<String>,
    pub task_type: Option<String>,
    pub completed_work: Option<f64>,
    pub estimated_time: Option<f64>,
    pub taken_time: Option<f64>,
    /// ISO 8601 calendar date (`YYYY-MM-DD`).
    pub date: Option<String>,
}

/// Entry that passed validation. Names are trimmed, numbers are positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidEntry {
    pub date: NaiveDate,
    pub performer_name: String,
    pub title_name: String,
    pub task_type: String,
    pub completed_work: f64,
    pub estimated_time: f64,
    pub taken_time: f64,
}

/// Whether an entry met its standard target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum AchievementStatus {
    Achieved,
    NotAchieved,
}

impl_domain_status_conversions!(AchievementStatus {
    Achieved => "achieved",
    NotAchieved => "not_achieved",
});

impl AchievementStatus {
    /// Status for a rounded achievement percentage.
    pub fn from_percent(percent: f64) -> Self {
        if percent >= ACHIEVEMENT_THRESHOLD_PERCENT {
            Self::Achieved
        } else {
            Self::NotAchieved
        }
    }

    pub fn is_achieved(self) -> bool {
        matches!(self, Self::Achieved)
    }

    /// Label shown to performers. A missed target reads as encouragement.
    pub fn label(self) -> &'static str {
        match self {
            Self::Achieved => ACHIEVED_LABEL,
            Self::NotAchieved => MOTIVATIONAL_LABEL,
        }
    }
}

/// Percentages derived from a valid entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct EntryMetrics {
    pub time_achieved_percent: f64,
    pub target_achieved_percent: f64,
    pub status: AchievementStatus,
}

/// Live feedback while an entry is being typed. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct MetricsPreview {
    pub time_achieved_percent: f64,
    pub target_achieved_percent: f64,
}

/// Who an entry belongs to, taken from the submitting viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryOwnership {
    pub owner_id: String,
    pub scope_id: String,
}

/// A logged unit of production work.
///
/// Immutable once built: metrics are frozen at creation and are not
/// recomputed if the standards catalog changes later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ActivityEntry {
    id: Uuid,
    #[cfg_attr(feature = "ts-gen", ts(type = "string"))]
    date: NaiveDate,
    performer_name: String,
    title_name: String,
    task_type: String,
    completed_work: f64,
    estimated_time: f64,
    taken_time: f64,
    time_achieved_percent: f64,
    target_achieved_percent: f64,
    status: AchievementStatus,
    owner_id: String,
    scope_id: String,
}

impl ActivityEntry {
    /// Record a new entry, deriving its frozen metrics from the entry itself.
    pub fn record<F>(id: Uuid, entry: ValidEntry, ownership: EntryOwnership, compute: F) -> Self
    where
        F: FnOnce(&ValidEntry) -> EntryMetrics,
    {
        let metrics = compute(&entry);
        Self::rehydrate(id, entry, metrics, ownership)
    }

    /// Rebuild a stored entry from its persisted columns.
    ///
    /// Only for rows previously produced by [`Self::record`]: the metrics are
    /// taken as stored and are not checked against the entry's fields.
    pub fn rehydrate(
        id: Uuid,
        entry: ValidEntry,
        metrics: EntryMetrics,
        ownership: EntryOwnership,
    ) -> Self {
        Self {
            id,
            date: entry.date,
            performer_name: entry.performer_name,
            title_name: entry.title_name,
            task_type: entry.task_type,
            completed_work: entry.completed_work,
            estimated_time: entry.estimated_time,
            taken_time: entry.taken_time,
            time_achieved_percent: metrics.time_achieved_percent,
            target_achieved_percent: metrics.target_achieved_percent,
            status: metrics.status,
            owner_id: ownership.owner_id,
            scope_id: ownership.scope_id,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// `YYYY-MM-DD` form of the work date.
    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn performer_name(&self) -> &str {
        &self.performer_name
    }

    pub fn title_name(&self) -> &str {
        &self.title_name
    }

    pub fn task_type(&self) -> &str {
        &self.task_type
    }

    pub fn completed_work(&self) -> f64 {
        self.completed_work
    }

    pub fn estimated_time(&self) -> f64 {
        self.estimated_time
    }

    pub fn taken_time(&self) -> f64 {
        self.taken_time
    }

    pub fn time_achieved_percent(&self) -> f64 {
        self.time_achieved_percent
    }

    pub fn target_achieved_percent(&self) -> f64 {
        self.target_achieved_percent
    }

    pub fn status(&self) -> AchievementStatus {
        self.status
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub fn scope_id(&self) -> &str {
        &self.scope_id
    }

    /// Metrics frozen on this entry at creation time.
    pub fn metrics(&self) -> EntryMetrics {
        EntryMetrics {
            time_achieved_percent: self.time_achieved_percent,
            target_achieved_percent: self.target_achieved_percent,
            status: self.status,
        }
    }
}
