//! Metrics engine facade
//!
//! Wires the validator, calculator, aggregator, ranking and export around a
//! single injected standards catalog. Synchronous, stateless between calls
//! and safe to share behind an `Arc`.

use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;
use workpace_domain::{
    ActivityEntry, DailyTrendPoint, DashboardStats, GroupKey, GroupedSummary, Leaderboard,
    MetricsPreview, Period, RankingEntry, RawEntryInput, Result, StandardsCatalog, Summary,
    TaskDistribution, Viewer,
};

use crate::aggregation::{self, Aggregator};
use crate::export::{CsvExporter, CsvReport};
use crate::metrics::MetricsCalculator;
use crate::ranking;
use crate::scope;
use crate::validation::EntryValidator;

/// Pure entry pipeline and reporting operations.
#[derive(Debug, Clone)]
pub struct MetricsEngine {
    catalog: Arc<StandardsCatalog>,
    validator: EntryValidator,
    calculator: MetricsCalculator,
    aggregator: Aggregator,
    exporter: CsvExporter,
}

impl MetricsEngine {
    pub fn new(catalog: Arc<StandardsCatalog>) -> Self {
        Self {
            validator: EntryValidator::new(Arc::clone(&catalog)),
            calculator: MetricsCalculator::new(Arc::clone(&catalog)),
            aggregator: Aggregator::new(Arc::clone(&catalog)),
            exporter: CsvExporter::new(Arc::clone(&catalog)),
            catalog,
        }
    }

    pub fn catalog(&self) -> &StandardsCatalog {
        &self.catalog
    }

    /// Validate, compute and stamp a new entry owned by `submitter`.
    ///
    /// # Errors
    /// Returns `WorkpaceError::MissingField` listing every invalid field.
    pub fn build_entry(&self, raw: &RawEntryInput, submitter: &Viewer) -> Result<ActivityEntry> {
        self.build_entry_with_id(Uuid::now_v7(), raw, submitter)
    }

    /// [`Self::build_entry`] with a caller-chosen id.
    ///
    /// # Errors
    /// Returns `WorkpaceError::MissingField` listing every invalid field.
    pub fn build_entry_with_id(
        &self,
        id: Uuid,
        raw: &RawEntryInput,
        submitter: &Viewer,
    ) -> Result<ActivityEntry> {
        let valid = self.validator.validate(raw)?;
        Ok(ActivityEntry::record(id, valid, submitter.ownership(), |entry| {
            self.calculator.compute(entry)
        }))
    }

    pub fn preview(&self, raw: &RawEntryInput) -> MetricsPreview {
        self.calculator.preview(raw)
    }

    pub fn visible_entries(&self, entries: &[ActivityEntry], viewer: &Viewer) -> Vec<ActivityEntry> {
        scope::visible_entries(entries, viewer)
    }

    pub fn entries_on(&self, entries: &[ActivityEntry], date: NaiveDate) -> Vec<ActivityEntry> {
        scope::entries_on(entries, date).cloned().collect()
    }

    pub fn daily_summary(&self, entries: &[ActivityEntry], date: NaiveDate) -> Summary {
        self.aggregator.daily_summary(entries, date)
    }

    pub fn cumulative_summary(&self, entries: &[ActivityEntry]) -> Summary {
        self.aggregator.cumulative_summary(entries)
    }

    pub fn grouped_summary(&self, entries: &[ActivityEntry], key: GroupKey) -> GroupedSummary {
        self.aggregator.grouped_summary(entries, key)
    }

    pub fn rank(&self, entries: &[ActivityEntry], period: &Period) -> Vec<RankingEntry> {
        ranking::rank(entries, period)
    }

    pub fn leaderboard(
        &self,
        entries: &[ActivityEntry],
        viewer: &Viewer,
        period: &Period,
    ) -> Leaderboard {
        ranking::leaderboard(entries, viewer, period)
    }

    pub fn dashboard_stats(&self, entries: &[ActivityEntry]) -> DashboardStats {
        aggregation::dashboard_stats(entries)
    }

    pub fn task_distribution(&self, entries: &[ActivityEntry]) -> TaskDistribution {
        aggregation::task_distribution(entries)
    }

    pub fn daily_trend(&self, entries: &[ActivityEntry]) -> Vec<DailyTrendPoint> {
        aggregation::daily_trend(entries)
    }

    pub fn export_csv(&self, entries: &[ActivityEntry]) -> String {
        self.exporter.render(entries)
    }

    /// Report content plus its dated file name.
    pub fn export_report(&self, entries: &[ActivityEntry], date: NaiveDate) -> CsvReport {
        self.exporter.report(entries, date)
    }
}

impl Default for MetricsEngine {
    fn default() -> Self {
        Self::new(Arc::new(StandardsCatalog::default()))
    }
}

#[cfg(test)]
mod tests {
    use workpace_domain::{AchievementStatus, Role, WorkpaceError};

    use super::*;

    fn raw(performer: &str, task_type: &str, completed: f64, taken: f64) -> RawEntryInput {
        RawEntryInput {
            performer_name: Some(performer.to_string()),
            title_name: Some("Journal of Testing".to_string()),
            task_type: Some(task_type.to_string()),
            completed_work: Some(completed),
            estimated_time: Some(taken),
            taken_time: Some(taken),
            date: Some("2024-03-05".to_string()),
        }
    }

    #[test]
    fn build_entry_stamps_metrics_and_ownership() {
        let engine = MetricsEngine::default();
        let viewer = Viewer::new("user-1", "acme", Role::Performer, "Asha");
        let entry = engine.build_entry(&raw("Asha", "Prestyle", 450.0, 4.0), &viewer).unwrap();

        assert_eq!(entry.target_achieved_percent(), 100.0);
        assert_eq!(entry.status(), AchievementStatus::Achieved);
        assert_eq!(entry.owner_id(), "user-1");
        assert_eq!(entry.scope_id(), "acme");
    }

    #[test]
    fn built_metrics_agree_with_preview_of_same_input() {
        let engine = MetricsEngine::default();
        let viewer = Viewer::new("user-1", "acme", Role::Performer, "Asha");
        let mut input = raw("Asha", "Preedit", 100.0, 3.0);
        input.estimated_time = Some(2.5);

        let entry = engine.build_entry(&input, &viewer).unwrap();
        let preview = engine.preview(&input);

        assert_eq!(entry.target_achieved_percent(), preview.target_achieved_percent);
        assert_eq!(entry.time_achieved_percent(), preview.time_achieved_percent);
        assert_eq!(entry.target_achieved_percent(), 88.89);
        assert_eq!(entry.status(), AchievementStatus::NotAchieved);
    }

    #[test]
    fn build_entry_rejects_unknown_task_type() {
        let engine = MetricsEngine::default();
        let viewer = Viewer::new("user-1", "acme", Role::Performer, "Asha");
        let err = engine.build_entry(&raw("Asha", "Typesetting", 10.0, 1.0), &viewer).unwrap_err();
        assert!(matches!(err, WorkpaceError::MissingField(_)));
        assert!(err.is_user_correctable());
    }

    #[test]
    fn ids_are_unique_per_build() {
        let engine = MetricsEngine::default();
        let viewer = Viewer::new("user-1", "acme", Role::Performer, "Asha");
        let input = raw("Asha", "Prestyle", 450.0, 4.0);
        let a = engine.build_entry(&input, &viewer).unwrap();
        let b = engine.build_entry(&input, &viewer).unwrap();
        assert_ne!(a.id(), b.id());
    }
}
