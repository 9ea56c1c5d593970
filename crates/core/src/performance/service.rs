//! Performance service - use cases over stored entries
//!
//! Every read goes through the scope filter for the current viewer before
//! the engine sees it.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;
use workpace_domain::{
    ActivityEntry, DailyTrendPoint, DashboardStats, GroupKey, GroupedSummary, Leaderboard,
    MetricsPreview, Period, RawEntryInput, Result, Summary, TaskDistribution, Viewer,
    WorkpaceError,
};

use super::ports::{EntryRepository, IdentityProvider};
use crate::engine::MetricsEngine;
use crate::export::CsvReport;
use crate::scope::{self, EntryFilter};

/// Source of "today" for period defaults and report names.
pub type TodayFn = fn() -> NaiveDate;

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Performance tracking service
pub struct PerformanceService {
    engine: Arc<MetricsEngine>,
    repository: Arc<dyn EntryRepository>,
    identity: Arc<dyn IdentityProvider>,
    today: TodayFn,
}

impl PerformanceService {
    /// Create a new performance service
    pub fn new(
        engine: Arc<MetricsEngine>,
        repository: Arc<dyn EntryRepository>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self { engine, repository, identity, today: local_today }
    }

    /// Override the calendar used for default periods.
    pub fn with_today(mut self, today: TodayFn) -> Self {
        self.today = today;
        self
    }

    pub fn engine(&self) -> &MetricsEngine {
        &self.engine
    }

    /// Validate, compute and store a submission from the current viewer.
    ///
    /// # Errors
    /// `MissingField` when validation fails (nothing is stored), or the
    /// repository's error when the insert fails.
    #[instrument(skip(self, raw))]
    pub async fn submit(&self, raw: &RawEntryInput) -> Result<ActivityEntry> {
        let viewer = self.identity.current_viewer().await?;

        let entry = match self.engine.build_entry(raw, &viewer) {
            Ok(entry) => entry,
            Err(err) => {
                debug!(viewer = %viewer.id, error = %err, "Rejected entry submission");
                return Err(err);
            }
        };

        self.repository.insert(entry.clone()).await?;
        info!(
            entry_id = %entry.id(),
            performer = entry.performer_name(),
            task_type = entry.task_type(),
            target_achieved = entry.target_achieved_percent(),
            "Entry recorded"
        );
        Ok(entry)
    }

    /// Delete one entry the current viewer can see.
    ///
    /// # Errors
    /// `NotFound` when no such entry exists or it is outside the viewer's
    /// scope.
    #[instrument(skip(self))]
    pub async fn remove(&self, id: Uuid) -> Result<()> {
        let viewer = self.identity.current_viewer().await?;

        let visible = self
            .repository
            .get(id)
            .await?
            .is_some_and(|entry| scope::can_view(&viewer, &entry));
        if !visible {
            return Err(WorkpaceError::NotFound(format!("entry {id}")));
        }

        if !self.repository.delete(id).await? {
            return Err(WorkpaceError::NotFound(format!("entry {id}")));
        }
        info!(entry_id = %id, viewer = %viewer.id, "Entry removed");
        Ok(())
    }

    /// Delete every entry visible to the current viewer.
    ///
    /// Returns the number of entries removed.
    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<usize> {
        let entries = self.visible_entries().await?;

        let mut removed = 0;
        for entry in &entries {
            if self.repository.delete(entry.id()).await? {
                removed += 1;
            } else {
                warn!(entry_id = %entry.id(), "Entry vanished during clear");
            }
        }
        info!(removed, "Entry history cleared");
        Ok(removed)
    }

    /// Live metrics for a partially filled form.
    pub fn preview(&self, raw: &RawEntryInput) -> MetricsPreview {
        self.engine.preview(raw)
    }

    /// Entries the current viewer may see, oldest date first.
    ///
    /// # Errors
    /// Propagates identity and repository failures.
    pub async fn visible_entries(&self) -> Result<Vec<ActivityEntry>> {
        let viewer = self.identity.current_viewer().await?;
        self.visible_for(&viewer, EntryFilter::for_viewer(&viewer)).await
    }

    /// Visible entries dated `date`.
    ///
    /// # Errors
    /// Propagates identity and repository failures.
    pub async fn entries_on(&self, date: NaiveDate) -> Result<Vec<ActivityEntry>> {
        let viewer = self.identity.current_viewer().await?;
        let entries = self.visible_for(&viewer, EntryFilter::for_viewer(&viewer).on(date)).await?;
        Ok(self.engine.entries_on(&entries, date))
    }

    /// # Errors
    /// Propagates identity and repository failures.
    pub async fn daily_summary(&self, date: NaiveDate) -> Result<Summary> {
        let entries = self.visible_entries().await?;
        Ok(self.engine.daily_summary(&entries, date))
    }

    /// # Errors
    /// Propagates identity and repository failures.
    pub async fn cumulative_summary(&self) -> Result<Summary> {
        let entries = self.visible_entries().await?;
        Ok(self.engine.cumulative_summary(&entries))
    }

    /// # Errors
    /// Propagates identity and repository failures.
    pub async fn grouped_summary(&self, key: GroupKey) -> Result<GroupedSummary> {
        let entries = self.visible_entries().await?;
        Ok(self.engine.grouped_summary(&entries, key))
    }

    /// Leaderboard for the current calendar month.
    ///
    /// # Errors
    /// Propagates identity and repository failures.
    pub async fn leaderboard(&self) -> Result<Leaderboard> {
        self.leaderboard_for(Period::current_month((self.today)())).await
    }

    /// # Errors
    /// Propagates identity and repository failures.
    pub async fn leaderboard_for(&self, period: Period) -> Result<Leaderboard> {
        let viewer = self.identity.current_viewer().await?;
        let entries = self.visible_for(&viewer, EntryFilter::for_viewer(&viewer)).await?;
        Ok(self.engine.leaderboard(&entries, &viewer, &period))
    }

    /// # Errors
    /// Propagates identity and repository failures.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
        let entries = self.visible_entries().await?;
        Ok(self.engine.dashboard_stats(&entries))
    }

    /// # Errors
    /// Propagates identity and repository failures.
    pub async fn task_distribution(&self) -> Result<TaskDistribution> {
        let entries = self.visible_entries().await?;
        Ok(self.engine.task_distribution(&entries))
    }

    /// # Errors
    /// Propagates identity and repository failures.
    pub async fn daily_trend(&self) -> Result<Vec<DailyTrendPoint>> {
        let entries = self.visible_entries().await?;
        Ok(self.engine.daily_trend(&entries))
    }

    /// CSV report of every visible entry, named for today.
    ///
    /// # Errors
    /// Propagates identity and repository failures.
    #[instrument(skip(self))]
    pub async fn export_csv(&self) -> Result<CsvReport> {
        let entries = self.visible_entries().await?;
        let report = self.engine.export_report(&entries, (self.today)());
        info!(file_name = %report.file_name, rows = entries.len(), "Report exported");
        Ok(report)
    }

    async fn visible_for(&self, viewer: &Viewer, filter: EntryFilter) -> Result<Vec<ActivityEntry>> {
        let entries = self.repository.list(&filter).await?;
        Ok(self.engine.visible_entries(&entries, viewer))
    }
}
