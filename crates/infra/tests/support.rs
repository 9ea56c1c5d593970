//! Shared helpers for infrastructure integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use tempfile::TempDir;
use workpace_core::{MetricsEngine, PerformanceService};
use workpace_domain::{RawEntryInput, Role, Viewer};
use workpace_infra::{DbManager, SqliteEntryRepository, StaticIdentityProvider};

/// Temporary database wrapper that keeps the underlying file alive for the
/// duration of a test run.
pub struct TestDatabase {
    pub manager: Arc<DbManager>,
    _temp_dir: TempDir,
}

impl TestDatabase {
    /// Create a new temporary database with migrations applied.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("temp dir should be created");
        let db_path = temp_dir.path().join("test.db");

        let manager = DbManager::new(&db_path, 4).expect("db manager should be created");
        manager.run_migrations().expect("schema migrations should apply");

        Self { manager: Arc::new(manager), _temp_dir: temp_dir }
    }

    /// Service bound to `viewer`, reading and writing this database.
    pub fn service_for(&self, viewer: Viewer) -> PerformanceService {
        PerformanceService::new(
            Arc::new(MetricsEngine::default()),
            Arc::new(SqliteEntryRepository::new(Arc::clone(&self.manager))),
            Arc::new(StaticIdentityProvider::new(viewer)),
        )
        .with_today(march_tenth)
    }
}

impl Default for TestDatabase {
    fn default() -> Self {
        Self::new()
    }
}

pub fn march_tenth() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 10).expect("valid date")
}

pub fn performer(id: &str, scope: &str, name: &str) -> Viewer {
    Viewer::new(id, scope, Role::Performer, name)
}

pub fn raw_entry(
    performer: &str,
    task_type: &str,
    completed: f64,
    estimated: f64,
    taken: f64,
    date: &str,
) -> RawEntryInput {
    RawEntryInput {
        performer_name: Some(performer.to_string()),
        title_name: Some(format!("{performer}'s title")),
        task_type: Some(task_type.to_string()),
        completed_work: Some(completed),
        estimated_time: Some(estimated),
        taken_time: Some(taken),
        date: Some(date.to_string()),
    }
}
