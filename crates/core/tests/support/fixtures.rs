//! Entry and viewer fixtures

use std::sync::Arc;

use chrono::NaiveDate;
use workpace_core::{MetricsEngine, PerformanceService};
use workpace_domain::{RawEntryInput, Role, Viewer};

use super::repositories::{FixedIdentity, MockEntryRepository};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// A complete submission.
pub fn raw_entry(
    performer: &str,
    task_type: &str,
    completed: f64,
    estimated: f64,
    taken: f64,
    on: &str,
) -> RawEntryInput {
    RawEntryInput {
        performer_name: Some(performer.to_string()),
        title_name: Some(format!("{performer}'s title")),
        task_type: Some(task_type.to_string()),
        completed_work: Some(completed),
        estimated_time: Some(estimated),
        taken_time: Some(taken),
        date: Some(on.to_string()),
    }
}

pub fn performer(id: &str, scope: &str, name: &str) -> Viewer {
    Viewer::new(id, scope, Role::Performer, name)
}

pub fn viewer(id: &str, scope: &str, role: Role) -> Viewer {
    Viewer::new(id, scope, role, id)
}

fn march_tenth() -> NaiveDate {
    date(2024, 3, 10)
}

/// Service for `viewer` over shared mock storage, with "today" fixed to
/// 2024-03-10.
pub fn service_for(repository: &MockEntryRepository, viewer: Viewer) -> PerformanceService {
    PerformanceService::new(
        Arc::new(MetricsEngine::default()),
        Arc::new(repository.clone()),
        Arc::new(FixedIdentity(viewer)),
    )
    .with_today(march_tenth)
}
