//! Time-weighted achievement summaries
//!
//! Each entry contributes the number of standard working days its output
//! represents, scaled back to an hourly percentage and weighted by the hours
//! it took. The weighted sum is divided by total hours, so a long entry
//! moves the summary more than a short one.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use workpace_domain::constants::ACHIEVEMENT_THRESHOLD_PERCENT;
use workpace_domain::{ActivityEntry, GroupKey, GroupedSummary, StandardsCatalog, Summary};

use crate::scope::entries_on;
use crate::utils::round2;

/// Builds [`Summary`] values from already-scoped entry sets.
///
/// Performs no authorization; callers pass the entries a viewer may see.
#[derive(Debug, Clone)]
pub struct Aggregator {
    catalog: Arc<StandardsCatalog>,
}

impl Aggregator {
    pub fn new(catalog: Arc<StandardsCatalog>) -> Self {
        Self { catalog }
    }

    /// Summarize any collection of entries.
    pub fn summarize<'a, I>(&self, entries: I) -> Summary
    where
        I: IntoIterator<Item = &'a ActivityEntry>,
    {
        let hours_per_day = self.catalog.work_hours_per_day();
        let mut total_work = 0.0;
        let mut total_time = 0.0;
        let mut sum_weighted = 0.0;

        for entry in entries {
            total_work += entry.completed_work();
            total_time += entry.taken_time();

            let standard = self.catalog.target_for(entry.task_type());
            let taken = entry.taken_time();
            if standard <= 0.0 || taken <= 0.0 {
                continue;
            }

            let contribution = (entry.completed_work() / standard) * hours_per_day;
            sum_weighted += (contribution / taken) * 100.0 * taken;
        }

        let weighted_achievement_percent =
            if total_time > 0.0 { round2(sum_weighted / total_time) } else { 0.0 };

        Summary {
            total_work,
            total_time,
            weighted_achievement_percent,
            is_achieved: weighted_achievement_percent >= ACHIEVEMENT_THRESHOLD_PERCENT,
        }
    }

    /// Summary of the entries dated `date`.
    pub fn daily_summary(&self, entries: &[ActivityEntry], date: NaiveDate) -> Summary {
        self.summarize(entries_on(entries, date))
    }

    /// Summary of every entry passed in.
    pub fn cumulative_summary(&self, entries: &[ActivityEntry]) -> Summary {
        self.summarize(entries)
    }

    /// One summary per distinct value of `key`, each computed independently.
    pub fn grouped_summary(&self, entries: &[ActivityEntry], key: GroupKey) -> GroupedSummary {
        let mut partitions: BTreeMap<&str, Vec<&ActivityEntry>> = BTreeMap::new();
        for entry in entries {
            partitions.entry(group_label(entry, key)).or_default().push(entry);
        }

        partitions
            .into_iter()
            .map(|(label, members)| (label.to_string(), self.summarize(members)))
            .collect()
    }
}

/// Partition label of an entry for `key`.
pub fn group_label(entry: &ActivityEntry, key: GroupKey) -> &str {
    match key {
        GroupKey::Performer => entry.performer_name(),
        GroupKey::Client => entry.scope_id(),
        GroupKey::TaskType => entry.task_type(),
    }
}
