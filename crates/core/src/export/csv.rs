//! Daily status report in CSV form
//!
//! Layout:
//! - header row
//! - one row per entry, in input order
//! - a `Cumulative Total` row with totals and the weighted percentage
//!
//! Lines are joined with `\n` and there is no trailing newline. Quantities
//! print in their shortest form (`450`, `4.5`), percentages with two
//! decimals.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use workpace_domain::constants::{
    EXPORT_CUMULATIVE_LABEL, EXPORT_FILE_EXTENSION, EXPORT_FILE_PREFIX, EXPORT_HEADERS,
    EXPORT_LINE_SEPARATOR,
};
use workpace_domain::{AchievementStatus, ActivityEntry, StandardsCatalog};

use crate::aggregation::Aggregator;

/// Rendered report plus the file name it should be saved under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvReport {
    pub file_name: String,
    pub content: String,
}

/// CSV report formatter
#[derive(Debug, Clone)]
pub struct CsvExporter {
    catalog: Arc<StandardsCatalog>,
    aggregator: Aggregator,
}

impl CsvExporter {
    pub fn new(catalog: Arc<StandardsCatalog>) -> Self {
        let aggregator = Aggregator::new(Arc::clone(&catalog));
        Self { catalog, aggregator }
    }

    /// Render the full report for `entries`.
    pub fn render(&self, entries: &[ActivityEntry]) -> String {
        let mut lines = Vec::with_capacity(entries.len() + 2);
        lines.push(header());
        lines.extend(entries.iter().map(|entry| self.format_entry(entry)));
        lines.push(self.format_cumulative(entries));
        lines.join(EXPORT_LINE_SEPARATOR)
    }

    /// Render `entries` as the report for `date`.
    pub fn report(&self, entries: &[ActivityEntry], date: NaiveDate) -> CsvReport {
        CsvReport { file_name: export_file_name(date), content: self.render(entries) }
    }

    fn format_entry(&self, entry: &ActivityEntry) -> String {
        let fields = [
            entry.iso_date(),
            escape_field(entry.performer_name()),
            escape_field(entry.title_name()),
            escape_field(entry.task_type()),
            escape_field(&self.catalog.target_label(entry.task_type())),
            format_quantity(entry.completed_work()),
            format_quantity(entry.estimated_time()),
            format_quantity(entry.taken_time()),
            format_percent(entry.time_achieved_percent()),
            format_percent(entry.target_achieved_percent()),
            entry.status().label().to_string(),
        ];
        fields.join(",")
    }

    fn format_cumulative(&self, entries: &[ActivityEntry]) -> String {
        let summary = self.aggregator.cumulative_summary(entries);
        let status = AchievementStatus::from_percent(summary.weighted_achievement_percent);

        let fields = [
            EXPORT_CUMULATIVE_LABEL.to_string(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            format_quantity(summary.total_work),
            String::new(),
            format_quantity(summary.total_time),
            String::new(),
            format_percent(summary.weighted_achievement_percent),
            status.label().to_string(),
        ];
        fields.join(",")
    }
}

fn header() -> String {
    EXPORT_HEADERS.join(",")
}

/// Quote a field containing `,` or `"`, doubling any inner quotes.
pub fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Shortest decimal form: `450`, `4.5`.
fn format_quantity(value: f64) -> String {
    value.to_string()
}

fn format_percent(value: f64) -> String {
    format!("{value:.2}")
}

/// `daily_status_report_<YYYY-MM-DD>.csv`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("{EXPORT_FILE_PREFIX}{}.{EXPORT_FILE_EXTENSION}", date.format("%Y-%m-%d"))
}
