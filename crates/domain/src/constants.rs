//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! engine.

// Standards
pub const STANDARD_WORK_HOURS_PER_DAY: f64 = 8.0;
pub const ACHIEVEMENT_THRESHOLD_PERCENT: f64 = 100.0;

// Status labels shown to performers
pub const ACHIEVED_LABEL: &str = "Achieved";
pub const MOTIVATIONAL_LABEL: &str = "Keep Trying!";

// Export
pub const EXPORT_LINE_SEPARATOR: &str = "\n";
pub const EXPORT_CUMULATIVE_LABEL: &str = "Cumulative Total";
pub const EXPORT_FILE_PREFIX: &str = "daily_status_report_";
pub const EXPORT_FILE_EXTENSION: &str = "csv";
pub const EXPORT_HEADERS: [&str; 11] = [
    "Date",
    "Performer Name",
    "Title Name",
    "Task Type",
    "Standard Target",
    "Completed Work",
    "Estimated Time (hours)",
    "Taken Time (hours)",
    "Time Achieved (%)",
    "Target Achieved (%)",
    "Status",
];
