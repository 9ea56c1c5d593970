//! Domain types and models
//!
//! - `catalog`: task type standards
//! - `entry`: raw submissions, validated entries, stored entries
//! - `viewer`: roles and viewer identity
//! - `period`: reporting periods for rankings and filters
//! - `summary`: aggregation and reporting results

pub mod catalog;
pub mod entry;
pub mod period;
pub mod summary;
pub mod viewer;

pub use catalog::{StandardDefinition, StandardsCatalog, TargetUnit};
pub use entry::{
    AchievementStatus, ActivityEntry, EntryMetrics, EntryOwnership, MetricsPreview, RawEntryInput,
    ValidEntry,
};
pub use period::Period;
pub use summary::{
    DailyTrendPoint, DashboardStats, GroupKey, GroupedSummary, Leaderboard, RankingEntry, Summary,
    TaskDistribution,
};
pub use viewer::{Role, Viewer};
