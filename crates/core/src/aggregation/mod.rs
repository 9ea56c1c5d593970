//! Summaries over scoped entry sets
//!
//! - `aggregator`: time-weighted daily, cumulative and grouped summaries
//! - `dashboard`: plain means, counts and trends for the overview

pub mod aggregator;
pub mod dashboard;

pub use aggregator::{group_label, Aggregator};
pub use dashboard::{daily_trend, dashboard_stats, task_distribution};
