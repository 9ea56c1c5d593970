//! Per-entry metric calculation

pub mod calculator;

pub use calculator::{
    expected_output_for_taken_time, target_achieved_percent, time_achieved_percent,
    MetricsCalculator,
};
