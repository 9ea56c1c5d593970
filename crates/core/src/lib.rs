//! # Workpace Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The metrics engine: validation, per-entry metrics, weighted summaries,
//!   scope filtering, leaderboards and CSV export
//! - Port/adapter interfaces (traits)
//! - The performance service use cases
//!
//! ## Architecture Principles
//! - Only depends on `workpace-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod aggregation;
pub mod engine;
pub mod export;
pub mod metrics;
pub mod performance;
pub mod ranking;
pub mod scope;
pub mod utils;
pub mod validation;

// Re-export specific items to avoid ambiguity
pub use aggregation::Aggregator;
pub use engine::MetricsEngine;
pub use export::{CsvExporter, CsvReport};
pub use metrics::MetricsCalculator;
pub use performance::ports::{EntryRepository, IdentityProvider};
pub use performance::PerformanceService;
pub use scope::EntryFilter;
pub use validation::EntryValidator;
