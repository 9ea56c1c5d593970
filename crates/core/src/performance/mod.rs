//! Performance tracking use cases and their ports

pub mod ports;
pub mod service;

pub use ports::{EntryRepository, IdentityProvider};
pub use service::{PerformanceService, TodayFn};
