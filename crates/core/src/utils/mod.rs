//! Shared utilities for the engine

pub mod math;

pub use math::{mean, positive, round2};
