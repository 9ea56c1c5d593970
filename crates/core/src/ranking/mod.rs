//! Performer leaderboards

pub mod engine;

pub use engine::{leaderboard, rank};
