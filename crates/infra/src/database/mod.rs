//! Database implementations

pub mod entry_repository;
pub mod manager;

pub use entry_repository::*;
pub use manager::*;
