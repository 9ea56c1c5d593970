//! # Workpace Domain
//!
//! Business domain types and models for Workpace.
//!
//! This crate contains:
//! - Activity entry types (raw input, validated entry, stored entry)
//! - The standards catalog and reporting types
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other Workpace crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
