//! # Workpace Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - SQLite entry storage over an r2d2 connection pool
//! - An in-process entry store
//! - Identity providers
//! - Configuration loading (environment variables, JSON/TOML files)
//! - Logging bootstrap
//!
//! ## Architecture
//! - Implements traits defined in `workpace-core`
//! - Contains all "impure" code (I/O, environment, global subscribers)

pub mod config;
pub mod database;
pub mod errors;
pub mod identity;
pub mod memory;
pub mod observability;

// Re-export commonly used items
pub use database::*;
pub use errors::InfraError;
pub use identity::StaticIdentityProvider;
pub use memory::InMemoryEntryRepository;
pub use observability::init_logging;
