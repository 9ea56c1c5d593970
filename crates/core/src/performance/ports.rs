//! Port interfaces for performance tracking
//!
//! These traits define the boundaries between the metrics engine and
//! storage or identity implementations.

use async_trait::async_trait;
use uuid::Uuid;
use workpace_domain::{ActivityEntry, Result, Viewer};

use crate::scope::EntryFilter;

/// Trait for persisting activity entries
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Store a new entry
    async fn insert(&self, entry: ActivityEntry) -> Result<()>;

    /// Fetch an entry by id
    async fn get(&self, id: Uuid) -> Result<Option<ActivityEntry>>;

    /// Delete an entry by id, returning whether it existed
    async fn delete(&self, id: Uuid) -> Result<bool>;

    /// Entries matching every populated field of `filter`, oldest date first
    async fn list(&self, filter: &EntryFilter) -> Result<Vec<ActivityEntry>>;
}

/// Trait for resolving who is making the current request
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn current_viewer(&self) -> Result<Viewer>;
}
