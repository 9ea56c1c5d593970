//! Mock port implementations for testing
//!
//! In-memory stand-ins for the entry repository and identity provider so
//! service tests run without a database.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;
use workpace_core::performance::{EntryRepository, IdentityProvider};
use workpace_core::scope::EntryFilter;
use workpace_domain::{ActivityEntry, Result as DomainResult, Viewer, WorkpaceError};

/// In-memory mock for `EntryRepository`.
///
/// Clones share storage, so several services (one per viewer) can observe
/// the same entries.
#[derive(Default, Clone)]
pub struct MockEntryRepository {
    entries: Arc<RwLock<Vec<ActivityEntry>>>,
    fail_inserts: bool,
}

impl MockEntryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock whose `insert` always fails with a database error.
    pub fn failing() -> Self {
        Self { fail_inserts: true, ..Self::default() }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn seed(&self, entries: impl IntoIterator<Item = ActivityEntry>) {
        self.entries.write().await.extend(entries);
    }
}

#[async_trait]
impl EntryRepository for MockEntryRepository {
    async fn insert(&self, entry: ActivityEntry) -> DomainResult<()> {
        if self.fail_inserts {
            return Err(WorkpaceError::Database("mock insert failure".to_string()));
        }
        self.entries.write().await.push(entry);
        Ok(())
    }

    async fn get(&self, id: Uuid) -> DomainResult<Option<ActivityEntry>> {
        Ok(self.entries.read().await.iter().find(|entry| entry.id() == id).cloned())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<bool> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|entry| entry.id() != id);
        Ok(entries.len() != before)
    }

    async fn list(&self, filter: &EntryFilter) -> DomainResult<Vec<ActivityEntry>> {
        let mut matching: Vec<ActivityEntry> =
            self.entries.read().await.iter().filter(|entry| filter.matches(entry)).cloned().collect();
        matching.sort_by_key(ActivityEntry::date);
        Ok(matching)
    }
}

/// Identity provider that always returns the same viewer.
#[derive(Clone)]
pub struct FixedIdentity(pub Viewer);

#[async_trait]
impl IdentityProvider for FixedIdentity {
    async fn current_viewer(&self) -> DomainResult<Viewer> {
        Ok(self.0.clone())
    }
}
