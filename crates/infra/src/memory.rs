//! In-process entry storage
//!
//! Holds entries for the lifetime of the process. Suitable for demos,
//! embedding and tests where durability is not needed.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;
use workpace_core::performance::EntryRepository;
use workpace_core::scope::EntryFilter;
use workpace_domain::{ActivityEntry, Result as DomainResult, WorkpaceError};

/// Vector-backed implementation of `EntryRepository`.
///
/// Clones share the same storage.
#[derive(Debug, Default, Clone)]
pub struct InMemoryEntryRepository {
    entries: Arc<RwLock<Vec<ActivityEntry>>>,
}

impl InMemoryEntryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl EntryRepository for InMemoryEntryRepository {
    async fn insert(&self, entry: ActivityEntry) -> DomainResult<()> {
        let mut entries = self.entries.write().await;
        if entries.iter().any(|existing| existing.id() == entry.id()) {
            return Err(WorkpaceError::Database(format!("duplicate entry id {}", entry.id())));
        }
        entries.push(entry);
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
        // Stable sort keeps same-day entries in insertion order.
        matching.sort_by_key(ActivityEntry::date);
        Ok(matching)
    }
}
