//! Role-based visibility
//!
//! Runs before aggregation and ranking. Nothing downstream re-checks who may
//! see an entry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use workpace_domain::{ActivityEntry, Role, Viewer};

/// Whether `viewer` may see `entry`.
pub fn can_view(viewer: &Viewer, entry: &ActivityEntry) -> bool {
    match viewer.role {
        Role::Performer => entry.owner_id() == viewer.id,
        Role::Lead => entry.scope_id() == viewer.scope_id,
        Role::Manager | Role::Admin => true,
    }
}

/// Entries `viewer` may see, in input order.
pub fn visible_entries(entries: &[ActivityEntry], viewer: &Viewer) -> Vec<ActivityEntry> {
    entries.iter().filter(|entry| can_view(viewer, entry)).cloned().collect()
}

/// Entries dated `date`.
pub fn entries_on(entries: &[ActivityEntry], date: NaiveDate) -> impl Iterator<Item = &ActivityEntry> {
    entries.iter().filter(move |entry| entry.date() == date)
}

/// Storage-level filter handed to repositories.
///
/// Every populated field must match. An empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFilter {
    pub owner_id: Option<String>,
    pub scope_id: Option<String>,
    pub date: Option<NaiveDate>,
}

impl EntryFilter {
    /// Filter that selects exactly what `viewer` may see.
    pub fn for_viewer(viewer: &Viewer) -> Self {
        match viewer.role {
            Role::Performer => Self { owner_id: Some(viewer.id.clone()), ..Self::default() },
            Role::Lead => Self { scope_id: Some(viewer.scope_id.clone()), ..Self::default() },
            Role::Manager | Role::Admin => Self::default(),
        }
    }

    #[must_use]
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn matches(&self, entry: &ActivityEntry) -> bool {
        self.owner_id.as_deref().map_or(true, |owner| entry.owner_id() == owner)
            && self.scope_id.as_deref().map_or(true, |scope| entry.scope_id() == scope)
            && self.date.map_or(true, |date| entry.date() == date)
    }
}
