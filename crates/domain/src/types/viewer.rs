//! Viewer identity and roles

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_domain_status_conversions;
use crate::types::entry::EntryOwnership;

/// Role of the person looking at (or submitting) entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Performer,
    Lead,
    Manager,
    Admin,
}

impl_domain_status_conversions!(Role {
    Performer => "performer",
    Lead => "lead",
    Manager => "manager",
    Admin => "admin",
});

impl Role {
    /// Route-style gate: an empty allow-list admits every role.
    pub fn is_permitted(self, allowed: &[Role]) -> bool {
        allowed.is_empty() || allowed.contains(&self)
    }
}

/// Identity of the current viewer as supplied by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Viewer {
    pub id: String,
    pub scope_id: String,
    pub role: Role,
    pub performer_name: String,
}

impl Viewer {
    pub fn new(
        id: impl Into<String>,
        scope_id: impl Into<String>,
        role: Role,
        performer_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            scope_id: scope_id.into(),
            role,
            performer_name: performer_name.into(),
        }
    }

    /// Ownership stamped onto entries this viewer submits.
    pub fn ownership(&self) -> EntryOwnership {
        EntryOwnership { owner_id: self.id.clone(), scope_id: self.scope_id.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("Manager".parse::<Role>().unwrap(), Role::Manager);
        assert_eq!(Role::Lead.to_string(), "lead");
        assert!("supervisor".parse::<Role>().is_err());
    }

    #[test]
    fn empty_allow_list_admits_everyone() {
        assert!(Role::Performer.is_permitted(&[]));
        assert!(Role::Admin.is_permitted(&[Role::Manager, Role::Admin]));
        assert!(!Role::Performer.is_permitted(&[Role::Manager, Role::Admin]));
    }

    #[test]
    fn ownership_comes_from_viewer_identity() {
        let viewer = Viewer::new("u-1", "client-a", Role::Performer, "Asha");
        let ownership = viewer.ownership();
        assert_eq!(ownership.owner_id, "u-1");
        assert_eq!(ownership.scope_id, "client-a");
    }
}
