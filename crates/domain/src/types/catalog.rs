//! Standards catalog
//!
//! Immutable mapping of task type → standard output target. The catalog is a
//! value handed to the engine at construction; nothing reads it from global
//! state, so alternate catalogs can be swapped in per engine instance.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::constants::STANDARD_WORK_HOURS_PER_DAY;
use crate::errors::{Result, WorkpaceError};
use crate::impl_domain_status_conversions;

/// Unit a standard target is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum TargetUnit {
    PagesPerDay,
    TitlesPerDay,
    ReferencesPerDay,
}

impl_domain_status_conversions!(TargetUnit {
    PagesPerDay => "pages/day",
    TitlesPerDay => "titles/day",
    ReferencesPerDay => "references/day",
});

/// Standard output for one task type over a standard workday.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct StandardDefinition {
    pub target: f64,
    pub unit: TargetUnit,
}

impl StandardDefinition {
    pub fn new(target: f64, unit: TargetUnit) -> Self {
        Self { target, unit }
    }

    /// Human-readable label, e.g. `900 pages/day`.
    pub fn label(&self) -> String {
        format!("{} {}", self.target, self.unit)
    }
}

/// Immutable task type → standard lookup.
///
/// Deserialization runs the same checks as [`StandardsCatalog::from_definitions`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CatalogRepr")]
pub struct StandardsCatalog {
    standards: BTreeMap<String, StandardDefinition>,
    work_hours_per_day: f64,
}

#[derive(Deserialize)]
struct CatalogRepr {
    standards: BTreeMap<String, StandardDefinition>,
    work_hours_per_day: f64,
}

impl TryFrom<CatalogRepr> for StandardsCatalog {
    type Error = WorkpaceError;

    fn try_from(repr: CatalogRepr) -> Result<Self> {
        if !(repr.work_hours_per_day.is_finite() && repr.work_hours_per_day > 0.0) {
            return Err(WorkpaceError::Config(format!(
                "work hours per day must be a positive number, got {}",
                repr.work_hours_per_day
            )));
        }
        let mut catalog = Self::from_definitions(repr.standards)?;
        catalog.work_hours_per_day = repr.work_hours_per_day;
        Ok(catalog)
    }
}

impl StandardsCatalog {
    /// Build a catalog from explicit definitions.
    ///
    /// # Errors
    /// Returns `WorkpaceError::Config` when the list is empty, a task type is
    /// blank or duplicated, or a target is not a positive finite number.
    pub fn from_definitions<I, S>(definitions: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, StandardDefinition)>,
        S: Into<String>,
    {
        let mut standards = BTreeMap::new();

        for (task_type, definition) in definitions {
            let task_type = task_type.into();
            let key = task_type.trim();
            if key.is_empty() {
                return Err(WorkpaceError::Config("task type name must not be blank".into()));
            }
            if !(definition.target.is_finite() && definition.target > 0.0) {
                return Err(WorkpaceError::Config(format!(
                    "standard target for '{key}' must be a positive number, got {}",
                    definition.target
                )));
            }
            if standards.insert(key.to_string(), definition).is_some() {
                return Err(WorkpaceError::Config(format!("duplicate task type '{key}'")));
            }
        }

        if standards.is_empty() {
            return Err(WorkpaceError::Config("standards catalog must not be empty".into()));
        }

        Ok(Self { standards, work_hours_per_day: STANDARD_WORK_HOURS_PER_DAY })
    }

    /// Look up a task type's definition.
    pub fn get(&self, task_type: &str) -> Option<&StandardDefinition> {
        self.standards.get(task_type)
    }

    /// Target for a task type, `0.0` when the task type is unknown.
    pub fn target_for(&self, task_type: &str) -> f64 {
        self.get(task_type).map_or(0.0, |definition| definition.target)
    }

    pub fn contains(&self, task_type: &str) -> bool {
        self.standards.contains_key(task_type)
    }

    /// Task type names in sorted order.
    pub fn task_types(&self) -> impl Iterator<Item = &str> {
        self.standards.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StandardDefinition)> {
        self.standards.iter().map(|(name, definition)| (name.as_str(), definition))
    }

    pub fn len(&self) -> usize {
        self.standards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.standards.is_empty()
    }

    /// Length of the standard workday in hours.
    pub fn work_hours_per_day(&self) -> f64 {
        self.work_hours_per_day
    }

    /// `<target> <unit>` label for the export, empty for unknown task types.
    pub fn target_label(&self, task_type: &str) -> String {
        self.get(task_type).map(StandardDefinition::label).unwrap_or_default()
    }
}

impl Default for StandardsCatalog {
    /// The eight production task types and their standard daily output.
    fn default() -> Self {
        use TargetUnit::{PagesPerDay, ReferencesPerDay, TitlesPerDay};

        let standards = [
            ("Prestyle", 900.0, PagesPerDay),
            ("Preedit", 300.0, PagesPerDay),
            ("FL Validation", 600.0, PagesPerDay),
            ("Revises Validation", 1200.0, PagesPerDay),
            ("Normalisation", 300.0, PagesPerDay),
            ("Cast-off XML Conversion", 4.0, TitlesPerDay),
            ("Ref Edit", 400.0, ReferencesPerDay),
            ("Style Editing", 80.0, PagesPerDay),
        ]
        .into_iter()
        .map(|(name, target, unit)| (name.to_string(), StandardDefinition::new(target, unit)))
        .collect();

        Self { standards, work_hours_per_day: STANDARD_WORK_HOURS_PER_DAY }
    }
}
