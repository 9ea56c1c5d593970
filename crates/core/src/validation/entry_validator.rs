//! Entry validator
//!
//! Checks a raw submission for completeness and numeric sanity. All seven
//! fields are checked on every call so the caller gets the full list of
//! problems at once; nothing is accepted partially.

use std::sync::Arc;

use chrono::NaiveDate;
use workpace_domain::{RawEntryInput, StandardsCatalog, ValidEntry, ValidationError};

use crate::utils::positive;

pub const FIELD_PERFORMER_NAME: &str = "performer_name";
pub const FIELD_TITLE_NAME: &str = "title_name";
pub const FIELD_TASK_TYPE: &str = "task_type";
pub const FIELD_COMPLETED_WORK: &str = "completed_work";
pub const FIELD_ESTIMATED_TIME: &str = "estimated_time";
pub const FIELD_TAKEN_TIME: &str = "taken_time";
pub const FIELD_DATE: &str = "date";

const CODE_REQUIRED: &str = "required";
const CODE_NOT_POSITIVE: &str = "not_positive";
const CODE_UNKNOWN_TASK_TYPE: &str = "unknown_task_type";
const CODE_INVALID_DATE: &str = "invalid_date";

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Validates raw submissions against the injected standards catalog.
#[derive(Debug, Clone)]
pub struct EntryValidator {
    catalog: Arc<StandardsCatalog>,
}

impl EntryValidator {
    pub fn new(catalog: Arc<StandardsCatalog>) -> Self {
        Self { catalog }
    }

    /// Validate a submission.
    ///
    /// # Errors
    /// Returns a `ValidationError` listing every field that is absent, blank,
    /// not a positive number, an unknown task type, or not an ISO date.
    pub fn validate(&self, raw: &RawEntryInput) -> Result<ValidEntry, ValidationError> {
        let mut errors = ValidationError::new();

        let performer_name =
            required_text(&mut errors, FIELD_PERFORMER_NAME, raw.performer_name.as_deref());
        let title_name = required_text(&mut errors, FIELD_TITLE_NAME, raw.title_name.as_deref());
        let task_type = self.known_task_type(&mut errors, raw.task_type.as_deref());
        let completed_work = required_positive(&mut errors, FIELD_COMPLETED_WORK, raw.completed_work);
        let estimated_time = required_positive(&mut errors, FIELD_ESTIMATED_TIME, raw.estimated_time);
        let taken_time = required_positive(&mut errors, FIELD_TAKEN_TIME, raw.taken_time);
        let date = required_date(&mut errors, raw.date.as_deref());

        match (performer_name, title_name, task_type, completed_work, estimated_time, taken_time, date)
        {
            (
                Some(performer_name),
                Some(title_name),
                Some(task_type),
                Some(completed_work),
                Some(estimated_time),
                Some(taken_time),
                Some(date),
            ) if errors.is_empty() => Ok(ValidEntry {
                date,
                performer_name,
                title_name,
                task_type,
                completed_work,
                estimated_time,
                taken_time,
            }),
            _ => Err(errors),
        }
    }

    fn known_task_type(&self, errors: &mut ValidationError, value: Option<&str>) -> Option<String> {
        let task_type = required_text(errors, FIELD_TASK_TYPE, value)?;
        if self.catalog.contains(&task_type) {
            Some(task_type)
        } else {
            errors.add_error_with_code(
                FIELD_TASK_TYPE,
                format!("unknown task type '{task_type}'"),
                CODE_UNKNOWN_TASK_TYPE,
            );
            None
        }
    }
}

fn required_text(errors: &mut ValidationError, field: &str, value: Option<&str>) -> Option<String> {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => Some(text.to_string()),
        _ => {
            errors.add_error_with_code(field, "is required", CODE_REQUIRED);
            None
        }
    }
}

fn required_positive(errors: &mut ValidationError, field: &str, value: Option<f64>) -> Option<f64> {
    match value {
        None => {
            errors.add_error_with_code(field, "is required", CODE_REQUIRED);
            None
        }
        Some(_) => {
            let checked = positive(value);
            if checked.is_none() {
                errors.add_error_with_code(field, "must be a positive number", CODE_NOT_POSITIVE);
            }
            checked
        }
    }
}

fn required_date(errors: &mut ValidationError, value: Option<&str>) -> Option<NaiveDate> {
    let text = required_text(errors, FIELD_DATE, value)?;
    match NaiveDate::parse_from_str(&text, ISO_DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.add_error_with_code(
                FIELD_DATE,
                format!("'{text}' is not an ISO 8601 date (YYYY-MM-DD)"),
                CODE_INVALID_DATE,
            );
            None
        }
    }
}
