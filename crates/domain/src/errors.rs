//! Error types used throughout the workspace

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Workpace
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum WorkpaceError {
    /// One or more required entry fields are absent or invalid.
    #[error("{0}")]
    MissingField(ValidationError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl WorkpaceError {
    /// True for failures the submitter can fix by correcting the input.
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, Self::MissingField(_) | Self::InvalidInput(_))
    }
}

impl From<ValidationError> for WorkpaceError {
    fn from(value: ValidationError) -> Self {
        Self::MissingField(value)
    }
}

/// Result type alias for Workpace operations
pub type Result<T> = std::result::Result<T, WorkpaceError>;

/// Field-level failures collected while validating a submitted entry.
///
/// Validation is all-or-nothing, so every failing field is reported in one
/// error rather than stopping at the first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a single field error
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut err = Self::new();
        err.add_field_error(field, message);
        err
    }

    /// Add a field-level error
    pub fn add_field_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Add a field error with a machine-readable code
    pub fn add_error_with_code(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) {
        self.errors.push(FieldError::new(field, message).with_code(code));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Errors recorded against a specific field
    pub fn field_errors(&self, field: &str) -> Vec<&FieldError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    /// Names of every field that failed, in reporting order
    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.as_slice() {
            [] => write!(f, "Validation error with no specific field errors"),
            [single] => write!(f, "Missing or invalid field {}: {}", single.field, single.message),
            many => {
                write!(f, "Missing or invalid fields ({}): ", many.len())?;
                for (i, error) in many.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}: {}", error.field, error.message)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Individual field error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into(), code: None }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_field_error_message() {
        let err = ValidationError::field("title_name", "is required");
        assert_eq!(err.to_string(), "Missing or invalid field title_name: is required");
    }

    #[test]
    fn multiple_field_errors_are_listed() {
        let mut err = ValidationError::new();
        err.add_field_error("performer_name", "is required");
        err.add_error_with_code("taken_time", "must be a positive number", "not_positive");

        assert_eq!(err.error_count(), 2);
        assert_eq!(err.fields(), vec!["performer_name", "taken_time"]);
        assert_eq!(err.field_errors("taken_time")[0].code.as_deref(), Some("not_positive"));
        assert!(err.to_string().starts_with("Missing or invalid fields (2): "));
    }

    #[test]
    fn workpace_error_serializes_tagged() {
        let err = WorkpaceError::NotFound("entry 42".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"type":"NotFound","message":"entry 42"}"#);

        let back: WorkpaceError = serde_json::from_str(&json).unwrap();
        assert!(matches!(back, WorkpaceError::NotFound(id) if id == "entry 42"));
    }

    #[test]
    fn validation_errors_are_user_correctable() {
        let err: WorkpaceError = ValidationError::field("date", "is required").into();
        assert!(err.is_user_correctable());
        assert!(!WorkpaceError::Database("locked".into()).is_user_correctable());
    }
}
