//! Submission validation

pub mod entry_validator;

pub use entry_validator::EntryValidator;
