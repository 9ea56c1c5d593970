//! Report export

pub mod csv;

pub use csv::{escape_field, export_file_name, CsvExporter, CsvReport};
