//! Output formatting module
//!
//! Renders any resource kind through one pipeline in four formats:
//! table, JSON, CSV and bare IDs.

mod adapters;
pub mod common;
mod csv;
mod formatter;
mod json;
mod table;
#[cfg(test)]
mod tests_support;

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::str::FromStr;

use crate::error::GcpError;

pub use adapters::{
    folder_headers, folders_to_resources, organization_headers, organizations_to_resources,
    to_resources,
};
pub use formatter::Formatter;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Bordered ASCII table (default)
    Table,
    /// Indented JSON array
    Json,
    /// Comma-separated values
    Csv,
    /// One resource ID per line
    Id,
}

impl FromStr for OutputFormat {
    type Err = GcpError;

    /// Selectors match exactly; anything else is rejected with the literal value
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "id" => Ok(OutputFormat::Id),
            other => Err(GcpError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Id => write!(f, "id"),
        }
    }
}

/// JSON object projection of a resource
///
/// Implemented for every `Serialize` type, so resource kinds get it from
/// their serde derive and field names.
pub trait ToJsonObject {
    fn to_json(&self) -> serde_json::Result<serde_json::Value>;
}

impl<T: Serialize> ToJsonObject for T {
    fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// Common view of a displayable cloud resource
///
/// The formatter only talks to resources through this trait; it never
/// looks at the concrete kind.
pub trait Resource: ToJsonObject {
    /// Bare identifier (e.g. "123456789")
    fn id(&self) -> &str;

    /// Human-readable label, may be empty
    fn display_name(&self) -> &str;

    /// Lifecycle state label (e.g. "ACTIVE")
    fn state(&self) -> &str;

    fn create_time(&self) -> DateTime<Utc>;

    fn update_time(&self) -> DateTime<Utc>;

    /// Ordered display values for table and CSV output
    fn table_row(&self) -> Vec<String>;
}
