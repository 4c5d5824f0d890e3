//! Core types for the momentum scan library
//!
//! This module defines the row model read from screener exports, the formatted
//! cell emitted by the field formatters, and the error type shared by every
//! operation in the crate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Result type for scan operations
pub type Result<T> = std::result::Result<T, ScanError>;

/// One screener record: field name → raw string value, in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    fields: Vec<(String, String)>,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, replacing the value if the name already exists
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Raw value of a field, `None` when the record does not carry it
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}

/// A formatted table cell: display text plus the CSS class that styles it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Text shown in the cell (already formatted, not yet HTML-escaped)
    pub text: String,
    /// Visual category; only selects a style
    pub class: &'static str,
}

impl Cell {
    pub fn new(text: impl Into<String>, class: &'static str) -> Self {
        Self {
            text: text.into(),
            class,
        }
    }

    /// Dash placeholder used for absent values
    pub fn placeholder(class: &'static str) -> Self {
        Self::new(PLACEHOLDER, class)
    }
}

/// Text rendered for missing or unparseable values
pub const PLACEHOLDER: &str = "-";

/// Sort direction requested for the rendered table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(ScanError::InvalidArgument(format!(
                "sort order must be 'asc' or 'desc', got '{}'",
                other
            ))),
        }
    }
}

/// Comparison type a table column declares to the in-browser sorter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    String,
    Number,
    Percent,
}

impl ColumnType {
    /// Value of the header cell's `data-type` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::String => "string",
            ColumnType::Number => "number",
            ColumnType::Percent => "percent",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while loading, rendering or publishing a scan
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Failed to parse CSV file: {0}")]
    CsvParseError(#[from] csv::Error),

    #[error("Failed to build manifest: {0}")]
    ManifestError(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
