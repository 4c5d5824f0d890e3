//! Main table API
//!
//! `ScanTable` is the entry point for the library: load an export, order it,
//! and render it.

use crate::config::RenderConfig;
use crate::loader;
use crate::render;
use crate::sort;
use crate::types::{Result, Row, SortOrder};
use std::io::Read;
use std::path::Path;

/// A loaded screener export, kept in display order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanTable {
    rows: Vec<Row>,
}

impl ScanTable {
    /// Wrap rows that were built elsewhere
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Load a CSV export
    ///
    /// # Example
    /// ```no_run
    /// use momentum_scan::{RenderConfig, ScanTable, SortOrder};
    /// use std::path::Path;
    ///
    /// let mut table = ScanTable::load(Path::new("stocks_export.csv")).unwrap();
    /// table.sort_by("BIS", SortOrder::Desc);
    /// let html = table.render_html(&RenderConfig::new());
    /// ```
    pub fn load(path: &Path) -> Result<Self> {
        loader::load_csv(path).map(Self::new)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        loader::load_csv_from_reader(reader).map(Self::new)
    }

    /// Reorder rows by `column`; rows without a value go last
    pub fn sort_by(&mut self, column: &str, order: SortOrder) {
        sort::sort_rows(&mut self.rows, column, order);
        log::info!("Sorted by {} ({})", column, order);
    }

    pub fn render_html(&self, config: &RenderConfig) -> String {
        render::render_html(&self.rows, config)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
