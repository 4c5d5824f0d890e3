//! Momentum Scan Library
//!
//! Turns stock-screener CSV exports into a static, sortable HTML table.
//!
//! # Architecture
//!
//! The library is a single linear pipeline:
//! - Loads the export into ordered field → value rows
//! - Parses numeric fields null-safely (absent, never zero)
//! - Maps values to display text and a styling class by fixed thresholds
//! - Sorts rows by a chosen column with absent values last
//! - Renders one self-contained page with an inline re-sort script
//! - Builds the listing (manifest) of published scan pages
//!
//! The library does NOT:
//! - Parse command-line arguments or read configuration files
//! - Capture screenshots
//! - Run version-control commands
//!
//! That glue lives in the application layer (momentum-scan-cli).
//!
//! # Example Usage
//!
//! ```no_run
//! use momentum_scan::{RenderConfig, ScanTable, SortOrder, Theme};
//! use std::path::Path;
//!
//! let mut table = ScanTable::load(Path::new("stocks_export.csv")).unwrap();
//! table.sort_by("RS", SortOrder::Desc);
//!
//! let config = RenderConfig::new()
//!     .with_title("Momentum Scan")
//!     .with_theme(Theme::Dark);
//! std::fs::write("momentum_scan.html", table.render_html(&config)).unwrap();
//! ```

// Public modules
pub mod config;
pub mod format;
pub mod loader;
pub mod manifest;
pub mod parse;
pub mod render;
pub mod sort;
pub mod table;
pub mod types;

// Re-export main types for convenience
pub use config::RenderConfig;
pub use manifest::{
    discover_scans, render_manifest, scan_id, update_manifest, validate_scan_name, ScanRecord,
};
pub use parse::{parse_number, parse_percent};
pub use render::{render_html, Theme};
pub use sort::{resolve_column, sort_rows};
pub use table::ScanTable;
pub use types::{Cell, ColumnType, Result, Row, ScanError, SortOrder};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
