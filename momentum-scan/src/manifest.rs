//! Published scan listing
//!
//! Published pages live in one directory as `YYYY-MM-DD.html` or
//! `YYYY-MM-DD-<name>.html`. The manifest is never patched: every publish
//! rescans the directory and overwrites `manifest.js` with the full listing,
//! which a separate static front-end loads as `SCAN_MANIFEST`.

use crate::types::{Result, ScanError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fs;
use std::path::Path;

/// Manifest file name inside the scans directory
pub const MANIFEST_FILE: &str = "manifest.js";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One published scan page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRecord {
    /// File stem, also the front-end's `?date=` key
    pub id: String,
    pub date: NaiveDate,
    /// Suffix distinguishing several scans on one day
    pub name: Option<String>,
}

impl ScanRecord {
    pub fn new(date: NaiveDate, name: Option<&str>) -> Self {
        let name = name.filter(|n| !n.is_empty()).map(str::to_string);
        Self {
            id: scan_id(date, name.as_deref()),
            date,
            name,
        }
    }

    /// Parse a page file stem (`2024-01-01` or `2024-01-01-semis`)
    pub fn from_stem(stem: &str) -> Option<Self> {
        let date_part = stem.get(..10)?;
        let well_formed = date_part.char_indices().all(|(i, c)| match i {
            4 | 7 => c == '-',
            _ => c.is_ascii_digit(),
        });
        if !well_formed {
            return None;
        }
        let date = NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()?;

        let name = match &stem[10..] {
            "" => None,
            rest => Some(rest.strip_prefix('-').filter(|n| !n.is_empty())?),
        };

        Some(Self {
            id: stem.to_string(),
            date,
            name: name.map(str::to_string),
        })
    }

    /// Listing order: newest date first; within a date, names descending with
    /// the unnamed scan (sort key `""`) last.
    pub fn listing_order(a: &ScanRecord, b: &ScanRecord) -> Ordering {
        let key = |r: &ScanRecord| (r.date, r.name.clone().unwrap_or_default());
        key(b).cmp(&key(a))
    }
}

/// File stem for a scan published on `date` with an optional name
pub fn scan_id(date: NaiveDate, name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => format!("{}-{}", date.format(DATE_FORMAT), name),
        _ => date.format(DATE_FORMAT).to_string(),
    }
}

/// Check a scan name can be used as a file-name suffix inside the scans directory
pub fn validate_scan_name(name: &str) -> Result<()> {
    if name.contains(['/', '\\']) || name.contains("..") {
        return Err(ScanError::InvalidArgument(format!(
            "scan name must not contain path separators or '..', got '{}'",
            name
        )));
    }
    Ok(())
}

/// All published scans in `dir`, in listing order. A missing directory is empty.
pub fn discover_scans(dir: &Path) -> Result<Vec<ScanRecord>> {
    if !dir.exists() {
        log::debug!("Scans directory {:?} does not exist yet", dir);
        return Ok(Vec::new());
    }

    let mut scans = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("html") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        match ScanRecord::from_stem(stem) {
            Some(record) => scans.push(record),
            None => log::debug!("Skipping non-scan page {:?}", path),
        }
    }

    scans.sort_by(ScanRecord::listing_order);
    Ok(scans)
}

/// Manifest script text for `scans`
pub fn render_manifest(scans: &[ScanRecord]) -> Result<String> {
    let json = serde_json::to_string_pretty(scans)?;
    Ok(format!(
        "// Auto-generated manifest of available scans\n\
         // This file is updated by momentum-scan --publish\n\
         \n\
         const SCAN_MANIFEST = {{\n  scans: {}\n}};\n",
        json.replace('\n', "\n  ")
    ))
}

/// Rescan `dir` and overwrite its manifest. Returns the listing written.
pub fn update_manifest(dir: &Path) -> Result<Vec<ScanRecord>> {
    if !dir.is_dir() {
        return Err(ScanError::ManifestError(format!(
            "scans directory {:?} does not exist",
            dir
        )));
    }

    let scans = discover_scans(dir)?;
    let content = render_manifest(&scans)?;
    let path = dir.join(MANIFEST_FILE);
    fs::write(&path, content)?;

    log::info!("Manifest updated: {} scans available", scans.len());
    Ok(scans)
}
