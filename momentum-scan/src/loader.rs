//! Screener export loading
//!
//! The first record is the header and names every field. Records shorter than
//! the header simply lack the trailing fields, extra trailing values are
//! dropped, and blank lines are skipped.

use crate::types::{Result, Row};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load every record of a CSV export at `path`.
pub fn load_csv(path: &Path) -> Result<Vec<Row>> {
    log::info!("Loading {:?}", path);
    let file = File::open(path)?;
    let rows = load_csv_from_reader(file)?;
    log::info!("Found {} stocks", rows.len());
    Ok(rows)
}

/// Load CSV records from any reader
pub fn load_csv_from_reader<R: Read>(reader: R) -> Result<Vec<Row>> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    log::debug!("CSV header: {:?}", headers);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }
        rows.push(headers.iter().zip(record.iter()).collect::<Row>());
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_basic_records() {
        let data = "Ticker,Name,BIS\nAAA,Alpha Inc.,1.25\nBBB,\"Beta, Corp\",\n";
        let rows = load_csv_from_reader(data.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("Ticker"), Some("AAA"));
        assert_eq!(rows[0].get("BIS"), Some("1.25"));
        assert_eq!(rows[1].get("Name"), Some("Beta, Corp"));
        assert_eq!(rows[1].get("BIS"), Some(""));
    }

    #[test]
    fn test_short_and_long_records() {
        let data = "Ticker,Price,RVol\nAAA,10\nBBB,20,1.5,extra\n";
        let rows = load_csv_from_reader(data.as_bytes()).unwrap();

        assert_eq!(rows[0].get("RVol"), None);
        assert_eq!(rows[1].get("RVol"), Some("1.5"));
        assert_eq!(rows[1].len(), 3);
    }

    #[test]
    fn test_bom_and_blank_lines() {
        let data = "\u{feff}Ticker,BIS\r\nAAA,1\r\n\r\nBBB,2\r\n";
        let rows = load_csv_from_reader(data.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("Ticker"), Some("AAA"));
        assert_eq!(rows[1].get("BIS"), Some("2"));
    }

    #[test]
    fn test_header_only() {
        let rows = load_csv_from_reader("Ticker,BIS\n".as_bytes()).unwrap();
        assert!(rows.is_empty());
    }
}
