// Manifest discovery and rewrite against a real scans directory
use momentum_scan::manifest::{discover_scans, update_manifest, MANIFEST_FILE};
use std::fs;

#[test]
fn lists_named_and_unnamed_scans_for_one_date() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("2024-01-01.html"), "<html></html>").unwrap();
    fs::write(dir.path().join("2024-01-01-semis.html"), "<html></html>").unwrap();
    fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
    fs::write(dir.path().join("2024-01-01.png"), [0u8; 4]).unwrap();
    fs::write(dir.path().join("notes.txt"), "x").unwrap();

    let scans = update_manifest(dir.path()).unwrap();
    let ids: Vec<&str> = scans.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["2024-01-01-semis", "2024-01-01"]);

    let manifest = fs::read_to_string(dir.path().join(MANIFEST_FILE)).unwrap();
    assert!(manifest.contains("const SCAN_MANIFEST"));
    assert!(manifest.contains(r#""id": "2024-01-01-semis""#));
    assert!(manifest.contains(r#""name": "semis""#));
    assert!(manifest.contains(r#""name": null"#));
    assert!(!manifest.contains("index"));
}

#[test]
fn manifest_is_rewritten_not_appended() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("2024-02-01.html"), "").unwrap();
    update_manifest(dir.path()).unwrap();

    fs::remove_file(dir.path().join("2024-02-01.html")).unwrap();
    fs::write(dir.path().join("2024-02-03.html"), "").unwrap();
    let scans = update_manifest(dir.path()).unwrap();

    assert_eq!(scans.len(), 1);
    let manifest = fs::read_to_string(dir.path().join(MANIFEST_FILE)).unwrap();
    assert!(manifest.contains("2024-02-03"));
    assert!(!manifest.contains("2024-02-01"));
}

#[test]
fn newest_date_first() {
    let dir = tempfile::tempdir().unwrap();
    for stem in ["2023-12-31", "2024-03-01-growth", "2024-01-15"] {
        fs::write(dir.path().join(format!("{}.html", stem)), "").unwrap();
    }

    let scans = discover_scans(dir.path()).unwrap();
    let ids: Vec<&str> = scans.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["2024-03-01-growth", "2024-01-15", "2023-12-31"]);
}

#[test]
fn missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("scans");
    assert!(discover_scans(&missing).unwrap().is_empty());
    assert!(update_manifest(&missing).is_err());
}
