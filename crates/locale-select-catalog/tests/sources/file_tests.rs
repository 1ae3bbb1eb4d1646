// crates/locale-select-catalog/tests/sources/file_tests.rs
// ============================================================================
// Module: FileSource Tests
// Description: Tests for the file-backed catalog source.
// Purpose: Validate reads, root confinement, and size limits.
// Dependencies: locale-select-catalog, tempfile
// ============================================================================

use locale_select_catalog::CatalogSource;
use locale_select_catalog::FileSource;
use locale_select_catalog::SourceError;

use crate::common::SHEET_DOCUMENT;

#[test]
fn file_source_reads_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, SHEET_DOCUMENT).unwrap();

    let payload = FileSource::new(&path).fetch().unwrap();
    assert_eq!(payload.bytes, SHEET_DOCUMENT.as_bytes());
    assert_eq!(payload.content_type, None);
}

#[test]
fn file_source_reports_missing_files() {
    let dir = tempfile::tempdir().unwrap();
    let err = FileSource::new(dir.path().join("missing.json")).fetch().unwrap_err();
    assert!(matches!(err, SourceError::NotFound(_)));
}

#[test]
fn file_source_enforces_root() {
    let root = tempfile::tempdir().unwrap();
    let outside = tempfile::tempdir().unwrap();
    let path = outside.path().join("config.json");
    std::fs::write(&path, SHEET_DOCUMENT).unwrap();

    let err = FileSource::new(&path).with_root(root.path()).fetch().unwrap_err();
    assert!(matches!(err, SourceError::InvalidUri(_)));
}

#[test]
fn file_source_allows_paths_under_root() {
    let root = tempfile::tempdir().unwrap();
    let path = root.path().join("config.json");
    std::fs::write(&path, SHEET_DOCUMENT).unwrap();

    assert!(FileSource::new(&path).with_root(root.path()).fetch().is_ok());
}

#[test]
fn file_source_rejects_oversized_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, SHEET_DOCUMENT).unwrap();

    let err = FileSource::new(&path).with_max_bytes(8).fetch().unwrap_err();
    assert!(matches!(err, SourceError::TooLarge { max_bytes: 8, actual_bytes: 9 }));
}

#[test]
fn file_source_describes_itself_by_path() {
    let source = FileSource::new("/srv/locales/config.json");
    assert_eq!(source.describe(), "file:/srv/locales/config.json");
}
