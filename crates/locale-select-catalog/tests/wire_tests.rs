// crates/locale-select-catalog/tests/wire_tests.rs
// ============================================================================
// Module: Wire Format Tests
// Description: Ingestion tests for both catalog document shapes.
// Purpose: Ensure documents map to the same catalog and malformed input fails.
// Dependencies: locale-select-catalog, locale-select-core, proptest
// ============================================================================

//! ## Overview
//! Parses flat and sheet documents, checks list splitting rules, and rejects
//! documents that cannot be ingested.

#![allow(dead_code, reason = "Common module may have unused helpers.")]
#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod common;

use locale_select_catalog::CatalogDocument;
use locale_select_catalog::parse_catalog;
use locale_select_catalog::split_locale_list;
use locale_select_core::CatalogError;
use locale_select_core::LanguageCode;
use locale_select_core::LocaleCode;
use locale_select_core::RegionKey;
use proptest::prelude::*;

use crate::common::FLAT_DOCUMENT;
use crate::common::SHEET_DOCUMENT;

fn codes(values: &[&str]) -> Vec<LocaleCode> {
    values.iter().map(|value| LocaleCode::new(*value)).collect()
}

// ============================================================================
// SECTION: Document Shapes
// ============================================================================

#[test]
fn flat_document_ingests_languages_and_regions() {
    let catalog = parse_catalog(FLAT_DOCUMENT.as_bytes()).unwrap();

    let french = catalog.language(&LanguageCode::new("fr")).unwrap();
    assert_eq!(french.display_name, "French");
    assert_eq!(french.member_locales(), codes(&["fr-FR", "fr-CA"]).as_slice());
    let emea = catalog.region(&RegionKey::new("EMEA")).unwrap();
    assert_eq!(emea.member_locales(), codes(&["fr-FR", "de-DE"]).as_slice());
}

#[test]
fn sheet_document_ingests_with_languagecode_alias() {
    let catalog = parse_catalog(SHEET_DOCUMENT.as_bytes()).unwrap();

    assert_eq!(catalog.languages().len(), 3);
    assert_eq!(catalog.regions().len(), 1);
    let selectable: Vec<&str> =
        catalog.selectable_languages().map(|language| language.code.as_str()).collect();
    assert_eq!(selectable, vec!["fr", "de"]);
}

#[test]
fn both_shapes_yield_equivalent_groups() {
    let flat = parse_catalog(FLAT_DOCUMENT.as_bytes()).unwrap();
    let sheet = parse_catalog(SHEET_DOCUMENT.as_bytes()).unwrap();

    for language in flat.languages() {
        let other = sheet.language(&language.code).unwrap();
        assert_eq!(language.member_locales(), other.member_locales());
    }
    assert_eq!(flat.regions(), sheet.regions());
}

#[test]
fn sheet_without_localegroups_has_no_regions() {
    let document = r#"{ "locales": { "data": [
        { "languagecode": "ja", "language": "Japanese", "livecopies": "ja-JP" }
    ] } }"#;
    let catalog = parse_catalog(document.as_bytes()).unwrap();
    assert!(catalog.regions().is_empty());
    assert_eq!(catalog.languages().len(), 1);
}

#[test]
fn sheet_tables_without_data_rows_default_to_empty() {
    let document = r#"{
        "locales": { "total": 0, ":type": "sheet" },
        "localegroups": { "total": 0 }
    }"#;
    let parsed: CatalogDocument = serde_json::from_str(document).unwrap();
    let (languages, regions) = parsed.into_records();
    assert!(languages.is_empty());
    assert!(regions.is_empty());
    assert!(parse_catalog(document.as_bytes()).unwrap().is_empty());
}

#[test]
fn blank_rows_are_skipped_and_missing_names_fall_back_to_codes() {
    let document = r#"{
        "languages": [
            { "code": "", "language": "", "livecopies": "" },
            { "code": "pt", "livecopies": "pt-BR" }
        ],
        "regions": [{ "key": " ", "value": "" }]
    }"#;
    let catalog = parse_catalog(document.as_bytes()).unwrap();
    assert_eq!(catalog.languages().len(), 1);
    assert_eq!(catalog.languages()[0].display_name, "pt");
    assert!(catalog.regions().is_empty());
}

#[test]
fn document_shape_is_detected_before_ingestion() {
    let document: CatalogDocument = serde_json::from_str(SHEET_DOCUMENT).unwrap();
    assert!(matches!(document, CatalogDocument::Sheet(_)));
    let document: CatalogDocument = serde_json::from_str(FLAT_DOCUMENT).unwrap();
    assert!(matches!(document, CatalogDocument::Flat(_)));
}

// ============================================================================
// SECTION: Malformed Documents
// ============================================================================

#[test]
fn unrecognized_documents_are_malformed() {
    for document in ["", "[]", "{}", r#"{"regions": []}"#, r#"{"languages": [{"language": "x"}]}"#]
    {
        let err = parse_catalog(document.as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)), "{document}");
    }
}

#[test]
fn duplicate_region_keys_are_malformed() {
    let document = r#"{
        "languages": [],
        "regions": [{ "key": "EMEA", "value": "fr-FR" }, { "key": "EMEA", "value": "de-DE" }]
    }"#;
    let err = parse_catalog(document.as_bytes()).unwrap_err();
    assert_eq!(err, CatalogError::Malformed("duplicate region key: EMEA".to_string()));
}

#[test]
fn non_string_lists_are_malformed() {
    let document = r#"{ "languages": [{ "code": "fr", "livecopies": ["fr-FR"] }] }"#;
    assert!(matches!(parse_catalog(document.as_bytes()), Err(CatalogError::Malformed(_))));
}

// ============================================================================
// SECTION: List Splitting
// ============================================================================

#[test]
fn split_locale_list_trims_drops_empty_and_dedupes() {
    assert_eq!(
        split_locale_list(" fr-FR, ,fr-CA,,fr-FR ,de-DE"),
        codes(&["fr-FR", "fr-CA", "de-DE"])
    );
    assert!(split_locale_list("").is_empty());
    assert!(split_locale_list(" , ,").is_empty());
}

proptest! {
    #[test]
    fn split_locale_list_yields_unique_trimmed_tokens(raw in "[a-z, -]{0,40}") {
        let parsed = split_locale_list(&raw);
        let mut seen = std::collections::BTreeSet::new();
        for code in &parsed {
            prop_assert!(!code.as_str().is_empty());
            prop_assert_eq!(code.as_str().trim(), code.as_str());
            prop_assert!(!code.as_str().contains(','));
            prop_assert!(seen.insert(code.clone()));
        }
    }
}
