// crates/locale-select-core/tests/common/mod.rs
// ============================================================================
// Module: Common Test Fixtures
// Description: Shared catalogs and helpers for core tests.
// Purpose: Provide reusable, deterministic catalog fixtures.
// Dependencies: locale-select-core
// ============================================================================

//! ## Overview
//! Fixtures build small reference catalogs, including the EMEA/French
//! catalog used by the scenario tests, plus a recording audit sink.

#![allow(dead_code, reason = "Shared test helpers may be unused in some cases.")]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Mutex;

use locale_select_core::AuditSink;
use locale_select_core::CatalogAuditEvent;
use locale_select_core::Language;
use locale_select_core::LocaleCode;
use locale_select_core::ReferenceCatalog;
use locale_select_core::Region;
use locale_select_core::SelectionAuditEvent;

// ============================================================================
// SECTION: Test Fixtures
// ============================================================================

/// Builds a locale code list from string literals.
#[must_use]
pub fn codes(values: &[&str]) -> Vec<LocaleCode> {
    values.iter().map(|value| LocaleCode::new(*value)).collect()
}

/// Builds a language fixture.
#[must_use]
pub fn language(code: &str, name: &str, members: &[&str]) -> Language {
    Language::new(code, name, codes(members))
}

/// Builds a region fixture.
#[must_use]
pub fn region(key: &str, members: &[&str]) -> Region {
    Region::new(key, codes(members))
}

/// Catalog with region EMEA = {en-GB, fr-FR, de-DE} and language French = {fr-FR, fr-CA}.
#[must_use]
pub fn emea_catalog() -> ReferenceCatalog {
    ReferenceCatalog::new(
        vec![
            language("en", "English", &["en-GB", "en-US"]),
            language("fr", "French", &["fr-FR", "fr-CA"]),
            language("de", "German", &["de-DE", "de-AT"]),
        ],
        vec![region("EMEA", &["en-GB", "fr-FR", "de-DE"]), region("AMER", &["en-US", "fr-CA"])],
    )
    .expect("valid catalog")
}

/// Catalog with a region member that no language owns.
#[must_use]
pub fn catalog_with_orphan() -> ReferenceCatalog {
    ReferenceCatalog::new(
        vec![language("ja", "Japanese", &["ja-JP"])],
        vec![region("APAC", &["ja-JP", "xx-ZZ"])],
    )
    .expect("valid catalog")
}

// ============================================================================
// SECTION: Recording Sink
// ============================================================================

/// Audit sink that keeps every event in memory.
#[derive(Default)]
pub struct RecordingSink {
    /// Catalog events in arrival order.
    pub catalog: Mutex<Vec<CatalogAuditEvent>>,
    /// Selection events in arrival order.
    pub selection: Mutex<Vec<SelectionAuditEvent>>,
}

impl AuditSink for RecordingSink {
    fn record_catalog(&self, event: &CatalogAuditEvent) {
        self.catalog.lock().expect("catalog events lock").push(event.clone());
    }

    fn record_selection(&self, event: &SelectionAuditEvent) {
        self.selection.lock().expect("selection events lock").push(event.clone());
    }
}
