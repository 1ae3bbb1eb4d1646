// crates/locale-select-catalog/src/wire.rs
// ============================================================================
// Module: Locale Select Catalog Wire Format
// Description: Serde model for the published locale configuration document.
// Purpose: Ingest flat and sheet-form documents into a reference catalog.
// Dependencies: locale-select-core, serde, serde_json
// ============================================================================

//! ## Overview
//! The catalog document arrives in one of two shapes:
//!
//! - Flat: `{ "languages": [...], "regions": [...] }`
//! - Sheet: `{ "locales": { "data": [...] }, "localegroups": { "data": [...] } }`
//!
//! Language rows carry `code` (or `languagecode`), `language`, and a
//! comma-joined `livecopies` list. Region rows carry `key` and a comma-joined
//! `value` list. Both shapes ingest to the same [`ReferenceCatalog`].
//!
//! Invariants:
//! - Comma-joined lists are split, trimmed, stripped of empty tokens, and
//!   deduplicated keeping the first occurrence.
//! - Wholly blank rows are skipped; any other invalid row rejects the document.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use locale_select_core::CatalogError;
use locale_select_core::Language;
use locale_select_core::LocaleCode;
use locale_select_core::ReferenceCatalog;
use locale_select_core::Region;
use serde::Deserialize;

// ============================================================================
// SECTION: Document Model
// ============================================================================

/// Catalog document in either accepted shape.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CatalogDocument {
    /// Flat `languages` / `regions` arrays.
    Flat(FlatDocument),
    /// Spreadsheet export with `locales` / `localegroups` tables.
    Sheet(SheetDocument),
}

/// Flat document shape.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FlatDocument {
    /// Language rows.
    pub languages: Vec<LanguageRecord>,
    /// Region rows.
    #[serde(default)]
    pub regions: Vec<RegionRecord>,
}

/// Spreadsheet export shape.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SheetDocument {
    /// Language table.
    pub locales: SheetTable<LanguageRecord>,
    /// Region table.
    #[serde(default)]
    pub localegroups: SheetTable<RegionRecord>,
}

/// One exported sheet; extra sheet metadata is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct SheetTable<T> {
    /// Table rows.
    #[serde(default)]
    pub data: Vec<T>,
}

impl<T> Default for SheetTable<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
        }
    }
}

/// Language row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LanguageRecord {
    /// Language code.
    #[serde(alias = "languagecode")]
    pub code: String,
    /// Display name; falls back to the code when blank.
    #[serde(default)]
    pub language: String,
    /// Comma-joined member locale codes.
    #[serde(default)]
    pub livecopies: String,
}

/// Region row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegionRecord {
    /// Region key.
    pub key: String,
    /// Comma-joined member locale codes.
    #[serde(default)]
    pub value: String,
}

// ============================================================================
// SECTION: Ingestion
// ============================================================================

impl CatalogDocument {
    /// Returns the language and region rows regardless of shape.
    #[must_use]
    pub fn into_records(self) -> (Vec<LanguageRecord>, Vec<RegionRecord>) {
        match self {
            Self::Flat(document) => (document.languages, document.regions),
            Self::Sheet(document) => (document.locales.data, document.localegroups.data),
        }
    }

    /// Builds a validated reference catalog from the document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Malformed`] when the rows violate catalog
    /// limits or repeat an identifier.
    pub fn into_catalog(self) -> Result<ReferenceCatalog, CatalogError> {
        let (language_rows, region_rows) = self.into_records();
        let languages = language_rows
            .into_iter()
            .filter(|row| !row.is_blank())
            .map(|row| {
                let code = row.code.trim().to_string();
                let name = row.language.trim();
                let display_name = if name.is_empty() { code.clone() } else { name.to_string() };
                Language::new(code, display_name, split_locale_list(&row.livecopies))
            })
            .collect();
        let regions = region_rows
            .into_iter()
            .filter(|row| !row.is_blank())
            .map(|row| Region::new(row.key.trim(), split_locale_list(&row.value)))
            .collect();
        ReferenceCatalog::new(languages, regions)
    }
}

/// Parses raw document bytes into a reference catalog.
///
/// # Errors
///
/// Returns [`CatalogError::Malformed`] when the bytes are not a recognized
/// catalog document or the rows fail validation.
pub fn parse_catalog(bytes: &[u8]) -> Result<ReferenceCatalog, CatalogError> {
    let document: CatalogDocument = serde_json::from_slice(bytes).map_err(|err| {
        CatalogError::Malformed(format!("unrecognized catalog document: {err}"))
    })?;
    document.into_catalog()
}

/// Splits a comma-joined locale list.
///
/// Tokens are trimmed, empty tokens are dropped, and repeats keep their first
/// position.
#[must_use]
pub fn split_locale_list(raw: &str) -> Vec<LocaleCode> {
    let mut seen = BTreeSet::new();
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty() && seen.insert(*token))
        .map(LocaleCode::new)
        .collect()
}

impl LanguageRecord {
    /// Returns true when every field is empty after trimming.
    fn is_blank(&self) -> bool {
        is_blank(&[&self.code, &self.language, &self.livecopies])
    }
}

impl RegionRecord {
    /// Returns true when every field is empty after trimming.
    fn is_blank(&self) -> bool {
        is_blank(&[&self.key, &self.value])
    }
}

/// Returns true when every field is empty after trimming.
fn is_blank(fields: &[&String]) -> bool {
    fields.iter().all(|field| field.trim().is_empty())
}
