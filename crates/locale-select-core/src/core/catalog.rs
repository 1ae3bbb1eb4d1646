// crates/locale-select-core/src/core/catalog.rs
// ============================================================================
// Module: Locale Select Reference Catalog
// Description: Languages, regions, and the immutable catalog that groups them.
// Purpose: Provide the read-only grouping axes the selection engine consults.
// Dependencies: crate::core::identifiers, serde, thiserror
// ============================================================================

//! ## Overview
//! The reference catalog lists every [`Language`] and [`Region`] offered by the
//! locale step. Each group names an ordered, duplicate-free sequence of
//! [`LocaleCode`]s. The catalog is validated once at construction and is
//! immutable afterwards; lookups by key and by owning language are indexed so
//! derived-state scans stay linear in catalog size.
//!
//! Security posture: catalog documents come from a remote source and are
//! untrusted until [`ReferenceCatalog::new`] accepts them.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::Serialize;
use thiserror::Error;

use crate::core::identifiers::LanguageCode;
use crate::core::identifiers::LocaleCode;
use crate::core::identifiers::RegionKey;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum number of languages or regions accepted per catalog axis.
pub const MAX_CATALOG_ENTRIES: usize = 1024;
/// Maximum number of member locales accepted per language or region.
pub const MAX_GROUP_MEMBERS: usize = 512;
/// Maximum length of a locale code, region key, or language code in bytes.
pub const MAX_IDENTIFIER_LENGTH: usize = 64;
/// Maximum length of a language display name in bytes.
pub const MAX_DISPLAY_NAME_LENGTH: usize = 256;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Catalog load and ingestion errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - Details carry the raw failure text from the source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The catalog source was unreachable or answered with a non-success status.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
    /// The catalog document could not be ingested.
    #[error("catalog malformed: {0}")]
    Malformed(String),
}

// ============================================================================
// SECTION: Groups
// ============================================================================

/// Language grouping of live-copy locales.
///
/// # Invariants
/// - `member_locales` contains no duplicates and preserves source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Language {
    /// Language code.
    pub code: LanguageCode,
    /// Human-readable language name, used as the activation label.
    pub display_name: String,
    /// Ordered live-copy locales belonging to this language.
    member_locales: Vec<LocaleCode>,
}

impl Language {
    /// Creates a language, dropping duplicate members after their first occurrence.
    #[must_use]
    pub fn new(
        code: impl Into<LanguageCode>,
        display_name: impl Into<String>,
        members: impl IntoIterator<Item = LocaleCode>,
    ) -> Self {
        Self {
            code: code.into(),
            display_name: display_name.into(),
            member_locales: dedupe_members(members),
        }
    }

    /// Returns the ordered member locales.
    #[must_use]
    pub fn member_locales(&self) -> &[LocaleCode] {
        &self.member_locales
    }

    /// Returns true when the language has the locale as a member.
    #[must_use]
    pub fn contains(&self, code: &LocaleCode) -> bool {
        self.member_locales.contains(code)
    }
}

/// Region grouping of locales selectable as one geographic unit.
///
/// # Invariants
/// - `member_locales` contains no duplicates and preserves source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region {
    /// Region key.
    pub key: RegionKey,
    /// Ordered locales belonging to this region.
    member_locales: Vec<LocaleCode>,
}

impl Region {
    /// Creates a region, dropping duplicate members after their first occurrence.
    #[must_use]
    pub fn new(key: impl Into<RegionKey>, members: impl IntoIterator<Item = LocaleCode>) -> Self {
        Self {
            key: key.into(),
            member_locales: dedupe_members(members),
        }
    }

    /// Returns the ordered member locales.
    #[must_use]
    pub fn member_locales(&self) -> &[LocaleCode] {
        &self.member_locales
    }

    /// Returns true when the region has the locale as a member.
    #[must_use]
    pub fn contains(&self, code: &LocaleCode) -> bool {
        self.member_locales.contains(code)
    }
}

// ============================================================================
// SECTION: Reference Catalog
// ============================================================================

/// Immutable per-session catalog of languages and regions.
///
/// # Invariants
/// - Language codes and region keys are unique.
/// - Identifiers are non-empty and within [`MAX_IDENTIFIER_LENGTH`].
/// - The owner index maps each locale to the first language listing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceCatalog {
    /// Languages in source order.
    languages: Vec<Language>,
    /// Regions in source order.
    regions: Vec<Region>,
    /// Position of each language by code.
    #[serde(skip)]
    language_index: BTreeMap<LanguageCode, usize>,
    /// Position of each region by key.
    #[serde(skip)]
    region_index: BTreeMap<RegionKey, usize>,
    /// Position of the first language owning each locale.
    #[serde(skip)]
    locale_owner: BTreeMap<LocaleCode, usize>,
}

impl ReferenceCatalog {
    /// Validates and indexes a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Malformed`] when limits are exceeded, identifiers
    /// are empty or oversized, or language codes / region keys repeat.
    pub fn new(languages: Vec<Language>, regions: Vec<Region>) -> Result<Self, CatalogError> {
        if languages.len() > MAX_CATALOG_ENTRIES {
            return Err(CatalogError::Malformed(format!(
                "catalog lists {} languages (max {MAX_CATALOG_ENTRIES})",
                languages.len()
            )));
        }
        if regions.len() > MAX_CATALOG_ENTRIES {
            return Err(CatalogError::Malformed(format!(
                "catalog lists {} regions (max {MAX_CATALOG_ENTRIES})",
                regions.len()
            )));
        }

        let mut language_index = BTreeMap::new();
        let mut locale_owner = BTreeMap::new();
        for (position, language) in languages.iter().enumerate() {
            validate_identifier("language code", language.code.as_str())?;
            if language.display_name.len() > MAX_DISPLAY_NAME_LENGTH {
                return Err(CatalogError::Malformed(format!(
                    "language {} display name exceeds max length",
                    language.code
                )));
            }
            validate_members("language", language.code.as_str(), language.member_locales())?;
            if language_index.insert(language.code.clone(), position).is_some() {
                return Err(CatalogError::Malformed(format!(
                    "duplicate language code: {}",
                    language.code
                )));
            }
            for code in language.member_locales() {
                locale_owner.entry(code.clone()).or_insert(position);
            }
        }

        let mut region_index = BTreeMap::new();
        for (position, region) in regions.iter().enumerate() {
            validate_identifier("region key", region.key.as_str())?;
            validate_members("region", region.key.as_str(), region.member_locales())?;
            if region_index.insert(region.key.clone(), position).is_some() {
                return Err(CatalogError::Malformed(format!(
                    "duplicate region key: {}",
                    region.key
                )));
            }
        }

        Ok(Self {
            languages,
            regions,
            language_index,
            region_index,
            locale_owner,
        })
    }

    /// Returns all languages in source order.
    #[must_use]
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// Returns all regions in source order.
    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Returns languages that have at least one member locale.
    pub fn selectable_languages(&self) -> impl Iterator<Item = &Language> {
        self.languages.iter().filter(|language| !language.member_locales().is_empty())
    }

    /// Looks up a language by code.
    #[must_use]
    pub fn language(&self, code: &LanguageCode) -> Option<&Language> {
        self.language_index.get(code).and_then(|position| self.languages.get(*position))
    }

    /// Looks up a region by key.
    #[must_use]
    pub fn region(&self, key: &RegionKey) -> Option<&Region> {
        self.region_index.get(key).and_then(|position| self.regions.get(*position))
    }

    /// Returns the first language whose members include the locale.
    #[must_use]
    pub fn owning_language(&self, code: &LocaleCode) -> Option<&Language> {
        self.locale_owner.get(code).and_then(|position| self.languages.get(*position))
    }

    /// Returns true when the catalog lists no languages and no regions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty() && self.regions.is_empty()
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Removes duplicate locales while preserving first-occurrence order.
fn dedupe_members(members: impl IntoIterator<Item = LocaleCode>) -> Vec<LocaleCode> {
    let mut seen = BTreeSet::new();
    members.into_iter().filter(|code| seen.insert(code.clone())).collect()
}

/// Rejects empty or oversized identifiers.
fn validate_identifier(field: &str, value: &str) -> Result<(), CatalogError> {
    if value.is_empty() {
        return Err(CatalogError::Malformed(format!("{field} must be non-empty")));
    }
    if value.len() > MAX_IDENTIFIER_LENGTH {
        return Err(CatalogError::Malformed(format!("{field} exceeds max length: {value}")));
    }
    Ok(())
}

/// Enforces member count and locale code limits for one group.
fn validate_members(kind: &str, name: &str, members: &[LocaleCode]) -> Result<(), CatalogError> {
    if members.len() > MAX_GROUP_MEMBERS {
        return Err(CatalogError::Malformed(format!(
            "{kind} {name} lists {} locales (max {MAX_GROUP_MEMBERS})",
            members.len()
        )));
    }
    for code in members {
        validate_identifier("locale code", code.as_str())?;
    }
    Ok(())
}
