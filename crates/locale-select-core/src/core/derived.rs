// crates/locale-select-core/src/core/derived.rs
// ============================================================================
// Module: Locale Select Derived State
// Description: Region/language activity and display grouping.
// Purpose: Recompute every derived view from the selection and catalog.
// Dependencies: crate::core::{catalog, identifiers, selection}, serde
// ============================================================================

//! ## Overview
//! Derived state is a pure function of a [`SelectionSet`] and a
//! [`ReferenceCatalog`]. Nothing here is cached between calls; each function
//! rescans the catalog, which is linear in catalog size.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::catalog::ReferenceCatalog;
use crate::core::identifiers::LanguageCode;
use crate::core::identifiers::LocaleCode;
use crate::core::identifiers::RegionKey;
use crate::core::selection::SelectionSet;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Label of the bucket holding selected locales without an owning language.
pub const UNGROUPED_LABEL: &str = "ungrouped";

// ============================================================================
// SECTION: Types
// ============================================================================

/// Selected locales sharing one language display name.
///
/// # Invariants
/// - `language` is `None` only for the ungrouped bucket.
/// - No two groups carry the same `label`.
/// - `locales` follows selection insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleGroup {
    /// First owning language code, absent for the ungrouped bucket.
    pub language: Option<LanguageCode>,
    /// Language display name or [`UNGROUPED_LABEL`].
    pub label: String,
    /// Selected member locales.
    pub locales: Vec<LocaleCode>,
}

/// Snapshot of every derived view for one selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedState {
    /// Region key to "every member selected".
    pub region_activity: BTreeMap<RegionKey, bool>,
    /// Language code to "every member selected".
    pub language_activity: BTreeMap<LanguageCode, bool>,
    /// Language code to "some member selected".
    pub language_presence: BTreeMap<LanguageCode, bool>,
    /// Selection partitioned by language display name.
    pub groups: Vec<LocaleGroup>,
}

impl DerivedState {
    /// Computes all derived views from scratch.
    #[must_use]
    pub fn compute(selection: &SelectionSet, catalog: &ReferenceCatalog) -> Self {
        Self {
            region_activity: region_activity(selection, catalog),
            language_activity: language_activity(selection, catalog),
            language_presence: language_presence(selection, catalog),
            groups: grouped_selection(selection, catalog),
        }
    }
}

// ============================================================================
// SECTION: Calculators
// ============================================================================

/// Marks each region active when all of its members are selected.
#[must_use]
pub fn region_activity(
    selection: &SelectionSet,
    catalog: &ReferenceCatalog,
) -> BTreeMap<RegionKey, bool> {
    catalog
        .regions()
        .iter()
        .map(|region| (region.key.clone(), selection.contains_all(region.member_locales())))
        .collect()
}

/// Marks each language active when all of its members are selected.
#[must_use]
pub fn language_activity(
    selection: &SelectionSet,
    catalog: &ReferenceCatalog,
) -> BTreeMap<LanguageCode, bool> {
    catalog
        .languages()
        .iter()
        .map(|language| (language.code.clone(), selection.contains_all(language.member_locales())))
        .collect()
}

/// Marks each language present when any of its members is selected.
#[must_use]
pub fn language_presence(
    selection: &SelectionSet,
    catalog: &ReferenceCatalog,
) -> BTreeMap<LanguageCode, bool> {
    catalog
        .languages()
        .iter()
        .map(|language| (language.code.clone(), selection.contains_any(language.member_locales())))
        .collect()
}

/// Partitions the selection by the display name of its first owning language.
///
/// Languages sharing a display name share one group, tagged with the first
/// such language seen. Groups appear in order of their first selected member;
/// the ungrouped bucket, when present, is always last.
#[must_use]
pub fn grouped_selection(selection: &SelectionSet, catalog: &ReferenceCatalog) -> Vec<LocaleGroup> {
    let mut groups: Vec<LocaleGroup> = Vec::new();
    let mut positions: BTreeMap<&str, usize> = BTreeMap::new();
    let mut ungrouped = Vec::new();

    for code in selection.iter() {
        let Some(language) = catalog.owning_language(code) else {
            ungrouped.push(code.clone());
            continue;
        };
        let label = language.display_name.as_str();
        if let Some(group) = positions.get(label).and_then(|index| groups.get_mut(*index)) {
            group.locales.push(code.clone());
            continue;
        }
        positions.insert(label, groups.len());
        groups.push(LocaleGroup {
            language: Some(language.code.clone()),
            label: label.to_string(),
            locales: vec![code.clone()],
        });
    }

    if !ungrouped.is_empty() {
        groups.push(LocaleGroup {
            language: None,
            label: UNGROUPED_LABEL.to_string(),
            locales: ungrouped,
        });
    }
    groups
}
