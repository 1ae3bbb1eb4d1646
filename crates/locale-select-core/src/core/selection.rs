// crates/locale-select-core/src/core/selection.rs
// ============================================================================
// Module: Locale Select Selection Store
// Description: Authoritative set of locales chosen for a localization project.
// Purpose: Hold the single source of truth that all derived state reads from.
// Dependencies: crate::core::identifiers, serde, thiserror
// ============================================================================

//! ## Overview
//! [`SelectionSet`] records which locales are part of the project. It behaves
//! as a set (no duplicates, set equality) but remembers insertion order so the
//! display grouping can enumerate codes in the order the user picked them.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use serde::Serialize;
use serde::Serializer;
use thiserror::Error;

use crate::core::identifiers::LanguageCode;
use crate::core::identifiers::LocaleCode;
use crate::core::identifiers::RegionKey;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Selection and toggle errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - `InvariantViolation` indicates a defect, never an expected runtime state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Region key is not present in the reference catalog.
    #[error("unknown region: {0}")]
    UnknownRegion(RegionKey),
    /// Language code is not present in the reference catalog.
    #[error("unknown language: {0}")]
    UnknownLanguage(LanguageCode),
    /// Selection state broke an internal invariant.
    #[error("selection invariant violated: {0}")]
    InvariantViolation(String),
}

// ============================================================================
// SECTION: Selection Set
// ============================================================================

/// Set of selected locale codes.
///
/// # Invariants
/// - `order` and `members` always hold the same codes.
/// - No code appears twice in `order`.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    /// Codes in insertion order.
    order: Vec<LocaleCode>,
    /// Membership index.
    members: BTreeSet<LocaleCode>,
}

impl SelectionSet {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the code is selected.
    #[must_use]
    pub fn contains(&self, code: &LocaleCode) -> bool {
        self.members.contains(code)
    }

    /// Returns true when every listed code is selected.
    ///
    /// An empty list is trivially contained.
    #[must_use]
    pub fn contains_all(&self, codes: &[LocaleCode]) -> bool {
        codes.iter().all(|code| self.members.contains(code))
    }

    /// Returns true when at least one listed code is selected.
    #[must_use]
    pub fn contains_any(&self, codes: &[LocaleCode]) -> bool {
        codes.iter().any(|code| self.members.contains(code))
    }

    /// Adds a code; returns true when it was not already selected.
    pub fn insert(&mut self, code: LocaleCode) -> bool {
        if self.members.insert(code.clone()) {
            self.order.push(code);
            return true;
        }
        false
    }

    /// Removes a code; returns true when it was selected.
    pub fn remove(&mut self, code: &LocaleCode) -> bool {
        if self.members.remove(code) {
            self.order.retain(|existing| existing != code);
            return true;
        }
        false
    }

    /// Removes every code.
    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }

    /// Returns the number of selected codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true when nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates selected codes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &LocaleCode> {
        self.order.iter()
    }

    /// Returns the selected codes in insertion order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<LocaleCode> {
        self.order.clone()
    }
}

impl PartialEq for SelectionSet {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl Eq for SelectionSet {}

impl Serialize for SelectionSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.order.serialize(serializer)
    }
}

impl FromIterator<LocaleCode> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = LocaleCode>>(iter: I) -> Self {
        let mut selection = Self::new();
        for code in iter {
            selection.insert(code);
        }
        selection
    }
}
