// crates/locale-select-core/src/core/activation.rs
// ============================================================================
// Module: Locale Select Activation Overlay
// Description: Active-versus-dormant overlay on top of the selection.
// Purpose: Track which selected locales are active, labelled by language name.
// Dependencies: crate::core::{identifiers, selection}, serde
// ============================================================================

//! ## Overview
//! [`ActivationMap`] is a separate container from [`SelectionSet`]: a locale
//! may be selected but dormant, yet it may never be active without being
//! selected. Every insert goes through [`ActivationMap::activate`], which checks
//! membership against the selection it is given.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::identifiers::LocaleCode;
use crate::core::selection::SelectionError;
use crate::core::selection::SelectionSet;

// ============================================================================
// SECTION: Activation Map
// ============================================================================

/// Mapping of active locales to their display language name.
///
/// # Invariants
/// - Keys are a subset of the selection passed to every `activate` call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActivationMap {
    /// Active locales keyed by code.
    entries: BTreeMap<LocaleCode, String>,
}

impl ActivationMap {
    /// Creates an empty overlay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a selected locale active under the given label.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::InvariantViolation`] when the code is not in
    /// `selection`; the overlay is left unchanged.
    pub fn activate(
        &mut self,
        selection: &SelectionSet,
        code: &LocaleCode,
        label: impl Into<String>,
    ) -> Result<(), SelectionError> {
        if !selection.contains(code) {
            return Err(SelectionError::InvariantViolation(format!(
                "cannot activate unselected locale {code}"
            )));
        }
        self.entries.insert(code.clone(), label.into());
        Ok(())
    }

    /// Marks a locale dormant; returns true when it was active.
    pub fn deactivate(&mut self, code: &LocaleCode) -> bool {
        self.entries.remove(code).is_some()
    }

    /// Returns true when the locale is active.
    #[must_use]
    pub fn is_active(&self, code: &LocaleCode) -> bool {
        self.entries.contains_key(code)
    }

    /// Returns the display label of an active locale.
    #[must_use]
    pub fn label(&self, code: &LocaleCode) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the number of active locales.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no locale is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates active locales in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&LocaleCode, &str)> {
        self.entries.iter().map(|(code, label)| (code, label.as_str()))
    }

    /// Returns a copy of the underlying mapping.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<LocaleCode, String> {
        self.entries.clone()
    }

    /// Verifies every active locale is selected.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::InvariantViolation`] naming the first stray code.
    pub fn check_subset_of(&self, selection: &SelectionSet) -> Result<(), SelectionError> {
        match self.entries.keys().find(|code| !selection.contains(code)) {
            Some(code) => Err(SelectionError::InvariantViolation(format!(
                "active locale {code} is not selected"
            ))),
            None => Ok(()),
        }
    }
}
