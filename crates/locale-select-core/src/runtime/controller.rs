// crates/locale-select-core/src/runtime/controller.rs
// ============================================================================
// Module: Locale Select Toggle Controller
// Description: Region, language, and locale toggles over the selection state.
// Purpose: Apply every legal mutation and recompute derived state before returning.
// Dependencies: crate::core, serde
// ============================================================================

//! ## Overview
//! [`SelectionEngine`] owns the reference catalog, the selection set, and the
//! activation overlay for one locale step. Its four toggle operations are the
//! only mutators. Each takes `&mut self` and runs to completion, and each ends
//! by recomputing [`DerivedState`] against the new selection, so a caller that
//! reads a snapshot right after a toggle never observes stale region or
//! language activity.
//!
//! Invariants:
//! - Every active locale is selected.
//! - The cached [`DerivedState`] equals `DerivedState::compute` on the current
//!   selection and catalog.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::ActivationMap;
use crate::core::DerivedState;
use crate::core::LanguageCode;
use crate::core::LocaleCode;
use crate::core::LocaleGroup;
use crate::core::ReferenceCatalog;
use crate::core::RegionKey;
use crate::core::SelectionError;
use crate::core::SelectionSet;

// ============================================================================
// SECTION: Toggle Outcomes
// ============================================================================

/// Result of a region or language toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "changed", rename_all = "snake_case")]
pub enum GroupToggle {
    /// The group was not fully selected; the listed codes were added.
    Selected(Vec<LocaleCode>),
    /// The group was fully selected; the listed codes were removed.
    Deselected(Vec<LocaleCode>),
}

impl GroupToggle {
    /// Returns the normalized outcome label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Selected(_) => "selected",
            Self::Deselected(_) => "deselected",
        }
    }

    /// Returns the codes whose selection changed.
    #[must_use]
    pub fn changed(&self) -> &[LocaleCode] {
        match self {
            Self::Selected(codes) | Self::Deselected(codes) => codes,
        }
    }
}

/// Result of a single-locale activation toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocaleToggle {
    /// The locale became active.
    Activated,
    /// The locale became dormant but stays selected.
    Deactivated,
    /// The locale is selected but no language owns it, so it has no label.
    Unowned,
    /// The locale is not selected; nothing changed.
    NotSelected,
}

impl LocaleToggle {
    /// Returns the normalized outcome label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Activated => "activated",
            Self::Deactivated => "deactivated",
            Self::Unowned => "unowned",
            Self::NotSelected => "not_selected",
        }
    }
}

// ============================================================================
// SECTION: Snapshot
// ============================================================================

/// Read-only view of the selection for the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionSnapshot {
    /// Selected locales in insertion order.
    pub selection: Vec<LocaleCode>,
    /// Active locales and their language labels.
    pub activation: BTreeMap<LocaleCode, String>,
    /// Region key to "fully selected".
    pub region_activity: BTreeMap<RegionKey, bool>,
    /// Language code to "fully selected".
    pub language_activity: BTreeMap<LanguageCode, bool>,
    /// Language code to "partially selected".
    pub language_presence: BTreeMap<LanguageCode, bool>,
    /// Selection grouped by owning language.
    pub groups: Vec<LocaleGroup>,
}

// ============================================================================
// SECTION: Selection Engine
// ============================================================================

/// Toggle controller and state owner for one locale step.
#[derive(Debug, Clone)]
pub struct SelectionEngine {
    /// Immutable reference catalog.
    catalog: ReferenceCatalog,
    /// Authoritative selection.
    selection: SelectionSet,
    /// Active-versus-dormant overlay.
    activation: ActivationMap,
    /// Derived views recomputed after every operation.
    derived: DerivedState,
}

impl SelectionEngine {
    /// Creates an engine with an empty selection over a loaded catalog.
    #[must_use]
    pub fn new(catalog: ReferenceCatalog) -> Self {
        let selection = SelectionSet::new();
        let derived = DerivedState::compute(&selection, &catalog);
        Self {
            catalog,
            selection,
            activation: ActivationMap::new(),
            derived,
        }
    }

    /// Toggles every member of a region as one unit.
    ///
    /// A fully selected region is removed from the selection and overlay.
    /// Otherwise its missing members are added and activated under their
    /// owning language's name; members already selected are left as they were.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::UnknownRegion`] when the key is not in the
    /// catalog; state is unchanged.
    pub fn toggle_region(&mut self, key: &RegionKey) -> Result<GroupToggle, SelectionError> {
        let region =
            self.catalog.region(key).ok_or_else(|| SelectionError::UnknownRegion(key.clone()))?;
        let fully_selected = self.derived.region_activity.get(key).copied().unwrap_or(false);
        let members = region.member_locales().to_vec();

        let outcome = if fully_selected {
            GroupToggle::Deselected(self.remove_members(&members))
        } else {
            let added = self.add_members(&members);
            for code in &added {
                if let Some(language) = self.catalog.owning_language(code) {
                    self.activation.activate(&self.selection, code, language.display_name.clone())?;
                }
            }
            GroupToggle::Selected(added)
        };
        self.refresh();
        Ok(outcome)
    }

    /// Toggles every member of a language as one unit.
    ///
    /// The on/off test reads the live selection, not cached activity. Newly
    /// selected members are activated under the language's display name.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::UnknownLanguage`] when the code is not in the
    /// catalog; state is unchanged.
    pub fn toggle_language(&mut self, code: &LanguageCode) -> Result<GroupToggle, SelectionError> {
        let language = self
            .catalog
            .language(code)
            .ok_or_else(|| SelectionError::UnknownLanguage(code.clone()))?;
        let members = language.member_locales().to_vec();
        let label = language.display_name.clone();

        let outcome = if self.selection.contains_all(&members) {
            GroupToggle::Deselected(self.remove_members(&members))
        } else {
            let added = self.add_members(&members);
            for locale in &added {
                self.activation.activate(&self.selection, locale, label.clone())?;
            }
            GroupToggle::Selected(added)
        };
        self.refresh();
        Ok(outcome)
    }

    /// Flips a selected locale between active and dormant.
    ///
    /// The selection itself is never changed. Codes outside the selection are
    /// ignored so the overlay can never hold an unselected locale.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::InvariantViolation`] only if the activation
    /// guard rejects an insert, which indicates a defect.
    pub fn toggle_locale(&mut self, code: &LocaleCode) -> Result<LocaleToggle, SelectionError> {
        if !self.selection.contains(code) {
            return Ok(LocaleToggle::NotSelected);
        }
        let outcome = if self.activation.deactivate(code) {
            LocaleToggle::Deactivated
        } else if let Some(language) = self.catalog.owning_language(code) {
            self.activation.activate(&self.selection, code, language.display_name.clone())?;
            LocaleToggle::Activated
        } else {
            LocaleToggle::Unowned
        };
        self.refresh();
        Ok(outcome)
    }

    /// Clears the selection and overlay; the catalog is kept.
    pub fn reset_selection(&mut self) {
        self.selection.clear();
        self.activation.clear();
        self.refresh();
    }

    /// Returns the reference catalog.
    #[must_use]
    pub const fn catalog(&self) -> &ReferenceCatalog {
        &self.catalog
    }

    /// Returns the selection set.
    #[must_use]
    pub const fn selection_set(&self) -> &SelectionSet {
        &self.selection
    }

    /// Returns the activation overlay.
    #[must_use]
    pub const fn activation_map(&self) -> &ActivationMap {
        &self.activation
    }

    /// Returns the derived views for the current selection.
    #[must_use]
    pub const fn derived(&self) -> &DerivedState {
        &self.derived
    }

    /// Returns the selected locales in insertion order.
    #[must_use]
    pub fn selection(&self) -> Vec<LocaleCode> {
        self.selection.to_vec()
    }

    /// Returns the region activity map.
    #[must_use]
    pub fn region_activity(&self) -> BTreeMap<RegionKey, bool> {
        self.derived.region_activity.clone()
    }

    /// Returns the language activity map.
    #[must_use]
    pub fn language_activity(&self) -> BTreeMap<LanguageCode, bool> {
        self.derived.language_activity.clone()
    }

    /// Returns the language presence map.
    #[must_use]
    pub fn language_presence(&self) -> BTreeMap<LanguageCode, bool> {
        self.derived.language_presence.clone()
    }

    /// Returns the activation overlay as a map.
    #[must_use]
    pub fn activation(&self) -> BTreeMap<LocaleCode, String> {
        self.activation.to_map()
    }

    /// Returns the selection grouped by owning language.
    #[must_use]
    pub fn grouped_selection(&self) -> Vec<LocaleGroup> {
        self.derived.groups.clone()
    }

    /// Returns every read-only view in one bundle.
    #[must_use]
    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            selection: self.selection(),
            activation: self.activation(),
            region_activity: self.region_activity(),
            language_activity: self.language_activity(),
            language_presence: self.language_presence(),
            groups: self.grouped_selection(),
        }
    }

    /// Verifies the overlay subset rule and derived-state freshness.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::InvariantViolation`] describing the first
    /// broken invariant.
    pub fn check_invariants(&self) -> Result<(), SelectionError> {
        self.activation.check_subset_of(&self.selection)?;
        if self.derived != DerivedState::compute(&self.selection, &self.catalog) {
            return Err(SelectionError::InvariantViolation(
                "derived state is stale for the current selection".to_string(),
            ));
        }
        Ok(())
    }

    /// Adds members, returning those that were not already selected.
    fn add_members(&mut self, members: &[LocaleCode]) -> Vec<LocaleCode> {
        members.iter().filter(|code| self.selection.insert((*code).clone())).cloned().collect()
    }

    /// Removes members from selection and overlay, returning those that were selected.
    fn remove_members(&mut self, members: &[LocaleCode]) -> Vec<LocaleCode> {
        let mut removed = Vec::new();
        for code in members {
            self.activation.deactivate(code);
            if self.selection.remove(code) {
                removed.push(code.clone());
            }
        }
        removed
    }

    /// Recomputes derived state against the current selection.
    fn refresh(&mut self) {
        self.derived = DerivedState::compute(&self.selection, &self.catalog);
    }
}
