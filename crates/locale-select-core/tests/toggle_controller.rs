// crates/locale-select-core/tests/toggle_controller.rs
// ============================================================================
// Module: Toggle Controller Tests
// Description: Scenario tests for region, language, and locale toggles.
// Purpose: Validate selection, activation, and derived state after each toggle.
// Dependencies: locale-select-core
// ============================================================================

//! ## Overview
//! Walks the selection engine through concrete catalogs and checks the
//! selection set, activation overlay, and derived region/language state after
//! every step.

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

use locale_select_core::GroupToggle;
use locale_select_core::LanguageCode;
use locale_select_core::LocaleCode;
use locale_select_core::LocaleToggle;
use locale_select_core::ReferenceCatalog;
use locale_select_core::RegionKey;
use locale_select_core::SelectionEngine;
use locale_select_core::SelectionError;
use locale_select_core::UNGROUPED_LABEL;

use crate::common::catalog_with_orphan;
use crate::common::codes;
use crate::common::emea_catalog;
use crate::common::language;
use crate::common::region;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn emea() -> RegionKey {
    RegionKey::new("EMEA")
}

fn french() -> LanguageCode {
    LanguageCode::new("fr")
}

fn locale(value: &str) -> LocaleCode {
    LocaleCode::new(value)
}

fn sorted(mut values: Vec<LocaleCode>) -> Vec<LocaleCode> {
    values.sort();
    values
}

// ============================================================================
// SECTION: Scenarios
// ============================================================================

#[test]
fn emea_then_french_then_deactivate_fr_fr() {
    let mut engine = SelectionEngine::new(emea_catalog());

    let outcome = engine.toggle_region(&emea()).unwrap();
    assert_eq!(outcome, GroupToggle::Selected(codes(&["en-GB", "fr-FR", "de-DE"])));
    assert_eq!(engine.selection(), codes(&["en-GB", "fr-FR", "de-DE"]));
    assert_eq!(engine.region_activity().get(&emea()), Some(&true));

    let outcome = engine.toggle_language(&french()).unwrap();
    assert_eq!(outcome, GroupToggle::Selected(codes(&["fr-CA"])));
    assert_eq!(engine.selection(), codes(&["en-GB", "fr-FR", "de-DE", "fr-CA"]));
    assert_eq!(engine.language_activity().get(&french()), Some(&true));
    assert_eq!(engine.activation().get(&locale("fr-FR")).map(String::as_str), Some("French"));
    assert_eq!(engine.activation().get(&locale("fr-CA")).map(String::as_str), Some("French"));

    let outcome = engine.toggle_locale(&locale("fr-FR")).unwrap();
    assert_eq!(outcome, LocaleToggle::Deactivated);
    assert!(!engine.activation().contains_key(&locale("fr-FR")));
    assert_eq!(engine.selection(), codes(&["en-GB", "fr-FR", "de-DE", "fr-CA"]));
    assert_eq!(engine.region_activity().get(&emea()), Some(&true));
    engine.check_invariants().unwrap();
}

#[test]
fn region_double_toggle_restores_empty_selection() {
    let mut engine = SelectionEngine::new(emea_catalog());
    engine.toggle_region(&emea()).unwrap();
    let outcome = engine.toggle_region(&emea()).unwrap();

    assert_eq!(outcome, GroupToggle::Deselected(codes(&["en-GB", "fr-FR", "de-DE"])));
    assert!(engine.selection().is_empty());
    assert!(engine.activation().is_empty());
    assert_eq!(engine.region_activity().get(&emea()), Some(&false));
}

#[test]
fn region_select_activates_members_with_owning_language_names() {
    let mut engine = SelectionEngine::new(emea_catalog());
    engine.toggle_region(&emea()).unwrap();

    let activation = engine.activation();
    assert_eq!(activation.get(&locale("en-GB")).map(String::as_str), Some("English"));
    assert_eq!(activation.get(&locale("fr-FR")).map(String::as_str), Some("French"));
    assert_eq!(activation.get(&locale("de-DE")).map(String::as_str), Some("German"));
}

#[test]
fn region_select_leaves_already_selected_members_untouched() {
    let mut engine = SelectionEngine::new(emea_catalog());
    engine.toggle_language(&french()).unwrap();
    engine.toggle_locale(&locale("fr-FR")).unwrap();
    assert!(!engine.activation().contains_key(&locale("fr-FR")));

    let outcome = engine.toggle_region(&emea()).unwrap();
    assert_eq!(outcome, GroupToggle::Selected(codes(&["en-GB", "de-DE"])));
    assert!(!engine.activation().contains_key(&locale("fr-FR")));
    assert!(engine.selection_set().contains(&locale("fr-FR")));
}

#[test]
fn partially_selected_region_is_completed_not_cleared() {
    let mut engine = SelectionEngine::new(emea_catalog());
    engine.toggle_language(&french()).unwrap();
    assert_eq!(engine.region_activity().get(&emea()), Some(&false));

    engine.toggle_region(&emea()).unwrap();
    assert_eq!(engine.region_activity().get(&emea()), Some(&true));
    assert_eq!(
        sorted(engine.selection()),
        sorted(codes(&["fr-FR", "fr-CA", "en-GB", "de-DE"]))
    );
}

#[test]
fn language_deselect_clears_shared_region_activity() {
    let mut engine = SelectionEngine::new(emea_catalog());
    engine.toggle_region(&emea()).unwrap();
    engine.toggle_language(&french()).unwrap();

    let outcome = engine.toggle_language(&french()).unwrap();
    assert_eq!(outcome, GroupToggle::Deselected(codes(&["fr-FR", "fr-CA"])));
    assert_eq!(engine.selection(), codes(&["en-GB", "de-DE"]));
    assert_eq!(engine.region_activity().get(&emea()), Some(&false));
    assert_eq!(engine.region_activity().get(&RegionKey::new("AMER")), Some(&false));
    engine.check_invariants().unwrap();
}

#[test]
fn language_toggle_uses_live_selection_for_on_off() {
    let mut engine = SelectionEngine::new(emea_catalog());
    engine.toggle_region(&emea()).unwrap();
    engine.toggle_region(&RegionKey::new("AMER")).unwrap();
    assert_eq!(engine.language_activity().get(&french()), Some(&true));

    let outcome = engine.toggle_language(&french()).unwrap();
    assert!(matches!(outcome, GroupToggle::Deselected(_)));
    assert_eq!(engine.region_activity().get(&emea()), Some(&false));
    assert_eq!(engine.region_activity().get(&RegionKey::new("AMER")), Some(&false));
}

#[test]
fn language_presence_tracks_partial_selection() {
    let mut engine = SelectionEngine::new(emea_catalog());
    engine.toggle_region(&emea()).unwrap();

    assert_eq!(engine.language_presence().get(&french()), Some(&true));
    assert_eq!(engine.language_activity().get(&french()), Some(&false));
}

// ============================================================================
// SECTION: Locale Toggles
// ============================================================================

#[test]
fn toggle_locale_reactivates_with_language_name() {
    let mut engine = SelectionEngine::new(emea_catalog());
    engine.toggle_region(&emea()).unwrap();
    assert_eq!(engine.toggle_locale(&locale("de-DE")).unwrap(), LocaleToggle::Deactivated);
    assert_eq!(engine.toggle_locale(&locale("de-DE")).unwrap(), LocaleToggle::Activated);
    assert_eq!(engine.activation().get(&locale("de-DE")).map(String::as_str), Some("German"));
}

#[test]
fn toggle_locale_ignores_unselected_codes() {
    let mut engine = SelectionEngine::new(emea_catalog());
    let outcome = engine.toggle_locale(&locale("fr-FR")).unwrap();
    assert_eq!(outcome, LocaleToggle::NotSelected);
    assert!(engine.activation().is_empty());
    assert!(engine.selection().is_empty());
}

#[test]
fn orphan_locale_is_selected_but_never_active() {
    let mut engine = SelectionEngine::new(catalog_with_orphan());
    engine.toggle_region(&RegionKey::new("APAC")).unwrap();

    assert!(engine.selection_set().contains(&locale("xx-ZZ")));
    assert!(!engine.activation().contains_key(&locale("xx-ZZ")));
    assert_eq!(engine.toggle_locale(&locale("xx-ZZ")).unwrap(), LocaleToggle::Unowned);
    assert!(!engine.activation().contains_key(&locale("xx-ZZ")));
}

// ============================================================================
// SECTION: Reset and Errors
// ============================================================================

#[test]
fn reset_clears_selection_and_activation() {
    let mut engine = SelectionEngine::new(emea_catalog());
    engine.toggle_region(&emea()).unwrap();
    engine.toggle_language(&french()).unwrap();
    engine.reset_selection();

    assert!(engine.selection().is_empty());
    assert!(engine.activation().is_empty());
    assert!(engine.region_activity().values().all(|active| !active));
    assert_eq!(engine.catalog().regions().len(), 2);
}

#[test]
fn unknown_region_and_language_leave_state_unchanged() {
    let mut engine = SelectionEngine::new(emea_catalog());
    engine.toggle_region(&emea()).unwrap();
    let before = engine.snapshot();

    let err = engine.toggle_region(&RegionKey::new("LATAM")).unwrap_err();
    assert_eq!(err, SelectionError::UnknownRegion(RegionKey::new("LATAM")));
    let err = engine.toggle_language(&LanguageCode::new("pt")).unwrap_err();
    assert_eq!(err, SelectionError::UnknownLanguage(LanguageCode::new("pt")));

    assert_eq!(engine.snapshot(), before);
}

// ============================================================================
// SECTION: Grouping
// ============================================================================

#[test]
fn grouped_selection_follows_first_appearance_with_ungrouped_last() {
    let mut engine = SelectionEngine::new(catalog_with_orphan());
    engine.toggle_region(&RegionKey::new("APAC")).unwrap();
    let groups = engine.grouped_selection();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].label, "Japanese");
    assert_eq!(groups[0].locales, codes(&["ja-JP"]));
    assert_eq!(groups[1].language, None);
    assert_eq!(groups[1].label, UNGROUPED_LABEL);
    assert_eq!(groups[1].locales, codes(&["xx-ZZ"]));
}

#[test]
fn grouped_selection_preserves_selection_order_within_group() {
    let mut engine = SelectionEngine::new(emea_catalog());
    engine.toggle_region(&RegionKey::new("AMER")).unwrap();
    engine.toggle_region(&emea()).unwrap();
    let groups = engine.grouped_selection();

    let labels: Vec<&str> = groups.iter().map(|group| group.label.as_str()).collect();
    assert_eq!(labels, vec!["English", "French", "German"]);
    assert_eq!(groups[0].locales, codes(&["en-US", "en-GB"]));
    assert_eq!(groups[1].locales, codes(&["fr-CA", "fr-FR"]));
}

#[test]
fn grouped_selection_merges_languages_sharing_a_display_name() {
    let catalog = ReferenceCatalog::new(
        vec![
            language("en-uk", "English", &["en-GB"]),
            language("en-us", "English", &["en-US"]),
            language("fr", "French", &["fr-FR"]),
        ],
        vec![region("WW", &["en-GB", "fr-FR", "en-US"])],
    )
    .unwrap();
    let mut engine = SelectionEngine::new(catalog);
    engine.toggle_region(&RegionKey::new("WW")).unwrap();
    let groups = engine.grouped_selection();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].label, "English");
    assert_eq!(groups[0].language, Some(LanguageCode::new("en-uk")));
    assert_eq!(groups[0].locales, codes(&["en-GB", "en-US"]));
    assert_eq!(groups[1].label, "French");
    assert_eq!(groups[1].locales, codes(&["fr-FR"]));
}
