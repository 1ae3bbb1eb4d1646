// crates/locale-select-core/src/core/mod.rs
// ============================================================================
// Module: Locale Select Core Types
// Description: Catalog, selection, activation, and derived-state structures.
// Purpose: Provide the canonical data model for locale selection.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Core types define the reference catalog, the authoritative selection set,
//! the activation overlay, and the pure calculators that derive region and
//! language state from them. Runtime controllers mutate these types; nothing
//! else does.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod activation;
pub mod catalog;
pub mod derived;
pub mod identifiers;
pub mod selection;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use activation::ActivationMap;
pub use catalog::CatalogError;
pub use catalog::Language;
pub use catalog::MAX_CATALOG_ENTRIES;
pub use catalog::MAX_DISPLAY_NAME_LENGTH;
pub use catalog::MAX_GROUP_MEMBERS;
pub use catalog::MAX_IDENTIFIER_LENGTH;
pub use catalog::ReferenceCatalog;
pub use catalog::Region;
pub use derived::DerivedState;
pub use derived::LocaleGroup;
pub use derived::UNGROUPED_LABEL;
pub use derived::grouped_selection;
pub use derived::language_activity;
pub use derived::language_presence;
pub use derived::region_activity;
pub use identifiers::LanguageCode;
pub use identifiers::LocaleCode;
pub use identifiers::RegionKey;
pub use selection::SelectionError;
pub use selection::SelectionSet;
