// crates/locale-select-catalog/src/lib.rs
// ============================================================================
// Module: Locale Select Catalog Library
// Description: Reference catalog sources and wire-format ingestion.
// Purpose: Fetch the published locale configuration and build a catalog.
// Dependencies: locale-select-core, reqwest, serde, url
// ============================================================================

//! ## Overview
//! Locale Select Catalog provides [`CatalogSource`] implementations that fetch
//! the raw catalog document, the [`wire`] ingestion that turns either published
//! document form into a [`locale_select_core::ReferenceCatalog`], and the
//! [`SourceCatalogLoader`] adapter that plugs both into the locale step.
//! Invariants:
//! - Source payloads are capped at a configured byte limit.
//! - Non-success HTTP statuses and redirects fail closed.
//! - Malformed documents never yield a partial catalog.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod loader;
pub mod source;
pub mod wire;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use loader::DEFAULT_CATALOG_URL;
pub use loader::SourceCatalogLoader;
pub use source::CatalogSource;
pub use source::DEFAULT_MAX_SOURCE_BYTES;
pub use source::FileSource;
pub use source::HttpSource;
pub use source::HttpSourceOptions;
pub use source::SourceError;
pub use source::SourcePayload;
pub use wire::CatalogDocument;
pub use wire::parse_catalog;
pub use wire::split_locale_list;
