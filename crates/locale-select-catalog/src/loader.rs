// crates/locale-select-catalog/src/loader.rs
// ============================================================================
// Module: Locale Select Source Catalog Loader
// Description: Adapter from catalog sources to the core loader interface.
// Purpose: Fetch, ingest, and classify failures for the locale step.
// Dependencies: locale-select-core
// ============================================================================

//! ## Overview
//! [`SourceCatalogLoader`] composes a [`CatalogSource`] with [`parse_catalog`]
//! and implements [`CatalogLoader`]. Fetch failures map to
//! [`CatalogError::Unavailable`]; oversized or unparseable documents map to
//! [`CatalogError::Malformed`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use locale_select_core::CatalogError;
use locale_select_core::CatalogLoader;
use locale_select_core::ReferenceCatalog;

use crate::source::CatalogSource;
use crate::source::SourceError;
use crate::wire::parse_catalog;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Published location of the shared locale configuration.
pub const DEFAULT_CATALOG_URL: &str = "https://main--milo--adobecom.hlx.page/.milo/config.json";

// ============================================================================
// SECTION: Loader
// ============================================================================

/// Catalog loader backed by a [`CatalogSource`].
#[derive(Debug, Clone)]
pub struct SourceCatalogLoader<S> {
    /// Source that supplies the raw document.
    source: S,
}

impl<S: CatalogSource> SourceCatalogLoader<S> {
    /// Wraps a catalog source.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self {
            source,
        }
    }

    /// Returns the wrapped source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }
}

impl<S: CatalogSource> CatalogLoader for SourceCatalogLoader<S> {
    fn describe(&self) -> String {
        self.source.describe()
    }

    fn load(&self) -> Result<ReferenceCatalog, CatalogError> {
        let payload = self.source.fetch()?;
        parse_catalog(&payload.bytes)
    }
}

impl From<SourceError> for CatalogError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::TooLarge {
                ..
            } => Self::Malformed(err.to_string()),
            SourceError::UnsupportedScheme(_)
            | SourceError::InvalidUri(_)
            | SourceError::NotFound(_)
            | SourceError::Io(_)
            | SourceError::Http(_) => Self::Unavailable(err.to_string()),
        }
    }
}
