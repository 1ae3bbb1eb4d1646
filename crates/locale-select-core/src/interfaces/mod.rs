// crates/locale-select-core/src/interfaces/mod.rs
// ============================================================================
// Module: Locale Select Interfaces
// Description: Backend-agnostic contracts for catalog loading and audit output.
// Purpose: Define the seams the locale step integrates through.
// Dependencies: crate::core, crate::runtime::audit
// ============================================================================

//! ## Overview
//! Interfaces describe how the locale step reaches external systems without
//! embedding transport details. Catalog loaders fetch and ingest the reference
//! catalog; audit sinks receive structured events. Implementations must fail
//! closed on missing or invalid data.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::CatalogError;
use crate::core::ReferenceCatalog;
use crate::runtime::audit::CatalogAuditEvent;
use crate::runtime::audit::SelectionAuditEvent;

// ============================================================================
// SECTION: Catalog Loader
// ============================================================================

/// Source of the reference catalog for one locale step.
pub trait CatalogLoader {
    /// Human-readable label identifying the source in audit records.
    fn describe(&self) -> String;

    /// Fetches and ingests the reference catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Unavailable`] when the source cannot be reached
    /// or reports failure, and [`CatalogError::Malformed`] when the document
    /// cannot be ingested.
    fn load(&self) -> Result<ReferenceCatalog, CatalogError>;
}

/// Loader that hands back an already constructed catalog.
#[derive(Debug, Clone)]
pub struct StaticCatalogLoader {
    /// Catalog returned by every load.
    catalog: ReferenceCatalog,
}

impl StaticCatalogLoader {
    /// Wraps a prepared catalog.
    #[must_use]
    pub const fn new(catalog: ReferenceCatalog) -> Self {
        Self {
            catalog,
        }
    }
}

impl CatalogLoader for StaticCatalogLoader {
    fn describe(&self) -> String {
        "static".to_string()
    }

    fn load(&self) -> Result<ReferenceCatalog, CatalogError> {
        Ok(self.catalog.clone())
    }
}

// ============================================================================
// SECTION: Audit Sink
// ============================================================================

/// Receiver for structured locale step events.
pub trait AuditSink: Send + Sync {
    /// Records a catalog load outcome.
    fn record_catalog(&self, event: &CatalogAuditEvent);

    /// Records a selection mutation.
    fn record_selection(&self, _event: &SelectionAuditEvent) {}
}
