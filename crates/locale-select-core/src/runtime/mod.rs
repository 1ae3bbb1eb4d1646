// crates/locale-select-core/src/runtime/mod.rs
// ============================================================================
// Module: Locale Select Runtime
// Description: Toggle controller, locale step lifecycle, and audit sinks.
// Purpose: Apply selection mutations against a loaded reference catalog.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! Runtime modules own mutable selection state. [`SelectionEngine`] applies
//! toggles; [`LocaleStep`] wraps it with the catalog-load lifecycle and audit
//! output. All callers go through the same engine so derived state is always
//! recomputed the same way.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod audit;
pub mod controller;
pub mod step;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::CatalogAuditEvent;
pub use audit::CatalogLoadOutcome;
pub use audit::FileAuditSink;
pub use audit::NoopAuditSink;
pub use audit::SelectionAuditEvent;
pub use audit::SelectionAuditEventParams;
pub use audit::SelectionOperation;
pub use audit::StderrAuditSink;
pub use controller::GroupToggle;
pub use controller::LocaleToggle;
pub use controller::SelectionEngine;
pub use controller::SelectionSnapshot;
pub use step::LocaleStep;
pub use step::LocaleSummary;
pub use step::StepError;
pub use step::StepStatus;
