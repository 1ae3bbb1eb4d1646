// crates/locale-select-core/src/lib.rs
// ============================================================================
// Module: Locale Select Core Library
// Description: Public API surface for the locale selection engine.
// Purpose: Expose core types, interfaces, and runtime controllers.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Locale Select core keeps a localization project's region, language, and
//! locale choices mutually consistent. A single [`SelectionSet`] is the source
//! of truth; region and language activity are always derived from it, and an
//! [`ActivationMap`] overlay marks which selected locales are active. The crate
//! is transport-agnostic and integrates through explicit interfaces.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;


// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use interfaces::AuditSink;
pub use interfaces::CatalogLoader;
pub use interfaces::StaticCatalogLoader;
pub use runtime::CatalogAuditEvent;
pub use runtime::CatalogLoadOutcome;
pub use runtime::FileAuditSink;
pub use runtime::GroupToggle;
pub use runtime::LocaleStep;
pub use runtime::LocaleSummary;
pub use runtime::LocaleToggle;
pub use runtime::NoopAuditSink;
pub use runtime::SelectionAuditEvent;
pub use runtime::SelectionEngine;
pub use runtime::SelectionOperation;
pub use runtime::SelectionSnapshot;
pub use runtime::StderrAuditSink;
pub use runtime::StepError;
pub use runtime::StepStatus;
