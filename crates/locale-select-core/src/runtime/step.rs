// crates/locale-select-core/src/runtime/step.rs
// ============================================================================
// Module: Locale Step
// Description: Explicitly owned state for the wizard's locale-picking step.
// Purpose: Gate toggles on a successful catalog load and emit audit events.
// Dependencies: crate::{core, interfaces, runtime}, serde, thiserror
// ============================================================================

//! ## Overview
//! A [`LocaleStep`] is created when the wizard enters the locale step and
//! dropped when the step is torn down, so no selection outlives its session.
//! The step starts pending, becomes ready after one successful catalog load,
//! and becomes failed when the load errors. Toggles are only reachable while
//! ready. A failed step blocks navigation until the caller loads again.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::core::CatalogError;
use crate::core::LanguageCode;
use crate::core::LocaleCode;
use crate::core::ReferenceCatalog;
use crate::core::RegionKey;
use crate::core::SelectionError;
use crate::interfaces::AuditSink;
use crate::interfaces::CatalogLoader;
use crate::runtime::audit::CatalogAuditEvent;
use crate::runtime::audit::NoopAuditSink;
use crate::runtime::audit::SelectionAuditEvent;
use crate::runtime::audit::SelectionAuditEventParams;
use crate::runtime::audit::SelectionOperation;
use crate::runtime::controller::GroupToggle;
use crate::runtime::controller::LocaleToggle;
use crate::runtime::controller::SelectionEngine;
use crate::runtime::controller::SelectionSnapshot;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Locale step errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    /// The catalog has not been loaded yet.
    #[error("reference catalog is still loading")]
    CatalogPending,
    /// The catalog load failed; the step is blocked.
    #[error("{0}")]
    CatalogUnavailable(CatalogError),
    /// The catalog was already loaded for this step.
    #[error("reference catalog already loaded")]
    CatalogAlreadyLoaded,
    /// A toggle was rejected by the selection engine.
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

// ============================================================================
// SECTION: Types
// ============================================================================

/// Lifecycle status of the locale step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    /// Waiting for the catalog load.
    Pending,
    /// Catalog loaded; toggles are available.
    Ready,
    /// Catalog load failed.
    Failed,
}

/// Locales handed to the next wizard step.
///
/// Dormant locales remain in `selected`; only `active` excludes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleSummary {
    /// Project name, when one was supplied.
    pub project_name: Option<String>,
    /// Selected locales in insertion order.
    pub selected: Vec<LocaleCode>,
    /// Active locales in code order.
    pub active: Vec<LocaleCode>,
}

/// Internal lifecycle phase.
#[derive(Debug, Clone)]
enum StepPhase {
    /// No load has completed.
    Pending,
    /// Loaded and interactive.
    Ready(SelectionEngine),
    /// Last load failed.
    Failed(CatalogError),
}

// ============================================================================
// SECTION: Locale Step
// ============================================================================

/// Owned state object for one locale-picking session.
pub struct LocaleStep {
    /// Name of the project being defined.
    project_name: Option<String>,
    /// Lifecycle phase.
    phase: StepPhase,
    /// Destination for audit events.
    audit: Arc<dyn AuditSink>,
}

impl LocaleStep {
    /// Creates a pending step that discards audit events.
    #[must_use]
    pub fn new(project_name: Option<String>) -> Self {
        Self::with_audit(project_name, Arc::new(NoopAuditSink))
    }

    /// Creates a pending step reporting to the given audit sink.
    #[must_use]
    pub fn with_audit(project_name: Option<String>, audit: Arc<dyn AuditSink>) -> Self {
        Self {
            project_name,
            phase: StepPhase::Pending,
            audit,
        }
    }

    /// Returns the project name.
    #[must_use]
    pub fn project_name(&self) -> Option<&str> {
        self.project_name.as_deref()
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> StepStatus {
        match self.phase {
            StepPhase::Pending => StepStatus::Pending,
            StepPhase::Ready(_) => StepStatus::Ready,
            StepPhase::Failed(_) => StepStatus::Failed,
        }
    }

    /// Returns true unless a catalog load error is pending.
    #[must_use]
    pub const fn can_proceed(&self) -> bool {
        !matches!(self.phase, StepPhase::Failed(_))
    }

    /// Returns the load error that blocks the step, if any.
    #[must_use]
    pub const fn load_error(&self) -> Option<&CatalogError> {
        match &self.phase {
            StepPhase::Failed(err) => Some(err),
            StepPhase::Pending | StepPhase::Ready(_) => None,
        }
    }

    /// Returns the loaded catalog.
    #[must_use]
    pub const fn catalog(&self) -> Option<&ReferenceCatalog> {
        match &self.phase {
            StepPhase::Ready(engine) => Some(engine.catalog()),
            StepPhase::Pending | StepPhase::Failed(_) => None,
        }
    }

    /// Loads the catalog through a loader and completes the step's load phase.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::CatalogAlreadyLoaded`] when the step is ready and
    /// [`StepError::CatalogUnavailable`] when the loader fails.
    pub fn load(&mut self, loader: &dyn CatalogLoader) -> Result<(), StepError> {
        if matches!(self.phase, StepPhase::Ready(_)) {
            return Err(StepError::CatalogAlreadyLoaded);
        }
        let result = loader.load();
        self.complete_load(&loader.describe(), result)
    }

    /// Completes the load phase with the result of an externally awaited fetch.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::CatalogAlreadyLoaded`] when the step is ready and
    /// [`StepError::CatalogUnavailable`] when `result` is an error.
    pub fn complete_load(
        &mut self,
        source: &str,
        result: Result<ReferenceCatalog, CatalogError>,
    ) -> Result<(), StepError> {
        if matches!(self.phase, StepPhase::Ready(_)) {
            return Err(StepError::CatalogAlreadyLoaded);
        }
        match result {
            Ok(catalog) => {
                self.audit.record_catalog(&CatalogAuditEvent::loaded(
                    source,
                    catalog.languages().len(),
                    catalog.regions().len(),
                ));
                self.phase = StepPhase::Ready(SelectionEngine::new(catalog));
                Ok(())
            }
            Err(err) => {
                self.audit.record_catalog(&CatalogAuditEvent::failed(source, err.to_string()));
                self.phase = StepPhase::Failed(err.clone());
                Err(StepError::CatalogUnavailable(err))
            }
        }
    }

    /// Returns the selection engine while the step is ready.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::CatalogPending`] or [`StepError::CatalogUnavailable`]
    /// when no catalog is loaded.
    pub fn engine(&self) -> Result<&SelectionEngine, StepError> {
        match &self.phase {
            StepPhase::Ready(engine) => Ok(engine),
            StepPhase::Pending => Err(StepError::CatalogPending),
            StepPhase::Failed(err) => Err(StepError::CatalogUnavailable(err.clone())),
        }
    }

    /// Toggles a region.
    ///
    /// # Errors
    ///
    /// Returns [`StepError`] when the step is not ready or the key is unknown.
    pub fn toggle_region(&mut self, key: &RegionKey) -> Result<GroupToggle, StepError> {
        let engine = self.engine_mut()?;
        let outcome = engine.toggle_region(key)?;
        let params = group_params(SelectionOperation::ToggleRegion, key.as_str(), &outcome, engine);
        self.audit.record_selection(&SelectionAuditEvent::new(params));
        Ok(outcome)
    }

    /// Toggles a language.
    ///
    /// # Errors
    ///
    /// Returns [`StepError`] when the step is not ready or the code is unknown.
    pub fn toggle_language(&mut self, code: &LanguageCode) -> Result<GroupToggle, StepError> {
        let engine = self.engine_mut()?;
        let outcome = engine.toggle_language(code)?;
        let params =
            group_params(SelectionOperation::ToggleLanguage, code.as_str(), &outcome, engine);
        self.audit.record_selection(&SelectionAuditEvent::new(params));
        Ok(outcome)
    }

    /// Toggles a single locale between active and dormant.
    ///
    /// # Errors
    ///
    /// Returns [`StepError`] when the step is not ready.
    pub fn toggle_locale(&mut self, code: &LocaleCode) -> Result<LocaleToggle, StepError> {
        let engine = self.engine_mut()?;
        let outcome = engine.toggle_locale(code)?;
        let changed = match outcome {
            LocaleToggle::Activated | LocaleToggle::Deactivated => vec![code.to_string()],
            LocaleToggle::Unowned | LocaleToggle::NotSelected => Vec::new(),
        };
        let params = SelectionAuditEventParams {
            operation: SelectionOperation::ToggleLocale,
            target: Some(code.to_string()),
            outcome: outcome.label(),
            changed,
            selected: engine.selection_set().len(),
            active: engine.activation_map().len(),
        };
        self.audit.record_selection(&SelectionAuditEvent::new(params));
        Ok(outcome)
    }

    /// Clears the selection and overlay.
    ///
    /// # Errors
    ///
    /// Returns [`StepError`] when the step is not ready.
    pub fn reset_selection(&mut self) -> Result<(), StepError> {
        self.engine_mut()?.reset_selection();
        self.record_reset(SelectionOperation::Reset);
        Ok(())
    }

    /// Leaves the step backwards, discarding the selection but keeping the catalog.
    ///
    /// Pending and failed steps have no selection to discard.
    pub fn exit_backward(&mut self) {
        if let StepPhase::Ready(engine) = &mut self.phase {
            engine.reset_selection();
            self.record_reset(SelectionOperation::ExitBackward);
        }
    }

    /// Returns the read-only snapshot for rendering.
    ///
    /// # Errors
    ///
    /// Returns [`StepError`] when the step is not ready.
    pub fn snapshot(&self) -> Result<SelectionSnapshot, StepError> {
        Ok(self.engine()?.snapshot())
    }

    /// Returns the locales handed to the next wizard step.
    ///
    /// # Errors
    ///
    /// Returns [`StepError`] when the step is not ready.
    pub fn summary(&self) -> Result<LocaleSummary, StepError> {
        let engine = self.engine()?;
        Ok(LocaleSummary {
            project_name: self.project_name.clone(),
            selected: engine.selection(),
            active: engine.activation_map().iter().map(|(code, _)| code.clone()).collect(),
        })
    }

    /// Returns the selection engine mutably while the step is ready.
    fn engine_mut(&mut self) -> Result<&mut SelectionEngine, StepError> {
        match &mut self.phase {
            StepPhase::Ready(engine) => Ok(engine),
            StepPhase::Pending => Err(StepError::CatalogPending),
            StepPhase::Failed(err) => Err(StepError::CatalogUnavailable(err.clone())),
        }
    }

    /// Emits the audit record for a reset-style operation.
    fn record_reset(&self, operation: SelectionOperation) {
        self.audit.record_selection(&SelectionAuditEvent::new(SelectionAuditEventParams {
            operation,
            target: None,
            outcome: "reset",
            changed: Vec::new(),
            selected: 0,
            active: 0,
        }));
    }
}

/// Builds audit parameters for a region or language toggle.
fn group_params(
    operation: SelectionOperation,
    target: &str,
    outcome: &GroupToggle,
    engine: &SelectionEngine,
) -> SelectionAuditEventParams {
    SelectionAuditEventParams {
        operation,
        target: Some(target.to_string()),
        outcome: outcome.label(),
        changed: outcome.changed().iter().map(ToString::to_string).collect(),
        selected: engine.selection_set().len(),
        active: engine.activation_map().len(),
    }
}
