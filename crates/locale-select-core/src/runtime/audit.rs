// crates/locale-select-core/src/runtime/audit.rs
// ============================================================================
// Module: Locale Select Audit Logging
// Description: Structured audit events for catalog loads and selection changes.
// Purpose: Emit JSON-lines records without hard logging dependencies.
// Dependencies: crate::interfaces, serde, serde_json
// ============================================================================

//! ## Overview
//! This module defines the audit event payloads emitted by the locale step and
//! three sinks: a no-op sink, a stderr sink, and an append-only file sink.
//! Events are plain serializable records so hosts can route them into any
//! logging pipeline.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;

use crate::interfaces::AuditSink;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Outcome of a catalog load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogLoadOutcome {
    /// Catalog was fetched and ingested.
    Loaded,
    /// Catalog could not be fetched or ingested.
    Failed,
}

/// Selection mutation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionOperation {
    /// Region quick-select toggle.
    ToggleRegion,
    /// Language toggle.
    ToggleLanguage,
    /// Single locale activation toggle.
    ToggleLocale,
    /// Explicit reset of the selection.
    Reset,
    /// Backward exit from the locale step.
    ExitBackward,
}

/// Catalog load audit event payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Source label reported by the loader.
    pub source: String,
    /// Load outcome.
    pub outcome: CatalogLoadOutcome,
    /// Number of languages ingested.
    pub languages: usize,
    /// Number of regions ingested.
    pub regions: usize,
    /// Failure detail when the load failed.
    pub error: Option<String>,
}

/// Selection change audit event payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Mutation kind.
    pub operation: SelectionOperation,
    /// Region key, language code, or locale code targeted by the operation.
    pub target: Option<String>,
    /// Normalized outcome label.
    pub outcome: &'static str,
    /// Locale codes whose selection or activation changed.
    pub changed: Vec<String>,
    /// Selection size after the operation.
    pub selected: usize,
    /// Activation size after the operation.
    pub active: usize,
}

/// Inputs required to construct a selection audit event.
pub struct SelectionAuditEventParams {
    /// Mutation kind.
    pub operation: SelectionOperation,
    /// Operation target, if any.
    pub target: Option<String>,
    /// Normalized outcome label.
    pub outcome: &'static str,
    /// Locale codes whose selection or activation changed.
    pub changed: Vec<String>,
    /// Selection size after the operation.
    pub selected: usize,
    /// Activation size after the operation.
    pub active: usize,
}

impl CatalogAuditEvent {
    /// Creates an event for a successful load.
    #[must_use]
    pub fn loaded(source: impl Into<String>, languages: usize, regions: usize) -> Self {
        Self {
            event: "catalog_load",
            timestamp_ms: now_ms(),
            source: source.into(),
            outcome: CatalogLoadOutcome::Loaded,
            languages,
            regions,
            error: None,
        }
    }

    /// Creates an event for a failed load.
    #[must_use]
    pub fn failed(source: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            event: "catalog_load",
            timestamp_ms: now_ms(),
            source: source.into(),
            outcome: CatalogLoadOutcome::Failed,
            languages: 0,
            regions: 0,
            error: Some(error.into()),
        }
    }
}

impl SelectionAuditEvent {
    /// Creates a new selection event with a consistent timestamp.
    #[must_use]
    pub fn new(params: SelectionAuditEventParams) -> Self {
        Self {
            event: "selection_change",
            timestamp_ms: now_ms(),
            operation: params.operation,
            target: params.target,
            outcome: params.outcome,
            changed: params.changed,
            selected: params.selected,
            active: params.active,
        }
    }
}

/// Milliseconds since the unix epoch, zero if the clock is before it.
fn now_ms() -> u128 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis()
}

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Audit sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAuditSink;

impl AuditSink for NoopAuditSink {
    fn record_catalog(&self, _event: &CatalogAuditEvent) {}
}

/// Audit sink that logs JSON lines to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrAuditSink;

impl AuditSink for StderrAuditSink {
    fn record_catalog(&self, event: &CatalogAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }

    fn record_selection(&self, event: &SelectionAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that appends JSON lines to a file.
pub struct FileAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileAuditSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }

    /// Writes one serialized record followed by a newline.
    fn write_line<T: Serialize>(&self, event: &T) {
        let Ok(payload) = serde_json::to_string(event) else {
            return;
        };
        if let Ok(mut guard) = self.file.lock() {
            let _ = writeln!(guard, "{payload}");
        }
    }
}

impl AuditSink for FileAuditSink {
    fn record_catalog(&self, event: &CatalogAuditEvent) {
        self.write_line(event);
    }

    fn record_selection(&self, event: &SelectionAuditEvent) {
        self.write_line(event);
    }
}
