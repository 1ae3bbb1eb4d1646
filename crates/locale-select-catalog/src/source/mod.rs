// crates/locale-select-catalog/src/source/mod.rs
// ============================================================================
// Module: Locale Select Catalog Sources
// Description: Source trait and reference implementations for catalog fetches.
// Purpose: Retrieve the raw catalog document as bounded bytes.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Sources fetch the raw reference catalog document. They never interpret the
//! bytes; ingestion happens in [`crate::wire`].
//! Implementations must fail closed on invalid locations, non-success
//! responses, and payloads beyond their byte limit.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

// ============================================================================
// SECTION: Source Payload
// ============================================================================

/// Raw catalog bytes returned by a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePayload {
    /// Raw document bytes.
    pub bytes: Vec<u8>,
    /// Optional content type hint.
    pub content_type: Option<String>,
}

/// Default maximum catalog document size (4 MiB).
pub const DEFAULT_MAX_SOURCE_BYTES: usize = 4 * 1024 * 1024;

// ============================================================================
// SECTION: Source Errors
// ============================================================================

/// Errors emitted by catalog sources.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Unsupported or disallowed URI scheme.
    #[error("unsupported uri scheme: {0}")]
    UnsupportedScheme(String),
    /// URI or path failed to parse or resolve.
    #[error("invalid uri: {0}")]
    InvalidUri(String),
    /// Resource was not found.
    #[error("resource not found: {0}")]
    NotFound(String),
    /// Source reported an I/O failure.
    #[error("io failure: {0}")]
    Io(String),
    /// HTTP request failed or returned a non-success status.
    #[error("http failure: {0}")]
    Http(String),
    /// Payload exceeded the configured byte limit.
    #[error("payload exceeds size limit: {actual_bytes} bytes (max {max_bytes})")]
    TooLarge {
        /// Maximum allowed bytes.
        max_bytes: usize,
        /// Actual payload size in bytes.
        actual_bytes: usize,
    },
}

/// Returns an error when a payload exceeds the given size cap.
pub(crate) const fn enforce_max_bytes(
    actual_bytes: usize,
    max_bytes: usize,
) -> Result<(), SourceError> {
    if actual_bytes > max_bytes {
        return Err(SourceError::TooLarge {
            max_bytes,
            actual_bytes,
        });
    }
    Ok(())
}

/// Returns the read limit that detects one byte past the cap.
pub(crate) fn read_limit(max_bytes: usize) -> u64 {
    u64::try_from(max_bytes).unwrap_or(u64::MAX).saturating_add(1)
}

// ============================================================================
// SECTION: Source Trait
// ============================================================================

/// Fetches the raw reference catalog document.
pub trait CatalogSource: Send + Sync {
    /// Returns a label identifying the source in audit records.
    fn describe(&self) -> String;

    /// Fetches the catalog document bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the document cannot be retrieved.
    fn fetch(&self) -> Result<SourcePayload, SourceError>;
}

// ============================================================================
// SECTION: Implementations
// ============================================================================

pub mod file;
pub mod http;

pub use file::FileSource;
pub use http::DEFAULT_TIMEOUT;
pub use http::HttpSource;
pub use http::HttpSourceOptions;
