// crates/locale-select-catalog/src/source/file.rs
// ============================================================================
// Module: Locale Select File Source
// Description: File-backed source for a locally mirrored catalog document.
// Purpose: Read catalog bytes from a local file.
// Dependencies: std
// ============================================================================

//! ## Overview
//! [`FileSource`] reads the catalog document from a local path. A root
//! directory can be configured to fail closed on path traversal.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::ErrorKind;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;

use crate::source::CatalogSource;
use crate::source::DEFAULT_MAX_SOURCE_BYTES;
use crate::source::SourceError;
use crate::source::SourcePayload;
use crate::source::enforce_max_bytes;
use crate::source::read_limit;

// ============================================================================
// SECTION: File Source
// ============================================================================

/// File-backed catalog source.
#[derive(Debug, Clone)]
pub struct FileSource {
    /// Catalog document path.
    path: PathBuf,
    /// Optional root directory for path traversal protection.
    root: Option<PathBuf>,
    /// Maximum accepted file size in bytes.
    max_bytes: usize,
}

impl FileSource {
    /// Creates a file source with no root restriction.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            root: None,
            max_bytes: DEFAULT_MAX_SOURCE_BYTES,
        }
    }

    /// Restricts reads to files under `root`.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Overrides the maximum accepted file size.
    #[must_use]
    pub const fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Returns the configured document path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolves the document path, enforcing the root restriction.
    fn resolve_path(&self) -> Result<PathBuf, SourceError> {
        let Some(root) = &self.root else {
            return Ok(self.path.clone());
        };
        let root = std::fs::canonicalize(root).map_err(|err| SourceError::Io(err.to_string()))?;
        let resolved = std::fs::canonicalize(&self.path).map_err(map_open_error)?;
        if !resolved.starts_with(&root) {
            return Err(SourceError::InvalidUri("file path escapes configured root".to_string()));
        }
        Ok(resolved)
    }

    /// Reads the file, failing once the byte limit is exceeded.
    fn read_with_limit(&self, path: &Path) -> Result<Vec<u8>, SourceError> {
        let file = std::fs::File::open(path).map_err(map_open_error)?;
        let mut limited = file.take(read_limit(self.max_bytes));
        let mut bytes = Vec::new();
        limited.read_to_end(&mut bytes).map_err(|err| SourceError::Io(err.to_string()))?;
        enforce_max_bytes(bytes.len(), self.max_bytes)?;
        Ok(bytes)
    }
}

impl CatalogSource for FileSource {
    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }

    fn fetch(&self) -> Result<SourcePayload, SourceError> {
        let path = self.resolve_path()?;
        let bytes = self.read_with_limit(&path)?;
        Ok(SourcePayload {
            bytes,
            content_type: None,
        })
    }
}

/// Maps a file open error into a source error.
fn map_open_error(err: std::io::Error) -> SourceError {
    if err.kind() == ErrorKind::NotFound {
        SourceError::NotFound(err.to_string())
    } else {
        SourceError::Io(err.to_string())
    }
}
