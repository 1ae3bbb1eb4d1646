// crates/locale-select-cli/src/lib.rs
// ============================================================================
// Module: Locale Select CLI Library
// Description: Shared helpers for the Locale Select command-line interface.
// Purpose: Provide reusable components (i18n, op parsing) for the binary and tests.
// Dependencies: locale-select-core
// ============================================================================

//! ## Overview
//! This library houses shared CLI utilities: the message catalog and the
//! parser for `select --op` operations. The binary entry point (`src/main.rs`)
//! imports these helpers so all user-facing output stays consistent.

// ============================================================================
// SECTION: Modules
// ============================================================================

/// Internationalization helpers and message catalog.
pub mod i18n;
/// Selection operation parsing and application.
pub mod ops;
