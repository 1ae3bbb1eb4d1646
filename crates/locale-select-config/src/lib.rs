// crates/locale-select-config/src/lib.rs
// ============================================================================
// Module: Locale Select Config Library
// Description: Canonical config model and validation.
// Purpose: Single source of truth for locale-select.toml semantics.
// Dependencies: locale-select-catalog, serde, toml
// ============================================================================

//! ## Overview
//! `locale-select-config` defines the configuration model for the Locale
//! Select tooling: where the reference catalog comes from and where audit
//! records go. Validation is strict and fail-closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
