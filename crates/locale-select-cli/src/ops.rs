// crates/locale-select-cli/src/ops.rs
// ============================================================================
// Module: CLI Selection Operations
// Description: Parser and dispatcher for `select --op` arguments.
// Purpose: Turn textual operations into locale step toggles.
// Dependencies: locale-select-core, thiserror
// ============================================================================

//! ## Overview
//! Each `--op` argument names one locale step operation:
//!
//! - `region:KEY` toggles a region.
//! - `language:CODE` toggles a language.
//! - `locale:CODE` toggles a locale's activation.
//! - `reset` clears the selection.
//! - `back` leaves the step backwards.
//!
//! Targets are taken verbatim after the first `:`; identifiers are opaque, so
//! no case folding or trimming beyond surrounding whitespace is applied.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::str::FromStr;

use locale_select_core::LanguageCode;
use locale_select_core::LocaleCode;
use locale_select_core::LocaleStep;
use locale_select_core::RegionKey;
use locale_select_core::StepError;
use thiserror::Error;

// ============================================================================
// SECTION: Types
// ============================================================================

/// One parsed selection operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOp {
    /// Toggle every member of a region.
    Region(RegionKey),
    /// Toggle every member of a language.
    Language(LanguageCode),
    /// Toggle one locale's activation.
    Locale(LocaleCode),
    /// Clear selection and activation.
    Reset,
    /// Leave the step backwards.
    Back,
}

/// Errors produced while parsing an `--op` argument.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpParseError {
    /// The argument was blank.
    #[error("operation is empty")]
    Empty,
    /// The operation kind is not recognized.
    #[error("unknown operation kind: {0}")]
    UnknownKind(String),
    /// A toggle operation lacks its target.
    #[error("operation {0} requires a target")]
    MissingTarget(String),
    /// A bare operation was given a target.
    #[error("operation {0} takes no target")]
    UnexpectedTarget(String),
}

// ============================================================================
// SECTION: Parsing
// ============================================================================

impl FromStr for SelectOp {
    type Err = OpParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(OpParseError::Empty);
        }
        let (kind, target) = match raw.split_once(':') {
            Some((kind, target)) => (kind.trim(), Some(target.trim())),
            None => (raw, None),
        };
        match (kind, target) {
            ("reset", None) => Ok(Self::Reset),
            ("back", None) => Ok(Self::Back),
            ("reset" | "back", Some(_)) => Err(OpParseError::UnexpectedTarget(kind.to_string())),
            ("region" | "language" | "locale", None | Some("")) => {
                Err(OpParseError::MissingTarget(kind.to_string()))
            }
            ("region", Some(target)) => Ok(Self::Region(RegionKey::new(target))),
            ("language", Some(target)) => Ok(Self::Language(LanguageCode::new(target))),
            ("locale", Some(target)) => Ok(Self::Locale(LocaleCode::new(target))),
            (other, _) => Err(OpParseError::UnknownKind(other.to_string())),
        }
    }
}

/// Parses every `--op` argument, stopping at the first invalid one.
///
/// # Errors
///
/// Returns the offending argument together with its [`OpParseError`].
pub fn parse_ops(raw: &[String]) -> Result<Vec<SelectOp>, (String, OpParseError)> {
    raw.iter().map(|op| op.parse().map_err(|err| (op.clone(), err))).collect()
}

// ============================================================================
// SECTION: Application
// ============================================================================

/// Applies one operation to a ready locale step.
///
/// # Errors
///
/// Returns [`StepError`] when the step is not ready or the target is unknown.
pub fn apply_op(step: &mut LocaleStep, op: &SelectOp) -> Result<(), StepError> {
    match op {
        SelectOp::Region(key) => step.toggle_region(key).map(|_| ()),
        SelectOp::Language(code) => step.toggle_language(code).map(|_| ()),
        SelectOp::Locale(code) => step.toggle_locale(code).map(|_| ()),
        SelectOp::Reset => step.reset_selection(),
        SelectOp::Back => {
            step.exit_backward();
            Ok(())
        }
    }
}
