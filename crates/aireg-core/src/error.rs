//! # Error Types — Shared Validation Errors
//!
//! Validation errors for the core domain primitives. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! Higher layers wrap these in their own error enums; nothing in this
//! crate performs I/O, so there is no `Io` variant here.

use thiserror::Error;

/// Validation failure for a core domain primitive.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Model identifier was empty or whitespace-only.
    #[error("model id must be a non-empty string")]
    InvalidModelId,

    /// Jurisdiction code outside the supported set.
    #[error("unknown jurisdiction: {0:?} (expected one of \"EU\", \"IN\", \"US\")")]
    UnknownJurisdiction(String),

    /// Openness level wire value not recognized.
    #[error("unknown openness level: {0:?} (expected \"Open Weights\" or \"API\")")]
    UnknownOpennessLevel(String),
}
