//! # Registry Errors
//!
//! Structured errors for the registry load step. Loading is a trust
//! boundary: a file that fails validation must be rejected with enough
//! context to fix the data — the position of every offending record, its
//! id when one is present, and the parse failure itself. The loader
//! collects ALL violations before rejecting; a batch never fails on just
//! the first bad record.

use std::fmt;

use thiserror::Error;

/// Error during registry loading.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The registry file could not be read or parsed at the document level.
    #[error("registry load error for '{path}': {reason}")]
    DocumentLoad {
        /// Path to the registry file.
        path: String,
        /// Reason the document could not be loaded.
        reason: String,
    },

    /// The registry file extension maps to no supported format.
    #[error("unsupported registry format for '{path}' (expected .json, .yaml, or .yml)")]
    UnsupportedFormat {
        /// Path to the registry file.
        path: String,
    },

    /// One or more records failed validation; the whole batch is rejected.
    #[error("registry validation failed for '{path}':\n{violations}")]
    ValidationFailed {
        /// Path to the registry file.
        path: String,
        /// Structured list of individual record violations.
        violations: RecordViolations,
    },
}

/// A single record-level violation with structured context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordViolation {
    /// Zero-based position of the record in the registry file.
    pub index: usize,
    /// Best-effort model id, when the record carried a readable one.
    pub id: Option<String>,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for RecordViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "  [{}] ({}): {}", self.index, id, self.message),
            None => write!(f, "  [{}]: {}", self.index, self.message),
        }
    }
}

/// Collection of record violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordViolations {
    violations: Vec<RecordViolation>,
}

impl RecordViolations {
    /// Wrap a non-empty violation list.
    pub fn new(violations: Vec<RecordViolation>) -> Self {
        Self { violations }
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[RecordViolation] {
        &self.violations
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<RecordViolation> {
        self.violations
    }
}

impl fmt::Display for RecordViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}
