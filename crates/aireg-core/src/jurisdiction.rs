//! # Jurisdiction — Single Source of Truth
//!
//! Defines the `Jurisdiction` enum with the three regulatory regimes the
//! rule set covers. This is the ONE definition used across the entire
//! stack. Every `match` on `Jurisdiction` must be exhaustive — adding a
//! regime forces every consumer to handle it at compile time.
//!
//! ## Validation Invariant
//!
//! The enum is closed and validated at the parse boundary. An unknown
//! jurisdiction code is a hard error, never an empty verdict: a caller
//! cannot ask for a jurisdiction the rule set does not know about.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// Jurisdictions with a hardcoded compliance rule snapshot.
///
/// Each jurisdiction carries exactly one rule in the current snapshot;
/// the evaluator matches exhaustively on this enum, so growing the rule
/// set starts here.
///
/// | Code | Regime | Rule basis |
/// |------|--------|------------|
/// | EU | European Union | AI Act Article 53 transparency |
/// | IN | India | DPDP 2025 data residency |
/// | US | United States | 2025 National AI Policy reporting |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Jurisdiction {
    /// European Union (EU AI Act).
    #[serde(rename = "EU")]
    Eu,
    /// India (Digital Personal Data Protection Act).
    #[serde(rename = "IN")]
    In,
    /// United States (2025 National AI Policy).
    #[serde(rename = "US")]
    Us,
}

/// Total number of jurisdictions. Used for compile-time assertions.
pub const JURISDICTION_COUNT: usize = 3;

impl Jurisdiction {
    /// Returns all jurisdictions in canonical order (EU, IN, US).
    pub fn all() -> &'static [Jurisdiction] {
        &[Self::Eu, Self::In, Self::Us]
    }

    /// Returns the uppercase wire code for this jurisdiction.
    ///
    /// This must match the serde serialization format and the keys of the
    /// per-model compliance summary.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eu => "EU",
            Self::In => "IN",
            Self::Us => "US",
        }
    }

    /// Human-readable name for display surfaces.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Eu => "EU",
            Self::In => "India",
            Self::Us => "USA",
        }
    }
}

impl std::fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Jurisdiction {
    type Err = ValidationError;

    /// Parse a jurisdiction from its uppercase wire code.
    ///
    /// Accepts the same codes produced by [`Jurisdiction::as_str()`].
    /// Case-sensitive: `"eu"` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EU" => Ok(Self::Eu),
            "IN" => Ok(Self::In),
            "US" => Ok(Self::Us),
            other => Err(ValidationError::UnknownJurisdiction(other.to_string())),
        }
    }
}
