//! # Openness Level
//!
//! The canonical two-level openness taxonomy. Raw registry data arrives
//! with free-text openness descriptions in the newer schema; the
//! normalizer collapses those onto this enum, and the canonical model
//! only ever carries one of these two values.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// How a model's weights are distributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpennessLevel {
    /// Weights are published; the model can be hosted on-premises.
    #[serde(rename = "Open Weights")]
    OpenWeights,
    /// Access is through a hosted API only.
    #[serde(rename = "API")]
    Api,
}

impl OpennessLevel {
    /// Returns both levels in canonical order.
    pub fn all() -> &'static [OpennessLevel] {
        &[Self::OpenWeights, Self::Api]
    }

    /// Returns the wire string for this level.
    ///
    /// This must match the serde serialization format and the
    /// `openness_level` values in legacy registry data.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenWeights => "Open Weights",
            Self::Api => "API",
        }
    }
}

impl std::fmt::Display for OpennessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OpennessLevel {
    type Err = ValidationError;

    /// Parse an openness level from its wire string.
    ///
    /// Accepts exactly the strings produced by [`OpennessLevel::as_str()`].
    /// Free-text openness descriptions from the newer registry schema are
    /// NOT accepted here; mapping those is the normalizer's job.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Open Weights" => Ok(Self::OpenWeights),
            "API" => Ok(Self::Api),
            other => Err(ValidationError::UnknownOpennessLevel(other.to_string())),
        }
    }
}
