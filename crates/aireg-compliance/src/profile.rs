//! # Model Profile
//!
//! The attribute set the jurisdiction rules read. A profile is shaped
//! like a legacy registry record's sovereignty fields and can also be
//! rebuilt from any canonical model, so callers can re-evaluate a model
//! live without holding the raw record.

use serde::{Deserialize, Serialize};

use aireg_core::OpennessLevel;

/// Rule-evaluation input for a single model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelProfile {
    /// How the model's weights are distributed.
    pub openness_level: OpennessLevel,
    /// Free-text canonical country name (e.g., `"United States"`).
    pub origin_country: String,
    /// Whether the provider offers in-country data processing.
    pub data_residency: bool,
    /// Free-text compliance tags; the EU rule matches on these.
    #[serde(default)]
    pub compliance_tags: Vec<String>,
}
