//! # Canonical Model
//!
//! The normalized, stable model shape every consumer reads: filtering and
//! search, risk badges, and the comparison matrix all work off this one
//! representation. Canonical models are derived values — recomputed in
//! full on every normalization pass, never mutated in place.

use serde::{Deserialize, Serialize};

use aireg_compliance::ModelProfile;
use aireg_core::{Jurisdiction, ModelId, OpennessLevel};

use crate::intelligence::ModelIntelligence;

/// Display status used when a new-shape record carries no entry for a
/// jurisdiction.
pub const STATUS_PLACEHOLDER: &str = "—";

/// Pre-computed display status per jurisdiction.
///
/// Every canonical model carries an entry for all three jurisdictions;
/// [`STATUS_PLACEHOLDER`] stands in where the source had nothing. Keys
/// serialize as the jurisdiction wire codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceSummary {
    /// EU status string.
    #[serde(rename = "EU")]
    pub eu: String,
    /// India status string.
    #[serde(rename = "IN")]
    pub india: String,
    /// US status string.
    #[serde(rename = "US")]
    pub us: String,
}

impl ComplianceSummary {
    /// The status string for one jurisdiction.
    pub fn status(&self, jurisdiction: Jurisdiction) -> &str {
        match jurisdiction {
            Jurisdiction::Eu => &self.eu,
            Jurisdiction::In => &self.india,
            Jurisdiction::Us => &self.us,
        }
    }
}

/// A fully normalized registry model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalModel {
    /// Model identifier slug, unique within a registry.
    pub id: ModelId,
    /// Human-readable model name.
    pub name: String,
    /// Publishing organization.
    pub provider: String,
    /// Canonical country name (`"United States"`, never `"USA"`).
    pub origin_country: String,
    /// Canonical openness level.
    pub openness_level: OpennessLevel,
    /// Whether the provider offers in-country data processing.
    pub data_residency: bool,
    /// Free-text compliance tags: passed through for legacy records,
    /// synthesized from status text for new records.
    pub compliance_tags: Vec<String>,
    /// Pre-computed display status per jurisdiction.
    pub compliance: ComplianceSummary,
    /// Supported languages; empty when the source had none.
    #[serde(default)]
    pub languages: Vec<String>,
    /// Editorial task categories; empty when the source had none.
    #[serde(default)]
    pub task_categories: Vec<String>,
    /// Descriptive metadata, present iff the source populated any field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intelligence: Option<ModelIntelligence>,
}

impl CanonicalModel {
    /// Rebuild the rule-evaluation profile for this model.
    ///
    /// The pre-computed summary carries only status strings; callers that
    /// want live issue detail (tooltips, CLI reports) evaluate this
    /// profile directly.
    pub fn profile(&self) -> ModelProfile {
        ModelProfile {
            openness_level: self.openness_level,
            origin_country: self.origin_country.clone(),
            data_residency: self.data_residency,
            compliance_tags: self.compliance_tags.clone(),
        }
    }
}
