//! # Compliance Reports
//!
//! Timestamped wrapper around a live evaluation, for CLI output and any
//! caller that wants issue detail rather than the pre-computed status
//! string. The report records when the check ran and which rule snapshot
//! produced it, so a stored report stays interpretable after the snapshot
//! moves on.

use serde::{Deserialize, Serialize};

use aireg_core::{Jurisdiction, ModelId};

use crate::evaluator::{evaluate, ComplianceIssue, RULESET_SNAPSHOT};
use crate::profile::ModelProfile;

/// Result of one live compliance check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceReport {
    /// The model that was checked.
    pub model_id: ModelId,
    /// The jurisdiction whose rule was applied.
    pub jurisdiction: Jurisdiction,
    /// True when no requirement failed.
    pub compliant: bool,
    /// Failed requirements with human-readable detail.
    pub issues: Vec<ComplianceIssue>,
    /// Identifier of the rule snapshot that produced this report.
    pub ruleset_snapshot: String,
    /// RFC 3339 timestamp of when the check ran.
    pub checked_at: String,
}

impl ComplianceReport {
    /// Run the evaluator and stamp the result.
    pub fn generate(
        model_id: ModelId,
        profile: &ModelProfile,
        jurisdiction: Jurisdiction,
    ) -> Self {
        let verdict = evaluate(profile, jurisdiction);
        tracing::debug!(
            model = %model_id,
            jurisdiction = %jurisdiction,
            compliant = verdict.is_compliant(),
            "compliance check"
        );
        Self {
            model_id,
            jurisdiction,
            compliant: verdict.is_compliant(),
            issues: verdict.issues,
            ruleset_snapshot: RULESET_SNAPSHOT.to_string(),
            checked_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
