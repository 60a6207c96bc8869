//! # Registry Normalization
//!
//! Maps both raw record generations onto the canonical model shape.
//!
//! - Legacy records carry canonical sovereignty fields already; their
//!   compliance summary is COMPUTED — one evaluator call per
//!   jurisdiction, rendered as `"Compliant"` or `"Risk (<requirement>)"`.
//! - New records carry hand-maintained status text; that text passes
//!   through VERBATIM (never re-evaluated), and their tags are
//!   synthesized from it by case-insensitive substring matching.
//!
//! Normalization is order- and cardinality-preserving and referentially
//! transparent: same input, same output, no hidden state.

use aireg_compliance::{evaluate, ModelProfile};
use aireg_core::{Jurisdiction, OpennessLevel};

use crate::canonical::{CanonicalModel, ComplianceSummary, STATUS_PLACEHOLDER};
use crate::raw::{LegacyRecord, NewRecord, RawModelRecord};

/// Normalize an ordered batch of raw records.
///
/// One canonical model per raw record, input order preserved. No
/// filtering and no dedup happen here; registry-level invariants such as
/// id uniqueness are the loader's job.
pub fn normalize_records(records: &[RawModelRecord]) -> Vec<CanonicalModel> {
    tracing::debug!(records = records.len(), "normalizing registry records");
    records.iter().map(normalize_record).collect()
}

/// Normalize a single raw record.
pub fn normalize_record(record: &RawModelRecord) -> CanonicalModel {
    match record {
        RawModelRecord::Legacy(legacy) => normalize_legacy(legacy),
        RawModelRecord::New(rec) => normalize_new(rec),
    }
}

/// Render one jurisdiction's display status from a live evaluation.
fn evaluated_status(profile: &ModelProfile, jurisdiction: Jurisdiction) -> String {
    let verdict = evaluate(profile, jurisdiction);
    if verdict.is_compliant() {
        "Compliant".to_string()
    } else {
        let requirement = verdict
            .issues
            .first()
            .map(|issue| issue.requirement.as_str())
            .unwrap_or("Risk");
        format!("Risk ({requirement})")
    }
}

fn normalize_legacy(record: &LegacyRecord) -> CanonicalModel {
    let profile = ModelProfile {
        openness_level: record.openness_level,
        origin_country: record.origin_country.clone(),
        data_residency: record.data_residency,
        compliance_tags: record.compliance_tags.clone(),
    };
    let compliance = ComplianceSummary {
        eu: evaluated_status(&profile, Jurisdiction::Eu),
        india: evaluated_status(&profile, Jurisdiction::In),
        us: evaluated_status(&profile, Jurisdiction::Us),
    };
    CanonicalModel {
        id: record.id.clone(),
        name: record.name.clone(),
        provider: record.provider.clone(),
        origin_country: record.origin_country.clone(),
        openness_level: record.openness_level,
        data_residency: record.data_residency,
        compliance_tags: record.compliance_tags.clone(),
        compliance,
        languages: record.languages.clone().unwrap_or_default(),
        task_categories: record.task_categories.clone().unwrap_or_default(),
        intelligence: record
            .intelligence
            .is_populated()
            .then(|| record.intelligence.clone()),
    }
}

fn normalize_new(record: &NewRecord) -> CanonicalModel {
    if record.compliance.is_empty() {
        tracing::warn!(model = %record.id, "new-shape record carries no compliance statuses");
    }

    let openness_level = if record.openness == "Fully Open" {
        OpennessLevel::OpenWeights
    } else {
        OpennessLevel::Api
    };
    let origin_country = canonical_origin(&record.origin);

    let eu = record
        .compliance
        .eu_ai_act
        .clone()
        .unwrap_or_else(|| STATUS_PLACEHOLDER.to_string());
    let india = record
        .compliance
        .india_dpdp
        .clone()
        .unwrap_or_else(|| STATUS_PLACEHOLDER.to_string());
    let us = record
        .compliance
        .us_executive_order
        .clone()
        .unwrap_or_else(|| STATUS_PLACEHOLDER.to_string());

    let compliance_tags = synthesize_tags(&eu, &india, &us);

    CanonicalModel {
        id: record.id.clone(),
        name: record.name.clone(),
        provider: record.provider.clone(),
        origin_country,
        openness_level,
        data_residency: record.data_residency,
        compliance_tags,
        compliance: ComplianceSummary { eu, india, us },
        languages: record.languages.clone().unwrap_or_default(),
        task_categories: record.task_categories.clone().unwrap_or_default(),
        intelligence: record
            .intelligence
            .is_populated()
            .then(|| record.intelligence.clone()),
    }
}

/// Map the new-shape origin code onto the canonical country name.
/// Only `"USA"` has a canonical expansion; everything else passes
/// through unchanged.
fn canonical_origin(origin: &str) -> String {
    if origin == "USA" {
        "United States".to_string()
    } else {
        origin.to_string()
    }
}

/// Synthesize display tags from new-shape status text.
///
/// Matching is case-insensitive substring containment, so hand-written
/// variants like `"compliant (self-assessed)"` still register. The
/// placeholder `"—"` matches nothing.
fn synthesize_tags(eu: &str, india: &str, us: &str) -> Vec<String> {
    let mut tags = Vec::new();
    let eu = eu.to_lowercase();
    let india = india.to_lowercase();
    let us = us.to_lowercase();
    if eu.contains("compliant") || eu.contains("partial") {
        tags.push("EU AI Act Ready".to_string());
    }
    if india.contains("ready") || india.contains("compliant") {
        tags.push("India Data Localization".to_string());
    }
    if us.contains("certified") || us.contains("exempt") {
        tags.push("US Executive Order Ready".to_string());
    }
    tags
}
