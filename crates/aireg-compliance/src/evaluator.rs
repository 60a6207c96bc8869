//! # Compliance Evaluator
//!
//! One rule per jurisdiction, evaluated independently:
//!
//! - **EU** — AI Act Article 53 transparency: closed-weights models must
//!   carry an `"EU AI Act"` documentation tag.
//! - **IN** — DPDP 2025 data residency: in-country processing required.
//! - **US** — 2025 National AI Policy: foreign API-only models are
//!   subject to high-risk reporting.
//!
//! Evaluation is total over the closed [`Jurisdiction`] enum. There is no
//! "unknown jurisdiction" path; that case is unrepresentable because the
//! enum is validated at the parse boundary.

use serde::{Deserialize, Serialize};

use aireg_core::{Jurisdiction, OpennessLevel};

use crate::profile::ModelProfile;

/// Identifier of the hardcoded rule snapshot, stamped into reports.
///
/// Rules reflect the regulatory landscape as of this date; they are not
/// fetched live.
pub const RULESET_SNAPSHOT: &str = "2026-01";

/// A single failed requirement for one jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceIssue {
    /// Short requirement label (e.g., `"EU AI Act Article 53"`). Display
    /// surfaces embed this in the `"Risk (<requirement>)"` status string.
    pub requirement: String,
    /// Human-readable explanation of the gap.
    pub message: String,
}

/// The outcome of evaluating one model against one jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceVerdict {
    /// Failed requirements, ordered EU → IN → US across jurisdictions.
    /// The current snapshot carries one rule per jurisdiction, so a
    /// single-jurisdiction verdict holds at most one issue.
    pub issues: Vec<ComplianceIssue>,
}

impl ComplianceVerdict {
    /// A model is compliant exactly when no requirement failed.
    pub fn is_compliant(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Evaluate a model profile against one jurisdiction's rule.
///
/// Pure and total: no I/O, no side effects, a definite verdict for every
/// input. Callers needing all three jurisdictions invoke this once per
/// [`Jurisdiction::all()`] entry.
pub fn evaluate(profile: &ModelProfile, jurisdiction: Jurisdiction) -> ComplianceVerdict {
    let mut issues = Vec::new();
    let issue = match jurisdiction {
        Jurisdiction::Eu => eu_ai_act_issue(profile),
        Jurisdiction::In => dpdp_issue(profile),
        Jurisdiction::Us => us_policy_issue(profile),
    };
    if let Some(issue) = issue {
        issues.push(issue);
    }
    ComplianceVerdict { issues }
}

/// EU AI Act Article 53: transparency documentation for closed weights.
///
/// Open-weight models satisfy Article 53 by publication. Everything else
/// needs a tag containing `"EU AI Act"` (exact substring, case-sensitive;
/// registry tags are controlled vocabulary, not free prose).
fn eu_ai_act_issue(profile: &ModelProfile) -> Option<ComplianceIssue> {
    let has_art53_docs = profile
        .compliance_tags
        .iter()
        .any(|tag| tag.contains("EU AI Act"));
    if profile.openness_level != OpennessLevel::OpenWeights && !has_art53_docs {
        Some(ComplianceIssue {
            requirement: "EU AI Act Article 53".to_string(),
            message: "Missing Art 53 Transparency documentation (Required by Aug 2026)."
                .to_string(),
        })
    } else {
        None
    }
}

/// India DPDP 2025: sectoral data-residency mandate.
fn dpdp_issue(profile: &ModelProfile) -> Option<ComplianceIssue> {
    if !profile.data_residency {
        Some(ComplianceIssue {
            requirement: "DPDP 2025".to_string(),
            message: "Non-resident processing: Potential violation of DPDP 2025 sectoral mandates."
                .to_string(),
        })
    } else {
        None
    }
}

/// US 2025 National AI Policy: high-risk reporting for foreign API-only
/// models.
fn us_policy_issue(profile: &ModelProfile) -> Option<ComplianceIssue> {
    let origin = normalize_origin(&profile.origin_country);
    if origin != "USA" && profile.openness_level == OpennessLevel::Api {
        Some(ComplianceIssue {
            requirement: "2025 National AI Policy".to_string(),
            message: "Subject to high-risk reporting under 2025 National AI Policy.".to_string(),
        })
    } else {
        None
    }
}

/// Collapse the canonical country name onto the short code the US rule
/// compares against. Registry data carries `"United States"` after
/// normalization and `"USA"` in newer raw records; both mean domestic.
fn normalize_origin(origin: &str) -> &str {
    if origin == "United States" {
        "USA"
    } else {
        origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn profile(
        openness_level: OpennessLevel,
        origin_country: &str,
        data_residency: bool,
        tags: &[&str],
    ) -> ModelProfile {
        ModelProfile {
            openness_level,
            origin_country: origin_country.to_string(),
            data_residency,
            compliance_tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn eu_api_without_tags_fails_article_53() {
        let p = profile(OpennessLevel::Api, "United States", true, &[]);
        let verdict = evaluate(&p, Jurisdiction::Eu);
        assert!(!verdict.is_compliant());
        assert_eq!(verdict.issues.len(), 1);
        assert_eq!(verdict.issues[0].requirement, "EU AI Act Article 53");
        assert!(verdict.issues[0].message.contains("Art 53"));
    }

    #[test]
    fn eu_api_with_matching_tag_is_compliant() {
        let p = profile(OpennessLevel::Api, "United States", true, &["EU AI Act Ready"]);
        assert!(evaluate(&p, Jurisdiction::Eu).is_compliant());
    }

    #[test]
    fn eu_tag_match_is_substring() {
        // "EU AI Act" embedded anywhere in a tag satisfies the rule.
        let p = profile(
            OpennessLevel::Api,
            "France",
            true,
            &["Certified: EU AI Act Art 53 docs on file"],
        );
        assert!(evaluate(&p, Jurisdiction::Eu).is_compliant());
    }

    #[test]
    fn eu_tag_match_is_case_sensitive() {
        let p = profile(OpennessLevel::Api, "France", true, &["eu ai act ready"]);
        let verdict = evaluate(&p, Jurisdiction::Eu);
        assert!(!verdict.is_compliant(), "lowercase tag must not satisfy Article 53");
    }

    #[test]
    fn eu_open_weights_compliant_without_tags() {
        let p = profile(OpennessLevel::OpenWeights, "China", false, &[]);
        assert!(evaluate(&p, Jurisdiction::Eu).is_compliant());
    }

    #[test]
    fn in_without_residency_fails_dpdp() {
        let p = profile(OpennessLevel::OpenWeights, "United States", false, &[]);
        let verdict = evaluate(&p, Jurisdiction::In);
        assert_eq!(verdict.issues.len(), 1);
        assert_eq!(verdict.issues[0].requirement, "DPDP 2025");
    }

    #[test]
    fn in_with_residency_is_compliant() {
        let p = profile(OpennessLevel::Api, "Germany", true, &[]);
        assert!(evaluate(&p, Jurisdiction::In).is_compliant());
    }

    #[test]
    fn us_foreign_api_model_fails_policy() {
        let p = profile(OpennessLevel::Api, "Germany", true, &[]);
        let verdict = evaluate(&p, Jurisdiction::Us);
        assert_eq!(verdict.issues.len(), 1);
        assert_eq!(verdict.issues[0].requirement, "2025 National AI Policy");
    }

    #[test]
    fn us_domestic_api_model_is_compliant() {
        // "United States" normalizes to "USA" before the comparison.
        let p = profile(OpennessLevel::Api, "United States", true, &[]);
        assert!(evaluate(&p, Jurisdiction::Us).is_compliant());
    }

    #[test]
    fn us_short_code_origin_is_domestic() {
        let p = profile(OpennessLevel::Api, "USA", true, &[]);
        assert!(evaluate(&p, Jurisdiction::Us).is_compliant());
    }

    #[test]
    fn us_foreign_open_weights_is_compliant() {
        let p = profile(OpennessLevel::OpenWeights, "Germany", true, &[]);
        assert!(evaluate(&p, Jurisdiction::Us).is_compliant());
    }

    #[test]
    fn rules_are_independent_across_jurisdictions() {
        // Fails everywhere: closed weights, no tags, no residency, foreign.
        let p = profile(OpennessLevel::Api, "China", false, &[]);
        for jurisdiction in Jurisdiction::all() {
            let verdict = evaluate(&p, *jurisdiction);
            assert_eq!(
                verdict.issues.len(),
                1,
                "expected exactly one issue for {jurisdiction}"
            );
        }
    }

    #[test]
    fn verdict_serde_roundtrip() {
        let p = profile(OpennessLevel::Api, "China", false, &[]);
        let verdict = evaluate(&p, Jurisdiction::Eu);
        let json = serde_json::to_string(&verdict).unwrap();
        let deser: ComplianceVerdict = serde_json::from_str(&json).unwrap();
        assert_eq!(verdict, deser);
    }

    fn arb_openness() -> impl Strategy<Value = OpennessLevel> {
        prop_oneof![Just(OpennessLevel::OpenWeights), Just(OpennessLevel::Api)]
    }

    fn arb_jurisdiction() -> impl Strategy<Value = Jurisdiction> {
        prop_oneof![
            Just(Jurisdiction::Eu),
            Just(Jurisdiction::In),
            Just(Jurisdiction::Us),
        ]
    }

    fn arb_profile() -> impl Strategy<Value = ModelProfile> {
        (
            arb_openness(),
            "\\PC{0,40}",
            any::<bool>(),
            proptest::collection::vec("\\PC{0,40}", 0..4),
        )
            .prop_map(|(openness_level, origin_country, data_residency, compliance_tags)| {
                ModelProfile {
                    openness_level,
                    origin_country,
                    data_residency,
                    compliance_tags,
                }
            })
    }

    proptest! {
        #[test]
        fn evaluate_is_total_with_at_most_one_issue(
            p in arb_profile(),
            j in arb_jurisdiction(),
        ) {
            let verdict = evaluate(&p, j);
            prop_assert!(verdict.issues.len() <= 1);
            prop_assert_eq!(verdict.is_compliant(), verdict.issues.is_empty());
        }

        #[test]
        fn evaluate_is_deterministic(p in arb_profile(), j in arb_jurisdiction()) {
            prop_assert_eq!(evaluate(&p, j), evaluate(&p, j));
        }

        #[test]
        fn open_weights_always_passes_eu(
            origin in "\\PC{0,40}",
            residency in any::<bool>(),
        ) {
            let p = ModelProfile {
                openness_level: OpennessLevel::OpenWeights,
                origin_country: origin,
                data_residency: residency,
                compliance_tags: vec![],
            };
            prop_assert!(evaluate(&p, Jurisdiction::Eu).is_compliant());
        }

        #[test]
        fn residency_always_passes_in(p in arb_profile()) {
            let p = ModelProfile { data_residency: true, ..p };
            prop_assert!(evaluate(&p, Jurisdiction::In).is_compliant());
        }
    }
}
