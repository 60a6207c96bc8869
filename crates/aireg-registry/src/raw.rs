//! # Raw Registry Records
//!
//! The two generations of the registry data schema, as they appear in
//! the data file, and the sum type that discriminates them.
//!
//! ## Discrimination Invariant
//!
//! The data carries no version tag. A record is legacy-shaped iff it has
//! BOTH the `origin_country` and `openness_level` keys; anything else is
//! new-shaped. The decision is made ONCE, in [`RawModelRecord`]'s
//! `Deserialize` impl, and is irreversible from then on — downstream
//! code matches exhaustively on the variant and never probes keys again.

use serde::{Deserialize, Serialize};

use aireg_core::{ModelId, OpennessLevel};

use crate::intelligence::ModelIntelligence;

/// A legacy-generation registry record.
///
/// Legacy records carry canonical sovereignty fields directly
/// (`origin_country`, `openness_level`, `compliance_tags`); their
/// compliance summary is COMPUTED by the evaluator during normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyRecord {
    /// Model identifier slug, unique within a registry.
    pub id: ModelId,
    /// Human-readable model name.
    pub name: String,
    /// Publishing organization.
    pub provider: String,
    /// Free-text country name (e.g., `"United States"`, `"France"`).
    pub origin_country: String,
    /// Canonical openness level, strict wire strings.
    pub openness_level: OpennessLevel,
    /// Whether the provider offers in-country data processing.
    pub data_residency: bool,
    /// Free-text compliance tags; passed through to the canonical model.
    #[serde(default)]
    pub compliance_tags: Vec<String>,
    /// Supported languages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    /// Editorial task categories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_categories: Option<Vec<String>>,
    /// Optional descriptive metadata, flattened at the record's top level.
    #[serde(flatten)]
    pub intelligence: ModelIntelligence,
}

/// Per-jurisdiction status strings of a new-generation record.
///
/// Free-text statuses maintained by hand in the data file (e.g.,
/// `"Compliant"`, `"Partial"`, `"Certified (FedRAMP)"`). Absent entries
/// normalize to the `"—"` placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawComplianceStatuses {
    /// EU AI Act status text.
    #[serde(rename = "EU_AI_Act", default, skip_serializing_if = "Option::is_none")]
    pub eu_ai_act: Option<String>,
    /// India DPDP status text.
    #[serde(rename = "India_DPDP", default, skip_serializing_if = "Option::is_none")]
    pub india_dpdp: Option<String>,
    /// US Executive Order status text.
    #[serde(
        rename = "US_Executive_Order",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub us_executive_order: Option<String>,
}

impl RawComplianceStatuses {
    /// True when no jurisdiction carries a status.
    pub fn is_empty(&self) -> bool {
        self.eu_ai_act.is_none() && self.india_dpdp.is_none() && self.us_executive_order.is_none()
    }
}

/// A new-generation registry record.
///
/// New records carry free-text `origin` / `openness` plus hand-maintained
/// per-jurisdiction status text; the normalizer maps the former onto the
/// canonical vocabulary and passes the latter through VERBATIM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecord {
    /// Model identifier slug, unique within a registry.
    pub id: ModelId,
    /// Human-readable model name.
    pub name: String,
    /// Publishing organization.
    pub provider: String,
    /// Enum-like origin string (e.g., `"USA"`, `"France"`).
    pub origin: String,
    /// Free-text openness description (e.g., `"Fully Open"`, `"Hosted"`).
    pub openness: String,
    /// Hand-maintained per-jurisdiction status text.
    #[serde(default)]
    pub compliance: RawComplianceStatuses,
    /// Whether the provider offers in-country data processing.
    pub data_residency: bool,
    /// Supported languages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    /// Editorial task categories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_categories: Option<Vec<String>>,
    /// Optional descriptive metadata, flattened at the record's top level.
    #[serde(flatten)]
    pub intelligence: ModelIntelligence,
}

/// A raw registry record, discriminated at parse time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawModelRecord {
    /// Legacy generation: canonical sovereignty fields, computed statuses.
    Legacy(LegacyRecord),
    /// New generation: free-text sovereignty fields, verbatim statuses.
    New(NewRecord),
}

impl RawModelRecord {
    /// The record's model identifier, regardless of shape.
    pub fn id(&self) -> &ModelId {
        match self {
            Self::Legacy(record) => &record.id,
            Self::New(record) => &record.id,
        }
    }

    /// True for legacy-generation records.
    pub fn is_legacy(&self) -> bool {
        matches!(self, Self::Legacy(_))
    }
}

impl<'de> Deserialize<'de> for RawModelRecord {
    /// Probe the raw object once for the legacy key pair, then parse the
    /// matching variant strictly. A record that matches neither shape's
    /// required fields is a hard deserialization error, never a partial
    /// record.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let is_legacy = value
            .as_object()
            .map(|obj| obj.contains_key("origin_country") && obj.contains_key("openness_level"))
            .unwrap_or(false);
        if is_legacy {
            LegacyRecord::deserialize(value)
                .map(Self::Legacy)
                .map_err(serde::de::Error::custom)
        } else {
            NewRecord::deserialize(value)
                .map(Self::New)
                .map_err(serde::de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy_json() -> &'static str {
        r#"{
            "id": "mistral-7b",
            "name": "Mistral 7B",
            "provider": "Mistral AI",
            "origin_country": "France",
            "openness_level": "Open Weights",
            "data_residency": true,
            "compliance_tags": ["EU AI Act Ready"],
            "languages": ["en", "fr"],
            "context_window": 32768
        }"#
    }

    fn new_json() -> &'static str {
        r#"{
            "id": "gpt-oss",
            "name": "GPT-OSS",
            "provider": "OpenAI",
            "origin": "USA",
            "openness": "Fully Open",
            "compliance": {
                "EU_AI_Act": "Partial",
                "US_Executive_Order": "Certified"
            },
            "data_residency": false
        }"#
    }

    #[test]
    fn legacy_key_pair_selects_legacy_variant() {
        let record: RawModelRecord = serde_json::from_str(legacy_json()).unwrap();
        assert!(record.is_legacy());
        match record {
            RawModelRecord::Legacy(legacy) => {
                assert_eq!(legacy.id.as_str(), "mistral-7b");
                assert_eq!(legacy.openness_level, OpennessLevel::OpenWeights);
                assert_eq!(legacy.intelligence.context_window, Some(32_768));
            }
            RawModelRecord::New(_) => unreachable!(),
        }
    }

    #[test]
    fn missing_legacy_keys_selects_new_variant() {
        let record: RawModelRecord = serde_json::from_str(new_json()).unwrap();
        assert!(!record.is_legacy());
        match record {
            RawModelRecord::New(rec) => {
                assert_eq!(rec.origin, "USA");
                assert_eq!(rec.openness, "Fully Open");
                assert_eq!(rec.compliance.eu_ai_act.as_deref(), Some("Partial"));
                assert_eq!(rec.compliance.india_dpdp, None);
            }
            RawModelRecord::Legacy(_) => unreachable!(),
        }
    }

    #[test]
    fn one_legacy_key_is_not_enough() {
        // Has origin_country but not openness_level, so it is NOT legacy
        // and must satisfy the new shape's required fields — which it
        // does not. Hard error, not a partial record.
        let ambiguous = r#"{
            "id": "x",
            "name": "X",
            "provider": "Y",
            "origin_country": "Germany",
            "data_residency": true
        }"#;
        assert!(serde_json::from_str::<RawModelRecord>(ambiguous).is_err());
    }

    #[test]
    fn legacy_missing_identity_field_is_an_error() {
        let missing_provider = r#"{
            "id": "x",
            "name": "X",
            "origin_country": "Germany",
            "openness_level": "API",
            "data_residency": true
        }"#;
        let err = serde_json::from_str::<RawModelRecord>(missing_provider).unwrap_err();
        assert!(err.to_string().contains("provider"), "unexpected error: {err}");
    }

    #[test]
    fn legacy_unknown_openness_wire_value_is_an_error() {
        let bad = r#"{
            "id": "x",
            "name": "X",
            "provider": "Y",
            "origin_country": "Germany",
            "openness_level": "Fully Open",
            "data_residency": true
        }"#;
        assert!(serde_json::from_str::<RawModelRecord>(bad).is_err());
    }

    #[test]
    fn new_record_compliance_map_defaults_to_empty() {
        let no_map = r#"{
            "id": "x",
            "name": "X",
            "provider": "Y",
            "origin": "France",
            "openness": "Hosted",
            "data_residency": true
        }"#;
        let record: RawModelRecord = serde_json::from_str(no_map).unwrap();
        match record {
            RawModelRecord::New(rec) => assert!(rec.compliance.is_empty()),
            RawModelRecord::Legacy(_) => unreachable!(),
        }
    }

    #[test]
    fn empty_id_is_rejected_in_either_shape() {
        let blank_id = r#"{
            "id": "  ",
            "name": "X",
            "provider": "Y",
            "origin_country": "Germany",
            "openness_level": "API",
            "data_residency": true
        }"#;
        assert!(serde_json::from_str::<RawModelRecord>(blank_id).is_err());
    }

    #[test]
    fn non_object_record_is_an_error() {
        assert!(serde_json::from_str::<RawModelRecord>("42").is_err());
        assert!(serde_json::from_str::<RawModelRecord>("\"mistral-7b\"").is_err());
    }

    #[test]
    fn untagged_serialization_matches_source_layout() {
        let record: RawModelRecord = serde_json::from_str(new_json()).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        // No enum tag appears on the wire.
        assert!(json.get("New").is_none());
        assert_eq!(json["origin"], "USA");
    }

    #[test]
    fn both_shapes_roundtrip_through_serde() {
        for source in [legacy_json(), new_json()] {
            let record: RawModelRecord = serde_json::from_str(source).unwrap();
            let json = serde_json::to_string(&record).unwrap();
            let reparsed: RawModelRecord = serde_json::from_str(&json).unwrap();
            assert_eq!(record, reparsed);
        }
    }
}
