//! # Comparison Matrix
//!
//! Row-level helpers for side-by-side model comparison. A row is
//! flagged when the selected models disagree on the attribute, which
//! lets a caller highlight exactly the rows worth reading.

use aireg_core::Jurisdiction;

use crate::canonical::CanonicalModel;

/// True when the values disagree.
///
/// A row with fewer than two values has nothing to compare and is
/// never flagged.
pub fn flag_mismatch<T: PartialEq>(values: &[T]) -> bool {
    match values.split_first() {
        Some((first, rest)) if !rest.is_empty() => rest.iter().any(|value| value != first),
        _ => false,
    }
}

/// One jurisdiction's status across the selected models, in order.
pub fn status_row<'a>(
    models: &[&'a CanonicalModel],
    jurisdiction: Jurisdiction,
) -> Vec<&'a str> {
    models
        .iter()
        .map(|model| model.compliance.status(jurisdiction))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use aireg_core::{ModelId, OpennessLevel};

    use crate::canonical::ComplianceSummary;

    fn model(id: &str, eu: &str, india: &str, us: &str) -> CanonicalModel {
        CanonicalModel {
            id: ModelId::new(id).unwrap(),
            name: id.to_string(),
            provider: "Provider".to_string(),
            origin_country: "United States".to_string(),
            openness_level: OpennessLevel::OpenWeights,
            data_residency: true,
            compliance_tags: vec![],
            compliance: ComplianceSummary {
                eu: eu.to_string(),
                india: india.to_string(),
                us: us.to_string(),
            },
            languages: vec![],
            task_categories: vec![],
            intelligence: None,
        }
    }

    #[test]
    fn agreeing_values_are_not_flagged() {
        assert!(!flag_mismatch(&["Compliant", "Compliant", "Compliant"]));
        assert!(!flag_mismatch(&[true, true]));
    }

    #[test]
    fn any_disagreement_flags_the_row() {
        assert!(flag_mismatch(&["Compliant", "Risk (DPDP 2025)"]));
        assert!(flag_mismatch(&["Compliant", "Compliant", "Partial"]));
        assert!(flag_mismatch(&[true, false]));
    }

    #[test]
    fn fewer_than_two_values_never_flag() {
        assert!(!flag_mismatch::<&str>(&[]));
        assert!(!flag_mismatch(&["Compliant"]));
    }

    #[test]
    fn status_row_reads_one_jurisdiction_across_models() {
        let a = model("a", "Compliant", "Compliant", "—");
        let b = model("b", "Partial", "Compliant", "Certified");
        let selected = vec![&a, &b];

        let eu = status_row(&selected, Jurisdiction::Eu);
        assert_eq!(eu, vec!["Compliant", "Partial"]);
        assert!(flag_mismatch(&eu));

        let india = status_row(&selected, Jurisdiction::In);
        assert_eq!(india, vec!["Compliant", "Compliant"]);
        assert!(!flag_mismatch(&india));
    }
}
