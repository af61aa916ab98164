//! Score validation against the framework maximums.
//!
//! Invoked once per analysis after the external response is parsed. The raw
//! score is capped to the framework's maximum weight (overflow is logged,
//! not rejected) and the rating is recomputed from the percentage. A
//! missing top-level total is the one hard error: no safe default exists.

use tracing::{instrument, warn};

use veridyx_common::VeridyxError;
use veridyx_framework::FrameworkGuidelines;

use crate::credibility::{CredibilityScore, RawCredibility};
use crate::rating::rating_for_percentage;

/// Validate and freeze a raw credibility object.
///
/// Steps, in order: compute the maximum weight from the framework, require
/// a present `total_score` (zero counts as present), clamp overflow, attach
/// `max_total_score`, recompute the rating from the percentage.
#[instrument(skip(raw, framework), fields(doc_type = framework.document_type.as_str()))]
pub fn validate_credibility(
    raw: RawCredibility,
    framework: &FrameworkGuidelines,
) -> Result<CredibilityScore, VeridyxError> {
    let max_weight = framework.weights.total();

    let mut total_score = raw.total_score.ok_or_else(|| {
        VeridyxError::InvalidAssessment("missing credibility totalScore".to_string())
    })?;

    if total_score > max_weight {
        warn!(
            total_score = format!("{:.2}", total_score),
            max_weight = format!("{:.2}", max_weight),
            "Credibility score exceeds maximum weight, capping"
        );
        total_score = max_weight;
    }

    let components = [
        &raw.methodological_rigor,
        &raw.data_transparency,
        &raw.source_quality,
        &raw.author_credibility,
        &raw.statistical_validity,
        &raw.logical_consistency,
    ];
    let overall_confidence = raw.overall_confidence.unwrap_or_else(|| {
        let present: Vec<f64> = components
            .iter()
            .filter_map(|c| c.as_ref().map(|c| c.confidence))
            .collect();
        if present.is_empty() {
            0.0
        } else {
            present.iter().sum::<f64>() / present.len() as f64
        }
    });

    let percentage = if max_weight > 0.0 {
        (total_score / max_weight) * 100.0
    } else {
        0.0
    };

    Ok(CredibilityScore {
        methodological_rigor: raw.methodological_rigor.unwrap_or_default(),
        data_transparency: raw.data_transparency.unwrap_or_default(),
        source_quality: raw.source_quality.unwrap_or_default(),
        author_credibility: raw.author_credibility.unwrap_or_default(),
        statistical_validity: raw.statistical_validity.unwrap_or_default(),
        logical_consistency: raw.logical_consistency.unwrap_or_default(),
        total_score,
        max_total_score: max_weight,
        rating: rating_for_percentage(percentage),
        overall_confidence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credibility::{CredibilityComponent, Rating};
    use veridyx_classify::{AcademicField, DocumentType};
    use veridyx_framework::{framework_guidelines, FrameworkWeights};

    /// A framework with every component at its maximum, so the weight
    /// total is exactly 10.0 and the rating boundaries land on round
    /// percentages.
    fn max_framework() -> FrameworkGuidelines {
        let mut framework =
            framework_guidelines(DocumentType::Unknown, AcademicField::Interdisciplinary);
        framework.weights = FrameworkWeights {
            methodological_rigor: 2.5,
            data_transparency: 2.0,
            source_quality: 1.5,
            author_credibility: 1.5,
            statistical_validity: 1.5,
            logical_consistency: 1.0,
        };
        framework
    }

    fn raw_with_total(total: f64) -> RawCredibility {
        RawCredibility {
            total_score: Some(total),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_total_score_is_hard_error() {
        let err = validate_credibility(RawCredibility::default(), &max_framework()).unwrap_err();
        assert!(matches!(err, VeridyxError::InvalidAssessment(_)));
    }

    #[test]
    fn test_zero_total_score_is_valid_and_invalid_rated() {
        let score = validate_credibility(raw_with_total(0.0), &max_framework()).unwrap();
        assert_eq!(score.total_score, 0.0);
        assert_eq!(score.rating, Rating::Invalid);
    }

    #[test]
    fn test_overflow_is_capped_never_rejected() {
        let framework = max_framework();
        let score = validate_credibility(raw_with_total(42.0), &framework).unwrap();
        assert!((score.total_score - framework.weights.total()).abs() < 1e-9);
        assert!(score.total_score <= score.max_total_score);
        assert_eq!(score.rating, Rating::Exemplary);
    }

    #[test]
    fn test_rating_boundaries_at_max_ten() {
        let framework = max_framework();
        assert_eq!(
            validate_credibility(raw_with_total(9.5), &framework).unwrap().rating,
            Rating::Exemplary
        );
        assert_eq!(
            validate_credibility(raw_with_total(7.5), &framework).unwrap().rating,
            Rating::Strong
        );
        assert_eq!(
            validate_credibility(raw_with_total(5.4), &framework).unwrap().rating,
            Rating::Weak
        );
        assert_eq!(
            validate_credibility(raw_with_total(0.01), &framework).unwrap().rating,
            Rating::VeryPoor
        );
    }

    #[test]
    fn test_max_total_score_mirrors_framework() {
        let framework = framework_guidelines(DocumentType::Essay, AcademicField::Humanities);
        let score = validate_credibility(raw_with_total(3.0), &framework).unwrap();
        assert!((score.max_total_score - framework.weights.total()).abs() < 1e-9);
    }

    #[test]
    fn test_overall_confidence_averages_components() {
        let raw = RawCredibility {
            total_score: Some(5.0),
            methodological_rigor: Some(CredibilityComponent {
                confidence: 80.0,
                ..Default::default()
            }),
            data_transparency: Some(CredibilityComponent {
                confidence: 60.0,
                ..Default::default()
            }),
            ..Default::default()
        };
        let score = validate_credibility(raw, &max_framework()).unwrap();
        assert!((score.overall_confidence - 70.0).abs() < 1e-9);
    }
}
