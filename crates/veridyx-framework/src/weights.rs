//! The six-component weight vector and its derivation.
//!
//! Base weights are a fixed table keyed by document type. Field-specific
//! deltas are sparse patches added on top, then every component is capped
//! to its fixed maximum. The component maxima sum to exactly 10.0, so a
//! capped total above 10.01 means a table edit broke the invariant.

use serde::{Deserialize, Serialize};
use tracing::warn;

use veridyx_classify::{AcademicField, DocumentType};

/// Per-component maximums, enforced after delta application.
pub const MAX_METHODOLOGICAL_RIGOR: f64 = 2.5;
pub const MAX_DATA_TRANSPARENCY: f64 = 2.0;
pub const MAX_SOURCE_QUALITY: f64 = 1.5;
pub const MAX_AUTHOR_CREDIBILITY: f64 = 1.5;
pub const MAX_STATISTICAL_VALIDITY: f64 = 1.5;
pub const MAX_LOGICAL_CONSISTENCY: f64 = 1.0;

/// Tolerance above 10.0 before the grand total is flagged.
const TOTAL_TOLERANCE: f64 = 10.01;

/// The six maximum point allocations that bound an assessment's scoring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FrameworkWeights {
    pub methodological_rigor: f64,
    pub data_transparency: f64,
    pub source_quality: f64,
    pub author_credibility: f64,
    pub statistical_validity: f64,
    pub logical_consistency: f64,
}

impl FrameworkWeights {
    pub fn total(&self) -> f64 {
        self.methodological_rigor
            + self.data_transparency
            + self.source_quality
            + self.author_credibility
            + self.statistical_validity
            + self.logical_consistency
    }

    pub fn as_array(&self) -> [f64; 6] {
        [
            self.methodological_rigor,
            self.data_transparency,
            self.source_quality,
            self.author_credibility,
            self.statistical_validity,
            self.logical_consistency,
        ]
    }
}

/// A sparse field adjustment; unnamed components stay untouched.
#[derive(Debug, Clone, Copy, Default)]
struct WeightDelta {
    methodological_rigor: f64,
    data_transparency: f64,
    source_quality: f64,
    author_credibility: f64,
    statistical_validity: f64,
    logical_consistency: f64,
}

/// Base weights per document type, before field deltas and capping. Some
/// rows deliberately over-allocate a component (review source quality,
/// essay author credibility) and rely on the cap to bound it.
fn base_weights(doc_type: DocumentType) -> FrameworkWeights {
    match doc_type {
        DocumentType::Article => FrameworkWeights {
            methodological_rigor: 2.5,
            data_transparency:    2.0,
            source_quality:       1.5,
            author_credibility:   1.0,
            statistical_validity: 1.5,
            logical_consistency:  0.5,
        },
        DocumentType::Review => FrameworkWeights {
            methodological_rigor: 1.0,
            data_transparency:    1.5,
            source_quality:       2.5,
            author_credibility:   1.5,
            statistical_validity: 0.5,
            logical_consistency:  1.5,
        },
        DocumentType::Book => FrameworkWeights {
            methodological_rigor: 1.5,
            data_transparency:    1.5,
            source_quality:       2.0,
            author_credibility:   2.0,
            statistical_validity: 0.5,
            logical_consistency:  1.0,
        },
        DocumentType::Dissertation => FrameworkWeights {
            methodological_rigor: 2.5,
            data_transparency:    2.0,
            source_quality:       1.5,
            author_credibility:   0.5,
            statistical_validity: 1.5,
            logical_consistency:  1.0,
        },
        DocumentType::Proposal => FrameworkWeights {
            methodological_rigor: 2.0,
            data_transparency:    1.5,
            source_quality:       1.5,
            author_credibility:   1.0,
            statistical_validity: 0.5,
            logical_consistency:  1.5,
        },
        DocumentType::CaseStudy => FrameworkWeights {
            methodological_rigor: 1.5,
            data_transparency:    2.0,
            source_quality:       1.5,
            author_credibility:   1.0,
            statistical_validity: 1.0,
            logical_consistency:  1.5,
        },
        DocumentType::Essay => FrameworkWeights {
            methodological_rigor: 0.5,
            data_transparency:    1.0,
            source_quality:       2.0,
            author_credibility:   2.0,
            statistical_validity: 0.5,
            logical_consistency:  1.0,
        },
        DocumentType::Theoretical => FrameworkWeights {
            methodological_rigor: 0.5,
            data_transparency:    1.0,
            source_quality:       1.5,
            author_credibility:   1.5,
            statistical_validity: 0.5,
            logical_consistency:  1.0,
        },
        DocumentType::Preprint => FrameworkWeights {
            methodological_rigor: 2.0,
            data_transparency:    1.5,
            source_quality:       1.0,
            author_credibility:   1.0,
            statistical_validity: 1.5,
            logical_consistency:  1.0,
        },
        DocumentType::Conference => FrameworkWeights {
            methodological_rigor: 2.0,
            data_transparency:    1.5,
            source_quality:       1.5,
            author_credibility:   0.8,
            statistical_validity: 1.3,
            logical_consistency:  1.0,
        },
        DocumentType::Unknown => FrameworkWeights {
            methodological_rigor: 1.5,
            data_transparency:    1.5,
            source_quality:       1.5,
            author_credibility:   1.5,
            statistical_validity: 1.0,
            logical_consistency:  1.0,
        },
    }
}

/// Field-specific deltas. The zeroed humanities and formal-sciences
/// logical-consistency entries are deliberate: the natural +0.2/+0.3 values
/// would push review-style rows past the 1.0 component maximum.
fn field_delta(field: AcademicField) -> WeightDelta {
    match field {
        AcademicField::NaturalSciences => WeightDelta {
            methodological_rigor: 0.3,
            statistical_validity: 0.2,
            ..Default::default()
        },
        AcademicField::Engineering => WeightDelta {
            methodological_rigor: 0.2,
            data_transparency: 0.2,
            ..Default::default()
        },
        AcademicField::Medical => WeightDelta {
            methodological_rigor: 0.3,
            statistical_validity: 0.3,
            ..Default::default()
        },
        AcademicField::Agricultural => WeightDelta {
            methodological_rigor: 0.2,
            statistical_validity: 0.1,
            ..Default::default()
        },
        AcademicField::SocialSciences => WeightDelta {
            methodological_rigor: 0.1,
            logical_consistency: 0.1,
            ..Default::default()
        },
        AcademicField::Humanities => WeightDelta {
            source_quality: 0.2,
            logical_consistency: 0.0,
            ..Default::default()
        },
        AcademicField::FormalSciences => WeightDelta {
            logical_consistency: 0.0,
            statistical_validity: 0.2,
            ..Default::default()
        },
        AcademicField::Interdisciplinary => WeightDelta::default(),
    }
}

/// Compute the adaptive weights for a (type, field) pair: base + delta,
/// capped per component. A post-cap grand total above 10.01 is a table
/// construction defect; it is logged, never corrected.
pub fn weights_for(doc_type: DocumentType, field: AcademicField) -> FrameworkWeights {
    let base = base_weights(doc_type);
    let delta = field_delta(field);

    let weights = FrameworkWeights {
        methodological_rigor: (base.methodological_rigor + delta.methodological_rigor)
            .min(MAX_METHODOLOGICAL_RIGOR),
        data_transparency: (base.data_transparency + delta.data_transparency)
            .min(MAX_DATA_TRANSPARENCY),
        source_quality: (base.source_quality + delta.source_quality).min(MAX_SOURCE_QUALITY),
        author_credibility: (base.author_credibility + delta.author_credibility)
            .min(MAX_AUTHOR_CREDIBILITY),
        statistical_validity: (base.statistical_validity + delta.statistical_validity)
            .min(MAX_STATISTICAL_VALIDITY),
        logical_consistency: (base.logical_consistency + delta.logical_consistency)
            .min(MAX_LOGICAL_CONSISTENCY),
    };

    let total = weights.total();
    if total > TOTAL_TOLERANCE {
        warn!(
            doc_type = doc_type.as_str(),
            field = field.as_str(),
            total = format!("{:.2}", total),
            "Total weights exceed 10.0; this should not occur"
        );
    }

    weights
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_maxima_sum_to_ten() {
        let cap_sum = MAX_METHODOLOGICAL_RIGOR
            + MAX_DATA_TRANSPARENCY
            + MAX_SOURCE_QUALITY
            + MAX_AUTHOR_CREDIBILITY
            + MAX_STATISTICAL_VALIDITY
            + MAX_LOGICAL_CONSISTENCY;
        assert!((cap_sum - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_caps_bind_on_over_allocated_base_rows() {
        // The review row allocates 2.5 to source quality and 1.5 to logical
        // consistency; both must come back capped.
        let w = weights_for(DocumentType::Review, AcademicField::Interdisciplinary);
        assert!((w.source_quality - MAX_SOURCE_QUALITY).abs() < 1e-9);
        assert!((w.logical_consistency - MAX_LOGICAL_CONSISTENCY).abs() < 1e-9);
    }

    #[test]
    fn test_every_pair_respects_caps_and_total() {
        for doc_type in DocumentType::ALL {
            for field in AcademicField::ALL {
                let w = weights_for(doc_type, field);
                assert!(w.methodological_rigor <= MAX_METHODOLOGICAL_RIGOR);
                assert!(w.data_transparency <= MAX_DATA_TRANSPARENCY);
                assert!(w.source_quality <= MAX_SOURCE_QUALITY);
                assert!(w.author_credibility <= MAX_AUTHOR_CREDIBILITY);
                assert!(w.statistical_validity <= MAX_STATISTICAL_VALIDITY);
                assert!(w.logical_consistency <= MAX_LOGICAL_CONSISTENCY);
                assert!(
                    w.total() <= 10.0 + 1e-9,
                    "{}/{} total {}",
                    doc_type.as_str(),
                    field.as_str(),
                    w.total()
                );
                for component in w.as_array() {
                    assert!(component >= 0.0);
                }
            }
        }
    }

    #[test]
    fn test_article_medical_deltas_cap() {
        // Article already sits at the 2.5 rigor maximum; the medical +0.3
        // must cap instead of overflowing.
        let w = weights_for(DocumentType::Article, AcademicField::Medical);
        assert!((w.methodological_rigor - 2.5).abs() < 1e-9);
        assert!((w.statistical_validity - 1.5).abs() < 1e-9);
        assert!(w.total() <= 10.0 + 1e-9);
    }

    #[test]
    fn test_interdisciplinary_is_capped_base() {
        // The empty interdisciplinary delta leaves the base row untouched
        // apart from capping.
        for doc_type in DocumentType::ALL {
            let base = base_weights(doc_type);
            let w = weights_for(doc_type, AcademicField::Interdisciplinary);
            assert_eq!(
                w.as_array(),
                [
                    base.methodological_rigor.min(MAX_METHODOLOGICAL_RIGOR),
                    base.data_transparency.min(MAX_DATA_TRANSPARENCY),
                    base.source_quality.min(MAX_SOURCE_QUALITY),
                    base.author_credibility.min(MAX_AUTHOR_CREDIBILITY),
                    base.statistical_validity.min(MAX_STATISTICAL_VALIDITY),
                    base.logical_consistency.min(MAX_LOGICAL_CONSISTENCY),
                ]
            );
        }
    }

    #[test]
    fn test_preprint_natural_sciences_applies_deltas() {
        // Preprint rigor 2.0 + 0.3 = 2.3, validity 1.5 capped at 1.5.
        let w = weights_for(DocumentType::Preprint, AcademicField::NaturalSciences);
        assert!((w.methodological_rigor - 2.3).abs() < 1e-9);
        assert!((w.statistical_validity - 1.5).abs() < 1e-9);
    }
}
