//! veridyx-framework — Adaptive assessment framework.
//!
//! Derives field/type-adaptive scoring weights and assessment guidance for a
//! (document type, academic field) pair. Pure lookup/compute: the tables are
//! static, nothing is persisted, and guidelines are recomputed per request.

pub mod guidance;
pub mod weights;

pub use weights::{weights_for, FrameworkWeights};

use serde::{Deserialize, Serialize};
use veridyx_classify::{AcademicField, DocumentType};

/// Assessment guidance derived purely from (document type, field).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameworkGuidelines {
    pub document_type: DocumentType,
    pub field: AcademicField,
    pub weights: FrameworkWeights,
    pub bias_priorities: Vec<String>,
    pub assessment_focus: Vec<String>,
    pub limitations: Vec<String>,
    pub assumptions: Vec<String>,
}

/// Compute the full guidelines for a classification result. The weight
/// table is keyed by document type with field-specific deltas; the guidance
/// lists are independent lookups on one axis each.
pub fn framework_guidelines(
    document_type: DocumentType,
    field: AcademicField,
) -> FrameworkGuidelines {
    FrameworkGuidelines {
        document_type,
        field,
        weights: weights_for(document_type, field),
        bias_priorities: guidance::bias_priorities(field),
        assessment_focus: guidance::assessment_focus(document_type),
        limitations: guidance::typical_limitations(document_type),
        assumptions: guidance::common_assumptions(field),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guidelines_are_complete_for_every_pair() {
        for doc_type in DocumentType::ALL {
            for field in AcademicField::ALL {
                let g = framework_guidelines(doc_type, field);
                assert!(!g.bias_priorities.is_empty());
                assert!(!g.assessment_focus.is_empty());
                assert!(!g.limitations.is_empty());
                assert!(!g.assumptions.is_empty());
                assert!(g.weights.total() <= 10.0 + 1e-9);
            }
        }
    }

    #[test]
    fn test_guidelines_are_stateless() {
        let a = framework_guidelines(DocumentType::Article, AcademicField::Medical);
        let b = framework_guidelines(DocumentType::Article, AcademicField::Medical);
        assert_eq!(a.weights.total(), b.weights.total());
        assert_eq!(a.bias_priorities, b.bias_priorities);
    }
}
