//! Final analysis result assembled for the presentation layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use veridyx_acquire::DocumentSource;
use veridyx_assess::CredibilityScore;
use veridyx_classify::{AcademicField, DocumentType};
use veridyx_framework::FrameworkGuidelines;

/// The validated, frozen outcome of one analysis request. The bias,
/// key-findings, perspective, and limitations sections come from the
/// external assessor and pass through unexamined.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutcome {
    pub document_type: DocumentType,
    pub field: AcademicField,
    pub framework: FrameworkGuidelines,
    pub credibility: CredibilityScore,
    pub bias: Value,
    pub key_findings: Value,
    pub perspective: Value,
    pub limitations: Value,
    /// Where the analyzed text came from, when acquisition produced it.
    pub source: Option<DocumentSource>,
    pub timestamp: DateTime<Utc>,
}

/// Substitute limitations object when the assessor omits the section.
pub fn default_limitations() -> Value {
    json!({
        "unverifiableClaims": [],
        "dataLimitations": [],
        "uncertainties": [],
        "aiConfidenceNote": "Analysis completed with available information"
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limitations_shape() {
        let limitations = default_limitations();
        assert!(limitations["unverifiableClaims"].as_array().unwrap().is_empty());
        assert!(limitations["aiConfidenceNote"].is_string());
    }
}
