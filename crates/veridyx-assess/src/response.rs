//! Parsing of the external assessor's completion text.
//!
//! The completion is expected to contain exactly one JSON object; anything
//! around it is discarded. A response without a `credibility` field cannot
//! be assessed and is a hard error. The remaining sections are opaque to
//! this subsystem and pass through unexamined.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use veridyx_common::VeridyxError;

use crate::credibility::RawCredibility;

/// The structured assessment as returned by the external collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResponse {
    pub credibility: RawCredibility,
    /// Bias analysis section, passed through for presentation.
    #[serde(default)]
    pub bias: Value,
    /// Key findings section, passed through.
    #[serde(default)]
    pub key_findings: Value,
    /// Research perspective section, passed through.
    #[serde(default)]
    pub perspective: Value,
    /// Analysis limitations section; the caller substitutes a default when
    /// absent.
    #[serde(default)]
    pub limitations: Option<Value>,
}

/// Extract and parse the JSON object embedded in a raw completion.
pub fn parse_assessment_response(completion: &str) -> Result<AssessmentResponse, VeridyxError> {
    let json_slice = extract_json_object(completion).ok_or_else(|| {
        VeridyxError::InvalidAssessment("no JSON object in assessment response".to_string())
    })?;

    let value: Value = serde_json::from_str(json_slice)?;

    if value.get("credibility").is_none() {
        return Err(VeridyxError::InvalidAssessment(
            "missing credibility assessment".to_string(),
        ));
    }

    let response: AssessmentResponse = serde_json::from_value(value)?;
    debug!(
        has_limitations = response.limitations.is_some(),
        "Assessment response parsed"
    );
    Ok(response)
}

/// The span from the first `{` to the last `}`, if any.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_extracted_from_surrounding_prose() {
        let completion = r#"Here is the analysis:
        { "credibility": { "totalScore": 7.0 }, "bias": { "overallLevel": "Low" } }
        Hope this helps!"#;
        let response = parse_assessment_response(completion).unwrap();
        assert_eq!(response.credibility.total_score, Some(7.0));
        assert_eq!(response.bias["overallLevel"], "Low");
    }

    #[test]
    fn test_missing_credibility_is_hard_error() {
        let err = parse_assessment_response(r#"{ "bias": {} }"#).unwrap_err();
        assert!(matches!(err, VeridyxError::InvalidAssessment(_)));
    }

    #[test]
    fn test_no_json_at_all() {
        let err = parse_assessment_response("I cannot assess this document.").unwrap_err();
        assert!(matches!(err, VeridyxError::InvalidAssessment(_)));
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let err = parse_assessment_response("{ not json }").unwrap_err();
        assert!(matches!(err, VeridyxError::Serialization(_)));
    }

    #[test]
    fn test_passthrough_sections_default_when_absent() {
        let response =
            parse_assessment_response(r#"{ "credibility": { "totalScore": 1.0 } }"#).unwrap();
        assert!(response.bias.is_null());
        assert!(response.limitations.is_none());
    }
}
