//! Credibility score types: the raw externally-supplied shape and the
//! validated form handed to the presentation layer.

use serde::{Deserialize, Serialize};

/// Qualitative rating derived from the score percentage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Rating {
    Exemplary,
    Strong,
    Moderate,
    Weak,
    #[serde(rename = "Very Poor")]
    VeryPoor,
    Invalid,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Exemplary => "Exemplary",
            Rating::Strong    => "Strong",
            Rating::Moderate  => "Moderate",
            Rating::Weak      => "Weak",
            Rating::VeryPoor  => "Very Poor",
            Rating::Invalid   => "Invalid",
        }
    }
}

/// One scored assessment component.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CredibilityComponent {
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub max_score: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub evidence: Vec<String>,
    /// 0–100: how confident the assessor is in this score.
    #[serde(default)]
    pub confidence: f64,
    /// Explanation of why the score was given.
    #[serde(default)]
    pub reasoning: String,
}

/// The unvalidated credibility object as it arrives from the external
/// assessor. Everything is optional except what the validator demands;
/// shape tolerance is deliberate since the payload is untrusted.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawCredibility {
    pub methodological_rigor: Option<CredibilityComponent>,
    pub data_transparency: Option<CredibilityComponent>,
    pub source_quality: Option<CredibilityComponent>,
    pub author_credibility: Option<CredibilityComponent>,
    pub statistical_validity: Option<CredibilityComponent>,
    pub logical_consistency: Option<CredibilityComponent>,
    pub total_score: Option<f64>,
    pub rating: Option<String>,
    pub overall_confidence: Option<f64>,
}

/// The validated credibility score. Created from the raw shape, mutated
/// exactly once by the validator (capping + rating recomputation), then
/// frozen for presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredibilityScore {
    pub methodological_rigor: CredibilityComponent,
    pub data_transparency: CredibilityComponent,
    pub source_quality: CredibilityComponent,
    pub author_credibility: CredibilityComponent,
    pub statistical_validity: CredibilityComponent,
    pub logical_consistency: CredibilityComponent,
    pub total_score: f64,
    /// Maximum possible score given the framework weights.
    pub max_total_score: f64,
    pub rating: Rating,
    /// 0–100: average confidence across components.
    pub overall_confidence: f64,
}
