//! Analysis request parameters.

use serde::{Deserialize, Serialize};

use veridyx_acquire::DocumentIdentifiers;

/// What the caller knows about the document to analyze. Any combination of
/// identifiers and text is accepted; the pipeline resolves the best
/// available body of text from them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub title: Option<String>,
    pub authors: Vec<String>,
    pub doi: Option<String>,
    pub url: Option<String>,
    /// Bibliographic-database work id; may embed a preprint-server id.
    pub preprint_id: Option<String>,
    pub abstract_text: Option<String>,
    /// Full text supplied directly by the caller, skipping acquisition.
    pub supplied_text: Option<String>,
}

impl AnalysisRequest {
    /// Whether acquisition is worth attempting at all.
    pub fn has_identifiers(&self) -> bool {
        self.doi.is_some() || self.url.is_some() || self.preprint_id.is_some()
    }

    pub fn identifiers(&self) -> DocumentIdentifiers {
        DocumentIdentifiers {
            preprint_id: self.preprint_id.clone(),
            doi: self.doi.clone(),
            url: self.url.clone(),
            abstract_text: self.abstract_text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_identifiers() {
        assert!(!AnalysisRequest::default().has_identifiers());
        let request = AnalysisRequest {
            doi: Some("10.1000/x".to_string()),
            ..Default::default()
        };
        assert!(request.has_identifiers());
    }
}
