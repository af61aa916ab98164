//! Data models for the document resolution pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Section types inferred from chunk content keywords.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Abstract,
    Introduction,
    Methodology,
    Results,
    Discussion,
    Conclusion,
    References,
    Other,
}

impl SectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Abstract     => "abstract",
            SectionType::Introduction => "introduction",
            SectionType::Methodology  => "methodology",
            SectionType::Results      => "results",
            SectionType::Discussion   => "discussion",
            SectionType::Conclusion   => "conclusion",
            SectionType::References   => "references",
            SectionType::Other        => "other",
        }
    }
}

/// A bounded, section-typed slice of normalized document text.
/// Immutable once produced; `chunk_index` defines the total order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentChunk {
    pub text: String,
    pub page_start: u32,
    pub page_end: u32,
    pub chunk_index: usize,
    pub token_estimate: usize,
    pub is_introduction: bool,
    pub is_conclusion: bool,
    pub section_type: SectionType,
}

/// Source format the text was extracted from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OriginalFormat {
    Pdf,
    Text,
    Html,
}

/// Bibliographic metadata carried alongside the extracted text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub abstract_text: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub extraction_timestamp: DateTime<Utc>,
    pub original_format: OriginalFormat,
    /// How well the extraction went, 0.0–1.0.
    pub confidence: f64,
}

/// A fully resolved document: normalized text plus its chunked form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedDocument {
    pub full_text: String,
    pub chunks: Vec<DocumentChunk>,
    pub metadata: DocumentMetadata,
    pub page_count: usize,
    pub token_estimate: usize,
}
