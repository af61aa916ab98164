//! veridyx-classify — Document type and academic field classification.
//!
//! Both classifiers are total, deterministic functions of the lower-cased
//! title+text: type classification is a priority-ordered cascade of keyword
//! checks (order is the tie-break rule), field classification is additive
//! keyword scoring with a margin rule that prevents noisy near-ties from
//! producing a confident-looking label.

pub mod doc_type;
pub mod field;

pub use doc_type::classify_document_type;
pub use field::classify_academic_field;

use serde::{Deserialize, Serialize};

/// Structural/genre classification of a work.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentType {
    Article,
    Review,
    Book,
    Dissertation,
    Proposal,
    CaseStudy,
    Essay,
    Theoretical,
    Preprint,
    Conference,
    Unknown,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Article      => "article",
            DocumentType::Review       => "review",
            DocumentType::Book         => "book",
            DocumentType::Dissertation => "dissertation",
            DocumentType::Proposal     => "proposal",
            DocumentType::CaseStudy    => "case-study",
            DocumentType::Essay        => "essay",
            DocumentType::Theoretical  => "theoretical",
            DocumentType::Preprint     => "preprint",
            DocumentType::Conference   => "conference",
            DocumentType::Unknown      => "unknown",
        }
    }

    pub const ALL: [DocumentType; 11] = [
        DocumentType::Article,
        DocumentType::Review,
        DocumentType::Book,
        DocumentType::Dissertation,
        DocumentType::Proposal,
        DocumentType::CaseStudy,
        DocumentType::Essay,
        DocumentType::Theoretical,
        DocumentType::Preprint,
        DocumentType::Conference,
        DocumentType::Unknown,
    ];
}

/// Coarse discipline classification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum AcademicField {
    NaturalSciences,
    Engineering,
    Medical,
    Agricultural,
    SocialSciences,
    Humanities,
    FormalSciences,
    Interdisciplinary,
}

impl AcademicField {
    pub fn as_str(&self) -> &'static str {
        match self {
            AcademicField::NaturalSciences   => "natural-sciences",
            AcademicField::Engineering       => "engineering",
            AcademicField::Medical           => "medical",
            AcademicField::Agricultural      => "agricultural",
            AcademicField::SocialSciences    => "social-sciences",
            AcademicField::Humanities        => "humanities",
            AcademicField::FormalSciences    => "formal-sciences",
            AcademicField::Interdisciplinary => "interdisciplinary",
        }
    }

    pub const ALL: [AcademicField; 8] = [
        AcademicField::NaturalSciences,
        AcademicField::Engineering,
        AcademicField::Medical,
        AcademicField::Agricultural,
        AcademicField::SocialSciences,
        AcademicField::Humanities,
        AcademicField::FormalSciences,
        AcademicField::Interdisciplinary,
    ];
}

/// Lower-cased title+text used by both classifiers.
pub(crate) fn combined_input(text: &str, title: Option<&str>) -> String {
    format!("{} {}", title.unwrap_or(""), text).to_lowercase()
}
