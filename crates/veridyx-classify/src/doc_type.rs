//! Document type classification.
//!
//! A priority-ordered cascade of keyword checks, each returning immediately
//! on match. The order doubles as the tie-break rule: a document mentioning
//! both "preprint" and "case study" is a preprint. The tail of the cascade
//! is a series of increasingly permissive "looks like an empirical article"
//! checks before falling back to length heuristics.

use lazy_static::lazy_static;
use regex::Regex;

use crate::{combined_input, DocumentType};

lazy_static! {
    static ref RE_METHODOLOGY: Regex = Regex::new(
        r"method|procedure|approach|design|protocol|experiment|test|sample|variable|hypothesis"
    )
    .unwrap();
    static ref RE_RESULTS: Regex =
        Regex::new(r"result|finding|outcome|data|show|demonstrate|evidence|conclude").unwrap();
    static ref RE_DISCUSSION: Regex =
        Regex::new(r"discussion|implication|limitation|interpret|analyse|analyze|significance")
            .unwrap();
    static ref RE_CONCLUSION: Regex = Regex::new(
        r"conclusion|summary|concluding|conclude|final remark|future work|implication"
    )
    .unwrap();
    static ref RE_PREPRINT: Regex =
        Regex::new(r"preprint|arxiv|not peer-reviewed|eprint").unwrap();
    static ref RE_CONFERENCE: Regex = Regex::new(
        r"\b(conference|proceeding|workshop|symposium|proceedings|conference paper|conference abstract)\b"
    )
    .unwrap();
    static ref RE_DISSERTATION: Regex = Regex::new(
        r"\b(dissertation|thesis|doctoral dissertation|master.?s thesis|phd dissertation)\b"
    )
    .unwrap();
    static ref RE_BOOK: Regex = Regex::new(
        r"\b(book|chapter|volume|edited collection|edited book|textbook|monograph)\b"
    )
    .unwrap();
    static ref RE_CASE_STUDY: Regex = Regex::new(
        r"\b(case study|case analysis|case report|case presentation|single case|case example)\b"
    )
    .unwrap();
    static ref RE_PROPOSAL: Regex = Regex::new(
        r"\b(proposal|propose|proposed|propose to|proposal for|aims to|objectives|will conduct|research plan)\b"
    )
    .unwrap();
    static ref RE_ESSAY: Regex = Regex::new(
        r"\b(essay|perspective|opinion|commentary|editorial|viewpoint|reflective essay|critical essay)\b"
    )
    .unwrap();
    static ref RE_THEORETICAL: Regex = Regex::new(
        r"\b(theory|theoretical|conceptual|theoretical framework|concept|model|philosophical|conceptual model)\b"
    )
    .unwrap();
    static ref RE_REVIEW: Regex = Regex::new(
        r"\b(review|survey|systematic review|meta.analysis|scoping review|narrative review|literature review|examination of|synthesis of literature|state of the art)\b"
    )
    .unwrap();
}

/// Length above which an unlabelled document reads as a dissertation.
const DISSERTATION_LENGTH: usize = 500_000;
/// Length above which an unlabelled document reads as a book.
const BOOK_LENGTH: usize = 300_000;
/// Minimum text length for the catch-all article fallback.
const ARTICLE_FALLBACK_LENGTH: usize = 5_000;

/// Classify the structural/genre type of a document from its text and an
/// optional title. Total function: always returns a value, defaulting to
/// `Unknown` for short unrecognizable input.
pub fn classify_document_type(text: &str, title: Option<&str>) -> DocumentType {
    let combined = combined_input(text, title);

    let has_abstract = combined.contains("abstract");
    let has_methodology = RE_METHODOLOGY.is_match(&combined);
    let has_results = RE_RESULTS.is_match(&combined);
    let has_discussion = RE_DISCUSSION.is_match(&combined);
    let has_conclusion = RE_CONCLUSION.is_match(&combined);

    // Preprint markers come first; preprint servers also tag the title.
    if RE_PREPRINT.is_match(&combined) || title.is_some_and(|t| t.contains("arXiv")) {
        return DocumentType::Preprint;
    }

    if RE_CONFERENCE.is_match(&combined) {
        return DocumentType::Conference;
    }

    if RE_DISSERTATION.is_match(&combined) || combined.len() > DISSERTATION_LENGTH {
        return DocumentType::Dissertation;
    }

    if RE_BOOK.is_match(&combined) || combined.len() > BOOK_LENGTH {
        return DocumentType::Book;
    }

    if RE_CASE_STUDY.is_match(&combined) {
        return DocumentType::CaseStudy;
    }

    // Proposals speak in future tense and report no results.
    if RE_PROPOSAL.is_match(&combined) && !has_results {
        return DocumentType::Proposal;
    }

    if RE_ESSAY.is_match(&combined) && !has_methodology {
        return DocumentType::Essay;
    }

    if RE_THEORETICAL.is_match(&combined) && !has_methodology {
        return DocumentType::Theoretical;
    }

    if RE_REVIEW.is_match(&combined) && !has_methodology {
        return DocumentType::Review;
    }

    // Empirical article checks, strictest first.
    if (has_abstract || combined.contains("introduction")) && has_methodology && has_results {
        return DocumentType::Article;
    }
    if has_methodology && has_results && (has_discussion || has_conclusion) {
        return DocumentType::Article;
    }
    if has_methodology && has_results {
        return DocumentType::Article;
    }
    if (has_abstract || combined.contains("introduction")) && has_conclusion {
        return DocumentType::Article;
    }

    // Substantial but structure-free text still reads as an article.
    if text.len() > ARTICLE_FALLBACK_LENGTH {
        return DocumentType::Article;
    }

    DocumentType::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preprint_markers_win_over_everything() {
        let text = "This preprint presents a case study with methodology and results.";
        assert_eq!(classify_document_type(text, None), DocumentType::Preprint);
    }

    #[test]
    fn test_arxiv_title_marks_preprint() {
        assert_eq!(
            classify_document_type("short note", Some("arXiv:2401.01234")),
            DocumentType::Preprint
        );
    }

    #[test]
    fn test_conference_paper() {
        let text = "Presented at the workshop on distributed systems.";
        assert_eq!(classify_document_type(text, None), DocumentType::Conference);
    }

    #[test]
    fn test_dissertation_by_marker_and_by_length() {
        assert_eq!(
            classify_document_type("This doctoral dissertation examines...", None),
            DocumentType::Dissertation
        );
        let huge = "z".repeat(500_001);
        assert_eq!(classify_document_type(&huge, None), DocumentType::Dissertation);
    }

    #[test]
    fn test_book_by_length() {
        let long = "z".repeat(300_001);
        assert_eq!(classify_document_type(&long, None), DocumentType::Book);
    }

    #[test]
    fn test_proposal_requires_absent_results() {
        let proposal = "We propose to investigate X. The research plan covers two years.";
        assert_eq!(classify_document_type(proposal, None), DocumentType::Proposal);

        let with_results =
            "We propose a new framework. Our findings demonstrate it works in practice. \
             The methodology used a controlled experiment.";
        assert_ne!(classify_document_type(with_results, None), DocumentType::Proposal);
    }

    #[test]
    fn test_review_requires_absent_methodology() {
        let review = "A literature review of prior publications in the area.";
        assert_eq!(classify_document_type(review, None), DocumentType::Review);
    }

    #[test]
    fn test_empirical_article() {
        let text = "Abstract. Introduction. Our methodology used a survey; \
                    the results demonstrate a clear effect. Discussion follows.";
        assert_eq!(classify_document_type(text, None), DocumentType::Article);
    }

    #[test]
    fn test_long_unstructured_text_defaults_to_article() {
        let text = "lorem ipsum ".repeat(500);
        assert_eq!(classify_document_type(&text, None), DocumentType::Article);
    }

    #[test]
    fn test_short_unrecognizable_text_is_unknown() {
        assert_eq!(classify_document_type("hello world", None), DocumentType::Unknown);
    }

    #[test]
    fn test_determinism() {
        let text = "Abstract. Methodology. Results. Discussion.";
        let a = classify_document_type(text, Some("Some Title"));
        let b = classify_document_type(text, Some("Some Title"));
        assert_eq!(a, b);
    }
}
