//! Pipeline orchestration for reference-based and upload-based analysis.

use chrono::Utc;
use sha2::{Digest, Sha256};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use veridyx_acquire::{AcquisitionChain, SourceKind};
use veridyx_assess::{
    build_abstract_only_prompt, build_assessment_prompt, parse_assessment_response,
    validate_credibility, AssessmentBackend, PromptContext,
};
use veridyx_classify::{classify_academic_field, classify_document_type};
use veridyx_common::AnalysisConfig;
use veridyx_framework::framework_guidelines;
use veridyx_ingestion::chunker::select_relevant_chunks;
use veridyx_ingestion::extract::extract_text;
use veridyx_ingestion::models::{DocumentChunk, ProcessedDocument};
use veridyx_ingestion::process::{process_pdf_document, process_text_document, MetadataHints};

use crate::request::AnalysisRequest;
use crate::result::{default_limitations, AnalysisOutcome};

/// Analyze a document identified by bibliographic reference.
///
/// Resolution order for the analysis text: text supplied by the caller,
/// then the acquisition chain, then the abstract. Acquisition and
/// extraction failures degrade quietly; the only hard errors come from the
/// assessor boundary (unusable response, missing total score).
#[instrument(skip(request, backend, config), fields(request_id = %Uuid::new_v4(), title = request.title.as_deref()))]
pub async fn analyze(
    request: &AnalysisRequest,
    backend: &dyn AssessmentBackend,
    config: &AnalysisConfig,
) -> anyhow::Result<AnalysisOutcome> {
    let mut analysis_text = request.supplied_text.clone().unwrap_or_default();
    let mut chunks: Vec<DocumentChunk> = Vec::new();
    let mut source = None;

    if analysis_text.is_empty() && request.has_identifiers() {
        info!("No text supplied, attempting document acquisition");
        let chain = AcquisitionChain::new(&config.fetch)?;
        let report = chain.acquire(&request.identifiers()).await;

        if let Some(doc) = report.document {
            let processed = resolve_fetched(&doc, request, config);
            if processed.full_text.is_empty() {
                warn!("Fetched document yielded no text, falling back to abstract");
            } else {
                analysis_text = processed.full_text;
                chunks = processed.chunks;
                source = Some(doc.source);
            }
        } else {
            info!(
                attempts = report.attempts.len(),
                "Acquisition exhausted, falling back to abstract"
            );
        }
    }

    if analysis_text.is_empty() {
        analysis_text = request.abstract_text.clone().unwrap_or_default();
    }

    run_assessment(
        request.title.as_deref(),
        request.abstract_text.as_deref(),
        &analysis_text,
        chunks,
        source,
        backend,
        config,
    )
    .await
}

/// Analyze a document uploaded as raw bytes.
///
/// Extraction failure falls back to the file name so classification still
/// has something to work with; the abstract becomes the leading slice of
/// whatever text was recovered.
#[instrument(skip(bytes, backend, config), fields(size = bytes.len()))]
pub async fn analyze_upload(
    file_name: &str,
    bytes: &[u8],
    mime_type: &str,
    backend: &dyn AssessmentBackend,
    config: &AnalysisConfig,
) -> anyhow::Result<AnalysisOutcome> {
    let document_id = file_id(file_name);
    info!(document_id, "Processing uploaded document");

    let extracted = extract_text(bytes, mime_type, file_name);
    let title = file_stem(file_name);

    let mut text = extracted.text;
    if text.is_empty() {
        warn!("Text extraction failed, using file name only");
        text = title.clone();
    }

    let processed = process_text_document(
        &text,
        MetadataHints {
            title: Some(title.clone()),
            ..Default::default()
        },
        &config.chunking,
    );
    let abstract_text = leading_chars(&processed.full_text, 1000).to_string();

    run_assessment(
        Some(&title),
        Some(&abstract_text),
        &processed.full_text,
        processed.chunks,
        None,
        backend,
        config,
    )
    .await
}

/// Shared back half of both entry points: classify, derive the framework,
/// prompt the assessor, validate.
async fn run_assessment(
    title: Option<&str>,
    abstract_text: Option<&str>,
    analysis_text: &str,
    chunks: Vec<DocumentChunk>,
    source: Option<veridyx_acquire::DocumentSource>,
    backend: &dyn AssessmentBackend,
    config: &AnalysisConfig,
) -> anyhow::Result<AnalysisOutcome> {
    let document_type = classify_document_type(analysis_text, title);
    let field = classify_academic_field(analysis_text, title);
    let framework = framework_guidelines(document_type, field);

    info!(
        document_type = document_type.as_str(),
        field = field.as_str(),
        chars = analysis_text.len(),
        "Document classified"
    );

    let prompt = if analysis_text.len() > config.abstract_only_threshold {
        // Chunked documents over the selection budget get the relevant
        // subset; everything else goes in whole (subject to the char cap).
        let selected = select_relevant_chunks(&chunks, config.selection_budget_tokens);
        let context = PromptContext {
            document_title: title,
            document_type,
            field,
            framework: &framework,
            chunks: &selected,
            full_text: analysis_text,
            abstract_text,
        };
        build_assessment_prompt(&context, config.prompt_char_cap)
    } else {
        debug!("Below full-assessment threshold, using abstract-only prompt");
        build_abstract_only_prompt(
            title.unwrap_or("Unknown"),
            if analysis_text.is_empty() {
                abstract_text.unwrap_or_default()
            } else {
                analysis_text
            },
            document_type,
            field,
            &framework,
        )
    };

    let completion = backend.assess(&prompt).await?;
    let response = parse_assessment_response(&completion)?;
    let credibility = validate_credibility(response.credibility, &framework)?;

    info!(
        total_score = credibility.total_score,
        max_total_score = credibility.max_total_score,
        rating = credibility.rating.as_str(),
        "Analysis complete"
    );

    Ok(AnalysisOutcome {
        document_type,
        field,
        framework,
        credibility,
        bias: response.bias,
        key_findings: response.key_findings,
        perspective: response.perspective,
        limitations: response.limitations.unwrap_or_else(default_limitations),
        source,
        timestamp: Utc::now(),
    })
}

/// Turn a fetched document into processed text, dispatching on source and
/// reported content type.
fn resolve_fetched(
    doc: &veridyx_acquire::FetchedDocument,
    request: &AnalysisRequest,
    config: &AnalysisConfig,
) -> ProcessedDocument {
    let hints = MetadataHints {
        title: request.title.clone(),
        authors: (!request.authors.is_empty()).then(|| request.authors.clone()),
        abstract_text: request.abstract_text.clone(),
        keywords: None,
    };

    if doc.source.kind == SourceKind::PreprintServer || doc.mime_type.contains("pdf") {
        process_pdf_document(&doc.bytes, hints, &config.chunking)
    } else {
        let text = String::from_utf8_lossy(&doc.bytes);
        process_text_document(&text, hints, &config.chunking)
    }
}

/// Stable id for an uploaded file, derived from its name.
fn file_id(file_name: &str) -> String {
    let digest = Sha256::digest(file_name.as_bytes());
    format!("file-{:x}", digest)[..13].to_string()
}

/// File name without its final extension.
fn file_stem(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => file_name.to_string(),
    }
}

/// Leading `cap` bytes of a string, backed off to a char boundary.
fn leading_chars(text: &str, cap: usize) -> &str {
    if text.len() <= cap {
        return text;
    }
    let mut end = cap;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_id_is_stable_and_prefixed() {
        let a = file_id("paper.pdf");
        let b = file_id("paper.pdf");
        assert_eq!(a, b);
        assert!(a.starts_with("file-"));
        assert_eq!(a.len(), 13);
        assert_ne!(file_id("other.pdf"), a);
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("study.final.pdf"), "study.final");
        assert_eq!(file_stem("notes"), "notes");
        assert_eq!(file_stem(".hidden"), ".hidden");
    }

    #[test]
    fn test_leading_chars_respects_boundaries() {
        assert_eq!(leading_chars("abcdef", 3), "abc");
        assert_eq!(leading_chars("ab", 10), "ab");
        // Multi-byte char straddling the cap backs off cleanly.
        let s = "aé";
        assert_eq!(leading_chars(s, 2), "a");
    }
}
