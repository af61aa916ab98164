//! Section-aware document chunker and token-budgeted chunk selection.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{DocumentChunk, SectionType};
use veridyx_common::config::ChunkingConfig;

/// Rough estimate: ~3500 characters per printed page.
const CHARS_PER_PAGE: usize = 3500;
/// Rough estimate: ~80 characters per line, used to size the overlap tail.
const CHARS_PER_LINE: usize = 80;

/// Rough token estimation: 1 token ≈ 4 characters.
pub fn estimate_tokens(text: &str) -> usize {
    text.len().div_ceil(4)
}

lazy_static! {
    static ref RE_INTRODUCTION: Regex =
        Regex::new(r"introduction|background|literature|related\s+work").unwrap();
    static ref RE_METHODOLOGY: Regex =
        Regex::new(r"method|methodology|approach|design|procedure").unwrap();
    static ref RE_RESULTS: Regex =
        Regex::new(r"result|finding|outcome|conclusion|discussion").unwrap();
    static ref RE_DISCUSSION: Regex =
        Regex::new(r"discussion|implication|limitation|future\s+work").unwrap();
    static ref RE_CONCLUSION: Regex =
        Regex::new(r"conclusion|summary|concluding|final").unwrap();
    static ref RE_REFERENCES: Regex =
        Regex::new(r"reference|bibliography|citation").unwrap();
}

/// Infer a chunk's section from keyword presence. Checked in fixed priority
/// order; the order is the tie-break rule.
pub fn detect_section_type(text: &str) -> SectionType {
    let lower = text.to_lowercase();

    if lower.contains("abstract")         { return SectionType::Abstract; }
    if RE_INTRODUCTION.is_match(&lower)   { return SectionType::Introduction; }
    if RE_METHODOLOGY.is_match(&lower)    { return SectionType::Methodology; }
    if RE_RESULTS.is_match(&lower)        { return SectionType::Results; }
    if RE_DISCUSSION.is_match(&lower)     { return SectionType::Discussion; }
    if RE_CONCLUSION.is_match(&lower)     { return SectionType::Conclusion; }
    if RE_REFERENCES.is_match(&lower)     { return SectionType::References; }

    SectionType::Other
}

/// Split normalized text into bounded chunks along paragraph boundaries.
///
/// Paragraphs accumulate into a buffer; when the next paragraph would push
/// the buffer past `max_chunk_tokens * 4` characters the chunk is closed and
/// the next buffer is seeded with the tail of the previous one so downstream
/// consumers keep cross-chunk context. Page spans are estimated from
/// character counts.
pub fn chunk_document(text: &str, config: &ChunkingConfig) -> Vec<DocumentChunk> {
    let max_chunk_chars = config.max_chunk_tokens * 4;
    let overlap_chars = config.overlap_tokens * 4;

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut page_start: u32 = 1;
    let mut page_end: u32 = 1;
    let mut chunk_index: usize = 0;

    for paragraph in text.split("\n\n") {
        let para = paragraph.trim();
        if para.is_empty() {
            continue;
        }

        let pages_in_para = para.len().div_ceil(CHARS_PER_PAGE) as u32;
        let would_be_too_large = current.len() + para.len() > max_chunk_chars;

        if would_be_too_large && !current.is_empty() {
            chunks.push(build_chunk(&current, page_start, page_end, chunk_index));

            // Seed the next buffer with the tail of the closed chunk.
            let overlap = tail_lines(&current, overlap_chars);
            current = format!("{}\n\n{}", overlap, para);
            page_start = page_end;
            chunk_index += 1;
        } else {
            if !current.is_empty() {
                current.push_str("\n\n");
            }
            current.push_str(para);
        }

        page_end += pages_in_para;
    }

    if !current.trim().is_empty() {
        chunks.push(build_chunk(&current, page_start, page_end, chunk_index));
    }

    chunks
}

fn build_chunk(buffer: &str, page_start: u32, page_end: u32, chunk_index: usize) -> DocumentChunk {
    let section_type = detect_section_type(buffer);
    let is_introduction =
        matches!(section_type, SectionType::Abstract | SectionType::Introduction);
    let is_conclusion =
        matches!(section_type, SectionType::Conclusion | SectionType::Discussion);

    DocumentChunk {
        text: buffer.trim().to_string(),
        page_start,
        page_end,
        chunk_index,
        token_estimate: estimate_tokens(buffer),
        is_introduction,
        is_conclusion,
        section_type,
    }
}

/// Last ~`overlap_chars` worth of lines from a chunk buffer.
fn tail_lines(buffer: &str, overlap_chars: usize) -> String {
    let lines: Vec<&str> = buffer.split('\n').collect();
    let keep = overlap_chars.div_ceil(CHARS_PER_LINE).max(1);
    lines[lines.len().saturating_sub(keep)..].join("\n")
}

/// Pick the chunks that matter most under a token budget.
///
/// Introduction/abstract chunks are always taken; methodology, results, and
/// untyped chunks fill the remaining budget; conclusion chunks come last if
/// space permits. The result is re-sorted into original document order.
pub fn select_relevant_chunks(chunks: &[DocumentChunk], max_tokens: usize) -> Vec<DocumentChunk> {
    let mut selected: Vec<DocumentChunk> = Vec::new();
    let mut total_tokens = 0usize;

    for chunk in chunks.iter().filter(|c| c.is_introduction) {
        total_tokens += chunk.token_estimate;
        selected.push(chunk.clone());
    }

    let main_content = chunks.iter().filter(|c| {
        !c.is_introduction
            && !c.is_conclusion
            && matches!(
                c.section_type,
                SectionType::Methodology | SectionType::Results | SectionType::Other
            )
    });
    for chunk in main_content {
        if total_tokens + chunk.token_estimate <= max_tokens {
            total_tokens += chunk.token_estimate;
            selected.push(chunk.clone());
        }
    }

    for chunk in chunks.iter().filter(|c| c.is_conclusion) {
        if total_tokens + chunk.token_estimate <= max_tokens {
            total_tokens += chunk.token_estimate;
            selected.push(chunk.clone());
        }
    }

    selected.sort_by_key(|c| c.chunk_index);
    selected
}
