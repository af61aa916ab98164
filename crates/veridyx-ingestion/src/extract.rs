//! Format dispatch and text extraction.
//!
//! Extraction fails soft: any error yields empty text so the caller can fall
//! back to the abstract or the file name. Dispatch order is plain text →
//! PDF text layer → DOCX package → unsupported.

use std::io::Read;

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::{debug, warn};

/// Result of an extraction attempt. `page_count` is only known for PDFs.
#[derive(Debug, Clone, Default)]
pub struct ExtractedText {
    pub text: String,
    pub page_count: Option<usize>,
}

/// Extract plain text from raw document bytes, dispatching on MIME type and
/// file extension. Never fails: unsupported or corrupt input returns empty
/// text.
pub fn extract_text(bytes: &[u8], mime_type: &str, file_name: &str) -> ExtractedText {
    debug!(
        file_name,
        mime_type,
        size = bytes.len(),
        "Extracting document text"
    );

    if mime_type.contains("text") || file_name.ends_with(".txt") {
        let text = String::from_utf8_lossy(bytes).into_owned();
        debug!(chars = text.len(), "Plain-text extraction complete");
        return ExtractedText { text, page_count: None };
    }

    if mime_type.contains("pdf") || file_name.ends_with(".pdf") {
        return match extract_pdf(bytes) {
            Ok(extracted) => extracted,
            Err(e) => {
                warn!(file_name, error = %e, "PDF extraction failed");
                ExtractedText::default()
            }
        };
    }

    if mime_type.contains("wordprocessingml")
        || mime_type.contains("ms-word")
        || file_name.ends_with(".docx")
    {
        return match extract_docx(bytes) {
            Ok(text) => ExtractedText { text, page_count: None },
            Err(e) => {
                warn!(file_name, error = %e, "DOCX extraction failed");
                ExtractedText::default()
            }
        };
    }

    warn!(file_name, mime_type, "Unsupported document format");
    ExtractedText::default()
}

// ── PDF ───────────────────────────────────────────────────────────────────────

/// Pull the text layer out of a PDF with lopdf, page by page.
fn extract_pdf(bytes: &[u8]) -> anyhow::Result<ExtractedText> {
    let doc = lopdf::Document::load_mem(bytes)?;
    let pages = doc.get_pages();
    let page_count = pages.len();

    let mut text = String::new();
    for &page_no in pages.keys() {
        match doc.extract_text(&[page_no]) {
            Ok(page_text) => {
                text.push_str(&page_text);
                text.push('\n');
            }
            Err(e) => {
                debug!(page = page_no, error = %e, "Page has no extractable text");
            }
        }
    }

    // A near-empty text layer relative to file size indicates a scan-based
    // or image-heavy PDF. Diagnostic only, not an error.
    let ratio = if bytes.is_empty() {
        0.0
    } else {
        (text.len() as f64 / bytes.len() as f64) * 100.0
    };
    if text.len() < 500 {
        warn!(
            chars = text.len(),
            page_count,
            "Very low PDF text extraction; likely scan-based, OCR required"
        );
    } else if ratio < 10.0 {
        warn!(
            ratio = format!("{:.2}%", ratio),
            "Low text-to-size ratio; PDF may be image or diagram heavy"
        );
    }

    Ok(ExtractedText {
        text,
        page_count: Some(page_count),
    })
}

// ── DOCX ──────────────────────────────────────────────────────────────────────

/// A DOCX is a zip package; the body lives in word/document.xml. Text nodes
/// are collected with an event reader, which also decodes the standard XML
/// entities.
fn extract_docx(bytes: &[u8]) -> anyhow::Result<String> {
    let cursor = std::io::Cursor::new(bytes);
    let mut archive = zip::ZipArchive::new(cursor)?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|_| anyhow::anyhow!("document.xml not found in DOCX package"))?
        .read_to_string(&mut xml)?;

    let mut reader = Reader::from_str(&xml);
    reader.config_mut().trim_text(true);

    let mut text = String::new();
    loop {
        match reader.read_event() {
            Ok(Event::Text(ref e)) => {
                let fragment = e.unescape().unwrap_or_default();
                if !fragment.trim().is_empty() {
                    if !text.is_empty() {
                        text.push(' ');
                    }
                    text.push_str(fragment.trim());
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => anyhow::bail!("DOCX body XML parse error: {}", e),
        }
    }

    debug!(chars = text.len(), "DOCX extraction complete");
    Ok(text)
}
