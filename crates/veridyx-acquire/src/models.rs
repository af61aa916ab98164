//! Data models for document acquisition.

use serde::{Deserialize, Serialize};

/// Which retrieval path produced a document.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    RegistryDoi,
    PreprintServer,
    OpenAccessFinder,
    BibliographicDatabase,
    DirectLink,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::RegistryDoi           => "registry-doi",
            SourceKind::PreprintServer        => "preprint-server",
            SourceKind::OpenAccessFinder      => "open-access-finder",
            SourceKind::BibliographicDatabase => "bibliographic-database",
            SourceKind::DirectLink            => "direct-link",
        }
    }
}

/// Provenance of a successful fetch. Produced once per fetch; immutable.
/// `confidence` reflects how trustworthy the retrieval path is assumed to be.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSource {
    pub kind: SourceKind,
    pub url: String,
    pub confidence: f64,
}

/// Raw document bytes plus provenance. Owned solely by the caller of the
/// acquisition chain; never cached or shared.
#[derive(Debug, Clone)]
pub struct FetchedDocument {
    pub bytes: Vec<u8>,
    pub source: DocumentSource,
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: usize,
}

/// Identifiers the caller knows about the document it wants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentIdentifiers {
    /// Preprint-server id, e.g. "2401.01234v2" or an abs/ URL containing one.
    pub preprint_id: Option<String>,
    /// DOI, with or without the resolver prefix.
    pub doi: Option<String>,
    /// Landing page or direct PDF URL.
    pub url: Option<String>,
    /// Abstract text, kept for the abstract-only fallback downstream.
    pub abstract_text: Option<String>,
}
