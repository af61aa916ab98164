//! Open-access lookup client (Unpaywall-shaped API).
//!
//! Resolves a DOI to candidate open-access PDF locations:
//!   https://api.unpaywall.org/v2/{doi}?email={contact}
//!
//! The payload is treated as opaque and untrusted; any shape mismatch is
//! simply "no result". The best reported location is fetched first, then
//! each alternate published location in order.

use async_trait::async_trait;
use tracing::{debug, instrument, warn};
use veridyx_common::PoliteClient;

use super::{FetchStrategy, StrategyKind};
use crate::models::{DocumentIdentifiers, DocumentSource, FetchedDocument, SourceKind};

const OA_API_BASE: &str = "https://api.unpaywall.org/v2";

pub struct OpenAccessLookup {
    client: PoliteClient,
    contact_email: String,
}

impl OpenAccessLookup {
    pub fn new(client: PoliteClient, contact_email: &str) -> Self {
        Self {
            client,
            contact_email: contact_email.to_string(),
        }
    }

    async fn fetch_pdf(
        &self,
        pdf_url: &str,
        kind: SourceKind,
        confidence: f64,
        clean_doi: &str,
    ) -> anyhow::Result<Option<FetchedDocument>> {
        let resp = self.client.get(pdf_url).send().await?;
        if !resp.status().is_success() {
            debug!(url = pdf_url, status = %resp.status(), "OA location fetch rejected");
            return Ok(None);
        }
        let bytes = resp.bytes().await?.to_vec();
        let size_bytes = bytes.len();

        Ok(Some(FetchedDocument {
            bytes,
            source: DocumentSource {
                kind,
                url: pdf_url.to_string(),
                confidence,
            },
            file_name: format!("{}.pdf", clean_doi.replace('/', "_")),
            mime_type: "application/pdf".to_string(),
            size_bytes,
        }))
    }
}

#[async_trait]
impl FetchStrategy for OpenAccessLookup {
    fn kind(&self) -> StrategyKind {
        StrategyKind::OpenAccessLookup
    }

    fn applies(&self, ids: &DocumentIdentifiers) -> bool {
        ids.doi.is_some()
    }

    #[instrument(skip(self, ids), fields(doi = ids.doi.as_deref()))]
    async fn fetch(&self, ids: &DocumentIdentifiers) -> anyhow::Result<Option<FetchedDocument>> {
        let Some(ref doi) = ids.doi else {
            return Ok(None);
        };
        let doi = clean_doi(doi);

        let lookup_url = format!("{}/{}?email={}", OA_API_BASE, doi, self.contact_email);
        let resp = self.client.get(&lookup_url).send().await?;
        if !resp.status().is_success() {
            warn!(status = %resp.status(), "Open-access lookup rejected DOI");
            return Ok(None);
        }
        let body: serde_json::Value = resp.json().await?;

        for candidate in pdf_candidates(&body) {
            match self
                .fetch_pdf(&candidate.url, candidate.kind, candidate.confidence, &doi)
                .await
            {
                Ok(Some(doc)) => return Ok(Some(doc)),
                Ok(None) => continue,
                Err(e) => {
                    debug!(url = %candidate.url, error = %e, "OA candidate failed, trying next");
                    continue;
                }
            }
        }

        Ok(None)
    }
}

/// Strip resolver prefixes from a DOI string.
pub fn clean_doi(doi: &str) -> String {
    doi.trim()
        .trim_start_matches("https://doi.org/")
        .trim_start_matches("http://doi.org/")
        .trim_start_matches("doi:")
        .to_string()
}

#[derive(Debug, Clone)]
pub(crate) struct OaCandidate {
    pub url: String,
    pub kind: SourceKind,
    pub confidence: f64,
}

/// Extract candidate PDF URLs from the lookup payload, best location first.
pub(crate) fn pdf_candidates(body: &serde_json::Value) -> Vec<OaCandidate> {
    let mut candidates = Vec::new();

    if body["is_oa"].as_bool().unwrap_or(false) {
        if let Some(url) = body["best_oa_location"]["url_for_pdf"].as_str() {
            candidates.push(OaCandidate {
                url: url.to_string(),
                kind: SourceKind::OpenAccessFinder,
                confidence: 0.9,
            });
        }
    }

    if let Some(locations) = body["published_oa_locations"].as_array() {
        for location in locations {
            if let Some(url) = location["url_for_pdf"].as_str() {
                candidates.push(OaCandidate {
                    url: url.to_string(),
                    kind: SourceKind::RegistryDoi,
                    confidence: 0.85,
                });
            }
        }
    }

    candidates
}
