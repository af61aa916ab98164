//! Direct-URL retrieval strategies.
//!
//! `DatabasePdfFetch` handles URLs that already point at a PDF hosted on the
//! bibliographic database. `DirectFetch` is the last-resort generic GET for
//! landing-page URLs; it only accepts responses whose content type reads as
//! PDF or text.

use async_trait::async_trait;
use tracing::{debug, instrument};
use veridyx_common::PoliteClient;

use super::{FetchStrategy, StrategyKind};
use crate::models::{DocumentIdentifiers, DocumentSource, FetchedDocument, SourceKind};

/// Last path segment of a URL, used as the stored file name.
fn file_name_from_url(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|u| {
            u.path_segments()
                .and_then(|segments| segments.last().map(String::from))
        })
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "document.pdf".to_string())
}

// ── Database-hosted PDF ───────────────────────────────────────────────────────

pub struct DatabasePdfFetch {
    client: PoliteClient,
}

impl DatabasePdfFetch {
    pub fn new(client: PoliteClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FetchStrategy for DatabasePdfFetch {
    fn kind(&self) -> StrategyKind {
        StrategyKind::DatabasePdf
    }

    fn applies(&self, ids: &DocumentIdentifiers) -> bool {
        ids.url.as_deref().is_some_and(|u| u.contains(".pdf"))
    }

    #[instrument(skip(self, ids), fields(url = ids.url.as_deref()))]
    async fn fetch(&self, ids: &DocumentIdentifiers) -> anyhow::Result<Option<FetchedDocument>> {
        let Some(ref url) = ids.url else {
            return Ok(None);
        };

        let resp = self.client.get(url).send().await?;
        if !resp.status().is_success() {
            debug!(status = %resp.status(), "PDF URL fetch rejected");
            return Ok(None);
        }

        let mime_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/pdf")
            .to_string();
        let bytes = resp.bytes().await?.to_vec();
        let size_bytes = bytes.len();

        Ok(Some(FetchedDocument {
            bytes,
            source: DocumentSource {
                kind: SourceKind::BibliographicDatabase,
                url: url.clone(),
                confidence: 0.88,
            },
            file_name: file_name_from_url(url),
            mime_type,
            size_bytes,
        }))
    }
}

// ── Generic direct fetch ──────────────────────────────────────────────────────

pub struct DirectFetch {
    client: PoliteClient,
}

impl DirectFetch {
    pub fn new(client: PoliteClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FetchStrategy for DirectFetch {
    fn kind(&self) -> StrategyKind {
        StrategyKind::DirectFetch
    }

    fn applies(&self, ids: &DocumentIdentifiers) -> bool {
        ids.url.as_deref().is_some_and(|u| !u.contains(".pdf"))
    }

    #[instrument(skip(self, ids), fields(url = ids.url.as_deref()))]
    async fn fetch(&self, ids: &DocumentIdentifiers) -> anyhow::Result<Option<FetchedDocument>> {
        let Some(ref url) = ids.url else {
            return Ok(None);
        };

        let resp = self.client.get(url).send().await?;
        if !resp.status().is_success() {
            debug!(status = %resp.status(), "Direct fetch rejected");
            return Ok(None);
        }

        let mime_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();

        // Only PDF or text content is analyzable; reject everything else.
        if !mime_type.contains("pdf") && !mime_type.contains("text") {
            debug!(mime_type, "Unusable content type from direct fetch");
            return Ok(None);
        }

        let bytes = resp.bytes().await?.to_vec();
        let size_bytes = bytes.len();

        Ok(Some(FetchedDocument {
            bytes,
            source: DocumentSource {
                kind: SourceKind::DirectLink,
                url: url.clone(),
                confidence: 0.75,
            },
            file_name: file_name_from_url(url),
            mime_type,
            size_bytes,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_from_url() {
        assert_eq!(
            file_name_from_url("https://host.org/papers/study.pdf"),
            "study.pdf"
        );
        assert_eq!(file_name_from_url("https://host.org/"), "document.pdf");
        assert_eq!(file_name_from_url("not a url"), "document.pdf");
    }

    #[test]
    fn test_applicability_split_on_pdf_extension() {
        let client = PoliteClient::new("Veridyx/0.1 (test)", std::time::Duration::from_secs(5)).unwrap();
        let pdf_strategy = DatabasePdfFetch::new(client.clone());
        let direct_strategy = DirectFetch::new(client);

        let pdf_ids = DocumentIdentifiers {
            url: Some("https://host.org/w/paper.pdf".to_string()),
            ..Default::default()
        };
        let landing_ids = DocumentIdentifiers {
            url: Some("https://host.org/w/paper".to_string()),
            ..Default::default()
        };

        assert!(pdf_strategy.applies(&pdf_ids));
        assert!(!pdf_strategy.applies(&landing_ids));
        assert!(!direct_strategy.applies(&pdf_ids));
        assert!(direct_strategy.applies(&landing_ids));
        assert!(!pdf_strategy.applies(&DocumentIdentifiers::default()));
    }
}
