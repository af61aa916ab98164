//! Preprint-server PDF client.
//!
//! Preprint URLs are deterministic given the numeric id, which makes this
//! the most reliable retrieval path:
//!   https://arxiv.org/pdf/{id}.pdf
//!
//! Ids may arrive bare ("2401.01234v2") or embedded in an abs/ URL; any
//! version suffix is stripped before building the canonical PDF URL.

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, instrument};
use veridyx_common::PoliteClient;

use super::{FetchStrategy, StrategyKind};
use crate::models::{DocumentIdentifiers, DocumentSource, FetchedDocument, SourceKind};

lazy_static! {
    static ref PREPRINT_ID: Regex =
        Regex::new(r"(?i)(?:arxiv\.org/abs/)?([0-9]{4}\.[0-9]{4,5}(?:v[0-9]+)?)").unwrap();
    static ref VERSION_SUFFIX: Regex = Regex::new(r"v[0-9]+$").unwrap();
}

/// Extract a preprint id from a bare id or an abs/ URL, version stripped.
pub fn extract_preprint_id(text: &str) -> Option<String> {
    PREPRINT_ID
        .captures(text)
        .map(|caps| VERSION_SUFFIX.replace(&caps[1], "").into_owned())
}

pub struct PreprintFetch {
    client: PoliteClient,
}

impl PreprintFetch {
    pub fn new(client: PoliteClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FetchStrategy for PreprintFetch {
    fn kind(&self) -> StrategyKind {
        StrategyKind::PreprintServer
    }

    fn applies(&self, ids: &DocumentIdentifiers) -> bool {
        ids.preprint_id
            .as_deref()
            .and_then(extract_preprint_id)
            .is_some()
    }

    #[instrument(skip(self, ids), fields(preprint_id = ids.preprint_id.as_deref()))]
    async fn fetch(&self, ids: &DocumentIdentifiers) -> anyhow::Result<Option<FetchedDocument>> {
        let Some(id) = ids.preprint_id.as_deref().and_then(extract_preprint_id) else {
            return Ok(None);
        };

        let url = format!("https://arxiv.org/pdf/{}.pdf", id);
        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            debug!(status = %resp.status(), "Preprint server rejected request");
            return Ok(None);
        }

        let bytes = resp.bytes().await?.to_vec();
        let size_bytes = bytes.len();

        Ok(Some(FetchedDocument {
            bytes,
            source: DocumentSource {
                kind: SourceKind::PreprintServer,
                url,
                confidence: 0.95,
            },
            file_name: format!("{}.pdf", id),
            mime_type: "application/pdf".to_string(),
            size_bytes,
        }))
    }
}
