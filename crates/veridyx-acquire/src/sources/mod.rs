//! Retrieval strategy clients.

pub mod direct;
pub mod openaccess;
pub mod preprint;

use async_trait::async_trait;

use crate::models::{DocumentIdentifiers, FetchedDocument};

/// Identifies a strategy in attempt reports and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    OpenAccessLookup,
    DatabasePdf,
    PreprintServer,
    DirectFetch,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::OpenAccessLookup => "open-access-lookup",
            StrategyKind::DatabasePdf      => "database-pdf",
            StrategyKind::PreprintServer   => "preprint-server",
            StrategyKind::DirectFetch      => "direct-fetch",
        }
    }
}

/// Common interface for all retrieval strategies.
///
/// `fetch` returns `Ok(None)` when the strategy ran but found nothing (e.g.
/// the lookup service reports no open-access location); errors carry the
/// reason a network attempt failed. Either way the chain proceeds to the
/// next strategy.
#[async_trait]
pub trait FetchStrategy: Send + Sync {
    fn kind(&self) -> StrategyKind;

    /// Whether the identifiers carry enough information to try this strategy.
    fn applies(&self, ids: &DocumentIdentifiers) -> bool;

    async fn fetch(&self, ids: &DocumentIdentifiers) -> anyhow::Result<Option<FetchedDocument>>;
}
