//! External assessor boundary.
//!
//! The LLM performing the actual assessment is an out-of-process
//! collaborator: it receives the structured prompt and returns raw
//! completion text expected to contain one JSON object. Implementations
//! live with the consumer; the pipeline only depends on this trait.

use async_trait::async_trait;

/// An external assessor that turns a prompt into raw completion text.
#[async_trait]
pub trait AssessmentBackend: Send + Sync {
    async fn assess(&self, prompt: &str) -> anyhow::Result<String>;
}
