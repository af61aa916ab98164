//! Runtime configuration for the analysis pipeline.
//!
//! Loaded from TOML; every section has working defaults so a missing or
//! partial config file still yields a usable pipeline.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::VeridyxError;

/// Complete pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Document acquisition settings
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Chunking parameters
    #[serde(default)]
    pub chunking: ChunkingConfig,

    /// Token budget for chunk selection
    #[serde(default = "default_selection_budget_tokens")]
    pub selection_budget_tokens: usize,

    /// Character cap on document text embedded in the assessment prompt
    #[serde(default = "default_prompt_char_cap")]
    pub prompt_char_cap: usize,

    /// Below this many characters of analysis text, fall back to the
    /// abstract-only assessment path.
    #[serde(default = "default_abstract_only_threshold")]
    pub abstract_only_threshold: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            fetch: FetchConfig::default(),
            chunking: ChunkingConfig::default(),
            selection_budget_tokens: default_selection_budget_tokens(),
            prompt_char_cap: default_prompt_char_cap(),
            abstract_only_threshold: default_abstract_only_threshold(),
        }
    }
}

impl AnalysisConfig {
    /// Parse a TOML document into a config.
    pub fn from_toml_str(s: &str) -> Result<Self, VeridyxError> {
        toml::from_str(s).map_err(|e| VeridyxError::Config(format!("Invalid config TOML: {}", e)))
    }
}

// ── Fetch ─────────────────────────────────────────────────────────────────────

/// Settings for outbound document retrieval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Identifier string sent as User-Agent on every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Contact address reported to the open-access lookup service.
    #[serde(default = "default_contact_email")]
    pub contact_email: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Documents larger than this are discarded after fetch.
    #[serde(default = "default_max_size_bytes")]
    pub max_size_bytes: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            contact_email: default_contact_email(),
            timeout_secs: default_timeout_secs(),
            max_size_bytes: default_max_size_bytes(),
        }
    }
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// ── Chunking ──────────────────────────────────────────────────────────────────

/// Parameters for the section-aware chunker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Maximum tokens per chunk (token ≈ 4 characters).
    #[serde(default = "default_max_chunk_tokens")]
    pub max_chunk_tokens: usize,

    /// Token overlap carried between consecutive chunks.
    #[serde(default = "default_overlap_tokens")]
    pub overlap_tokens: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_chunk_tokens: default_max_chunk_tokens(),
            overlap_tokens: default_overlap_tokens(),
        }
    }
}

// ── Defaults ──────────────────────────────────────────────────────────────────

fn default_user_agent() -> String {
    "Veridyx/0.1 (mailto:veridyx@example.com)".to_string()
}

fn default_contact_email() -> String {
    "veridyx@example.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_size_bytes() -> usize {
    50 * 1024 * 1024
}

fn default_max_chunk_tokens() -> usize {
    3000
}

fn default_overlap_tokens() -> usize {
    500
}

fn default_selection_budget_tokens() -> usize {
    10_000
}

fn default_prompt_char_cap() -> usize {
    150_000
}

fn default_abstract_only_threshold() -> usize {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AnalysisConfig::default();
        assert_eq!(cfg.fetch.timeout_secs, 30);
        assert_eq!(cfg.fetch.max_size_bytes, 50 * 1024 * 1024);
        assert_eq!(cfg.chunking.max_chunk_tokens, 3000);
        assert_eq!(cfg.chunking.overlap_tokens, 500);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let cfg = AnalysisConfig::from_toml_str(
            r#"
            [fetch]
            timeout_secs = 10
            "#,
        )
        .unwrap();
        assert_eq!(cfg.fetch.timeout_secs, 10);
        assert_eq!(cfg.fetch.max_size_bytes, 50 * 1024 * 1024);
        assert_eq!(cfg.chunking.max_chunk_tokens, 3000);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AnalysisConfig::from_toml_str("fetch = 42").unwrap_err();
        assert!(matches!(err, VeridyxError::Config(_)));
    }
}
