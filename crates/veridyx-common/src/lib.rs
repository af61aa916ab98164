//! veridyx-common — Shared error type, HTTP client, and runtime configuration
//! used across all Veridyx crates.

pub mod config;
pub mod error;
pub mod http;

// Re-export commonly used types
pub use config::{AnalysisConfig, ChunkingConfig, FetchConfig};
pub use error::{Result, VeridyxError};
pub use http::PoliteClient;
