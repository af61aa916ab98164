//! veridyx-analysis — End-to-end analysis pipeline.
//!
//! Orchestrates the full flow for a single analysis request:
//!   1. Resolve the document (supplied text, acquisition chain, or abstract)
//!   2. Extract, normalize, and chunk the text
//!   3. Classify document type and academic field
//!   4. Derive the adaptive assessment framework
//!   5. Build the prompt and call the external assessor
//!   6. Validate the returned credibility score
//!
//! Every stage short of the final validation degrades quietly: acquisition
//! and extraction failures fall back to abstract-only analysis rather than
//! surfacing errors.

pub mod pipeline;
pub mod request;
pub mod result;

pub use pipeline::{analyze, analyze_upload};
pub use request::AnalysisRequest;
pub use result::AnalysisOutcome;
