//! veridyx-ingestion — Document resolution pipeline.
//! Covers:
//! - Text extraction (PDF text layer, DOCX package, plain text)
//! - Normalization of extracted text
//! - Section-aware chunking
//! - Token-budgeted relevance selection

pub mod chunker;
pub mod extract;
pub mod models;
pub mod normalise;
pub mod process;
