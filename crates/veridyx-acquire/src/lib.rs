//! veridyx-acquire — Document acquisition chain.
//!
//! Given bibliographic identifiers (DOI, URL, preprint id) and little or no
//! text, tries ordered retrieval strategies until one produces the source
//! document's bytes:
//!   1. Open-access lookup service by DOI (best location, then alternates)
//!   2. Direct PDF URL hosted on the bibliographic database
//!   3. Canonical preprint-server PDF
//!   4. Generic direct fetch (PDF/text content types only)
//!
//! Strategies run sequentially with early exit; a failed attempt is terminal
//! for that strategy. Every attempt's outcome is recorded so callers can
//! tell "not attempted" from "attempted and failed".

pub mod chain;
pub mod models;
pub mod sources;

pub use chain::{AcquisitionChain, AcquisitionReport, AttemptOutcome, StrategyAttempt};
pub use models::{DocumentIdentifiers, DocumentSource, FetchedDocument, SourceKind};
