//! Core library for electoral result extraction.
//!
//! This crate provides:
//! - Rule-based field extraction (constituency name, electors, valid votes, NOTA)
//! - Document text providers (Document AI, embedded PDF text, synthetic stand-in)
//! - A sequential batch orchestrator over a directory of reports
//! - Tabular export of the extracted records (CSV, JSON)

pub mod batch;
pub mod error;
pub mod export;
pub mod extract;
pub mod models;
pub mod provider;

pub use batch::{BatchOutcome, BatchProcessor, BatchReport, DocumentFailure, Progress};
pub use error::{ElexError, ExportError, ProviderError, Result};
pub use export::{render_csv, ExportFormat, ExportOutcome, TabularExporter};
pub use extract::{ElectoralExtractor, ExtractionDetail, Field, FieldMatch};
pub use models::config::ElexConfig;
pub use models::record::ExtractionRecord;
pub use provider::{build_provider, DocumentTextProvider, ProviderKind, SyntheticTextProvider};

#[cfg(feature = "document-ai")]
pub use provider::DocumentAiProvider;

#[cfg(feature = "embedded-pdf")]
pub use provider::EmbeddedTextProvider;
