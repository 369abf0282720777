//! Error types for the elex-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the elex library.
#[derive(Error, Debug)]
pub enum ElexError {
    /// Document text provider error.
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Tabular export error.
    #[error("export error: {0}")]
    Export(#[from] ExportError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while obtaining text for a document.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Required Document AI identifiers are absent.
    #[error("missing Document AI configuration: {}", missing.join(", "))]
    ConfigurationMissing { missing: Vec<&'static str> },

    /// The document could not be read from disk.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Transport-level failure talking to the document service.
    #[cfg(feature = "document-ai")]
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The document service answered with a non-success status.
    #[error("service returned {status}: {body}")]
    Service { status: u16, body: String },

    /// The service response could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The PDF could not be parsed locally.
    #[error("failed to parse PDF: {0}")]
    Pdf(String),

    /// The provider produced no text for the document.
    #[error("no text extracted")]
    NoText,
}

/// Errors raised while writing the result table.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Filesystem error creating or writing the destination.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the elex library.
pub type Result<T> = std::result::Result<T, ElexError>;
