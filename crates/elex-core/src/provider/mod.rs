//! Document text providers.
//!
//! A provider turns one input document into plain text. The batch run only
//! sees the [`DocumentTextProvider`] trait; which implementation backs it is
//! decided once by the caller.

#[cfg(feature = "document-ai")]
mod document_ai;
#[cfg(feature = "embedded-pdf")]
mod embedded;
mod synthetic;

#[cfg(feature = "document-ai")]
pub use document_ai::DocumentAiProvider;
#[cfg(feature = "embedded-pdf")]
pub use embedded::EmbeddedTextProvider;
pub use synthetic::SyntheticTextProvider;

use std::path::Path;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::error::{ElexError, ProviderError};
use crate::models::config::ElexConfig;

/// Result type for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;

/// Source of plain text for a document.
#[async_trait]
pub trait DocumentTextProvider: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Produce the text of the document at `path`.
    async fn get_text(&self, path: &Path) -> Result<String>;
}

/// Which provider to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    /// Document AI when configured, synthetic text otherwise.
    #[default]
    Auto,
    /// Google Cloud Document AI.
    DocumentAi,
    /// Deterministic stand-in text derived from the file name.
    Synthetic,
    /// Text layer embedded in the PDF, read locally.
    Embedded,
}

/// Construct the provider selected by `kind`.
///
/// `Auto` never fails: a missing or unusable Document AI configuration
/// degrades to synthetic text with a warning. Asking for a specific provider
/// that cannot be built is an error.
pub fn build_provider(
    kind: ProviderKind,
    config: &ElexConfig,
) -> std::result::Result<Box<dyn DocumentTextProvider>, ElexError> {
    match kind {
        ProviderKind::Auto => Ok(auto_provider(config)),
        ProviderKind::DocumentAi => document_ai_provider(config),
        ProviderKind::Synthetic => Ok(Box::new(SyntheticTextProvider::new())),
        ProviderKind::Embedded => embedded_provider(),
    }
}

#[cfg(feature = "document-ai")]
fn auto_provider(config: &ElexConfig) -> Box<dyn DocumentTextProvider> {
    match DocumentAiProvider::from_config(&config.document_ai) {
        Ok(provider) => {
            info!("Using Document AI processor at {}", config.document_ai.base_url());
            Box::new(provider)
        }
        Err(e) => {
            warn!("{}; falling back to synthetic text", e);
            Box::new(SyntheticTextProvider::new())
        }
    }
}

#[cfg(not(feature = "document-ai"))]
fn auto_provider(_config: &ElexConfig) -> Box<dyn DocumentTextProvider> {
    warn!("Document AI support not compiled in; falling back to synthetic text");
    Box::new(SyntheticTextProvider::new())
}

#[cfg(feature = "document-ai")]
fn document_ai_provider(
    config: &ElexConfig,
) -> std::result::Result<Box<dyn DocumentTextProvider>, ElexError> {
    Ok(Box::new(DocumentAiProvider::from_config(&config.document_ai)?))
}

#[cfg(not(feature = "document-ai"))]
fn document_ai_provider(
    _config: &ElexConfig,
) -> std::result::Result<Box<dyn DocumentTextProvider>, ElexError> {
    Err(ElexError::Config(
        "built without the `document-ai` feature".to_string(),
    ))
}

#[cfg(feature = "embedded-pdf")]
fn embedded_provider() -> std::result::Result<Box<dyn DocumentTextProvider>, ElexError> {
    Ok(Box::new(EmbeddedTextProvider::new()))
}

#[cfg(not(feature = "embedded-pdf"))]
fn embedded_provider() -> std::result::Result<Box<dyn DocumentTextProvider>, ElexError> {
    Err(ElexError::Config(
        "built without the `embedded-pdf` feature".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_without_credentials_is_synthetic() {
        let provider = build_provider(ProviderKind::Auto, &ElexConfig::default()).unwrap();
        assert_eq!(provider.name(), "synthetic");
    }

    #[cfg(feature = "document-ai")]
    #[test]
    fn test_explicit_document_ai_without_credentials_fails() {
        let err = build_provider(ProviderKind::DocumentAi, &ElexConfig::default())
            .err()
            .unwrap();
        assert!(matches!(
            err,
            ElexError::Provider(ProviderError::ConfigurationMissing { .. })
        ));
    }

    #[cfg(feature = "document-ai")]
    #[test]
    fn test_auto_with_credentials_is_document_ai() {
        let mut config = ElexConfig::default();
        config.document_ai.project_id = Some("proj".to_string());
        config.document_ai.processor_id = Some("proc".to_string());

        let provider = build_provider(ProviderKind::Auto, &config).unwrap();
        assert_eq!(provider.name(), "document-ai");
    }
}
