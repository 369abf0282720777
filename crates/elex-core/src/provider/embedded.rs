//! Local text-layer provider using lopdf and pdf-extract.

use std::path::Path;

use async_trait::async_trait;
use lopdf::Document;
use tracing::{debug, warn};

use super::{DocumentTextProvider, Result};
use crate::error::ProviderError;

/// Reads the text layer a PDF already carries. Works offline, but scanned
/// reports without a text layer yield [`ProviderError::NoText`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTextProvider;

impl EmbeddedTextProvider {
    pub fn new() -> Self {
        Self
    }

    /// Extract text from PDF bytes.
    pub fn text_from_bytes(data: &[u8]) -> Result<String> {
        let mut doc = Document::load_mem(data).map_err(|e| ProviderError::Pdf(e.to_string()))?;

        // PDFs encrypted with an empty user password are still readable
        let decrypted;
        let bytes = if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(ProviderError::Pdf("document is encrypted".to_string()));
            }
            let mut buf = Vec::new();
            doc.save_to(&mut buf)
                .map_err(|e| ProviderError::Pdf(format!("failed to save decrypted PDF: {}", e)))?;
            decrypted = buf;
            &decrypted[..]
        } else {
            data
        };

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(ProviderError::Pdf("document has no pages".to_string()));
        }
        debug!("Loaded PDF with {} pages", page_count);

        let text = pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ProviderError::Pdf(e.to_string()))?;

        if text.trim().is_empty() {
            warn!("PDF has no embedded text layer");
            return Err(ProviderError::NoText);
        }
        Ok(text)
    }
}

#[async_trait]
impl DocumentTextProvider for EmbeddedTextProvider {
    fn name(&self) -> &'static str {
        "embedded"
    }

    async fn get_text(&self, path: &Path) -> Result<String> {
        let data = tokio::fs::read(path).await.map_err(|source| ProviderError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::text_from_bytes(&data)
    }
}
