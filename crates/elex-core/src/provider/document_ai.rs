//! Google Cloud Document AI provider.

use std::path::Path;

use async_trait::async_trait;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{DocumentTextProvider, Result};
use crate::error::ProviderError;
use crate::models::config::DocumentAiConfig;

/// Sends raw document bytes to a Document AI processor and returns the
/// recognized text.
pub struct DocumentAiProvider {
    client: reqwest::Client,
    process_url: String,
    api_key: Option<String>,
    access_token: Option<String>,
    mime_type: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProcessRequest<'a> {
    raw_document: RawDocument<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RawDocument<'a> {
    content: String,
    mime_type: &'a str,
}

#[derive(Deserialize)]
struct ProcessResponse {
    document: Option<ResponseDocument>,
}

#[derive(Deserialize)]
struct ResponseDocument {
    #[serde(default)]
    text: String,
}

impl DocumentAiProvider {
    /// Build a provider from configuration.
    ///
    /// Fails with [`ProviderError::ConfigurationMissing`] when the project or
    /// processor ID is absent.
    pub fn from_config(config: &DocumentAiConfig) -> Result<Self> {
        let missing = config.missing_identifiers();
        if !missing.is_empty() {
            return Err(ProviderError::ConfigurationMissing { missing });
        }

        let project_id = config.project_id.as_deref().unwrap_or_default();
        let processor_id = config.processor_id.as_deref().unwrap_or_default();

        let client = reqwest::Client::builder()
            .user_agent(concat!("elex/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let process_url =
            process_url(&config.base_url(), project_id, &config.location, processor_id);

        Ok(Self {
            client,
            process_url,
            api_key: config.api_key.clone(),
            access_token: config.access_token.clone(),
            mime_type: config.mime_type.clone(),
        })
    }

    /// Full `:process` URL of the configured processor.
    pub fn process_url(&self) -> &str {
        &self.process_url
    }
}

#[async_trait]
impl DocumentTextProvider for DocumentAiProvider {
    fn name(&self) -> &'static str {
        "document-ai"
    }

    async fn get_text(&self, path: &Path) -> Result<String> {
        let content = tokio::fs::read(path).await.map_err(|source| ProviderError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("Sending {} bytes from {} to Document AI", content.len(), path.display());

        let body = ProcessRequest {
            raw_document: RawDocument {
                content: base64::engine::general_purpose::STANDARD.encode(&content),
                mime_type: &self.mime_type,
            },
        };

        let mut request = self.client.post(&self.process_url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key)]);
        }
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let payload = response.text().await?;

        if !status.is_success() {
            return Err(ProviderError::Service {
                status: status.as_u16(),
                body: payload,
            });
        }

        let text = parse_response(&payload)?;
        info!("Document AI returned {} characters for {}", text.len(), path.display());
        Ok(text)
    }
}

fn process_url(base_url: &str, project_id: &str, location: &str, processor_id: &str) -> String {
    format!(
        "{}/v1/projects/{}/locations/{}/processors/{}:process",
        base_url, project_id, location, processor_id
    )
}

/// Pull `document.text` out of a process response body.
fn parse_response(body: &str) -> Result<String> {
    let response: ProcessResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::Decode(e.to_string()))?;
    response
        .document
        .map(|d| d.text)
        .ok_or_else(|| ProviderError::Decode("response has no document".to_string()))
}
