//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration for an elex run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElexConfig {
    /// Document AI service configuration.
    pub document_ai: DocumentAiConfig,

    /// Input and output locations.
    pub paths: PathsConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,
}

/// Google Cloud Document AI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentAiConfig {
    /// GCP project ID.
    pub project_id: Option<String>,

    /// Processor location (e.g. "us", "eu").
    pub location: String,

    /// Document AI processor ID.
    pub processor_id: Option<String>,

    /// API key, sent as the `key` query parameter.
    pub api_key: Option<String>,

    /// OAuth access token, sent as a bearer token.
    pub access_token: Option<String>,

    /// Override for the service base URL.
    pub endpoint: Option<String>,

    /// MIME type sent with the raw document.
    pub mime_type: String,
}

impl Default for DocumentAiConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            location: "us".to_string(),
            processor_id: None,
            api_key: None,
            access_token: None,
            endpoint: None,
            mime_type: "application/pdf".to_string(),
        }
    }
}

impl DocumentAiConfig {
    /// Names of the required identifiers that are not set.
    pub fn missing_identifiers(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_blank(&self.project_id) {
            missing.push("project_id");
        }
        if is_blank(&self.processor_id) {
            missing.push("processor_id");
        }
        missing
    }

    /// Whether project and processor are both configured.
    pub fn is_configured(&self) -> bool {
        self.missing_identifiers().is_empty()
    }

    /// Base URL of the regional service endpoint.
    pub fn base_url(&self) -> String {
        match &self.endpoint {
            Some(endpoint) if !endpoint.trim().is_empty() => {
                endpoint.trim_end_matches('/').to_string()
            }
            _ => format!("https://{}-documentai.googleapis.com", self.location),
        }
    }
}

/// File locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory scanned for input documents.
    pub input_dir: PathBuf,

    /// Directory the result table is written to.
    pub output_dir: PathBuf,

    /// File name of the result table.
    pub output_file: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("output"),
            output_file: "extracted_data.csv".to_string(),
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Human-readable names of the extracted fields. Informational only;
    /// the pattern rules are fixed.
    pub fields: Vec<String>,

    /// File extension of input documents, matched case-insensitively.
    pub document_extension: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            fields: vec![
                "Constituency Name".to_string(),
                "Total number of electors".to_string(),
                "Total number of valid votes polled".to_string(),
                "Total number of votes for 'None of the Above'".to_string(),
            ],
            document_extension: "pdf".to_string(),
        }
    }
}

impl ElexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }

    /// Overlay values from environment-style variables.
    ///
    /// `lookup` is usually `|k| std::env::var(k).ok()`; empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get("PROJECT_ID") {
            self.document_ai.project_id = Some(v);
        }
        if let Some(v) = get("LOCATION") {
            self.document_ai.location = v;
        }
        if let Some(v) = get("PROCESSOR_ID") {
            self.document_ai.processor_id = Some(v);
        }
        if let Some(v) = get("GCP_API_KEY") {
            self.document_ai.api_key = Some(v);
        }
        if let Some(v) = get("GCP_ACCESS_TOKEN") {
            self.document_ai.access_token = Some(v);
        }
        if let Some(v) = get("DOCUMENT_AI_ENDPOINT") {
            self.document_ai.endpoint = Some(v);
        }
        if let Some(v) = get("PDF_FOLDER") {
            self.paths.input_dir = PathBuf::from(v);
        }
        if let Some(v) = get("OUTPUT_FOLDER") {
            self.paths.output_dir = PathBuf::from(v);
        }
        if let Some(v) = get("OUTPUT_FILE") {
            self.paths.output_file = v;
        }
    }

    /// Full path of the result table.
    pub fn output_path(&self) -> PathBuf {
        self.paths.output_dir.join(&self.paths.output_file)
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ElexConfig::default();
        assert_eq!(config.document_ai.location, "us");
        assert_eq!(config.output_path(), PathBuf::from("output").join("extracted_data.csv"));
        assert_eq!(config.extraction.fields.len(), 4);
        assert!(!config.document_ai.is_configured());
    }

    #[test]
    fn test_apply_env_overlay() {
        let vars: HashMap<&str, &str> = [
            ("PROJECT_ID", "my-project"),
            ("PROCESSOR_ID", "abc123"),
            ("LOCATION", "eu"),
            ("PDF_FOLDER", "reports"),
            ("OUTPUT_FILE", "results.json"),
            ("GCP_API_KEY", "  "),
        ]
        .into_iter()
        .collect();

        let mut config = ElexConfig::default();
        config.apply_env(|k| vars.get(k).map(|v| v.to_string()));

        assert!(config.document_ai.is_configured());
        assert_eq!(config.document_ai.location, "eu");
        assert_eq!(config.document_ai.api_key, None);
        assert_eq!(config.paths.input_dir, PathBuf::from("reports"));
        assert_eq!(config.output_path(), PathBuf::from("output").join("results.json"));
        assert_eq!(
            config.document_ai.base_url(),
            "https://eu-documentai.googleapis.com"
        );
    }

    #[test]
    fn test_missing_identifiers() {
        let mut config = DocumentAiConfig::default();
        assert_eq!(config.missing_identifiers(), vec!["project_id", "processor_id"]);

        config.project_id = Some("p".to_string());
        config.processor_id = Some(" ".to_string());
        assert_eq!(config.missing_identifiers(), vec!["processor_id"]);
    }

    #[test]
    fn test_endpoint_override() {
        let config = DocumentAiConfig {
            endpoint: Some("http://localhost:8080/".to_string()),
            ..Default::default()
        };
        assert_eq!(config.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_file_roundtrip_with_partial_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "paths": { "input_dir": "scans" } }"#).unwrap();

        let config = ElexConfig::from_file(&path).unwrap();
        assert_eq!(config.paths.input_dir, PathBuf::from("scans"));
        assert_eq!(config.paths.output_file, "extracted_data.csv");

        config.save(&path).unwrap();
        assert_eq!(ElexConfig::from_file(&path).unwrap(), config);
    }
}
