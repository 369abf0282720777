//! Sequential batch run over a directory of result reports.

use std::path::{Path, PathBuf};

use glob::{glob, Pattern};
use tracing::{debug, info, warn};

use crate::error::ProviderError;
use crate::extract::ElectoralExtractor;
use crate::models::record::ExtractionRecord;
use crate::provider::DocumentTextProvider;

/// A document that produced no record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Results of a batch run over a non-empty input set.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// One record per document that yielded text, in enumeration order.
    pub records: Vec<ExtractionRecord>,
    /// Documents skipped because no text could be obtained.
    pub failures: Vec<DocumentFailure>,
    /// Number of matching documents found.
    pub discovered: usize,
}

impl BatchReport {
    pub fn processed(&self) -> usize {
        self.records.len()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Records with at least one extracted field.
    pub fn with_data(&self) -> usize {
        self.records.iter().filter(|r| r.has_data()).count()
    }
}

/// Outcome of [`BatchProcessor::process_all`].
#[derive(Debug, Clone)]
pub enum BatchOutcome {
    /// The input directory does not exist.
    MissingDirectory(PathBuf),
    /// The input directory holds no matching documents.
    NoDocuments(PathBuf),
    /// At least one document was attempted.
    Completed(BatchReport),
}

/// Progress notifications emitted during a run.
#[derive(Debug, Clone, Copy)]
pub enum Progress<'a> {
    /// Matching documents were found.
    Discovered(usize),
    /// A document finished, successfully or not.
    Processed {
        index: usize,
        path: &'a Path,
        succeeded: bool,
    },
}

/// Runs the provider and extractor over every matching document, one at a time.
pub struct BatchProcessor {
    provider: Box<dyn DocumentTextProvider>,
    extractor: ElectoralExtractor,
    extension: String,
}

impl BatchProcessor {
    /// Create a processor for `.pdf` documents.
    pub fn new(provider: Box<dyn DocumentTextProvider>, extractor: ElectoralExtractor) -> Self {
        Self {
            provider,
            extractor,
            extension: "pdf".to_string(),
        }
    }

    /// Set the document extension (without the dot), matched case-insensitively.
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_lowercase();
        self
    }

    /// Name of the underlying provider.
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Matching regular files directly inside `dir`, in alphabetical order.
    pub fn discover(&self, dir: &Path) -> Vec<PathBuf> {
        let pattern = format!("{}/*", Pattern::escape(&dir.to_string_lossy()));

        let paths = match glob(&pattern) {
            Ok(paths) => paths,
            Err(e) => {
                warn!("Invalid input directory pattern {}: {}", pattern, e);
                return Vec::new();
            }
        };

        paths
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .filter(|p| {
                p.extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| e.to_lowercase() == self.extension)
            })
            .collect()
    }

    /// Process every matching document in `dir`.
    pub async fn process_all(&self, dir: &Path) -> BatchOutcome {
        self.process_all_with_progress(dir, |_| {}).await
    }

    /// Process every matching document, reporting progress to `on_progress`.
    ///
    /// A document whose text cannot be obtained is logged and skipped; it
    /// never aborts the run.
    pub async fn process_all_with_progress<F>(&self, dir: &Path, mut on_progress: F) -> BatchOutcome
    where
        F: FnMut(Progress<'_>),
    {
        if !dir.is_dir() {
            warn!("Input directory {} not found", dir.display());
            return BatchOutcome::MissingDirectory(dir.to_path_buf());
        }

        let files = self.discover(dir);
        if files.is_empty() {
            warn!("No .{} files found in {}", self.extension, dir.display());
            return BatchOutcome::NoDocuments(dir.to_path_buf());
        }

        info!(
            "Found {} documents in {} (provider: {})",
            files.len(),
            dir.display(),
            self.provider.name()
        );
        on_progress(Progress::Discovered(files.len()));

        let mut report = BatchReport {
            discovered: files.len(),
            ..Default::default()
        };

        for (index, path) in files.iter().enumerate() {
            debug!("Processing {}/{}: {}", index + 1, files.len(), path.display());

            let succeeded = match self.document_text(path).await {
                Ok(text) => {
                    let source_id = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    report.records.push(self.extractor.extract(&text, &source_id));
                    true
                }
                Err(e) => {
                    warn!("Failed to extract text from {}: {}", path.display(), e);
                    report.failures.push(DocumentFailure {
                        path: path.clone(),
                        reason: e.to_string(),
                    });
                    false
                }
            };

            on_progress(Progress::Processed {
                index,
                path,
                succeeded,
            });
        }

        info!(
            "Batch finished: {} records, {} failed",
            report.processed(),
            report.failed()
        );
        BatchOutcome::Completed(report)
    }

    async fn document_text(&self, path: &Path) -> Result<String, ProviderError> {
        let text = self.provider.get_text(path).await?;
        if text.is_empty() {
            return Err(ProviderError::NoText);
        }
        Ok(text)
    }
}
