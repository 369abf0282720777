//! Deterministic stand-in for environments without service credentials.

use std::path::Path;

use async_trait::async_trait;
use tracing::debug;

use super::{DocumentTextProvider, Result};

/// Synthesizes a plausible result report from the document's file name.
///
/// `north_ward.pdf` becomes a report for "North Ward" with fixed counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntheticTextProvider;

impl SyntheticTextProvider {
    pub fn new() -> Self {
        Self
    }

    /// Report text for the given constituency.
    pub fn report_for(constituency: &str) -> String {
        format!(
            "Electoral Results Report\n\n\
             Constituency Name: {constituency}\n\n\
             Election Summary:\n\
             Total number of electors: 45,678\n\
             Total number of valid votes polled: 38,234\n\
             Total number of votes for 'None of the Above': 1,234\n\n\
             Additional details...\n"
        )
    }
}

#[async_trait]
impl DocumentTextProvider for SyntheticTextProvider {
    fn name(&self) -> &'static str {
        "synthetic"
    }

    async fn get_text(&self, path: &Path) -> Result<String> {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        debug!("Synthesizing text for {}", path.display());
        Ok(Self::report_for(&title_case(&stem.replace('_', " "))))
    }
}

/// Upper-case the first letter of each word and lower-case the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
