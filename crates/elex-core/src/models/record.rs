//! The per-document extraction record.

use serde::{Deserialize, Serialize};

/// Fields extracted from one electoral result report.
///
/// Every field is always present. A field that could not be extracted is the
/// empty string; numeric fields hold plain digit strings without separators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRecord {
    /// Source document identifier (file name).
    #[serde(rename = "Filename")]
    pub source_identifier: String,

    /// Constituency name.
    #[serde(rename = "Constituency Name")]
    pub constituency_name: String,

    /// Total number of electors.
    #[serde(rename = "Total Electors")]
    pub total_electors: String,

    /// Total number of valid votes polled.
    #[serde(rename = "Valid Votes Polled")]
    pub valid_votes_polled: String,

    /// Votes for "None of the Above".
    #[serde(rename = "NOTA Votes")]
    pub nota_votes: String,
}

impl ExtractionRecord {
    /// Column headers, in export order.
    pub const HEADERS: [&'static str; 5] = [
        "Filename",
        "Constituency Name",
        "Total Electors",
        "Valid Votes Polled",
        "NOTA Votes",
    ];

    /// Create an empty record for a source document.
    pub fn empty(source_identifier: impl Into<String>) -> Self {
        Self {
            source_identifier: source_identifier.into(),
            ..Default::default()
        }
    }

    /// Values in the same order as [`Self::HEADERS`].
    pub fn row(&self) -> [&str; 5] {
        [
            self.source_identifier.as_str(),
            self.constituency_name.as_str(),
            self.total_electors.as_str(),
            self.valid_votes_polled.as_str(),
            self.nota_votes.as_str(),
        ]
    }

    /// Whether any of the four extracted fields is non-empty.
    pub fn has_data(&self) -> bool {
        !(self.constituency_name.is_empty()
            && self.total_electors.is_empty()
            && self.valid_votes_polled.is_empty()
            && self.nota_votes.is_empty())
    }

    /// Report cross-field inconsistencies (NOTA <= valid votes <= electors).
    ///
    /// Only fields that parse as integers take part. The record is never
    /// altered; callers decide whether to surface the issues.
    pub fn consistency_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        let electors = self.total_electors.parse::<u64>().ok();
        let valid = self.valid_votes_polled.parse::<u64>().ok();
        let nota = self.nota_votes.parse::<u64>().ok();

        if let (Some(valid), Some(electors)) = (valid, electors) {
            if valid > electors {
                issues.push(format!(
                    "valid votes polled ({}) exceed total electors ({})",
                    valid, electors
                ));
            }
        }

        if let (Some(nota), Some(valid)) = (nota, valid) {
            if nota > valid {
                issues.push(format!(
                    "NOTA votes ({}) exceed valid votes polled ({})",
                    nota, valid
                ));
            }
        } else if let (Some(nota), Some(electors)) = (nota, electors) {
            if nota > electors {
                issues.push(format!(
                    "NOTA votes ({}) exceed total electors ({})",
                    nota, electors
                ));
            }
        }

        issues
    }
}
