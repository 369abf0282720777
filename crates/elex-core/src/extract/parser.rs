//! Best-effort extraction of the four result fields from raw document text.

use serde::Serialize;
use tracing::debug;

use crate::models::record::ExtractionRecord;

use super::rules::{
    collapse_whitespace, constituency_spec, electors_spec, nota_spec, valid_votes_spec, Field,
    FieldExtractor, FieldMatch, FieldSpec,
};

/// Record plus the rule matches that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionDetail {
    /// Extracted record.
    pub record: ExtractionRecord,
    /// Winning match per field; fields without a match are absent.
    pub matches: Vec<FieldMatch>,
    /// Fields that matched no rule.
    pub missing: Vec<Field>,
    /// Validated candidates that lost to a higher-priority rule. Only
    /// filled by [`ElectoralExtractor::explain`].
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub outranked: Vec<FieldMatch>,
}

/// Pattern-based extractor for electoral result reports.
///
/// Extraction is a pure function of the input text: unmatched fields become
/// empty strings and nothing is ever raised.
#[derive(Debug, Clone)]
pub struct ElectoralExtractor {
    specs: Vec<FieldSpec>,
}

impl ElectoralExtractor {
    /// Create an extractor with the built-in rule sets.
    pub fn new() -> Self {
        Self {
            specs: vec![
                constituency_spec(),
                electors_spec(),
                valid_votes_spec(),
                nota_spec(),
            ],
        }
    }

    /// Extract a record from raw text.
    pub fn extract(&self, raw_text: &str, source_id: &str) -> ExtractionRecord {
        self.extract_detailed(raw_text, source_id).record
    }

    /// Extract a record and keep the winning match for each field.
    pub fn extract_detailed(&self, raw_text: &str, source_id: &str) -> ExtractionDetail {
        let text = collapse_whitespace(raw_text);
        let mut record = ExtractionRecord::empty(source_id);
        let mut matches = Vec::with_capacity(self.specs.len());
        let mut missing = Vec::new();

        for spec in &self.specs {
            match spec.extract(&text) {
                Some(m) => {
                    debug!("{}: {:?} via rule {} ({:?})", spec.field, m.value, m.rule, m.source);
                    *slot(&mut record, spec.field) = m.value.clone();
                    matches.push(m);
                }
                None => {
                    debug!("{}: no match in {}", spec.field, source_id);
                    missing.push(spec.field);
                }
            }
        }

        ExtractionDetail {
            record,
            matches,
            missing,
            outranked: Vec::new(),
        }
    }

    /// Like [`Self::extract_detailed`], also listing every lower-priority
    /// candidate that validated but lost to the winning rule.
    pub fn explain(&self, raw_text: &str, source_id: &str) -> ExtractionDetail {
        let mut detail = self.extract_detailed(raw_text, source_id);
        let text = collapse_whitespace(raw_text);

        for spec in &self.specs {
            let mut candidates = spec.extract_all(&text).into_iter();
            // The first validated candidate is the winner already in `matches`.
            candidates.next();
            detail.outranked.extend(candidates);
        }

        detail
    }
}

impl Default for ElectoralExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn slot(record: &mut ExtractionRecord, field: Field) -> &mut String {
    match field {
        Field::ConstituencyName => &mut record.constituency_name,
        Field::TotalElectors => &mut record.total_electors,
        Field::ValidVotesPolled => &mut record.valid_votes_polled,
        Field::NotaVotes => &mut record.nota_votes,
    }
}
