//! Rule-based field extractors for electoral result reports.

pub mod constituency;
pub mod counts;
pub mod normalize;
pub mod patterns;

pub use constituency::{constituency_spec, is_plausible_name};
pub use counts::{electors_spec, nota_spec, valid_votes_spec};
pub use normalize::{collapse_whitespace, strip_grouping_separators};

use regex::Regex;
use serde::Serialize;
use tracing::{debug, trace};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract every candidate that passes validation, in priority order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// The four fields extracted from each report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    ConstituencyName,
    TotalElectors,
    ValidVotesPolled,
    NotaVotes,
}

impl Field {
    /// All fields, in record order.
    pub const ALL: [Field; 4] = [
        Field::ConstituencyName,
        Field::TotalElectors,
        Field::ValidVotesPolled,
        Field::NotaVotes,
    ];

    /// Column header used in exports.
    pub fn label(&self) -> &'static str {
        match self {
            Field::ConstituencyName => "Constituency Name",
            Field::TotalElectors => "Total Electors",
            Field::ValidVotesPolled => "Valid Votes Polled",
            Field::NotaVotes => "NOTA Votes",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated value together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldMatch {
    /// Field the value belongs to.
    pub field: Field,
    /// Post-processed value.
    pub value: String,
    /// Index of the rule that produced the value (0 = highest priority).
    pub rule: usize,
    /// Source text that was matched.
    pub source: String,
    /// Byte range of the match in the normalized text.
    pub position: (usize, usize),
}

/// One candidate-match expression plus its validation predicate.
#[derive(Clone, Copy)]
pub struct PatternRule {
    /// Pattern whose first capture group is the candidate.
    pub pattern: &'static Regex,
    /// Predicate the trimmed candidate must satisfy.
    pub validate: fn(&str) -> bool,
}

impl PatternRule {
    pub fn new(pattern: &'static Regex, validate: fn(&str) -> bool) -> Self {
        Self { pattern, validate }
    }

    /// Leftmost match of the pattern, if its candidate validates.
    fn candidate<'t>(&self, text: &'t str) -> Option<(&'t str, regex::Match<'t>)> {
        let caps = self.pattern.captures(text)?;
        let full = caps.get(0)?;
        let value = caps.get(1)?.as_str().trim();
        if (self.validate)(value) {
            Some((value, full))
        } else {
            debug!("Rejected candidate {:?} for /{}/", value, self.pattern.as_str());
            None
        }
    }
}

impl std::fmt::Debug for PatternRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternRule")
            .field("pattern", &self.pattern.as_str())
            .finish_non_exhaustive()
    }
}

/// Ordered rules for one field plus the post-processing applied to the winner.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub field: Field,
    pub rules: Vec<PatternRule>,
    pub post_process: fn(&str) -> String,
}

impl FieldSpec {
    pub fn new(field: Field, rules: Vec<PatternRule>, post_process: fn(&str) -> String) -> Self {
        Self {
            field,
            rules,
            post_process,
        }
    }

    fn to_match(&self, rule: usize, value: &str, full: regex::Match<'_>) -> FieldMatch {
        FieldMatch {
            field: self.field,
            value: (self.post_process)(value),
            rule,
            source: full.as_str().to_string(),
            position: (full.start(), full.end()),
        }
    }
}

impl FieldExtractor for FieldSpec {
    type Output = FieldMatch;

    /// First rule, in listed order, whose match passes validation wins.
    fn extract(&self, text: &str) -> Option<FieldMatch> {
        for (index, rule) in self.rules.iter().enumerate() {
            trace!("{}: trying rule {}", self.field, index);
            if let Some((value, full)) = rule.candidate(text) {
                return Some(self.to_match(index, value, full));
            }
        }
        None
    }

    fn extract_all(&self, text: &str) -> Vec<FieldMatch> {
        self.rules
            .iter()
            .enumerate()
            .filter_map(|(index, rule)| {
                rule.candidate(text)
                    .map(|(value, full)| self.to_match(index, value, full))
            })
            .collect()
    }
}
