//! Constituency name extraction.

use super::normalize::trimmed;
use super::patterns::{
    CONSTITUENCY_LABEL, CONSTITUENCY_LOOSE, CONSTITUENCY_NAME_LABEL, CONSTITUENCY_SUFFIX,
    NAME_LABEL,
};
use super::{Field, FieldSpec, PatternRule};

/// Header words that patterns sometimes capture instead of a name.
const REJECTED_PREFIXES: [&str; 3] = ["total", "number", "election"];

/// Rules for the constituency name, most specific phrasing first.
pub fn constituency_spec() -> FieldSpec {
    FieldSpec::new(
        Field::ConstituencyName,
        vec![
            PatternRule::new(&*CONSTITUENCY_NAME_LABEL, is_plausible_name),
            PatternRule::new(&*CONSTITUENCY_LABEL, is_plausible_name),
            PatternRule::new(&*CONSTITUENCY_SUFFIX, is_plausible_name),
            PatternRule::new(&*NAME_LABEL, is_plausible_name),
            PatternRule::new(&*CONSTITUENCY_LOOSE, is_plausible_name),
        ],
        trimmed,
    )
}

/// A name must be longer than three characters and not start with a header word.
pub fn is_plausible_name(candidate: &str) -> bool {
    let name = candidate.trim();
    if name.chars().count() <= 3 {
        return false;
    }
    let lower = name.to_lowercase();
    !REJECTED_PREFIXES.iter().any(|p| lower.starts_with(p))
}
