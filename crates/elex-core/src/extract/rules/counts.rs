//! Vote and elector count extraction.

use super::normalize::strip_grouping_separators;
use super::patterns::*;
use super::{Field, FieldSpec, PatternRule};

/// Rules for the total number of electors.
pub fn electors_spec() -> FieldSpec {
    count_spec(
        Field::TotalElectors,
        [
            &*TOTAL_NUMBER_OF_ELECTORS,
            &*ELECTORS_LABEL,
            &*TOTAL_ELECTORS,
            &*REGISTERED_VOTERS,
            &*TOTAL_REGISTERED,
        ],
    )
}

/// Rules for the total number of valid votes polled.
pub fn valid_votes_spec() -> FieldSpec {
    count_spec(
        Field::ValidVotesPolled,
        [
            &*TOTAL_NUMBER_OF_VALID_VOTES,
            &*VALID_VOTES_POLLED,
            &*TOTAL_VALID_VOTES,
            &*VOTES_POLLED,
            &*TOTAL_VOTES_CAST,
        ],
    )
}

/// Rules for votes cast for "None of the Above".
pub fn nota_spec() -> FieldSpec {
    count_spec(
        Field::NotaVotes,
        [
            &*NONE_OF_THE_ABOVE,
            &*NOTA_LABEL,
            &*VOTES_FOR_NONE_OF_THE_ABOVE,
            &*QUOTED_NONE_OF_THE_ABOVE,
            &*OPTION_NOTA,
        ],
    )
}

fn count_spec(field: Field, patterns: [&'static regex::Regex; 5]) -> FieldSpec {
    FieldSpec::new(
        field,
        patterns
            .into_iter()
            .map(|p| PatternRule::new(p, has_digit))
            .collect(),
        strip_grouping_separators,
    )
}

/// A bare separator span such as "," is not a count.
fn has_digit(candidate: &str) -> bool {
    candidate.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::rules::FieldExtractor;

    fn value(spec: FieldSpec, text: &str) -> Option<String> {
        spec.extract(text).map(|m| m.value)
    }

    #[test]
    fn test_electors_phrasings() {
        assert_eq!(
            value(electors_spec(), "Total number of electors: 45,678"),
            Some("45678".into())
        );
        assert_eq!(value(electors_spec(), "Electors 1,02,345"), Some("102345".into()));
        assert_eq!(value(electors_spec(), "Registered voters: 9,001"), Some("9001".into()));
        assert_eq!(value(electors_spec(), "Total registered: 77"), Some("77".into()));
    }

    #[test]
    fn test_electors_rule_priority() {
        let m = electors_spec()
            .extract("Electors: 100 Total number of electors: 200")
            .unwrap();
        assert_eq!(m.value, "200");
        assert_eq!(m.rule, 0);
    }

    #[test]
    fn test_valid_votes_phrasings() {
        assert_eq!(
            value(valid_votes_spec(), "Total number of valid votes polled: 38,234"),
            Some("38234".into())
        );
        assert_eq!(value(valid_votes_spec(), "Valid votes polled 12,000"), Some("12000".into()));
        assert_eq!(value(valid_votes_spec(), "Total valid votes: 5,500"), Some("5500".into()));
        assert_eq!(value(valid_votes_spec(), "Votes polled: 4,321"), Some("4321".into()));
        assert_eq!(value(valid_votes_spec(), "Total votes cast: 800"), Some("800".into()));
    }

    #[test]
    fn test_nota_phrasings() {
        assert_eq!(value(nota_spec(), "None of the above: 1,234"), Some("1234".into()));
        assert_eq!(value(nota_spec(), "NOTA 56"), Some("56".into()));
        assert_eq!(
            value(nota_spec(), "Total number of votes for 'None of the Above': 1,234"),
            Some("1234".into())
        );
        assert_eq!(value(nota_spec(), "\"None of the Above\" 2,001"), Some("2001".into()));
    }

    #[test]
    fn test_separator_only_span_falls_through() {
        let m = electors_spec()
            .extract("Total electors: , see annex. Registered voters: 3,400")
            .unwrap();
        assert_eq!(m.value, "3400");
        assert_eq!(m.rule, 3);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(value(nota_spec(), "Turnout was high this year"), None);
    }

    #[test]
    fn test_extract_all_lists_matching_rules_in_order() {
        let all = valid_votes_spec()
            .extract_all("Total valid votes polled: 900 Total votes cast: 950");
        let rules: Vec<usize> = all.iter().map(|m| m.rule).collect();
        assert_eq!(rules, vec![0, 1, 3, 4]);
        assert_eq!(all[3].value, "950");
    }
}
