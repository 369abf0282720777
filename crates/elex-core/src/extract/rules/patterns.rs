//! Label patterns for electoral result reports.
//!
//! All patterns are case-insensitive and capture the candidate value in
//! group 1. They run against whitespace-collapsed text.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Constituency name
    pub static ref CONSTITUENCY_NAME_LABEL: Regex = Regex::new(
        r"(?i)constituency\s+name[:\s]+([A-Za-z\s]+?)(?:\n|election|total)"
    ).unwrap();

    pub static ref CONSTITUENCY_LABEL: Regex = Regex::new(
        r"(?i)constituency[:\s]+([A-Za-z\s]+?)(?:\n|election|total)"
    ).unwrap();

    pub static ref CONSTITUENCY_SUFFIX: Regex = Regex::new(
        r"(?i)([A-Z][A-Za-z\s]+)\s+constituency"
    ).unwrap();

    pub static ref NAME_LABEL: Regex = Regex::new(
        r"(?i)name[:\s]+([A-Za-z\s]+?)(?:\n|total|election)"
    ).unwrap();

    pub static ref CONSTITUENCY_LOOSE: Regex = Regex::new(
        r"(?i)constituency[:\s]*([A-Za-z][A-Za-z\s]{3,30})(?:\s*\n|\s+election|\s+total)"
    ).unwrap();

    // Total electors
    pub static ref TOTAL_NUMBER_OF_ELECTORS: Regex = Regex::new(
        r"(?i)total\s+(?:number\s+of\s+)?electors[:\s]+([0-9,]+)"
    ).unwrap();

    pub static ref ELECTORS_LABEL: Regex = Regex::new(
        r"(?i)electors[:\s]+([0-9,]+)"
    ).unwrap();

    pub static ref TOTAL_ELECTORS: Regex = Regex::new(
        r"(?i)total\s+electors[:\s]+([0-9,]+)"
    ).unwrap();

    pub static ref REGISTERED_VOTERS: Regex = Regex::new(
        r"(?i)registered\s+voters[:\s]+([0-9,]+)"
    ).unwrap();

    pub static ref TOTAL_REGISTERED: Regex = Regex::new(
        r"(?i)total\s+registered[:\s]+([0-9,]+)"
    ).unwrap();

    // Valid votes polled
    pub static ref TOTAL_NUMBER_OF_VALID_VOTES: Regex = Regex::new(
        r"(?i)total\s+(?:number\s+of\s+)?valid\s+votes\s+polled[:\s]+([0-9,]+)"
    ).unwrap();

    pub static ref VALID_VOTES_POLLED: Regex = Regex::new(
        r"(?i)valid\s+votes\s+polled[:\s]+([0-9,]+)"
    ).unwrap();

    pub static ref TOTAL_VALID_VOTES: Regex = Regex::new(
        r"(?i)total\s+valid\s+votes[:\s]+([0-9,]+)"
    ).unwrap();

    pub static ref VOTES_POLLED: Regex = Regex::new(
        r"(?i)votes\s+polled[:\s]+([0-9,]+)"
    ).unwrap();

    pub static ref TOTAL_VOTES_CAST: Regex = Regex::new(
        r"(?i)total\s+votes\s+cast[:\s]+([0-9,]+)"
    ).unwrap();

    // None of the above
    pub static ref NONE_OF_THE_ABOVE: Regex = Regex::new(
        r"(?i)none\s+of\s+the\s+above[:\s]+([0-9,]+)"
    ).unwrap();

    pub static ref NOTA_LABEL: Regex = Regex::new(
        r"(?i)nota[:\s]+([0-9,]+)"
    ).unwrap();

    pub static ref VOTES_FOR_NONE_OF_THE_ABOVE: Regex = Regex::new(
        r#"(?i)votes\s+for\s+['"]?none\s+of\s+the\s+above['"]?[:\s]+([0-9,]+)"#
    ).unwrap();

    pub static ref QUOTED_NONE_OF_THE_ABOVE: Regex = Regex::new(
        r#"(?i)['"]?none\s+of\s+the\s+above['"]?[:\s]+([0-9,]+)"#
    ).unwrap();

    pub static ref OPTION_NOTA: Regex = Regex::new(
        r"(?i)option\s+nota[:\s]+([0-9,]+)"
    ).unwrap();
}
