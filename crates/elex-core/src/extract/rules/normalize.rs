//! Text normalization helpers.

/// Collapse every whitespace run (newlines included) into one space and trim.
///
/// OCR output breaks lines at arbitrary points, which splits label/value
/// pairs; the patterns expect them on a single line.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove grouping separators (commas) from a digit span: "45,678" -> "45678".
pub fn strip_grouping_separators(digits: &str) -> String {
    digits.chars().filter(|c| *c != ',').collect()
}

/// Trim the candidate without further changes.
pub fn trimmed(value: &str) -> String {
    value.trim().to_string()
}
