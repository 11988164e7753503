//! PAN (Permanent Account Number) extraction and validation.
//!
//! OCR tends to merge or split characters around the PAN, so extraction runs
//! in two stages: collect every 10-character alphanumeric token, then keep
//! the first one that fits the strict `AAAAA9999A` grammar.

use super::patterns::{PAN_STRICT, TEN_CHAR_TOKEN};

/// Collect every 10-character alphanumeric token of the uppercased text.
pub fn pan_candidates(text: &str) -> Vec<String> {
    let upper = text.to_uppercase();
    TEN_CHAR_TOKEN
        .find_iter(&upper)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Check a token against the strict PAN grammar (5 letters, 4 digits, 1 letter).
pub fn is_valid_pan(token: &str) -> bool {
    PAN_STRICT.is_match(token)
}

/// Extract the PAN number from text.
pub fn extract_pan_number(text: &str) -> Option<String> {
    pan_candidates(text).into_iter().find(|t| is_valid_pan(t))
}
