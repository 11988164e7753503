//! Voter ID (EPIC number) extraction and validation.

use super::patterns::{TEN_CHAR_TOKEN, VOTER_ID_STRICT};

/// Collect every 10-character alphanumeric token of the uppercased text.
pub fn voter_id_candidates(text: &str) -> Vec<String> {
    let upper = text.to_uppercase();
    TEN_CHAR_TOKEN
        .find_iter(&upper)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Check a token against the EPIC grammar (3 letters, 7 digits).
pub fn is_valid_voter_id(token: &str) -> bool {
    VOTER_ID_STRICT.is_match(token)
}

/// Extract the Voter ID number from text.
pub fn extract_voter_id(text: &str) -> Option<String> {
    voter_id_candidates(text)
        .into_iter()
        .find(|t| is_valid_voter_id(t))
}
