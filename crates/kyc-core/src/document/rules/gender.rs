//! Gender extraction for Aadhaar cards.

use crate::models::document::Gender;

use super::patterns::{FEMALE_MARKER, MALE_MARKER};

/// Extract the gender from text.
///
/// Female evidence anywhere in the text wins over Male evidence, so a stray
/// "Male" token in an address line never hides the real marker.
pub fn extract_gender(text: &str) -> Option<Gender> {
    if text.lines().any(|line| FEMALE_MARKER.is_match(line)) {
        return Some(Gender::Female);
    }

    if text.lines().any(|line| MALE_MARKER.is_match(line)) {
        return Some(Gender::Male);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_female_priority() {
        let text = "Rahul\nMALE ward 4 some address\nFEMALE";
        assert_eq!(extract_gender(text), Some(Gender::Female));
    }

    #[test]
    fn test_male() {
        assert_eq!(extract_gender("पुरुष / MALE"), Some(Gender::Male));
        assert_eq!(extract_gender("Male"), Some(Gender::Male));
    }

    #[test]
    fn test_hindi_female() {
        assert_eq!(extract_gender("महिला"), Some(Gender::Female));
    }

    #[test]
    fn test_no_marker() {
        assert_eq!(extract_gender("MALEKAR STREET"), None);
        assert_eq!(extract_gender(""), None);
    }
}
