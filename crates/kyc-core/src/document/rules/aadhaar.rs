//! Aadhaar number extraction.
//!
//! OCR line wrapping moves the 4-4-4 digit groups around unpredictably, so the
//! extractor ignores layout entirely: every digit in the text is concatenated
//! and the first 12-digit run of the result is the number.

use super::patterns::{NON_DIGIT, TWELVE_DIGITS};

/// Concatenate every decimal digit of the text, in any script, discarding
/// everything else.
pub fn concat_digits(text: &str) -> String {
    NON_DIGIT.replace_all(text, "").into_owned()
}

/// Extract the Aadhaar number from text.
pub fn extract_aadhaar_number(text: &str) -> Option<String> {
    let digits = concat_digits(text);
    TWELVE_DIGITS.find(&digits).map(|m| m.as_str().to_string())
}
