//! Common regex patterns for identity document extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Aadhaar number printed in 4-4-4 groups
    pub static ref AADHAAR_GROUPED: Regex = Regex::new(
        r"\b\d{4}\s\d{4}\s\d{4}\b"
    ).unwrap();

    pub static ref AADHAAR_COMPACT: Regex = Regex::new(
        r"\b\d{12}\b"
    ).unwrap();

    // Unicode-aware: Devanagari digits count as digits.
    pub static ref NON_DIGIT: Regex = Regex::new(
        r"\D"
    ).unwrap();

    pub static ref TWELVE_DIGITS: Regex = Regex::new(
        r"\d{12}"
    ).unwrap();

    // PAN (Permanent Account Number): AAAAA9999A
    pub static ref PAN_TOKEN: Regex = Regex::new(
        r"\b[A-Z]{5}[0-9]{4}[A-Z]\b"
    ).unwrap();

    pub static ref PAN_STRICT: Regex = Regex::new(
        r"^[A-Z]{5}[0-9]{4}[A-Z]$"
    ).unwrap();

    // Voter ID (EPIC): AAA9999999
    pub static ref VOTER_ID_TOKEN: Regex = Regex::new(
        r"\b[A-Z]{3}[0-9]{7}\b"
    ).unwrap();

    pub static ref VOTER_ID_STRICT: Regex = Regex::new(
        r"^[A-Z]{3}[0-9]{7}$"
    ).unwrap();

    // Any 10-character alphanumeric token (generous candidate stage)
    pub static ref TEN_CHAR_TOKEN: Regex = Regex::new(
        r"\b[A-Z0-9]{10}\b"
    ).unwrap();

    // Dates
    pub static ref DATE_DMY: Regex = Regex::new(
        r"\d{2}/\d{2}/\d{4}"
    ).unwrap();

    pub static ref LABELLED_DOB: Regex = Regex::new(
        r"(?i)(?:D\.?\s?O\.?\s?B\.?|DATE\s+OF\s+BIRTH|YEAR\s+OF\s+BIRTH|जन्म\s*तिथि)[^\d\n]{0,12}(\d{2}/\d{2}/\d{4})"
    ).unwrap();

    // Gender markers
    pub static ref FEMALE_MARKER: Regex = Regex::new(
        r"\b(?:Female|FEMALE)\b|महिला"
    ).unwrap();

    pub static ref MALE_MARKER: Regex = Regex::new(
        r"\b(?:Male|MALE)\b|पुरुष"
    ).unwrap();

    // Voter ID name labels
    pub static ref NAME_LABEL: Regex = Regex::new(
        r"Name|नाम"
    ).unwrap();
}

/// Aadhaar domain keywords, matched against uppercased text.
pub const AADHAAR_KEYWORDS: &[&str] = &[
    "AADHAAR",
    "UNIQUE IDENTIFICATION",
    "VID",
    "GOVERNMENT OF INDIA",
];

/// PAN domain keywords, matched against uppercased text.
pub const PAN_KEYWORDS: &[&str] = &[
    "INCOME TAX DEPARTMENT",
    "PERMANENT ACCOUNT NUMBER",
    "GOVT. OF INDIA",
    "INDIA",
    "INCOMETAX",
];

/// Voter ID domain keywords, matched against uppercased text.
pub const VOTER_ID_KEYWORDS: &[&str] = &["ELECTION COMMISSION", "ELECTOR", "EPIC"];

/// Check whether a string contains a Devanagari character.
pub fn contains_devanagari(text: &str) -> bool {
    text.chars().any(|c| ('\u{0900}'..='\u{097F}').contains(&c))
}
