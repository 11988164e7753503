//! Person-name extraction.
//!
//! Names have no fixed grammar, so extraction collects candidates from
//! several sources, filters out anything that looks like a card header or
//! label, and keeps the longest survivor. Ties go to the candidate generated
//! first: recognizer spans before line heuristics, then by line order.

use std::collections::HashSet;

use kyc_ner::EntitySpan;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::document::DocumentType;

use super::patterns::{contains_devanagari, DATE_DMY, NAME_LABEL};

lazy_static! {
    // Matched as substrings of the uppercased candidate, so header words that
    // OCR glued together ("INCOMETAXDEPARTMENT") are still caught.
    static ref PAN_EXCLUSIONS: HashSet<&'static str> = [
        "INCOME", "TAX", "DEPARTMENT", "GOVT", "INDIA", "GOVERNMENT", "PERMANENT",
        "ACCOUNT", "NUMBER", "NAME", "FATHER", "BIRTH", "SIGNATURE",
        "आयकर", "विभाग", "भारत", "सरकार", "स्थायी", "लेखा", "संख्या", "पिता",
        "जन्म", "तिथि",
    ]
    .into_iter()
    .collect();

    static ref PAN_WORD_EXCLUSIONS: HashSet<&'static str> =
        ["CARD", "DOB", "नाम"].into_iter().collect();

    static ref AADHAAR_EXCLUSIONS: HashSet<&'static str> = [
        "GOVERNMENT", "INDIA", "UNIQUE", "IDENTIFICATION", "AUTHORITY", "AADHAAR",
        "ENROLLMENT", "ENROLMENT", "BHARAT", "SARKAR", "DOB", "BIRTH", "NAME",
        "FATHER", "भारत", "सरकार", "जन्म", "तिथि", "आधार", "पिता",
    ]
    .into_iter()
    .collect();

    // MALE is a substring of FEMALE.
    static ref AADHAAR_WORD_EXCLUSIONS: HashSet<&'static str> =
        ["MALE", "FEMALE", "VID", "पुरुष", "महिला"].into_iter().collect();

    static ref VOTER_ID_EXCLUSIONS: HashSet<&'static str> = [
        "ELECTION", "COMMISSION", "INDIA", "ELECTOR", "IDENTITY", "FATHER",
        "HUSBAND", "MOTHER", "BIRTH", "भारत", "निर्वाचन", "आयोग", "पहचान", "पिता",
    ]
    .into_iter()
    .collect();

    // Short labels that also occur inside real names (NAGESH, GANPATI).
    static ref VOTER_ID_WORD_EXCLUSIONS: HashSet<&'static str> = [
        "CARD", "NAME", "SEX", "AGE", "DATE", "नाम", "पत्र", "पति",
    ]
    .into_iter()
    .collect();
}

const MIN_WORDS: usize = 2;
const HEURISTIC_MAX_WORDS: usize = 5;

/// Document layout the name extractor is tuned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameProfile {
    Pan,
    Aadhaar,
    VoterId,
}

impl NameProfile {
    fn exclusions(self) -> &'static HashSet<&'static str> {
        match self {
            Self::Pan => &PAN_EXCLUSIONS,
            Self::Aadhaar => &AADHAAR_EXCLUSIONS,
            Self::VoterId => &VOTER_ID_EXCLUSIONS,
        }
    }

    fn word_exclusions(self) -> &'static HashSet<&'static str> {
        match self {
            Self::Pan => &PAN_WORD_EXCLUSIONS,
            Self::Aadhaar => &AADHAAR_WORD_EXCLUSIONS,
            Self::VoterId => &VOTER_ID_WORD_EXCLUSIONS,
        }
    }

    /// Profile used to name the holder of a document type.
    pub fn for_document(document_type: DocumentType) -> Option<Self> {
        match document_type {
            DocumentType::Pan => Some(Self::Pan),
            DocumentType::Aadhaar => Some(Self::Aadhaar),
            DocumentType::VoterId => Some(Self::VoterId),
            DocumentType::Unknown => None,
        }
    }
}

/// Where a name candidate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateSource {
    /// A `PERSON` span from the entity recognizer.
    Ner,
    /// A line picked by its position or shape.
    LineHeuristic,
    /// Text next to a "Name" label.
    Label,
}

/// A raw name candidate, before normalization and filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub text: String,
    pub source: CandidateSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_line: Option<usize>,
}

impl Candidate {
    fn new(text: impl Into<String>, source: CandidateSource, origin_line: Option<usize>) -> Self {
        Self {
            text: text.into(),
            source,
            origin_line,
        }
    }
}

/// English and Hindi names read from a bilingual card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BilingualName {
    pub english: Option<String>,
    pub hindi: Option<String>,
}

/// Name extractor for one document profile.
pub struct NameExtractor {
    profile: NameProfile,
}

impl NameExtractor {
    /// Create a name extractor for the given profile.
    pub fn new(profile: NameProfile) -> Self {
        Self { profile }
    }

    /// Generate raw candidates in selection-priority order.
    ///
    /// `entities` is ignored for the Voter ID profile, which reads names from
    /// their labels instead.
    pub fn candidates(&self, text: &str, entities: &[EntitySpan]) -> Vec<Candidate> {
        let lines: Vec<&str> = text.lines().collect();

        if self.profile == NameProfile::VoterId {
            return label_candidates(&lines);
        }

        let mut candidates: Vec<Candidate> = entities
            .iter()
            .filter(|e| e.is_person())
            .map(|e| Candidate::new(e.text.clone(), CandidateSource::Ner, None))
            .collect();

        let mut heuristic = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            if self.profile == NameProfile::Pan {
                let cleaned = collapse_whitespace(line);
                if is_name_shaped(&cleaned) {
                    heuristic.push(Candidate::new(cleaned, CandidateSource::LineHeuristic, Some(i)));
                }
            }

            // The name is usually printed directly above the date of birth.
            if i > 0 && DATE_DMY.is_match(line) {
                heuristic.push(Candidate::new(
                    lines[i - 1],
                    CandidateSource::LineHeuristic,
                    Some(i - 1),
                ));
            }
        }
        heuristic.sort_by_key(|c| c.origin_line);

        candidates.extend(heuristic);
        candidates
    }

    /// Check a normalized candidate against the exclusion, digit and word
    /// count filters.
    pub fn is_acceptable(&self, normalized: &str) -> bool {
        let upper = normalized.to_uppercase();
        let words = self.profile.word_exclusions();

        let excluded = self
            .profile
            .exclusions()
            .iter()
            .any(|keyword| upper.contains(keyword))
            || upper
                .split(|c: char| c.is_whitespace() || c.is_ascii_punctuation() || c == '।')
                .any(|token| words.contains(token));

        !excluded
            && !normalized.chars().any(char::is_numeric)
            && normalized.split_whitespace().count() >= MIN_WORDS
    }

    /// Normalize and filter candidates, keeping generation order.
    fn survivors(&self, candidates: Vec<Candidate>) -> Vec<String> {
        candidates
            .into_iter()
            .map(|c| normalize_candidate(&c.text))
            .filter(|n| self.is_acceptable(n))
            .collect()
    }

    /// Extract the single most likely name.
    pub fn extract(&self, text: &str, entities: &[EntitySpan]) -> Option<String> {
        let candidates = self.candidates(text, entities);
        let total = candidates.len();
        let survivors = self.survivors(candidates);

        debug!(
            "Name candidates for {:?}: {} generated, {} survived filtering",
            self.profile,
            total,
            survivors.len()
        );

        select_longest(survivors)
    }

    /// Extract separate English and Hindi names.
    pub fn extract_bilingual(&self, text: &str, entities: &[EntitySpan]) -> BilingualName {
        let survivors = self.survivors(self.candidates(text, entities));
        let (hindi, english): (Vec<String>, Vec<String>) =
            survivors.into_iter().partition(|n| contains_devanagari(n));

        BilingualName {
            english: select_longest(english),
            hindi: select_longest(hindi),
        }
    }
}

/// Candidates taken from "Name" / "नाम" labels: the text after the colon, or
/// the next line when nothing follows the colon.
fn label_candidates(lines: &[&str]) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if !NAME_LABEL.is_match(line) {
            continue;
        }

        // Only the segment after the label; a second colon starts the next field.
        let same_line = line
            .split(':')
            .nth(1)
            .map(str::trim)
            .filter(|rest| !rest.is_empty());

        if let Some(rest) = same_line {
            candidates.push(Candidate::new(rest, CandidateSource::Label, Some(i)));
        } else if let Some(next) = lines.get(i + 1).map(|l| l.trim()).filter(|l| !l.is_empty()) {
            candidates.push(Candidate::new(next, CandidateSource::Label, Some(i + 1)));
        }
    }

    candidates
}

/// Strip colons and surrounding punctuation and collapse whitespace.
pub fn normalize_candidate(text: &str) -> String {
    collapse_whitespace(&text.replace(':', " "))
        .trim_matches(|c: char| matches!(c, '.' | ',' | ';' | '-' | '|' | '/' | '\'' | '"'))
        .trim()
        .to_string()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// All uppercase, 2-5 words, no digits.
fn is_name_shaped(line: &str) -> bool {
    let words = line.split_whitespace().count();

    line.chars().any(char::is_uppercase)
        && !line.chars().any(char::is_lowercase)
        && (MIN_WORDS..=HEURISTIC_MAX_WORDS).contains(&words)
        && !line.chars().any(|c| c.is_ascii_digit())
}

/// Pick the longest string, counted in characters; the earliest wins a tie.
pub fn select_longest<I>(names: I) -> Option<String>
where
    I: IntoIterator<Item = String>,
{
    let mut best: Option<(usize, String)> = None;

    for name in names {
        let len = name.chars().count();
        if best.as_ref().is_none_or(|(best_len, _)| len > *best_len) {
            best = Some((len, name));
        }
    }

    best.map(|(_, name)| name)
}

/// Extract a name using the given profile.
pub fn extract_name(profile: NameProfile, text: &str, entities: &[EntitySpan]) -> Option<String> {
    NameExtractor::new(profile).extract(text, entities)
}

/// Extract the English and Hindi names from Voter ID text.
pub fn extract_voter_names(text: &str) -> BilingualName {
    NameExtractor::new(NameProfile::VoterId).extract_bilingual(text, &[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_line_before_dob() {
        let text = "GOVERNMENT OF INDIA\nJOHN MICHAEL SMITH\nDOB 01/01/1990";
        assert_eq!(
            extract_name(NameProfile::Aadhaar, text, &[]),
            Some("JOHN MICHAEL SMITH".to_string())
        );
    }

    #[test]
    fn test_pan_uppercase_lines() {
        let text = "INCOME TAX DEPARTMENT\nRAHUL KUMAR\nSURESH KUMAR VERMA\n14/08/1987\nABCDE1234F";
        // Longest survivor wins even when it is the father's line.
        assert_eq!(
            extract_name(NameProfile::Pan, text, &[]),
            Some("SURESH KUMAR VERMA".to_string())
        );
    }

    #[test]
    fn test_ner_candidates_come_first() {
        let text = "ANITA RANI\n01/01/1990";
        let entities = vec![
            EntitySpan::person("Priya Nair"),
            EntitySpan::new("Mumbai", "GPE"),
        ];
        let extractor = NameExtractor::new(NameProfile::Aadhaar);

        let candidates = extractor.candidates(text, &entities);
        assert_eq!(candidates[0].source, CandidateSource::Ner);
        assert_eq!(candidates[0].text, "Priya Nair");
        assert_eq!(candidates[1].source, CandidateSource::LineHeuristic);
        assert_eq!(candidates[1].origin_line, Some(0));

        // Equal length: the recognizer span was generated first.
        assert_eq!(extractor.extract(text, &entities), Some("Priya Nair".to_string()));
    }

    #[test]
    fn test_filters() {
        let extractor = NameExtractor::new(NameProfile::Pan);
        assert!(extractor.is_acceptable("RAHUL SHARMA"));
        assert!(!extractor.is_acceptable("INCOME TAX DEPARTMENT"));
        assert!(!extractor.is_acceptable("RAHUL SHARMA 2"));
        assert!(!extractor.is_acceptable("RAHUL"));
        assert!(!extractor.is_acceptable("FATHER'S NAME"));
    }

    #[test]
    fn test_merged_header_words_are_excluded() {
        let text = "INCOMETAXDEPARTMENT GOVTOFINDIA\nRAHUL KUMAR\n14/08/1987\nABCDE1234F";
        assert_eq!(
            extract_name(NameProfile::Pan, text, &[]),
            Some("RAHUL KUMAR".to_string())
        );

        let text = "GOVERNMENTOFINDIA AADHAARCARD\n14/08/1987";
        assert_eq!(extract_name(NameProfile::Aadhaar, text, &[]), None);
    }

    #[test]
    fn test_short_labels_match_whole_words() {
        let aadhaar = NameExtractor::new(NameProfile::Aadhaar);
        assert!(!aadhaar.is_acceptable("FEMALE SITA"));
        assert!(!aadhaar.is_acceptable("MALE RAMESH"));
        assert!(aadhaar.is_acceptable("DAVID MALEKAR"));

        let voter = NameExtractor::new(NameProfile::VoterId);
        assert!(voter.is_acceptable("NAGESH KUMAR"));
        assert!(!voter.is_acceptable("AGE FORTY FIVE"));
        assert!(!voter.is_acceptable("SEX MALE"));
    }

    #[test]
    fn test_normalize_candidate() {
        assert_eq!(normalize_candidate("  Name :  RAHUL   KUMAR. "), "Name RAHUL KUMAR");
        assert_eq!(normalize_candidate(": SITA DEVI"), "SITA DEVI");
    }

    #[test]
    fn test_select_longest_tie_keeps_first() {
        let names = vec!["ABC DEF".to_string(), "GHI JKL".to_string(), "MN OP".to_string()];
        assert_eq!(select_longest(names), Some("ABC DEF".to_string()));
        assert_eq!(select_longest(Vec::<String>::new()), None);
    }

    #[test]
    fn test_select_longest_counts_characters() {
        // Devanagari takes three bytes per character.
        let names = vec!["राम लाल".to_string(), "RAMA LALA".to_string()];
        assert_eq!(select_longest(names), Some("RAMA LALA".to_string()));
    }

    #[test]
    fn test_voter_names_same_line_and_next_line() {
        let text = "ELECTION COMMISSION OF INDIA\nName: RAJESH KUMAR SINGH\nनाम :\nराजेश कुमार सिंह\nABC1234567";
        let names = extract_voter_names(text);
        assert_eq!(names.english, Some("RAJESH KUMAR SINGH".to_string()));
        assert_eq!(names.hindi, Some("राजेश कुमार सिंह".to_string()));
    }

    #[test]
    fn test_voter_label_stops_at_next_field() {
        let names = extract_voter_names("Name: AMIT KUMAR : Sex: M");
        assert_eq!(names.english, Some("AMIT KUMAR".to_string()));
    }

    #[test]
    fn test_voter_names_missing() {
        let names = extract_voter_names("ELECTION COMMISSION OF INDIA\nABC1234567");
        assert_eq!(names, BilingualName::default());
    }

    #[test]
    fn test_voter_profile_ignores_entities() {
        let extractor = NameExtractor::new(NameProfile::VoterId);
        let entities = vec![EntitySpan::person("Someone Else")];
        assert!(extractor.candidates("no labels here", &entities).is_empty());
    }
}
