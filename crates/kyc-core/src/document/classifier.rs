//! Document type classification.
//!
//! Rules run in a fixed order and the first match wins:
//! 1. Aadhaar: domain keyword, a 4-4-4 grouped number, or a bare 12-digit run
//!    once whitespace is removed.
//! 2. Voter ID, only when enabled: domain keyword or an EPIC-shaped token.
//! 3. PAN: a PAN-shaped token once whitespace is removed, or a PAN keyword.
//!
//! Aadhaar is tested first since 12-digit runs turn up on other cards by
//! coincidence. The PAN keyword list includes the bare word "INDIA", which
//! catches PAN cards whose number was mangled by OCR at the cost of some
//! false positives.

use serde::Serialize;
use tracing::debug;

use crate::models::document::DocumentType;

use super::rules::patterns::{
    AADHAAR_COMPACT, AADHAAR_GROUPED, AADHAAR_KEYWORDS, PAN_KEYWORDS, PAN_TOKEN,
    VOTER_ID_KEYWORDS, VOTER_ID_TOKEN,
};

/// A piece of evidence that made a rule fire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Evidence {
    /// A domain keyword found in the uppercased text.
    Keyword(&'static str),
    /// A pattern match, with the matched text.
    Pattern(String),
}

/// Classification outcome with the evidence behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub document_type: DocumentType,
    pub evidence: Vec<Evidence>,
}

/// Rule-based document classifier.
#[derive(Debug, Clone)]
pub struct DocumentClassifier {
    detect_voter_id: bool,
}

impl DocumentClassifier {
    /// Create a classifier with Voter ID detection disabled.
    pub fn new() -> Self {
        Self {
            detect_voter_id: false,
        }
    }

    /// Enable or disable the Voter ID rule.
    pub fn with_voter_id_detection(mut self, detect: bool) -> Self {
        self.detect_voter_id = detect;
        self
    }

    /// Classify text into a document type.
    pub fn classify(&self, text: &str) -> DocumentType {
        self.classify_with_evidence(text).document_type
    }

    /// Classify text and report the evidence of the rule that fired.
    pub fn classify_with_evidence(&self, text: &str) -> Classification {
        let upper = text.to_uppercase();
        let compact: String = upper.chars().filter(|c| !c.is_whitespace()).collect();

        let evidence = aadhaar_evidence(&upper, &compact);
        if !evidence.is_empty() {
            return classified(DocumentType::Aadhaar, evidence);
        }

        if self.detect_voter_id {
            let evidence = voter_id_evidence(&upper, &compact);
            if !evidence.is_empty() {
                return classified(DocumentType::VoterId, evidence);
            }
        }

        let evidence = pan_evidence(&upper, &compact);
        if !evidence.is_empty() {
            return classified(DocumentType::Pan, evidence);
        }

        classified(DocumentType::Unknown, Vec::new())
    }
}

impl Default for DocumentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn classified(document_type: DocumentType, evidence: Vec<Evidence>) -> Classification {
    debug!("Classified as {} on {:?}", document_type, evidence);
    Classification {
        document_type,
        evidence,
    }
}

fn keyword_evidence(upper: &str, keywords: &[&'static str]) -> Vec<Evidence> {
    keywords
        .iter()
        .copied()
        .filter(|k| upper.contains(k))
        .map(Evidence::Keyword)
        .collect()
}

fn aadhaar_evidence(upper: &str, compact: &str) -> Vec<Evidence> {
    let mut evidence = keyword_evidence(upper, AADHAAR_KEYWORDS);

    if let Some(m) = AADHAAR_GROUPED.find(upper) {
        evidence.push(Evidence::Pattern(m.as_str().to_string()));
    }
    if let Some(m) = AADHAAR_COMPACT.find(compact) {
        evidence.push(Evidence::Pattern(m.as_str().to_string()));
    }

    evidence
}

fn voter_id_evidence(upper: &str, compact: &str) -> Vec<Evidence> {
    let mut evidence = keyword_evidence(upper, VOTER_ID_KEYWORDS);

    if let Some(m) = VOTER_ID_TOKEN.find(compact) {
        evidence.push(Evidence::Pattern(m.as_str().to_string()));
    }

    evidence
}

fn pan_evidence(upper: &str, compact: &str) -> Vec<Evidence> {
    let mut evidence = Vec::new();

    if let Some(m) = PAN_TOKEN.find(compact) {
        evidence.push(Evidence::Pattern(m.as_str().to_string()));
    }
    evidence.extend(keyword_evidence(upper, PAN_KEYWORDS));

    evidence
}

/// Classify text with the default classifier.
pub fn classify(text: &str) -> DocumentType {
    DocumentClassifier::new().classify(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_aadhaar_keyword_and_grouped_number() {
        let text = "GOVERNMENT OF INDIA\nSita Devi\n1234 5678 9012";
        assert_eq!(classify(text), DocumentType::Aadhaar);
    }

    #[test]
    fn test_aadhaar_number_only() {
        assert_eq!(classify("xx 1234 5678 9012 yy"), DocumentType::Aadhaar);
        assert_eq!(classify("1234\n56789012"), DocumentType::Aadhaar);
    }

    #[test]
    fn test_pan_pattern_and_keyword() {
        let text = "INCOME TAX DEPARTMENT\nPermanent Account Number: ABCDE1234F";
        let classification = DocumentClassifier::new().classify_with_evidence(text);
        assert_eq!(classification.document_type, DocumentType::Pan);
        assert_eq!(
            classification.evidence[0],
            Evidence::Pattern("ABCDE1234F".to_string())
        );
        assert!(classification
            .evidence
            .contains(&Evidence::Keyword("INCOME TAX DEPARTMENT")));
    }

    #[test]
    fn test_pan_pattern_split_by_whitespace() {
        assert_eq!(classify("ABCDE 1234 F"), DocumentType::Pan);
    }

    #[test]
    fn test_pan_token_glued_to_neighbours_falls_back_to_keyword() {
        let text = "INCOME TAX DEPARTMENT\nRAHUL KUMAR\nABCDE1234F";
        let classification = DocumentClassifier::new().classify_with_evidence(text);
        assert_eq!(classification.document_type, DocumentType::Pan);
        assert_eq!(
            classification.evidence,
            vec![Evidence::Keyword("INCOME TAX DEPARTMENT")]
        );
    }

    #[test]
    fn test_pan_weak_keyword() {
        assert_eq!(classify("some noise india"), DocumentType::Pan);
    }

    #[test]
    fn test_aadhaar_wins_over_pan() {
        let text = "INCOME TAX DEPARTMENT\nABCDE1234F\n1234 5678 9012";
        assert_eq!(classify(text), DocumentType::Aadhaar);
    }

    #[test]
    fn test_voter_id_is_opt_in() {
        let text = "ELECTION COMMISSION OF INDIA\nIDENTITY CARD\nABC1234567";
        assert_eq!(classify(text), DocumentType::Pan);
        assert_eq!(DocumentClassifier::default().classify(text), DocumentType::Pan);

        let with_rule = DocumentClassifier::new().with_voter_id_detection(true);
        assert_eq!(with_rule.classify(text), DocumentType::VoterId);
    }

    #[test]
    fn test_voter_id_still_loses_to_aadhaar() {
        let with_rule = DocumentClassifier::new().with_voter_id_detection(true);
        let text = "ELECTION COMMISSION OF INDIA\nABC1234567\n1234 5678 9012";
        assert_eq!(with_rule.classify(text), DocumentType::Aadhaar);
    }

    #[test]
    fn test_unknown() {
        let classification = DocumentClassifier::new().classify_with_evidence("hello world");
        assert_eq!(classification.document_type, DocumentType::Unknown);
        assert!(classification.evidence.is_empty());
    }

    #[test]
    fn test_deterministic() {
        let text = "Permanent Account Number\nXYZ";
        assert_eq!(classify(text), classify(text));
    }
}
