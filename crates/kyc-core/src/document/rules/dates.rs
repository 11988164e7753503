//! Date of birth extraction.

use super::patterns::{DATE_DMY, LABELLED_DOB};
use super::{ExtractionMatch, FieldExtractor};

/// Date of birth extractor.
///
/// Dates are returned verbatim as printed (`DD/MM/YYYY`), without calendar
/// validation.
#[derive(Debug, Clone)]
pub struct DobExtractor {
    prefer_labelled: bool,
}

impl DobExtractor {
    pub fn new() -> Self {
        Self {
            prefer_labelled: true,
        }
    }

    /// Set whether a labelled date ("DOB", "Date of Birth") is tried before
    /// the first bare date.
    pub fn with_labelled_preference(mut self, prefer: bool) -> Self {
        self.prefer_labelled = prefer;
        self
    }
}

impl Default for DobExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DobExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        // Labelled dates first (higher confidence)
        if self.prefer_labelled {
            for caps in LABELLED_DOB.captures_iter(text) {
                if let (Some(full), Some(date)) = (caps.get(0), caps.get(1)) {
                    results.push(
                        ExtractionMatch::new(date.as_str().to_string(), 0.95, full.as_str())
                            .with_position(date.start(), date.end()),
                    );
                }
            }
        }

        for m in DATE_DMY.find_iter(text) {
            if results.iter().any(|r| r.position == Some((m.start(), m.end()))) {
                continue;
            }
            results.push(
                ExtractionMatch::new(m.as_str().to_string(), 0.7, m.as_str())
                    .with_position(m.start(), m.end()),
            );
        }

        results
    }
}

/// Extract the date of birth from text.
pub fn extract_dob(text: &str) -> Option<String> {
    DobExtractor::new().extract(text).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_date() {
        assert_eq!(extract_dob("RAHUL KUMAR\n14/08/1987\nABCDE1234F"), Some("14/08/1987".to_string()));
    }

    #[test]
    fn test_labelled_date_preferred() {
        let text = "Issued 01/01/2020\nDOB: 14/08/1987";
        assert_eq!(extract_dob(text), Some("14/08/1987".to_string()));

        let first_match = DobExtractor::new()
            .with_labelled_preference(false)
            .extract(text)
            .map(|m| m.value);
        assert_eq!(first_match, Some("01/01/2020".to_string()));
    }

    #[test]
    fn test_labelled_date_not_duplicated() {
        let all = DobExtractor::new().extract_all("DOB 14/08/1987");
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].confidence, 0.95);
    }

    #[test]
    fn test_no_date() {
        assert_eq!(extract_dob("14-08-1987"), None);
    }
}
