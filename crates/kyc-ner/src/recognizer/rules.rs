//! Rule-based person-name recognizer.

use std::collections::HashSet;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use super::EntityRecognizer;
use crate::{EntitySpan, NerError, Result};

lazy_static! {
    // Title Case word, ALL CAPS word, or a single initial.
    static ref NAME_WORD: Regex = Regex::new(r"^(?:[A-Z][a-z]+|[A-Z]{2,}|[A-Z])$").unwrap();

    static ref HONORIFIC: Regex = Regex::new(
        r"(?i)^(?:shri|shree|smt|sri|kumari|kum|mr|mrs|ms|dr)\.?$"
    ).unwrap();

    /// Header and label words printed on identity cards.
    static ref DEFAULT_STOP_WORDS: HashSet<&'static str> = [
        "INCOME", "TAX", "DEPARTMENT", "GOVT", "GOVERNMENT", "INDIA", "BHARAT",
        "SARKAR", "PERMANENT", "ACCOUNT", "NUMBER", "CARD", "NAME", "FATHER",
        "FATHERS", "MOTHER", "HUSBAND", "DATE", "BIRTH", "DOB", "SIGNATURE",
        "UNIQUE", "IDENTIFICATION", "AUTHORITY", "AADHAAR", "ENROLMENT",
        "ENROLLMENT", "VID", "ELECTION", "COMMISSION", "ELECTOR", "ELECTORS",
        "IDENTITY", "EPIC", "MALE", "FEMALE", "SEX", "AGE", "ADDRESS", "YEAR",
        "ISSUE", "OF", "THE", "AND", "TO", "MY", "NO",
    ]
    .into_iter()
    .collect();
}

const MIN_RUN: usize = 2;
const MAX_RUN: usize = 4;

/// Model-free recognizer that tags capitalized word runs as `PERSON`.
///
/// A run is a sequence of consecutive capitalized Latin words on one line
/// that are not stop words. Runs of 2-4 words are emitted; a run following an
/// honorific (Shri, Smt, Mr, ...) is emitted even when it is a single word.
#[derive(Debug, Clone, Default)]
pub struct RuleBasedRecognizer {
    extra_stop_words: HashSet<String>,
}

impl RuleBasedRecognizer {
    /// Create a recognizer with the built-in stop list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add stop words on top of the built-in list.
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extra_stop_words
            .extend(words.into_iter().map(|w| w.as_ref().trim().to_uppercase()));
        self
    }

    /// Create a recognizer with extra stop words read from a gazetteer file.
    ///
    /// The file holds one word per line; blank lines and lines starting with
    /// `#` are ignored.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| NerError::GazetteerLoad {
            path: path.to_path_buf(),
            source,
        })?;

        let words: Vec<&str> = content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .collect();

        debug!("Loaded {} gazetteer stop words from {}", words.len(), path.display());

        Ok(Self::new().with_stop_words(words))
    }

    fn is_stop_word(&self, word: &str) -> bool {
        let upper = word.to_uppercase();
        DEFAULT_STOP_WORDS.contains(upper.as_str()) || self.extra_stop_words.contains(&upper)
    }

    fn recognize_line(&self, line: &str, spans: &mut Vec<EntitySpan>) {
        let mut run: Vec<&str> = Vec::new();
        let mut after_honorific = false;

        for raw in line.split_whitespace() {
            let word = raw.trim_matches(|c: char| matches!(c, '.' | ',' | ':' | ';' | '|' | '-'));

            if HONORIFIC.is_match(raw) {
                flush_run(&mut run, after_honorific, spans);
                after_honorific = true;
                continue;
            }

            if !word.is_empty() && NAME_WORD.is_match(word) && !self.is_stop_word(word) {
                run.push(word);
                // A trailing separator ends the run.
                if raw.ends_with(',') || raw.ends_with(':') || raw.ends_with(';') {
                    flush_run(&mut run, after_honorific, spans);
                    after_honorific = false;
                }
            } else {
                flush_run(&mut run, after_honorific, spans);
                after_honorific = false;
            }
        }

        flush_run(&mut run, after_honorific, spans);
    }
}

fn flush_run(run: &mut Vec<&str>, after_honorific: bool, spans: &mut Vec<EntitySpan>) {
    let min = if after_honorific { 1 } else { MIN_RUN };
    if run.len() >= min && run.len() <= MAX_RUN {
        spans.push(EntitySpan::person(run.join(" ")));
    }
    run.clear();
}

impl EntityRecognizer for RuleBasedRecognizer {
    fn recognizer_id(&self) -> &str {
        "rules"
    }

    fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>> {
        let mut spans = Vec::new();
        for line in text.lines() {
            self.recognize_line(line, &mut spans);
        }
        Ok(spans)
    }
}
