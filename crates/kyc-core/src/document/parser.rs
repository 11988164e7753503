//! Document parser composing classification, number extraction and name
//! extraction.

use std::sync::Arc;
use std::time::Instant;

use kyc_ner::{EntityRecognizer, EntitySpan, NoopRecognizer, RuleBasedRecognizer};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::models::config::KycConfig;
use crate::models::document::*;

use super::classifier::DocumentClassifier;
use super::rules::{
    aadhaar::extract_aadhaar_number,
    dates::DobExtractor,
    gender::extract_gender,
    name::{Candidate, NameExtractor, NameProfile},
    pan::extract_pan_number,
    voter_id::extract_voter_id,
    FieldExtractor,
};

/// Parser turning OCR text into a typed document record.
///
/// The entity recognizer is a shared handle built once by the caller; the
/// parser itself holds no mutable state, so one instance can serve many
/// documents concurrently.
#[derive(Clone)]
pub struct DocumentParser {
    recognizer: Arc<dyn EntityRecognizer>,
    classifier: DocumentClassifier,
    dob: DobExtractor,
    use_ner: bool,
}

impl DocumentParser {
    /// Create a parser with default settings.
    pub fn new(recognizer: Arc<dyn EntityRecognizer>) -> Self {
        Self {
            recognizer,
            classifier: DocumentClassifier::new(),
            dob: DobExtractor::new(),
            use_ner: true,
        }
    }

    /// Create a parser configured from a [`KycConfig`].
    pub fn from_config(recognizer: Arc<dyn EntityRecognizer>, config: &KycConfig) -> Self {
        Self::new(recognizer)
            .with_voter_id_detection(config.classification.detect_voter_id)
            .with_labelled_dob(config.extraction.prefer_labelled_dob)
            .with_ner(config.extraction.use_ner)
    }

    /// Build the recognizer the config asks for and a parser around it.
    ///
    /// Fails when the configured gazetteer cannot be read.
    pub fn configured(config: &KycConfig) -> Result<Self> {
        let recognizer: Arc<dyn EntityRecognizer> = if !config.extraction.use_ner {
            Arc::new(NoopRecognizer)
        } else if let Some(path) = &config.ner.gazetteer {
            Arc::new(RuleBasedRecognizer::from_file(path)?)
        } else {
            Arc::new(RuleBasedRecognizer::new())
        };

        info!("Using entity recognizer '{}'", recognizer.recognizer_id());

        Ok(Self::from_config(recognizer, config))
    }

    /// Set Voter ID detection in the classifier.
    pub fn with_voter_id_detection(mut self, detect: bool) -> Self {
        self.classifier = self.classifier.with_voter_id_detection(detect);
        self
    }

    /// Set whether labelled dates of birth are preferred.
    pub fn with_labelled_dob(mut self, prefer: bool) -> Self {
        self.dob = DobExtractor::new().with_labelled_preference(prefer);
        self
    }

    /// Set whether recognizer spans are used as name candidates.
    pub fn with_ner(mut self, use_ner: bool) -> Self {
        self.use_ner = use_ner;
        self
    }

    /// The classifier used by [`process`](Self::process).
    pub fn classifier(&self) -> &DocumentClassifier {
        &self.classifier
    }

    /// Classify the text once and extract the fields of that type.
    pub fn process(&self, text: &str) -> ParsedDocument {
        let start = Instant::now();
        let document_type = self.classifier.classify(text);
        let parsed = self.parse_as(document_type, text);

        info!(
            "Parsed {} document from {} characters in {}ms",
            document_type,
            text.len(),
            start.elapsed().as_millis()
        );

        parsed
    }

    /// Extract fields as the given type, without classifying.
    pub fn parse_as(&self, document_type: DocumentType, text: &str) -> ParsedDocument {
        let entities = self.entities_for(document_type, text);
        self.parse_with(document_type, text, &entities)
    }

    /// Extract fields as the given type and return the name candidates the
    /// extractor considered, in priority order. The recognizer runs once.
    pub fn parse_explained(
        &self,
        document_type: DocumentType,
        text: &str,
    ) -> (ParsedDocument, Vec<Candidate>) {
        let entities = self.entities_for(document_type, text);
        let candidates = NameProfile::for_document(document_type)
            .map(|profile| NameExtractor::new(profile).candidates(text, &entities))
            .unwrap_or_default();

        (self.parse_with(document_type, text, &entities), candidates)
    }

    fn parse_with(
        &self,
        document_type: DocumentType,
        text: &str,
        entities: &[EntitySpan],
    ) -> ParsedDocument {
        let fields = match document_type {
            DocumentType::Pan => Some(DocumentFields::Pan(self.parse_pan(text, entities))),
            DocumentType::Aadhaar => {
                Some(DocumentFields::Aadhaar(self.parse_aadhaar(text, entities)))
            }
            DocumentType::VoterId => Some(DocumentFields::VoterId(self.parse_voter_id(text))),
            DocumentType::Unknown => None,
        };

        ParsedDocument {
            document_type,
            fields,
        }
    }

    /// Voter ID names come from labels only, so only PAN and Aadhaar text
    /// reaches the recognizer.
    fn entities_for(&self, document_type: DocumentType, text: &str) -> Vec<EntitySpan> {
        match document_type {
            DocumentType::Pan | DocumentType::Aadhaar => self.entities(text),
            DocumentType::VoterId | DocumentType::Unknown => Vec::new(),
        }
    }

    /// Run the recognizer once. Failures degrade to no spans.
    fn entities(&self, text: &str) -> Vec<EntitySpan> {
        if !self.use_ner {
            return Vec::new();
        }

        match self.recognizer.recognize(text) {
            Ok(spans) => {
                debug!(
                    "Recognizer '{}' returned {} spans",
                    self.recognizer.recognizer_id(),
                    spans.len()
                );
                spans
            }
            Err(e) => {
                warn!(
                    "Recognizer '{}' failed, continuing without entities: {}",
                    self.recognizer.recognizer_id(),
                    e
                );
                Vec::new()
            }
        }
    }

    fn extract_dob(&self, text: &str) -> Option<String> {
        self.dob.extract(text).map(|m| m.value)
    }

    fn parse_pan(&self, text: &str, entities: &[EntitySpan]) -> PanDetails {
        PanDetails {
            number: extract_pan_number(text),
            date_of_birth: self.extract_dob(text),
            name: NameExtractor::new(NameProfile::Pan).extract(text, entities),
        }
    }

    fn parse_aadhaar(&self, text: &str, entities: &[EntitySpan]) -> AadhaarDetails {
        AadhaarDetails {
            number: extract_aadhaar_number(text),
            name: NameExtractor::new(NameProfile::Aadhaar).extract(text, entities),
            date_of_birth: self.extract_dob(text),
            gender: extract_gender(text),
        }
    }

    fn parse_voter_id(&self, text: &str) -> VoterIdDetails {
        let names = NameExtractor::new(NameProfile::VoterId).extract_bilingual(text, &[]);

        VoterIdDetails {
            voter_id: extract_voter_id(text),
            name_english: names.english,
            name_hindi: names.hindi,
        }
    }
}
