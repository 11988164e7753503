//! Document classification and field extraction.

mod classifier;
mod parser;
pub mod rules;

pub use classifier::{classify, Classification, DocumentClassifier, Evidence};
pub use parser::DocumentParser;
