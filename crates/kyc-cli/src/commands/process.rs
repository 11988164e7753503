//! Process command - parse a single OCR text file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use kyc_core::document::rules::{Candidate, CandidateSource};
use kyc_core::{DocumentParser, DocumentType, Evidence, ParsedDocument};

use super::{build_parser, format_report, load_config, make_report, open_store, OutputFormat, StoreArgs};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input text file, or `-` for stdin
    #[arg(required = true)]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Parse as this document type instead of classifying
    #[arg(short = 't', long = "type", value_enum)]
    document_type: Option<DocumentKind>,

    #[command(flatten)]
    store: StoreArgs,

    /// Print classification evidence and name candidates to stderr
    #[arg(long)]
    explain: bool,
}

/// Document types that can be forced with `--type`.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum DocumentKind {
    Pan,
    Aadhaar,
    VoterId,
}

impl From<DocumentKind> for DocumentType {
    fn from(kind: DocumentKind) -> Self {
        match kind {
            DocumentKind::Pan => DocumentType::Pan,
            DocumentKind::Aadhaar => DocumentType::Aadhaar,
            DocumentKind::VoterId => DocumentType::VoterId,
        }
    }
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;

    let text = read_input(&args.input)?;
    if text.trim().is_empty() {
        anyhow::bail!("No text found in input: {}", args.input);
    }

    info!("Processing input: {}", args.input);

    let parser = build_parser(&config)?;
    let mut store = open_store(&config, &args.store)?;

    let parsed = if args.explain {
        explain(&parser, &text, args.document_type.map(DocumentType::from))
    } else {
        match args.document_type {
            Some(kind) => parser.parse_as(kind.into(), &text),
            None => parser.process(&text),
        }
    };

    let report = make_report(store.as_mut(), parsed)?;
    let output = format_report(&report, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if report.is_duplicate == Some(true) {
        eprintln!(
            "{} Document {} was registered before",
            style("!").yellow(),
            report.data.as_ref().and_then(|d| d.unique_key()).unwrap_or_default()
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        return Ok(io::read_to_string(io::stdin())?);
    }

    let path = Path::new(input);
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    Ok(fs::read_to_string(path)?)
}

/// Parse while printing the classification evidence and name candidates.
fn explain(parser: &DocumentParser, text: &str, forced: Option<DocumentType>) -> ParsedDocument {
    let classification = parser.classifier().classify_with_evidence(text);

    eprintln!(
        "{} Classified as {}",
        style("ℹ").blue(),
        style(classification.document_type).bold()
    );
    for evidence in &classification.evidence {
        eprintln!("   - {}", describe_evidence(evidence));
    }
    if let Some(document_type) = forced {
        eprintln!("   parsed as {} (--type)", document_type);
    }

    let document_type = forced.unwrap_or(classification.document_type);
    let (parsed, candidates) = parser.parse_explained(document_type, text);

    if !candidates.is_empty() {
        eprintln!("{} Name candidates, in priority order:", style("ℹ").blue());
        for (i, candidate) in candidates.iter().enumerate() {
            eprintln!("   {}. {}", i + 1, describe_candidate(candidate));
        }
    }

    parsed
}

fn describe_evidence(evidence: &Evidence) -> String {
    match evidence {
        Evidence::Keyword(keyword) => format!("keyword \"{}\"", keyword),
        Evidence::Pattern(matched) => format!("pattern match \"{}\"", matched),
    }
}

fn describe_candidate(candidate: &Candidate) -> String {
    let source = match candidate.source {
        CandidateSource::Ner => "recognizer",
        CandidateSource::LineHeuristic => "line",
        CandidateSource::Label => "label",
    };

    match candidate.origin_line {
        Some(line) => format!("{} ({} {})", candidate.text, source, line + 1),
        None => format!("{} ({})", candidate.text, source),
    }
}
