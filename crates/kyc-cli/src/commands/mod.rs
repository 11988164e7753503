//! Subcommands and the helpers they share.

pub mod batch;
pub mod config;
pub mod process;

use std::path::{Path, PathBuf};

use clap::Args;
use tracing::debug;

use kyc_core::models::config::KycConfig;
use kyc_core::{register, DocumentFields, DocumentParser, JsonFileStore, ParsedDocument, ProcessingReport};

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    /// File extension for outputs in this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Text => "txt",
        }
    }
}

/// Duplicate-check store options shared by `process` and `batch`.
#[derive(Args)]
pub struct StoreArgs {
    /// Record store file (overrides config)
    #[arg(long, value_name = "PATH", conflicts_with = "no_store")]
    store: Option<PathBuf>,

    /// Skip the duplicate check
    #[arg(long)]
    no_store: bool,
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("kyc")
        .join("config.json")
}

/// Load the config from `-c`, then the default path, then defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<KycConfig> {
    if let Some(path) = config_path {
        return KycConfig::from_file(Path::new(path))
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e));
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Loading config from {}", default_path.display());
        return KycConfig::from_file(&default_path)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e));
    }

    Ok(KycConfig::default())
}

/// Build the entity recognizer once and wrap it in a parser.
pub fn build_parser(config: &KycConfig) -> anyhow::Result<DocumentParser> {
    DocumentParser::configured(config)
        .map_err(|e| anyhow::anyhow!("Failed to start entity recognizer: {}", e))
}

/// Open the record store unless disabled by flag or config.
pub fn open_store(config: &KycConfig, args: &StoreArgs) -> anyhow::Result<Option<JsonFileStore>> {
    if args.no_store || (args.store.is_none() && !config.store.enabled) {
        debug!("Duplicate check disabled");
        return Ok(None);
    }

    let path = args.store.as_deref().unwrap_or(&config.store.path);
    let store = JsonFileStore::open(path)
        .map_err(|e| anyhow::anyhow!("Failed to open record store {}: {}", path.display(), e))?;

    Ok(Some(store))
}

/// Run the duplicate check if a store is open.
pub fn make_report(
    store: Option<&mut JsonFileStore>,
    parsed: ParsedDocument,
) -> anyhow::Result<ProcessingReport> {
    match store {
        Some(store) => Ok(register(store, parsed)?),
        None => Ok(ProcessingReport::unchecked(parsed)),
    }
}

pub const CSV_HEADER: [&str; 8] = [
    "document_type",
    "parsed",
    "duplicate",
    "number",
    "name",
    "name_hindi",
    "date_of_birth",
    "gender",
];

/// Flatten a report into CSV columns matching [`CSV_HEADER`].
pub fn csv_columns(report: &ProcessingReport) -> Vec<String> {
    let fields = report.data.as_ref();

    let (name_hindi, date_of_birth, gender) = match fields {
        Some(DocumentFields::Pan(d)) => (None, d.date_of_birth.clone(), None),
        Some(DocumentFields::Aadhaar(d)) => (
            None,
            d.date_of_birth.clone(),
            d.gender.map(|g| g.to_string()),
        ),
        Some(DocumentFields::VoterId(d)) => (d.name_hindi.clone(), None, None),
        None => (None, None, None),
    };

    vec![
        report.document_type.to_string(),
        report.is_successfully_parsed.to_string(),
        report.is_duplicate.map(|d| d.to_string()).unwrap_or_default(),
        fields.and_then(|f| f.unique_key()).unwrap_or_default().to_string(),
        fields.and_then(|f| f.holder_name()).unwrap_or_default().to_string(),
        name_hindi.unwrap_or_default(),
        date_of_birth.unwrap_or_default(),
        gender.unwrap_or_default(),
    ]
}

pub fn format_report(report: &ProcessingReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(report)?),
        OutputFormat::Csv => format_csv(report),
        OutputFormat::Text => Ok(format_text(report)),
    }
}

fn format_csv(report: &ProcessingReport) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(CSV_HEADER)?;
    wtr.write_record(csv_columns(report))?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(report: &ProcessingReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("Document: {}\n", report.document_type));

    let Some(fields) = &report.data else {
        output.push_str("Not recognized as a supported document\n");
        return output;
    };

    match fields {
        DocumentFields::Pan(d) => {
            push_field(&mut output, "PAN", d.number.as_deref());
            push_field(&mut output, "Name", d.name.as_deref());
            push_field(&mut output, "Date of birth", d.date_of_birth.as_deref());
        }
        DocumentFields::Aadhaar(d) => {
            push_field(&mut output, "Aadhaar", d.number.as_deref());
            push_field(&mut output, "Name", d.name.as_deref());
            push_field(&mut output, "Date of birth", d.date_of_birth.as_deref());
            let gender = d.gender.map(|g| g.to_string());
            push_field(&mut output, "Gender", gender.as_deref());
        }
        DocumentFields::VoterId(d) => {
            push_field(&mut output, "Voter ID", d.voter_id.as_deref());
            push_field(&mut output, "Name", d.name_english.as_deref());
            push_field(&mut output, "Name (Hindi)", d.name_hindi.as_deref());
        }
    }

    match report.is_duplicate {
        Some(true) => output.push_str("\nDuplicate: yes\n"),
        Some(false) => output.push_str("\nDuplicate: no\n"),
        None => {}
    }

    output
}

fn push_field(output: &mut String, label: &str, value: Option<&str>) {
    output.push_str(&format!("{:<14} {}\n", format!("{}:", label), value.unwrap_or("-")));
}
