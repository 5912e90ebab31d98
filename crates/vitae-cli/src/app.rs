//! CLI application logic
//!
//! Contains the two command implementations and their argument parsers.
//! Commands write to the streams they are given so the binaries stay thin.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde_json::{json, Value};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use vitae_model::DEFAULT_PDF_NAME;
use vitae_pdf::{export_pdf, ChromiumEngine, RenderConfig, RenderEngine};
use vitae_validate::{ResumeSummary, ValidationEngine};

use crate::config::Settings;
use crate::loader::load_document;

/// Output format for validation results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for tool consumption
    Json,
}

/// Outcome of a validation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid,
}

/// Check the resume document against the schema
#[derive(Parser, Debug)]
#[command(name = "validate-resume")]
#[command(author, version, about = "Validate the resume document", long_about = None)]
pub struct ValidateArgs {
    /// Resume JSON file (defaults to the configured path)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Render the served resume page to PDF
#[derive(Parser, Debug)]
#[command(name = "generate-pdf")]
#[command(author, version, about = "Export the resume page to PDF", long_about = None)]
pub struct GeneratePdfArgs {
    /// Resume JSON file the PDF file name is read from
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output PDF path (defaults to <public_dir>/<document pdf name>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// URL of the served resume page
    #[arg(short, long)]
    pub url: Option<String>,

    /// Configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` overrides the default `warn` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Entry point of the `validate-resume` binary
pub fn run_validate() -> Result<ValidationOutcome> {
    let args = ValidateArgs::parse();
    let settings = Settings::load(args.config.as_deref())?;
    let input = args.input.unwrap_or(settings.resume.path);

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    validate_command(&input, args.format, &mut stdout.lock(), &mut stderr.lock())
}

/// Execute the validate command
///
/// Load errors propagate as `Err`; schema violations are reported on `err`
/// (or as JSON on `out`) and yield [`ValidationOutcome::Invalid`].
pub fn validate_command(
    input: &Path,
    format: OutputFormat,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<ValidationOutcome> {
    let document = load_document(input)?;
    let engine = ValidationEngine::with_defaults();

    match (engine.validate(&document), format) {
        (Ok(resume), OutputFormat::Text) => {
            writeln!(out, "✅ Resume data is valid")?;
            writeln!(out)?;
            writeln!(out, "{}", ResumeSummary::of(&resume))?;
            Ok(ValidationOutcome::Valid)
        }
        (Ok(resume), OutputFormat::Json) => {
            let report = json!({
                "valid": true,
                "summary": ResumeSummary::of(&resume),
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            Ok(ValidationOutcome::Valid)
        }
        (Err(errors), OutputFormat::Text) => {
            writeln!(err, "❌ Resume validation failed:")?;
            for error in &errors {
                writeln!(err, "- {}", error)?;
            }
            Ok(ValidationOutcome::Invalid)
        }
        (Err(errors), OutputFormat::Json) => {
            let report = json!({
                "valid": false,
                "errors": errors.into_vec(),
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            Ok(ValidationOutcome::Invalid)
        }
    }
}

/// Entry point of the `generate-pdf` binary
pub async fn run_generate_pdf() -> Result<PathBuf> {
    let args = GeneratePdfArgs::parse();
    let mut settings = Settings::load(args.config.as_deref())?;

    if let Some(url) = args.url {
        settings.pdf.url = url;
    }
    if let Some(output) = args.output {
        settings.pdf.output = Some(output);
    }
    let input = args.input.unwrap_or_else(|| settings.resume.path.clone());

    let mut engine = ChromiumEngine::new()
        .with_navigation_timeout(Duration::from_secs(settings.pdf.navigation_timeout_secs));
    if let Some(chrome) = &settings.pdf.chrome {
        engine = engine.with_executable(chrome);
    }

    let stdout = std::io::stdout();
    generate_pdf_command(&engine, &input, &settings, &mut stdout.lock()).await
}

/// Execute the PDF export
///
/// The output file name comes from the document's `pdf` field, so the
/// document is loaded first; it is not schema-checked here.
pub async fn generate_pdf_command<E: RenderEngine>(
    engine: &E,
    input: &Path,
    settings: &Settings,
    out: &mut dyn Write,
) -> Result<PathBuf> {
    let document = load_document(input)?;
    let pdf_name = declared_pdf_name(&document);
    let output = settings.pdf.output_path(pdf_name);
    debug!("Resume {} declares PDF name {}", input.display(), pdf_name);

    let config = RenderConfig::new(output, settings.pdf.url.clone())
        .with_options(settings.pdf.options.clone());
    let path = export_pdf(engine, &config).await?;

    writeln!(out, "PDF generated successfully at: {}", path.display())
        .context("Failed to write to stdout")?;
    Ok(path)
}

/// PDF file name declared by the document, or the default
fn declared_pdf_name(document: &Value) -> &str {
    document
        .get("pdf")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_PDF_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_pdf_name() {
        assert_eq!(declared_pdf_name(&json!({ "pdf": "jane.pdf" })), "jane.pdf");
        assert_eq!(declared_pdf_name(&json!({ "pdf": "" })), DEFAULT_PDF_NAME);
        assert_eq!(declared_pdf_name(&json!({ "pdf": 3 })), DEFAULT_PDF_NAME);
        assert_eq!(declared_pdf_name(&json!({})), DEFAULT_PDF_NAME);
        assert_eq!(declared_pdf_name(&json!([])), DEFAULT_PDF_NAME);
    }

    #[test]
    fn test_validate_args_no_flags() {
        let args = ValidateArgs::try_parse_from(["validate-resume"]).unwrap();
        assert!(args.input.is_none());
        assert!(args.config.is_none());
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn test_validate_args_json() {
        let args =
            ValidateArgs::try_parse_from(["validate-resume", "--format", "json", "-i", "cv.json"])
                .unwrap();
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.input, Some(PathBuf::from("cv.json")));
    }

    #[test]
    fn test_generate_args_no_flags() {
        let args = GeneratePdfArgs::try_parse_from(["generate-pdf"]).unwrap();
        assert!(args.output.is_none());
        assert!(args.url.is_none());
    }

    #[test]
    fn test_generate_args_overrides() {
        let args = GeneratePdfArgs::try_parse_from([
            "generate-pdf",
            "--url",
            "http://localhost:3000/",
            "--output",
            "out/cv.pdf",
        ])
        .unwrap();
        assert_eq!(args.url.as_deref(), Some("http://localhost:3000/"));
        assert_eq!(args.output, Some(PathBuf::from("out/cv.pdf")));
    }
}
