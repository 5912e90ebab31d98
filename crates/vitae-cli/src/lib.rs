//! vitae CLI - build-time tools for the resume site
//!
//! This library backs two binaries:
//! - `validate-resume`: check the resume document against the schema
//! - `generate-pdf`: render the served resume page to PDF
//!
//! # Binary Usage
//!
//! ```bash
//! # Validate src/resume.json
//! validate-resume
//!
//! # Export http://localhost:4321/ to public/<pdf name>
//! generate-pdf
//! ```

pub mod app;
pub mod config;
pub mod loader;

pub use app::{
    generate_pdf_command, init_tracing, run_generate_pdf, run_validate, validate_command,
    OutputFormat, ValidationOutcome,
};
pub use config::{ConfigError, Settings};
pub use loader::{load_document, LoadError};
