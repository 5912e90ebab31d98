//! validate-resume binary entry point
//!
//! Exit code 0 for a valid document, 1 for violations or load errors.

use std::process::ExitCode;

use anyhow::Result;
use vitae_cli::{init_tracing, run_validate, ValidationOutcome};

fn main() -> Result<ExitCode> {
    init_tracing();
    match run_validate()? {
        ValidationOutcome::Valid => Ok(ExitCode::SUCCESS),
        ValidationOutcome::Invalid => Ok(ExitCode::FAILURE),
    }
}
