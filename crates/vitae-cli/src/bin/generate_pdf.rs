//! generate-pdf binary entry point
//!
//! Requires the resume site to be served locally before running.

use anyhow::Result;
use vitae_cli::{init_tracing, run_generate_pdf};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    run_generate_pdf().await?;
    Ok(())
}
