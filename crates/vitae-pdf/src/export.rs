//! Export orchestration
//!
//! load page → wait for network idle → print media → PDF, with the session
//! closed afterwards on every path.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::engine::{RenderEngine, RenderSession};
use crate::error::Result;
use crate::options::RenderConfig;

/// Render `config.url` to a PDF at `config.output_path`
///
/// Returns the output path on success. The configuration is checked before
/// the engine is launched; once launched, the session is closed whether the
/// export succeeds or fails. A failure to close is logged and does not mask
/// the export outcome.
pub async fn export_pdf<E: RenderEngine>(engine: &E, config: &RenderConfig) -> Result<PathBuf> {
    config.validate()?;

    info!("Launching {} render engine", engine.name());
    let mut session = engine.launch().await?;

    let outcome = render(&mut session, config).await;

    if let Err(e) = session.close().await {
        warn!("{}", e);
    }

    outcome.map(|()| config.output_path.clone())
}

async fn render<S: RenderSession>(session: &mut S, config: &RenderConfig) -> Result<()> {
    session.navigate(&config.url).await?;
    session.emulate_print_media().await?;

    if let Some(parent) = config.output_path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    session
        .print_to_file(&config.options, &config.output_path)
        .await?;
    info!("Wrote {}", config.output_path.display());
    Ok(())
}
