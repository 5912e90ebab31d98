//! Render engine abstraction
//!
//! An engine launches a browser session; a session loads one page, switches
//! it to print media and prints it. [`export_pdf`](crate::export_pdf) owns
//! the session for the whole export and closes it on every exit path.

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;
use crate::options::PdfOptions;

/// Launches render sessions
#[async_trait]
pub trait RenderEngine: Send + Sync {
    /// Session type produced by [`RenderEngine::launch`]
    type Session: RenderSession;

    /// Get a human-readable name for this engine
    fn name(&self) -> &'static str;

    /// Start a browser and open a blank page
    ///
    /// Failures map to [`RenderError::EngineAcquisition`](crate::RenderError).
    async fn launch(&self) -> Result<Self::Session>;
}

/// A live browser with one page
#[async_trait]
pub trait RenderSession: Send {
    /// Load `url` and wait until the page has no in-flight network requests
    async fn navigate(&mut self, url: &str) -> Result<()>;

    /// Switch CSS media emulation to `print`
    async fn emulate_print_media(&mut self) -> Result<()>;

    /// Print the current page to a PDF file at `output`
    async fn print_to_file(&mut self, options: &PdfOptions, output: &Path) -> Result<()>;

    /// Shut the browser down
    ///
    /// Called exactly once, after the last page operation, whatever its outcome.
    async fn close(&mut self) -> Result<()>;
}
