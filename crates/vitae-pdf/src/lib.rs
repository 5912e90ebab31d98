//! vitae-pdf - PDF export of the resume page
//!
//! This crate renders the live resume page to a PDF file with a headless
//! browser.
//!
//! # Architecture
//!
//! The export is a linear pipeline over one browser session:
//!
//! 1. **Launch** - the [`RenderEngine`] starts a browser with a blank page
//! 2. **Navigate** - load the source URL and wait for network idle
//! 3. **Print media** - switch CSS media emulation to `print`
//! 4. **Print** - write the PDF with the configured [`PdfOptions`]
//! 5. **Release** - close the browser, on success and on failure
//!
//! # Example
//!
//! ```ignore
//! use vitae_pdf::{export_pdf, ChromiumEngine, RenderConfig};
//!
//! let config = RenderConfig::new("public/resume.pdf", "http://localhost:4321/");
//! let path = export_pdf(&ChromiumEngine::new(), &config).await?;
//! ```

mod chromium;
mod engine;
mod error;
mod export;
mod options;

pub use chromium::{ChromiumEngine, ChromiumSession, DEFAULT_NAVIGATION_TIMEOUT};
pub use engine::{RenderEngine, RenderSession};
pub use error::{RenderError, Result};
pub use export::export_pdf;
pub use options::{Length, Margin, Orientation, PageFormat, PdfOptions, RenderConfig, Unit};

/// Source URL of the locally served resume page
pub const DEFAULT_SOURCE_URL: &str = "http://localhost:4321/";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_structure() {
        // Verify exports are accessible
        let _ = ChromiumEngine::new;
        let _: fn(std::path::PathBuf, String) -> RenderConfig = RenderConfig::new;
        let _ = PdfOptions::default;
    }

    #[test]
    fn test_default_url_is_valid() {
        let config = RenderConfig::new("resume.pdf", DEFAULT_SOURCE_URL);
        assert!(config.validate().is_ok());
    }
}
