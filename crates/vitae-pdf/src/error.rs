//! Error types for PDF export

use thiserror::Error;

/// Result type for PDF export operations
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while exporting the resume page to PDF
#[derive(Error, Debug)]
pub enum RenderError {
    /// The browser could not be launched or prepared
    #[error("Failed to setup browser: {0}")]
    EngineAcquisition(String),

    /// The page could not be loaded (unreachable, failed, or timed out)
    #[error("Failed to load page: {0}")]
    Navigation(String),

    /// Print media emulation or PDF generation failed
    #[error("Failed to generate PDF: {0}")]
    Render(String),

    /// The browser could not be shut down
    #[error("Failed to release browser: {0}")]
    Release(String),

    /// The export configuration was rejected before launching anything
    #[error("Invalid PDF options: {0}")]
    InvalidOptions(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RenderError {
    /// Check if the failure happened while loading the source page
    pub fn is_navigation(&self) -> bool {
        matches!(self, RenderError::Navigation(_))
    }
}
