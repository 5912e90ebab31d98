//! vitae-model - Resume document definitions
//!
//! This crate provides the typed representation of the JSON resume document
//! published by the site and embedded in the rendered PDF.

pub mod document;

pub use document::{About, Contact, Education, Experience, Project, ResumeDocument};

/// File name used for the published PDF when the document does not declare one
pub const DEFAULT_PDF_NAME: &str = "resume.pdf";

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
