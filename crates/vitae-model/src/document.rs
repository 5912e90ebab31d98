//! Resume document and its nested records
//!
//! Field names follow the camelCase keys of the JSON source (`afterHours`,
//! `footerNote`, `startDate`, ...).

use serde::{Deserialize, Serialize};

use crate::DEFAULT_PDF_NAME;

/// A complete resume document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    /// Full name of the person
    pub name: String,
    /// Professional title
    pub title: String,
    /// Contact channels
    pub contact: Contact,
    /// Summary and portrait
    pub about: About,
    /// File name of the published PDF
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf: Option<String>,
    /// Portfolio projects, in display order
    pub projects: Vec<Project>,
    /// Work history, in display order
    pub experience: Vec<Experience>,
    /// Education history, in display order
    pub education: Vec<Education>,
    /// Free-form section about life outside work
    pub after_hours: String,
    /// Skill keywords
    pub skills: Vec<String>,
    /// Text shown in the page footer
    pub footer_note: String,
}

/// Contact channels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub website: String,
    pub linkedin: String,
    pub github: String,
}

/// The "about" section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub summary: String,
    /// Path or identifier of the portrait image (not a URL)
    pub photo: String,
}

/// A portfolio project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub url: String,
}

/// A work experience entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub responsibilities: String,
    pub website: String,
    /// `YYYY-MM-DD`
    pub start_date: String,
    /// `YYYY-MM-DD` or `Present`
    pub end_date: String,
}

/// An education entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
}

impl ResumeDocument {
    /// File name of the published PDF, falling back to [`DEFAULT_PDF_NAME`]
    pub fn pdf_file_name(&self) -> &str {
        self.pdf.as_deref().unwrap_or(DEFAULT_PDF_NAME)
    }
}

impl Experience {
    /// Literal accepted in place of an end date for the current position
    pub const PRESENT: &'static str = "Present";
}
