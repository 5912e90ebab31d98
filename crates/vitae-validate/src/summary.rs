//! Resume statistics printed after a successful validation

use std::fmt;

use serde::Serialize;
use vitae_model::ResumeDocument;

/// Section counts of a validated document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResumeSummary {
    pub experience: usize,
    pub projects: usize,
    pub education: usize,
    pub skills: usize,
}

impl ResumeSummary {
    /// Count the sections of a document
    pub fn of(doc: &ResumeDocument) -> Self {
        Self {
            experience: doc.experience.len(),
            projects: doc.projects.len(),
            education: doc.education.len(),
            skills: doc.skills.len(),
        }
    }
}

impl fmt::Display for ResumeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Resume Statistics:")?;
        writeln!(f, "- {} work experiences", self.experience)?;
        writeln!(f, "- {} projects", self.projects)?;
        writeln!(f, "- {} education entries", self.education)?;
        write!(f, "- {} skills listed", self.skills)
    }
}
