//! vitae-validate - Resume document validation
//!
//! This crate checks an arbitrary parsed JSON value against the resume
//! document schema and, when every constraint holds, produces a typed
//! [`ResumeDocument`].
//!
//! # Architecture
//!
//! Each top-level section of the document has its own validator
//! implementing the `Validator` trait. The `ValidationEngine` runs them in
//! field order and aggregates every violation into one report; a value of
//! the wrong structural type only hides the subtree below it.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use vitae_validate::ValidationEngine;
//!
//! let engine = ValidationEngine::with_defaults();
//! let errors = engine.validate(&json!({ "title": "Engineer" })).unwrap_err();
//! assert!(errors.contains_path("name"));
//! ```

pub mod error;
mod fields;
pub mod formats;
pub mod path;
pub mod sections;
pub mod summary;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use vitae_model::ResumeDocument;

pub use error::{FieldError, ValidationErrors};
pub use formats::Format;
pub use path::FieldPath;
pub use sections::{
    AboutValidator, ContactValidator, EducationValidator, ExperienceValidator,
    IdentityValidator, NarrativeValidator, ObsoleteShapeValidator, ProjectsValidator,
    PublicationValidator,
};
pub use summary::ResumeSummary;

/// Trait for section validators
///
/// Validators inspect the raw document and return a violation for every
/// constraint they find broken, in the order the fields are declared.
pub trait Validator: Send + Sync {
    /// Get the validator's unique code (e.g., "RES1")
    fn code(&self) -> &'static str;

    /// Get a human-readable name for this validator
    fn name(&self) -> &'static str {
        "unnamed"
    }

    /// Validate the document and return any violations
    fn validate(&self, doc: &Value) -> Vec<FieldError>;
}

/// Validation engine that orchestrates the section validators
pub struct ValidationEngine {
    validators: Vec<Box<dyn Validator>>,
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationEngine {
    /// Create a new empty validation engine
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    /// Create an engine covering the whole resume schema
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_validator(Box::new(IdentityValidator));
        engine.add_validator(Box::new(ContactValidator));
        engine.add_validator(Box::new(AboutValidator));
        engine.add_validator(Box::new(PublicationValidator));
        engine.add_validator(Box::new(ProjectsValidator));
        engine.add_validator(Box::new(ExperienceValidator));
        engine.add_validator(Box::new(EducationValidator));
        engine.add_validator(Box::new(NarrativeValidator));
        engine.add_validator(Box::new(ObsoleteShapeValidator));
        engine
    }

    /// Add a validator to the engine
    pub fn add_validator(&mut self, validator: Box<dyn Validator>) {
        self.validators.push(validator);
    }

    /// Get the number of registered validators
    pub fn validator_count(&self) -> usize {
        self.validators.len()
    }

    /// Get the names of all registered validators
    pub fn validator_names(&self) -> Vec<&'static str> {
        self.validators.iter().map(|v| v.name()).collect()
    }

    /// Collect every violation in the document, in check order
    pub fn check(&self, doc: &Value) -> Vec<FieldError> {
        if !doc.is_object() {
            return vec![FieldError::type_mismatch(
                &FieldPath::root(),
                "object",
                fields::type_name(doc),
            )];
        }

        let mut errors = Vec::new();
        for validator in &self.validators {
            let found = validator.validate(doc);
            if !found.is_empty() {
                debug!(
                    "{} ({}) reported {} violation(s)",
                    validator.name(),
                    validator.code(),
                    found.len()
                );
            }
            errors.extend(found);
        }
        errors
    }

    /// Validate a document, producing its typed form on success
    pub fn validate(&self, doc: &Value) -> Result<ResumeDocument, ValidationErrors> {
        if let Some(errors) = ValidationErrors::new(self.check(doc)) {
            return Err(errors);
        }

        // A partial validator set can leave fields unchecked
        ResumeDocument::deserialize(doc).map_err(|e| {
            ValidationErrors::single(FieldError::new(&FieldPath::root(), e.to_string()))
        })
    }
}

/// Validate a document against the full resume schema
pub fn validate(doc: &Value) -> Result<ResumeDocument, ValidationErrors> {
    ValidationEngine::with_defaults().validate(doc)
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_engine_new() {
        let engine = ValidationEngine::new();
        assert_eq!(engine.validator_count(), 0);
    }

    #[test]
    fn test_engine_with_defaults() {
        let engine = ValidationEngine::with_defaults();
        assert_eq!(engine.validator_count(), 9);
        assert!(engine.validator_names().contains(&"contact"));
        assert!(engine.validator_names().contains(&"obsolete-shape"));
    }

    #[test]
    fn test_non_object_root() {
        let errors = validate(&json!("resume")).unwrap_err();
        assert_eq!(errors.len(), 1);
        let first = errors.iter().next().unwrap();
        assert_eq!(first.path, "(root)");
        assert_eq!(first.message, "Expected object, received string");
    }

    #[test]
    fn test_partial_engine_reports_shortfall() {
        let mut engine = ValidationEngine::new();
        engine.add_validator(Box::new(IdentityValidator));

        let errors = engine
            .validate(&json!({ "name": "Jane", "title": "Engineer" }))
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_path("(root)"));
    }
}
