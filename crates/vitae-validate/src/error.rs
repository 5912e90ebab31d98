//! Field-level validation errors

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::path::FieldPath;

/// A single constraint violation
///
/// `path` is the dotted location of the offending value inside the
/// document (`contact.email`, `experience[2].endDate`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Dotted field path
    pub path: String,
    /// Human-readable reason
    pub message: String,
}

impl FieldError {
    /// Create a new field error at the given path
    pub fn new(path: &FieldPath, message: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            message: message.into(),
        }
    }

    /// Error for a field that is absent
    pub fn required(path: &FieldPath) -> Self {
        Self::new(path, "Required")
    }

    /// Error for a value of the wrong JSON type
    pub fn type_mismatch(path: &FieldPath, expected: &str, received: &str) -> Self {
        Self::new(path, format!("Expected {}, received {}", expected, received))
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Every violation found in one validation pass, in check order
///
/// Never empty: a pass without violations yields a document instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("resume validation failed with {} error(s)", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Wrap a non-empty list of errors
    ///
    /// Returns `None` when `errors` is empty.
    pub fn new(errors: Vec<FieldError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    /// Report consisting of one violation
    pub fn single(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Get the number of violations
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Check if there are no violations (never true for a constructed value)
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterate over the violations in check order
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    /// Check if any violation sits at exactly `path`
    pub fn contains_path(&self, path: &str) -> bool {
        self.errors.iter().any(|e| e.path == path)
    }

    /// Consume into the underlying list
    pub fn into_vec(self) -> Vec<FieldError> {
        self.errors
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
