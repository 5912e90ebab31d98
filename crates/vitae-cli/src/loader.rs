//! Resume document loading
//!
//! Loading is kept apart from validation: a missing or unparseable file is a
//! [`LoadError`], never a field-level violation.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while loading the resume document
#[derive(Debug, Error)]
pub enum LoadError {
    /// The document does not exist
    #[error("Resume file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The document exists but could not be read
    #[error("Failed to read resume file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The document is not valid JSON
    #[error("Resume file {} is not valid JSON: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Read and parse the resume document as untyped JSON
pub fn load_document(path: &Path) -> Result<Value, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file() {
        let err = load_document(Path::new("/nonexistent/resume.json")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
        assert_eq!(
            err.to_string(),
            "Resume file not found: /nonexistent/resume.json"
        );
    }

    #[test]
    fn test_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("resume.json");
        fs::write(&path, "{ \"name\": ").unwrap();

        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(err.to_string().contains("is not valid JSON"));
    }

    #[test]
    fn test_any_json_value_loads() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("resume.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        assert!(load_document(&path).unwrap().is_array());
    }
}
