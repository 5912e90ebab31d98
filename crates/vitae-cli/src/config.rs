//! Tool configuration
//!
//! Settings are loaded from `vitae.toml` in the project root when present:
//!
//! ```toml
//! [resume]
//! path = "src/resume.json"
//!
//! [pdf]
//! url = "http://localhost:4321/"
//! public_dir = "public"
//! navigation_timeout_secs = 30
//!
//! [pdf.options]
//! format = "A4"
//! print_background = false
//!
//! [pdf.options.margin]
//! top = "0.5in"
//! ```
//!
//! Every key is optional; an absent file yields the defaults above.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vitae_model::DEFAULT_PDF_NAME;
use vitae_pdf::{PdfOptions, DEFAULT_NAVIGATION_TIMEOUT, DEFAULT_SOURCE_URL};

/// Configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "vitae.toml";

/// Errors that can occur while loading settings
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Config file is not valid TOML or has wrong value types
    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Config file parses but holds a value the tools cannot use
    #[error("Invalid config file {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// Top-level settings structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Resume document settings
    pub resume: ResumeSettings,
    /// PDF export settings
    pub pdf: PdfSettings,
}

/// Where the resume document lives
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeSettings {
    /// Path of the JSON resume document
    pub path: PathBuf,
}

impl Default for ResumeSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("src/resume.json"),
        }
    }
}

/// PDF export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfSettings {
    /// URL of the locally served resume page
    pub url: String,
    /// Directory the PDF is written to, under the document's declared name
    pub public_dir: PathBuf,
    /// Explicit output path, overriding `public_dir` and the declared name
    pub output: Option<PathBuf>,
    /// Chromium or Chrome binary; searched for when unset
    pub chrome: Option<PathBuf>,
    /// Seconds to wait for the page to load; must be positive
    pub navigation_timeout_secs: u64,
    /// Print options
    pub options: PdfOptions,
}

impl Default for PdfSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_SOURCE_URL.to_string(),
            public_dir: PathBuf::from("public"),
            output: None,
            chrome: None,
            navigation_timeout_secs: DEFAULT_NAVIGATION_TIMEOUT.as_secs(),
            options: PdfOptions::default(),
        }
    }
}

impl PdfSettings {
    /// Output path for a document declaring `pdf_name`
    ///
    /// Only the final component of `pdf_name` is used, so the PDF always
    /// lands directly in `public_dir`.
    pub fn output_path(&self, pdf_name: &str) -> PathBuf {
        if let Some(output) = &self.output {
            return output.clone();
        }
        let file_name = Path::new(pdf_name)
            .file_name()
            .unwrap_or_else(|| OsStr::new(DEFAULT_PDF_NAME));
        self.public_dir.join(file_name)
    }
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load settings
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read if present and the defaults are used otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let settings = Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        settings
            .check()
            .map_err(|reason| ConfigError::Invalid { path, reason })?;
        Ok(settings)
    }

    /// Reject values that parse but cannot work
    fn check(&self) -> Result<(), String> {
        if self.pdf.navigation_timeout_secs == 0 {
            return Err("pdf.navigation_timeout_secs must be at least 1".to_string());
        }
        Ok(())
    }
}
