//! Print options and export configuration
//!
//! Lengths use CSS units and are converted to inches, the unit the
//! browser's print API expects.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{RenderError, Result};

/// CSS pixels per inch
const PX_PER_INCH: f64 = 96.0;

/// Accepted range for the content scale factor
const SCALE_RANGE: std::ops::RangeInclusive<f64> = 0.1..=2.0;

/// Unit of a [`Length`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Px,
    In,
    Cm,
    Mm,
}

impl Unit {
    fn suffix(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::In => "in",
            Unit::Cm => "cm",
            Unit::Mm => "mm",
        }
    }
}

/// A physical length such as `0.5in` or `12mm`
///
/// A bare number, written as a string or as a number, is read as pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLength", into = "String")]
pub struct Length {
    value: f64,
    unit: Unit,
}

impl Length {
    /// Create a length from a non-negative value
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Length in inches
    pub fn inches(value: f64) -> Self {
        Self::new(value, Unit::In)
    }

    /// Length in millimetres
    pub fn millimetres(value: f64) -> Self {
        Self::new(value, Unit::Mm)
    }

    /// Convert to inches
    pub fn to_inches(self) -> f64 {
        match self.unit {
            Unit::Px => self.value / PX_PER_INCH,
            Unit::In => self.value,
            Unit::Cm => self.value / 2.54,
            Unit::Mm => self.value / 25.4,
        }
    }
}

impl FromStr for Length {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim().to_ascii_lowercase();
        let (number, unit) = [Unit::Px, Unit::In, Unit::Cm, Unit::Mm]
            .into_iter()
            .find_map(|unit| text.strip_suffix(unit.suffix()).map(|n| (n, unit)))
            .unwrap_or((text.as_str(), Unit::Px));

        let value: f64 = number
            .trim()
            .parse()
            .map_err(|_| RenderError::InvalidOptions(format!("invalid length {:?}", s)))?;
        if !value.is_finite() || value < 0.0 {
            return Err(RenderError::InvalidOptions(format!(
                "length must be a non-negative number: {:?}",
                s
            )));
        }

        Ok(Self { value, unit })
    }
}

/// Serialized forms of a [`Length`]
#[derive(Deserialize)]
#[serde(untagged)]
enum RawLength {
    Pixels(f64),
    Text(String),
}

impl TryFrom<RawLength> for Length {
    type Error = RenderError;

    fn try_from(raw: RawLength) -> Result<Self> {
        match raw {
            RawLength::Pixels(value) if value.is_finite() && value >= 0.0 => {
                Ok(Self::new(value, Unit::Px))
            }
            RawLength::Pixels(value) => Err(RenderError::InvalidOptions(format!(
                "length must be a non-negative number: {}",
                value
            ))),
            RawLength::Text(text) => text.parse(),
        }
    }
}

impl From<Length> for String {
    fn from(length: Length) -> Self {
        length.to_string()
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

/// Page margins
///
/// Sides left out of a configuration file keep the default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: Length,
    pub right: Length,
    pub bottom: Length,
    pub left: Length,
}

impl Margin {
    /// Same margin on every side
    pub fn uniform(length: Length) -> Self {
        Self {
            top: length,
            right: length,
            bottom: length,
            left: length,
        }
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::uniform(Length::inches(0.5))
    }
}

/// Physical paper size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PageFormat {
    Letter,
    Legal,
    Tabloid,
    Ledger,
    A0,
    A1,
    A2,
    A3,
    #[default]
    A4,
    A5,
    A6,
}

impl PageFormat {
    const ALL: [PageFormat; 11] = [
        PageFormat::Letter,
        PageFormat::Legal,
        PageFormat::Tabloid,
        PageFormat::Ledger,
        PageFormat::A0,
        PageFormat::A1,
        PageFormat::A2,
        PageFormat::A3,
        PageFormat::A4,
        PageFormat::A5,
        PageFormat::A6,
    ];

    /// Identifier as written in configuration (`A4`, `Letter`)
    pub fn name(self) -> &'static str {
        match self {
            PageFormat::Letter => "Letter",
            PageFormat::Legal => "Legal",
            PageFormat::Tabloid => "Tabloid",
            PageFormat::Ledger => "Ledger",
            PageFormat::A0 => "A0",
            PageFormat::A1 => "A1",
            PageFormat::A2 => "A2",
            PageFormat::A3 => "A3",
            PageFormat::A4 => "A4",
            PageFormat::A5 => "A5",
            PageFormat::A6 => "A6",
        }
    }

    /// Portrait (width, height) in inches
    pub fn size_inches(self) -> (f64, f64) {
        match self {
            PageFormat::Letter => (8.5, 11.0),
            PageFormat::Legal => (8.5, 14.0),
            PageFormat::Tabloid => (11.0, 17.0),
            PageFormat::Ledger => (17.0, 11.0),
            PageFormat::A0 => (33.1, 46.8),
            PageFormat::A1 => (23.4, 33.1),
            PageFormat::A2 => (16.54, 23.4),
            PageFormat::A3 => (11.7, 16.54),
            PageFormat::A4 => (8.27, 11.7),
            PageFormat::A5 => (5.83, 8.27),
            PageFormat::A6 => (4.13, 5.83),
        }
    }
}

impl FromStr for PageFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RenderError::InvalidOptions(format!("unknown page format {:?}", s)))
    }
}

impl TryFrom<String> for PageFormat {
    type Error = RenderError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<PageFormat> for String {
    fn from(format: PageFormat) -> Self {
        format.name().to_string()
    }
}

impl fmt::Display for PageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Print options passed to the render engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfOptions {
    /// Paper size
    pub format: PageFormat,
    /// Explicit paper width, overriding the format's width
    pub width: Option<Length>,
    /// Explicit paper height, overriding the format's height
    pub height: Option<Length>,
    pub margin: Margin,
    /// Print background graphics
    pub print_background: bool,
    pub orientation: Orientation,
    /// Page selection such as `1-3, 5`
    pub page_ranges: Option<String>,
    /// Render the header and footer templates
    pub display_header_footer: bool,
    pub header_template: Option<String>,
    pub footer_template: Option<String>,
    /// Content scale factor, 0.1 to 2.0
    pub scale: Option<f64>,
    /// Let a CSS `@page` size win over `format`
    pub prefer_css_page_size: bool,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            format: PageFormat::A4,
            width: None,
            height: None,
            margin: Margin::default(),
            print_background: false,
            orientation: Orientation::Portrait,
            page_ranges: None,
            display_header_footer: false,
            header_template: None,
            footer_template: None,
            scale: None,
            prefer_css_page_size: false,
        }
    }
}

impl PdfOptions {
    /// Paper (width, height) in inches before orientation is applied
    pub fn paper_size(&self) -> (f64, f64) {
        let (width, height) = self.format.size_inches();
        (
            self.width.map(Length::to_inches).unwrap_or(width),
            self.height.map(Length::to_inches).unwrap_or(height),
        )
    }

    /// Check if pages are printed in landscape
    pub fn is_landscape(&self) -> bool {
        self.orientation == Orientation::Landscape
    }

    /// Reject options the engine would refuse
    pub fn validate(&self) -> Result<()> {
        if let Some(scale) = self.scale {
            if !SCALE_RANGE.contains(&scale) {
                return Err(RenderError::InvalidOptions(format!(
                    "scale must be between {} and {}, got {}",
                    SCALE_RANGE.start(),
                    SCALE_RANGE.end(),
                    scale
                )));
            }
        }

        let (width, height) = self.paper_size();
        if width <= 0.0 || height <= 0.0 {
            return Err(RenderError::InvalidOptions(
                "paper width and height must be positive".to_string(),
            ));
        }

        if let Some(ranges) = &self.page_ranges {
            if ranges.trim().is_empty() {
                return Err(RenderError::InvalidOptions(
                    "page ranges must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Everything needed for one export
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Where the PDF is written
    pub output_path: PathBuf,
    /// Page to render
    pub url: String,
    pub options: PdfOptions,
}

impl RenderConfig {
    /// Configuration with default print options
    pub fn new(output_path: impl Into<PathBuf>, url: impl Into<String>) -> Self {
        Self {
            output_path: output_path.into(),
            url: url.into(),
            options: PdfOptions::default(),
        }
    }

    /// Replace the print options
    pub fn with_options(mut self, options: PdfOptions) -> Self {
        self.options = options;
        self
    }

    /// Get the output path
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Reject configurations that cannot produce a PDF
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.url).map_err(|e| {
            RenderError::InvalidOptions(format!("invalid source URL {:?}: {}", self.url, e))
        })?;
        if self.output_path.as_os_str().is_empty() {
            return Err(RenderError::InvalidOptions(
                "output path must not be empty".to_string(),
            ));
        }
        self.options.validate()
    }
}
