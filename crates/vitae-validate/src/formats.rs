//! String format checks
//!
//! Pure syntactic checks; nothing here touches the network or filesystem.

use std::sync::OnceLock;

use regex::Regex;
use url::Url;
use vitae_model::Experience;

/// A syntactic format a string field must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Email address (`local@domain.tld`)
    Email,
    /// Absolute URL
    Url,
    /// Calendar date in `YYYY-MM-DD` form
    Date,
    /// `YYYY-MM-DD` or the literal `Present`
    EndDate,
    /// Any string with at least one character
    NonEmpty,
    /// A single path component
    FileName,
}

impl Format {
    /// Check a value against this format
    pub fn accepts(self, value: &str) -> bool {
        match self {
            Format::Email => is_email(value),
            Format::Url => is_url(value),
            Format::Date => is_date(value),
            Format::EndDate => value == Experience::PRESENT || is_date(value),
            Format::NonEmpty => !value.is_empty(),
            Format::FileName => is_file_name(value),
        }
    }

    /// Message reported when a value is rejected
    pub fn message(self) -> &'static str {
        match self {
            Format::Email => "Invalid email",
            Format::Url => "Invalid url",
            Format::Date => "Invalid date, expected YYYY-MM-DD",
            Format::EndDate => "Invalid date, expected YYYY-MM-DD or \"Present\"",
            Format::NonEmpty => "Must not be empty",
            Format::FileName => "Must be a file name",
        }
    }
}

/// Check if a string is a syntactically valid email address
pub fn is_email(value: &str) -> bool {
    static LOCAL_RE: OnceLock<Regex> = OnceLock::new();
    static DOMAIN_RE: OnceLock<Regex> = OnceLock::new();

    let local_re = LOCAL_RE
        .get_or_init(|| Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]$").unwrap());
    let domain_re = DOMAIN_RE
        .get_or_init(|| Regex::new(r"^([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$").unwrap());

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.starts_with('.')
        && !local.contains("..")
        && local_re.is_match(local)
        && domain_re.is_match(domain)
}

/// Check if a string parses as an absolute URL
pub fn is_url(value: &str) -> bool {
    Url::parse(value).is_ok()
}

/// Check if a string has the `YYYY-MM-DD` shape, in ASCII digits
pub fn is_date(value: &str) -> bool {
    static DATE_RE: OnceLock<Regex> = OnceLock::new();
    let re = DATE_RE.get_or_init(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());
    re.is_match(value)
}

/// Check if a string is a bare file name
///
/// Rejects anything that would resolve outside the directory it is
/// joined to: separators, `.`/`..` and drive or root prefixes.
pub fn is_file_name(value: &str) -> bool {
    !value.is_empty()
        && value != "."
        && value != ".."
        && !value.contains(|c: char| matches!(c, '/' | '\\' | ':' | '\0'))
}
