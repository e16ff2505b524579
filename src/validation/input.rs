//! Input validation and sanitization utilities.
//!
//! Used by the schema sources to check target addresses before any request
//! is made, and by the renderers to decide when an identifier needs quoting
//! or sanitizing.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Maximum length of a hosted application name (a DNS label)
pub const MAX_APP_NAME_LENGTH: usize = 63;

/// Maximum length for a target URL
pub const MAX_URL_LENGTH: usize = 2048;

static RE_PLAIN_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("Invalid regex"));
static RE_APP_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?$").expect("Invalid regex")
});
static RE_DIAGRAM_UNSAFE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_-]").expect("Invalid regex"));

/// Errors that can occur during input validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Input is empty when a value is required
    #[error("{0} cannot be empty")]
    Empty(&'static str),

    /// Input exceeds maximum allowed length
    #[error("{field} exceeds maximum length (max: {max}, got: {actual})")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    /// Input has invalid format
    #[error("{0}: {1}")]
    InvalidFormat(&'static str, String),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validate a hosted application name.
///
/// # Rules
///
/// - Must not be empty
/// - Must not exceed 63 characters
/// - Letters, digits and hyphens only, not starting or ending with a hyphen
///
/// # Examples
///
/// ```
/// use app_schema_sdk::validation::input::validate_app_name;
///
/// assert!(validate_app_name("my-app").is_ok());
/// assert!(validate_app_name("").is_err());
/// assert!(validate_app_name("-bad").is_err());
/// assert!(validate_app_name("no/slashes").is_err());
/// ```
pub fn validate_app_name(name: &str) -> ValidationResult<()> {
    if name.is_empty() {
        return Err(ValidationError::Empty("application name"));
    }

    if name.len() > MAX_APP_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "application name",
            max: MAX_APP_NAME_LENGTH,
            actual: name.len(),
        });
    }

    if !RE_APP_NAME.is_match(name) {
        return Err(ValidationError::InvalidFormat(
            "application name",
            format!(
                "'{}' may only contain letters, digits and inner hyphens",
                name
            ),
        ));
    }

    Ok(())
}

/// Validate a target URL.
///
/// Only `http` and `https` URLs with a non-empty host are accepted.
///
/// # Examples
///
/// ```
/// use app_schema_sdk::validation::input::validate_url;
///
/// assert!(validate_url("https://example.com").is_ok());
/// assert!(validate_url("ftp://example.com").is_err());
/// assert!(validate_url("https://").is_err());
/// ```
pub fn validate_url(url: &str) -> ValidationResult<()> {
    if url.is_empty() {
        return Err(ValidationError::Empty("URL"));
    }

    if url.len() > MAX_URL_LENGTH {
        return Err(ValidationError::TooLong {
            field: "URL",
            max: MAX_URL_LENGTH,
            actual: url.len(),
        });
    }

    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(|| {
            ValidationError::InvalidFormat("URL", format!("'{}' is not an http(s) URL", url))
        })?;

    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    if host.is_empty() || host.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidFormat(
            "URL",
            format!("'{}' has no valid host", url),
        ));
    }

    Ok(())
}

/// Whether `name` can be written as a bare identifier (`[A-Za-z_][A-Za-z0-9_]*`)
pub fn is_plain_identifier(name: &str) -> bool {
    RE_PLAIN_IDENTIFIER.is_match(name)
}

/// Replace every character outside `[A-Za-z0-9_-]` with `_`.
///
/// Diagram identifiers must start with a letter or `_`, so names starting
/// with a digit or `-` (and the empty name) get a leading `_`.
pub fn sanitize_diagram_identifier(name: &str) -> String {
    let sanitized = RE_DIAGRAM_UNSAFE.replace_all(name, "_");
    match sanitized.chars().next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => sanitized.into_owned(),
        _ => format!("_{}", sanitized),
    }
}
