//! Core error types for the formsmith toolkit.
//!
//! This module provides [`FormsmithError`], a single error enum covering
//! form-document validation failures, unknown identifiers, configuration
//! problems, and I/O errors from the file-serving layer.
//!
//! The generation pipeline itself is total: malformed-but-well-typed input
//! degrades to placeholder output instead of erroring. The variants here
//! cover everything outside that guarantee.

use thiserror::Error;

/// The primary error type for the formsmith toolkit.
///
/// Each variant maps to an appropriate HTTP status code via
/// [`FormsmithError::status_code`], which the server crate uses when turning
/// errors into responses.
#[derive(Error, Debug)]
pub enum FormsmithError {
    // ── Document validation ──────────────────────────────────────────

    /// Two fields in the same form declare the same runtime `name`.
    ///
    /// Duplicate names would silently collide in the generated schema
    /// object (later entry wins), so they are rejected up front.
    #[error("Duplicate field name: {0}")]
    DuplicateFieldName(String),

    /// A choice-based field (select, radio group, combobox, multi select)
    /// has no options to choose from.
    #[error("Field '{0}' requires at least one option")]
    MissingOptions(String),

    /// A one-time-code field has a missing or non-positive `maxLength`.
    #[error("Field '{0}' requires a positive maxLength")]
    InvalidMaxLength(String),

    // ── Unknown identifiers ──────────────────────────────────────────

    /// A string did not name one of the closed set of field types.
    #[error("Unknown field type: {0}")]
    UnknownFieldType(String),

    /// A string did not name one of the three supported target libraries.
    #[error("Unknown target library: {0}")]
    UnknownTarget(String),

    // ── Requests ─────────────────────────────────────────────────────

    /// A malformed request reached the server layer.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The requested file or resource does not exist (or is not served).
    #[error("Not found: {0}")]
    NotFound(String),

    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    // ── Serialization ────────────────────────────────────────────────

    /// An error occurred during JSON serialization or deserialization.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl FormsmithError {
    /// Returns the HTTP status code associated with this error.
    ///
    /// - Validation and unknown-identifier errors -> 400
    /// - `NotFound` -> 404
    /// - Everything else -> 500
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::DuplicateFieldName(_)
            | Self::MissingOptions(_)
            | Self::InvalidMaxLength(_)
            | Self::UnknownFieldType(_)
            | Self::UnknownTarget(_)
            | Self::BadRequest(_)
            | Self::SerializationError(_) => 400,
            Self::NotFound(_) => 404,
            Self::ConfigurationError(_) | Self::IoError(_) => 500,
        }
    }
}

/// A convenience type alias for `Result<T, FormsmithError>`.
pub type FormsmithResult<T> = Result<T, FormsmithError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            FormsmithError::DuplicateFieldName("email".into()).status_code(),
            400
        );
        assert_eq!(
            FormsmithError::MissingOptions("role".into()).status_code(),
            400
        );
        assert_eq!(
            FormsmithError::InvalidMaxLength("otp".into()).status_code(),
            400
        );
        assert_eq!(
            FormsmithError::UnknownFieldType("wizard".into()).status_code(),
            400
        );
        assert_eq!(
            FormsmithError::UnknownTarget("ember".into()).status_code(),
            400
        );
        assert_eq!(FormsmithError::BadRequest("x".into()).status_code(), 400);
        assert_eq!(FormsmithError::NotFound("x".into()).status_code(), 404);
        assert_eq!(
            FormsmithError::ConfigurationError("x".into()).status_code(),
            500
        );
    }

    #[test]
    fn test_error_display() {
        let err = FormsmithError::DuplicateFieldName("email".into());
        assert_eq!(err.to_string(), "Duplicate field name: email");

        let err = FormsmithError::UnknownTarget("ember".into());
        assert_eq!(err.to_string(), "Unknown target library: ember");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: FormsmithError = io_err.into();
        assert_eq!(err.status_code(), 500);
        assert!(err.to_string().contains("file missing"));
    }
}
