//! Per-document validation and wire errors.
//!
//! Every failure names the offending field, so callers can distinguish a
//! document that needs fixing from a schema that does. All variants are
//! recoverable; the codec never retries and never contacts the search
//! service.

use thiserror::Error;

/// Result type for codec operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Errors raised while validating a document or decoding wire bytes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The key field is absent or its value is an empty string
    #[error("document is missing a value for key field '{field}'")]
    MissingKey { field: String },

    /// The document names a field the schema does not declare
    #[error("field '{field}' is not declared in the schema")]
    UnknownField { field: String },

    /// A value's kind does not match the field's declared kind
    #[error("field '{field}': expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: String,
    },

    /// The wire bytes could not be parsed
    #[error("malformed wire document: {reason}")]
    MalformedWire { reason: String },
}
