//! Schema construction and loading errors.
//!
//! All variants are recoverable by the caller: a schema error means the
//! schema definition itself is wrong and must be fixed before any document
//! can be validated against it.

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while constructing, loading, or registering a schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Two fields share the same internal name
    #[error("duplicate field '{name}' in schema")]
    DuplicateField { name: String },

    /// Two fields share the same wire name
    #[error("duplicate wire name '{wire_name}' in schema")]
    DuplicateWireName { wire_name: String },

    /// No field is marked as the key
    #[error("schema declares no key field")]
    MissingKeyField,

    /// More than one field is marked as the key
    #[error("schema declares more than one key field ('{first}' and '{second}')")]
    MultipleKeyFields { first: String, second: String },

    /// The key field must hold scalar text
    #[error("key field '{name}' must be of text kind")]
    NonTextKey { name: String },

    /// Sortability is only meaningful for scalar text fields
    #[error("sortable field '{name}' must be of text kind")]
    SortableArray { name: String },

    /// A schema definition file could not be read or parsed
    #[error("malformed schema file '{path}': {reason}")]
    MalformedSchemaFile { path: String, reason: String },

    /// Registered schemas are immutable; re-registration is rejected
    #[error("schema '{name}' is already registered")]
    SchemaExists { name: String },
}
