//! Structural validation of documents against a schema.
//!
//! Validation is pure and deterministic: no side effects, no mutation of the
//! document, same verdict on every call.

use crate::document::{Document, FieldValue};
use crate::schema::DocumentSchema;

use super::errors::{ValidationError, ValidationResult};

/// Checks a document against the schema.
///
/// The key field must be present with a non-empty text value. Every other
/// field is optional, but a field that is present must be declared in the
/// schema and match its declared kind.
pub(super) fn validate(schema: &DocumentSchema, document: &Document) -> ValidationResult<()> {
    let key = schema.key_field();
    match document.get(&key.name) {
        None => {
            return Err(ValidationError::MissingKey {
                field: key.name.clone(),
            })
        }
        Some(FieldValue::Text(value)) if value.is_empty() => {
            return Err(ValidationError::MissingKey {
                field: key.name.clone(),
            })
        }
        // A key holding an array is reported as a kind mismatch below
        Some(_) => {}
    }

    for (name, value) in document.iter() {
        let spec = schema.field(name).ok_or_else(|| ValidationError::UnknownField {
            field: name.to_string(),
        })?;
        if value.kind() != spec.kind {
            return Err(ValidationError::TypeMismatch {
                field: name.to_string(),
                expected: spec.kind.kind_name(),
                actual: value.kind_name().to_string(),
            });
        }
    }

    Ok(())
}
