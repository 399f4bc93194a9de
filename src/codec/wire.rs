//! Wire encoding and decoding.
//!
//! The wire format is a JSON object whose keys are the schema's wire names,
//! emitted in schema declaration order regardless of how the document was
//! built. Output order matters: the search service payloads are diffable and
//! byte-stable for the same document.

use serde_json::{Map, Value};

use crate::document::{Document, FieldValue};
use crate::schema::{DocumentSchema, FieldKind};

use super::errors::{ValidationError, ValidationResult};
use super::validate::validate;

/// Encodes a document to wire bytes.
///
/// Runs validation first; an invalid document is never written. Fields
/// absent from the document are omitted from the output, but a present
/// empty array is emitted as `[]`.
pub(super) fn serialize(schema: &DocumentSchema, document: &Document) -> ValidationResult<Vec<u8>> {
    validate(schema, document)?;

    let mut wire = Map::new();
    for spec in schema.fields() {
        if let Some(value) = document.get(&spec.name) {
            let json = match value {
                FieldValue::Text(text) => Value::String(text.clone()),
                FieldValue::TextArray(items) => {
                    Value::Array(items.iter().cloned().map(Value::String).collect())
                }
            };
            wire.insert(spec.wire_name.clone(), json);
        }
    }

    serde_json::to_vec(&Value::Object(wire)).map_err(|e| ValidationError::MalformedWire {
        reason: e.to_string(),
    })
}

/// Decodes wire bytes back into a document.
///
/// Wire keys map back to internal field names. Unknown wire names and kind
/// mismatches are rejected field by field; anything that is not a JSON
/// object is rejected outright.
pub(super) fn deserialize(schema: &DocumentSchema, bytes: &[u8]) -> ValidationResult<Document> {
    let value: Value = serde_json::from_slice(bytes).map_err(|e| ValidationError::MalformedWire {
        reason: e.to_string(),
    })?;

    let wire = value.as_object().ok_or_else(|| ValidationError::MalformedWire {
        reason: format!("expected a JSON object, got {}", json_kind_name(&value)),
    })?;

    let mut document = Document::new();
    for (wire_name, value) in wire {
        let spec = schema.field_by_wire_name(wire_name).ok_or_else(|| {
            ValidationError::UnknownField {
                field: wire_name.clone(),
            }
        })?;

        let field_value = match (spec.kind, value) {
            (FieldKind::Text, Value::String(text)) => FieldValue::Text(text.clone()),
            (FieldKind::TextArray, Value::Array(items)) => {
                let mut texts = Vec::with_capacity(items.len());
                for (i, item) in items.iter().enumerate() {
                    match item {
                        Value::String(text) => texts.push(text.clone()),
                        other => {
                            return Err(ValidationError::TypeMismatch {
                                field: format!("{}[{}]", wire_name, i),
                                expected: "text",
                                actual: json_kind_name(other).to_string(),
                            })
                        }
                    }
                }
                FieldValue::TextArray(texts)
            }
            (kind, other) => {
                return Err(ValidationError::TypeMismatch {
                    field: wire_name.clone(),
                    expected: kind.kind_name(),
                    actual: json_kind_name(other).to_string(),
                })
            }
        };

        document.set(spec.name.clone(), field_value);
    }

    Ok(document)
}

/// Returns the JSON type name for error messages.
fn json_kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "text",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
