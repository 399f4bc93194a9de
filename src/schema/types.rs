//! Schema type definitions for search index documents.
//!
//! A [`DocumentSchema`] is an ordered sequence of [`FieldSpec`]s. Field order
//! is significant: serialized output lists fields in declaration order, so
//! the sequence is a `Vec`, never a set. Exactly one field carries the key
//! flag, and wire names are unique across the schema.

use serde::{Deserialize, Serialize};

use super::errors::{SchemaError, SchemaResult};

/// Supported field kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Scalar UTF-8 string
    Text,
    /// Ordered sequence of UTF-8 strings
    TextArray,
}

impl FieldKind {
    /// Returns the kind name for error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::TextArray => "text array",
        }
    }
}

/// Describes one schema field: its internal name, the name it serializes
/// under on the wire, its kind, and its index attributes.
///
/// The wire name is stable once defined. Documents are keyed by internal
/// field names; only serialized output uses wire names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Internal field identifier, unique within the schema
    pub name: String,
    /// External serialized name, unique within the schema
    pub wire_name: String,
    /// Field kind
    pub kind: FieldKind,
    /// Whether this field is the document key
    #[serde(default)]
    pub is_key: bool,
    /// Whether the search service indexes this field for full-text search
    #[serde(default)]
    pub is_searchable: bool,
    /// Whether results may be sorted on this field (text fields only)
    #[serde(default)]
    pub is_sortable: bool,
}

impl FieldSpec {
    /// Create a scalar text field
    pub fn text(name: impl Into<String>, wire_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            wire_name: wire_name.into(),
            kind: FieldKind::Text,
            is_key: false,
            is_searchable: false,
            is_sortable: false,
        }
    }

    /// Create a text array field
    pub fn text_array(name: impl Into<String>, wire_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            wire_name: wire_name.into(),
            kind: FieldKind::TextArray,
            is_key: false,
            is_searchable: false,
            is_sortable: false,
        }
    }

    /// Mark this field as the document key
    pub fn key(mut self) -> Self {
        self.is_key = true;
        self
    }

    /// Mark this field as searchable
    pub fn searchable(mut self) -> Self {
        self.is_searchable = true;
        self
    }

    /// Mark this field as sortable
    pub fn sortable(mut self) -> Self {
        self.is_sortable = true;
        self
    }
}

/// Complete schema definition: a named, ordered sequence of fields.
///
/// Immutable once constructed; construction enforces all structural
/// invariants, so a `DocumentSchema` value is always well formed. Instances
/// may be shared read-only across threads without locking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SchemaFile")]
pub struct DocumentSchema {
    name: String,
    fields: Vec<FieldSpec>,
}

/// On-disk shape of a schema definition, checked on construction
#[derive(Deserialize)]
struct SchemaFile {
    name: String,
    fields: Vec<FieldSpec>,
}

impl TryFrom<SchemaFile> for DocumentSchema {
    type Error = SchemaError;

    fn try_from(file: SchemaFile) -> SchemaResult<Self> {
        DocumentSchema::new(file.name, file.fields)
    }
}

impl DocumentSchema {
    /// Create a new schema, checking structural invariants.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError` if field names or wire names collide, if the
    /// schema declares zero or more than one key field, if the key field is
    /// not of text kind, or if an array field is marked sortable.
    pub fn new(name: impl Into<String>, fields: Vec<FieldSpec>) -> SchemaResult<Self> {
        let mut key_field: Option<&FieldSpec> = None;

        for (i, field) in fields.iter().enumerate() {
            for earlier in &fields[..i] {
                if earlier.name == field.name {
                    return Err(SchemaError::DuplicateField {
                        name: field.name.clone(),
                    });
                }
                if earlier.wire_name == field.wire_name {
                    return Err(SchemaError::DuplicateWireName {
                        wire_name: field.wire_name.clone(),
                    });
                }
            }

            if field.is_key {
                if let Some(first) = key_field {
                    return Err(SchemaError::MultipleKeyFields {
                        first: first.name.clone(),
                        second: field.name.clone(),
                    });
                }
                if field.kind != FieldKind::Text {
                    return Err(SchemaError::NonTextKey {
                        name: field.name.clone(),
                    });
                }
                key_field = Some(field);
            }

            if field.is_sortable && field.kind != FieldKind::Text {
                return Err(SchemaError::SortableArray {
                    name: field.name.clone(),
                });
            }
        }

        if key_field.is_none() {
            return Err(SchemaError::MissingKeyField);
        }

        Ok(Self {
            name: name.into(),
            fields,
        })
    }

    /// Returns the schema name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the fields in declaration order
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Looks up a field by internal name
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Looks up a field by wire name
    pub fn field_by_wire_name(&self, wire_name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.wire_name == wire_name)
    }

    /// Returns the key field.
    ///
    /// Construction guarantees exactly one key field exists.
    pub fn key_field(&self) -> &FieldSpec {
        self.fields
            .iter()
            .find(|f| f.is_key)
            .expect("checked at construction") // DocumentSchema::new rejects keyless schemas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("Id", "id").key().searchable().sortable(),
            FieldSpec::text("Content", "content").searchable(),
            FieldSpec::text("LanguageCode", "languageCode").searchable(),
            FieldSpec::text_array("KeyPhrases", "keyPhrases").searchable(),
            FieldSpec::text_array("Organizations", "organizations").searchable(),
        ]
    }

    #[test]
    fn test_schema_construction_valid() {
        let schema = DocumentSchema::new("demo-index", sample_fields()).unwrap();
        assert_eq!(schema.name(), "demo-index");
        assert_eq!(schema.fields().len(), 5);
        assert_eq!(schema.key_field().name, "Id");
    }

    #[test]
    fn test_field_order_is_declaration_order() {
        let schema = DocumentSchema::new("demo-index", sample_fields()).unwrap();
        let wire_names: Vec<&str> = schema.fields().iter().map(|f| f.wire_name.as_str()).collect();
        assert_eq!(
            wire_names,
            vec!["id", "content", "languageCode", "keyPhrases", "organizations"]
        );
    }

    #[test]
    fn test_duplicate_field_name_rejected() {
        let fields = vec![
            FieldSpec::text("Id", "id").key(),
            FieldSpec::text("Id", "identifier"),
        ];
        let result = DocumentSchema::new("demo-index", fields);
        assert_eq!(
            result.unwrap_err(),
            SchemaError::DuplicateField { name: "Id".into() }
        );
    }

    #[test]
    fn test_duplicate_wire_name_rejected() {
        let fields = vec![
            FieldSpec::text("Id", "id").key(),
            FieldSpec::text("Identifier", "id"),
        ];
        let result = DocumentSchema::new("demo-index", fields);
        assert_eq!(
            result.unwrap_err(),
            SchemaError::DuplicateWireName {
                wire_name: "id".into()
            }
        );
    }

    #[test]
    fn test_missing_key_field_rejected() {
        let fields = vec![FieldSpec::text("Content", "content")];
        let result = DocumentSchema::new("demo-index", fields);
        assert_eq!(result.unwrap_err(), SchemaError::MissingKeyField);
    }

    #[test]
    fn test_multiple_key_fields_rejected() {
        let fields = vec![
            FieldSpec::text("Id", "id").key(),
            FieldSpec::text("AltId", "altId").key(),
        ];
        let result = DocumentSchema::new("demo-index", fields);
        assert_eq!(
            result.unwrap_err(),
            SchemaError::MultipleKeyFields {
                first: "Id".into(),
                second: "AltId".into()
            }
        );
    }

    #[test]
    fn test_array_key_rejected() {
        let fields = vec![FieldSpec::text_array("Ids", "ids").key()];
        let result = DocumentSchema::new("demo-index", fields);
        assert_eq!(
            result.unwrap_err(),
            SchemaError::NonTextKey { name: "Ids".into() }
        );
    }

    #[test]
    fn test_sortable_array_rejected() {
        let fields = vec![
            FieldSpec::text("Id", "id").key(),
            FieldSpec::text_array("KeyPhrases", "keyPhrases").sortable(),
        ];
        let result = DocumentSchema::new("demo-index", fields);
        assert_eq!(
            result.unwrap_err(),
            SchemaError::SortableArray {
                name: "KeyPhrases".into()
            }
        );
    }

    #[test]
    fn test_lookup_by_name_and_wire_name() {
        let schema = DocumentSchema::new("demo-index", sample_fields()).unwrap();
        assert_eq!(schema.field("KeyPhrases").unwrap().wire_name, "keyPhrases");
        assert_eq!(schema.field_by_wire_name("languageCode").unwrap().name, "LanguageCode");
        assert!(schema.field("keyPhrases").is_none());
        assert!(schema.field_by_wire_name("KeyPhrases").is_none());
    }

    #[test]
    fn test_schema_deserialization_checks_invariants() {
        let json = r#"{
            "name": "demo-index",
            "fields": [
                { "name": "Id", "wire_name": "id", "kind": "text", "is_key": true },
                { "name": "AltId", "wire_name": "altId", "kind": "text", "is_key": true }
            ]
        }"#;
        let result: Result<DocumentSchema, _> = serde_json::from_str(json);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("more than one key field"));
    }

    #[test]
    fn test_schema_roundtrips_through_json() {
        let schema = DocumentSchema::new("demo-index", sample_fields()).unwrap();
        let json = serde_json::to_string(&schema).unwrap();
        let parsed: DocumentSchema = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, schema);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(FieldKind::Text.kind_name(), "text");
        assert_eq!(FieldKind::TextArray.kind_name(), "text array");
    }
}
