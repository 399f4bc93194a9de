//! Document model: field values keyed by internal field name.
//!
//! Documents are produced upstream (e.g. by an enrichment pipeline) and only
//! read here. Insertion order is irrelevant; serialized output always follows
//! schema declaration order.

use std::collections::HashMap;

use crate::schema::FieldKind;

/// A single field value: scalar text or an ordered sequence of texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Scalar UTF-8 string
    Text(String),
    /// Ordered sequence of UTF-8 strings
    TextArray(Vec<String>),
}

impl FieldValue {
    /// Returns the kind this value belongs to
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::TextArray(_) => FieldKind::TextArray,
        }
    }

    /// Returns the kind name for error messages
    pub fn kind_name(&self) -> &'static str {
        self.kind().kind_name()
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        FieldValue::TextArray(values)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(values: Vec<&str>) -> Self {
        FieldValue::TextArray(values.into_iter().map(str::to_string).collect())
    }
}

/// A candidate search index document: internal field name to value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    fields: HashMap<String, FieldValue>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field value, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Sets a field value and returns the document, for chained construction.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Returns a field value by internal name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Returns whether the document holds a value for the given field.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Iterates over (field name, value) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of fields set on the document.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether the document has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut doc = Document::new();
        doc.set("Id", "1");
        doc.set("KeyPhrases", vec!["alpha", "beta"]);

        assert_eq!(doc.get("Id"), Some(&FieldValue::Text("1".into())));
        assert_eq!(
            doc.get("KeyPhrases"),
            Some(&FieldValue::TextArray(vec!["alpha".into(), "beta".into()]))
        );
        assert!(doc.get("Content").is_none());
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_set_replaces_previous_value() {
        let mut doc = Document::new();
        doc.set("Id", "1");
        doc.set("Id", "2");
        assert_eq!(doc.get("Id"), Some(&FieldValue::Text("2".into())));
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_chained_construction() {
        let doc = Document::new().with("Id", "1").with("Content", "hello");
        assert!(doc.contains("Id"));
        assert!(doc.contains("Content"));
    }

    #[test]
    fn test_value_kinds() {
        assert_eq!(FieldValue::from("x").kind(), FieldKind::Text);
        assert_eq!(FieldValue::from(vec!["x"]).kind(), FieldKind::TextArray);
        assert_eq!(FieldValue::from(vec!["x"]).kind_name(), "text array");
    }
}
