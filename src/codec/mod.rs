//! Document codec: validation plus wire encoding and decoding.
//!
//! # Design Principles
//!
//! - Validation before serialization, always
//! - Wire output uses wire names, in schema declaration order
//! - Pure transformations, no I/O, no retained state
//! - Deterministic: same inputs, same bytes, same verdict

mod errors;
mod validate;
mod wire;

pub use errors::{ValidationError, ValidationResult};

use crate::document::Document;
use crate::schema::DocumentSchema;

/// Validates documents against a schema and converts them to and from the
/// wire representation the search service accepts.
///
/// Holds only a borrow of the schema; all operations are pure, so a codec
/// may be created per call or shared freely.
pub struct SchemaCodec<'a> {
    schema: &'a DocumentSchema,
}

impl<'a> SchemaCodec<'a> {
    /// Creates a codec for the given schema.
    pub fn new(schema: &'a DocumentSchema) -> Self {
        Self { schema }
    }

    /// Returns the schema this codec encodes for.
    pub fn schema(&self) -> &DocumentSchema {
        self.schema
    }

    /// Checks a document for structural conformance with the schema.
    ///
    /// # Errors
    ///
    /// Returns `MissingKey` if the key field is absent or empty,
    /// `UnknownField` for a field the schema does not declare, and
    /// `TypeMismatch` when a value's kind differs from the declared kind.
    pub fn validate(&self, document: &Document) -> ValidationResult<()> {
        validate::validate(self.schema, document)
    }

    /// Encodes a document to wire bytes, validating it first.
    pub fn serialize(&self, document: &Document) -> ValidationResult<Vec<u8>> {
        wire::serialize(self.schema, document)
    }

    /// Decodes wire bytes back into a document.
    ///
    /// # Errors
    ///
    /// Returns `MalformedWire` if the bytes are not a JSON object,
    /// `UnknownField` for a wire name the schema does not declare, and
    /// `TypeMismatch` when a wire value's kind differs from the declared
    /// kind.
    pub fn deserialize(&self, bytes: &[u8]) -> ValidationResult<Document> {
        wire::deserialize(self.schema, bytes)
    }
}
