//! Schema model for search index documents.
//!
//! Schemas are first-class, immutable artifacts: an ordered field table
//! declared once (programmatically or as a JSON file) and shared read-only
//! by every codec call.
//!
//! # Design Principles
//!
//! - Field order is declaration order and drives serialized output order
//! - Exactly one key field per schema
//! - Wire names are stable and unique
//! - Invariants checked at construction, never at use

mod errors;
mod loader;
mod types;

pub use errors::{SchemaError, SchemaResult};
pub use loader::SchemaLoader;
pub use types::{DocumentSchema, FieldKind, FieldSpec};
