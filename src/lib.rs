//! searchwire - schema validation and wire serialization for search index
//! documents
//!
//! Validates candidate documents against a declared field schema and encodes
//! them to the JSON wire format an external search service expects. The
//! indexing pipeline producing documents and the search service consuming
//! the bytes are external collaborators; this crate only sits between them.

pub mod codec;
pub mod document;
pub mod schema;
