//! Schema loader for reading schema definition files from disk.
//!
//! Index schemas are declared as JSON files, one schema per file. The loader
//! reads every `*.json` file in its directory into an in-memory registry
//! keyed by schema name. Structural invariants are checked while parsing, so
//! a registered schema is always well formed. Registered schemas are
//! immutable; re-registration of a name is rejected.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::errors::{SchemaError, SchemaResult};
use super::types::DocumentSchema;

/// Loads schema definition files and maintains an in-memory registry.
pub struct SchemaLoader {
    /// Directory containing schema definition files
    schema_dir: PathBuf,
    /// Loaded schemas indexed by name
    schemas: HashMap<String, DocumentSchema>,
}

impl SchemaLoader {
    /// Creates a new loader for the given schema directory.
    pub fn new(schema_dir: &Path) -> Self {
        Self {
            schema_dir: schema_dir.to_path_buf(),
            schemas: HashMap::new(),
        }
    }

    /// Returns the schema directory path.
    pub fn schema_dir(&self) -> &Path {
        &self.schema_dir
    }

    /// Loads all schema files from the schema directory.
    ///
    /// A missing directory is created and treated as an empty registry.
    /// Malformed or structurally invalid schema files abort the load.
    pub fn load_all(&mut self) -> SchemaResult<()> {
        if !self.schema_dir.exists() {
            fs::create_dir_all(&self.schema_dir).map_err(|e| {
                SchemaError::MalformedSchemaFile {
                    path: self.schema_dir.display().to_string(),
                    reason: format!("failed to create schema directory: {}", e),
                }
            })?;
            return Ok(());
        }

        let entries = fs::read_dir(&self.schema_dir).map_err(|e| {
            SchemaError::MalformedSchemaFile {
                path: self.schema_dir.display().to_string(),
                reason: format!("failed to read schema directory: {}", e),
            }
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| SchemaError::MalformedSchemaFile {
                path: self.schema_dir.display().to_string(),
                reason: format!("failed to read directory entry: {}", e),
            })?;

            let path = entry.path();

            // Skip non-JSON files
            if path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }

            self.load_schema_file(&path)?;
        }

        Ok(())
    }

    /// Loads a single schema file.
    fn load_schema_file(&mut self, path: &Path) -> SchemaResult<()> {
        let content = fs::read_to_string(path).map_err(|e| {
            SchemaError::MalformedSchemaFile {
                path: path.display().to_string(),
                reason: format!("failed to read file: {}", e),
            }
        })?;

        // DocumentSchema's Deserialize runs the structural checks
        let schema: DocumentSchema = serde_json::from_str(&content).map_err(|e| {
            SchemaError::MalformedSchemaFile {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
        })?;

        self.register(schema)
    }

    /// Registers a schema directly (for testing or programmatic creation).
    ///
    /// # Errors
    ///
    /// Returns `SchemaExists` if a schema with the same name is already
    /// registered.
    pub fn register(&mut self, schema: DocumentSchema) -> SchemaResult<()> {
        if self.schemas.contains_key(schema.name()) {
            return Err(SchemaError::SchemaExists {
                name: schema.name().to_string(),
            });
        }

        self.schemas.insert(schema.name().to_string(), schema);
        Ok(())
    }

    /// Looks up a schema by name.
    pub fn get(&self, name: &str) -> Option<&DocumentSchema> {
        self.schemas.get(name)
    }

    /// Returns whether a schema with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// Returns the number of registered schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Returns whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
