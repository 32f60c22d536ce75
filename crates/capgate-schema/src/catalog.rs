//! A set of schemas, one per surface and schema id.

use std::{collections::BTreeMap, path::Path};

use tracing::info;

use capgate_contracts::{
    error::{CapgateError, CapgateResult},
    schema::{CapabilitySchema, Surface},
};

use crate::loader::TomlSchema;

/// Schemas keyed by `schema_id`.
#[derive(Debug, Clone, Default)]
pub struct SchemaCatalog {
    schemas: BTreeMap<String, TomlSchema>,
}

impl SchemaCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a schema. Two schemas may not share an id.
    pub fn insert(&mut self, schema: TomlSchema) -> CapgateResult<()> {
        let id = schema.schema().schema_id.clone();
        if self.schemas.contains_key(&id) {
            return Err(CapgateError::ConfigError {
                reason: format!("schema id '{}' declared more than once", id),
            });
        }
        self.schemas.insert(id, schema);
        Ok(())
    }

    /// Load every `*.toml` file in `dir`, in file-name order.
    pub fn from_dir(dir: &Path) -> CapgateResult<Self> {
        let entries = std::fs::read_dir(dir).map_err(|e| CapgateError::ConfigError {
            reason: format!("failed to read schema directory '{}': {}", dir.display(), e),
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| CapgateError::ConfigError {
                reason: format!("failed to list schema directory '{}': {}", dir.display(), e),
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "toml") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut catalog = Self::new();
        for path in &paths {
            catalog.insert(TomlSchema::from_file(path)?)?;
        }

        info!(dir = %dir.display(), schemas = catalog.len(), "schema catalog loaded");
        Ok(catalog)
    }

    pub fn get(&self, schema_id: &str) -> Option<&CapabilitySchema> {
        self.schemas.get(schema_id).map(TomlSchema::schema)
    }

    /// Every schema written for `surface`.
    pub fn for_surface(&self, surface: Surface) -> impl Iterator<Item = &CapabilitySchema> {
        self.schemas
            .values()
            .map(TomlSchema::schema)
            .filter(move |schema| schema.surface == surface)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
