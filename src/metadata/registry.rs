//! Registry of DTO types, built at registration time.

use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::metadata::DtoType;

/// All DTO types known to one compilation, keyed by simple name.
///
/// The registry is the type metadata accessor of the pipeline: it enumerates
/// declared properties in stable declaration order and is read-only once
/// compilation starts.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: HashMap<String, DtoType>,
}

/// On-disk schema definition: the set of DTO types to register.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SchemaFile {
    types: Vec<DtoType>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type. Registering two types with the same name is an
    /// authoring defect.
    pub fn register(&mut self, dto: DtoType) -> Result<()> {
        if self.types.contains_key(&dto.name) {
            bail!("type '{}' is registered twice", dto.name);
        }
        self.types.insert(dto.name.clone(), dto);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&DtoType> {
        self.types.get(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Load a registry from a JSON schema definition file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read schema file: {:?}", path))?;

        let schema: SchemaFile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse schema file: {:?}", path))?;

        let mut registry = Self::new();
        for dto in schema.types {
            registry.register(dto)?;
        }
        Ok(registry)
    }
}
