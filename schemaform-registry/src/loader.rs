//! Reads entity schemas from `.json` and `.toml` files.
//!
//! A file holds one entity, a list of entities (JSON array), or an
//! `entities` table array:
//!
//! ```toml
//! [[entities]]
//! entity_name = "kit"
//! display_name = "Kit"
//! # [[entities.fields]] ...
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use schemaform_model::EntityMetadata;
use serde::Deserialize;
use tracing::debug;

use crate::error::{RegistryError, Result};

#[derive(Deserialize)]
struct EntityList {
    entities: Vec<EntityMetadata>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SchemaFormat {
    Json,
    Toml,
}

fn format_of(path: &Path) -> Option<SchemaFormat> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Some(SchemaFormat::Json),
        Some(ext) if ext.eq_ignore_ascii_case("toml") => Some(SchemaFormat::Toml),
        _ => None,
    }
}

/// Parses every entity declared in `path` and checks its invariants.
pub fn read_schema_file(path: &Path) -> Result<Vec<EntityMetadata>> {
    let format =
        format_of(path).ok_or_else(|| RegistryError::UnsupportedSchemaFile(path.to_path_buf()))?;
    let text = fs::read_to_string(path).map_err(|source| RegistryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let entities = match format {
        SchemaFormat::Json => parse_json(&text).map_err(|source| RegistryError::Json {
            path: path.to_path_buf(),
            source,
        })?,
        SchemaFormat::Toml => parse_toml(&text).map_err(|source| RegistryError::Toml {
            path: path.to_path_buf(),
            source,
        })?,
    };

    for entity in &entities {
        entity
            .validate()
            .map_err(|source| RegistryError::InvalidSchemaFile {
                path: path.to_path_buf(),
                entity: entity.entity_name.clone(),
                source,
            })?;
    }

    debug!(path = ?path, count = entities.len(), "Parsed schema file");
    Ok(entities)
}

fn parse_json(text: &str) -> serde_json::Result<Vec<EntityMetadata>> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    if value.is_array() {
        return serde_json::from_value(value);
    }
    if value.get("entities").is_some() {
        return serde_json::from_value::<EntityList>(value).map(|list| list.entities);
    }
    serde_json::from_value::<EntityMetadata>(value).map(|entity| vec![entity])
}

fn parse_toml(text: &str) -> std::result::Result<Vec<EntityMetadata>, toml::de::Error> {
    let table: toml::Table = toml::from_str(text)?;
    if table.contains_key("entities") {
        toml::Value::Table(table)
            .try_into::<EntityList>()
            .map(|list| list.entities)
    } else {
        toml::Value::Table(table)
            .try_into::<EntityMetadata>()
            .map(|entity| vec![entity])
    }
}

/// Schema files directly inside `dir`, in lexical order. Other files are skipped.
pub fn schema_files_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let io_err = |source| RegistryError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && format_of(&path).is_some() {
            files.push(path);
        } else {
            debug!(path = ?path, "Skipping non-schema entry");
        }
    }
    files.sort();
    Ok(files)
}
