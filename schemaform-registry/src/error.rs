//! Error types for registry construction.

use std::path::PathBuf;

use schemaform_model::SchemaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON schema file {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid TOML in {path:?}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("unsupported schema file {0:?}: expected .json or .toml")]
    UnsupportedSchemaFile(PathBuf),

    #[error("entity '{entity}' in {path:?}: {source}")]
    InvalidSchemaFile {
        path: PathBuf,
        entity: String,
        #[source]
        source: SchemaError,
    },

    #[error("invalid entity '{entity}': {source}")]
    InvalidEntity {
        entity: String,
        #[source]
        source: SchemaError,
    },

    #[error("entity type already registered: {0}")]
    DuplicateEntity(String),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
