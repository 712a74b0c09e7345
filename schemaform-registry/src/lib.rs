//! Entity metadata registry for schemaform.
//!
//! [`EntityMetadataRegistry`] maps entity-type names to their
//! [`EntityMetadata`](schemaform_model::EntityMetadata). It is built once,
//! either from the built-in sports-league declarations, from schema files,
//! or from an [`EngineConfig`] combining both, and is immutable afterwards.

pub mod builtin;
mod config;
mod consistency;
mod error;
mod loader;
mod registry;

pub use config::{DEFAULT_MAX_VISIBLE_COLUMNS, EngineConfig, ListSection, RegistrySection};
pub use consistency::ConsistencyIssue;
pub use error::{RegistryError, Result};
pub use loader::read_schema_file;
pub use registry::{EntityMetadataRegistry, RegistryBuilder};
