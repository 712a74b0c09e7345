//! Declarative entity model for schemaform.
//!
//! Defines the shapes every other schemaform crate reads:
//! - [`EntityMetadata`] / [`FieldMetadata`]: the schema of one entity type
//! - [`FieldType`]: closed set of field types, each carrying its own data
//! - [`ValidationRule`]: ordered per-field checks
//! - [`EntityRecord`]: an opaque key-value record conforming to a schema
//! - [`ResultEnvelope`]: the `{success, data, error}` shape handed over by storage
//!
//! Schemas deserialize from a flat JSON/TOML wire form and are rejected at
//! the boundary when they break a per-field invariant.

mod envelope;
mod error;
mod record;
mod schema;
mod sub_entity;
mod text;
mod wire;

pub use envelope::{ResultData, ResultEnvelope};
pub use error::{Result, SchemaError};
pub use record::EntityRecord;
pub use schema::{
    EntityMetadata, EnumDependency, EnumOption, EnumSource, FieldKind, FieldMetadata, FieldType,
    ForeignKeyFilter, ForeignKeyFilterType, ForeignKeyTarget, RuleCheck, RuleKind,
    SubEntityConfig, TeamSide, ValidationRule,
};
pub use sub_entity::{ForeignKeyOptions, SubEntityFilter};
pub use text::stringify_value;
