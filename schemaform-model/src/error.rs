//! Errors raised while building or deserializing schemas.

use thiserror::Error;

/// Schema invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("entity name must not be empty")]
    EmptyEntityName,

    #[error("entity '{entity}' declares no fields")]
    NoFields { entity: String },

    #[error("entity '{entity}' has a field with an empty name")]
    EmptyFieldName { entity: String },

    #[error("entity '{entity}' declares field '{field}' more than once")]
    DuplicateField { entity: String, field: String },

    #[error("field '{field}': foreign_key fields must name a non-empty foreign_key_entity")]
    MissingForeignKeyEntity { field: String },

    #[error("field '{field}': enum fields need enum_values, enum_options or enum_dependency")]
    MissingEnumSource { field: String },

    #[error("field '{field}': enum fields must declare exactly one value source, found {count}")]
    AmbiguousEnumSource { field: String, count: usize },

    #[error("field '{field}': sub_entity fields need a sub_entity_config")]
    MissingSubEntityConfig { field: String },

    #[error("invalid rule_value for {rule_type}: {value}")]
    InvalidRuleValue { rule_type: String, value: String },
}

/// Result type alias using the schema error.
pub type Result<T> = std::result::Result<T, SchemaError>;
