//! Registry-wide cross-reference checks.
//!
//! These are reported, not enforced: a registry with dangling references
//! still serves lookups.

use std::collections::HashSet;
use std::fmt;

use schemaform_model::{EntityMetadata, EnumSource, FieldType};

/// One problem found by [`EntityMetadataRegistry::check_consistency`](crate::EntityMetadataRegistry::check_consistency).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsistencyIssue {
    /// The entity is registered under a key different from its `entity_name`.
    KeyMismatch { key: String, entity_name: String },
    NoFields { entity: String },
    DuplicateField { entity: String, field: String },
    UnknownForeignKeyTarget {
        entity: String,
        field: String,
        target: String,
    },
    UnknownSubEntityChild {
        entity: String,
        field: String,
        child: String,
    },
    /// An enum with a `Values` or `Options` source that lists nothing.
    EmptyEnum { entity: String, field: String },
}

impl fmt::Display for ConsistencyIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsistencyIssue::KeyMismatch { key, entity_name } => {
                write!(f, "entity '{entity_name}' is registered as '{key}'")
            }
            ConsistencyIssue::NoFields { entity } => write!(f, "{entity}: no fields"),
            ConsistencyIssue::DuplicateField { entity, field } => {
                write!(f, "{entity}.{field}: declared more than once")
            }
            ConsistencyIssue::UnknownForeignKeyTarget {
                entity,
                field,
                target,
            } => write!(f, "{entity}.{field}: foreign key to unregistered '{target}'"),
            ConsistencyIssue::UnknownSubEntityChild {
                entity,
                field,
                child,
            } => write!(f, "{entity}.{field}: sub-entity of unregistered '{child}'"),
            ConsistencyIssue::EmptyEnum { entity, field } => {
                write!(f, "{entity}.{field}: enum has no values")
            }
        }
    }
}

pub(crate) fn check<'a>(
    entries: impl Iterator<Item = (&'a String, &'a EntityMetadata)> + Clone,
) -> Vec<ConsistencyIssue> {
    let known: HashSet<&str> = entries.clone().map(|(key, _)| key.as_str()).collect();
    let mut issues = Vec::new();

    for (key, meta) in entries {
        let entity = &meta.entity_name;
        if key != entity {
            issues.push(ConsistencyIssue::KeyMismatch {
                key: key.clone(),
                entity_name: entity.clone(),
            });
        }
        if meta.fields.is_empty() {
            issues.push(ConsistencyIssue::NoFields {
                entity: entity.clone(),
            });
        }

        let mut seen = HashSet::new();
        for field in &meta.fields {
            let name = &field.field_name;
            if !seen.insert(name.as_str()) {
                issues.push(ConsistencyIssue::DuplicateField {
                    entity: entity.clone(),
                    field: name.clone(),
                });
            }

            match &field.field_type {
                FieldType::ForeignKey(target) if !known.contains(target.entity.as_str()) => {
                    issues.push(ConsistencyIssue::UnknownForeignKeyTarget {
                        entity: entity.clone(),
                        field: name.clone(),
                        target: target.entity.clone(),
                    });
                }
                FieldType::SubEntity(config)
                    if !known.contains(config.child_entity_type.as_str()) =>
                {
                    issues.push(ConsistencyIssue::UnknownSubEntityChild {
                        entity: entity.clone(),
                        field: name.clone(),
                        child: config.child_entity_type.clone(),
                    });
                }
                FieldType::Enum(EnumSource::Values(values)) if values.is_empty() => {
                    issues.push(ConsistencyIssue::EmptyEnum {
                        entity: entity.clone(),
                        field: name.clone(),
                    });
                }
                FieldType::Enum(EnumSource::Options(options)) if options.is_empty() => {
                    issues.push(ConsistencyIssue::EmptyEnum {
                        entity: entity.clone(),
                        field: name.clone(),
                    });
                }
                _ => {}
            }
        }
    }

    issues
}
