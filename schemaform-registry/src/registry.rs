use std::collections::BTreeMap;
use std::path::Path;

use schemaform_model::EntityMetadata;
use tracing::{debug, info, warn};

use crate::builtin;
use crate::config::RegistrySection;
use crate::consistency::{self, ConsistencyIssue};
use crate::error::{RegistryError, Result};
use crate::loader;

/// Catalog of entity schemas keyed by entity type.
///
/// Built once, then read-only. Pass it by reference (or `Arc`) to whatever
/// needs schemas; there is no global instance.
#[derive(Debug, Clone, Default)]
pub struct EntityMetadataRegistry {
    entities: BTreeMap<String, EntityMetadata>,
}

impl EntityMetadataRegistry {
    /// Registry holding every built-in entity declaration.
    pub fn builtin() -> Self {
        Self {
            entities: keyed(builtin::entities()),
        }
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Builds a registry from the `[registry]` config section: built-ins,
    /// then schema directories, then exclusions.
    pub fn from_config(section: &RegistrySection) -> Result<Self> {
        let mut builder = Self::builder();
        if section.include_builtin {
            builder = builder.with_builtin_entities();
        }
        for dir in &section.schema_dirs {
            if !dir.is_dir() {
                warn!(dir = ?dir, "Schema directory not found, skipping");
                continue;
            }
            builder = builder.load_schema_dir(dir)?;
        }
        for entity_type in &section.exclude {
            builder = builder.exclude(entity_type);
        }

        let registry = builder.build()?;
        for issue in registry.check_consistency() {
            warn!(%issue, "Registry consistency issue");
        }
        info!(entities = registry.len(), "Entity registry ready");
        Ok(registry)
    }

    /// Schema for `entity_type`; `None` when unknown or empty.
    pub fn get_entity_metadata(&self, entity_type: &str) -> Option<&EntityMetadata> {
        self.entities.get(entity_type)
    }

    /// Every registered entity type. Sorted, but callers should treat the
    /// order as unspecified.
    pub fn get_all_entity_types(&self) -> Vec<String> {
        self.entities.keys().cloned().collect()
    }

    /// Entity types with at least one foreign-key field targeting `target_entity_type`.
    pub fn get_entities_with_foreign_key_to(&self, target_entity_type: &str) -> Vec<String> {
        self.entities
            .iter()
            .filter(|(_, meta)| meta.references(target_entity_type))
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// Entity types that embed `child_entity_type` as a sub-entity list.
    pub fn get_entities_with_sub_entity_of(&self, child_entity_type: &str) -> Vec<String> {
        self.entities
            .iter()
            .filter(|(_, meta)| {
                meta.sub_entity_fields().any(|f| {
                    f.field_type
                        .sub_entity_config()
                        .is_some_and(|c| c.child_entity_type == child_entity_type)
                })
            })
            .map(|(key, _)| key.clone())
            .collect()
    }

    pub fn contains(&self, entity_type: &str) -> bool {
        self.entities.contains_key(entity_type)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &EntityMetadata)> {
        self.entities.iter().map(|(key, meta)| (key.as_str(), meta))
    }

    /// Cross-reference problems: dangling foreign keys or sub-entity
    /// children, key/name mismatches, duplicate fields, empty enums.
    pub fn check_consistency(&self) -> Vec<ConsistencyIssue> {
        consistency::check(self.entities.iter())
    }
}

fn keyed(entities: Vec<EntityMetadata>) -> BTreeMap<String, EntityMetadata> {
    entities
        .into_iter()
        .map(|meta| (meta.entity_name.clone(), meta))
        .collect()
}

/// Assembles an [`EntityMetadataRegistry`] from built-ins, explicit
/// declarations, and schema files.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entities: BTreeMap<String, EntityMetadata>,
}

impl RegistryBuilder {
    /// Adds every built-in declaration.
    pub fn with_builtin_entities(mut self) -> Self {
        self.entities.extend(keyed(builtin::entities()));
        self
    }

    /// Adds one entity. Registering the same entity type twice is an error;
    /// schema files use replacement semantics instead.
    pub fn register(mut self, metadata: EntityMetadata) -> Result<Self> {
        if self.entities.contains_key(&metadata.entity_name) {
            return Err(RegistryError::DuplicateEntity(metadata.entity_name));
        }
        self.entities.insert(metadata.entity_name.clone(), metadata);
        Ok(self)
    }

    pub fn register_all(self, entities: impl IntoIterator<Item = EntityMetadata>) -> Result<Self> {
        entities
            .into_iter()
            .try_fold(self, |builder, metadata| builder.register(metadata))
    }

    /// Loads one `.json` or `.toml` schema file. Entities already present are
    /// replaced.
    pub fn load_schema_file(mut self, path: &Path) -> Result<Self> {
        for metadata in loader::read_schema_file(path)? {
            let entity = metadata.entity_name.clone();
            if self.entities.insert(entity.clone(), metadata).is_some() {
                info!(entity = %entity, path = ?path, "Schema file overrides entity");
            } else {
                debug!(entity = %entity, path = ?path, "Registered entity from schema file");
            }
        }
        Ok(self)
    }

    /// Loads every schema file in `dir` in lexical order.
    pub fn load_schema_dir(self, dir: &Path) -> Result<Self> {
        let files = loader::schema_files_in(dir)?;
        info!(dir = ?dir, files = files.len(), "Loading schema directory");
        files
            .iter()
            .try_fold(self, |builder, path| builder.load_schema_file(path))
    }

    /// Drops an entity type if present.
    pub fn exclude(mut self, entity_type: &str) -> Self {
        if self.entities.remove(entity_type).is_some() {
            debug!(entity = %entity_type, "Excluded entity type");
        }
        self
    }

    /// Validates every entity and produces the registry.
    pub fn build(self) -> Result<EntityMetadataRegistry> {
        for metadata in self.entities.values() {
            metadata
                .validate()
                .map_err(|source| RegistryError::InvalidEntity {
                    entity: metadata.entity_name.clone(),
                    source,
                })?;
        }
        Ok(EntityMetadataRegistry {
            entities: self.entities,
        })
    }
}
