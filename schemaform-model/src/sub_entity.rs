use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::EntityRecord;

/// Linkage between a parent record and the child records of one of its
/// sub-entity fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubEntityFilter {
    pub foreign_key_field: String,
    pub foreign_key_value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holder_type_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holder_type_value: Option<String>,
}

impl SubEntityFilter {
    /// The holder discriminator pair, only when both halves are set and non-empty.
    pub fn holder(&self) -> Option<(&str, &str)> {
        match (&self.holder_type_field, &self.holder_type_value) {
            (Some(field), Some(value)) if !field.is_empty() && !value.is_empty() => {
                Some((field.as_str(), value.as_str()))
            }
            _ => None,
        }
    }
}

/// Candidate records for each foreign-key field, keyed by field name.
pub type ForeignKeyOptions = HashMap<String, Vec<EntityRecord>>;
