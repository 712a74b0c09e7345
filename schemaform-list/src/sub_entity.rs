use std::collections::BTreeMap;

use schemaform_model::{EntityRecord, SubEntityFilter, stringify_value};
use serde_json::Value;

/// Blank child record for a sub-list: an empty `id`, plus the parent link
/// and holder discriminator when a filter is given.
pub fn create_new_entity_with_defaults(filter: Option<&SubEntityFilter>) -> EntityRecord {
    let mut entity = EntityRecord::new().with("id", "");
    if let Some(filter) = filter {
        entity.insert(filter.foreign_key_field.clone(), filter.foreign_key_value.clone());
        if let Some((field, value)) = filter.holder() {
            entity.insert(field, value);
        }
    }
    entity
}

/// Repository query for a sub-list: the parent link, plus the holder pair
/// when both halves are set.
pub fn build_filter_from_sub_entity_config(
    filter: Option<&SubEntityFilter>,
) -> Option<BTreeMap<String, String>> {
    let filter = filter?;
    let mut query = BTreeMap::new();
    query.insert(filter.foreign_key_field.clone(), filter.foreign_key_value.clone());
    if let Some((field, value)) = filter.holder() {
        query.insert(field.to_owned(), value.to_owned());
    }
    Some(query)
}

/// Children belonging to the parent described by `filter`.
pub fn filter_sub_entity_children(children: &[EntityRecord], filter: &SubEntityFilter) -> Vec<EntityRecord> {
    let holder = filter.holder();
    children
        .iter()
        .filter(|child| field_text(child, &filter.foreign_key_field) == filter.foreign_key_value)
        .filter(|child| holder.is_none_or(|(field, value)| field_text(child, field) == value))
        .cloned()
        .collect()
}

fn field_text(record: &EntityRecord, field: &str) -> String {
    match record.get(field) {
        None | Some(Value::Null) => String::new(),
        Some(value) => stringify_value(value),
    }
}
