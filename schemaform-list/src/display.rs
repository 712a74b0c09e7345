use schemaform_model::{EntityMetadata, EntityRecord, ForeignKeyOptions, stringify_value};
use serde_json::Value;

/// Text shown in a list cell.
///
/// Foreign-key columns (those with an entry in `foreign_key_options`)
/// resolve to the matching option's `name`; booleans read `Yes`/`No`;
/// everything else is stringified. Missing and null values are empty.
pub fn get_display_value_for_entity_field(
    entity: Option<&EntityRecord>,
    field_name: &str,
    foreign_key_options: &ForeignKeyOptions,
) -> String {
    let Some(entity) = entity else {
        return String::new();
    };
    if field_name.is_empty() {
        return String::new();
    }
    let raw = match entity.get(field_name) {
        None | Some(Value::Null) => return String::new(),
        Some(raw) => raw,
    };

    if let Some(options) = foreign_key_options.get(field_name) {
        if let Some(option) = options.iter().find(|o| o.get("id") == Some(raw)) {
            return option
                .get_str("name")
                .filter(|name| !name.is_empty())
                .map(str::to_owned)
                .unwrap_or_else(|| stringify_value(raw));
        }
    }

    match raw {
        Value::Bool(true) => "Yes".into(),
        Value::Bool(false) => "No".into(),
        other => stringify_value(other),
    }
}

/// Heading for a list: the schema's display name, else the entity type,
/// else `"Entity"`.
pub fn build_display_name_from_metadata(metadata: Option<&EntityMetadata>, entity_type: &str) -> String {
    metadata
        .map(|m| m.display_name.as_str())
        .filter(|name| !name.is_empty())
        .or(Some(entity_type).filter(|t| !t.is_empty()))
        .unwrap_or("Entity")
        .to_owned()
}
