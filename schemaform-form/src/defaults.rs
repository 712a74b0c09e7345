use schemaform_model::{EntityMetadata, EntityRecord, EnumSource, FieldMetadata, FieldType};
use serde_json::Value;

/// Initial value for an empty field of this type.
///
/// Required enums with plain values start on their first value; every other
/// enum starts empty.
pub fn get_default_value_for_field_type(field: &FieldMetadata) -> Value {
    match &field.field_type {
        FieldType::Number => Value::from(0),
        FieldType::Boolean => Value::Bool(false),
        FieldType::Enum(EnumSource::Values(values)) if field.is_required => values
            .first()
            .map(|v| Value::String(v.clone()))
            .unwrap_or_else(empty),
        FieldType::Enum(_)
        | FieldType::String
        | FieldType::Date
        | FieldType::File
        | FieldType::ForeignKey(_)
        | FieldType::SubEntity(_) => empty(),
    }
}

fn empty() -> Value {
    Value::String(String::new())
}

/// Draft record with one entry per declared field: the existing value when
/// the key is present (even if null), otherwise the type default. Keys not
/// declared in the schema are dropped.
pub fn initialize_form_data_from_metadata(
    metadata: &EntityMetadata,
    existing_data: Option<&EntityRecord>,
) -> EntityRecord {
    metadata
        .fields
        .iter()
        .map(|field| {
            let value = existing_data
                .and_then(|data| data.get(&field.field_name))
                .cloned()
                .unwrap_or_else(|| get_default_value_for_field_type(field));
            (field.field_name.clone(), value)
        })
        .collect()
}
