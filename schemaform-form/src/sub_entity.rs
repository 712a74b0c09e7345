use schemaform_model::{EntityRecord, FieldMetadata, SubEntityFilter};

/// Linkage used to load the children of a sub-entity field for `parent_entity`.
///
/// `None` unless `field` is a sub-entity field and the parent has a
/// non-empty id.
pub fn build_sub_entity_filter(
    field: &FieldMetadata,
    parent_entity: Option<&EntityRecord>,
) -> Option<SubEntityFilter> {
    let config = field.field_type.sub_entity_config()?;
    let parent_id = parent_entity.map(EntityRecord::id_text)?;
    if parent_id.is_empty() {
        return None;
    }

    Some(SubEntityFilter {
        foreign_key_field: config.foreign_key_field.clone(),
        foreign_key_value: parent_id,
        holder_type_field: config.holder_type_field.clone(),
        holder_type_value: config.holder_type_value.clone(),
    })
}
