use schemaform_model::{EntityRecord, EnumOption, EnumSource, FieldMetadata};

/// Choices currently offered by an enum field.
///
/// Plain values label themselves. Dependent enums look up the current
/// value of `depends_on_field` in `form_data` and offer nothing until that
/// field holds a known key. Non-enum fields offer nothing.
pub fn get_enum_options_for_field(field: &FieldMetadata, form_data: &EntityRecord) -> Vec<EnumOption> {
    match field.field_type.enum_source() {
        Some(EnumSource::Values(values)) => values.iter().map(|v| EnumOption::new(v, v)).collect(),
        Some(EnumSource::Options(options)) => options.clone(),
        Some(EnumSource::Dependent(dependency)) => form_data
            .get(&dependency.depends_on_field)
            .filter(|v| !v.is_null())
            .map(schemaform_model::stringify_value)
            .and_then(|key| dependency.options_map.get(&key))
            .cloned()
            .unwrap_or_default(),
        None => Vec::new(),
    }
}
