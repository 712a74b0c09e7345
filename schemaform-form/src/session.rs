use schemaform_model::{EntityMetadata, EntityRecord, EnumOption, FieldMetadata, SubEntityFilter};
use serde_json::Value;
use tracing::debug;

use crate::{
    FormValidationResult, build_form_title, build_sub_entity_filter, determine_if_edit_mode,
    get_enum_options_for_field, get_sorted_fields_for_display, get_sub_entity_fields,
    initialize_form_data_from_metadata, is_field_read_only, validate_form_data_against_metadata,
};

/// State of one create or edit form.
///
/// Owns its draft; open a new session per form rather than sharing one.
#[derive(Debug, Clone)]
pub struct FormSession<'a> {
    metadata: &'a EntityMetadata,
    edit_mode: bool,
    title: String,
    draft: EntityRecord,
}

impl<'a> FormSession<'a> {
    /// Opens a form for `metadata`, editing `existing` when it has an id.
    pub fn open(metadata: &'a EntityMetadata, existing: Option<&EntityRecord>) -> Self {
        let edit_mode = determine_if_edit_mode(existing);
        let mut draft = initialize_form_data_from_metadata(metadata, existing);
        if let Some(id) = existing.and_then(|record| record.get("id")) {
            draft.insert("id", id.clone());
        }

        debug!(entity = %metadata.entity_name, edit_mode, "Opened form session");
        Self {
            metadata,
            edit_mode,
            title: build_form_title(&metadata.display_name, edit_mode),
            draft,
        }
    }

    pub fn metadata(&self) -> &'a EntityMetadata {
        self.metadata
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Fields rendered in the form body.
    pub fn fields(&self) -> Vec<&'a FieldMetadata> {
        let metadata = self.metadata;
        get_sorted_fields_for_display(&metadata.fields, self.edit_mode)
    }

    pub fn draft(&self) -> &EntityRecord {
        &self.draft
    }

    pub fn set(&mut self, field_name: &str, value: impl Into<Value>) {
        self.draft.insert(field_name, value);
    }

    pub fn is_read_only(&self, field: &FieldMetadata) -> bool {
        is_field_read_only(field, self.edit_mode)
    }

    pub fn enum_options(&self, field: &FieldMetadata) -> Vec<EnumOption> {
        get_enum_options_for_field(field, &self.draft)
    }

    /// Child-list filters for every sub-entity field; empty while creating.
    pub fn sub_entity_filters(&self) -> Vec<(&'a FieldMetadata, SubEntityFilter)> {
        get_sub_entity_fields(Some(self.metadata))
            .into_iter()
            .filter_map(|field| {
                build_sub_entity_filter(field, Some(&self.draft)).map(|filter| (field, filter))
            })
            .collect()
    }

    pub fn validate(&self) -> FormValidationResult {
        validate_form_data_against_metadata(&self.draft, self.metadata)
    }

    pub fn into_draft(self) -> EntityRecord {
        self.draft
    }
}
