use std::fmt;

use schemaform_model::{EntityMetadata, FieldMetadata, FieldType};
use serde::Serialize;

/// Fields rendered in the form body, in display order.
///
/// Sub-entity fields are rendered as nested lists elsewhere and never
/// appear. Fields marked `hide_on_create` appear only while editing. File
/// fields come first; relative order is otherwise preserved.
pub fn get_sorted_fields_for_display(
    fields: &[FieldMetadata],
    in_edit_mode: bool,
) -> Vec<&FieldMetadata> {
    let (files, others): (Vec<_>, Vec<_>) = fields
        .iter()
        .filter(|f| !f.field_type.is_sub_entity())
        .filter(|f| in_edit_mode || !f.is_hidden_on_create())
        .partition(|f| f.field_type.is_file());
    files.into_iter().chain(others).collect()
}

/// Sub-entity fields of `metadata`, in declaration order.
pub fn get_sub_entity_fields(metadata: Option<&EntityMetadata>) -> Vec<&FieldMetadata> {
    metadata
        .map(|meta| meta.sub_entity_fields().collect())
        .unwrap_or_default()
}

/// A field is locked when it is read-only, or read-only-on-edit while editing.
pub fn is_field_read_only(field: &FieldMetadata, edit_mode: bool) -> bool {
    field.is_read_only || (edit_mode && field.is_locked_on_edit())
}

/// The kind of input control a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    Number,
    Date,
    File,
    Email,
    Tel,
    Url,
}

impl InputKind {
    /// The HTML `type` attribute value.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Number => "number",
            InputKind::Date => "date",
            InputKind::File => "file",
            InputKind::Email => "email",
            InputKind::Tel => "tel",
            InputKind::Url => "url",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input kind by field type, then by case-sensitive substrings of the
/// field name. Names containing `icon` stay text even when they also
/// contain `url`.
pub fn get_input_type_for_field(field: &FieldMetadata) -> InputKind {
    match field.field_type {
        FieldType::Number => return InputKind::Number,
        FieldType::Date => return InputKind::Date,
        FieldType::File => return InputKind::File,
        FieldType::String
        | FieldType::Boolean
        | FieldType::Enum(_)
        | FieldType::ForeignKey(_)
        | FieldType::SubEntity(_) => {}
    }

    let name = field.field_name.as_str();
    if name.contains("email") {
        InputKind::Email
    } else if name.contains("phone") || name.contains("tel") {
        InputKind::Tel
    } else if name.contains("icon") {
        InputKind::Text
    } else if ["url", "website", "link"].iter().any(|k| name.contains(k)) {
        InputKind::Url
    } else {
        InputKind::Text
    }
}
