use schemaform_model::EntityRecord;

/// A form edits when it was opened with a record that carries an `id` key.
pub fn determine_if_edit_mode(data: Option<&EntityRecord>) -> bool {
    data.is_some_and(EntityRecord::has_id_key)
}

/// `"Edit {display_name}"` or `"Create {display_name}"`. An empty name
/// keeps the trailing space.
pub fn build_form_title(display_name: &str, edit_mode: bool) -> String {
    let action = if edit_mode { "Edit" } else { "Create" };
    format!("{action} {display_name}")
}
