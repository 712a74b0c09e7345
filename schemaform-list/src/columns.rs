use std::collections::BTreeSet;

use schemaform_model::FieldMetadata;

/// Columns shown before the user picks any.
///
/// Sub-entity fields never show. Fields flagged `show_in_list = true` are
/// preferred; when none are flagged every remaining field qualifies. At most
/// `max(0, max_columns)` names are returned, in declaration order.
pub fn build_default_visible_column_names(fields: &[FieldMetadata], max_columns: i64) -> Vec<String> {
    let displayable: Vec<&FieldMetadata> = fields
        .iter()
        .filter(|f| !f.field_type.is_sub_entity())
        .collect();

    let flagged: Vec<&FieldMetadata> = displayable.iter().copied().filter(|f| f.is_listed()).collect();
    let preferred = if flagged.is_empty() { displayable } else { flagged };

    let cap = usize::try_from(max_columns.max(0)).unwrap_or(usize::MAX);
    preferred
        .into_iter()
        .take(cap)
        .map(|f| f.field_name.clone())
        .collect()
}

/// Copy of `visible_columns` with `field_name` added or removed.
pub fn toggle_column_in_set(visible_columns: &BTreeSet<String>, field_name: &str) -> BTreeSet<String> {
    let mut columns = visible_columns.clone();
    if !columns.remove(field_name) {
        columns.insert(field_name.to_owned());
    }
    columns
}
