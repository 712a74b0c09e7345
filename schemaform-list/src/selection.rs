use std::collections::BTreeSet;

use schemaform_model::EntityRecord;

/// Whether every entity's id is in `selected`. False for an empty list or
/// an empty selection.
pub fn check_if_all_entities_selected(entities: &[EntityRecord], selected: &BTreeSet<String>) -> bool {
    if entities.is_empty() || selected.is_empty() {
        return false;
    }
    entities.iter().all(|e| selected.contains(&e.id_text()))
}

pub fn check_if_some_entities_selected(selected: Option<&BTreeSet<String>>) -> bool {
    selected.is_some_and(|s| !s.is_empty())
}

/// Header checkbox: clears the selection when everything is selected,
/// otherwise selects every entity.
pub fn toggle_select_all_entities(entities: &[EntityRecord], all_selected: bool) -> BTreeSet<String> {
    if all_selected {
        BTreeSet::new()
    } else {
        entities.iter().map(EntityRecord::id_text).collect()
    }
}

/// Copy of `selected` with `entity_id` added or removed.
pub fn toggle_single_entity_selection(selected: &BTreeSet<String>, entity_id: &str) -> BTreeSet<String> {
    let mut next = selected.clone();
    if !next.remove(entity_id) {
        next.insert(entity_id.to_owned());
    }
    next
}

/// Entities whose id is selected, in list order.
pub fn get_selected_entities_from_list(
    entities: &[EntityRecord],
    selected: &BTreeSet<String>,
) -> Vec<EntityRecord> {
    if selected.is_empty() {
        return Vec::new();
    }
    entities
        .iter()
        .filter(|e| selected.contains(&e.id_text()))
        .cloned()
        .collect()
}

/// Entities whose id is not in `ids_to_remove`, in list order.
pub fn remove_entities_by_ids(entities: &[EntityRecord], ids_to_remove: &[String]) -> Vec<EntityRecord> {
    let doomed: BTreeSet<&str> = ids_to_remove.iter().map(String::as_str).collect();
    entities
        .iter()
        .filter(|e| !doomed.contains(e.id_text().as_str()))
        .cloned()
        .collect()
}

pub fn determine_if_bulk_actions_available(has_selection: bool, actions_enabled: bool) -> bool {
    has_selection && actions_enabled
}
