//! Human-readable labels for records of any entity type.
//!
//! This is a heuristic over an opaque map, not a typed operation: it
//! looks for the keys common entity shapes use and falls back to the id.

use schemaform_model::EntityRecord;

fn non_blank<'a>(entity: &'a EntityRecord, key: &str) -> Option<&'a str> {
    entity.get_str(key).filter(|s| !s.trim().is_empty())
}

/// Resolution order:
/// 1. non-blank `name`
/// 2. `first_name` and `last_name` (both strings, at least one non-blank), joined and trimmed
/// 3. non-blank `title`
/// 4. fixture-shaped records (string `home_team_id` and `away_team_id`):
///    `"{home_team_name} vs {away_team_name}"`, then `"Fixture ({scheduled_date})"`,
///    then `"Fixture ({round_name})"`, then `"Fixture: {first 8 chars of id}"`
/// 5. the id, or empty when there is none
pub fn build_entity_display_label(entity: &EntityRecord) -> String {
    if let Some(name) = non_blank(entity, "name") {
        return name.to_owned();
    }

    if let (Some(first), Some(last)) = (entity.get_str("first_name"), entity.get_str("last_name")) {
        if !first.trim().is_empty() || !last.trim().is_empty() {
            return format!("{first} {last}").trim().to_owned();
        }
    }

    if let Some(title) = non_blank(entity, "title") {
        return title.to_owned();
    }

    if entity.get_str("home_team_id").is_some() && entity.get_str("away_team_id").is_some() {
        return fixture_label(entity);
    }

    entity.id_text()
}

// TODO: move into a per-entity label hook once the registry can carry one.
fn fixture_label(entity: &EntityRecord) -> String {
    if let (Some(home), Some(away)) = (
        entity.get_str("home_team_name"),
        entity.get_str("away_team_name"),
    ) {
        return format!("{home} vs {away}");
    }
    if let Some(date) = non_blank(entity, "scheduled_date") {
        return format!("Fixture ({date})");
    }
    if let Some(round) = non_blank(entity, "round_name") {
        return format!("Fixture ({round})");
    }
    let short_id: String = entity.id_text().chars().take(8).collect();
    format!("Fixture: {short_id}")
}

/// Label of the option whose trimmed `id` equals the trimmed `value`, or the
/// trimmed value itself when no option matches.
pub fn get_display_value_for_foreign_key(options: &[EntityRecord], value: &str) -> String {
    let wanted = value.trim();
    options
        .iter()
        .find(|option| option.id_text().trim() == wanted)
        .map(build_entity_display_label)
        .unwrap_or_else(|| wanted.to_owned())
}
