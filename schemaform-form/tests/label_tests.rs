use pretty_assertions::assert_eq;
use schemaform_form::{build_entity_display_label, get_display_value_for_foreign_key};
use schemaform_model::EntityRecord;
use serde_json::json;

fn record(value: serde_json::Value) -> EntityRecord {
    serde_json::from_value(value).unwrap()
}

// ── build_entity_display_label ───────────────────────────────────

#[test]
fn name_wins() {
    let r = record(json!({"id": "1", "name": "Lions", "first_name": "Ada", "title": "T"}));
    assert_eq!(build_entity_display_label(&r), "Lions");
}

#[test]
fn blank_name_falls_through_to_person_name() {
    let r = record(json!({"id": "1", "name": "  ", "first_name": "Ada", "last_name": "Lovelace"}));
    assert_eq!(build_entity_display_label(&r), "Ada Lovelace");
}

#[test]
fn person_name_is_trimmed() {
    let r = record(json!({"id": "1", "first_name": "Ada", "last_name": ""}));
    assert_eq!(build_entity_display_label(&r), "Ada");
}

#[test]
fn person_name_needs_both_keys_as_strings() {
    let r = record(json!({"id": "p-1", "first_name": "Ada"}));
    assert_eq!(build_entity_display_label(&r), "p-1");
}

#[test]
fn title_after_names() {
    let r = record(json!({"id": "1", "title": "Highlights"}));
    assert_eq!(build_entity_display_label(&r), "Highlights");
}

#[test]
fn fixture_with_team_names() {
    let r = record(json!({
        "id": "fx-123456789",
        "home_team_id": "t1",
        "away_team_id": "t2",
        "home_team_name": "Lions",
        "away_team_name": "Tigers",
        "scheduled_date": "2024-06-15"
    }));
    assert_eq!(build_entity_display_label(&r), "Lions vs Tigers");
}

#[test]
fn fixture_falls_back_to_date_then_round_then_id() {
    let base = json!({"id": "fx-123456789", "home_team_id": "t1", "away_team_id": "t2"});

    let mut with_date = base.clone();
    with_date["scheduled_date"] = json!("2024-06-15");
    with_date["round_name"] = json!("Final");
    assert_eq!(build_entity_display_label(&record(with_date)), "Fixture (2024-06-15)");

    let mut with_round = base.clone();
    with_round["round_name"] = json!("Final");
    assert_eq!(build_entity_display_label(&record(with_round)), "Fixture (Final)");

    assert_eq!(build_entity_display_label(&record(base)), "Fixture: fx-12345");
}

#[test]
fn fixture_branch_needs_string_team_ids() {
    let r = record(json!({"id": "fx-1", "home_team_id": "t1", "away_team_id": null}));
    assert_eq!(build_entity_display_label(&r), "fx-1");
}

#[test]
fn falls_back_to_id_or_empty() {
    assert_eq!(build_entity_display_label(&record(json!({"id": "x-9"}))), "x-9");
    assert_eq!(build_entity_display_label(&record(json!({"id": 7}))), "7");
    assert_eq!(build_entity_display_label(&EntityRecord::new()), "");
}

// ── get_display_value_for_foreign_key ────────────────────────────

#[test]
fn resolves_option_label_by_trimmed_id() {
    let options = vec![
        record(json!({"id": " team-1 ", "name": "Lions"})),
        record(json!({"id": "team-2", "name": "Tigers"})),
    ];
    assert_eq!(get_display_value_for_foreign_key(&options, "team-1"), "Lions");
    assert_eq!(get_display_value_for_foreign_key(&options, " team-2"), "Tigers");
}

#[test]
fn unmatched_value_is_returned_trimmed() {
    let options = vec![record(json!({"id": "team-1", "name": "Lions"}))];
    assert_eq!(get_display_value_for_foreign_key(&options, "  team-9 "), "team-9");
    assert_eq!(get_display_value_for_foreign_key(&[], ""), "");
}
