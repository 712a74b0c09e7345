use pretty_assertions::assert_eq;
use schemaform_form::{get_default_value_for_field_type, initialize_form_data_from_metadata};
use schemaform_model::{
    EntityMetadata, EntityRecord, EnumOption, FieldMetadata, SubEntityConfig,
};
use serde_json::json;

// ── get_default_value_for_field_type ─────────────────────────────

#[test]
fn scalar_defaults() {
    assert_eq!(get_default_value_for_field_type(&FieldMetadata::string("a", "A")), json!(""));
    assert_eq!(get_default_value_for_field_type(&FieldMetadata::number("a", "A")), json!(0));
    assert_eq!(get_default_value_for_field_type(&FieldMetadata::boolean("a", "A")), json!(false));
    assert_eq!(get_default_value_for_field_type(&FieldMetadata::date("a", "A")), json!(""));
    assert_eq!(get_default_value_for_field_type(&FieldMetadata::file("a", "A")), json!(""));
    assert_eq!(
        get_default_value_for_field_type(&FieldMetadata::foreign_key("a", "A", "team")),
        json!("")
    );
    assert_eq!(
        get_default_value_for_field_type(&FieldMetadata::sub_entity(
            "a",
            "A",
            SubEntityConfig::new("kid", "parent_id")
        )),
        json!("")
    );
}

#[test]
fn required_enum_defaults_to_first_value() {
    let field = FieldMetadata::enumeration("status", "Status", ["active", "inactive"]).required();
    assert_eq!(get_default_value_for_field_type(&field), json!("active"));
}

#[test]
fn optional_enum_defaults_to_empty() {
    let field = FieldMetadata::enumeration("status", "Status", ["active", "inactive"]);
    assert_eq!(get_default_value_for_field_type(&field), json!(""));
}

#[test]
fn required_enum_with_labelled_options_defaults_to_empty() {
    let field = FieldMetadata::enum_options(
        "visibility",
        "Visibility",
        vec![EnumOption::new("public", "Public")],
    )
    .required();
    assert_eq!(get_default_value_for_field_type(&field), json!(""));
}

// ── initialize_form_data_from_metadata ───────────────────────────

fn metadata() -> EntityMetadata {
    EntityMetadata::new(
        "team",
        "Team",
        vec![
            FieldMetadata::string("name", "Name").required(),
            FieldMetadata::number("founded_year", "Founded"),
            FieldMetadata::enumeration("status", "Status", ["active", "inactive"]).required(),
        ],
    )
}

#[test]
fn create_mode_uses_defaults() {
    let data = initialize_form_data_from_metadata(&metadata(), None);
    assert_eq!(
        serde_json::to_value(&data).unwrap(),
        json!({"name": "", "founded_year": 0, "status": "active"})
    );
}

#[test]
fn existing_values_win_including_null() {
    let existing = EntityRecord::new()
        .with("id", "t-1")
        .with("name", "Lions")
        .with("founded_year", json!(null))
        .with("extra", "ignored");
    let data = initialize_form_data_from_metadata(&metadata(), Some(&existing));
    assert_eq!(
        serde_json::to_value(&data).unwrap(),
        json!({"name": "Lions", "founded_year": null, "status": "active"})
    );
}
