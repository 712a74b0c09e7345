use pretty_assertions::assert_eq;
use schemaform_model::{
    EntityMetadata, EnumOption, EnumSource, FieldKind, FieldMetadata, FieldType,
    ForeignKeyFilter, ForeignKeyFilterType, RuleCheck, SchemaError, SubEntityConfig, TeamSide,
    ValidationRule,
};
use serde_json::json;

fn parse_field(value: serde_json::Value) -> Result<FieldMetadata, serde_json::Error> {
    serde_json::from_value(value)
}

// ── FieldMetadata constructors ───────────────────────────────────

#[test]
fn string_field_defaults() {
    let f = FieldMetadata::string("name", "Name");
    assert_eq!(f.field_name, "name");
    assert_eq!(f.display_name, "Name");
    assert_eq!(f.field_type, FieldType::String);
    assert!(!f.is_required);
    assert!(!f.is_read_only);
    assert_eq!(f.show_in_list, None);
    assert_eq!(f.hide_on_create, None);
    assert!(f.validation_rules.is_empty());
}

#[test]
fn builder_flags_are_explicit() {
    let f = FieldMetadata::number("age", "Age")
        .required()
        .read_only()
        .read_only_on_edit()
        .in_list(true)
        .in_form(false)
        .hide_on_create()
        .placeholder("e.g. 21");
    assert!(f.is_required);
    assert!(f.is_read_only);
    assert!(f.is_locked_on_edit());
    assert!(f.is_listed());
    assert_eq!(f.show_in_form, Some(false));
    assert!(f.is_hidden_on_create());
    assert_eq!(f.placeholder.as_deref(), Some("e.g. 21"));
}

#[test]
fn enumeration_keeps_value_order() {
    let f = FieldMetadata::enumeration("status", "Status", ["active", "inactive", "archived"]);
    match f.field_type.enum_source() {
        Some(EnumSource::Values(values)) => {
            assert_eq!(values, &vec!["active", "inactive", "archived"]);
        }
        other => panic!("unexpected enum source: {other:?}"),
    }
    assert_eq!(f.field_type.kind(), FieldKind::Enum);
}

#[test]
fn foreign_key_exposes_target() {
    let f = FieldMetadata::foreign_key("team_id", "Team", "team");
    assert_eq!(f.field_type.foreign_key_entity(), Some("team"));
    assert_eq!(f.field_type.kind(), FieldKind::ForeignKey);
}

#[test]
fn foreign_key_filter_only_sticks_to_foreign_keys() {
    let filter = ForeignKeyFilter::new("fixture_id", ForeignKeyFilterType::TeamJerseyFromFixture)
        .side(TeamSide::Home);
    let fk = FieldMetadata::foreign_key("home_jersey_id", "Home Jersey", "jerseycolor")
        .foreign_key_filter(filter.clone());
    let plain = FieldMetadata::string("notes", "Notes").foreign_key_filter(filter.clone());

    match &fk.field_type {
        FieldType::ForeignKey(target) => assert_eq!(target.filter.as_ref(), Some(&filter)),
        other => panic!("expected foreign key, got {other:?}"),
    }
    assert_eq!(plain.field_type, FieldType::String);
}

#[test]
fn sub_entity_config_with_holder() {
    let config = SubEntityConfig::new("qualification", "holder_id")
        .with_holder("holder_type", "official");
    let f = FieldMetadata::sub_entity("qualifications", "Qualifications", config);
    assert!(f.field_type.is_sub_entity());
    let config = f.field_type.sub_entity_config().unwrap();
    assert_eq!(config.child_entity_type, "qualification");
    assert_eq!(config.holder_type_field.as_deref(), Some("holder_type"));
    assert_eq!(config.holder_type_value.as_deref(), Some("official"));
}

#[test]
fn field_kind_names() {
    assert_eq!(FieldKind::ForeignKey.as_str(), "foreign_key");
    assert_eq!(FieldKind::SubEntity.as_str(), "sub_entity");
    assert_eq!(FieldType::File.kind().as_str(), "file");
    assert!(FieldType::File.is_file());
}

// ── EntityMetadata ───────────────────────────────────────────────

fn player() -> EntityMetadata {
    EntityMetadata::new(
        "player",
        "Player",
        vec![
            FieldMetadata::string("first_name", "First Name").required(),
            FieldMetadata::foreign_key("team_id", "Team", "team"),
            FieldMetadata::foreign_key("position_id", "Position", "playerposition"),
            FieldMetadata::sub_entity(
                "identifications",
                "Identifications",
                SubEntityConfig::new("identification", "player_id"),
            ),
        ],
    )
}

#[test]
fn field_lookup_by_name() {
    let meta = player();
    assert_eq!(meta.field("team_id").unwrap().display_name, "Team");
    assert!(meta.field("missing").is_none());
}

#[test]
fn relationship_helpers() {
    let meta = player();
    let fk: Vec<&str> = meta.foreign_key_fields().map(|f| f.field_name.as_str()).collect();
    assert_eq!(fk, vec!["team_id", "position_id"]);
    assert_eq!(meta.sub_entity_fields().count(), 1);
    assert!(meta.references("team"));
    assert!(!meta.references("venue"));
}

#[test]
fn validate_accepts_well_formed_entity() {
    assert_eq!(player().validate(), Ok(()));
}

#[test]
fn validate_rejects_empty_name() {
    let meta = EntityMetadata::new("  ", "Blank", vec![FieldMetadata::string("a", "A")]);
    assert_eq!(meta.validate(), Err(SchemaError::EmptyEntityName));
}

#[test]
fn validate_rejects_no_fields() {
    let meta = EntityMetadata::new("empty", "Empty", vec![]);
    assert_eq!(
        meta.validate(),
        Err(SchemaError::NoFields {
            entity: "empty".into()
        })
    );
}

#[test]
fn validate_rejects_duplicate_fields() {
    let meta = EntityMetadata::new(
        "dup",
        "Dup",
        vec![
            FieldMetadata::string("name", "Name"),
            FieldMetadata::number("name", "Name again"),
        ],
    );
    assert_eq!(
        meta.validate(),
        Err(SchemaError::DuplicateField {
            entity: "dup".into(),
            field: "name".into()
        })
    );
}

// ── Wire format ──────────────────────────────────────────────────

#[test]
fn parses_flat_enum_field() {
    let f = parse_field(json!({
        "field_name": "gender",
        "display_name": "Gender",
        "field_type": "enum",
        "is_required": true,
        "is_read_only": false,
        "show_in_list": true,
        "enum_values": ["male", "female"]
    }))
    .unwrap();
    assert_eq!(
        f,
        FieldMetadata::enumeration("gender", "Gender", ["male", "female"])
            .required()
            .in_list(true)
    );
}

#[test]
fn parses_enum_options_and_rules() {
    let f = parse_field(json!({
        "field_name": "visibility",
        "display_name": "Visibility",
        "field_type": "enum",
        "is_required": false,
        "is_read_only": false,
        "enum_options": [{"value": "public", "label": "Public"}],
        "validation_rules": [
            {"rule_type": "max_length", "rule_value": 10, "error_message": "too long"},
            {"rule_type": "pattern", "rule_value": "^[a-z]+$", "error_message": "lowercase"}
        ]
    }))
    .unwrap();
    assert_eq!(
        f.field_type,
        FieldType::Enum(EnumSource::Options(vec![EnumOption::new("public", "Public")]))
    );
    assert_eq!(f.validation_rules[0].check, RuleCheck::MaxLength(10));
    assert_eq!(f.validation_rules[1].check, RuleCheck::Pattern("^[a-z]+$".into()));
}

#[test]
fn rejects_foreign_key_without_entity() {
    let err = parse_field(json!({
        "field_name": "team_id",
        "display_name": "Team",
        "field_type": "foreign_key",
        "is_required": false,
        "is_read_only": false,
        "foreign_key_entity": ""
    }))
    .unwrap_err();
    assert!(err.to_string().contains("foreign_key_entity"), "{err}");
}

#[test]
fn rejects_enum_without_source() {
    let err = parse_field(json!({
        "field_name": "status",
        "display_name": "Status",
        "field_type": "enum",
        "is_required": false,
        "is_read_only": false
    }))
    .unwrap_err();
    assert!(err.to_string().contains("enum_values"), "{err}");
}

#[test]
fn rejects_sub_entity_without_config() {
    let err = parse_field(json!({
        "field_name": "children",
        "display_name": "Children",
        "field_type": "sub_entity",
        "is_required": false,
        "is_read_only": false
    }))
    .unwrap_err();
    assert!(err.to_string().contains("sub_entity_config"), "{err}");
}

#[test]
fn rejects_missing_required_flag() {
    let err = parse_field(json!({
        "field_name": "name",
        "display_name": "Name",
        "field_type": "string",
        "is_read_only": false
    }))
    .unwrap_err();
    assert!(err.to_string().contains("is_required"), "{err}");
}

#[test]
fn rejects_fractional_length_rule() {
    let err = serde_json::from_value::<ValidationRule>(json!({
        "rule_type": "min_length",
        "rule_value": 2.5,
        "error_message": "x"
    }))
    .unwrap_err();
    assert!(err.to_string().contains("min_length"), "{err}");
}

#[test]
fn custom_rule_keeps_payload() {
    let rule: ValidationRule = serde_json::from_value(json!({
        "rule_type": "custom",
        "rule_value": {"fn": "isAdult"},
        "error_message": "must be adult"
    }))
    .unwrap();
    assert_eq!(rule.check, RuleCheck::Custom(json!({"fn": "isAdult"})));
}

#[test]
fn serializes_back_to_flat_shape() {
    let f = FieldMetadata::foreign_key("venue_id", "Venue", "venue").required();
    let value = serde_json::to_value(&f).unwrap();
    assert_eq!(
        value,
        json!({
            "field_name": "venue_id",
            "display_name": "Venue",
            "field_type": "foreign_key",
            "is_required": true,
            "is_read_only": false,
            "foreign_key_entity": "venue"
        })
    );
}

#[test]
fn entity_metadata_from_toml() {
    let meta: EntityMetadata = toml::from_str(
        r#"
        entity_name = "kit"
        display_name = "Kit"

        [[fields]]
        field_name = "name"
        display_name = "Name"
        field_type = "string"
        is_required = true
        is_read_only = false

        [[fields.validation_rules]]
        rule_type = "min_length"
        rule_value = 2
        error_message = "Name must be at least 2 characters"

        [[fields]]
        field_name = "team_id"
        display_name = "Team"
        field_type = "foreign_key"
        is_required = false
        is_read_only = false
        foreign_key_entity = "team"
        "#,
    )
    .unwrap();
    assert_eq!(meta.entity_name, "kit");
    assert_eq!(meta.fields.len(), 2);
    assert_eq!(meta.fields[0].validation_rules[0].check, RuleCheck::MinLength(2));
    assert!(meta.references("team"));
}
