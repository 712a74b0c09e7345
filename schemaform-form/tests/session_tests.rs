use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use schemaform_form::{FormSession, build_sub_entity_filter, get_enum_options_for_field};
use schemaform_model::{
    EntityMetadata, EntityRecord, EnumDependency, EnumOption, FieldMetadata, SubEntityConfig,
    SubEntityFilter,
};
use schemaform_registry::EntityMetadataRegistry;
use serde_json::json;

// ── build_sub_entity_filter ──────────────────────────────────────

fn qualifications() -> FieldMetadata {
    FieldMetadata::sub_entity(
        "qualifications",
        "Qualifications",
        SubEntityConfig::new("qualification", "holder_id").with_holder("holder_type", "official"),
    )
}

#[test]
fn filter_copies_config_and_parent_id() {
    let parent = EntityRecord::new().with("id", "o-1");
    assert_eq!(
        build_sub_entity_filter(&qualifications(), Some(&parent)),
        Some(SubEntityFilter {
            foreign_key_field: "holder_id".into(),
            foreign_key_value: "o-1".into(),
            holder_type_field: Some("holder_type".into()),
            holder_type_value: Some("official".into()),
        })
    );
}

#[test]
fn filter_without_holder() {
    let field = FieldMetadata::sub_entity(
        "links",
        "Links",
        SubEntityConfig::new("profilelink", "profile_id"),
    );
    let parent = EntityRecord::new().with("id", "pp-1");
    let filter = build_sub_entity_filter(&field, Some(&parent)).unwrap();
    assert_eq!(filter.foreign_key_field, "profile_id");
    assert_eq!(filter.holder_type_field, None);
}

#[test]
fn no_filter_without_parent_id() {
    let field = qualifications();
    assert_eq!(build_sub_entity_filter(&field, None), None);
    assert_eq!(build_sub_entity_filter(&field, Some(&EntityRecord::new())), None);
    let blank = EntityRecord::new().with("id", "");
    assert_eq!(build_sub_entity_filter(&field, Some(&blank)), None);
}

#[test]
fn no_filter_for_plain_fields() {
    let parent = EntityRecord::new().with("id", "o-1");
    assert_eq!(
        build_sub_entity_filter(&FieldMetadata::string("name", "Name"), Some(&parent)),
        None
    );
}

// ── get_enum_options_for_field ───────────────────────────────────

#[test]
fn plain_values_label_themselves() {
    let field = FieldMetadata::enumeration("status", "Status", ["active"]);
    assert_eq!(
        get_enum_options_for_field(&field, &EntityRecord::new()),
        vec![EnumOption::new("active", "active")]
    );
}

#[test]
fn dependent_options_follow_the_other_field() {
    let mut options_map = BTreeMap::new();
    options_map.insert(
        "football".to_string(),
        vec![EnumOption::new("gk", "Goalkeeper")],
    );
    let field = FieldMetadata::dependent_enum(
        "position",
        "Position",
        EnumDependency {
            depends_on_field: "sport".into(),
            options_map,
        },
    );

    let unset = EntityRecord::new();
    let unknown = EntityRecord::new().with("sport", "chess");
    let football = EntityRecord::new().with("sport", "football");
    assert!(get_enum_options_for_field(&field, &unset).is_empty());
    assert!(get_enum_options_for_field(&field, &unknown).is_empty());
    assert_eq!(
        get_enum_options_for_field(&field, &football),
        vec![EnumOption::new("gk", "Goalkeeper")]
    );
}

#[test]
fn non_enum_fields_have_no_options() {
    let field = FieldMetadata::string("name", "Name");
    assert!(get_enum_options_for_field(&field, &EntityRecord::new()).is_empty());
}

// ── FormSession ──────────────────────────────────────────────────

fn official() -> EntityMetadata {
    EntityMetadataRegistry::builtin()
        .get_entity_metadata("official")
        .cloned()
        .unwrap()
}

#[test]
fn create_session() {
    let meta = official();
    let session = FormSession::open(&meta, None);
    assert!(!session.is_edit_mode());
    assert_eq!(session.title(), "Create Official");
    assert_eq!(session.draft().get("status"), Some(&json!("active")));
    assert!(session.fields().iter().all(|f| !f.field_type.is_sub_entity()));
    assert!(session.sub_entity_filters().is_empty());
}

#[test]
fn edit_session_keeps_id_and_links_children() {
    let meta = official();
    let existing = EntityRecord::new()
        .with("id", "o-7")
        .with("first_name", "Pierluigi")
        .with("last_name", "Collina")
        .with("email", "pc@refs.org");
    let session = FormSession::open(&meta, Some(&existing));

    assert!(session.is_edit_mode());
    assert_eq!(session.title(), "Edit Official");
    assert_eq!(session.draft().id(), Some("o-7"));

    let filters = session.sub_entity_filters();
    let linked: Vec<&str> = filters.iter().map(|(f, _)| f.field_name.as_str()).collect();
    assert_eq!(linked, vec!["qualifications", "identifications"]);
    assert!(filters.iter().all(|(_, filter)| filter.foreign_key_value == "o-7"));
    assert!(session.validate().is_valid, "{:?}", session.validate().errors);
}

#[test]
fn session_edits_and_validates_draft() {
    let meta = official();
    let mut session = FormSession::open(&meta, None);
    assert!(!session.validate().is_valid);

    session.set("first_name", "Howard");
    session.set("last_name", "Webb");
    session.set("email", "not-an-email");
    let result = session.validate();
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors["email"], "Must be a valid email");

    session.set("email", "howard@refs.org");
    assert!(session.validate().is_valid);
    let draft = session.into_draft();
    assert_eq!(draft.get_str("last_name"), Some("Webb"));
}

#[test]
fn session_read_only_depends_on_mode() {
    let meta = EntityMetadataRegistry::builtin()
        .get_entity_metadata("playerteammembership")
        .cloned()
        .unwrap();
    let player_id = meta.field("player_id").unwrap();

    let create = FormSession::open(&meta, None);
    assert!(!create.is_read_only(player_id));

    let existing = EntityRecord::new().with("id", "m-1");
    let edit = FormSession::open(&meta, Some(&existing));
    assert!(edit.is_read_only(player_id));
    assert_eq!(edit.metadata().entity_name, "playerteammembership");
}

#[test]
fn session_enum_options() {
    let meta = official();
    let session = FormSession::open(&meta, None);
    let status = meta.field("status").unwrap();
    assert_eq!(session.enum_options(status).len(), 2);
}
