use pretty_assertions::assert_eq;
use schemaform_model::{EntityRecord, SubEntityFilter, stringify_value};
use serde_json::json;

fn record(value: serde_json::Value) -> EntityRecord {
    serde_json::from_value(value).unwrap()
}

// ── EntityRecord accessors ───────────────────────────────────────

#[test]
fn typed_getters() {
    let r = record(json!({"id": "p-1", "name": "Ada", "active": true, "age": 31}));
    assert_eq!(r.id(), Some("p-1"));
    assert_eq!(r.get_str("name"), Some("Ada"));
    assert_eq!(r.get_bool("active"), Some(true));
    assert_eq!(r.get_number("age"), Some(31.0));
    assert_eq!(r.get_str("age"), None);
    assert_eq!(r.get("missing"), None);
}

#[test]
fn null_id_still_counts_as_present_key() {
    let r = record(json!({"id": null}));
    assert!(r.has_id_key());
    assert_eq!(r.id(), None);
    assert_eq!(r.id_text(), "");
}

#[test]
fn numeric_id_renders_as_text() {
    let r = record(json!({"id": 42}));
    assert_eq!(r.id(), None);
    assert_eq!(r.id_text(), "42");
}

#[test]
fn builder_and_insert() {
    let mut r = EntityRecord::new().with("id", "x").with("count", 3);
    assert_eq!(r.len(), 2);
    let previous = r.insert("count", 4);
    assert_eq!(previous, Some(json!(3)));
    assert!(r.contains_key("count"));
    assert!(!r.is_empty());
}

#[test]
fn from_iterator_preserves_keys() {
    let r: EntityRecord = [("a", json!(1)), ("b", json!("two"))].into_iter().collect();
    let keys: Vec<&String> = r.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["a", "b"]);
}

#[test]
fn serializes_transparently() {
    let r = EntityRecord::new().with("id", "t-1").with("name", "Lions");
    assert_eq!(serde_json::to_value(&r).unwrap(), json!({"id": "t-1", "name": "Lions"}));
    let map = r.clone().into_map();
    assert_eq!(EntityRecord::from(map), r);
}

// ── stringify_value ──────────────────────────────────────────────

#[test]
fn stringify_scalars() {
    assert_eq!(stringify_value(&json!(null)), "");
    assert_eq!(stringify_value(&json!("text")), "text");
    assert_eq!(stringify_value(&json!(true)), "true");
    assert_eq!(stringify_value(&json!(7)), "7");
    assert_eq!(stringify_value(&json!(-7)), "-7");
    assert_eq!(stringify_value(&json!(5.0)), "5");
    assert_eq!(stringify_value(&json!(2.5)), "2.5");
}

#[test]
fn stringify_collections() {
    assert_eq!(stringify_value(&json!(["a", 1, null])), "a,1,");
    assert_eq!(stringify_value(&json!({"k": 1})), r#"{"k":1}"#);
}

// ── SubEntityFilter ──────────────────────────────────────────────

#[test]
fn holder_pair_requires_both_halves() {
    let mut filter = SubEntityFilter {
        foreign_key_field: "holder_id".into(),
        foreign_key_value: "o-1".into(),
        holder_type_field: Some("holder_type".into()),
        holder_type_value: None,
    };
    assert_eq!(filter.holder(), None);
    filter.holder_type_value = Some("official".into());
    assert_eq!(filter.holder(), Some(("holder_type", "official")));
    filter.holder_type_value = Some(String::new());
    assert_eq!(filter.holder(), None);
}
