use chrono::{FixedOffset, TimeZone, Utc};
use pretty_assertions::assert_eq;
use schemaform_list::{build_csv_content, build_csv_filename};
use schemaform_model::{EntityMetadata, EntityRecord, FieldMetadata, ForeignKeyOptions};

fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

fn team_meta() -> EntityMetadata {
    EntityMetadata::new(
        "team",
        "Team",
        vec![
            FieldMetadata::string("name", "Name"),
            FieldMetadata::foreign_key("venue_id", "Home Venue", "venue"),
            FieldMetadata::boolean("active", ""),
        ],
    )
}

// ── CSV content ──────────────────────────────────────────────────

#[test]
fn quotes_inside_cells_are_doubled() {
    let rows = vec![EntityRecord::new().with("id", "1").with("name", r#"He said "hi""#)];
    let csv = build_csv_content(&rows, &columns(&["name"]), Some(&team_meta()), &ForeignKeyOptions::new());
    assert_eq!(csv, "Name\n\"He said \"\"hi\"\"\"");
}

#[test]
fn header_uses_display_names_and_cells_resolve() {
    let rows = vec![
        EntityRecord::new().with("name", "Lions").with("venue_id", "v1").with("active", true),
        EntityRecord::new().with("name", "Tigers, FC").with("venue_id", "v2").with("active", false),
    ];
    let mut options = ForeignKeyOptions::new();
    options.insert(
        "venue_id".into(),
        vec![EntityRecord::new().with("id", "v1").with("name", "Main Park")],
    );

    let csv = build_csv_content(
        &rows,
        &columns(&["name", "venue_id", "active"]),
        Some(&team_meta()),
        &options,
    );
    assert_eq!(
        csv,
        "Name,Home Venue,active\n\
         \"Lions\",\"Main Park\",\"Yes\"\n\
         \"Tigers, FC\",\"v2\",\"No\""
    );
}

#[test]
fn header_falls_back_to_field_names_without_metadata() {
    let rows = vec![EntityRecord::new().with("name", "Lions")];
    let csv = build_csv_content(&rows, &columns(&["name", "city"]), None, &ForeignKeyOptions::new());
    assert_eq!(csv, "name,city\n\"Lions\",\"\"");
}

#[test]
fn nothing_to_export_is_empty() {
    let rows = vec![EntityRecord::new().with("name", "Lions")];
    assert_eq!(build_csv_content(&[], &columns(&["name"]), None, &ForeignKeyOptions::new()), "");
    assert_eq!(build_csv_content(&rows, &[], None, &ForeignKeyOptions::new()), "");
}

#[test]
fn embedded_newlines_stay_inside_quotes() {
    let rows = vec![EntityRecord::new().with("notes", "line one\nline two")];
    let csv = build_csv_content(&rows, &columns(&["notes"]), None, &ForeignKeyOptions::new());
    assert_eq!(csv, "notes\n\"line one\nline two\"");
}

// ── File name ────────────────────────────────────────────────────

#[test]
fn filename_carries_the_utc_date() {
    let when = Utc.with_ymd_and_hms(2024, 6, 15, 9, 30, 0).unwrap();
    assert_eq!(build_csv_filename("teams", &when), "teams_export_2024-06-15.csv");
}

#[test]
fn filename_converts_offsets_to_utc() {
    let plus_five = FixedOffset::east_opt(5 * 3600).unwrap();
    let when = plus_five.with_ymd_and_hms(2024, 6, 16, 1, 0, 0).unwrap();
    assert_eq!(build_csv_filename("teams", &when), "teams_export_2024-06-15.csv");
}
