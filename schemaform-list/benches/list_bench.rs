use std::collections::BTreeMap;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use schemaform_list::{
    SortDirection, apply_filters_to_entities, build_csv_content, sort_entities,
};
use schemaform_model::{EntityMetadata, EntityRecord, FieldMetadata, ForeignKeyOptions};

fn rows(count: usize) -> Vec<EntityRecord> {
    (0..count)
        .map(|i| {
            EntityRecord::new()
                .with("id", format!("p{i}"))
                .with("name", format!("Player {}", (i * 7919) % count))
                .with("team_id", format!("t{}", i % 16))
                .with("active", i % 3 != 0)
        })
        .collect()
}

fn team_options() -> ForeignKeyOptions {
    let teams = (0..16)
        .map(|i| EntityRecord::new().with("id", format!("t{i}")).with("name", format!("Team {i}")))
        .collect();
    ForeignKeyOptions::from([("team_id".to_string(), teams)])
}

fn meta() -> EntityMetadata {
    EntityMetadata::new(
        "player",
        "Player",
        vec![
            FieldMetadata::string("name", "Name"),
            FieldMetadata::foreign_key("team_id", "Team", "team"),
            FieldMetadata::boolean("active", "Active"),
        ],
    )
}

fn bench_list(c: &mut Criterion) {
    let data = rows(5_000);
    let options = team_options();
    let meta = meta();
    let filters = BTreeMap::from([("name".to_string(), "player 1".to_string())]);
    let columns = vec!["name".to_string(), "team_id".to_string(), "active".to_string()];

    c.bench_function("filter_5k", |b| {
        b.iter(|| apply_filters_to_entities(black_box(&data), &filters, Some(&meta), &options))
    });

    c.bench_function("sort_5k_by_name", |b| {
        b.iter(|| sort_entities(black_box(&data), "name", SortDirection::Asc, &options))
    });

    c.bench_function("sort_5k_by_fk", |b| {
        b.iter(|| sort_entities(black_box(&data), "team_id", SortDirection::Desc, &options))
    });

    c.bench_function("csv_5k", |b| {
        b.iter(|| build_csv_content(black_box(&data), &columns, Some(&meta), &options))
    });
}

criterion_group!(benches, bench_list);
criterion_main!(benches);
