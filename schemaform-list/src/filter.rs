use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use schemaform_model::{
    EntityMetadata, EntityRecord, FieldType, ForeignKeyOptions, stringify_value,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::compare::natural_compare;
use crate::display::get_display_value_for_entity_field;

/// Column filters: field name to the text typed into its filter box.
pub type Filters = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(format!("unknown sort direction: {other}")),
        }
    }
}

/// Which column a list is sorted by, and which way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub sort_column: String,
    pub sort_direction: SortDirection,
}

/// Filter and sort state of a list view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub filter_values: Filters,
    pub sort_column: String,
    pub sort_direction: SortDirection,
}

/// No filters, no sort column, ascending.
pub fn clear_filter_state() -> FilterState {
    FilterState::default()
}

/// Header click: the same column flips direction, a new column starts ascending.
pub fn toggle_sort_direction(
    current_column: &str,
    clicked_column: &str,
    current_direction: SortDirection,
) -> SortState {
    let sort_direction = if current_column == clicked_column {
        current_direction.flipped()
    } else {
        SortDirection::Asc
    };
    SortState {
        sort_column: clicked_column.to_owned(),
        sort_direction,
    }
}

fn is_foreign_key(metadata: Option<&EntityMetadata>, field_name: &str) -> bool {
    metadata
        .and_then(|m| m.field(field_name))
        .is_some_and(|f| matches!(f.field_type, FieldType::ForeignKey(_)))
}

/// Entities matching every non-blank filter.
///
/// Foreign-key fields match when the raw id equals the filter exactly;
/// other fields match when their display value contains the filter,
/// ignoring case.
pub fn apply_filters_to_entities(
    entities: &[EntityRecord],
    filters: &Filters,
    metadata: Option<&EntityMetadata>,
    foreign_key_options: &ForeignKeyOptions,
) -> Vec<EntityRecord> {
    let active: Vec<(&str, &str, bool)> = filters
        .iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(field, value)| {
            (
                field.as_str(),
                value.as_str(),
                is_foreign_key(metadata, field),
            )
        })
        .collect();

    if active.is_empty() {
        return entities.to_vec();
    }

    let matches = |entity: &EntityRecord| {
        active.iter().all(|&(field, wanted, exact)| {
            if exact {
                entity.get(field).map(stringify_value).unwrap_or_default() == wanted
            } else {
                get_display_value_for_entity_field(Some(entity), field, foreign_key_options)
                    .to_lowercase()
                    .contains(&wanted.to_lowercase())
            }
        })
    };

    let filtered: Vec<EntityRecord> = entities.iter().filter(|&e| matches(e)).cloned().collect();
    debug!(
        total = entities.len(),
        matched = filtered.len(),
        filters = active.len(),
        "Applied list filters"
    );
    filtered
}

/// Entities ordered by the display value of `sort_column`, using
/// [`natural_compare`]. Ties keep their input order in both directions.
/// An empty `sort_column` returns the input order.
pub fn sort_entities(
    entities: &[EntityRecord],
    sort_column: &str,
    sort_direction: SortDirection,
    foreign_key_options: &ForeignKeyOptions,
) -> Vec<EntityRecord> {
    if sort_column.is_empty() {
        return entities.to_vec();
    }

    let mut keyed: Vec<(String, &EntityRecord)> = entities
        .iter()
        .map(|e| {
            let key = get_display_value_for_entity_field(Some(e), sort_column, foreign_key_options);
            (key, e)
        })
        .collect();

    keyed.sort_by(|(a, _), (b, _)| {
        let ord = natural_compare(a, b);
        match sort_direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });

    keyed.into_iter().map(|(_, e)| e.clone()).collect()
}

/// Filter, then sort.
pub fn apply_filters_and_sorting(
    entities: &[EntityRecord],
    filters: &Filters,
    sort_column: &str,
    sort_direction: SortDirection,
    metadata: Option<&EntityMetadata>,
    foreign_key_options: &ForeignKeyOptions,
) -> Vec<EntityRecord> {
    let filtered = apply_filters_to_entities(entities, filters, metadata, foreign_key_options);
    sort_entities(&filtered, sort_column, sort_direction, foreign_key_options)
}
