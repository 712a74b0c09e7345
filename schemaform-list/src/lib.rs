//! List engine for schema-described entities.
//!
//! Everything here is a pure function over borrowed records: filtering by
//! column text, natural-order sorting, default column selection, selection
//! sets, sub-list linkage and CSV export. Inputs are never mutated; each
//! "change" returns a fresh collection.
//!
//! ```
//! use schemaform_list::{SortDirection, sort_entities};
//! use schemaform_model::EntityRecord;
//!
//! let rows: Vec<EntityRecord> = ["10", "2", "100"]
//!     .iter()
//!     .map(|n| EntityRecord::new().with("id", *n).with("n", *n))
//!     .collect();
//! let sorted = sort_entities(&rows, "n", SortDirection::Asc, &Default::default());
//! let order: Vec<String> = sorted.iter().map(|r| r.id_text()).collect();
//! assert_eq!(order, ["2", "10", "100"]);
//! ```

mod columns;
mod compare;
mod display;
mod export;
mod filter;
mod result;
mod selection;
mod sub_entity;

pub use columns::{build_default_visible_column_names, toggle_column_in_set};
pub use compare::natural_compare;
pub use display::{build_display_name_from_metadata, get_display_value_for_entity_field};
pub use export::{build_csv_content, build_csv_filename};
pub use filter::{
    FilterState, Filters, SortDirection, SortState, apply_filters_and_sorting,
    apply_filters_to_entities, clear_filter_state, sort_entities, toggle_sort_direction,
};
pub use result::{
    extract_error_message_from_result, extract_items_from_result_data,
    extract_total_count_from_result_data,
};
pub use selection::{
    check_if_all_entities_selected, check_if_some_entities_selected,
    determine_if_bulk_actions_available, get_selected_entities_from_list, remove_entities_by_ids,
    toggle_select_all_entities, toggle_single_entity_selection,
};
pub use sub_entity::{
    build_filter_from_sub_entity_config, create_new_entity_with_defaults, filter_sub_entity_children,
};
