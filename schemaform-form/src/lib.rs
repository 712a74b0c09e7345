//! Schema-driven form engine.
//!
//! Pure functions over an [`EntityMetadata`](schemaform_model::EntityMetadata)
//! and an optional existing record: create/edit mode, titles, default
//! values, field ordering, input kinds, validation, sub-entity linkage, and
//! display labels. [`FormSession`] bundles them for a single form.

mod defaults;
mod enum_options;
mod label;
mod layout;
mod mode;
mod session;
mod sub_entity;
mod validation;

pub use defaults::{get_default_value_for_field_type, initialize_form_data_from_metadata};
pub use enum_options::get_enum_options_for_field;
pub use label::{build_entity_display_label, get_display_value_for_foreign_key};
pub use layout::{
    InputKind, get_input_type_for_field, get_sorted_fields_for_display, get_sub_entity_fields,
    is_field_read_only,
};
pub use mode::{build_form_title, determine_if_edit_mode};
pub use session::FormSession;
pub use sub_entity::build_sub_entity_filter;
pub use validation::{
    FieldValidationResult, FormValidationResult, validate_field_against_rules,
    validate_form_data_against_metadata,
};
