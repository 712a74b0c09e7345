//! Built-in entity declarations for a sports-league administration system.
//!
//! Grouped by domain; each group returns its entities in declaration order.

mod countries;
mod fixtures;
mod league;
mod people;
mod system;
mod teams;

pub use countries::{countries, kickoff_slots};

use schemaform_model::{EntityMetadata, FieldMetadata, SubEntityConfig, ValidationRule};

/// Every built-in entity declaration.
pub fn entities() -> Vec<EntityMetadata> {
    let mut all = Vec::with_capacity(29);
    all.extend(league::entities());
    all.extend(teams::entities());
    all.extend(people::entities());
    all.extend(fixtures::entities());
    all.extend(system::entities());
    all
}

const EMAIL_PATTERN: &str = r"^[^@]+@[^@]+\.[^@]+$";

fn valid_email() -> ValidationRule {
    ValidationRule::pattern(EMAIL_PATTERN, "Must be a valid email")
}

fn name_min_length() -> ValidationRule {
    ValidationRule::min_length(2, "Name must be at least 2 characters")
}

/// Required, listed `status` enum.
fn status<const N: usize>(values: [&str; N]) -> FieldMetadata {
    FieldMetadata::enumeration("status", "Status", values)
        .required()
        .in_list(true)
}

/// Required, listed enum.
fn listed_enum<const N: usize>(field_name: &str, display_name: &str, values: [&str; N]) -> FieldMetadata {
    FieldMetadata::enumeration(field_name, display_name, values)
        .required()
        .in_list(true)
}

/// Polymorphic child list keyed by `holder_id` / `holder_type`.
fn held_by(field_name: &str, display_name: &str, child: &str, holder: &str) -> FieldMetadata {
    FieldMetadata::sub_entity(
        field_name,
        display_name,
        SubEntityConfig::new(child, "holder_id").with_holder("holder_type", holder),
    )
    .in_list(false)
}

fn required_listed_string(field_name: &str, display_name: &str) -> FieldMetadata {
    FieldMetadata::string(field_name, display_name)
        .required()
        .in_list(true)
}

fn required_listed_fk(field_name: &str, display_name: &str, entity: &str) -> FieldMetadata {
    FieldMetadata::foreign_key(field_name, display_name, entity)
        .required()
        .in_list(true)
}
