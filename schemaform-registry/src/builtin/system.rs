use schemaform_model::{EntityMetadata, FieldMetadata};

use super::{listed_enum, required_listed_string};

pub(super) fn entities() -> Vec<EntityMetadata> {
    vec![system_user(), audit_log()]
}

fn system_user() -> EntityMetadata {
    EntityMetadata::new(
        "systemuser",
        "System User",
        vec![
            required_listed_string("email", "Email"),
            required_listed_string("first_name", "First Name"),
            required_listed_string("last_name", "Last Name"),
            listed_enum("role", "Role", ["super_admin", "admin", "manager", "user"]),
            listed_enum("status", "Status", ["active", "inactive", "pending"]),
        ],
    )
}

/// Audit entries are written by the system; every field is read-only.
fn audit_log() -> EntityMetadata {
    let recorded = |field: FieldMetadata, listed: bool| field.read_only().in_list(listed);

    EntityMetadata::new(
        "auditlog",
        "Audit Log",
        vec![
            recorded(FieldMetadata::date("timestamp", "Timestamp").required(), true),
            recorded(FieldMetadata::string("entity_type", "Entity Type").required(), true),
            recorded(
                FieldMetadata::string("entity_display_name", "Entity Name").required(),
                true,
            ),
            recorded(
                FieldMetadata::enumeration("action", "Action", ["create", "update", "delete"])
                    .required(),
                true,
            ),
            recorded(FieldMetadata::string("user_display_name", "User").required(), true),
            recorded(FieldMetadata::string("user_email", "User Email").required(), false),
            recorded(FieldMetadata::string("entity_id", "Entity ID").required(), false),
            recorded(FieldMetadata::string("user_id", "User ID").required(), false),
            recorded(FieldMetadata::string("ip_address", "IP Address"), false),
        ],
    )
}
