use schemaform_model::{EntityMetadata, FieldMetadata, ValidationRule};

use super::{
    held_by, listed_enum, name_min_length, required_listed_fk, required_listed_string, status,
    valid_email,
};

pub(super) fn entities() -> Vec<EntityMetadata> {
    vec![
        sport(),
        organization(),
        competition(),
        competition_constraint(),
        competition_format(),
    ]
}

fn sport() -> EntityMetadata {
    EntityMetadata::new(
        "sport",
        "Sport",
        vec![
            required_listed_string("name", "Sport Name"),
            required_listed_string("code", "Sport Code"),
            FieldMetadata::string("description", "Description"),
            FieldMetadata::string("icon_url", "Icon (Emoji)").placeholder("e.g., ⚽ 🏀 🏈"),
            FieldMetadata::number("standard_game_duration_minutes", "Game Duration (Minutes)")
                .required(),
            FieldMetadata::number("max_players_on_field", "Max Players on Field")
                .required()
                .in_list(true),
            FieldMetadata::number("min_players_on_field", "Min Players on Field")
                .required()
                .in_list(true),
            FieldMetadata::number("max_squad_size", "Max Squad Size").required(),
            status(["active", "inactive", "archived"]),
        ],
    )
}

fn organization() -> EntityMetadata {
    EntityMetadata::new(
        "organization",
        "Organization",
        vec![
            required_listed_string("name", "Organization Name").rule(name_min_length()),
            FieldMetadata::string("description", "Description"),
            required_listed_fk("sport_id", "Sport", "sport"),
            FieldMetadata::date("founded_date", "Founded Date"),
            FieldMetadata::string("contact_email", "Contact Email")
                .in_list(true)
                .rule(valid_email()),
            FieldMetadata::string("contact_phone", "Contact Phone"),
            FieldMetadata::string("address", "Address"),
            FieldMetadata::string("website", "Website"),
            status(["active", "inactive", "suspended"]),
        ],
    )
}

fn competition() -> EntityMetadata {
    EntityMetadata::new(
        "competition",
        "Competition",
        vec![
            required_listed_string("name", "Competition Name").rule(name_min_length()),
            FieldMetadata::string("description", "Description"),
            required_listed_fk("organization_id", "Organization", "organization"),
            FieldMetadata::date("start_date", "Start Date").required().in_list(true),
            FieldMetadata::date("end_date", "End Date").required().in_list(true),
            FieldMetadata::number("max_teams", "Maximum Teams")
                .required()
                .rule(ValidationRule::min_value(2.0, "Must allow at least 2 teams")),
            FieldMetadata::date("registration_deadline", "Registration Deadline").required(),
            held_by(
                "official_jersey_colors",
                "Official Jersey Colors",
                "jerseycolor",
                "competition_official",
            ),
        ],
    )
}

fn competition_constraint() -> EntityMetadata {
    EntityMetadata::new(
        "competition_constraint",
        "Competition Constraint",
        vec![
            required_listed_fk("competition_id", "Competition", "competition"),
            listed_enum(
                "constraint_type",
                "Constraint Type",
                ["game", "player", "team", "match"],
            ),
            required_listed_string("name", "Constraint Name"),
            FieldMetadata::string("description", "Description"),
            FieldMetadata::enumeration("value_type", "Value Type", ["number", "string", "boolean"])
                .required(),
            required_listed_string("value", "Value"),
            FieldMetadata::boolean("is_mandatory", "Is Mandatory")
                .required()
                .in_list(true),
            FieldMetadata::string("applies_to", "Applies To").required(),
        ],
    )
}

fn competition_format() -> EntityMetadata {
    EntityMetadata::new(
        "competitionformat",
        "Competition Format",
        vec![
            required_listed_string("name", "Format Name"),
            FieldMetadata::string("code", "Code").required(),
            FieldMetadata::string("description", "Description"),
            listed_enum(
                "format_type",
                "Format Type",
                [
                    "league",
                    "round_robin",
                    "groups_knockout",
                    "straight_knockout",
                    "groups_playoffs",
                    "double_elimination",
                    "swiss",
                    "custom",
                ],
            ),
            FieldMetadata::number("min_teams_required", "Min Teams Required")
                .required()
                .in_list(true),
            FieldMetadata::number("max_teams_allowed", "Max Teams Allowed")
                .required()
                .in_list(true),
            status(["active", "inactive", "archived"]),
        ],
    )
}
