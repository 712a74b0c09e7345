use schemaform_model::{EntityMetadata, EnumOption, FieldMetadata, SubEntityConfig, ValidationRule};

use super::{
    countries, held_by, listed_enum, name_min_length, required_listed_fk, required_listed_string,
    status, valid_email,
};

pub(super) fn entities() -> Vec<EntityMetadata> {
    vec![
        player(),
        player_position(),
        player_team_membership(),
        player_profile(),
        profile_link(),
        official(),
        game_official_role(),
        qualification(),
        identification(),
        identification_type(),
    ]
}

fn first_name() -> FieldMetadata {
    required_listed_string("first_name", "First Name")
        .rule(ValidationRule::min_length(1, "First name is required"))
}

fn last_name() -> FieldMetadata {
    required_listed_string("last_name", "Last Name")
        .rule(ValidationRule::min_length(1, "Last name is required"))
}

fn player() -> EntityMetadata {
    EntityMetadata::new(
        "player",
        "Player",
        vec![
            first_name(),
            last_name(),
            required_listed_fk("position_id", "Position", "playerposition"),
            FieldMetadata::date("date_of_birth", "Date of Birth").required(),
            FieldMetadata::enumeration("nationality", "Nationality", countries())
                .required()
                .in_list(true),
            FieldMetadata::string("email", "Email").rule(valid_email()),
            FieldMetadata::string("phone", "Phone"),
            FieldMetadata::number("height_cm", "Height (cm)"),
            FieldMetadata::number("weight_kg", "Weight (kg)"),
            FieldMetadata::file("profile_image_url", "Profile Picture"),
            FieldMetadata::string("emergency_contact_name", "Emergency Contact Name").in_list(false),
            FieldMetadata::string("emergency_contact_phone", "Emergency Contact Phone")
                .in_list(false),
            FieldMetadata::string("medical_notes", "Medical Notes").in_list(false),
            status(["active", "inactive", "injured", "suspended"]),
            held_by("identifications", "Identity Documents", "identification", "player"),
        ],
    )
}

fn player_position() -> EntityMetadata {
    EntityMetadata::new(
        "playerposition",
        "Player Position",
        vec![
            required_listed_string("name", "Position Name"),
            required_listed_string("code", "Code"),
            FieldMetadata::string("description", "Description"),
            listed_enum(
                "category",
                "Category",
                ["offense", "defense", "goalkeeper", "utility", "other"],
            ),
            FieldMetadata::number("display_order", "Display Order"),
            status(["active", "inactive", "archived"]),
        ],
    )
}

fn player_team_membership() -> EntityMetadata {
    EntityMetadata::new(
        "playerteammembership",
        "Player Team Membership",
        vec![
            required_listed_fk("player_id", "Player", "player").read_only_on_edit(),
            required_listed_fk("team_id", "Team", "team").read_only_on_edit(),
            FieldMetadata::date("start_date", "Start Date").required().in_list(true),
            FieldMetadata::number("jersey_number", "Jersey Number")
                .in_list(true)
                .rule(ValidationRule::min_value(1.0, "Jersey number must be positive"))
                .rule(ValidationRule::max_value(99.0, "Jersey number must be under 100")),
            status(["active", "inactive", "ended"]),
        ],
    )
}

fn player_profile() -> EntityMetadata {
    EntityMetadata::new(
        "playerprofile",
        "Player Profile",
        vec![
            required_listed_fk("player_id", "Player", "player").read_only_on_edit(),
            FieldMetadata::string("profile_summary", "Profile Summary")
                .in_list(false)
                .placeholder("Write a brief bio or introduction about the player..."),
            listed_enum("visibility", "Profile Visibility", ["public", "private"]),
            FieldMetadata::string("profile_slug", "Profile URL Slug")
                .in_list(false)
                .placeholder("Auto-generated from player name"),
            FieldMetadata::string("featured_image_url", "Featured Image URL")
                .in_list(false)
                .placeholder("https://example.com/image.jpg"),
            FieldMetadata::sub_entity(
                "links",
                "Links & Media",
                SubEntityConfig::new("profilelink", "profile_id"),
            )
            .in_list(false),
            status(["active", "inactive"]),
        ],
    )
}

fn profile_link() -> EntityMetadata {
    let platforms = [
        ("website", "Website"),
        ("youtube", "YouTube"),
        ("instagram", "Instagram"),
        ("facebook", "Facebook"),
        ("x", "X (Twitter)"),
        ("tiktok", "TikTok"),
        ("linkedin", "LinkedIn"),
        ("other", "Other"),
    ]
    .into_iter()
    .map(|(value, label)| EnumOption::new(value, label))
    .collect();

    EntityMetadata::new(
        "profilelink",
        "Profile Link",
        vec![
            FieldMetadata::foreign_key("profile_id", "Profile", "playerprofile")
                .required()
                .in_list(false),
            FieldMetadata::enum_options("platform", "Platform", platforms)
                .required()
                .in_list(true),
            required_listed_string("title", "Title").placeholder("Link title or description"),
            required_listed_string("url", "URL").placeholder("https://..."),
            FieldMetadata::number("display_order", "Display Order").in_list(false),
            status(["active", "inactive"]),
        ],
    )
}

fn official() -> EntityMetadata {
    EntityMetadata::new(
        "official",
        "Official",
        vec![
            first_name(),
            last_name(),
            FieldMetadata::string("email", "Email")
                .required()
                .in_list(false)
                .rule(valid_email()),
            FieldMetadata::string("phone", "Phone"),
            FieldMetadata::number("years_of_experience", "Years Experience")
                .in_list(false)
                .rule(ValidationRule::min_value(0.0, "Experience cannot be negative")),
            FieldMetadata::string("emergency_contact_name", "Emergency Contact").in_list(false),
            FieldMetadata::string("emergency_contact_phone", "Emergency Contact Phone")
                .in_list(false),
            FieldMetadata::date("date_of_birth", "Date of Birth").in_list(false),
            status(["active", "inactive"]),
            held_by(
                "qualifications",
                "Qualifications & Certifications",
                "qualification",
                "official",
            ),
            held_by("identifications", "Identity Documents", "identification", "official"),
        ],
    )
}

fn game_official_role() -> EntityMetadata {
    EntityMetadata::new(
        "gameofficialrole",
        "Game Official Role",
        vec![
            required_listed_string("name", "Role Name"),
            required_listed_string("code", "Code"),
            FieldMetadata::string("description", "Description").in_list(false),
            FieldMetadata::foreign_key("sport_id", "Sport", "sport").in_list(true),
            FieldMetadata::boolean("is_on_field", "Is On Field")
                .required()
                .in_list(true),
            FieldMetadata::boolean("is_head_official", "Is Head Official")
                .required()
                .in_list(false),
            FieldMetadata::number("display_order", "Display Order").in_list(false),
            status(["active", "inactive", "archived"]),
        ],
    )
}

fn qualification() -> EntityMetadata {
    EntityMetadata::new(
        "qualification",
        "Qualification",
        vec![
            listed_enum("holder_type", "Holder Type", ["official", "team_staff"]),
            FieldMetadata::string("holder_id", "Holder ID")
                .required()
                .in_list(false),
            required_listed_string("certification_name", "Certification Name"),
            listed_enum(
                "certification_level",
                "Certification Level",
                [
                    "trainee",
                    "local",
                    "regional",
                    "national",
                    "international",
                    "fifa",
                    "other",
                ],
            ),
            FieldMetadata::string("certification_number", "Certification Number").in_list(false),
            required_listed_string("issuing_authority", "Issuing Authority"),
            FieldMetadata::date("issue_date", "Issue Date")
                .required()
                .in_list(false),
            FieldMetadata::date("expiry_date", "Expiry Date")
                .required()
                .in_list(true),
            FieldMetadata::string("specializations", "Specializations").in_list(false),
            FieldMetadata::string("notes", "Notes").in_list(false),
            status(["active", "inactive"]),
        ],
    )
}

fn identification() -> EntityMetadata {
    EntityMetadata::new(
        "identification",
        "Identification",
        vec![
            listed_enum(
                "holder_type",
                "Holder Type",
                ["player", "team_staff", "official"],
            ),
            FieldMetadata::string("holder_id", "Holder ID")
                .required()
                .in_list(false),
            required_listed_fk(
                "identification_type_id",
                "Identification Type",
                "identificationtype",
            ),
            required_listed_string("identifier_value", "ID Number"),
            FieldMetadata::file("document_image_url", "Document Image"),
            FieldMetadata::date("issue_date", "Issue Date"),
            FieldMetadata::date("expiry_date", "Expiry Date").in_list(true),
            FieldMetadata::string("notes", "Notes"),
            status(["active", "inactive"]),
        ],
    )
}

fn identification_type() -> EntityMetadata {
    EntityMetadata::new(
        "identificationtype",
        "Identification Type",
        vec![
            required_listed_string("name", "Name").rule(name_min_length()),
            required_listed_string("identifier_field_label", "Identifier Field Label").rule(
                ValidationRule::min_length(2, "Identifier field label must be at least 2 characters"),
            ),
            FieldMetadata::string("description", "Description"),
            status(["active", "inactive"]),
        ],
    )
}
