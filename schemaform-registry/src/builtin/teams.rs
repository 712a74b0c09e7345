use schemaform_model::{EntityMetadata, EnumOption, FieldMetadata, SubEntityConfig, ValidationRule};

use super::{
    countries, held_by, listed_enum, name_min_length, required_listed_fk, required_listed_string,
    status, valid_email,
};

pub(super) fn entities() -> Vec<EntityMetadata> {
    vec![
        venue(),
        team(),
        jersey_color(),
        team_staff(),
        team_staff_role(),
        team_profile(),
    ]
}

fn venue() -> EntityMetadata {
    EntityMetadata::new(
        "venue",
        "Venue",
        vec![
            required_listed_string("name", "Venue Name").rule(name_min_length()),
            FieldMetadata::string("short_name", "Short Name").in_list(true),
            FieldMetadata::string("address", "Address"),
            required_listed_string("city", "City"),
            FieldMetadata::enumeration("country", "Country", countries())
                .required()
                .in_list(true),
            FieldMetadata::number("capacity", "Capacity")
                .in_list(true)
                .rule(ValidationRule::min_value(0.0, "Capacity cannot be negative")),
            FieldMetadata::enumeration(
                "surface_type",
                "Surface Type",
                ["grass", "artificial_turf", "indoor", "clay", "concrete", "other"],
            )
            .required()
            .in_list(false),
            FieldMetadata::boolean("has_lighting", "Has Lighting"),
            FieldMetadata::boolean("has_parking", "Has Parking"),
            FieldMetadata::string("contact_email", "Contact Email").rule(valid_email()),
            FieldMetadata::string("contact_phone", "Contact Phone"),
            FieldMetadata::string("website", "Website"),
            FieldMetadata::file("image_url", "Venue Image"),
            status(["active", "inactive", "archived"]),
        ],
    )
}

fn team() -> EntityMetadata {
    EntityMetadata::new(
        "team",
        "Team",
        vec![
            required_listed_string("name", "Team Name").rule(name_min_length()),
            required_listed_fk("organization_id", "Organization", "organization"),
            required_listed_string("short_name", "Team Code").rule(ValidationRule::min_length(
                2,
                "Team code must be at least 2 characters",
            )),
            FieldMetadata::number("founded_year", "Established Year")
                .in_list(true)
                .rule(ValidationRule::min_value(1800.0, "Year must be realistic")),
            FieldMetadata::foreign_key("home_venue_id", "Home Venue", "venue").in_list(true),
            FieldMetadata::string("primary_color", "Team Color"),
            FieldMetadata::file("logo_url", "Team Logo"),
            status(["active", "inactive", "disqualified"]),
            held_by("jersey_colors", "Jersey Colors", "jerseycolor", "team"),
            FieldMetadata::sub_entity(
                "team_profile",
                "Public Profile",
                SubEntityConfig::new("teamprofile", "team_id"),
            )
            .in_list(false),
        ],
    )
}

fn jersey_color() -> EntityMetadata {
    EntityMetadata::new(
        "jerseycolor",
        "Jersey Color",
        vec![
            FieldMetadata::enumeration("holder_type", "Holder Type", ["team", "official"])
                .required()
                .in_list(false),
            FieldMetadata::string("holder_id", "Holder ID")
                .required()
                .in_list(false),
            required_listed_string("nickname", "Jersey Name"),
            required_listed_string("main_color", "Main Color"),
            FieldMetadata::string("secondary_color", "Secondary Color").in_list(true),
            FieldMetadata::string("tertiary_color", "Tertiary Color").in_list(false),
            status(["active", "inactive"]),
        ],
    )
}

fn team_staff() -> EntityMetadata {
    EntityMetadata::new(
        "teamstaff",
        "Team Staff",
        vec![
            required_listed_string("first_name", "First Name"),
            required_listed_string("last_name", "Last Name"),
            FieldMetadata::string("email", "Email").in_list(false),
            FieldMetadata::string("phone", "Phone"),
            FieldMetadata::date("date_of_birth", "Date of Birth"),
            required_listed_fk("team_id", "Team", "team"),
            required_listed_fk("role_id", "Staff Role", "teamstaffrole"),
            FieldMetadata::enumeration("nationality", "Nationality", countries()),
            FieldMetadata::file("profile_image_url", "Profile Image"),
            FieldMetadata::date("employment_start_date", "Employment Start Date"),
            FieldMetadata::date("employment_end_date", "Employment End Date"),
            FieldMetadata::string("emergency_contact_name", "Emergency Contact Name"),
            FieldMetadata::string("emergency_contact_phone", "Emergency Contact Phone"),
            FieldMetadata::string("notes", "Notes"),
            status(["active", "inactive", "archived"]),
            held_by(
                "qualifications",
                "Qualifications & Certifications",
                "qualification",
                "team_staff",
            ),
            held_by(
                "identifications",
                "Identity Documents",
                "identification",
                "team_staff",
            ),
        ],
    )
}

fn team_staff_role() -> EntityMetadata {
    EntityMetadata::new(
        "teamstaffrole",
        "Team Staff Role",
        vec![
            required_listed_string("name", "Role Name"),
            required_listed_string("code", "Code"),
            FieldMetadata::string("description", "Description"),
            listed_enum(
                "category",
                "Category",
                ["coaching", "medical", "administrative", "technical", "other"],
            ),
            FieldMetadata::boolean("is_primary_contact", "Is Primary Contact")
                .required()
                .in_list(true),
            FieldMetadata::number("display_order", "Display Order"),
            status(["active", "inactive", "archived"]),
        ],
    )
}

fn team_profile() -> EntityMetadata {
    EntityMetadata::new(
        "teamprofile",
        "Team Profile",
        vec![
            required_listed_fk("team_id", "Team", "team").read_only_on_edit(),
            FieldMetadata::string("profile_summary", "Profile Summary")
                .in_list(false)
                .placeholder("Write a brief introduction about the team..."),
            FieldMetadata::enum_options(
                "visibility",
                "Profile Visibility",
                vec![
                    EnumOption::new("public", "Public - Anyone with the link can view"),
                    EnumOption::new("private", "Private - Only you can view"),
                ],
            )
            .required()
            .in_list(true),
            FieldMetadata::string("profile_slug", "Profile URL Slug")
                .in_list(false)
                .placeholder("Auto-generated from team name"),
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
