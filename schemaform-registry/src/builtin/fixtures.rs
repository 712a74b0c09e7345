use schemaform_model::{
    EntityMetadata, FieldMetadata, ForeignKeyFilter, ForeignKeyFilterType, TeamSide,
    ValidationRule,
};

use super::{kickoff_slots, listed_enum, required_listed_fk, required_listed_string, status};

pub(super) fn entities() -> Vec<EntityMetadata> {
    vec![
        fixture(),
        fixture_lineup(),
        fixture_details_setup(),
        game_assignment(),
        active_game(),
        game_event_type(),
    ]
}

fn score(field_name: &str, display_name: &str) -> FieldMetadata {
    FieldMetadata::number(field_name, display_name)
        .hide_on_create()
        .rule(ValidationRule::min_value(0.0, "Score cannot be negative"))
}

fn fixture() -> EntityMetadata {
    let opponent = |other: &str| {
        ForeignKeyFilter::new("competition_id", ForeignKeyFilterType::TeamsFromCompetition)
            .excluding(other)
    };

    EntityMetadata::new(
        "fixture",
        "Fixture",
        vec![
            FieldMetadata::foreign_key("competition_id", "Competition", "competition").required(),
            required_listed_fk("home_team_id", "Home Team", "team")
                .foreign_key_filter(opponent("away_team_id")),
            required_listed_fk("away_team_id", "Away Team", "team")
                .foreign_key_filter(opponent("home_team_id")),
            FieldMetadata::date("scheduled_date", "Scheduled Date")
                .required()
                .in_list(true),
            FieldMetadata::enumeration("scheduled_time", "Scheduled Time", kickoff_slots())
                .required()
                .in_list(true),
            FieldMetadata::string("venue", "Venue")
                .required()
                .in_list(false),
            status([
                "scheduled",
                "in_progress",
                "paused",
                "completed",
                "cancelled",
                "postponed",
            ]),
            score("home_team_score", "Home Team Score"),
            score("away_team_score", "Away Team Score"),
            FieldMetadata::string("actual_start_time", "Actual Start Time").hide_on_create(),
            FieldMetadata::string("actual_end_time", "Actual End Time").hide_on_create(),
        ],
    )
}

fn fixture_lineup() -> EntityMetadata {
    EntityMetadata::new(
        "fixturelineup",
        "Fixture Lineup",
        vec![
            required_listed_fk("fixture_id", "Fixture", "fixture"),
            required_listed_fk("team_id", "Team", "team"),
            FieldMetadata::string("submitted_by", "Submitted By").in_list(true),
            FieldMetadata::string("submitted_at", "Submitted At")
                .read_only()
                .in_list(true),
            FieldMetadata::string("notes", "Notes").in_list(false),
            status(["draft", "submitted", "locked"]),
        ],
    )
}

fn fixture_details_setup() -> EntityMetadata {
    let team_jersey = |side| {
        ForeignKeyFilter::new("fixture_id", ForeignKeyFilterType::TeamJerseyFromFixture).side(side)
    };

    EntityMetadata::new(
        "fixturedetailssetup",
        "Fixture Details Setup",
        vec![
            required_listed_fk("fixture_id", "Fixture", "fixture").read_only_on_edit(),
            required_listed_fk("official_id", "Official", "official"),
            required_listed_fk("role_id", "Official Role", "gameofficialrole"),
            FieldMetadata::foreign_key("home_team_jersey_id", "Home Team Jersey", "jerseycolor")
                .in_list(false)
                .foreign_key_filter(team_jersey(TeamSide::Home)),
            FieldMetadata::foreign_key("away_team_jersey_id", "Away Team Jersey", "jerseycolor")
                .in_list(false)
                .foreign_key_filter(team_jersey(TeamSide::Away)),
            FieldMetadata::foreign_key("official_jersey_id", "Official Jersey", "jerseycolor")
                .in_list(false)
                .foreign_key_filter(ForeignKeyFilter::new(
                    "fixture_id",
                    ForeignKeyFilterType::OfficialJerseyFromCompetition,
                )),
            FieldMetadata::string("assignment_notes", "Assignment Notes").in_list(false),
        ],
    )
}

// Games are fixtures once they kick off, so game references point at `fixture`.
fn game_assignment() -> EntityMetadata {
    EntityMetadata::new(
        "game_assignment",
        "Game Assignment",
        vec![
            required_listed_fk("game_id", "Game", "fixture"),
            required_listed_fk("official_id", "Official", "official"),
            listed_enum(
                "assignment_role",
                "Role",
                [
                    "referee",
                    "assistant_referee",
                    "fourth_official",
                    "timekeeper",
                    "scorekeeper",
                ],
            ),
            FieldMetadata::boolean("confirmed", "Confirmed")
                .required()
                .in_list(true),
            FieldMetadata::date("assigned_at", "Assigned At")
                .required()
                .read_only()
                .in_list(true),
            FieldMetadata::string("assigned_by_user_id", "Assigned By User")
                .required()
                .read_only(),
            FieldMetadata::string("notes", "Notes"),
        ],
    )
}

fn active_game() -> EntityMetadata {
    let listed_number = |field_name: &str, display_name: &str| {
        FieldMetadata::number(field_name, display_name)
            .required()
            .in_list(true)
    };

    EntityMetadata::new(
        "active_game",
        "Active Game",
        vec![
            required_listed_fk("game_id", "Game", "fixture"),
            listed_enum(
                "current_status",
                "Current Status",
                [
                    "pre_game",
                    "first_half",
                    "half_time",
                    "second_half",
                    "extra_time",
                    "penalty_shootout",
                    "finished",
                ],
            ),
            listed_number("current_minute", "Current Minute"),
            FieldMetadata::number("stoppage_time_minutes", "Stoppage Time (Minutes)").required(),
            listed_number("home_team_score", "Home Team Score"),
            listed_number("away_team_score", "Away Team Score"),
            FieldMetadata::date("last_event_timestamp", "Last Event Time")
                .required()
                .read_only(),
            FieldMetadata::string("game_started_by_user_id", "Started By User")
                .required()
                .read_only(),
        ],
    )
}

fn game_event_type() -> EntityMetadata {
    EntityMetadata::new(
        "gameeventtype",
        "Game Event Type",
        vec![
            required_listed_string("name", "Event Name"),
            FieldMetadata::string("code", "Code")
                .required()
                .in_list(false),
            FieldMetadata::string("description", "Description").in_list(false),
            FieldMetadata::string("icon", "Icon").in_list(true),
            FieldMetadata::string("color", "Color").in_list(false),
            listed_enum("category", "Category", ["score", "discipline"]),
            FieldMetadata::number("display_order", "Display Order").in_list(false),
            FieldMetadata::foreign_key("sport_id", "Sport", "sport").in_list(true),
            status(["active", "inactive", "archived"]),
        ],
    )
}
