//! Factory functions for timestamps and in-memory database models.
//!
//! Pure functions, no database interaction, suitable for unit tests of the
//! aggregation pipeline.

use chrono::{NaiveDate, NaiveDateTime};

use crate::model::{NoteModel, WarningModel};

/// Parse a `YYYY-MM-DD` date.
///
/// # Panics
/// Panics on malformed input, test data is expected to be well-formed.
pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

/// Midnight on the provided `YYYY-MM-DD` date.
pub fn at(value: &str) -> NaiveDateTime {
    date(value).and_hms_opt(0, 0, 0).unwrap()
}

/// Create a mock note model with standard test values.
pub fn mock_note_model(
    id: i32,
    clan_tag: &str,
    player_tag: &str,
    player_name: Option<&str>,
    created_at: NaiveDateTime,
) -> NoteModel {
    NoteModel {
        id,
        clan_tag: clan_tag.to_string(),
        player_tag: player_tag.to_string(),
        player_name: player_name.map(str::to_string),
        note: "Test note".to_string(),
        custom_fields: None,
        created_by: "Test Leader".to_string(),
        created_at,
        updated_at: created_at,
        archived_at: None,
        archived_by: None,
    }
}

/// Create a mock warning model with standard test values.
pub fn mock_warning_model(
    id: i32,
    clan_tag: &str,
    player_tag: &str,
    player_name: Option<&str>,
    created_at: NaiveDateTime,
    is_active: bool,
) -> WarningModel {
    WarningModel {
        id,
        clan_tag: clan_tag.to_string(),
        player_tag: player_tag.to_string(),
        player_name: player_name.map(str::to_string),
        warning_note: "Test warning".to_string(),
        is_active,
        created_by: "Test Leader".to_string(),
        created_at,
        updated_at: created_at,
        archived_at: None,
        archived_by: None,
    }
}
