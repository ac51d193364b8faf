use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Placeholder shown for players whose name could not be resolved from any source.
///
/// This is a sentinel and never a valid resolved name.
pub const UNKNOWN_PLAYER_NAME: &str = "Unknown Player";

/// Membership of a tag in the clan, derived from periodic roster snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MembershipStatus {
    /// Present in the clan's most recent roster snapshot
    Current,
    /// Present in an older snapshot but not the most recent one
    Former,
    /// Never observed in any snapshot of the clan
    Never,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoteDto {
    pub id: i32,
    pub player_tag: String,
    pub player_name: Option<String>,
    pub note: String,
    pub custom_fields: Option<String>,
    pub created_by: String,
    pub created_at: NaiveDateTime,
    pub archived_at: Option<NaiveDateTime>,
    pub archived_by: Option<String>,
    /// Fetched only because the tag is alias-linked to a player of this clan
    pub alias_sourced: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WarningDto {
    pub id: i32,
    pub player_tag: String,
    pub player_name: Option<String>,
    pub warning_note: String,
    pub is_active: bool,
    pub created_by: String,
    pub created_at: NaiveDateTime,
    pub archived_at: Option<NaiveDateTime>,
    pub archived_by: Option<String>,
    pub alias_sourced: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TenureActionDto {
    pub id: i32,
    pub player_tag: String,
    pub player_name: Option<String>,
    pub action: String,
    pub reason: Option<String>,
    pub granted_by: String,
    pub created_at: NaiveDateTime,
    pub archived_at: Option<NaiveDateTime>,
    pub archived_by: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepartureActionDto {
    pub id: i32,
    pub player_tag: String,
    pub player_name: Option<String>,
    pub departure_type: String,
    pub reason: Option<String>,
    pub recorded_by: String,
    pub created_at: NaiveDateTime,
    pub archived_at: Option<NaiveDateTime>,
    pub archived_by: Option<String>,
}

/// Another account controlled by the same person.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LinkedAccountDto {
    pub tag: String,
    pub name: String,
    /// `never` flags a link to an account that was never verified as a clan member
    pub membership: MembershipStatus,
}

/// One player of the clan with every administrative record attached.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub tag: String,
    pub name: String,
    pub notes: Vec<NoteDto>,
    /// Active warnings only
    pub warnings: Vec<WarningDto>,
    pub tenure_actions: Vec<TenureActionDto>,
    pub departure_actions: Vec<DepartureActionDto>,
    /// Newest creation timestamp across all contributing records
    pub last_updated: Option<NaiveDateTime>,
    pub is_current_member: bool,
    pub membership: MembershipStatus,
    /// Most recent roster snapshot the player appeared in, when known
    pub last_seen: Option<NaiveDate>,
    pub linked_accounts: Vec<LinkedAccountDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDatabaseSummaryDto {
    pub clan_tag: String,
    pub player_count: usize,
    pub current_member_count: usize,
    pub linked_account_count: usize,
    pub include_archived: bool,
    pub include_historical: bool,
    pub latest_snapshot_date: Option<NaiveDate>,
    pub duration_ms: u64,
}

/// Response body of `GET /api/player-database`
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDatabaseDto {
    /// Players ordered by `lastUpdated`, most recent first
    pub players: Vec<PlayerDto>,
    pub summary: PlayerDatabaseSummaryDto,
}
