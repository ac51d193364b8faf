//! Database model type aliases.
//!
//! Shorter names for the `entity` crate models used across repositories and services.

/// A free-form leader note about a player.
pub type NoteModel = entity::player_note::Model;

/// A warning issued to a player. Only warnings with `is_active` count towards the player
/// database.
pub type WarningModel = entity::player_warning::Model;

/// A tenure grant or revocation.
pub type TenureActionModel = entity::player_tenure_action::Model;

/// A recorded departure (voluntary, kicked, ...).
pub type DepartureActionModel = entity::player_departure_action::Model;

/// An administrator-asserted "same person" link between two tags.
///
/// # Fields (from `entity::player_alias_link::Model`)
/// - `player_tag_1`, `player_tag_2` - Linked tags, unordered
/// - `removed_at` - Tombstone, `None` while the link is live
pub type AliasLinkModel = entity::player_alias_link::Model;

/// One member row of a dated roster snapshot.
pub type RosterSnapshotMemberModel = entity::roster_snapshot_member::Model;

/// Last known name for a tag in the clan member table.
pub type ClanMemberModel = entity::clan_member::Model;
