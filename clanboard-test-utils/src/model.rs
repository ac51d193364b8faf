//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main clanboard crate to keep fixture
//! signatures consistent across tests.

pub type NoteModel = entity::player_note::Model;

pub type WarningModel = entity::player_warning::Model;

pub type TenureActionModel = entity::player_tenure_action::Model;

pub type DepartureActionModel = entity::player_departure_action::Model;

pub type AliasLinkModel = entity::player_alias_link::Model;

pub type RosterSnapshotMemberModel = entity::roster_snapshot_member::Model;

pub type ClanMemberModel = entity::clan_member::Model;
