pub use super::clan_member::Entity as ClanMember;
pub use super::player_alias_link::Entity as PlayerAliasLink;
pub use super::player_departure_action::Entity as PlayerDepartureAction;
pub use super::player_note::Entity as PlayerNote;
pub use super::player_tenure_action::Entity as PlayerTenureAction;
pub use super::player_warning::Entity as PlayerWarning;
pub use super::roster_snapshot_member::Entity as RosterSnapshotMember;
