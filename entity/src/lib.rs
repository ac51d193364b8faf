//! SeaORM entity definitions for the clan player database.

pub mod prelude;

pub mod clan_member;
pub mod player_alias_link;
pub mod player_departure_action;
pub mod player_note;
pub mod player_tenure_action;
pub mod player_warning;
pub mod roster_snapshot_member;
