pub use sea_orm_migration::prelude::*;

mod m20250901_000001_player_note;
mod m20250901_000002_player_warning;
mod m20250901_000003_player_tenure_action;
mod m20250901_000004_player_departure_action;
mod m20250901_000005_player_alias_link;
mod m20250901_000006_roster_snapshot_member;
mod m20250901_000007_clan_member;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_player_note::Migration),
            Box::new(m20250901_000002_player_warning::Migration),
            Box::new(m20250901_000003_player_tenure_action::Migration),
            Box::new(m20250901_000004_player_departure_action::Migration),
            Box::new(m20250901_000005_player_alias_link::Migration),
            Box::new(m20250901_000006_roster_snapshot_member::Migration),
            Box::new(m20250901_000007_clan_member::Migration),
        ]
    }
}
