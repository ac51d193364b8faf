use sea_orm_migration::{prelude::*, schema::*};

static IDX_PLAYER_DEPARTURE_ACTION_CLAN_TAG: &str = "idx-player_departure_action-clan_tag";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerDepartureAction::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerDepartureAction::Id))
                    .col(string(PlayerDepartureAction::ClanTag))
                    .col(string(PlayerDepartureAction::PlayerTag))
                    .col(string_null(PlayerDepartureAction::PlayerName))
                    .col(string(PlayerDepartureAction::DepartureType))
                    .col(text_null(PlayerDepartureAction::Reason))
                    .col(string(PlayerDepartureAction::RecordedBy))
                    .col(timestamp(PlayerDepartureAction::CreatedAt))
                    .col(timestamp_null(PlayerDepartureAction::ArchivedAt))
                    .col(string_null(PlayerDepartureAction::ArchivedBy))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAYER_DEPARTURE_ACTION_CLAN_TAG)
                    .table(PlayerDepartureAction::Table)
                    .col(PlayerDepartureAction::ClanTag)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLAYER_DEPARTURE_ACTION_CLAN_TAG)
                    .table(PlayerDepartureAction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(PlayerDepartureAction::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PlayerDepartureAction {
    Table,
    Id,
    ClanTag,
    PlayerTag,
    PlayerName,
    DepartureType,
    Reason,
    RecordedBy,
    CreatedAt,
    ArchivedAt,
    ArchivedBy,
}
