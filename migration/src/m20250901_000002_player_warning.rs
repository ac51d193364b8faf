use sea_orm_migration::{prelude::*, schema::*};

static IDX_PLAYER_WARNING_CLAN_TAG: &str = "idx-player_warning-clan_tag";
static IDX_PLAYER_WARNING_PLAYER_TAG: &str = "idx-player_warning-player_tag";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerWarning::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerWarning::Id))
                    .col(string(PlayerWarning::ClanTag))
                    .col(string(PlayerWarning::PlayerTag))
                    .col(string_null(PlayerWarning::PlayerName))
                    .col(text(PlayerWarning::WarningNote))
                    .col(boolean(PlayerWarning::IsActive).default(true))
                    .col(string(PlayerWarning::CreatedBy))
                    .col(timestamp(PlayerWarning::CreatedAt))
                    .col(timestamp(PlayerWarning::UpdatedAt))
                    .col(timestamp_null(PlayerWarning::ArchivedAt))
                    .col(string_null(PlayerWarning::ArchivedBy))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAYER_WARNING_CLAN_TAG)
                    .table(PlayerWarning::Table)
                    .col(PlayerWarning::ClanTag)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAYER_WARNING_PLAYER_TAG)
                    .table(PlayerWarning::Table)
                    .col(PlayerWarning::PlayerTag)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLAYER_WARNING_PLAYER_TAG)
                    .table(PlayerWarning::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLAYER_WARNING_CLAN_TAG)
                    .table(PlayerWarning::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PlayerWarning::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PlayerWarning {
    Table,
    Id,
    ClanTag,
    PlayerTag,
    PlayerName,
    WarningNote,
    IsActive,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
    ArchivedAt,
    ArchivedBy,
}
