use sea_orm_migration::{prelude::*, schema::*};

static IDX_PLAYER_TENURE_ACTION_CLAN_TAG: &str = "idx-player_tenure_action-clan_tag";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerTenureAction::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerTenureAction::Id))
                    .col(string(PlayerTenureAction::ClanTag))
                    .col(string(PlayerTenureAction::PlayerTag))
                    .col(string_null(PlayerTenureAction::PlayerName))
                    .col(string(PlayerTenureAction::Action))
                    .col(text_null(PlayerTenureAction::Reason))
                    .col(string(PlayerTenureAction::GrantedBy))
                    .col(timestamp(PlayerTenureAction::CreatedAt))
                    .col(timestamp_null(PlayerTenureAction::ArchivedAt))
                    .col(string_null(PlayerTenureAction::ArchivedBy))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAYER_TENURE_ACTION_CLAN_TAG)
                    .table(PlayerTenureAction::Table)
                    .col(PlayerTenureAction::ClanTag)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLAYER_TENURE_ACTION_CLAN_TAG)
                    .table(PlayerTenureAction::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PlayerTenureAction::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PlayerTenureAction {
    Table,
    Id,
    ClanTag,
    PlayerTag,
    PlayerName,
    Action,
    Reason,
    GrantedBy,
    CreatedAt,
    ArchivedAt,
    ArchivedBy,
}
