use sea_orm_migration::{prelude::*, schema::*};

static IDX_PLAYER_ALIAS_LINK_PLAYER_TAG_1: &str = "idx-player_alias_link-player_tag_1";
static IDX_PLAYER_ALIAS_LINK_PLAYER_TAG_2: &str = "idx-player_alias_link-player_tag_2";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerAliasLink::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerAliasLink::Id))
                    .col(string(PlayerAliasLink::ClanTag))
                    .col(string(PlayerAliasLink::PlayerTag1))
                    .col(string(PlayerAliasLink::PlayerTag2))
                    .col(string(PlayerAliasLink::CreatedBy))
                    .col(timestamp(PlayerAliasLink::CreatedAt))
                    .col(timestamp_null(PlayerAliasLink::RemovedAt))
                    .col(string_null(PlayerAliasLink::RemovedBy))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAYER_ALIAS_LINK_PLAYER_TAG_1)
                    .table(PlayerAliasLink::Table)
                    .col(PlayerAliasLink::PlayerTag1)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAYER_ALIAS_LINK_PLAYER_TAG_2)
                    .table(PlayerAliasLink::Table)
                    .col(PlayerAliasLink::PlayerTag2)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLAYER_ALIAS_LINK_PLAYER_TAG_2)
                    .table(PlayerAliasLink::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLAYER_ALIAS_LINK_PLAYER_TAG_1)
                    .table(PlayerAliasLink::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PlayerAliasLink::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PlayerAliasLink {
    Table,
    Id,
    ClanTag,
    #[sea_orm(iden = "player_tag_1")]
    PlayerTag1,
    #[sea_orm(iden = "player_tag_2")]
    PlayerTag2,
    CreatedBy,
    CreatedAt,
    RemovedAt,
    RemovedBy,
}
