use sea_orm_migration::{prelude::*, schema::*};

static IDX_CLAN_MEMBER_PLAYER_TAG: &str = "idx-clan_member-player_tag";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClanMember::Table)
                    .if_not_exists()
                    .col(pk_auto(ClanMember::Id))
                    .col(string(ClanMember::ClanTag))
                    .col(string(ClanMember::PlayerTag))
                    .col(string(ClanMember::Name))
                    .col(timestamp(ClanMember::CreatedAt))
                    .col(timestamp(ClanMember::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CLAN_MEMBER_PLAYER_TAG)
                    .table(ClanMember::Table)
                    .col(ClanMember::PlayerTag)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CLAN_MEMBER_PLAYER_TAG)
                    .table(ClanMember::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ClanMember::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ClanMember {
    Table,
    Id,
    ClanTag,
    PlayerTag,
    Name,
    CreatedAt,
    UpdatedAt,
}
