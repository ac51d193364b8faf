use sea_orm_migration::{prelude::*, schema::*};

static IDX_PLAYER_NOTE_CLAN_TAG: &str = "idx-player_note-clan_tag";
static IDX_PLAYER_NOTE_PLAYER_TAG: &str = "idx-player_note-player_tag";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerNote::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerNote::Id))
                    .col(string(PlayerNote::ClanTag))
                    .col(string(PlayerNote::PlayerTag))
                    .col(string_null(PlayerNote::PlayerName))
                    .col(text(PlayerNote::Note))
                    .col(text_null(PlayerNote::CustomFields))
                    .col(string(PlayerNote::CreatedBy))
                    .col(timestamp(PlayerNote::CreatedAt))
                    .col(timestamp(PlayerNote::UpdatedAt))
                    .col(timestamp_null(PlayerNote::ArchivedAt))
                    .col(string_null(PlayerNote::ArchivedBy))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAYER_NOTE_CLAN_TAG)
                    .table(PlayerNote::Table)
                    .col(PlayerNote::ClanTag)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAYER_NOTE_PLAYER_TAG)
                    .table(PlayerNote::Table)
                    .col(PlayerNote::PlayerTag)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLAYER_NOTE_PLAYER_TAG)
                    .table(PlayerNote::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLAYER_NOTE_CLAN_TAG)
                    .table(PlayerNote::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PlayerNote::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PlayerNote {
    Table,
    Id,
    ClanTag,
    PlayerTag,
    PlayerName,
    Note,
    CustomFields,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
    ArchivedAt,
    ArchivedBy,
}
