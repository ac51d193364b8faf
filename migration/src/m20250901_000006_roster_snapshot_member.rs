use sea_orm_migration::{prelude::*, schema::*};

static IDX_ROSTER_SNAPSHOT_MEMBER_CLAN_DATE: &str = "idx-roster_snapshot_member-clan_tag-snapshot_date";
static IDX_ROSTER_SNAPSHOT_MEMBER_PLAYER_TAG: &str = "idx-roster_snapshot_member-player_tag";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RosterSnapshotMember::Table)
                    .if_not_exists()
                    .col(pk_auto(RosterSnapshotMember::Id))
                    .col(string(RosterSnapshotMember::ClanTag))
                    .col(date(RosterSnapshotMember::SnapshotDate))
                    .col(string(RosterSnapshotMember::PlayerTag))
                    .col(string_null(RosterSnapshotMember::PlayerName))
                    .col(timestamp(RosterSnapshotMember::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ROSTER_SNAPSHOT_MEMBER_CLAN_DATE)
                    .table(RosterSnapshotMember::Table)
                    .col(RosterSnapshotMember::ClanTag)
                    .col(RosterSnapshotMember::SnapshotDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ROSTER_SNAPSHOT_MEMBER_PLAYER_TAG)
                    .table(RosterSnapshotMember::Table)
                    .col(RosterSnapshotMember::PlayerTag)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ROSTER_SNAPSHOT_MEMBER_PLAYER_TAG)
                    .table(RosterSnapshotMember::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ROSTER_SNAPSHOT_MEMBER_CLAN_DATE)
                    .table(RosterSnapshotMember::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RosterSnapshotMember::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum RosterSnapshotMember {
    Table,
    Id,
    ClanTag,
    SnapshotDate,
    PlayerTag,
    PlayerName,
    CreatedAt,
}
