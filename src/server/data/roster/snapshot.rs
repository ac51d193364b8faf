use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::{tag_eq, tag_in}, model::db::RosterSnapshotMemberModel, util::tag::PlayerTag,
};

pub struct RosterSnapshotRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RosterSnapshotRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Record that `player_tag` was a member of `clan_tag` on `snapshot_date`
    pub async fn create(
        &self,
        clan_tag: &PlayerTag,
        snapshot_date: NaiveDate,
        player_tag: &PlayerTag,
        player_name: Option<String>,
    ) -> Result<RosterSnapshotMemberModel, DbErr> {
        let member = entity::roster_snapshot_member::ActiveModel {
            clan_tag: ActiveValue::Set(clan_tag.to_string()),
            snapshot_date: ActiveValue::Set(snapshot_date),
            player_tag: ActiveValue::Set(player_tag.to_string()),
            player_name: ActiveValue::Set(player_name),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        member.insert(self.db).await
    }

    /// Date of the most recent snapshot taken for a clan, `None` if none exists
    pub async fn latest_date(&self, clan_tag: &PlayerTag) -> Result<Option<NaiveDate>, DbErr> {
        let latest = entity::prelude::RosterSnapshotMember::find()
            .filter(tag_eq(entity::roster_snapshot_member::Column::ClanTag, clan_tag))
            .order_by_desc(entity::roster_snapshot_member::Column::SnapshotDate)
            .limit(1)
            .one(self.db)
            .await?;

        Ok(latest.map(|member| member.snapshot_date))
    }

    /// Members of a clan's snapshot taken on `snapshot_date`
    pub async fn get_members_on(
        &self,
        clan_tag: &PlayerTag,
        snapshot_date: NaiveDate,
    ) -> Result<Vec<RosterSnapshotMemberModel>, DbErr> {
        entity::prelude::RosterSnapshotMember::find()
            .filter(tag_eq(entity::roster_snapshot_member::Column::ClanTag, clan_tag))
            .filter(entity::roster_snapshot_member::Column::SnapshotDate.eq(snapshot_date))
            .all(self.db)
            .await
    }

    /// Every snapshot row ever recorded for a clan, oldest snapshot first
    pub async fn get_all_for_clan(
        &self,
        clan_tag: &PlayerTag,
    ) -> Result<Vec<RosterSnapshotMemberModel>, DbErr> {
        entity::prelude::RosterSnapshotMember::find()
            .filter(tag_eq(entity::roster_snapshot_member::Column::ClanTag, clan_tag))
            .order_by_asc(entity::roster_snapshot_member::Column::SnapshotDate)
            .all(self.db)
            .await
    }

    /// Snapshot rows for any of the provided tags across every clan, newest snapshot first
    pub async fn get_by_tags(
        &self,
        player_tags: &[PlayerTag],
    ) -> Result<Vec<RosterSnapshotMemberModel>, DbErr> {
        if player_tags.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::RosterSnapshotMember::find()
            .filter(tag_in(entity::roster_snapshot_member::Column::PlayerTag, player_tags))
            .order_by_desc(entity::roster_snapshot_member::Column::SnapshotDate)
            .all(self.db)
            .await
    }
}
