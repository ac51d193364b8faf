use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{data::tag_in, model::db::ClanMemberModel, util::tag::PlayerTag};

/// Fallback name table, one row per tag a clan has tracked.
pub struct ClanMemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClanMemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        clan_tag: &PlayerTag,
        player_tag: &PlayerTag,
        name: String,
    ) -> Result<ClanMemberModel, DbErr> {
        let now = Utc::now().naive_utc();
        let member = entity::clan_member::ActiveModel {
            clan_tag: ActiveValue::Set(clan_tag.to_string()),
            player_tag: ActiveValue::Set(player_tag.to_string()),
            name: ActiveValue::Set(name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        member.insert(self.db).await
    }

    /// Rows for any of the provided tags, most recently updated first
    pub async fn get_by_tags(&self, player_tags: &[PlayerTag]) -> Result<Vec<ClanMemberModel>, DbErr> {
        if player_tags.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::ClanMember::find()
            .filter(tag_in(entity::clan_member::Column::PlayerTag, player_tags))
            .order_by_desc(entity::clan_member::Column::UpdatedAt)
            .all(self.db)
            .await
    }
}
