use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::{data::tag_eq, model::db::TenureActionModel, util::tag::PlayerTag};

pub struct TenureActionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TenureActionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Record a tenure grant or revocation
    ///
    /// # Arguments
    /// - `action`: `granted` or `revoked`
    /// - `granted_by`: Leader performing the action
    pub async fn create(
        &self,
        clan_tag: &PlayerTag,
        player_tag: &PlayerTag,
        player_name: Option<String>,
        action: String,
        reason: Option<String>,
        granted_by: String,
    ) -> Result<TenureActionModel, DbErr> {
        let tenure_action = entity::player_tenure_action::ActiveModel {
            clan_tag: ActiveValue::Set(clan_tag.to_string()),
            player_tag: ActiveValue::Set(player_tag.to_string()),
            player_name: ActiveValue::Set(player_name),
            action: ActiveValue::Set(action),
            reason: ActiveValue::Set(reason),
            granted_by: ActiveValue::Set(granted_by),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            archived_at: ActiveValue::Set(None),
            archived_by: ActiveValue::Set(None),
            ..Default::default()
        };

        tenure_action.insert(self.db).await
    }

    pub async fn get_by_clan(
        &self,
        clan_tag: &PlayerTag,
        include_archived: bool,
    ) -> Result<Vec<TenureActionModel>, DbErr> {
        let mut query = entity::prelude::PlayerTenureAction::find()
            .filter(tag_eq(entity::player_tenure_action::Column::ClanTag, clan_tag));

        if !include_archived {
            query = query.filter(entity::player_tenure_action::Column::ArchivedAt.is_null());
        }

        query
            .order_by_asc(entity::player_tenure_action::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn archive(
        &self,
        id: i32,
        archived_by: &str,
    ) -> Result<Option<TenureActionModel>, DbErr> {
        let tenure_action = match entity::prelude::PlayerTenureAction::find_by_id(id)
            .one(self.db)
            .await?
        {
            Some(tenure_action) => tenure_action,
            None => return Ok(None),
        };

        if tenure_action.archived_at.is_some() {
            return Ok(Some(tenure_action));
        }

        let mut tenure_action_am = tenure_action.into_active_model();
        tenure_action_am.archived_at = ActiveValue::Set(Some(Utc::now().naive_utc()));
        tenure_action_am.archived_by = ActiveValue::Set(Some(archived_by.to_string()));

        Ok(Some(tenure_action_am.update(self.db).await?))
    }
}
