use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::{
    data::tag_eq, model::db::DepartureActionModel, util::tag::PlayerTag,
};

pub struct DepartureActionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DepartureActionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        clan_tag: &PlayerTag,
        player_tag: &PlayerTag,
        player_name: Option<String>,
        departure_type: String,
        reason: Option<String>,
        recorded_by: String,
    ) -> Result<DepartureActionModel, DbErr> {
        let departure_action = entity::player_departure_action::ActiveModel {
            clan_tag: ActiveValue::Set(clan_tag.to_string()),
            player_tag: ActiveValue::Set(player_tag.to_string()),
            player_name: ActiveValue::Set(player_name),
            departure_type: ActiveValue::Set(departure_type),
            reason: ActiveValue::Set(reason),
            recorded_by: ActiveValue::Set(recorded_by),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            archived_at: ActiveValue::Set(None),
            archived_by: ActiveValue::Set(None),
            ..Default::default()
        };

        departure_action.insert(self.db).await
    }

    pub async fn get_by_clan(
        &self,
        clan_tag: &PlayerTag,
        include_archived: bool,
    ) -> Result<Vec<DepartureActionModel>, DbErr> {
        let mut query = entity::prelude::PlayerDepartureAction::find()
            .filter(tag_eq(entity::player_departure_action::Column::ClanTag, clan_tag));

        if !include_archived {
            query = query.filter(entity::player_departure_action::Column::ArchivedAt.is_null());
        }

        query
            .order_by_asc(entity::player_departure_action::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn archive(
        &self,
        id: i32,
        archived_by: &str,
    ) -> Result<Option<DepartureActionModel>, DbErr> {
        let departure_action = match entity::prelude::PlayerDepartureAction::find_by_id(id)
            .one(self.db)
            .await?
        {
            Some(departure_action) => departure_action,
            None => return Ok(None),
        };

        if departure_action.archived_at.is_some() {
            return Ok(Some(departure_action));
        }

        let mut departure_action_am = departure_action.into_active_model();
        departure_action_am.archived_at = ActiveValue::Set(Some(Utc::now().naive_utc()));
        departure_action_am.archived_by = ActiveValue::Set(Some(archived_by.to_string()));

        Ok(Some(departure_action_am.update(self.db).await?))
    }
}
