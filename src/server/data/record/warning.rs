use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::{
    data::{tag_eq, tag_in},
    model::db::WarningModel,
    util::tag::PlayerTag,
};

pub struct WarningRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WarningRepository<'a> {
    /// Creates a new instance of [`WarningRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a new, active warning
    pub async fn create(
        &self,
        clan_tag: &PlayerTag,
        player_tag: &PlayerTag,
        player_name: Option<String>,
        warning_note: String,
        created_by: String,
    ) -> Result<WarningModel, DbErr> {
        let now = Utc::now().naive_utc();
        let warning = entity::player_warning::ActiveModel {
            clan_tag: ActiveValue::Set(clan_tag.to_string()),
            player_tag: ActiveValue::Set(player_tag.to_string()),
            player_name: ActiveValue::Set(player_name),
            warning_note: ActiveValue::Set(warning_note),
            is_active: ActiveValue::Set(true),
            created_by: ActiveValue::Set(created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            archived_at: ActiveValue::Set(None),
            archived_by: ActiveValue::Set(None),
            ..Default::default()
        };

        warning.insert(self.db).await
    }

    /// Get every warning for a clan, active or not, oldest first
    pub async fn get_by_clan(
        &self,
        clan_tag: &PlayerTag,
        include_archived: bool,
    ) -> Result<Vec<WarningModel>, DbErr> {
        let mut query = entity::prelude::PlayerWarning::find()
            .filter(tag_eq(entity::player_warning::Column::ClanTag, clan_tag));

        if !include_archived {
            query = query.filter(entity::player_warning::Column::ArchivedAt.is_null());
        }

        query
            .order_by_asc(entity::player_warning::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Get warnings for any of the provided tags across all clans
    pub async fn get_by_tags(
        &self,
        player_tags: &[PlayerTag],
        include_archived: bool,
    ) -> Result<Vec<WarningModel>, DbErr> {
        if player_tags.is_empty() {
            return Ok(Vec::new());
        }

        let mut query = entity::prelude::PlayerWarning::find()
            .filter(tag_in(entity::player_warning::Column::PlayerTag, player_tags));

        if !include_archived {
            query = query.filter(entity::player_warning::Column::ArchivedAt.is_null());
        }

        query
            .order_by_asc(entity::player_warning::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Set the active flag of a warning
    ///
    /// # Returns
    /// - `Ok(Some(WarningModel))`: The updated warning
    /// - `Ok(None)`: No warning with the provided ID exists
    pub async fn set_active(&self, id: i32, is_active: bool) -> Result<Option<WarningModel>, DbErr> {
        let warning = match entity::prelude::PlayerWarning::find_by_id(id).one(self.db).await? {
            Some(warning) => warning,
            None => return Ok(None),
        };

        let mut warning_am = warning.into_active_model();
        warning_am.is_active = ActiveValue::Set(is_active);
        warning_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(warning_am.update(self.db).await?))
    }

    /// Archive a warning, see [`NoteRepository::archive`](super::note::NoteRepository::archive)
    pub async fn archive(&self, id: i32, archived_by: &str) -> Result<Option<WarningModel>, DbErr> {
        let warning = match entity::prelude::PlayerWarning::find_by_id(id).one(self.db).await? {
            Some(warning) => warning,
            None => return Ok(None),
        };

        if warning.archived_at.is_some() {
            return Ok(Some(warning));
        }

        let now = Utc::now().naive_utc();
        let mut warning_am = warning.into_active_model();
        warning_am.archived_at = ActiveValue::Set(Some(now));
        warning_am.archived_by = ActiveValue::Set(Some(archived_by.to_string()));
        warning_am.updated_at = ActiveValue::Set(now);

        Ok(Some(warning_am.update(self.db).await?))
    }
}
