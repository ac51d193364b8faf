use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::{
    data::{tag_eq, tag_in},
    model::db::NoteModel,
    util::tag::PlayerTag,
};

pub struct NoteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NoteRepository<'a> {
    /// Creates a new instance of [`NoteRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        clan_tag: &PlayerTag,
        player_tag: &PlayerTag,
        player_name: Option<String>,
        note: String,
        custom_fields: Option<String>,
        created_by: String,
    ) -> Result<NoteModel, DbErr> {
        let now = Utc::now().naive_utc();
        let note = entity::player_note::ActiveModel {
            clan_tag: ActiveValue::Set(clan_tag.to_string()),
            player_tag: ActiveValue::Set(player_tag.to_string()),
            player_name: ActiveValue::Set(player_name),
            note: ActiveValue::Set(note),
            custom_fields: ActiveValue::Set(custom_fields),
            created_by: ActiveValue::Set(created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            archived_at: ActiveValue::Set(None),
            archived_by: ActiveValue::Set(None),
            ..Default::default()
        };

        note.insert(self.db).await
    }

    /// Get every note for a clan, oldest first
    ///
    /// # Arguments
    /// - `clan_tag`: Clan owning the notes
    /// - `include_archived`: Also return notes with `archived_at` set
    pub async fn get_by_clan(
        &self,
        clan_tag: &PlayerTag,
        include_archived: bool,
    ) -> Result<Vec<NoteModel>, DbErr> {
        let mut query = entity::prelude::PlayerNote::find()
            .filter(tag_eq(entity::player_note::Column::ClanTag, clan_tag));

        if !include_archived {
            query = query.filter(entity::player_note::Column::ArchivedAt.is_null());
        }

        query
            .order_by_asc(entity::player_note::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Get notes about any of the provided tags, regardless of the clan that wrote them
    pub async fn get_by_tags(
        &self,
        player_tags: &[PlayerTag],
        include_archived: bool,
    ) -> Result<Vec<NoteModel>, DbErr> {
        if player_tags.is_empty() {
            return Ok(Vec::new());
        }

        let mut query = entity::prelude::PlayerNote::find()
            .filter(tag_in(entity::player_note::Column::PlayerTag, player_tags));

        if !include_archived {
            query = query.filter(entity::player_note::Column::ArchivedAt.is_null());
        }

        query
            .order_by_asc(entity::player_note::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Archive a note
    ///
    /// # Returns
    /// - `Ok(Some(NoteModel))`: The archived note, unchanged if it was already archived
    /// - `Ok(None)`: No note with the provided ID exists
    pub async fn archive(&self, id: i32, archived_by: &str) -> Result<Option<NoteModel>, DbErr> {
        let note = match entity::prelude::PlayerNote::find_by_id(id).one(self.db).await? {
            Some(note) => note,
            None => return Ok(None),
        };

        if note.archived_at.is_some() {
            return Ok(Some(note));
        }

        let now = Utc::now().naive_utc();
        let mut note_am = note.into_active_model();
        note_am.archived_at = ActiveValue::Set(Some(now));
        note_am.archived_by = ActiveValue::Set(Some(archived_by.to_string()));
        note_am.updated_at = ActiveValue::Set(now);

        Ok(Some(note_am.update(self.db).await?))
    }
}
