//! Administrative record insertion utilities.

use chrono::NaiveDateTime;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{AliasLinkModel, DepartureActionModel, NoteModel, TenureActionModel, WarningModel},
    TestSetup,
};

pub struct RecordFixtures<'a> {
    pub setup: &'a TestSetup,
}

impl<'a> RecordFixtures<'a> {
    /// Insert a note, optionally already archived.
    pub async fn insert_note(
        &self,
        clan_tag: &str,
        player_tag: &str,
        player_name: Option<&str>,
        created_at: NaiveDateTime,
        archived: bool,
    ) -> Result<NoteModel, TestError> {
        Ok(
            entity::prelude::PlayerNote::insert(entity::player_note::ActiveModel {
                clan_tag: ActiveValue::Set(clan_tag.to_string()),
                player_tag: ActiveValue::Set(player_tag.to_string()),
                player_name: ActiveValue::Set(player_name.map(str::to_string)),
                note: ActiveValue::Set("Test note".to_string()),
                custom_fields: ActiveValue::Set(None),
                created_by: ActiveValue::Set("Test Leader".to_string()),
                created_at: ActiveValue::Set(created_at),
                updated_at: ActiveValue::Set(created_at),
                archived_at: ActiveValue::Set(archived.then_some(created_at)),
                archived_by: ActiveValue::Set(archived.then(|| "Test Leader".to_string())),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Insert a warning with the provided active flag.
    pub async fn insert_warning(
        &self,
        clan_tag: &str,
        player_tag: &str,
        player_name: Option<&str>,
        created_at: NaiveDateTime,
        is_active: bool,
    ) -> Result<WarningModel, TestError> {
        Ok(
            entity::prelude::PlayerWarning::insert(entity::player_warning::ActiveModel {
                clan_tag: ActiveValue::Set(clan_tag.to_string()),
                player_tag: ActiveValue::Set(player_tag.to_string()),
                player_name: ActiveValue::Set(player_name.map(str::to_string)),
                warning_note: ActiveValue::Set("Test warning".to_string()),
                is_active: ActiveValue::Set(is_active),
                created_by: ActiveValue::Set("Test Leader".to_string()),
                created_at: ActiveValue::Set(created_at),
                updated_at: ActiveValue::Set(created_at),
                archived_at: ActiveValue::Set(None),
                archived_by: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Insert a tenure grant.
    pub async fn insert_tenure_action(
        &self,
        clan_tag: &str,
        player_tag: &str,
        player_name: Option<&str>,
        created_at: NaiveDateTime,
    ) -> Result<TenureActionModel, TestError> {
        Ok(
            entity::prelude::PlayerTenureAction::insert(entity::player_tenure_action::ActiveModel {
                clan_tag: ActiveValue::Set(clan_tag.to_string()),
                player_tag: ActiveValue::Set(player_tag.to_string()),
                player_name: ActiveValue::Set(player_name.map(str::to_string)),
                action: ActiveValue::Set("granted".to_string()),
                reason: ActiveValue::Set(None),
                granted_by: ActiveValue::Set("Test Leader".to_string()),
                created_at: ActiveValue::Set(created_at),
                archived_at: ActiveValue::Set(None),
                archived_by: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Insert a voluntary departure.
    pub async fn insert_departure_action(
        &self,
        clan_tag: &str,
        player_tag: &str,
        player_name: Option<&str>,
        created_at: NaiveDateTime,
    ) -> Result<DepartureActionModel, TestError> {
        Ok(entity::prelude::PlayerDepartureAction::insert(
            entity::player_departure_action::ActiveModel {
                clan_tag: ActiveValue::Set(clan_tag.to_string()),
                player_tag: ActiveValue::Set(player_tag.to_string()),
                player_name: ActiveValue::Set(player_name.map(str::to_string)),
                departure_type: ActiveValue::Set("voluntary".to_string()),
                reason: ActiveValue::Set(None),
                recorded_by: ActiveValue::Set("Test Leader".to_string()),
                created_at: ActiveValue::Set(created_at),
                archived_at: ActiveValue::Set(None),
                archived_by: ActiveValue::Set(None),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }

    /// Insert a live alias link between two tags.
    pub async fn insert_alias_link(
        &self,
        clan_tag: &str,
        player_tag_1: &str,
        player_tag_2: &str,
        removed: bool,
    ) -> Result<AliasLinkModel, TestError> {
        let now = chrono::Utc::now().naive_utc();

        Ok(
            entity::prelude::PlayerAliasLink::insert(entity::player_alias_link::ActiveModel {
                clan_tag: ActiveValue::Set(clan_tag.to_string()),
                player_tag_1: ActiveValue::Set(player_tag_1.to_string()),
                player_tag_2: ActiveValue::Set(player_tag_2.to_string()),
                created_by: ActiveValue::Set("Test Leader".to_string()),
                created_at: ActiveValue::Set(now),
                removed_at: ActiveValue::Set(removed.then_some(now)),
                removed_by: ActiveValue::Set(removed.then(|| "Test Leader".to_string())),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }
}
